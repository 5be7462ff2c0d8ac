/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use crate::resource::{display_id, Resource};
use adzerk_core::{Field, FieldSet, ResourceKind};
use serde::{Deserialize, Serialize};

/// Ordering tier for flights inside a channel; lower weight wins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Priority {
  #[serde(rename = "Id", default)]
  pub id: Option<i64>,

  #[serde(rename = "Name")]
  pub name: String,

  #[serde(rename = "ChannelId")]
  pub channel_id: i64,

  #[serde(rename = "Weight")]
  pub weight: i32,

  #[serde(rename = "IsDeleted")]
  pub is_deleted: bool,
}

impl Priority {
  pub fn new(name: impl Into<String>, channel_id: i64, weight: i32) -> Self {
    Priority { id: None, name: name.into(), channel_id, weight, is_deleted: false }
  }
}

impl Resource for Priority {
  const KIND: ResourceKind = ResourceKind::Priority;
  const FIELDS: FieldSet = FieldSet::new(&[
    Field::required("Name"),
    Field::required("ChannelId"),
    Field::required("Weight"),
    Field::required("IsDeleted"),
  ]);

  fn id(&self) -> Option<i64> {
    self.id
  }
}

impl std::fmt::Display for Priority {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "<Priority {} <Weight {} - Channel {}>>",
      display_id(self.id),
      self.weight,
      self.channel_id
    )
  }
}
