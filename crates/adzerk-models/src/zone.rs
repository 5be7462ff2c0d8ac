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

/// An ad slot on a site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
  #[serde(rename = "Id", default)]
  pub id: Option<i64>,

  #[serde(rename = "Name")]
  pub name: String,

  #[serde(rename = "SiteId")]
  pub site_id: i64,

  #[serde(rename = "IsDeleted", default, skip_serializing_if = "Option::is_none")]
  pub is_deleted: Option<bool>,
}

impl Zone {
  pub fn new(name: impl Into<String>, site_id: i64) -> Self {
    Zone { id: None, name: name.into(), site_id, is_deleted: Some(false) }
  }
}

impl Resource for Zone {
  const KIND: ResourceKind = ResourceKind::Zone;
  const FIELDS: FieldSet = FieldSet::new(&[
    Field::required("Name"),
    Field::required("SiteId"),
    Field::optional("IsDeleted"),
  ]);

  fn id(&self) -> Option<i64> {
    self.id
  }
}

impl std::fmt::Display for Zone {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "<Zone {} <{} on {}>>", display_id(self.id), self.name, self.site_id)
  }
}
