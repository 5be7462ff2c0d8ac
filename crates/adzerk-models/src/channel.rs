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
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sales channel grouping priorities and the ad types it accepts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
  #[serde(rename = "Id", default)]
  pub id: Option<i64>,

  #[serde(rename = "Title")]
  pub name: String,

  #[serde(rename = "Commission")]
  pub commission: Decimal,

  #[serde(rename = "Engine")]
  pub engine: i32,

  /// Comma separated; the API sends `null` when there are none
  #[serde(rename = "Keywords")]
  pub keywords: Option<String>,

  #[serde(rename = "CPM")]
  pub cpm: Decimal,

  #[serde(rename = "AdTypes")]
  pub ad_types: Vec<i64>,

  #[serde(rename = "IsDeleted", default, skip_serializing_if = "Option::is_none")]
  pub is_deleted: Option<bool>,
}

impl Channel {
  /// Keywords split on commas, trimmed, empties dropped
  pub fn keyword_list(&self) -> Vec<&str> {
    let keywords = self.keywords.as_deref().unwrap_or_default();
    keywords.split(',').map(str::trim).filter(|k| !k.is_empty()).collect()
  }
}

impl Resource for Channel {
  const KIND: ResourceKind = ResourceKind::Channel;
  const FIELDS: FieldSet = FieldSet::new(&[
    Field::required("Title"),
    Field::required("Commission"),
    Field::required("Engine"),
    Field::required("Keywords"),
    Field::required("CPM"),
    Field::required("AdTypes"),
    Field::optional("IsDeleted"),
  ]);

  fn id(&self) -> Option<i64> {
    self.id
  }
}

impl std::fmt::Display for Channel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "<Channel {} <{}>>", display_id(self.id), self.name)
  }
}
