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

/// A publisher web property; zones hang off sites
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
  #[serde(rename = "Id", default)]
  pub id: Option<i64>,

  #[serde(rename = "Url")]
  pub url: String,

  #[serde(rename = "Title")]
  pub title: String,

  #[serde(rename = "IsDeleted", default, skip_serializing_if = "Option::is_none")]
  pub is_deleted: Option<bool>,

  /// Owning publisher account, only on networks that use publishers
  #[serde(rename = "PublisherAccountId", default, skip_serializing_if = "Option::is_none")]
  pub publisher_account_id: Option<i64>,
}

impl Site {
  pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
    Site {
      id: None,
      url: url.into(),
      title: title.into(),
      is_deleted: Some(false),
      publisher_account_id: None,
    }
  }
}

impl Resource for Site {
  const KIND: ResourceKind = ResourceKind::Site;
  const FIELDS: FieldSet = FieldSet::new(&[
    Field::required("Url"),
    Field::required("Title"),
    Field::optional("IsDeleted"),
    Field::optional("PublisherAccountId"),
  ]);

  fn id(&self) -> Option<i64> {
    self.id
  }
}

impl std::fmt::Display for Site {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "<Site {} <{}-{}>>", display_id(self.id), self.title, self.url)
  }
}
