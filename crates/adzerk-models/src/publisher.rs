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

/// A third party that owns sites and gets paid for their inventory
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Publisher {
  #[serde(rename = "Id", default)]
  pub id: Option<i64>,

  #[serde(rename = "FirstName", default, skip_serializing_if = "Option::is_none")]
  pub first_name: Option<String>,

  #[serde(rename = "LastName", default, skip_serializing_if = "Option::is_none")]
  pub last_name: Option<String>,

  #[serde(rename = "CompanyName", default, skip_serializing_if = "Option::is_none")]
  pub company_name: Option<String>,

  #[serde(rename = "PaypalEmail", default, skip_serializing_if = "Option::is_none")]
  pub paypal_email: Option<String>,

  #[serde(rename = "PaymentOption", default, skip_serializing_if = "Option::is_none")]
  pub payment_option: Option<String>,

  #[serde(rename = "IsDeleted")]
  pub is_deleted: bool,
}

impl Publisher {
  /// Company name if set, otherwise "First Last" from whatever parts exist
  pub fn display_name(&self) -> String {
    if let Some(company) = self.company_name.as_deref().filter(|c| !c.is_empty()) {
      return company.to_string();
    }
    [self.first_name.as_deref(), self.last_name.as_deref()]
      .into_iter()
      .flatten()
      .collect::<Vec<_>>()
      .join(" ")
  }
}

impl Resource for Publisher {
  const KIND: ResourceKind = ResourceKind::Publisher;
  const FIELDS: FieldSet = FieldSet::new(&[
    Field::optional("FirstName"),
    Field::optional("LastName"),
    Field::optional("CompanyName"),
    Field::optional("PaypalEmail"),
    Field::optional("PaymentOption"),
    Field::required("IsDeleted"),
  ]);

  fn id(&self) -> Option<i64> {
    self.id
  }
}

impl std::fmt::Display for Publisher {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "<Publisher {} <{}>>", display_id(self.id), self.display_name())
  }
}
