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

//! The generic marshaling contract shared by every record type

use adzerk_core::{FieldSet, ResourceKind, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A record backed by one REST collection.
///
/// Implementors only declare their kind, field set and id; conversion to and
/// from wire items is shared. Items are validated against `FIELDS` in both
/// directions so a missing attribute is reported by name instead of as a
/// generic deserialization failure. Responses only need every required key;
/// outgoing items also need a non-null value for each.
pub trait Resource: Serialize + DeserializeOwned + Clone + std::fmt::Debug + Send + Sync {
  const KIND: ResourceKind;
  const FIELDS: FieldSet;

  /// Server-assigned identifier, `None` until the record is created.
  fn id(&self) -> Option<i64>;

  /// URL segment and form key
  fn name() -> &'static str {
    Self::KIND.name()
  }

  /// Build a record from a response item.
  fn from_item(item: Value) -> Result<Self> {
    Self::FIELDS.validate_response(&Self::KIND.to_string(), &item)?;
    Ok(serde_json::from_value(item)?)
  }

  /// Wire item for a create or update, refusing items with required
  /// attributes left null.
  fn to_item(&self) -> Result<Value> {
    let item = serde_json::to_value(self)?;
    Self::FIELDS.validate(&Self::KIND.to_string(), &item)?;
    Ok(item)
  }
}

/// Envelope returned by list calls
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEnvelope {
  #[serde(rename = "Items", default)]
  pub items: Option<Vec<Value>>,
}

impl ListEnvelope {
  /// Items, treating a missing or null list as empty
  pub fn into_items(self) -> Vec<Value> {
    self.items.unwrap_or_default()
  }
}

/// Render an id for `Display` output.
pub(crate) fn display_id(id: Option<i64>) -> String {
  id.map_or_else(|| "new".to_string(), |id| id.to_string())
}
