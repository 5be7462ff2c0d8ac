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

//! Declarative field sets describing each resource's wire attributes.
//!
//! A `FieldSet` lists the attribute names a resource carries and which of
//! them may be absent. The same description is used to reject incomplete
//! items before they are sent and to reject incomplete items coming back
//! from the API. Outgoing items must carry a value for every required
//! attribute; responses only need the key, since the API reports unset
//! attributes as `null`. `Id` is implicit on every resource and never listed.

use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// A single wire attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
  pub name: &'static str,
  pub optional: bool,
}

impl Field {
  pub const fn required(name: &'static str) -> Self {
    Field { name, optional: false }
  }

  pub const fn optional(name: &'static str) -> Self {
    Field { name, optional: true }
  }
}

/// The ordered attribute schema of one resource type
#[derive(Debug, Clone, Copy)]
pub struct FieldSet {
  pub fields: &'static [Field],
}

impl FieldSet {
  pub const fn new(fields: &'static [Field]) -> Self {
    FieldSet { fields }
  }

  pub fn contains(&self, name: &str) -> bool {
    self.fields.iter().any(|f| f.name == name)
  }

  pub fn required(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.fields.iter().filter(|f| !f.optional).map(|f| f.name)
  }

  pub fn optional(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.fields.iter().filter(|f| f.optional).map(|f| f.name)
  }

  /// Required names that are absent or null in `item`, in field-set order.
  pub fn missing(&self, item: &Map<String, Value>) -> Vec<&'static str> {
    self
      .required()
      .filter(|name| item.get(*name).map_or(true, Value::is_null))
      .collect()
  }

  /// Required names whose key is absent from `item`; `null` values count as present.
  pub fn absent(&self, item: &Map<String, Value>) -> Vec<&'static str> {
    self.required().filter(|name| !item.contains_key(*name)).collect()
  }

  /// Keys present in `item` that this set does not describe.
  pub fn unknown(&self, item: &Map<String, Value>) -> Vec<String> {
    item.keys().filter(|k| k.as_str() != "Id" && !self.contains(k)).cloned().collect()
  }

  /// Check an outgoing item: every required attribute present and non-null.
  pub fn validate(&self, resource: &str, item: &Value) -> Result<()> {
    let object = as_object(resource, item)?;
    report(resource, self.missing(object))
  }

  /// Check a response item: every required key present, values unchecked.
  pub fn validate_response(&self, resource: &str, item: &Value) -> Result<()> {
    let object = as_object(resource, item)?;
    report(resource, self.absent(object))
  }
}

fn as_object<'a>(resource: &str, item: &'a Value) -> Result<&'a Map<String, Value>> {
  item.as_object().ok_or_else(|| Error::Parse(format!("{} item is not a JSON object", resource)))
}

fn report(resource: &str, missing: Vec<&'static str>) -> Result<()> {
  if missing.is_empty() {
    Ok(())
  } else {
    Err(Error::MissingField(format!("{}: {}", resource, missing.join(", "))))
  }
}
