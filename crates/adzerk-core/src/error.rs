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

use thiserror::Error;

/// The main error type for adzerk-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key error
  #[error("Failed to retrieve API key: {0}")]
  ApiKey(String),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// Date/Time parsing error
  #[error("Date parsing error: {0}")]
  ParseDate(#[from] chrono::ParseError),

  /// Required attribute(s) missing from an item, formatted as `Resource: A, B`
  #[error("Missing required attributes: {0}")]
  MissingField(String),

  /// A value outside the set the API accepts
  #[error("Invalid value: {0}")]
  InvalidValue(String),

  /// The requested resource does not exist
  #[error("Not found: {0}")]
  NotFound(String),

  /// The API asked us to slow down
  #[error("Rate limit exceeded: {0}")]
  RateLimit(String),

  /// Any status other than 200 that has no dedicated variant
  #[error("Unexpected response status {status}: {body}")]
  UnexpectedStatus { status: u16, body: String },

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Response body could not be understood
  #[error("Parse error: {0}")]
  Parse(String),
}

impl Error {
  /// True for failures worth retrying on an idempotent request
  pub fn is_transient(&self) -> bool {
    match self {
      Error::Http(_) | Error::RateLimit(_) => true,
      Error::UnexpectedStatus { status, .. } => *status >= 500,
      _ => false,
    }
  }
}

/// Result type alias for adzerk-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_transient_classification() {
    assert!(Error::Http("connection reset".to_string()).is_transient());
    assert!(Error::UnexpectedStatus { status: 503, body: String::new() }.is_transient());
    assert!(!Error::UnexpectedStatus { status: 401, body: String::new() }.is_transient());
    assert!(!Error::NotFound("flight/9".to_string()).is_transient());
  }

  #[test]
  fn test_missing_field_message() {
    let err = Error::MissingField("Zone: Name, SiteId".to_string());
    assert_eq!(err.to_string(), "Missing required attributes: Zone: Name, SiteId");
  }
}
