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

//! Configuration management for the Adzerk client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the Adzerk client
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
  /// Adzerk API key, sent as `X-Adzerk-ApiKey`
  pub api_key: String,

  /// Base URL for the management API
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Maximum retries for idempotent requests
  pub max_retries: u32,

  /// Client-side rate limit (requests per minute)
  pub rate_limit: u32,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key = env::var("ADZERK_API_KEY")
      .map_err(|_| Error::ApiKey("ADZERK_API_KEY not set".to_string()))?;

    let base_url = env::var("ADZERK_BASE_URL").unwrap_or_else(|_| crate::ADZERK_BASE_URL.to_string());

    let timeout_secs = parse_var("ADZERK_TIMEOUT_SECS", 30)?;
    let max_retries = parse_var("ADZERK_MAX_RETRIES", 2)?;
    let rate_limit = parse_var("ADZERK_RATE_LIMIT", crate::DEFAULT_RATE_LIMIT)?;

    Ok(Config { api_key, base_url, timeout_secs, max_retries, rate_limit })
  }

  /// Create a config with default values (for testing and embedding)
  pub fn default_with_key(api_key: String) -> Self {
    Config {
      api_key,
      base_url: crate::ADZERK_BASE_URL.to_string(),
      timeout_secs: 30,
      max_retries: 2,
      rate_limit: crate::DEFAULT_RATE_LIMIT,
    }
  }

  /// Same config pointed at another base URL, e.g. a mock server
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
  match env::var(name) {
    Ok(raw) => raw.trim().parse().map_err(|_| Error::Config(format!("Invalid {}", name))),
    Err(_) => Ok(default),
  }
}

// The key never shows up in logs.
impl std::fmt::Debug for Config {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Config")
      .field("api_key", &"***")
      .field("base_url", &self.base_url)
      .field("timeout_secs", &self.timeout_secs)
      .field("max_retries", &self.max_retries)
      .field("rate_limit", &self.rate_limit)
      .finish()
  }
}
