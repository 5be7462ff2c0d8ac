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

//! HTTP transport layer for Adzerk API requests

use adzerk_core::{Config, Error, Result, API_KEY_HEADER};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use url::Url;

/// Form content type used for every write
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// First retry delay; doubles on each further attempt
const RETRY_BASE_DELAY_MS: u64 = 250;

/// HTTP transport layer for making requests to the Adzerk API
pub struct Transport {
  client: Client,
  base_url: String,
  max_retries: u32,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let mut headers = HeaderMap::new();
    let mut key = HeaderValue::from_str(&config.api_key)
      .map_err(|_| Error::ApiKey("API key contains characters not allowed in a header".to_string()))?;
    key.set_sensitive(true);
    let name = HeaderName::from_bytes(API_KEY_HEADER.as_bytes())
      .map_err(|e| Error::Config(format!("Invalid header name: {}", e)))?;
    headers.insert(name, key);

    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent(concat!("adzerk-client/", env!("CARGO_PKG_VERSION")))
      .default_headers(headers)
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self {
      client,
      base_url: config.base_url.trim_end_matches('/').to_string(),
      max_retries: config.max_retries,
    })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    Self::new(&Config::default_with_key("test_key".to_string()).with_base_url("https://mock.adzerk.net/v1"))
      .expect("mock transport")
  }

  /// GET `segments` and return the parsed JSON body
  #[instrument(skip(self), fields(path = %segments.join("/")))]
  pub async fn get(&self, segments: &[&str]) -> Result<Value> {
    let url = self.build_url(segments)?;
    self.send_with_retry(Method::GET, &url, None).await
  }

  /// POST `item` wrapped as `form_key=<json>`. Never retried.
  #[instrument(skip(self, item), fields(path = %segments.join("/")))]
  pub async fn post(&self, segments: &[&str], form_key: &str, item: &Value) -> Result<Value> {
    let url = self.build_url(segments)?;
    let body = encode_form(form_key, item)?;
    self.send_once(Method::POST, &url, Some(body)).await
  }

  /// PUT `item` wrapped as `form_key=<json>`
  #[instrument(skip(self, item), fields(path = %segments.join("/")))]
  pub async fn put(&self, segments: &[&str], form_key: &str, item: &Value) -> Result<Value> {
    let url = self.build_url(segments)?;
    let body = encode_form(form_key, item)?;
    self.send_with_retry(Method::PUT, &url, Some(body)).await
  }

  /// Build the full URL for an API request
  fn build_url(&self, segments: &[&str]) -> Result<Url> {
    let raw = format!("{}/{}", self.base_url, segments.join("/"));
    Url::parse(&raw).map_err(|e| Error::Http(format!("Invalid URL {}: {}", raw, e)))
  }

  async fn send_with_retry(&self, method: Method, url: &Url, body: Option<String>) -> Result<Value> {
    let mut attempt = 0;

    loop {
      if attempt > 0 {
        let delay = Duration::from_millis(RETRY_BASE_DELAY_MS * 2_u64.pow(attempt - 1));
        warn!("Retrying {} {} in {}ms (attempt {})", method, url, delay.as_millis(), attempt + 1);
        tokio::time::sleep(delay).await;
      }

      match self.send_once(method.clone(), url, body.clone()).await {
        Err(e) if e.is_transient() && attempt < self.max_retries => {
          warn!("Request failed (attempt {}): {}", attempt + 1, e);
          attempt += 1;
        }
        result => return result,
      }
    }
  }

  async fn send_once(&self, method: Method, url: &Url, body: Option<String>) -> Result<Value> {
    debug!("{} {}", method, url);

    let mut request = self.client.request(method, url.clone());
    if let Some(body) = body {
      request = request.header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(body);
    }

    let response = request.send().await.map_err(|e| Error::Http(format!("Request failed: {}", e)))?;
    let status = response.status().as_u16();
    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

    debug!("Response status {} with {} bytes", status, text.len());
    handle_response(status, &text, url.path())
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.base_url)
      .field("max_retries", &self.max_retries)
      .finish()
  }
}

/// Wrap an item as the single form pair the API expects: `name=<json>`.
pub fn encode_form(form_key: &str, item: &Value) -> Result<String> {
  let json = serde_json::to_string(item)?;
  Ok(url::form_urlencoded::Serializer::new(String::new()).append_pair(form_key, &json).finish())
}

/// Map a status and body to a parsed item or the matching error.
///
/// The API answers 400 for ids it does not know, so 400 and 404 both mean
/// "not found".
pub fn handle_response(status: u16, body: &str, path: &str) -> Result<Value> {
  match status {
    200 => serde_json::from_str(body).map_err(|e| {
      error!("Failed to parse JSON response: {}", e);
      let preview: String = body.chars().take(200).collect();
      Error::Parse(format!("bad response from {}: {}", path, preview))
    }),
    400 | 404 => Err(Error::NotFound(path.to_string())),
    429 => Err(Error::RateLimit(format!("throttled on {}", path))),
    _ => {
      error!("Request to {} failed with status {}", path, status);
      Err(Error::UnexpectedStatus { status, body: body.to_string() })
    }
  }
}
