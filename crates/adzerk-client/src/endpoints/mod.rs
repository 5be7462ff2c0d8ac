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

//! Endpoint handles and the rate-limit plumbing they share

pub mod advertiser;
pub mod creative_map;
pub mod resource;

use crate::transport::Transport;
use adzerk_core::Result;
use adzerk_models::Resource;
use governor::{
  clock::DefaultClock,
  middleware::NoOpMiddleware,
  state::{InMemoryState, NotKeyed},
  RateLimiter,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// The unkeyed limiter shared by every endpoint of one client
pub type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub trait EndpointBase {
  /// Wait for rate limit before making a request
  async fn wait_for_rate_limit(&self) -> Result<()>;

  /// Get a reference to the transport layer
  fn transport(&self) -> &Arc<Transport>;
}

/// Macro to implement the EndpointBase trait for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident $(<$generic:ident : $bound:path>)?) => {
    impl$(<$generic: $bound>)? EndpointBase for $struct_name$(<$generic>)? {
      async fn wait_for_rate_limit(&self) -> Result<()> {
        self.rate_limiter.until_ready().await;
        Ok(())
      }

      fn transport(&self) -> &Arc<Transport> {
        &self.transport
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

/// Parse one response item, noting attributes the field set does not know.
pub(crate) fn parse_item<R: Resource>(item: Value) -> Result<R> {
  if let Some(object) = item.as_object() {
    let unknown = R::FIELDS.unknown(object);
    if !unknown.is_empty() {
      debug!("{} item carries undescribed attributes: {}", R::KIND, unknown.join(", "));
    }
  }
  R::from_item(item)
}

/// Parse a `{"Items": [...]}` envelope into records.
pub(crate) fn parse_list<R: Resource>(body: Value) -> Result<Vec<R>> {
  let envelope: adzerk_models::ListEnvelope = serde_json::from_value(body)?;
  envelope.into_items().into_iter().map(parse_item::<R>).collect()
}
