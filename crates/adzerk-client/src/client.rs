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

//! The client entry point

use crate::endpoints::{creative_map::CreativeMapEndpoints, resource::ResourceEndpoints, DirectRateLimiter};
use crate::transport::Transport;
use adzerk_core::{Config, Result};
use adzerk_models::{
  Advertiser, Campaign, Channel, Creative, Flight, Priority, Publisher, Resource, Site, Zone,
};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Main Adzerk API client
///
/// Provides access to every management resource through typed endpoint
/// handles. Handles authentication and rate limiting automatically; the
/// handles are cheap and share one transport and one limiter.
///
/// # Examples
///
/// ```rust,no_run
/// use adzerk_client::AdzerkClient;
/// use adzerk_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = AdzerkClient::new(Config::from_env()?)?;
///
///     let campaign = client.campaigns().get(10).await?;
///     for flight in &campaign.flights {
///         println!("{} caps at {:?}", flight, flight.frequency_cap());
///     }
///
///     Ok(())
/// }
/// ```
pub struct AdzerkClient {
  rate_limiter: Arc<DirectRateLimiter>,
  transport: Arc<Transport>,
}

impl AdzerkClient {
  /// Create a new Adzerk API client
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created or the API key
  /// cannot be sent as a header.
  pub fn new(config: Config) -> Result<Self> {
    // Zero would stall every request; fall back to the default
    let rate_limit = NonZeroU32::new(config.rate_limit)
      .or(NonZeroU32::new(adzerk_core::DEFAULT_RATE_LIMIT))
      .unwrap_or(NonZeroU32::MIN);
    let rate_limiter = Arc::new(RateLimiter::direct(Quota::per_minute(rate_limit)));

    let transport = Arc::new(Transport::new(&config)?);

    Ok(Self { transport, rate_limiter })
  }

  /// Create a new client with a caller-supplied rate limiter, e.g. one
  /// shared with other clients on the same key.
  pub fn with_rate_limiter(config: Config, rate_limiter: Arc<DirectRateLimiter>) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(&config)?), rate_limiter })
  }

  /// Endpoints for any top-level resource
  pub fn resource<R: Resource>(&self) -> ResourceEndpoints<R> {
    ResourceEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Site endpoints
  pub fn sites(&self) -> ResourceEndpoints<Site> {
    self.resource()
  }

  /// Zone endpoints
  pub fn zones(&self) -> ResourceEndpoints<Zone> {
    self.resource()
  }

  /// Advertiser endpoints, including title search
  pub fn advertisers(&self) -> ResourceEndpoints<Advertiser> {
    self.resource()
  }

  /// Flight endpoints; use `update_with` for cap changes
  pub fn flights(&self) -> ResourceEndpoints<Flight> {
    self.resource()
  }

  /// Priority endpoints
  pub fn priorities(&self) -> ResourceEndpoints<Priority> {
    self.resource()
  }

  /// Creative endpoints
  pub fn creatives(&self) -> ResourceEndpoints<Creative> {
    self.resource()
  }

  /// Creatives placed in flights, addressed through their parent flight
  pub fn creative_maps(&self) -> CreativeMapEndpoints {
    CreativeMapEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Channel endpoints
  pub fn channels(&self) -> ResourceEndpoints<Channel> {
    self.resource()
  }

  /// Publisher endpoints
  pub fn publishers(&self) -> ResourceEndpoints<Publisher> {
    self.resource()
  }

  /// Campaign endpoints; campaigns carry their flights inline
  pub fn campaigns(&self) -> ResourceEndpoints<Campaign> {
    self.resource()
  }

  /// Wait for rate limit to allow next request
  ///
  /// Endpoints already do this; useful when pacing work around the client.
  pub async fn wait_for_rate_limit(&self) -> Result<()> {
    self.rate_limiter.until_ready().await;
    Ok(())
  }
}

impl std::fmt::Debug for AdzerkClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AdzerkClient")
      .field("transport", &self.transport)
      .field("rate_limiter", &"RateLimiter")
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::EndpointBase;

  #[test]
  fn test_client_creation() {
    let config = Config::default_with_key("test_key".to_string());
    let client = AdzerkClient::new(config).expect("Failed to create client");
    assert_eq!(client.sites().transport().base_url(), "https://api.adzerk.net/v1");
  }

  #[test]
  fn test_zero_rate_limit_falls_back() {
    let mut config = Config::default_with_key("test_key".to_string());
    config.rate_limit = 0;
    assert!(AdzerkClient::new(config).is_ok());
  }

  #[test]
  fn test_debug_hides_internals() {
    let client = AdzerkClient::new(Config::default_with_key("secret_key".to_string())).unwrap();
    let rendered = format!("{:?}", client);
    assert!(rendered.contains("AdzerkClient"));
    assert!(!rendered.contains("secret_key"));
  }
}
