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

//! # adzerk-client
//!
//! An async client for the Adzerk management API.
//!
//! ## Features
//!
//! - **Typed resources**: sites, zones, advertisers, flights, priorities,
//!   creatives, creative flight maps, channels, publishers and campaigns
//! - **One CRUD surface**: `list`, `get`, `create`, `update` and
//!   `update_with` work the same for every resource
//! - **Nested records**: campaigns carry their flights; flight creative maps
//!   carry a full creative or an id-only stub
//! - **Rate limiting**: a shared client-side limiter paces every call
//!
//! ## Usage
//!
//! ```rust,no_run
//! use adzerk_client::{AdzerkClient, Config, Zone};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AdzerkClient::new(Config::from_env()?)?;
//!
//!     let zone = client.zones().create(&Zone::new("sidebar", 12)).await?;
//!     println!("created {}", zone);
//!
//!     let mut flight = client.flights().get(55).await?;
//!     client.flights().update_with(&mut flight, |f| f.is_active = false).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Wire format
//!
//! Writes are sent as `application/x-www-form-urlencoded` with a single pair
//! whose key is the resource name and whose value is the JSON item, e.g.
//! `zone={"Id":null,"Name":"sidebar",...}`. The API key goes in the
//! `X-Adzerk-ApiKey` header.
//!
//! ## Error Handling
//!
//! All methods return `Result<T, adzerk_core::Error>`. Unknown ids surface as
//! `Error::NotFound`, incomplete records as `Error::MissingField` before any
//! request is made.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use adzerk_core::{Config, Error, Result};
pub use adzerk_models::*;
pub use client::AdzerkClient;

// Re-export endpoint types for direct access if needed
pub use endpoints::{creative_map::CreativeMapEndpoints, resource::ResourceEndpoints};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_client_creation() {
    let config = Config::default_with_key("test_key".to_string());
    assert_eq!(config.api_key, "test_key");
    assert!(AdzerkClient::new(config).is_ok());
  }
}
