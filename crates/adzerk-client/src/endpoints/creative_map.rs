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

//! Creatives placed in a flight, addressed under their parent flight:
//! `flight/{FlightId}/creative[/{Id}]`.

use super::{impl_endpoint_base, parse_item, parse_list, DirectRateLimiter, EndpointBase};
use crate::transport::Transport;
use adzerk_core::{Error, Result};
use adzerk_models::{CreativeFlightMap, Flight, Resource};
use std::sync::Arc;
use tracing::{info, instrument};

/// Endpoints for the creative maps owned by a flight
pub struct CreativeMapEndpoints {
  transport: Arc<Transport>,
  rate_limiter: Arc<DirectRateLimiter>,
}

impl CreativeMapEndpoints {
  /// Create a new creative map endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: Arc<DirectRateLimiter>) -> Self {
    Self { transport, rate_limiter }
  }

  /// Every creative placed in `flight_id`
  #[instrument(skip(self))]
  pub async fn list(&self, flight_id: i64) -> Result<Vec<CreativeFlightMap>> {
    self.wait_for_rate_limit().await?;

    let flight_id = flight_id.to_string();
    let body = self.transport.get(&[Flight::name(), &flight_id, CreativeFlightMap::name()]).await?;
    parse_list(body)
  }

  /// One placement by id within `flight_id`
  #[instrument(skip(self))]
  pub async fn get(&self, flight_id: i64, map_id: i64) -> Result<CreativeFlightMap> {
    self.wait_for_rate_limit().await?;

    let (flight_id, map_id) = (flight_id.to_string(), map_id.to_string());
    let body = self
      .transport
      .get(&[Flight::name(), &flight_id, CreativeFlightMap::name(), &map_id])
      .await?;
    parse_item(body)
  }

  /// Place a creative in the flight named by `map.flight_id`.
  ///
  /// A full `Creative` in the map is created along with the placement; a
  /// stub refers to an existing creative.
  #[instrument(skip(self, map), fields(flight_id = map.flight_id))]
  pub async fn create(&self, map: &CreativeFlightMap) -> Result<CreativeFlightMap> {
    let item = map.to_item()?;
    self.wait_for_rate_limit().await?;

    let flight_id = map.flight_id.to_string();
    let body = self
      .transport
      .post(&[Flight::name(), &flight_id, CreativeFlightMap::name()], CreativeFlightMap::name(), &item)
      .await?;
    let created: CreativeFlightMap = parse_item(body)?;
    info!("Mapped creative {:?} into flight {}", created.creative.id(), created.flight_id);
    Ok(created)
  }

  /// Send the full placement and return the server's copy; requires an id.
  #[instrument(skip(self, map), fields(flight_id = map.flight_id, id = ?map.id))]
  pub async fn update(&self, map: &CreativeFlightMap) -> Result<CreativeFlightMap> {
    let map_id = map.id.ok_or_else(|| Error::MissingField("CreativeFlightMap: Id".to_string()))?;
    let item = map.to_item()?;
    self.wait_for_rate_limit().await?;

    let (flight_id, map_id) = (map.flight_id.to_string(), map_id.to_string());
    let body = self
      .transport
      .put(
        &[Flight::name(), &flight_id, CreativeFlightMap::name(), &map_id],
        CreativeFlightMap::name(),
        &item,
      )
      .await?;
    parse_item(body)
  }

  /// Same contract as [`ResourceEndpoints::update_with`](super::resource::ResourceEndpoints::update_with)
  pub async fn update_with<F>(&self, map: &mut CreativeFlightMap, change: F) -> Result<()>
  where
    F: FnOnce(&mut CreativeFlightMap),
  {
    let mut draft = map.clone();
    change(&mut draft);
    *map = self.update(&draft).await?;
    Ok(())
  }
}

impl_endpoint_base!(CreativeMapEndpoints);

#[cfg(test)]
mod tests {
  use super::*;
  use adzerk_models::CreativeRef;
  use governor::{Quota, RateLimiter};
  use std::num::NonZeroU32;

  fn create_test_endpoints() -> CreativeMapEndpoints {
    let transport = Arc::new(Transport::new_mock());
    let quota = Quota::per_minute(NonZeroU32::new(120).unwrap());
    CreativeMapEndpoints::new(transport, Arc::new(RateLimiter::direct(quota)))
  }

  #[tokio::test]
  async fn test_update_requires_id() {
    let endpoints = create_test_endpoints();
    let map = CreativeFlightMap::new(CreativeRef::stub(77), 55, 10);
    assert!(matches!(endpoints.update(&map).await, Err(Error::MissingField(_))));
  }
}
