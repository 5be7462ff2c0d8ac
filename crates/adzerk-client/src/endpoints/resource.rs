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

//! Generic CRUD over the top-level collections

use super::{impl_endpoint_base, parse_item, parse_list, DirectRateLimiter, EndpointBase};
use crate::transport::Transport;
use adzerk_core::{Error, Result};
use adzerk_models::Resource;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{info, instrument};

/// CRUD endpoints for one top-level collection (`/site`, `/flight`, ...)
///
/// The same implementation serves every resource; `R` supplies the URL
/// segment, form key and field set.
pub struct ResourceEndpoints<R: Resource> {
  transport: Arc<Transport>,
  rate_limiter: Arc<DirectRateLimiter>,
  _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceEndpoints<R> {
  /// Create a new endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: Arc<DirectRateLimiter>) -> Self {
    Self { transport, rate_limiter, _resource: PhantomData }
  }

  /// Fetch every record in the collection
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use adzerk_client::AdzerkClient;
  /// # async fn run(client: AdzerkClient) -> adzerk_core::Result<()> {
  /// for site in client.sites().list().await? {
  ///     println!("{}", site);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self), fields(resource = R::name()))]
  pub async fn list(&self) -> Result<Vec<R>> {
    self.wait_for_rate_limit().await?;

    let body = self.transport.get(&[R::name()]).await?;
    parse_list(body)
  }

  /// Fetch one record by id
  #[instrument(skip(self), fields(resource = R::name()))]
  pub async fn get(&self, id: i64) -> Result<R> {
    self.wait_for_rate_limit().await?;

    let id = id.to_string();
    let body = self.transport.get(&[R::name(), &id]).await?;
    parse_item(body)
  }

  /// Create a record and return it as stored, with its new id.
  ///
  /// The item is checked against the field set before anything is sent.
  #[instrument(skip(self, record), fields(resource = R::name()))]
  pub async fn create(&self, record: &R) -> Result<R> {
    let item = record.to_item()?;
    self.wait_for_rate_limit().await?;

    let body = self.transport.post(&[R::name()], R::name(), &item).await?;
    let created: R = parse_item(body)?;
    info!("Created {} {:?}", R::KIND, created.id());
    Ok(created)
  }

  /// Send the full record and return the server's copy.
  #[instrument(skip(self, record), fields(resource = R::name(), id = ?record.id()))]
  pub async fn update(&self, record: &R) -> Result<R> {
    let id = record.id().ok_or_else(|| Error::MissingField(format!("{}: Id", R::KIND)))?;
    let item = record.to_item()?;
    self.wait_for_rate_limit().await?;

    let id = id.to_string();
    let body = self.transport.put(&[R::name(), &id], R::name(), &item).await?;
    parse_item(body)
  }

  /// Apply `change` and push it; `record` is only touched if the update
  /// succeeds, in which case it becomes the server's copy.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use adzerk_client::AdzerkClient;
  /// # async fn run(client: AdzerkClient) -> adzerk_core::Result<()> {
  /// let flights = client.flights();
  /// let mut flight = flights.get(55).await?;
  /// flights.update_with(&mut flight, |f| f.set_daily_cap(3)).await?;
  /// # Ok(())
  /// # }
  /// ```
  pub async fn update_with<F>(&self, record: &mut R, change: F) -> Result<()>
  where
    F: FnOnce(&mut R),
  {
    let mut draft = record.clone();
    change(&mut draft);
    *record = self.update(&draft).await?;
    Ok(())
  }
}

impl_endpoint_base!(ResourceEndpoints<R: Resource>);
