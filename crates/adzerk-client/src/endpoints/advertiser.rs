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

//! Advertiser title search

use super::{parse_list, resource::ResourceEndpoints, EndpointBase};
use adzerk_core::Result;
use adzerk_models::{Advertiser, Resource};
use serde_json::json;
use tracing::instrument;

impl ResourceEndpoints<Advertiser> {
  /// Find advertisers by title
  ///
  /// Posts `advertiser={"Title": name}` to `/advertiser/search`; matching is
  /// done by the API.
  #[instrument(skip(self))]
  pub async fn search(&self, name: &str) -> Result<Vec<Advertiser>> {
    self.wait_for_rate_limit().await?;

    let query = json!({ "Title": name });
    let body = self
      .transport()
      .post(&[Advertiser::name(), "search"], Advertiser::name(), &query)
      .await?;
    parse_list(body)
  }
}
