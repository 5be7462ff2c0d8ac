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

pub mod config;
pub mod error;
pub mod field;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use field::{Field, FieldSet};

/// The resource collections exposed by the Adzerk management API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
  Site,
  Zone,
  Advertiser,
  Flight,
  Priority,
  Creative,
  CreativeFlightMap,
  Channel,
  Publisher,
  Campaign,
}

impl ResourceKind {
  /// URL segment, which doubles as the form key wrapping write payloads.
  ///
  /// Creative flight maps live under `flight/{id}/creative`, so they share
  /// the `creative` key with plain creatives.
  pub fn name(&self) -> &'static str {
    match self {
      ResourceKind::Site => "site",
      ResourceKind::Zone => "zone",
      ResourceKind::Advertiser => "advertiser",
      ResourceKind::Flight => "flight",
      ResourceKind::Priority => "priority",
      ResourceKind::Creative | ResourceKind::CreativeFlightMap => "creative",
      ResourceKind::Channel => "channel",
      ResourceKind::Publisher => "publisher",
      ResourceKind::Campaign => "campaign",
    }
  }
}

impl std::fmt::Display for ResourceKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ResourceKind::Site => write!(f, "Site"),
      ResourceKind::Zone => write!(f, "Zone"),
      ResourceKind::Advertiser => write!(f, "Advertiser"),
      ResourceKind::Flight => write!(f, "Flight"),
      ResourceKind::Priority => write!(f, "Priority"),
      ResourceKind::Creative => write!(f, "Creative"),
      ResourceKind::CreativeFlightMap => write!(f, "CreativeFlightMap"),
      ResourceKind::Channel => write!(f, "Channel"),
      ResourceKind::Publisher => write!(f, "Publisher"),
      ResourceKind::Campaign => write!(f, "Campaign"),
    }
  }
}

impl std::str::FromStr for ResourceKind {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
      "site" | "sites" => Ok(ResourceKind::Site),
      "zone" | "zones" => Ok(ResourceKind::Zone),
      "advertiser" | "advertisers" => Ok(ResourceKind::Advertiser),
      "flight" | "flights" => Ok(ResourceKind::Flight),
      "priority" | "priorities" => Ok(ResourceKind::Priority),
      "creative" | "creatives" => Ok(ResourceKind::Creative),
      "creativeflightmap" | "creativemap" | "creativemaps" => Ok(ResourceKind::CreativeFlightMap),
      "channel" | "channels" => Ok(ResourceKind::Channel),
      "publisher" | "publishers" => Ok(ResourceKind::Publisher),
      "campaign" | "campaigns" => Ok(ResourceKind::Campaign),
      other => Err(Error::InvalidValue(format!("unknown resource kind '{}'", other))),
    }
  }
}

/// Base URL for the Adzerk management API
pub const ADZERK_BASE_URL: &str = "https://api.adzerk.net/v1";

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "X-Adzerk-ApiKey";

/// Default client-side rate limit (requests per minute)
pub const DEFAULT_RATE_LIMIT: u32 = 120;
