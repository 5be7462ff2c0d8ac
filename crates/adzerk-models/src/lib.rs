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

//! # adzerk-models
//!
//! Typed records for the Adzerk management API.
//!
//! Every resource is a plain serde struct whose attribute names match the
//! wire (`Title`, `SiteId`, ...). Required attributes are plain fields,
//! optional ones are `Option`s that are left off the wire when `None`. The
//! [`Resource`] trait ties each record to its URL segment and its
//! declarative [`FieldSet`](adzerk_core::FieldSet).
//!
//! ## Usage
//!
//! ```ignore
//! use adzerk_models::{Resource, Zone};
//!
//! let zone = Zone::from_item(serde_json::from_str(&response_json)?)?;
//! let payload = zone.to_item()?;
//! ```

#![warn(clippy::all)]

pub mod advertiser;
pub mod campaign;
pub mod channel;
pub mod creative;
pub mod flight;
pub mod priority;
pub mod publisher;
pub mod resource;
pub mod site;
pub mod zone;

pub use advertiser::Advertiser;
pub use campaign::Campaign;
pub use channel::Channel;
pub use creative::{Creative, CreativeFlightMap, CreativeRef};
pub use flight::Flight;
pub use priority::Priority;
pub use publisher::Publisher;
pub use resource::{ListEnvelope, Resource};
pub use site::Site;
pub use zone::Zone;
