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

//! Creatives and the maps attaching them to flights.
//!
//! A `CreativeFlightMap` embeds the creative it places. Depending on the
//! call, the API sends either the whole creative or just `{"Id": n}`; the
//! latter parses as [`CreativeRef::Stub`] and is written back in the same
//! shape.

use crate::resource::{display_id, Resource};
use adzerk_core::types::DistributionType;
use adzerk_core::{Field, FieldSet, ResourceKind};
use serde::{Deserialize, Serialize};

/// The ad itself: image, HTML or script body plus click-through URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creative {
  #[serde(rename = "Id", default)]
  pub id: Option<i64>,

  #[serde(rename = "Title")]
  pub title: String,

  /// Click-through URL; `null` for HTML and script creatives
  #[serde(rename = "Url")]
  pub url: Option<String>,

  #[serde(rename = "AdvertiserId")]
  pub advertiser_id: i64,

  #[serde(rename = "AdTypeId")]
  pub ad_type_id: i64,

  #[serde(rename = "IsSync")]
  pub is_sync: bool,

  #[serde(rename = "IsActive")]
  pub is_active: bool,

  #[serde(rename = "IsDeleted")]
  pub is_deleted: bool,

  #[serde(rename = "Body", default, skip_serializing_if = "Option::is_none")]
  pub body: Option<String>,

  #[serde(rename = "ImageName", default, skip_serializing_if = "Option::is_none")]
  pub image_name: Option<String>,

  #[serde(rename = "Alt", default, skip_serializing_if = "Option::is_none")]
  pub alt: Option<String>,

  #[serde(rename = "IsHTMLJS", default, skip_serializing_if = "Option::is_none")]
  pub is_html_js: Option<bool>,

  #[serde(rename = "ScriptBody", default, skip_serializing_if = "Option::is_none")]
  pub script_body: Option<String>,

  /// Free-form JSON string attached by the advertiser
  #[serde(rename = "Metadata", default, skip_serializing_if = "Option::is_none")]
  pub metadata: Option<String>,

  #[serde(rename = "IsNoTrack", default, skip_serializing_if = "Option::is_none")]
  pub is_no_track: Option<bool>,
}

impl Resource for Creative {
  const KIND: ResourceKind = ResourceKind::Creative;
  const FIELDS: FieldSet = FieldSet::new(&[
    Field::required("Title"),
    Field::required("Url"),
    Field::required("AdvertiserId"),
    Field::required("AdTypeId"),
    Field::required("IsSync"),
    Field::required("IsActive"),
    Field::required("IsDeleted"),
    Field::optional("Body"),
    Field::optional("ImageName"),
    Field::optional("Alt"),
    Field::optional("IsHTMLJS"),
    Field::optional("ScriptBody"),
    Field::optional("Metadata"),
    Field::optional("IsNoTrack"),
  ]);

  fn id(&self) -> Option<i64> {
    self.id
  }
}

impl std::fmt::Display for Creative {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "<Creative {} <{}>>", display_id(self.id), self.title)
  }
}

/// A creative embedded in a map: the full record or an id-only stub.
///
/// Variant order matters for the untagged representation: an object that
/// carries the creative field set is `Full`, anything with only an `Id` is
/// `Stub`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreativeRef {
  Full(Creative),
  Stub {
    #[serde(rename = "Id")]
    id: i64,
  },
}

impl CreativeRef {
  pub fn stub(id: i64) -> Self {
    CreativeRef::Stub { id }
  }

  pub fn id(&self) -> Option<i64> {
    match self {
      CreativeRef::Full(creative) => creative.id,
      CreativeRef::Stub { id } => Some(*id),
    }
  }

  pub fn is_stub(&self) -> bool {
    matches!(self, CreativeRef::Stub { .. })
  }

  pub fn as_full(&self) -> Option<&Creative> {
    match self {
      CreativeRef::Full(creative) => Some(creative),
      CreativeRef::Stub { .. } => None,
    }
  }
}

impl From<Creative> for CreativeRef {
  fn from(creative: Creative) -> Self {
    CreativeRef::Full(creative)
  }
}

/// Placement of a creative within a flight.
///
/// Lives under `flight/{FlightId}/creative`; `flight_id` is the parent
/// pointer used to build those URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreativeFlightMap {
  #[serde(rename = "Id", default)]
  pub id: Option<i64>,

  #[serde(rename = "Creative")]
  pub creative: CreativeRef,

  #[serde(rename = "FlightId")]
  pub flight_id: i64,

  #[serde(rename = "CampaignId")]
  pub campaign_id: i64,

  #[serde(rename = "SizeOverride")]
  pub size_override: bool,

  #[serde(rename = "Iframe")]
  pub iframe: bool,

  #[serde(rename = "IsActive")]
  pub is_active: bool,

  #[serde(rename = "IsDeleted")]
  pub is_deleted: bool,

  #[serde(rename = "Percentage", default, skip_serializing_if = "Option::is_none")]
  pub percentage: Option<i32>,

  #[serde(rename = "Impressions", default, skip_serializing_if = "Option::is_none")]
  pub impressions: Option<i64>,

  #[serde(rename = "SiteId", default, skip_serializing_if = "Option::is_none")]
  pub site_id: Option<i64>,

  #[serde(rename = "ZoneId", default, skip_serializing_if = "Option::is_none")]
  pub zone_id: Option<i64>,

  #[serde(rename = "DistributionType", default, skip_serializing_if = "Option::is_none")]
  pub distribution_type: Option<DistributionType>,
}

impl CreativeFlightMap {
  /// Map an existing creative into a flight, active and unrestricted.
  pub fn new(creative: CreativeRef, flight_id: i64, campaign_id: i64) -> Self {
    CreativeFlightMap {
      id: None,
      creative,
      flight_id,
      campaign_id,
      size_override: false,
      iframe: false,
      is_active: true,
      is_deleted: false,
      percentage: None,
      impressions: None,
      site_id: None,
      zone_id: None,
      distribution_type: None,
    }
  }
}

impl Resource for CreativeFlightMap {
  const KIND: ResourceKind = ResourceKind::CreativeFlightMap;
  const FIELDS: FieldSet = FieldSet::new(&[
    Field::required("Creative"),
    Field::required("FlightId"),
    Field::required("CampaignId"),
    Field::required("SizeOverride"),
    Field::required("Iframe"),
    Field::required("IsActive"),
    Field::required("IsDeleted"),
    Field::optional("Percentage"),
    Field::optional("Impressions"),
    Field::optional("SiteId"),
    Field::optional("ZoneId"),
    Field::optional("DistributionType"),
  ]);

  fn id(&self) -> Option<i64> {
    self.id
  }
}

impl std::fmt::Display for CreativeFlightMap {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "<CreativeFlightMap {} <Creative {} in Flight {}>>",
      display_id(self.id),
      display_id(self.creative.id()),
      self.flight_id
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn creative_item() -> serde_json::Value {
    json!({
      "Id": 77,
      "Title": "Snoo",
      "Url": "http://reddit.com",
      "AdvertiserId": 3,
      "AdTypeId": 4,
      "IsSync": false,
      "IsActive": true,
      "IsDeleted": false,
      "ImageName": "snoo.png"
    })
  }

  fn map_item(creative: serde_json::Value) -> serde_json::Value {
    json!({
      "Id": 900,
      "Creative": creative,
      "FlightId": 55,
      "CampaignId": 10,
      "SizeOverride": false,
      "Iframe": false,
      "IsActive": true,
      "IsDeleted": false,
      "DistributionType": 1
    })
  }

  #[test]
  fn test_map_with_full_creative() {
    let map = CreativeFlightMap::from_item(map_item(creative_item())).unwrap();
    assert!(!map.creative.is_stub());
    let creative = map.creative.as_full().unwrap();
    assert_eq!(creative.title, "Snoo");
    assert_eq!(creative.image_name.as_deref(), Some("snoo.png"));
    assert_eq!(map.distribution_type, Some(DistributionType::AutoBalanced));
  }

  #[test]
  fn test_map_with_stub_creative() {
    let map = CreativeFlightMap::from_item(map_item(json!({"Id": 77}))).unwrap();
    assert!(map.creative.is_stub());
    assert_eq!(map.creative.id(), Some(77));
    assert_eq!(map.to_string(), "<CreativeFlightMap 900 <Creative 77 in Flight 55>>");
  }

  #[test]
  fn test_stub_serializes_as_id_only() {
    let map = CreativeFlightMap::new(CreativeRef::stub(77), 55, 10);
    let item = map.to_item().unwrap();
    assert_eq!(item["Creative"], json!({"Id": 77}));
    assert!(item["Id"].is_null());
    assert!(item.get("Percentage").is_none());
  }

  #[test]
  fn test_partial_creative_falls_back_to_stub() {
    // Missing required creative attributes: only the id survives.
    let map = CreativeFlightMap::from_item(map_item(json!({"Id": 77, "Title": "Snoo"}))).unwrap();
    assert_eq!(map.creative, CreativeRef::stub(77));
  }

  #[test]
  fn test_creative_with_null_url() {
    let mut item = creative_item();
    item["Url"] = serde_json::Value::Null;
    item["IsHTMLJS"] = json!(true);
    let creative = Creative::from_item(item).unwrap();
    assert_eq!(creative.url, None);
    assert_eq!(creative.is_html_js, Some(true));
  }

  #[test]
  fn test_map_without_creative_rejected() {
    let mut item = map_item(json!({"Id": 1}));
    item.as_object_mut().unwrap().remove("Creative");
    assert!(CreativeFlightMap::from_item(item).is_err());
  }
}
