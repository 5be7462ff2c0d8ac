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

use crate::flight::Flight;
use crate::resource::{display_id, Resource};
use adzerk_core::types::date;
use adzerk_core::{Field, FieldSet, ResourceKind, Result};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An advertiser's buy; owns its flights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
  #[serde(rename = "Id", default)]
  pub id: Option<i64>,

  #[serde(rename = "Name")]
  pub name: String,

  #[serde(rename = "AdvertiserId")]
  pub advertiser_id: i64,

  /// Always sent, empty when the campaign has no flights yet
  #[serde(rename = "Flights", default)]
  pub flights: Vec<Flight>,

  #[serde(rename = "StartDate", with = "date")]
  pub start_date: NaiveDateTime,

  #[serde(rename = "EndDate", with = "date::option", default, skip_serializing_if = "Option::is_none")]
  pub end_date: Option<NaiveDateTime>,

  #[serde(rename = "IsDeleted")]
  pub is_deleted: bool,

  #[serde(rename = "IsActive")]
  pub is_active: bool,

  #[serde(rename = "Price")]
  pub price: Decimal,
}

impl Campaign {
  pub fn new(
    name: impl Into<String>,
    advertiser_id: i64,
    start_date: NaiveDateTime,
    price: Decimal,
  ) -> Self {
    Campaign {
      id: None,
      name: name.into(),
      advertiser_id,
      flights: Vec::new(),
      start_date,
      end_date: None,
      is_deleted: false,
      is_active: true,
      price,
    }
  }

  pub fn flight(&self, id: i64) -> Option<&Flight> {
    self.flights.iter().find(|f| f.id == Some(id))
  }
}

impl Resource for Campaign {
  const KIND: ResourceKind = ResourceKind::Campaign;
  const FIELDS: FieldSet = FieldSet::new(&[
    Field::required("Name"),
    Field::required("AdvertiserId"),
    Field::required("Flights"),
    Field::required("StartDate"),
    Field::optional("EndDate"),
    Field::required("IsDeleted"),
    Field::required("IsActive"),
    Field::required("Price"),
  ]);

  fn id(&self) -> Option<i64> {
    self.id
  }

  // Responses omit `Flights` (or send null) for campaigns without any.
  // Embedded flights are checked against their own field set so errors name
  // the flight attribute that is missing.
  fn from_item(mut item: Value) -> Result<Self> {
    if let Some(object) = item.as_object_mut() {
      let flights = object.entry("Flights").or_insert(Value::Null);
      if flights.is_null() {
        *flights = Value::Array(Vec::new());
      }
    }
    Self::FIELDS.validate_response(&Self::KIND.to_string(), &item)?;
    if let Some(flights) = item.get("Flights").and_then(Value::as_array) {
      for flight in flights {
        Flight::FIELDS.validate_response(&Flight::KIND.to_string(), flight)?;
      }
    }
    Ok(serde_json::from_value(item)?)
  }
}

impl std::fmt::Display for Campaign {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "<Campaign {}>", display_id(self.id))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use adzerk_core::Error;
  use chrono::NaiveDate;
  use serde_json::json;

  fn campaign_item() -> Value {
    json!({
      "Id": 10,
      "Name": "spring",
      "AdvertiserId": 3,
      "StartDate": "2014-03-01T00:00:00",
      "IsDeleted": false,
      "IsActive": true,
      "Price": 100.0
    })
  }

  fn flight_item() -> Value {
    json!({
      "Id": 55,
      "Name": "week one",
      "StartDate": "2014-03-01T00:00:00",
      "Price": 1.5,
      "OptionType": 1,
      "Impressions": null,
      "IsUnlimited": true,
      "IsNoDuplicates": false,
      "IsFullSpeed": false,
      "CampaignId": 10,
      "PriorityId": 2,
      "IsDeleted": false,
      "IsActive": true
    })
  }

  #[test]
  fn test_missing_flights_parse_as_empty() {
    let campaign = Campaign::from_item(campaign_item()).unwrap();
    assert!(campaign.flights.is_empty());
    assert_eq!(campaign.to_string(), "<Campaign 10>");

    let mut item = campaign_item();
    item["Flights"] = Value::Null;
    assert!(Campaign::from_item(item).unwrap().flights.is_empty());
  }

  #[test]
  fn test_nested_flights_parsed() {
    let mut item = campaign_item();
    item["Flights"] = json!([flight_item()]);
    let campaign = Campaign::from_item(item).unwrap();
    assert_eq!(campaign.flights.len(), 1);
    assert_eq!(campaign.flight(55).unwrap().name.as_deref(), Some("week one"));
    assert!(campaign.flight(56).is_none());
  }

  #[test]
  fn test_nested_flight_missing_field_named() {
    let mut flight = flight_item();
    flight.as_object_mut().unwrap().remove("PriorityId");
    let mut item = campaign_item();
    item["Flights"] = json!([flight]);
    match Campaign::from_item(item).unwrap_err() {
      Error::MissingField(msg) => assert_eq!(msg, "Flight: PriorityId"),
      other => panic!("Expected MissingField, got {:?}", other),
    }
  }

  #[test]
  fn test_to_item_always_carries_flights() {
    let start = NaiveDate::from_ymd_opt(2014, 3, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    let campaign = Campaign::new("spring", 3, start, Decimal::from(100));
    let item = campaign.to_item().unwrap();
    assert_eq!(item["Flights"], json!([]));
    assert!(item.get("EndDate").is_none());
  }

  #[test]
  fn test_to_item_emits_full_flight_items() {
    let mut item = campaign_item();
    item["Flights"] = json!([flight_item()]);
    let campaign = Campaign::from_item(item).unwrap();
    let out = campaign.to_item().unwrap();
    assert_eq!(out["Flights"][0]["Id"], 55);
    assert_eq!(out["Flights"][0]["PriorityId"], 2);
  }
}
