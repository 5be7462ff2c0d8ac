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

use crate::creative::CreativeFlightMap;
use crate::resource::{display_id, Resource};
use adzerk_core::types::{date, FreqCapType, GoalType, OptionType, RateType};
use adzerk_core::{Field, FieldSet, ResourceKind};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A scheduled, priced run of a campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
  #[serde(rename = "Id", default)]
  pub id: Option<i64>,

  /// Label shown in the UI; not every account sends one
  #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,

  #[serde(rename = "StartDate", with = "date")]
  pub start_date: NaiveDateTime,

  #[serde(rename = "EndDate", with = "date::option", default, skip_serializing_if = "Option::is_none")]
  pub end_date: Option<NaiveDateTime>,

  #[serde(rename = "NoEndDate", default, skip_serializing_if = "Option::is_none")]
  pub no_end_date: Option<bool>,

  #[serde(rename = "Price")]
  pub price: Decimal,

  #[serde(rename = "OptionType")]
  pub option_type: OptionType,

  /// Always sent; `null` on unlimited flights
  #[serde(rename = "Impressions", default)]
  pub impressions: Option<i64>,

  /// Overrides `Impressions`
  #[serde(rename = "IsUnlimited")]
  pub is_unlimited: bool,

  #[serde(rename = "IsNoDuplicates", default)]
  pub is_no_duplicates: Option<bool>,

  /// Serve as fast as possible instead of pacing
  #[serde(rename = "IsFullSpeed")]
  pub is_full_speed: bool,

  #[serde(rename = "Keywords", default, skip_serializing_if = "Option::is_none")]
  pub keywords: Option<String>,

  #[serde(rename = "UserAgentKeywords", default, skip_serializing_if = "Option::is_none")]
  pub user_agent_keywords: Option<String>,

  #[serde(rename = "CampaignId")]
  pub campaign_id: i64,

  #[serde(rename = "PriorityId")]
  pub priority_id: i64,

  #[serde(rename = "IsDeleted")]
  pub is_deleted: bool,

  #[serde(rename = "IsActive")]
  pub is_active: bool,

  #[serde(rename = "GoalType", default, skip_serializing_if = "Option::is_none")]
  pub goal_type: Option<GoalType>,

  #[serde(rename = "RateType", default, skip_serializing_if = "Option::is_none")]
  pub rate_type: Option<RateType>,

  #[serde(rename = "IsFreqCap", default, skip_serializing_if = "Option::is_none")]
  pub is_freq_cap: Option<bool>,

  #[serde(rename = "FreqCap", default, skip_serializing_if = "Option::is_none")]
  pub freq_cap: Option<i64>,

  #[serde(rename = "FreqCapDuration", default, skip_serializing_if = "Option::is_none")]
  pub freq_cap_duration: Option<i64>,

  #[serde(rename = "FreqCapType", default, skip_serializing_if = "Option::is_none")]
  pub freq_cap_type: Option<FreqCapType>,

  #[serde(rename = "DatePartingStartTime", default, skip_serializing_if = "Option::is_none")]
  pub date_parting_start_time: Option<String>,

  #[serde(rename = "DatePartingEndTime", default, skip_serializing_if = "Option::is_none")]
  pub date_parting_end_time: Option<String>,

  #[serde(rename = "IsSunday", default, skip_serializing_if = "Option::is_none")]
  pub is_sunday: Option<bool>,

  #[serde(rename = "IsMonday", default, skip_serializing_if = "Option::is_none")]
  pub is_monday: Option<bool>,

  #[serde(rename = "IsTuesday", default, skip_serializing_if = "Option::is_none")]
  pub is_tuesday: Option<bool>,

  #[serde(rename = "IsWednesday", default, skip_serializing_if = "Option::is_none")]
  pub is_wednesday: Option<bool>,

  #[serde(rename = "IsThursday", default, skip_serializing_if = "Option::is_none")]
  pub is_thursday: Option<bool>,

  #[serde(rename = "IsFriday", default, skip_serializing_if = "Option::is_none")]
  pub is_friday: Option<bool>,

  #[serde(rename = "IsSaturday", default, skip_serializing_if = "Option::is_none")]
  pub is_saturday: Option<bool>,

  /// Creatives placed in this flight, when the response embeds them
  #[serde(rename = "CreativeMaps", default, skip_serializing_if = "Option::is_none")]
  pub creative_maps: Option<Vec<CreativeFlightMap>>,
}

impl Flight {
  /// Minimal active flight with every optional attribute unset.
  pub fn new(
    campaign_id: i64,
    priority_id: i64,
    start_date: NaiveDateTime,
    price: Decimal,
    impressions: i64,
  ) -> Self {
    Flight {
      id: None,
      name: None,
      start_date,
      end_date: None,
      no_end_date: None,
      price,
      option_type: OptionType::Cpm,
      impressions: Some(impressions),
      is_unlimited: false,
      is_no_duplicates: Some(false),
      is_full_speed: false,
      keywords: None,
      user_agent_keywords: None,
      campaign_id,
      priority_id,
      is_deleted: false,
      is_active: true,
      goal_type: None,
      rate_type: None,
      is_freq_cap: None,
      freq_cap: None,
      freq_cap_duration: None,
      freq_cap_type: None,
      date_parting_start_time: None,
      date_parting_end_time: None,
      is_sunday: None,
      is_monday: None,
      is_tuesday: None,
      is_wednesday: None,
      is_thursday: None,
      is_friday: None,
      is_saturday: None,
      creative_maps: None,
    }
  }

  /// Human readable cap, e.g. `"10 per 1 Day"`; `None` when capping is off.
  pub fn frequency_cap(&self) -> Option<String> {
    if self.is_freq_cap != Some(true) {
      return None;
    }
    let cap = self.freq_cap.map_or_else(|| "?".to_string(), |c| c.to_string());
    let duration = self.freq_cap_duration.map_or_else(|| "?".to_string(), |d| d.to_string());
    let unit = self.freq_cap_type.map_or_else(|| "?".to_string(), |t| t.to_string());
    Some(format!("{} per {} {}", cap, duration, unit))
  }

  /// Cap each user at `impressions` per day.
  pub fn set_daily_cap(&mut self, impressions: i64) {
    self.is_freq_cap = Some(true);
    self.freq_cap_type = Some(FreqCapType::Day);
    self.freq_cap = Some(impressions);
    self.freq_cap_duration = Some(1);
  }
}

impl Resource for Flight {
  const KIND: ResourceKind = ResourceKind::Flight;
  const FIELDS: FieldSet = FieldSet::new(&[
    Field::optional("Name"),
    Field::required("StartDate"),
    Field::optional("EndDate"),
    Field::optional("NoEndDate"),
    Field::required("Price"),
    Field::required("OptionType"),
    Field::required("Impressions"),
    Field::required("IsUnlimited"),
    Field::required("IsNoDuplicates"),
    Field::required("IsFullSpeed"),
    Field::optional("Keywords"),
    Field::optional("UserAgentKeywords"),
    Field::required("CampaignId"),
    Field::required("PriorityId"),
    Field::required("IsDeleted"),
    Field::required("IsActive"),
    Field::optional("GoalType"),
    Field::optional("RateType"),
    Field::optional("IsFreqCap"),
    Field::optional("FreqCap"),
    Field::optional("FreqCapDuration"),
    Field::optional("FreqCapType"),
    Field::optional("DatePartingStartTime"),
    Field::optional("DatePartingEndTime"),
    Field::optional("IsSunday"),
    Field::optional("IsMonday"),
    Field::optional("IsTuesday"),
    Field::optional("IsWednesday"),
    Field::optional("IsThursday"),
    Field::optional("IsFriday"),
    Field::optional("IsSaturday"),
    Field::optional("CreativeMaps"),
  ]);

  fn id(&self) -> Option<i64> {
    self.id
  }
}

impl std::fmt::Display for Flight {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "<Flight {} <Campaign {}>>", display_id(self.id), self.campaign_id)
  }
}
