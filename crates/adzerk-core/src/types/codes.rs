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

//! Integer-coded enumerations carried by flights and creative maps.
//!
//! Codes the API adds later are kept as `Other(code)` and written back
//! unchanged, so a new code never breaks parsing of the record around it.

use serde::{Deserialize, Serialize};

/// Declares an enum that travels as a small integer and displays as a label.
macro_rules! wire_code {
  (
    $(#[$meta:meta])*
    $name:ident { $($variant:ident = $code:literal => $label:literal),+ $(,)? }
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(from = "u8", into = "u8")]
    pub enum $name {
      $($variant,)+
      /// A code without a known label
      Other(u8),
    }

    impl From<u8> for $name {
      fn from(code: u8) -> Self {
        match code {
          $($code => $name::$variant,)+
          other => $name::Other(other),
        }
      }
    }

    impl From<$name> for u8 {
      fn from(value: $name) -> u8 {
        match value {
          $($name::$variant => $code,)+
          $name::Other(code) => code,
        }
      }
    }

    impl std::fmt::Display for $name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
          $($name::$variant => write!(f, $label),)+
          $name::Other(code) => write!(f, "{} {}", stringify!($name), code),
        }
      }
    }
  };
}

wire_code! {
  /// What a flight is trying to deliver
  GoalType {
    Impressions = 1 => "Impressions",
    Percentage = 2 => "Percentage",
    Click = 3 => "Click",
    Even = 4 => "Even",
    ViewConversions = 5 => "View Conversions",
    ClickConversions = 6 => "Click Conversions",
    AnyConversions = 7 => "Any Conversions",
  }
}

wire_code! {
  /// How a flight is billed
  RateType {
    Flat = 1 => "Flat",
    Cpm = 2 => "CPM",
    Cpc = 3 => "CPC",
    CpaView = 4 => "CPA View",
    CpaClick = 5 => "CPA Click",
    CpaBoth = 6 => "CPA Both",
  }
}

wire_code! {
  /// Unit of a frequency cap window
  FreqCapType {
    Hour = 1 => "Hour",
    Day = 2 => "Day",
  }
}

wire_code! {
  /// Flight inventory option
  OptionType {
    Cpm = 1 => "CPM",
    Remainder = 2 => "Remainder",
  }
}

wire_code! {
  /// How impressions are spread across a flight's creatives
  DistributionType {
    AutoBalanced = 1 => "Auto-Balanced",
    Percentage = 2 => "Percentage",
    Fixed = 3 => "Fixed",
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_goal_type_labels() {
    assert_eq!(GoalType::ViewConversions.to_string(), "View Conversions");
    assert_eq!(u8::from(GoalType::AnyConversions), 7);
  }

  #[test]
  fn test_unknown_code_kept() {
    let parsed: RateType = serde_json::from_str("7").unwrap();
    assert_eq!(parsed, RateType::Other(7));
    assert_eq!(parsed.to_string(), "RateType 7");
    assert_eq!(serde_json::to_string(&parsed).unwrap(), "7");
    assert_eq!(FreqCapType::from(2), FreqCapType::Day);
  }

  #[test]
  fn test_serde_uses_integer_codes() {
    assert_eq!(serde_json::to_string(&FreqCapType::Day).unwrap(), "2");
    let parsed: RateType = serde_json::from_str("4").unwrap();
    assert_eq!(parsed, RateType::CpaView);
    assert_eq!(parsed.to_string(), "CPA View");
  }
}
