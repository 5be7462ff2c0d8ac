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

use super::Output;
use adzerk_client::AdzerkClient;
use adzerk_core::Config;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use tracing::info;

#[derive(Args, Debug)]
pub struct CampaignCommand {
  #[command(subcommand)]
  command: CampaignSubcommands,
}

#[derive(Subcommand, Debug)]
enum CampaignSubcommands {
  /// Show a campaign's flights with their frequency caps
  Flights {
    campaign_id: i64,
  },

  /// Cap a flight at N impressions per user per day
  DailyCap {
    flight_id: i64,

    /// Impressions per user per day
    impressions: i64,
  },
}

pub async fn execute(cmd: CampaignCommand, config: Config, output: Output) -> Result<()> {
  let client = AdzerkClient::new(config)?;

  match cmd.command {
    CampaignSubcommands::Flights { campaign_id } => {
      let campaign = client
        .campaigns()
        .get(campaign_id)
        .await
        .with_context(|| format!("Failed to fetch campaign {}", campaign_id))?;

      if output.json {
        return output.records(&campaign.flights);
      }
      println!("{} ({} flight(s))", campaign, campaign.flights.len());
      for flight in &campaign.flights {
        let cap = flight.frequency_cap().unwrap_or_else(|| "uncapped".to_string());
        let name = flight.name.as_deref().unwrap_or("-");
        println!("  {} {} [{}]", flight, name, cap);
      }
      Ok(())
    }
    CampaignSubcommands::DailyCap { flight_id, impressions } => {
      let flights = client.flights();
      let mut flight = flights.get(flight_id).await?;
      flights
        .update_with(&mut flight, |f| f.set_daily_cap(impressions))
        .await
        .with_context(|| format!("Failed to update flight {}", flight_id))?;

      info!("Flight {} now capped at {:?}", flight_id, flight.frequency_cap());
      output.record(&flight)
    }
  }
}
