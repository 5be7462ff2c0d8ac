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

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

mod commands;
use commands::{
  campaign::CampaignCommand,
  resource::{GetCommand, ListCommand},
};

mod config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "adzerk")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Print records as JSON in their wire form
  #[arg(long, global = true)]
  json: bool,

  /// Override the API base URL
  #[arg(long, global = true, env = "ADZERK_BASE_URL")]
  base_url: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// List every record of a resource kind
  List(ListCommand),
  /// Fetch one record by id
  Get(GetCommand),
  /// List the creatives placed in a flight
  FlightCreatives {
    flight_id: i64,
  },
  /// Find advertisers by title
  SearchAdvertiser {
    name: String,
  },
  /// Campaign helpers
  Campaign(CampaignCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging
  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).with_writer(std::io::stderr).init();

  // Load configuration
  let config = config::load(cli.base_url.clone())?;
  let output = commands::Output { json: cli.json };

  // Execute command
  match cli.command {
    Commands::List(cmd) => commands::resource::list(cmd, config, output).await?,
    Commands::Get(cmd) => commands::resource::get(cmd, config, output).await?,
    Commands::FlightCreatives { flight_id } => {
      commands::resource::flight_creatives(flight_id, config, output).await?
    }
    Commands::SearchAdvertiser { name } => {
      commands::resource::search_advertiser(&name, config, output).await?
    }
    Commands::Campaign(cmd) => commands::campaign::execute(cmd, config, output).await?,
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use adzerk_core::ResourceKind;

  #[test]
  fn test_parse_list() {
    let cli = Cli::try_parse_from(["adzerk", "list", "flights", "--json"]).unwrap();
    assert!(cli.json);
    match cli.command {
      Commands::List(cmd) => assert_eq!(cmd.kind, ResourceKind::Flight),
      other => panic!("unexpected command {:?}", other),
    }
  }

  #[test]
  fn test_parse_get() {
    let cli = Cli::try_parse_from(["adzerk", "-v", "get", "zone", "31"]).unwrap();
    assert!(cli.verbose);
    match cli.command {
      Commands::Get(cmd) => {
        assert_eq!(cmd.kind, ResourceKind::Zone);
        assert_eq!(cmd.id, 31);
      }
      other => panic!("unexpected command {:?}", other),
    }
  }

  #[test]
  fn test_unknown_kind_rejected() {
    assert!(Cli::try_parse_from(["adzerk", "list", "reports"]).is_err());
  }

  #[test]
  fn test_parse_flight_creatives() {
    let cli = Cli::try_parse_from(["adzerk", "flight-creatives", "55"]).unwrap();
    assert!(matches!(cli.command, Commands::FlightCreatives { flight_id: 55 }));
  }
}
