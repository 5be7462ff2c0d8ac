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
use adzerk_core::{Config, ResourceKind};
use adzerk_models::{
  Advertiser, Campaign, Channel, Creative, Flight, Priority, Publisher, Resource, Site, Zone,
};
use anyhow::{bail, Result};
use clap::Args;
use std::fmt::Display;
use tracing::info;

#[derive(Args, Debug)]
pub struct ListCommand {
  /// Resource kind, e.g. site, zone, flight, campaign
  pub kind: ResourceKind,
}

#[derive(Args, Debug)]
pub struct GetCommand {
  /// Resource kind, e.g. site, zone, flight, campaign
  pub kind: ResourceKind,

  /// Record id
  pub id: i64,
}

const MAPS_HINT: &str = "creative flight maps live under a flight; use `flight-creatives <flight_id>`";

pub async fn list(cmd: ListCommand, config: Config, output: Output) -> Result<()> {
  let client = AdzerkClient::new(config)?;

  match cmd.kind {
    ResourceKind::Site => list_all::<Site>(&client, output).await,
    ResourceKind::Zone => list_all::<Zone>(&client, output).await,
    ResourceKind::Advertiser => list_all::<Advertiser>(&client, output).await,
    ResourceKind::Flight => list_all::<Flight>(&client, output).await,
    ResourceKind::Priority => list_all::<Priority>(&client, output).await,
    ResourceKind::Creative => list_all::<Creative>(&client, output).await,
    ResourceKind::Channel => list_all::<Channel>(&client, output).await,
    ResourceKind::Publisher => list_all::<Publisher>(&client, output).await,
    ResourceKind::Campaign => list_all::<Campaign>(&client, output).await,
    ResourceKind::CreativeFlightMap => bail!(MAPS_HINT),
  }
}

pub async fn get(cmd: GetCommand, config: Config, output: Output) -> Result<()> {
  let client = AdzerkClient::new(config)?;
  let id = cmd.id;

  match cmd.kind {
    ResourceKind::Site => get_one::<Site>(&client, id, output).await,
    ResourceKind::Zone => get_one::<Zone>(&client, id, output).await,
    ResourceKind::Advertiser => get_one::<Advertiser>(&client, id, output).await,
    ResourceKind::Flight => get_one::<Flight>(&client, id, output).await,
    ResourceKind::Priority => get_one::<Priority>(&client, id, output).await,
    ResourceKind::Creative => get_one::<Creative>(&client, id, output).await,
    ResourceKind::Channel => get_one::<Channel>(&client, id, output).await,
    ResourceKind::Publisher => get_one::<Publisher>(&client, id, output).await,
    ResourceKind::Campaign => get_one::<Campaign>(&client, id, output).await,
    ResourceKind::CreativeFlightMap => bail!(MAPS_HINT),
  }
}

pub async fn flight_creatives(flight_id: i64, config: Config, output: Output) -> Result<()> {
  let client = AdzerkClient::new(config)?;
  let maps = client.creative_maps().list(flight_id).await?;
  info!("Flight {} has {} creative(s)", flight_id, maps.len());
  output.records(&maps)
}

pub async fn search_advertiser(name: &str, config: Config, output: Output) -> Result<()> {
  let client = AdzerkClient::new(config)?;
  let found = client.advertisers().search(name).await?;
  output.records(&found)
}

async fn list_all<R: Resource + Display>(client: &AdzerkClient, output: Output) -> Result<()> {
  let records = client.resource::<R>().list().await?;
  info!("Fetched {} {} record(s)", records.len(), R::KIND);
  output.records(&records)
}

async fn get_one<R: Resource + Display>(client: &AdzerkClient, id: i64, output: Output) -> Result<()> {
  let record = client.resource::<R>().get(id).await?;
  output.record(&record)
}
