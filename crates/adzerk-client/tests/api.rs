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

use adzerk_client::{
  AdzerkClient, Campaign, Config, CreativeFlightMap, CreativeRef, Error, Zone,
};
use adzerk_core::types::RateType;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn client_for(server: &MockServer, max_retries: u32) -> AdzerkClient {
  let mut config =
    Config::default_with_key("test_key".to_string()).with_base_url(format!("{}/v1", server.uri()));
  config.max_retries = max_retries;
  AdzerkClient::new(config).expect("client")
}

/// Decode a `name=<json>` form body into its key and JSON item.
fn form_item(request: &Request) -> (String, Value) {
  let mut pairs = url::form_urlencoded::parse(&request.body).into_owned();
  let (key, raw) = pairs.next().expect("one form pair");
  assert!(pairs.next().is_none(), "form body carries exactly one pair");
  (key, serde_json::from_str(&raw).expect("JSON item"))
}

fn zone_item(id: i64, name: &str) -> Value {
  json!({"Id": id, "Name": name, "SiteId": 12, "IsDeleted": false})
}

fn flight_item(id: i64) -> Value {
  json!({
    "Id": id,
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

#[tokio::test]
async fn test_list_sends_api_key_and_parses_items() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v1/site"))
    .and(header("X-Adzerk-ApiKey", "test_key"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "Items": [
        {"Id": 1, "Url": "http://a.example", "Title": "a", "IsDeleted": false},
        {"Id": 2, "Url": "http://b.example", "Title": "b", "IsDeleted": false, "PublisherAccountId": 9}
      ]
    })))
    .expect(1)
    .mount(&server)
    .await;

  let sites = client_for(&server, 0).sites().list().await.unwrap();
  assert_eq!(sites.len(), 2);
  assert_eq!(sites[1].publisher_account_id, Some(9));
}

#[tokio::test]
async fn test_list_with_null_items_is_empty() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v1/zone"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Items": null})))
    .mount(&server)
    .await;

  let zones = client_for(&server, 0).zones().list().await.unwrap();
  assert!(zones.is_empty());
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v1/flight/404"))
    .respond_with(ResponseTemplate::new(400))
    .expect(1)
    .mount(&server)
    .await;

  let err = client_for(&server, 2).flights().get(404).await.unwrap_err();
  assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn test_bad_body_is_parse_error() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v1/zone/1"))
    .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
    .mount(&server)
    .await;

  let err = client_for(&server, 0).zones().get(1).await.unwrap_err();
  assert!(matches!(err, Error::Parse(_)));
}

#[tokio::test]
async fn test_create_posts_form_wrapped_json() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/v1/zone"))
    .and(header("Content-Type", "application/x-www-form-urlencoded"))
    .respond_with(ResponseTemplate::new(200).set_body_json(zone_item(31, "sidebar")))
    .expect(1)
    .mount(&server)
    .await;

  let created = client_for(&server, 0).zones().create(&Zone::new("sidebar", 12)).await.unwrap();
  assert_eq!(created.id, Some(31));

  let requests = server.received_requests().await.unwrap();
  let (key, item) = form_item(&requests[0]);
  assert_eq!(key, "zone");
  assert!(item["Id"].is_null());
  assert_eq!(item["Name"], "sidebar");
  assert_eq!(item["SiteId"], 12);
}

#[tokio::test]
async fn test_update_with_replaces_record_on_success() {
  let server = MockServer::start().await;
  Mock::given(method("PUT"))
    .and(path("/v1/zone/31"))
    .respond_with(ResponseTemplate::new(200).set_body_json(zone_item(31, "footer")))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server, 0);
  let mut zone = Zone { id: Some(31), ..Zone::new("sidebar", 12) };
  client.zones().update_with(&mut zone, |z| z.name = "footer".to_string()).await.unwrap();
  assert_eq!(zone.name, "footer");

  let requests = server.received_requests().await.unwrap();
  let (key, item) = form_item(&requests[0]);
  assert_eq!(key, "zone");
  assert_eq!(item["Id"], 31);
  assert_eq!(item["Name"], "footer");
}

#[tokio::test]
async fn test_update_with_keeps_record_on_failure() {
  let server = MockServer::start().await;
  Mock::given(method("PUT"))
    .and(path("/v1/zone/31"))
    .respond_with(ResponseTemplate::new(500).set_body_string("nope"))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server, 0);
  let mut zone = Zone { id: Some(31), ..Zone::new("sidebar", 12) };
  let err = client
    .zones()
    .update_with(&mut zone, |z| {
      z.name = "footer".to_string();
      z.site_id = 99;
    })
    .await
    .unwrap_err();

  assert!(matches!(err, Error::UnexpectedStatus { status: 500, .. }));
  assert_eq!(zone.name, "sidebar");
  assert_eq!(zone.site_id, 12);
}

#[tokio::test]
async fn test_update_without_id_sends_nothing() {
  let server = MockServer::start().await;
  Mock::given(method("PUT")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

  let err = client_for(&server, 0).zones().update(&Zone::new("sidebar", 12)).await.unwrap_err();
  assert!(matches!(err, Error::MissingField(_)));
}

#[tokio::test]
async fn test_campaign_with_nested_flights() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v1/campaign/10"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "Id": 10,
      "Name": "spring",
      "AdvertiserId": 3,
      "StartDate": "2014-03-01T00:00:00",
      "IsDeleted": false,
      "IsActive": true,
      "Price": 100.0,
      "Flights": [flight_item(55), flight_item(56)]
    })))
    .mount(&server)
    .await;
  Mock::given(method("PUT"))
    .and(path("/v1/campaign/10"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "Id": 10,
      "Name": "spring",
      "AdvertiserId": 3,
      "StartDate": "2014-03-01T00:00:00",
      "IsDeleted": false,
      "IsActive": true,
      "Price": 100.0
    })))
    .mount(&server)
    .await;

  let client = client_for(&server, 0);
  let campaign: Campaign = client.campaigns().get(10).await.unwrap();
  assert_eq!(campaign.flights.len(), 2);
  assert_eq!(campaign.flights[1].id, Some(56));

  // The update carries the flights inline even though the reply omits them.
  let updated = client.campaigns().update(&campaign).await.unwrap();
  assert!(updated.flights.is_empty());

  let requests = server.received_requests().await.unwrap();
  let (key, item) = form_item(&requests[1]);
  assert_eq!(key, "campaign");
  assert_eq!(item["Flights"].as_array().unwrap().len(), 2);
  assert_eq!(item["Flights"][0]["PriorityId"], 2);
}

#[tokio::test]
async fn test_creative_maps_under_flight() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v1/flight/55/creative"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "Items": [
        {
          "Id": 900,
          "Creative": {"Id": 77},
          "FlightId": 55,
          "CampaignId": 10,
          "SizeOverride": false,
          "Iframe": false,
          "IsActive": true,
          "IsDeleted": false
        },
        {
          "Id": 901,
          "Creative": {
            "Id": 78,
            "Title": "Snoo",
            "Url": "http://reddit.com",
            "AdvertiserId": 3,
            "AdTypeId": 4,
            "IsSync": false,
            "IsActive": true,
            "IsDeleted": false
          },
          "FlightId": 55,
          "CampaignId": 10,
          "SizeOverride": false,
          "Iframe": true,
          "IsActive": true,
          "IsDeleted": false,
          "Percentage": 50
        }
      ]
    })))
    .mount(&server)
    .await;

  let maps = client_for(&server, 0).creative_maps().list(55).await.unwrap();
  assert_eq!(maps.len(), 2);
  assert!(maps[0].creative.is_stub());
  assert_eq!(maps[0].creative.id(), Some(77));
  assert_eq!(maps[1].creative.as_full().unwrap().title, "Snoo");
  assert_eq!(maps[1].percentage, Some(50));
}

#[tokio::test]
async fn test_create_creative_map_with_stub() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/v1/flight/55/creative"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "Id": 902,
      "Creative": {"Id": 77},
      "FlightId": 55,
      "CampaignId": 10,
      "SizeOverride": false,
      "Iframe": false,
      "IsActive": true,
      "IsDeleted": false
    })))
    .expect(1)
    .mount(&server)
    .await;

  let map = CreativeFlightMap::new(CreativeRef::stub(77), 55, 10);
  let created = client_for(&server, 0).creative_maps().create(&map).await.unwrap();
  assert_eq!(created.id, Some(902));

  let requests = server.received_requests().await.unwrap();
  let (key, item) = form_item(&requests[0]);
  assert_eq!(key, "creative");
  assert_eq!(item["Creative"], json!({"Id": 77}));
  assert_eq!(item["FlightId"], 55);
}

#[tokio::test]
async fn test_advertiser_search() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/v1/advertiser/search"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "Items": [{"Id": 3, "Title": "Acme", "IsActive": true, "IsDeleted": false}]
    })))
    .expect(1)
    .mount(&server)
    .await;

  let found = client_for(&server, 0).advertisers().search("Acme").await.unwrap();
  assert_eq!(found.len(), 1);
  assert_eq!(found[0].name, "Acme");

  let requests = server.received_requests().await.unwrap();
  let (key, item) = form_item(&requests[0]);
  assert_eq!(key, "advertiser");
  assert_eq!(item, json!({"Title": "Acme"}));
}

#[tokio::test]
async fn test_get_retries_server_errors() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v1/zone/31"))
    .respond_with(ResponseTemplate::new(503))
    .up_to_n_times(1)
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/v1/zone/31"))
    .respond_with(ResponseTemplate::new(200).set_body_json(zone_item(31, "sidebar")))
    .expect(1)
    .mount(&server)
    .await;

  let zone = client_for(&server, 2).zones().get(31).await.unwrap();
  assert_eq!(zone.name, "sidebar");
}

#[tokio::test]
async fn test_create_is_never_retried() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/v1/zone"))
    .respond_with(ResponseTemplate::new(503))
    .expect(1)
    .mount(&server)
    .await;

  let err = client_for(&server, 3).zones().create(&Zone::new("sidebar", 12)).await.unwrap_err();
  assert!(matches!(err, Error::UnexpectedStatus { status: 503, .. }));
}

fn map_item(id: i64, percentage: i64) -> Value {
  json!({
    "Id": id,
    "Creative": {"Id": 77},
    "FlightId": 55,
    "CampaignId": 10,
    "SizeOverride": false,
    "Iframe": false,
    "IsActive": true,
    "IsDeleted": false,
    "Percentage": percentage
  })
}

#[tokio::test]
async fn test_list_channels_with_null_keywords() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v1/channel"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "Items": [
        {"Id": 1, "Title": "house", "Commission": 0, "Engine": 0, "Keywords": null, "CPM": 0, "AdTypes": [4]},
        {"Id": 2, "Title": "sponsored", "Commission": 0.1, "Engine": 1, "Keywords": "pics", "CPM": 1.25, "AdTypes": []}
      ]
    })))
    .mount(&server)
    .await;

  let channels = client_for(&server, 0).channels().list().await.unwrap();
  assert_eq!(channels.len(), 2);
  assert_eq!(channels[0].keywords, None);
  assert_eq!(channels[1].keyword_list(), vec!["pics"]);
}

#[tokio::test]
async fn test_list_flights_with_unknown_code_and_zoned_date() {
  let server = MockServer::start().await;
  let mut odd = flight_item(56);
  odd["RateType"] = json!(7);
  odd["StartDate"] = json!("2014-03-01T00:00:00Z");
  Mock::given(method("GET"))
    .and(path("/v1/flight"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Items": [flight_item(55), odd]})))
    .mount(&server)
    .await;

  let flights = client_for(&server, 0).flights().list().await.unwrap();
  assert_eq!(flights.len(), 2);
  assert_eq!(flights[1].rate_type, Some(RateType::Other(7)));
  assert_eq!(flights[1].start_date, flights[0].start_date);
}

#[tokio::test]
async fn test_get_creative_map_under_flight() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v1/flight/55/creative/900"))
    .respond_with(ResponseTemplate::new(200).set_body_json(map_item(900, 50)))
    .expect(1)
    .mount(&server)
    .await;

  let map = client_for(&server, 0).creative_maps().get(55, 900).await.unwrap();
  assert_eq!(map.id, Some(900));
  assert_eq!(map.creative, CreativeRef::stub(77));
}

#[tokio::test]
async fn test_update_creative_map_puts_under_flight() {
  let server = MockServer::start().await;
  Mock::given(method("PUT"))
    .and(path("/v1/flight/55/creative/900"))
    .respond_with(ResponseTemplate::new(200).set_body_json(map_item(900, 25)))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server, 0);
  let mut map = CreativeFlightMap { id: Some(900), ..CreativeFlightMap::new(CreativeRef::stub(77), 55, 10) };
  client.creative_maps().update_with(&mut map, |m| m.percentage = Some(25)).await.unwrap();
  assert_eq!(map.percentage, Some(25));

  let requests = server.received_requests().await.unwrap();
  let (key, item) = form_item(&requests[0]);
  assert_eq!(key, "creative");
  assert_eq!(item["Id"], 900);
  assert_eq!(item["Percentage"], 25);
  assert_eq!(item["Creative"], json!({"Id": 77}));
}

#[tokio::test]
async fn test_creative_map_update_with_keeps_record_on_failure() {
  let server = MockServer::start().await;
  Mock::given(method("PUT"))
    .and(path("/v1/flight/55/creative/900"))
    .respond_with(ResponseTemplate::new(400))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server, 2);
  let mut map = CreativeFlightMap { id: Some(900), ..CreativeFlightMap::new(CreativeRef::stub(77), 55, 10) };
  let err = client
    .creative_maps()
    .update_with(&mut map, |m| {
      m.percentage = Some(25);
      m.is_active = false;
    })
    .await
    .unwrap_err();

  assert!(matches!(err, Error::NotFound(_)));
  assert_eq!(map.percentage, None);
  assert!(map.is_active);
}

#[tokio::test]
async fn test_update_retries_server_errors() {
  let server = MockServer::start().await;
  Mock::given(method("PUT"))
    .and(path("/v1/zone/31"))
    .respond_with(ResponseTemplate::new(502))
    .up_to_n_times(1)
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("PUT"))
    .and(path("/v1/zone/31"))
    .respond_with(ResponseTemplate::new(200).set_body_json(zone_item(31, "footer")))
    .expect(1)
    .mount(&server)
    .await;

  let zone = Zone { id: Some(31), ..Zone::new("footer", 12) };
  let updated = client_for(&server, 2).zones().update(&zone).await.unwrap();
  assert_eq!(updated.name, "footer");
}

#[tokio::test]
async fn test_get_retries_when_throttled() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v1/site/12"))
    .respond_with(ResponseTemplate::new(429))
    .up_to_n_times(1)
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/v1/site/12"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "Id": 12, "Url": "http://reddit.com", "Title": "reddit"
    })))
    .expect(1)
    .mount(&server)
    .await;

  let site = client_for(&server, 1).sites().get(12).await.unwrap();
  assert_eq!(site.title, "reddit");
}

#[tokio::test]
async fn test_throttled_get_gives_up_after_retries() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v1/site/12"))
    .respond_with(ResponseTemplate::new(429))
    .expect(2)
    .mount(&server)
    .await;

  let err = client_for(&server, 1).sites().get(12).await.unwrap_err();
  assert!(matches!(err, Error::RateLimit(_)));
}

// Only test in this binary that reads the process environment.
#[tokio::test]
async fn test_client_from_env() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v1/zone"))
    .and(header("X-Adzerk-ApiKey", "env_key"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Items": [zone_item(31, "sidebar")]})))
    .expect(1)
    .mount(&server)
    .await;

  std::env::set_var("ADZERK_API_KEY", "env_key");
  std::env::remove_var("ADZERK_RATE_LIMIT");
  std::env::remove_var("ADZERK_BASE_URL");
  let defaults = Config::from_env().unwrap();
  assert_eq!(defaults.base_url, "https://api.adzerk.net/v1");
  assert_eq!(defaults.rate_limit, 120);

  std::env::set_var("ADZERK_BASE_URL", format!("{}/v1", server.uri()));
  let config = Config::from_env().unwrap();
  std::env::remove_var("ADZERK_BASE_URL");
  std::env::remove_var("ADZERK_API_KEY");

  let zones = AdzerkClient::new(config).unwrap().zones().list().await.unwrap();
  assert_eq!(zones[0].name, "sidebar");
}
