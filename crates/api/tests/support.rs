//! Shared wiring for app-level integration tests.

#![allow(dead_code)]

use saleslens_domain::{BulkSourceConfig, Config, LiveFeedConfig};
use saleslens_lib::AppContext;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const FEED_ID: &str = "sheet-app";
pub const CALL_FILENAME: &str = "myrecordings_20250301_103000_out_0812345678_0898765432.m4a";

/// Configuration pointing both sources at `server`.
pub fn config_for(server: &MockServer, with_feed: bool) -> Config {
    Config {
        bulk: BulkSourceConfig { url: format!("{}/sales_data.xlsx", server.uri()) },
        live: LiveFeedConfig {
            spreadsheet_id: with_feed.then(|| FEED_ID.to_string()),
            api_base_url: server.uri(),
            access_token: Some("ya29.app".to_string()),
            ..LiveFeedConfig::default()
        },
        ..Config::default()
    }
}

/// Mock server whose workbook is missing and whose live feed holds one
/// customer with two purchases.
pub async fn start_sources() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sales_data.xlsx"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/spreadsheets/{FEED_ID}/values:batchGet")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "valueRanges": [
                { "values": [
                    ["สินค้า", "หมวดหมู่", "เบอร์", "ชื่อ"],
                    ["Fertilizer A", "Organic", "0812345678", "Anan"]
                ] },
                { "values": [
                    ["วันที่ขาย", "สินค้า", "ชื่อผู้รับ", "เบอร์โทร", "ราคา", "ชื่อ Facebook"],
                    ["01/03/2025", "Fertilizer A", "Somchai", "0898765432", "1200", "Somchai Farm"],
                    ["20/02/2025", "Seed B", "Somchai", "66898765432", "300", ""]
                ] }
            ]
        })))
        .mount(&server)
        .await;

    server
}

pub fn context_for(server: &MockServer, with_feed: bool) -> AppContext {
    AppContext::new_with_config(config_for(server, with_feed)).expect("context should build")
}
