//! Shared helpers for infra integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use saleslens_domain::constants::{COL_PHONE, COL_PRODUCT, COL_RECIPIENT, COL_SALE_DATE};
use saleslens_domain::{FeedHandle, LiveFeedConfig};
use saleslens_infra::{GoogleSheetsSource, HttpClient, StaticTokenProvider};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const FEED_ID: &str = "sheet-123";
pub const TOKEN: &str = "ya29.test-token";

pub const SALESPERSON_PHONE: &str = "0812345678";
pub const CUSTOMER_PHONE: &str = "0898765432";

pub fn feed() -> FeedHandle {
    FeedHandle::new(FEED_ID)
}

/// Live feed configuration pointing at the mock server.
pub fn live_config(server: &MockServer) -> LiveFeedConfig {
    LiveFeedConfig {
        spreadsheet_id: Some(FEED_ID.to_string()),
        api_base_url: server.uri(),
        access_token: Some(TOKEN.to_string()),
        ..LiveFeedConfig::default()
    }
}

pub fn sheets_source(server: &MockServer) -> GoogleSheetsSource {
    let config = live_config(server);
    let client = HttpClient::new().expect("http client should build");
    GoogleSheetsSource::new(client, Arc::new(StaticTokenProvider::from_config(&config)), &config)
}

pub fn signed_out_source(server: &MockServer) -> GoogleSheetsSource {
    let config = live_config(server);
    let client = HttpClient::new().expect("http client should build");
    GoogleSheetsSource::new(client, Arc::new(StaticTokenProvider::signed_out()), &config)
}

/// Reference range: one product with its salesperson.
pub fn reference_values() -> Value {
    json!([
        ["สินค้า", "หมวดหมู่", "เบอร์พนักงาน", "ชื่อพนักงาน"],
        ["Fertilizer A", "Organic", "+66812345678", "Anan"]
    ])
}

/// Realtime sales range with two rows for the customer.
pub fn sales_values() -> Value {
    json!([
        [COL_SALE_DATE, COL_PRODUCT, COL_RECIPIENT, COL_PHONE],
        ["01/03/2025", "Fertilizer A", "Somchai", "66898765432"],
        ["20/02/2025", "Seed B", "Somchai", "0898765432"]
    ])
}

pub fn batch_get_body(reference: Value, sales: Value) -> Value {
    json!({
        "spreadsheetId": FEED_ID,
        "valueRanges": [
            { "range": "'ข้อมูลสินค้า'!A1:D2", "majorDimension": "ROWS", "values": reference },
            { "range": "'SalesData_Realtime'!A1:D3", "majorDimension": "ROWS", "values": sales }
        ]
    })
}
