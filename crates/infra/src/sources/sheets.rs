//! Google Sheets live feed
//!
//! Reads the reference range (products, categories, salespersons) and the
//! realtime transactional range with a single `values:batchGet` call, and
//! appends analysis summaries with `values:append`.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Method, Response, StatusCode};
use saleslens_core::normalize::parse_text;
use saleslens_core::{AnalysisLogSink, LiveSource, RecordNormalizer};
use saleslens_domain::constants::{REALTIME_SALES_SHEET, REQUIRED_LIVE_HEADERS};
use saleslens_domain::{
    AnalysisLogEntry, CellValue, FeedHandle, LiveFeedConfig, LiveSnapshot, PhonePolicy,
    ProductContext, RawRow, Result, SalesLensError, SalesRecord, Salesperson,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info, instrument};

use super::token::AccessTokenProvider;
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Google Sheets API v4 client implementing [`LiveSource`] and
/// [`AnalysisLogSink`].
pub struct GoogleSheetsSource {
    client: HttpClient,
    tokens: Arc<dyn AccessTokenProvider>,
    api_base: String,
    reference_range: String,
    sales_range: String,
    analysis_log_range: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchGetResponse {
    #[serde(default)]
    value_ranges: Vec<ValueRange>,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

impl GoogleSheetsSource {
    pub fn new(
        client: HttpClient,
        tokens: Arc<dyn AccessTokenProvider>,
        config: &LiveFeedConfig,
    ) -> Self {
        Self {
            client,
            tokens,
            api_base: config.api_base_url.trim_end_matches('/').to_string(),
            reference_range: config.reference_range.clone(),
            sales_range: config.sales_range.clone(),
            analysis_log_range: config.analysis_log_range.clone(),
        }
    }

    fn token(&self) -> Result<String> {
        self.tokens
            .access_token()
            .ok_or_else(|| SalesLensError::Auth("no signed-in Google session".into()))
    }

    fn values_url(&self, feed: &FeedHandle, path: &str) -> String {
        format!(
            "{}/spreadsheets/{}/values{}",
            self.api_base,
            urlencoding::encode(feed.as_str()),
            path
        )
    }

    async fn batch_get(&self, feed: &FeedHandle) -> Result<BatchGetResponse> {
        let token = self.token()?;
        let request = self
            .client
            .request(Method::GET, self.values_url(feed, ":batchGet"))
            .bearer_auth(token)
            .query(&[("ranges", self.reference_range.as_str()), ("ranges", self.sales_range.as_str())]);

        let response = check_status(self.client.send(request).await?, "batchGet").await?;
        let body = response.bytes().await.map_err(InfraError::from)?;
        Ok(serde_json::from_slice(&body).map_err(InfraError::from)?)
    }
}

/// Map a non-success Sheets response to a domain error.
async fn check_status(response: Response, operation: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
    let message = format!("Google Sheets {} failed ({}): {}", operation, status, error_text.trim());
    let error = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SalesLensError::Auth(message),
        StatusCode::NOT_FOUND => SalesLensError::NotFound(message),
        _ => SalesLensError::SourceUnavailable(message),
    };
    Err(error)
}

#[async_trait]
impl LiveSource for GoogleSheetsSource {
    fn is_authenticated(&self) -> bool {
        self.tokens.access_token().is_some()
    }

    #[instrument(skip(self, feed), fields(feed = %feed))]
    async fn fetch_snapshot(&self, feed: &FeedHandle) -> Result<LiveSnapshot> {
        let response = self.batch_get(feed).await?;
        if response.value_ranges.is_empty() {
            return Err(SalesLensError::InvalidInput(
                "Google Sheets returned no value ranges".into(),
            ));
        }

        let mut ranges = response.value_ranges.into_iter();
        let reference = ranges.next().map(|range| range.values).unwrap_or_default();
        let sales = ranges.next().map(|range| range.values).unwrap_or_default();

        let snapshot = parse_live_snapshot(&reference, &sales)?;
        info!(
            records = snapshot.records.len(),
            salespersons = snapshot.salespersons.len(),
            "live feed fetched"
        );
        Ok(snapshot)
    }
}

#[async_trait]
impl AnalysisLogSink for GoogleSheetsSource {
    #[instrument(skip(self, feed, entry), fields(feed = %feed))]
    async fn append_summary(&self, feed: &FeedHandle, entry: &AnalysisLogEntry) -> Result<()> {
        let token = self.token()?;
        let path = format!("/{}:append", urlencoding::encode(&self.analysis_log_range));
        let request = self
            .client
            .request(Method::POST, self.values_url(feed, &path))
            .bearer_auth(token)
            .query(&[("valueInputOption", "USER_ENTERED"), ("insertDataOption", "INSERT_ROWS")])
            .json(&json!({ "values": [entry.to_row()] }));

        check_status(self.client.send(request).await?, "append").await?;
        debug!("analysis row appended");
        Ok(())
    }
}

/// Build a [`LiveSnapshot`] from the raw reference and transactional ranges.
///
/// # Errors
/// `SchemaMismatch` when the transactional header row lacks a required
/// column.
pub fn parse_live_snapshot(reference: &[Vec<Value>], sales: &[Vec<Value>]) -> Result<LiveSnapshot> {
    let (product_context, salespersons) = parse_reference(reference);
    Ok(LiveSnapshot {
        records: parse_sales(sales)?,
        salespersons,
        product_context: product_context.into_inner(),
    })
}

/// Columns: product, category, salesperson phone, salesperson name. The first
/// row is a header.
fn parse_reference(rows: &[Vec<Value>]) -> (ProductContext, Vec<Salesperson>) {
    let entries: Vec<[String; 4]> = rows
        .iter()
        .skip(1)
        .map(|row| std::array::from_fn(|i| row.get(i).map(cell_text).unwrap_or_default()))
        .collect();

    let context = ProductContext::from_entries(entries.iter().map(|[product, category, _, name]| {
        (product.as_str(), category.as_str(), Some(name.as_str()))
    }));

    let salespersons = entries
        .iter()
        .filter(|[_, _, _, name]| !name.is_empty())
        .filter_map(|[_, _, phone, name]| {
            PhonePolicy::LocalizeCountryCode
                .canonicalize(phone)
                .map(|phone| Salesperson { name: name.clone(), phone })
        })
        .collect();

    (context, salespersons)
}

fn parse_sales(rows: &[Vec<Value>]) -> Result<Vec<SalesRecord>> {
    if rows.len() < 2 {
        return Ok(Vec::new());
    }

    let headers: Vec<String> = rows[0].iter().map(cell_text).collect();
    let missing: Vec<&str> = REQUIRED_LIVE_HEADERS
        .iter()
        .copied()
        .filter(|required| !headers.iter().any(|header| header == required))
        .collect();
    if !missing.is_empty() {
        return Err(SalesLensError::SchemaMismatch(format!(
            "sheet '{}' is missing required headers: {}",
            REALTIME_SALES_SHEET,
            missing.join(", ")
        )));
    }

    let raw_rows: Vec<RawRow> = rows[1..]
        .iter()
        .map(|row| RawRow::from_header(&headers, row.iter().map(cell_value)))
        .filter(|row| !row.is_blank())
        .collect();

    let (records, dropped) = RecordNormalizer::live().normalize_all(&raw_rows);
    if dropped > 0 {
        debug!(dropped, "skipped live rows without a parseable sale date");
    }
    Ok(records)
}

fn cell_value(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Empty,
        Value::String(text) => CellValue::from(text.as_str()),
        Value::Number(number) => number.as_f64().map_or(CellValue::Empty, CellValue::Number),
        Value::Bool(flag) => CellValue::Bool(*flag),
        other => CellValue::Text(other.to_string()),
    }
}

fn cell_text(value: &Value) -> String {
    parse_text(&cell_value(value)).unwrap_or_default()
}
