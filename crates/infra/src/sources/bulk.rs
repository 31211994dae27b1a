//! Bulk workbook source
//!
//! Downloads the published workbook and decodes its first worksheet. The
//! first row holds the column headers.

use std::io::Cursor;

use async_trait::async_trait;
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use reqwest::Method;
use saleslens_core::{BulkSource, RecordNormalizer};
use saleslens_domain::{
    BulkSourceConfig, CellValue, RawRow, Result, SalesLensError, SalesRecord,
};
use tracing::{debug, info, instrument};

use crate::errors::InfraError;
use crate::http::HttpClient;

/// [`BulkSource`] backed by an HTTP-published workbook (xlsx, xls or ods).
pub struct WorkbookSource {
    client: HttpClient,
    url: String,
    normalizer: RecordNormalizer,
}

impl WorkbookSource {
    pub fn new(client: HttpClient, url: impl Into<String>) -> Self {
        Self { client, url: url.into(), normalizer: RecordNormalizer::bulk() }
    }

    pub fn from_config(client: HttpClient, config: &BulkSourceConfig) -> Self {
        Self::new(client, config.url.clone())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn download(&self) -> Result<Vec<u8>> {
        let response = self
            .client
            .send(self.client.request(Method::GET, self.url.as_str()))
            .await
            .map_err(|err| match err {
                SalesLensError::Network(message) => {
                    SalesLensError::SourceUnavailable(format!("workbook download failed: {message}"))
                }
                other => other,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SalesLensError::SourceUnavailable(format!(
                "workbook download failed (HTTP {})",
                status.as_u16()
            )));
        }

        let bytes = response.bytes().await.map_err(InfraError::from)?;
        debug!(bytes = bytes.len(), "workbook downloaded");
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl BulkSource for WorkbookSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_records(&self) -> Result<Vec<SalesRecord>> {
        let bytes = self.download().await?;
        let rows = decode_workbook(&bytes)?;
        let (records, dropped) = self.normalizer.normalize_all(&rows);
        if dropped > 0 {
            debug!(dropped, "skipped rows without a parseable sale date");
        }
        info!(rows = rows.len(), records = records.len(), "bulk workbook decoded");
        Ok(records)
    }
}

/// Decode the first worksheet of a workbook into header-indexed rows.
///
/// # Errors
/// `SourceUnavailable` when the workbook has no worksheet, `InvalidInput`
/// when the bytes are not a readable workbook.
pub fn decode_workbook(bytes: &[u8]) -> Result<Vec<RawRow>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(InfraError::from)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SalesLensError::SourceUnavailable("workbook has no worksheets".into()))?
        .map_err(InfraError::from)?;

    if range.is_empty() {
        return Err(SalesLensError::SourceUnavailable("first worksheet is empty".into()));
    }
    Ok(rows_from_range(&range))
}

/// Split a worksheet range into a header row and data rows. Fully blank rows
/// are skipped.
pub fn rows_from_range(range: &Range<Data>) -> Vec<RawRow> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = header.iter().map(|cell| cell.to_string().trim().to_string()).collect();

    rows.map(|row| RawRow::from_header(&headers, row.iter().map(cell_value)))
        .filter(|row| !row.is_blank())
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(text) => CellValue::from(text.as_str()),
        Data::Float(value) => CellValue::Number(*value),
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Bool(value) => CellValue::Bool(*value),
        // Serial day number; the normalizer converts it.
        Data::DateTime(value) => CellValue::Number(value.as_f64()),
        Data::DateTimeIso(text) | Data::DurationIso(text) => CellValue::from(text.as_str()),
    }
}
