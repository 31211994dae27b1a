//! Sale date coercion

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use saleslens_domain::constants::{MILLIS_PER_DAY, SPREADSHEET_EPOCH_OFFSET_DAYS};
use saleslens_domain::CellValue;

const ISO_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const ISO_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Parse a sale date cell.
///
/// Accepted inputs, in order: native date cells, spreadsheet serial numbers
/// (numeric cells or numeric text), `dd/mm/yyyy` and ISO-like strings. Dates
/// without a time of day resolve to midnight UTC.
pub fn parse_sale_date(cell: &CellValue) -> Option<DateTime<Utc>> {
    match cell {
        CellValue::DateTime(value) => Some(value.and_utc()),
        CellValue::Number(serial) => serial_to_datetime(*serial),
        CellValue::Text(text) => parse_date_text(text.trim()),
        CellValue::Empty | CellValue::Bool(_) => None,
    }
}

/// Convert a spreadsheet serial day number to UTC.
///
/// Serial `25569` is 1970-01-01. Non-positive or non-finite serials are
/// rejected.
pub fn serial_to_datetime(serial: f64) -> Option<DateTime<Utc>> {
    if !serial.is_finite() || serial <= 0.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let millis = ((serial - SPREADSHEET_EPOCH_OFFSET_DAYS) * MILLIS_PER_DAY).round() as i64;
    DateTime::from_timestamp_millis(millis)
}

fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    if text.is_empty() {
        return None;
    }
    if let Ok(serial) = text.parse::<f64>() {
        return serial_to_datetime(serial);
    }
    if let Some(parts) = split_day_month_year(text) {
        // A well-formed dd/mm/yyyy that fails validation is rejected outright
        // rather than reinterpreted by the ISO fallbacks.
        return parts;
    }
    parse_iso(text)
}

/// `Some(result)` when `text` has the dd/mm/yyyy shape, `None` otherwise.
fn split_day_month_year(text: &str) -> Option<Option<DateTime<Utc>>> {
    let mut parts = text.split('/');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let day: u32 = leading_int(day)?;
    let month: u32 = leading_int(month)?;
    let year: i32 = leading_int(year)?;
    if year <= 1000 {
        return None;
    }
    Some(NaiveDate::from_ymd_opt(year, month, day).and_then(midnight_utc))
}

/// Integer prefix of `part`, mirroring lenient spreadsheet parsing of
/// values such as `"2025 10:30"`.
fn leading_int<T: std::str::FromStr>(part: &str) -> Option<T> {
    let part = part.trim_start();
    let end = part.find(|c: char| !c.is_ascii_digit()).unwrap_or(part.len());
    part[..end].parse().ok()
}

fn parse_iso(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(value) = DateTime::parse_from_rfc3339(text) {
        return Some(value.with_timezone(&Utc));
    }
    for format in ISO_DATETIME_FORMATS {
        if let Ok(value) = NaiveDateTime::parse_from_str(text, format) {
            return Some(value.and_utc());
        }
    }
    ISO_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .and_then(midnight_utc)
}

fn midnight_utc(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|value| value.and_utc())
}
