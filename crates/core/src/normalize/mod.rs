//! Record normalization
//!
//! Turns header-indexed spreadsheet rows into [`SalesRecord`]s. Only the sale
//! date is mandatory; every other column is coerced leniently and degrades to
//! `None`.

mod date;
mod fields;

use saleslens_domain::constants::{
    COL_ADDRESS, COL_CHANNEL, COL_DISTRICT, COL_FACEBOOK_NAME, COL_PAYMENT, COL_PHONE, COL_PRICE,
    COL_PRODUCT, COL_POSTAL_CODE, COL_PROVINCE, COL_QUANTITY, COL_RECIPIENT, COL_SALESPERSON,
    COL_SALE_DATE, COL_SEQUENCE, COL_SUBDISTRICT,
};
use saleslens_domain::{PhonePolicy, RawRow, SalesRecord};

pub use date::{parse_sale_date, serial_to_datetime};
pub use fields::{parse_number, parse_phone, parse_text};

/// Row-to-record conversion for one source.
#[derive(Debug, Clone)]
pub struct RecordNormalizer {
    date_field: String,
    phone_field: String,
    phone_policy: PhonePolicy,
}

impl Default for RecordNormalizer {
    fn default() -> Self {
        Self::new(COL_SALE_DATE, COL_PHONE)
    }
}

impl RecordNormalizer {
    pub fn new(date_field: impl Into<String>, phone_field: impl Into<String>) -> Self {
        Self {
            date_field: date_field.into(),
            phone_field: phone_field.into(),
            phone_policy: PhonePolicy::DigitsOnly,
        }
    }

    /// Normalizer for the bulk workbook.
    pub fn bulk() -> Self {
        Self::default()
    }

    /// Normalizer for the live feed (country code localized).
    pub fn live() -> Self {
        Self::default().with_phone_policy(PhonePolicy::LocalizeCountryCode)
    }

    #[must_use]
    pub fn with_phone_policy(mut self, policy: PhonePolicy) -> Self {
        self.phone_policy = policy;
        self
    }

    pub fn phone_policy(&self) -> PhonePolicy {
        self.phone_policy
    }

    /// Normalize one row. `None` means the sale date is missing or unparseable.
    pub fn normalize(&self, row: &RawRow) -> Option<SalesRecord> {
        let sale_date = row.get(&self.date_field).and_then(parse_sale_date)?;

        let text = |column: &str| row.get(column).and_then(parse_text);
        let number = |column: &str| row.get(column).and_then(parse_number);

        Some(SalesRecord {
            sale_date,
            phone: row.get(&self.phone_field).and_then(|cell| parse_phone(cell, self.phone_policy)),
            sequence_number: number(COL_SEQUENCE),
            channel: text(COL_CHANNEL),
            payment_method: text(COL_PAYMENT),
            facebook_name: text(COL_FACEBOOK_NAME),
            salesperson_name: text(COL_SALESPERSON),
            product_name: text(COL_PRODUCT),
            quantity: number(COL_QUANTITY),
            price: number(COL_PRICE),
            recipient_name: text(COL_RECIPIENT),
            address: text(COL_ADDRESS),
            subdistrict: text(COL_SUBDISTRICT),
            district: text(COL_DISTRICT),
            province: text(COL_PROVINCE),
            postal_code: text(COL_POSTAL_CODE),
        })
    }

    /// Normalize a batch, returning the kept records and the dropped count.
    pub fn normalize_all<'a, I>(&self, rows: I) -> (Vec<SalesRecord>, usize)
    where
        I: IntoIterator<Item = &'a RawRow>,
    {
        let mut dropped = 0;
        let records = rows
            .into_iter()
            .filter_map(|row| {
                let record = self.normalize(row);
                if record.is_none() {
                    dropped += 1;
                }
                record
            })
            .collect();
        (records, dropped)
    }
}

/// Normalize a row with digits-only phones.
pub fn normalize_row(row: &RawRow, date_field: &str, phone_field: &str) -> Option<SalesRecord> {
    RecordNormalizer::new(date_field, phone_field).normalize(row)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use saleslens_domain::CellValue;

    use super::*;

    fn sample_row() -> RawRow {
        RawRow::new()
            .with(COL_SALE_DATE, "15/03/2025")
            .with(COL_PHONE, "+66 81-234-5678")
            .with(COL_SEQUENCE, 12.0)
            .with(COL_PRODUCT, "  Fertilizer A ")
            .with(COL_QUANTITY, "2")
            .with(COL_PRICE, "1,250.50")
            .with(COL_RECIPIENT, "Somchai")
            .with(COL_POSTAL_CODE, 10110.0)
            .with(COL_ADDRESS, "   ")
    }

    #[test]
    fn bulk_row_normalizes_every_column() {
        let record = RecordNormalizer::bulk().normalize(&sample_row()).unwrap();
        assert_eq!(record.sale_date, Utc.with_ymd_and_hms(2025, 3, 15, 0, 0, 0).unwrap());
        assert_eq!(record.phone.as_deref(), Some("66812345678"));
        assert_eq!(record.sequence_number, Some(12.0));
        assert_eq!(record.product_name.as_deref(), Some("Fertilizer A"));
        assert_eq!(record.quantity, Some(2.0));
        assert_eq!(record.price, Some(1250.5));
        assert_eq!(record.postal_code.as_deref(), Some("10110"));
        assert_eq!(record.address, None);
        assert_eq!(record.channel, None);
    }

    #[test]
    fn live_policy_localizes_phone() {
        let record = RecordNormalizer::live().normalize(&sample_row()).unwrap();
        assert_eq!(record.phone.as_deref(), Some("0812345678"));
    }

    #[test]
    fn row_without_date_is_dropped() {
        let row = sample_row().with(COL_SALE_DATE, "soon");
        assert!(normalize_row(&row, COL_SALE_DATE, COL_PHONE).is_none());
        assert!(normalize_row(&RawRow::new(), COL_SALE_DATE, COL_PHONE).is_none());
    }

    #[test]
    fn row_without_phone_is_kept() {
        let row = RawRow::new().with(COL_SALE_DATE, 45000.0).with(COL_PHONE, CellValue::Empty);
        let record = normalize_row(&row, COL_SALE_DATE, COL_PHONE).unwrap();
        assert!(record.phone.is_none());
    }

    #[test]
    fn custom_field_names() {
        let row = RawRow::new().with("date", "2025-01-02").with("tel", "081 111 2222");
        let record = normalize_row(&row, "date", "tel").unwrap();
        assert_eq!(record.phone.as_deref(), Some("0811112222"));
    }

    #[test]
    fn normalize_all_counts_drops() {
        let rows = vec![sample_row(), RawRow::new().with(COL_SALE_DATE, "32/01/2025")];
        let (records, dropped) = RecordNormalizer::bulk().normalize_all(&rows);
        assert_eq!(records.len(), 1);
        assert_eq!(dropped, 1);
    }
}
