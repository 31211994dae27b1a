//! Normalized sales transaction

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// One transaction line after normalization.
///
/// `sale_date` is always present; every other column degrades to `None`
/// instead of rejecting the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SalesRecord {
    pub sale_date: DateTime<Utc>,
    /// Canonical digits-only phone number
    pub phone: Option<String>,
    pub sequence_number: Option<f64>,
    pub channel: Option<String>,
    pub payment_method: Option<String>,
    pub facebook_name: Option<String>,
    pub salesperson_name: Option<String>,
    pub product_name: Option<String>,
    pub quantity: Option<f64>,
    pub price: Option<f64>,
    pub recipient_name: Option<String>,
    pub address: Option<String>,
    pub subdistrict: Option<String>,
    pub district: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
}

impl SalesRecord {
    /// A record with only the sale date set.
    pub fn new(sale_date: DateTime<Utc>) -> Self {
        Self {
            sale_date,
            phone: None,
            sequence_number: None,
            channel: None,
            payment_method: None,
            facebook_name: None,
            salesperson_name: None,
            product_name: None,
            quantity: None,
            price: None,
            recipient_name: None,
            address: None,
            subdistrict: None,
            district: None,
            province: None,
            postal_code: None,
        }
    }

    /// Address parts that are present, in postal order.
    pub fn address_parts(&self) -> impl Iterator<Item = &str> {
        [&self.address, &self.subdistrict, &self.district, &self.province, &self.postal_code]
            .into_iter()
            .filter_map(|part| part.as_deref())
    }
}
