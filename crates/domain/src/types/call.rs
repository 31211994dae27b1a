//! Call recording metadata

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_label_conversions;

/// Who placed the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum CallDirection {
    /// Customer called the salesperson
    Inbound,
    /// Salesperson called the customer
    Outbound,
}

impl_domain_label_conversions!(CallDirection {
    Inbound => "in",
    Outbound => "out",
});

/// Metadata recovered from a recording filename. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CallMetadata {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub call_type: CallDirection,
    pub source_phone: String,
    pub destination_phone: String,
    pub original_filename: String,
}

impl CallMetadata {
    /// The phone belonging to the salesperson.
    pub fn salesperson_phone(&self) -> &str {
        match self.call_type {
            CallDirection::Outbound => &self.source_phone,
            CallDirection::Inbound => &self.destination_phone,
        }
    }

    /// The phone belonging to the customer.
    pub fn customer_phone(&self) -> &str {
        match self.call_type {
            CallDirection::Outbound => &self.destination_phone,
            CallDirection::Inbound => &self.source_phone,
        }
    }
}
