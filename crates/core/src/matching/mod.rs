//! Call/customer matching
//!
//! Resolves which salesperson and which customer a call belongs to by
//! comparing digit-stripped phone numbers.

use saleslens_domain::{digits_only, CallMetadata, SalesRecord, Salesperson};
use serde::{Deserialize, Serialize};

/// Result of resolving a call. An unmatched call yields empty fields, never
/// an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallMatch {
    pub salesperson: Option<Salesperson>,
    pub customer_phone: Option<String>,
    /// Customer's records, newest first.
    pub customer_records: Vec<SalesRecord>,
}

/// Match `call` against the salesperson list and the merged history.
///
/// Outbound calls are placed by the salesperson (source phone); inbound calls
/// reach the salesperson on the destination phone.
pub fn match_call(
    call: Option<&CallMetadata>,
    salespersons: &[Salesperson],
    history: &[SalesRecord],
) -> CallMatch {
    let Some(call) = call else {
        return CallMatch::default();
    };

    let salesperson_digits = digits_only(call.salesperson_phone());
    let salesperson = if salesperson_digits.is_empty() {
        None
    } else {
        salespersons
            .iter()
            .find(|candidate| digits_only(&candidate.phone) == salesperson_digits)
            .cloned()
    };

    let customer_digits = digits_only(call.customer_phone());
    if customer_digits.is_empty() {
        return CallMatch { salesperson, ..CallMatch::default() };
    }

    let customer_records = history
        .iter()
        .filter(|record| {
            record.phone.as_deref().is_some_and(|phone| digits_only(phone) == customer_digits)
        })
        .cloned()
        .collect();

    CallMatch { salesperson, customer_phone: Some(customer_digits), customer_records }
}

/// One purchase as presented to the analysis prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerHistoryEntry {
    /// `YYYY-MM-DD` (UTC)
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl From<&SalesRecord> for CustomerHistoryEntry {
    fn from(record: &SalesRecord) -> Self {
        Self {
            date: record.sale_date.format("%Y-%m-%d").to_string(),
            product: record.product_name.clone(),
            quantity: record.quantity,
            price: record.price,
            recipient_name: record.recipient_name.clone(),
            phone: record.phone.clone(),
        }
    }
}

/// Everything the analysis step receives about a call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallContext {
    pub salesperson: Option<Salesperson>,
    pub customer_phone: Option<String>,
    pub product_context: Option<String>,
    pub history: Vec<CustomerHistoryEntry>,
}

impl CallContext {
    pub fn new(matched: CallMatch, product_context: String) -> Self {
        Self {
            history: matched.customer_records.iter().map(CustomerHistoryEntry::from).collect(),
            salesperson: matched.salesperson,
            customer_phone: matched.customer_phone,
            product_context: (!product_context.is_empty()).then_some(product_context),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
    use saleslens_domain::{CallDirection, PhonePolicy};

    use super::*;

    fn call(direction: CallDirection, source: &str, destination: &str) -> CallMetadata {
        CallMetadata {
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            call_type: direction,
            source_phone: source.into(),
            destination_phone: destination.into(),
            original_filename: "call.m4a".into(),
        }
    }

    fn purchase(day: u32, phone: &str, product: &str) -> SalesRecord {
        let mut record = SalesRecord::new(Utc.with_ymd_and_hms(2025, 2, day, 0, 0, 0).unwrap());
        record.phone = Some(phone.into());
        record.product_name = Some(product.into());
        record
    }

    fn team() -> Vec<Salesperson> {
        vec![
            Salesperson {
                name: "Anan".into(),
                phone: PhonePolicy::LocalizeCountryCode.canonicalize("66812345678").unwrap(),
            },
            Salesperson { name: "Anan (duplicate)".into(), phone: "0812345678".into() },
        ]
    }

    #[test]
    fn outbound_matches_source_as_salesperson() {
        let history = vec![purchase(3, "0898765432", "B"), purchase(1, "0898765432", "A")];
        let matched = match_call(
            Some(&call(CallDirection::Outbound, "0812345678", "0898765432")),
            &team(),
            &history,
        );
        assert_eq!(matched.salesperson.unwrap().name, "Anan");
        assert_eq!(matched.customer_phone.as_deref(), Some("0898765432"));
        let products: Vec<_> =
            matched.customer_records.iter().filter_map(|r| r.product_name.as_deref()).collect();
        assert_eq!(products, ["B", "A"]);
    }

    #[test]
    fn inbound_matches_destination_as_salesperson() {
        let matched = match_call(
            Some(&call(CallDirection::Inbound, "0898765432", "081-234-5678")),
            &team(),
            &[purchase(1, "0898765432", "A")],
        );
        assert_eq!(matched.salesperson.unwrap().name, "Anan");
        assert_eq!(matched.customer_records.len(), 1);
    }

    #[test]
    fn unknown_customer_yields_empty_history() {
        let matched = match_call(
            Some(&call(CallDirection::Outbound, "0800000000", "0811110000")),
            &team(),
            &[purchase(1, "0898765432", "A")],
        );
        assert!(matched.salesperson.is_none());
        assert_eq!(matched.customer_phone.as_deref(), Some("0811110000"));
        assert!(matched.customer_records.is_empty());
    }

    #[test]
    fn missing_call_or_phones_match_nothing() {
        let history = vec![purchase(1, "0898765432", "A")];
        assert_eq!(match_call(None, &team(), &history), CallMatch::default());
        assert_eq!(
            match_call(Some(&call(CallDirection::Outbound, "", "")), &team(), &history),
            CallMatch::default()
        );
    }

    #[test]
    fn context_projects_history_for_prompt() {
        let mut record = purchase(7, "0898765432", "A");
        record.price = Some(250.0);
        let matched = CallMatch {
            salesperson: None,
            customer_phone: Some("0898765432".into()),
            customer_records: vec![record],
        };
        let context = CallContext::new(matched, String::new());
        assert!(context.product_context.is_none());
        assert_eq!(context.history[0].date, "2025-02-07");
        let json = serde_json::to_value(&context).unwrap();
        assert_eq!(json["history"][0]["price"], 250.0);
        assert_eq!(json["customerPhone"], "0898765432");
    }
}
