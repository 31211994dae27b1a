//! Customer directory built from the merged history

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use saleslens_domain::constants::{MISSING_ADDRESS_LABEL, UNKNOWN_CUSTOMER_NAME};
use saleslens_domain::{digits_only, SalesRecord};
use serde::{Deserialize, Serialize};

/// Per-phone customer aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub phone: String,
    pub name: String,
    pub facebook_name: Option<String>,
    pub address: String,
    pub total_spent: f64,
    /// Number of distinct sale days
    pub order_count: usize,
}

/// Group `history` by phone. Records without a phone are not customers.
///
/// Customers are listed in order of their most recent purchase when
/// `history` is newest first.
pub fn summarize_customers(history: &[SalesRecord]) -> Vec<CustomerSummary> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&SalesRecord>> = HashMap::new();
    for record in history {
        let Some(phone) = record.phone.as_deref() else { continue };
        groups
            .entry(phone)
            .or_insert_with(|| {
                order.push(phone);
                Vec::new()
            })
            .push(record);
    }

    order
        .into_iter()
        .filter_map(|phone| groups.get(phone).map(|records| summarize(phone, records)))
        .collect()
}

fn summarize(phone: &str, records: &[&SalesRecord]) -> CustomerSummary {
    // First record with the newest date
    let latest = records.iter().copied().fold(None, |best: Option<&SalesRecord>, record| match best {
        Some(best) if best.sale_date >= record.sale_date => Some(best),
        _ => Some(record),
    });
    let name = latest
        .and_then(|r| r.recipient_name.clone().or_else(|| r.facebook_name.clone()))
        .unwrap_or_else(|| UNKNOWN_CUSTOMER_NAME.to_string());
    let address = latest
        .map(|r| r.address_parts().collect::<Vec<_>>().join(" "))
        .filter(|joined| !joined.trim().is_empty())
        .unwrap_or_else(|| MISSING_ADDRESS_LABEL.to_string());
    let order_days: HashSet<NaiveDate> =
        records.iter().map(|r| r.sale_date.date_naive()).collect();

    CustomerSummary {
        phone: phone.to_string(),
        name,
        facebook_name: latest.and_then(|r| r.facebook_name.clone()),
        address,
        total_spent: records.iter().filter_map(|r| r.price).sum(),
        order_count: order_days.len(),
    }
}

/// Customers whose phone contains the digits of `term`, or whose name or
/// Facebook name contains `term` (case-insensitive). A blank term matches
/// nobody.
pub fn search_customers<'a>(
    customers: &'a [CustomerSummary],
    term: &str,
) -> Vec<&'a CustomerSummary> {
    let term = term.trim();
    if term.is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();
    let digits = digits_only(term);

    customers
        .iter()
        .filter(|customer| {
            (!digits.is_empty() && customer.phone.contains(&digits))
                || customer.name.to_lowercase().contains(&needle)
                || customer
                    .facebook_name
                    .as_deref()
                    .is_some_and(|fb| fb.to_lowercase().contains(&needle))
        })
        .collect()
}

/// All records of one customer, newest first.
pub fn records_for_phone(history: &[SalesRecord], phone: &str) -> Vec<SalesRecord> {
    let mut records: Vec<SalesRecord> =
        history.iter().filter(|r| r.phone.as_deref() == Some(phone)).cloned().collect();
    records.sort_by(|a, b| b.sale_date.cmp(&a.sale_date));
    records
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn purchase(day: u32, hour: u32, phone: &str, price: Option<f64>) -> SalesRecord {
        let mut record = SalesRecord::new(Utc.with_ymd_and_hms(2025, 4, day, hour, 0, 0).unwrap());
        record.phone = Some(phone.into());
        record.price = price;
        record
    }

    fn history() -> Vec<SalesRecord> {
        let mut latest = purchase(10, 9, "0898765432", Some(500.0));
        latest.recipient_name = Some("Somchai".into());
        latest.facebook_name = Some("Chai FB".into());
        latest.address = Some("12/3 Moo 4".into());
        latest.province = Some("Khon Kaen".into());

        let mut other = purchase(8, 9, "0811112222", None);
        other.facebook_name = Some("Malee".into());

        vec![
            latest,
            purchase(5, 15, "0898765432", Some(250.0)),
            other,
            purchase(5, 9, "0898765432", Some(250.0)),
            SalesRecord::new(Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap()),
        ]
    }

    #[test]
    fn summary_aggregates_per_phone() {
        let customers = summarize_customers(&history());
        assert_eq!(customers.len(), 2);

        let somchai = &customers[0];
        assert_eq!(somchai.name, "Somchai");
        assert_eq!(somchai.address, "12/3 Moo 4 Khon Kaen");
        assert_eq!(somchai.total_spent, 1000.0);
        assert_eq!(somchai.order_count, 2);

        let malee = &customers[1];
        assert_eq!(malee.name, "Malee");
        assert_eq!(malee.address, "ไม่มีข้อมูลที่อยู่");
        assert_eq!(malee.total_spent, 0.0);
    }

    #[test]
    fn unnamed_customer_is_unknown() {
        let customers = summarize_customers(&[purchase(1, 0, "0800000000", None)]);
        assert_eq!(customers[0].name, "Unknown");
    }

    #[test]
    fn search_by_phone_name_or_facebook() {
        let customers = summarize_customers(&history());
        assert_eq!(search_customers(&customers, "089-876")[0].name, "Somchai");
        assert_eq!(search_customers(&customers, "somCHAI").len(), 1);
        assert_eq!(search_customers(&customers, "chai fb").len(), 1);
        assert_eq!(search_customers(&customers, "malee")[0].phone, "0811112222");
        assert!(search_customers(&customers, "   ").is_empty());
        assert!(search_customers(&customers, "nobody").is_empty());
    }

    #[test]
    fn records_for_phone_are_newest_first() {
        let mut shuffled = history();
        shuffled.reverse();
        let records = records_for_phone(&shuffled, "0898765432");
        assert_eq!(records.len(), 3);
        assert!(records.windows(2).all(|pair| pair[0].sale_date >= pair[1].sale_date));
    }
}
