//! Bulk/live history merge
//!
//! Records are deduplicated by [`canonical_key`]. Live records overwrite bulk
//! records with the same key, and the result is ordered newest first.

use std::collections::HashMap;

use saleslens_domain::constants::NO_PHONE_SENTINEL;
use saleslens_domain::SalesRecord;

/// Deduplication fingerprint of a record:
/// `{phone}_{YYYY-MM-DD}_{product}_{price}`.
///
/// Two distinct sales of the same product at the same price to the same
/// phone on the same day collapse into one entry.
pub fn canonical_key(record: &SalesRecord) -> String {
    format!(
        "{}_{}_{}_{}",
        record.phone.as_deref().unwrap_or(NO_PHONE_SENTINEL),
        record.sale_date.format("%Y-%m-%d"),
        record.product_name.as_deref().unwrap_or(""),
        record.price.unwrap_or(0.0),
    )
}

/// Merge the two snapshots into one deduplicated, newest-first history.
///
/// Entries keep their first-insertion position on overwrite, so records with
/// equal dates stay in source order.
pub fn merge_histories(bulk: &[SalesRecord], live: Option<&[SalesRecord]>) -> Vec<SalesRecord> {
    let capacity = bulk.len() + live.map_or(0, <[SalesRecord]>::len);
    let mut index: HashMap<String, usize> = HashMap::with_capacity(capacity);
    let mut merged: Vec<SalesRecord> = Vec::with_capacity(capacity);

    for record in bulk.iter().chain(live.unwrap_or_default()) {
        match index.get(&canonical_key(record)) {
            Some(&slot) => merged[slot] = record.clone(),
            None => {
                index.insert(canonical_key(record), merged.len());
                merged.push(record.clone());
            }
        }
    }

    merged.sort_by(|a, b| b.sale_date.cmp(&a.sale_date));
    merged
}
