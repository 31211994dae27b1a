//! Record and snapshot builders

use chrono::{TimeZone, Utc};
use saleslens_domain::{LiveSnapshot, SalesRecord, Salesperson};

pub const SALESPERSON_PHONE: &str = "0812345678";
pub const CUSTOMER_PHONE: &str = "0898765432";

pub fn record(day: u32, phone: Option<&str>, product: &str, price: f64) -> SalesRecord {
    let mut record = SalesRecord::new(Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap());
    record.phone = phone.map(str::to_string);
    record.product_name = Some(product.to_string());
    record.price = Some(price);
    record
}

pub fn salesperson() -> Salesperson {
    Salesperson { name: "Anan".into(), phone: SALESPERSON_PHONE.into() }
}

pub fn live_snapshot(records: Vec<SalesRecord>) -> LiveSnapshot {
    LiveSnapshot {
        records,
        salespersons: vec![salesperson()],
        product_context: "- Fertilizer A: Organic".into(),
    }
}
