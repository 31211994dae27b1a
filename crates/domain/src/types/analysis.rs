//! Analysis log rows

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::NOT_AVAILABLE;

/// Summary of one evaluated call, appended to the analysis log sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct AnalysisLogEntry {
    pub timestamp: DateTime<Utc>,
    pub salesperson_name: Option<String>,
    pub closing_probability: f64,
    pub performance_score: f64,
    pub customer_phone: Option<String>,
    pub next_best_action: String,
    pub outcome_summary: String,
}

impl AnalysisLogEntry {
    /// Cells in sheet column order.
    pub fn to_row(&self) -> Vec<serde_json::Value> {
        use serde_json::Value;

        vec![
            Value::String(self.timestamp.to_rfc3339()),
            Value::String(self.salesperson_name.clone().unwrap_or_else(|| NOT_AVAILABLE.into())),
            serde_json::json!(self.closing_probability),
            serde_json::json!(self.performance_score),
            Value::String(self.customer_phone.clone().unwrap_or_else(|| NOT_AVAILABLE.into())),
            Value::String(self.next_best_action.clone()),
            Value::String(self.outcome_summary.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn missing_parties_render_as_not_available() {
        let entry = AnalysisLogEntry {
            timestamp: Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap(),
            salesperson_name: None,
            closing_probability: 72.5,
            performance_score: 8.0,
            customer_phone: None,
            next_best_action: "Follow up".into(),
            outcome_summary: "Interested".into(),
        };
        let row = entry.to_row();
        assert_eq!(row.len(), 7);
        assert_eq!(row[1], "N/A");
        assert_eq!(row[2], 72.5);
        assert_eq!(row[4], "N/A");
        assert_eq!(row[0], "2025-03-01T09:30:00+00:00");
    }
}
