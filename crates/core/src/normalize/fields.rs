//! Lenient per-column coercions

use saleslens_domain::{CellValue, PhonePolicy};

/// Parse a numeric cell.
///
/// Text is trimmed and thousands separators removed. Empty, non-numeric and
/// non-finite values yield `None`.
pub fn parse_number(cell: &CellValue) -> Option<f64> {
    let value = match cell {
        CellValue::Number(value) => *value,
        CellValue::Text(text) => {
            let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
            if cleaned.is_empty() {
                return None;
            }
            cleaned.parse::<f64>().ok()?
        }
        CellValue::Empty | CellValue::Bool(_) | CellValue::DateTime(_) => return None,
    };
    value.is_finite().then_some(value)
}

/// Render a cell as trimmed text. Empty results yield `None`.
pub fn parse_text(cell: &CellValue) -> Option<String> {
    let text = match cell {
        CellValue::Empty => return None,
        CellValue::Text(text) => text.trim().to_string(),
        CellValue::Number(value) => format_number(*value),
        CellValue::Bool(value) => value.to_string(),
        CellValue::DateTime(value) => value.format("%Y-%m-%d %H:%M:%S").to_string(),
    };
    (!text.is_empty()).then_some(text)
}

/// Canonicalize a phone cell under `policy`.
pub fn parse_phone(cell: &CellValue, policy: PhonePolicy) -> Option<String> {
    parse_text(cell).and_then(|text| policy.canonicalize(&text))
}

/// Integral values print without a fractional part (`10110.0` -> `10110`).
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation)]
        let integral = value as i64;
        integral.to_string()
    } else {
        value.to_string()
    }
}
