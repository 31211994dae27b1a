//! Phone number canonicalization
//!
//! Canonical phones are digit strings. The live feed additionally rewrites a
//! leading Thai country code to the local trunk prefix.

use serde::{Deserialize, Serialize};

use crate::constants::THAI_COUNTRY_CODE;
use crate::impl_domain_label_conversions;

/// How a source canonicalizes phone cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhonePolicy {
    /// Strip every non-digit character (bulk workbook).
    #[default]
    DigitsOnly,
    /// Strip non-digits, then rewrite a leading `66` to `0` (live feed).
    LocalizeCountryCode,
}

impl_domain_label_conversions!(PhonePolicy {
    DigitsOnly => "digits_only",
    LocalizeCountryCode => "localize_country_code",
});

impl PhonePolicy {
    /// Canonicalize `raw`. Returns `None` when no digits remain.
    pub fn canonicalize(self, raw: &str) -> Option<String> {
        let digits = digits_only(raw);
        if digits.is_empty() {
            return None;
        }
        Some(match self {
            Self::DigitsOnly => digits,
            Self::LocalizeCountryCode => localize_country_code(&digits),
        })
    }
}

/// Keep ASCII digits only.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Rewrite a leading `66` to `0`. Input is expected to be digits only.
pub fn localize_country_code(digits: &str) -> String {
    match digits.strip_prefix(THAI_COUNTRY_CODE) {
        Some(rest) => format!("0{rest}"),
        None => digits.to_string(),
    }
}
