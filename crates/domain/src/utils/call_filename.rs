//! Call recording filename parser
//!
//! Recorder apps name files
//! `myrecordings_YYYYMMDD_HHMMSS_<in|out>_<source>_<destination>.<ext>`.

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{CallDirection, CallMetadata};
use crate::utils::phone::PhonePolicy;

static CALL_FILENAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^myrecordings_(\d{8})_(\d{6})_(in|out)_([^_]+)_([^_.]+)\.(wav|mp3|m4a|ogg|flac)$",
    )
    .expect("CALL_FILENAME should compile - this is a bug")
});

/// Parse a recording filename (a leading directory path is ignored).
///
/// Returns `None` when the name does not follow the recorder convention or
/// encodes an impossible date or time.
pub fn parse_call_filename(filename: &str) -> Option<CallMetadata> {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename).trim();
    let caps = CALL_FILENAME.captures(name)?;

    let date = NaiveDate::parse_from_str(&caps[1], "%Y%m%d").ok()?;
    let time = NaiveTime::parse_from_str(&caps[2], "%H%M%S").ok()?;
    let call_type = caps[3].parse::<CallDirection>().ok()?;

    Some(CallMetadata {
        date,
        time,
        call_type,
        source_phone: decode_phone(&caps[4]),
        destination_phone: decode_phone(&caps[5]),
        original_filename: name.to_string(),
    })
}

fn decode_phone(raw: &str) -> String {
    let without_plus = raw.replace("%2B", "").replace("%2b", "");
    PhonePolicy::LocalizeCountryCode.canonicalize(&without_plus).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_outbound_call() {
        let call =
            parse_call_filename("myrecordings_20250314_153012_out_0812345678_%2B66898765432.m4a")
                .unwrap();
        assert_eq!(call.date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert_eq!(call.time, NaiveTime::from_hms_opt(15, 30, 12).unwrap());
        assert_eq!(call.call_type, CallDirection::Outbound);
        assert_eq!(call.source_phone, "0812345678");
        assert_eq!(call.destination_phone, "0898765432");
        assert_eq!(call.salesperson_phone(), "0812345678");
        assert_eq!(call.customer_phone(), "0898765432");
    }

    #[test]
    fn extension_and_direction_are_case_insensitive() {
        let call =
            parse_call_filename("MyRecordings_20250101_080000_IN_0898765432_0812345678.WAV")
                .unwrap();
        assert_eq!(call.call_type, CallDirection::Inbound);
        assert_eq!(call.customer_phone(), "0898765432");
        assert_eq!(call.salesperson_phone(), "0812345678");
    }

    #[test]
    fn ignores_leading_directories() {
        let call =
            parse_call_filename("/sdcard/Recordings/myrecordings_20250101_080000_in_1_2.mp3")
                .unwrap();
        assert_eq!(call.original_filename, "myrecordings_20250101_080000_in_1_2.mp3");
    }

    #[test]
    fn rejects_impossible_calendar_values() {
        assert!(parse_call_filename("myrecordings_20250230_080000_in_1_2.mp3").is_none());
        assert!(parse_call_filename("myrecordings_20250101_250000_in_1_2.mp3").is_none());
    }

    #[test]
    fn rejects_foreign_names() {
        assert!(parse_call_filename("voice_note.mp3").is_none());
        assert!(parse_call_filename("myrecordings_20250101_080000_in_1_2.aac").is_none());
        assert!(parse_call_filename("myrecordings_20250101_080000_missed_1_2.mp3").is_none());
    }
}
