//! Date normalization for imported rows.
//!
//! Imported publication dates arrive in whatever format the source file
//! used. The grid stores `YYYY-MM-DD` strings; anything unparseable
//! becomes the empty string rather than an error, matching the
//! import-and-fix-up workflow of the editor.

use std::sync::OnceLock;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use regex::Regex;

/// Already-normalized dates pass through untouched.
fn iso_date() -> &'static Regex {
    static ISO_DATE: OnceLock<Regex> = OnceLock::new();
    ISO_DATE.get_or_init(|| Regex::new(r"^\d{4,}-\d{2}-\d{2}$").unwrap())
}

/// Normalize a date string to `YYYY-MM-DD`.
///
/// ISO dates pass through unchanged; common date and datetime formats
/// are parsed and reformatted; anything else yields `""`.
pub fn sanitize_date(input: &str) -> String {
    let input = input.trim();
    if iso_date().is_match(input) {
        return input.to_string();
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return parsed.date_naive().format("%Y-%m-%d").to_string();
    }

    const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%m/%d/%Y"];
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return date.format("%Y-%m-%d").to_string();
        }
    }

    const DATETIME_FORMATS: [&str; 3] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
    ];
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(input, format) {
            return datetime.date().format("%Y-%m-%d").to_string();
        }
    }

    String::new()
}

/// Today's date as `YYYYMMDD`, for stamping export filenames.
pub fn date_stamp() -> String {
    Local::now().format("%Y%m%d").to_string()
}
