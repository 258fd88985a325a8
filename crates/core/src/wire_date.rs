//! The `DD.MM.YYYY` date format used on the wire.
//!
//! Every request body and every response body carries birthday dates in
//! this one format; internally dates are always [`NaiveDate`] values.

use chrono::NaiveDate;

use crate::error::CoreError;

/// `chrono` format string for `DD.MM.YYYY` (e.g. `09.09.2001`).
pub const WIRE_DATE_FORMAT: &str = "%d.%m.%Y";

/// Human-readable form of [`WIRE_DATE_FORMAT`] used in error messages.
pub const WIRE_DATE_PATTERN: &str = "DD.MM.YYYY";

/// Parse a `DD.MM.YYYY` string into a calendar date.
///
/// Rejects anything that is not a real calendar date (`31.13.2020`,
/// `29.02.2021`) as well as other layouts such as ISO `2001-09-09`.
pub fn parse_wire_date(raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw, WIRE_DATE_FORMAT).map_err(|_| {
        CoreError::InvalidDate(format!(
            "expected {WIRE_DATE_PATTERN}, got '{raw}'"
        ))
    })
}

/// Render a date as `DD.MM.YYYY`.
pub fn format_wire_date(date: NaiveDate) -> String {
    date.format(WIRE_DATE_FORMAT).to_string()
}

/// Serde adapter for `#[serde(with = "birthday_core::wire_date::serde_format")]`.
pub mod serde_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{parse_wire_date, WIRE_DATE_FORMAT};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(WIRE_DATE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_wire_date(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    struct Dated {
        #[serde(with = "serde_format")]
        date: NaiveDate,
    }

    #[test]
    fn parses_day_month_year() {
        let date = parse_wire_date("09.09.2001").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2001, 9, 9).unwrap());
    }

    #[test]
    fn parses_leap_day_in_leap_year() {
        let date = parse_wire_date("29.02.2020").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 2, 29).unwrap());
    }

    #[test]
    fn rejects_invalid_month() {
        assert_matches!(parse_wire_date("31.13.2020"), Err(CoreError::InvalidDate(_)));
    }

    #[test]
    fn rejects_leap_day_in_common_year() {
        assert_matches!(parse_wire_date("29.02.2021"), Err(CoreError::InvalidDate(_)));
    }

    #[test]
    fn rejects_iso_layout() {
        assert_matches!(parse_wire_date("2001-09-09"), Err(CoreError::InvalidDate(_)));
    }

    #[test]
    fn rejects_empty_string() {
        assert_matches!(parse_wire_date(""), Err(CoreError::InvalidDate(_)));
    }

    #[test]
    fn error_message_names_expected_pattern() {
        let err = parse_wire_date("yesterday").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date format: expected DD.MM.YYYY, got 'yesterday'"
        );
    }

    #[test]
    fn formats_with_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2001, 9, 1).unwrap();
        assert_eq!(format_wire_date(date), "01.09.2001");
    }

    #[test]
    fn serde_adapter_uses_wire_format() {
        let value = Dated {
            date: NaiveDate::from_ymd_opt(2001, 9, 9).unwrap(),
        };
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["date"], "09.09.2001");

        let back: Dated = serde_json::from_value(json).unwrap();
        assert_eq!(back.date, value.date);
    }

    #[test]
    fn serde_adapter_rejects_bad_date() {
        let result: Result<Dated, _> =
            serde_json::from_value(serde_json::json!({ "date": "31.13.2020" }));
        assert!(result.is_err());
    }
}
