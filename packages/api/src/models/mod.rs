//! Records exchanged with the portfolio REST API.
//!
//! These are plain DTOs: the API owns them and the client only holds
//! short-lived copies for forms and tables. Field names follow the API's
//! camelCase JSON, and every text field tolerates `null`.

mod page;
mod project;
mod timeline;
mod user;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use page::Page;
pub use project::{Project, ProjectStatus, IMAGE_DELIMITER, PROJECT_STATUSES, PROJECT_TYPES};
pub use timeline::{TimelineEntry, TimelineKind, TIMELINE_TYPES};
pub use user::User;

/// Server-assigned identifier. The API may send numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

/// Deserialize `null` as the type's default.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a flag, reading `null` as `true` like an absent field.
pub(crate) fn nullable_or_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

/// Parse a calendar date from `YYYY-MM-DD`, ignoring any time suffix
/// (`2024-03-01T00:00:00`). Blank input is `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let day = value.split(['T', ' ']).next().unwrap_or(value);
    if day.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Serde adapter for optional dates: lenient on input, `YYYY-MM-DD` on output.
pub(crate) mod lenient_date {
    use super::*;

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => s.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw.as_deref().and_then(parse_date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_drops_time_suffix() {
        let expected = NaiveDate::from_ymd_opt(2023, 9, 4);
        assert_eq!(parse_date("2023-09-04"), expected);
        assert_eq!(parse_date("2023-09-04T00:00:00"), expected);
        assert_eq!(parse_date("2023-09-04 12:30"), expected);
    }

    #[test]
    fn test_parse_date_rejects_blank_and_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
        assert_eq!(parse_date("04/09/2023"), None);
    }

    #[test]
    fn test_record_id_accepts_numbers_and_strings() {
        let n: RecordId = serde_json::from_str("12").unwrap();
        let s: RecordId = serde_json::from_str("\"a1b2\"").unwrap();
        assert_eq!(n, RecordId::Number(12));
        assert_eq!(n.to_string(), "12");
        assert_eq!(s.to_string(), "a1b2");
    }
}
