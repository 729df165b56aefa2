//! Due date parsing.
//!
//! Due dates arrive either as full RFC 3339 timestamps or as bare calendar
//! dates (`YYYY-MM-DD`, what a date picker produces). Bare dates are taken as
//! midnight UTC.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use taskmaster_core::{TaskError, TaskResult};

pub fn parse_due_date(input: &str) -> TaskResult<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    Err(TaskError::Validation(format!(
        "Invalid due date '{}': expected YYYY-MM-DD or an RFC 3339 timestamp",
        input
    )))
}

/// Serde adapter for `Option<DateTime<Utc>>` fields that accepts both forms
/// and writes RFC 3339 with a `Z` suffix.
pub mod optional {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_some(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => parse_due_date(s)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
