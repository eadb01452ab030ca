use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

/// A point in time as it arrives from clients and document stores.
///
/// Mobile clients send Firestore timestamps as `{seconds, nanoseconds}`
/// (the admin SDK prefixes both with `_`), older web clients send epoch
/// milliseconds, and hand-entered rounds carry a date string. Everything is
/// converted to `DateTime<Utc>` before it reaches the scoring code.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ExternalTimestamp {
    Document {
        #[serde(alias = "_seconds")]
        seconds: i64,
        #[serde(default, alias = "_nanoseconds")]
        nanoseconds: u32,
    },
    EpochMillis(i64),
    Text(String),
}

impl ExternalTimestamp {
    /// # Errors
    ///
    /// Will return `Err` if the value is out of range or the text is neither RFC 3339 nor `YYYY-MM-DD`
    pub fn normalize(&self) -> Result<DateTime<Utc>, ScoreError> {
        match self {
            ExternalTimestamp::Document {
                seconds,
                nanoseconds,
            } => Utc
                .timestamp_opt(*seconds, *nanoseconds)
                .single()
                .ok_or_else(|| {
                    ScoreError::invalid(format!(
                        "timestamp {seconds}s {nanoseconds}ns is out of range"
                    ))
                }),
            ExternalTimestamp::EpochMillis(millis) => Utc
                .timestamp_millis_opt(*millis)
                .single()
                .ok_or_else(|| ScoreError::invalid(format!("epoch millis {millis} out of range"))),
            ExternalTimestamp::Text(text) => parse_text(text),
        }
    }
}

impl From<DateTime<Utc>> for ExternalTimestamp {
    fn from(value: DateTime<Utc>) -> Self {
        ExternalTimestamp::Text(value.to_rfc3339())
    }
}

fn parse_text(text: &str) -> Result<DateTime<Utc>, ScoreError> {
    let trimmed = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ScoreError::invalid(format!("unrecognised timestamp '{text}'")))
}
