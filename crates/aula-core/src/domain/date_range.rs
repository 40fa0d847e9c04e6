//! Relative creation-date windows used by the post filter.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// A window that starts at a calendar boundary and runs up to now.
///
/// Calendar days are UTC days; weeks start on Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateRange {
    Today,
    ThisWeek,
    ThisMonth,
}

impl DateRange {
    /// Earliest creation time included in the window that contains `now`.
    pub fn lower_bound(self, now: DateTime<Utc>) -> DateTime<Utc> {
        let today = now.date_naive();
        let start = match self {
            DateRange::Today => today,
            DateRange::ThisWeek => {
                today - TimeDelta::days(i64::from(today.weekday().num_days_from_sunday()))
            }
            DateRange::ThisMonth => today - TimeDelta::days(i64::from(today.day0())),
        };
        start.and_time(NaiveTime::MIN).and_utc()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown date range: {0}")]
pub struct UnknownDateRange(pub String);

impl FromStr for DateRange {
    type Err = UnknownDateRange;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(DateRange::Today),
            "thisWeek" => Ok(DateRange::ThisWeek),
            "thisMonth" => Ok(DateRange::ThisMonth),
            other => Err(UnknownDateRange(other.to_string())),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateRange::Today => "today",
            DateRange::ThisWeek => "thisWeek",
            DateRange::ThisMonth => "thisMonth",
        };
        f.write_str(name)
    }
}
