//! Filter criteria and date windows used by the filter pipeline.

use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
/// Named period tags offered by the presentation layer.
pub enum Period {
    #[default]
    All,
    Day,
    /// Calendar week starting on the most recent Sunday.
    Week,
    /// The last seven calendar days, today included.
    #[serde(rename = "today-relative-week")]
    RollingWeek,
    Month,
    Year,
}

impl Period {
    pub fn as_tag(self) -> &'static str {
        match self {
            Period::All => "all",
            Period::Day => "day",
            Period::Week => "week",
            Period::RollingWeek => "today-relative-week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }

    /// Resolves a tag, treating anything unrecognized as [`Period::All`].
    pub fn from_tag(tag: &str) -> Period {
        tag.parse().unwrap_or(Period::All)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for Period {
    type Err = TrackerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Period::All),
            "day" => Ok(Period::Day),
            "week" => Ok(Period::Week),
            "today-relative-week" => Ok(Period::RollingWeek),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            other => Err(TrackerError::Parse(format!("unknown period `{other}`"))),
        }
    }
}

/// Search term plus period tag applied to a transaction list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub period: Period,
}

impl FilterCriteria {
    pub fn new(search_term: impl Into<String>, period: Period) -> Self {
        Self {
            search_term: search_term.into(),
            period,
        }
    }

    pub fn search(search_term: impl Into<String>) -> Self {
        Self::new(search_term, Period::All)
    }

    pub fn period(period: Period) -> Self {
        Self::new(String::new(), period)
    }
}

/// Inclusive date-time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateWindow {
    pub fn contains(&self, value: NaiveDateTime) -> bool {
        value >= self.start && value <= self.end
    }
}
