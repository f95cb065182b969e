//! Birth date value object.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

const FORMAT: &str = "%Y-%m-%d";

/// Calendar birth date, formatted `YYYY-MM-DD`.
///
/// Only checked for being a real date; no plausibility rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Wraps a calendar date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the inner date.
    pub fn as_date(&self) -> &NaiveDate {
        &self.0
    }
}

impl Default for BirthDate {
    fn default() -> Self {
        // 1995-06-15 is always a valid calendar date.
        Self(NaiveDate::from_ymd_opt(1995, 6, 15).unwrap_or(NaiveDate::MIN))
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl FromStr for BirthDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::empty_field("birth_date"));
        }
        NaiveDate::parse_from_str(s, FORMAT)
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("birth_date", e.to_string()))
    }
}

impl Serialize for BirthDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BirthDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
