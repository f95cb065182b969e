//! Age-range labels and start-age parsing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// The ten five-year buckets offered when recording a milestone.
pub const AGE_RANGES: [&str; 10] = [
    "10-15", "16-20", "21-25", "26-30", "31-35", "36-40", "41-45", "46-50", "51-55", "56-60",
];

/// An age-range label such as `"21-25"`.
///
/// Labels entered through the wizard are always one of [`AGE_RANGES`]; labels
/// loaded from a profile file may be arbitrary text, in which case
/// [`AgeRange::start_age`] can be `None` and downstream classification
/// degrades instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgeRange(String);

impl AgeRange {
    /// Wraps any label without checking it against the fixed buckets.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Accepts only one of the ten fixed bucket labels.
    pub fn standard(label: &str) -> Result<Self, ValidationError> {
        let label = label.trim();
        if AGE_RANGES.contains(&label) {
            Ok(Self(label.to_string()))
        } else {
            Err(ValidationError::invalid_format(
                "age_range",
                format!("'{}' is not one of {}", label, AGE_RANGES.join(", ")),
            ))
        }
    }

    /// All ten fixed buckets in ascending order.
    pub fn all() -> Vec<AgeRange> {
        AGE_RANGES.iter().map(|l| AgeRange::new(*l)).collect()
    }

    pub fn label(&self) -> &str {
        &self.0
    }

    /// Leading decimal digits before the first `-`, after optional
    /// whitespace and `+`. Trailing junk is ignored; no radix prefixes.
    pub fn start_age(&self) -> Option<u32> {
        let head = self.0.split('-').next().unwrap_or("");
        parse_leading_int(head)
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn parse_leading_int(s: &str) -> Option<u32> {
    let s = s.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let digits: &str = match s.find(|c: char| !c.is_ascii_digit()) {
        Some(end) => &s[..end],
        None => s,
    };
    if digits.is_empty() {
        return None;
    }
    // Saturate absurdly long digit runs instead of failing.
    Some(digits.parse::<u32>().unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_age_reads_number_before_dash() {
        assert_eq!(AgeRange::new("21-25").start_age(), Some(21));
        assert_eq!(AgeRange::new("10-15").start_age(), Some(10));
        assert_eq!(AgeRange::new("56-60").start_age(), Some(56));
    }

    #[test]
    fn start_age_reads_leading_decimal_digits() {
        assert_eq!(AgeRange::new(" 33abc-40").start_age(), Some(33));
        assert_eq!(AgeRange::new("+18-20").start_age(), Some(18));
        assert_eq!(AgeRange::new("42").start_age(), Some(42));
        assert_eq!(AgeRange::new("0x1A-30").start_age(), Some(0));
        assert_eq!(AgeRange::new("027-30").start_age(), Some(27));
    }

    #[test]
    fn start_age_is_none_for_malformed_labels() {
        assert_eq!(AgeRange::new("abc").start_age(), None);
        assert_eq!(AgeRange::new("-5").start_age(), None);
        assert_eq!(AgeRange::new("").start_age(), None);
        assert_eq!(AgeRange::new("++3-5").start_age(), None);
    }

    #[test]
    fn every_fixed_bucket_has_a_start_age() {
        for range in AgeRange::all() {
            assert!(range.start_age().is_some(), "{} should parse", range);
        }
    }

    #[test]
    fn standard_rejects_unknown_labels() {
        assert!(AgeRange::standard("21-25").is_ok());
        assert!(AgeRange::standard("20-25").is_err());
        assert!(AgeRange::standard("61-65").is_err());
    }
}
