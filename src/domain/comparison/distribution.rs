//! Reference distribution.

use serde::Serialize;

use crate::domain::foundation::Percentage;

/// One coarse age bucket of the reference population.
///
/// Bounds are inclusive; `None` means unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceBucket {
    pub label: &'static str,
    pub percentage: Percentage,
    lower: Option<u32>,
    upper: Option<u32>,
}

impl ReferenceBucket {
    const fn new(
        label: &'static str,
        percentage: u8,
        lower: Option<u32>,
        upper: Option<u32>,
    ) -> Self {
        Self {
            label,
            percentage: Percentage::new(percentage),
            lower,
            upper,
        }
    }

    /// Whether a start age falls inside this bucket.
    pub fn contains(&self, age: u32) -> bool {
        self.lower.map_or(true, |lo| age >= lo) && self.upper.map_or(true, |hi| age <= hi)
    }
}

/// Illustrative population shares; constants, not measured data.
///
/// The first bucket stops at 19 and the second starts at 21, so an age of
/// exactly 20 lands in no bucket. None of the ten input labels starts at 20.
pub const REFERENCE_BUCKETS: [ReferenceBucket; 5] = [
    ReferenceBucket::new("10-20", 10, None, Some(19)),
    ReferenceBucket::new("21-25", 35, Some(21), Some(25)),
    ReferenceBucket::new("26-30", 30, Some(26), Some(30)),
    ReferenceBucket::new("31-40", 15, Some(31), Some(40)),
    ReferenceBucket::new("41+", 10, Some(41), None),
];

/// A reference bucket as seen from one milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionPoint {
    pub age_range: &'static str,
    pub percentage: Percentage,
    pub is_user_position: bool,
}

/// Builds the five-point distribution, flagging the bucket holding `start_age`.
///
/// Without a start age no bucket is flagged.
pub fn reference_distribution(start_age: Option<u32>) -> Vec<DistributionPoint> {
    REFERENCE_BUCKETS
        .iter()
        .map(|bucket| DistributionPoint {
            age_range: bucket.label,
            percentage: bucket.percentage,
            is_user_position: start_age.is_some_and(|age| bucket.contains(age)),
        })
        .collect()
}
