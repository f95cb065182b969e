//! Comparison Module - Pure domain service for timing comparison.
//!
//! Maps each milestone onto the fixed five-bucket reference distribution and
//! derives an EARLY / MAINSTREAM / LATE category from the dimension's peak
//! age. No I/O; the same profile always yields the same comparisons.
//!
//! The five distribution buckets are coarser than the ten input labels
//! (`31-35` and `36-40` both flag `31-40`). That mismatch is intentional.

mod distribution;
mod engine;

pub use distribution::{reference_distribution, DistributionPoint, ReferenceBucket, REFERENCE_BUCKETS};
pub use engine::{ComparisonData, ComparisonEngine, EARLY_MARGIN_YEARS, LATE_MARGIN_YEARS};
