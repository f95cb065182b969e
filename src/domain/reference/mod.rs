//! Reference module - Static reference data.
//!
//! Status options per dimension, the ten input age buckets, timing labels
//! and per-dimension peak ages. Everything here is a constant; the tables are
//! keyed by [`Dimension`] rather than held in parallel maps.

mod age_range;
mod dimension;
mod status;
mod timing;

pub use age_range::{AgeRange, AGE_RANGES};
pub use dimension::Dimension;
pub use status::{StatusOption, CAREER_STATUS_OPTIONS, EMOTION_STATUS_OPTIONS};
pub use timing::TimingCategory;
