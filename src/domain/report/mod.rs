//! Report domain module.
//!
//! Assembles a `LifeReport` from a profile and defines the narrative summary
//! contract: the prompt that is sent and the fallback texts used when the
//! summary service gives nothing usable.

mod errors;
mod life_report;
mod narrative;

pub use errors::ReportError;
pub use life_report::LifeReport;
pub use narrative::{
    build_prompt, describe_comparison, describe_track, FallbackReason, NarrativeSummary,
    SummarySource, EMPTY_RESPONSE_FALLBACK, FAILURE_FALLBACK, UNRECORDED,
};
