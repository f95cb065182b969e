//! Profile domain module.
//!
//! The user's birth date and per-dimension milestone lists. Lists are kept
//! sorted by bucket start age after every commit.

mod aggregate;
mod milestone;

pub use aggregate::UserProfile;
pub use milestone::Milestone;
