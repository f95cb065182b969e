//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `reference` - Static reference data (dimensions, statuses, age buckets)
//! - `profile` - Birth date and per-dimension milestone lists
//! - `comparison` - Pure timing comparison against the reference distribution
//! - `report` - Life report assembly and narrative summary contract

pub mod comparison;
pub mod foundation;
pub mod profile;
pub mod reference;
pub mod report;
