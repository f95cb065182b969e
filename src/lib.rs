//! Life Baseline - 人生参照系
//!
//! Records self-reported life milestones on an EMOTION and a CAREER track,
//! compares the timing of each against a fixed reference distribution and
//! adds a short narrative summary from a text-generation service.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
