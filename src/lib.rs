//! framcalc — Framingham 10-year cardiovascular risk scoring for CSV
//! datasets.
//!
//! The `scoring` module is the pure engine; `dataset` adapts rows to typed
//! records and back; everything else is CLI plumbing.

pub mod config;
pub mod dataset;
pub mod output;
pub mod prompt;
pub mod scoring;
