//! Repository insights: derived, render-time views over an imported scan.
//!
//! Nothing here is persisted. Classifications and breakdowns are recomputed
//! from the stored scan every time a report is produced.
pub mod domain;
pub mod policies;
pub mod services;
