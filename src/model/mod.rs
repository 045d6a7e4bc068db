// src/model/mod.rs
// =============================================================================
// This module holds the plain data types the crawler passes around.
//
// Submodules:
// - link: a candidate URL together with its validity flag
// - entry: one line of the final report (URL + outcome)
//
// Nothing in here talks to the network or prints anything - these are just
// values. The logic that creates and uses them lives in `support` and `crawl`.
// =============================================================================

mod entry;
mod link;

pub use entry::{Outcome, ReportEntry};
pub use link::Link;
