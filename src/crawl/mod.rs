// src/crawl/mod.rs
// =============================================================================
// This module handles the crawl itself.
//
// Features:
// - One root page, its links fetched one level deep
// - Hard cap on the number of report entries
// - Every failure is recorded per URL, never fatal to the whole crawl
//
// Submodules:
// - engine: the crawl state machine and its report entries
// - transport: the HTTP capability the engine is given (trait + reqwest impl)
// =============================================================================

mod engine;
mod transport;

// Re-export the pieces main.rs and the tests need
pub use engine::{CrawlState, Crawler, MAX_REPORT_ENTRIES};
pub use transport::{FetchError, HttpResponse, ReqwestTransport, Transport, TransportSettings};
