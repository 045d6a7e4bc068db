//! link-crawler: fetch one page, follow its links one level deep, report
//! the status of every URL.
//!
//! The binary in `main.rs` only parses arguments and prints; everything it
//! drives lives here so it can be tested without a network.

pub mod crawl; // the crawl engine and HTTP transport
pub mod logging; // logger setup
pub mod model; // Link and report entry types
pub mod report; // text and JSON output
pub mod support; // URL checks, body reading, link extraction

pub use crawl::{
    CrawlState, Crawler, FetchError, HttpResponse, ReqwestTransport, Transport,
    TransportSettings, MAX_REPORT_ENTRIES,
};
pub use model::{Link, Outcome, ReportEntry};
