// src/crawl/engine.rs
// =============================================================================
// The crawl engine: fetch the root page, pull its links, fetch each of them.
//
// How it works:
// 1. Validate the root URL. Malformed -> one INVALID entry, done.
// 2. Fetch the root page, record its status, read its body.
// 3. Extract links from the root body (the ONLY page we scan for links).
// 4. Fetch each discovered link in order, one entry per link, until the
//    report holds MAX_REPORT_ENTRIES entries or the links run out.
//
// Failure policy (applied to every fetch, root or child):
//   timeout / no connection in time  -> 404
//   any other transport or read fail -> INVALID
//   an answer from the server        -> its status code
//
// Everything is sequential: one request at a time, each one blocks until the
// transport answers. Nothing is printed here - see `report` for output.
// =============================================================================

use std::collections::HashSet;
use std::io::{self, Write};

use crate::model::{Link, Outcome, ReportEntry};
use crate::report;
use crate::support::{create_link, get_links, get_page_contents};

use super::transport::{FetchError, HttpResponse, Transport};

/// Hard limit on report entries per crawl (root + 49 discovered links).
pub const MAX_REPORT_ENTRIES: usize = 50;

// Where a crawl is in its life
//
// START -> ROOT_VALIDATED -> ROOT_FETCHED -> EXPANDING -> DONE
// A crawl may jump straight to Done from any state (invalid root, failed
// root fetch, cap reached, links exhausted).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlState {
    Start,
    RootValidated,
    RootFetched,
    Expanding,
    Done,
}

/// Runs one-level-deep crawls over an injected transport.
pub struct Crawler<T: Transport> {
    transport: T,
    entries: Vec<ReportEntry>,
    // URLs already in `entries`, so a page linking back to itself (or the
    // same link twice) is only fetched once per crawl
    seen: HashSet<String>,
    state: CrawlState,
}

impl<T: Transport> Crawler<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            entries: Vec::new(),
            seen: HashSet::new(),
            state: CrawlState::Start,
        }
    }

    /// Entries from the last crawl, in the order they were recorded.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn state(&self) -> CrawlState {
        self.state
    }

    /// Writes the text report of the last crawl to `out`.
    pub fn report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        report::report(&self.entries, out)
    }

    // Crawls `root_url` and its direct links
    //
    // Any previous results are discarded first. This never fails: every
    // problem ends up as an entry in the report.
    pub fn crawl(&mut self, root_url: &str) {
        self.entries.clear();
        self.seen.clear();
        self.state = CrawlState::Start;

        let root = create_link(Some(root_url));
        let root_url = match root.url() {
            Some(url) if root.is_valid() => url.to_string(),
            _ => {
                log::warn!("root URL is malformed: {:?}", root_url);
                self.record(&root, Outcome::Invalid);
                self.finish();
                return;
            }
        };
        self.state = CrawlState::RootValidated;

        let page = match self.fetch_page(&root_url) {
            Ok((status, page)) => {
                self.record(&root, Outcome::Status(status));
                page
            }
            Err(err) => {
                let outcome = classify_failure(&root_url, &err);
                self.record(&root, outcome);
                self.finish();
                return;
            }
        };
        self.state = CrawlState::RootFetched;

        let discovered = get_links(&page, Some(&root_url));
        self.state = CrawlState::Expanding;

        for candidate in discovered {
            if self.entries.len() >= MAX_REPORT_ENTRIES {
                log::info!("report cap of {} entries reached", MAX_REPORT_ENTRIES);
                break;
            }

            let link = create_link(Some(&candidate));
            if self.seen.contains(link.display_url()) {
                log::debug!("skipping already reported {}", link.display_url());
                continue;
            }

            let outcome = match link.url() {
                Some(url) if link.is_valid() => self.check(url),
                _ => {
                    log::debug!("discovered link is malformed: {:?}", candidate);
                    Outcome::Invalid
                }
            };
            self.record(&link, outcome);
        }

        self.finish();
    }

    // Fetches a discovered link; its body is read (and released) but never
    // scanned for further links
    fn check(&self, url: &str) -> Outcome {
        match self.fetch_page(url) {
            Ok((status, _)) => Outcome::Status(status),
            Err(err) => classify_failure(url, &err),
        }
    }

    // One GET plus a full read of the body, if there is one
    //
    // The body is owned by this function: it is dropped (closing the stream)
    // at the end of the `Some` arm, whether the read succeeded or returned an
    // error through `?`. It is never dropped twice.
    fn fetch_page(&self, url: &str) -> Result<(u16, String), FetchError> {
        log::debug!("GET {}", url);
        let HttpResponse { status, body } = self.transport.execute(url)?;

        let contents = match body {
            Some(mut body) => get_page_contents(&mut body)?,
            None => String::new(),
        };

        log::debug!("{} answered {} ({} bytes)", url, status, contents.len());
        Ok((status, contents))
    }

    fn record(&mut self, link: &Link, outcome: Outcome) {
        let url = link.display_url().to_string();
        self.seen.insert(url.clone());
        self.entries.push(ReportEntry::new(url, outcome));
    }

    fn finish(&mut self) {
        self.state = CrawlState::Done;
        log::info!("crawl finished with {} report entries", self.entries.len());
    }
}

// Timeouts are reported as 404, everything else as INVALID
fn classify_failure(url: &str, err: &FetchError) -> Outcome {
    log::warn!("fetching {} failed: {}", url, err);
    if err.is_timeout() {
        Outcome::Status(404)
    } else {
        Outcome::Invalid
    }
}
