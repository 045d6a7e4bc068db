// src/support/mod.rs
// =============================================================================
// Helpers the crawl engine leans on. None of these touch the network.
//
// Submodules:
// - url: validate a candidate URL into a Link, derive a page's base URL
// - content: read a response body stream fully into text
// - links: find <a href="..."> targets in raw page text
//
// This file (mod.rs) re-exports the functions so the engine can simply write
// `support::create_link(...)`.
// =============================================================================

mod content;
mod links;
mod url;

pub use self::content::{get_page_contents, READ_BUFFER_SIZE};
pub use self::links::get_links;
pub use self::url::{create_link, get_base_url};
