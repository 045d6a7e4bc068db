// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage:
//   link-crawler <ROOT_URL> [PROXY_HOST PROXY_PORT] [--json] [--verbose]
//
// The proxy host and port are positional and only make sense together, so
// clap is told that each one requires the other.
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "link-crawler",
    version = "0.1.0",
    about = "Fetch a page, follow its links one level deep and report each status",
    long_about = "link-crawler fetches a single root page, finds the links on it and fetches \
                  each of them once. It prints one line per URL: the HTTP status code, or \
                  INVALID when the URL is malformed or could not be fetched. At most 50 URLs \
                  are reported."
)]
pub struct Cli {
    /// Root URL to crawl (e.g., http://www.example.com)
    pub root_url: String,

    /// Optional HTTP proxy host (must be followed by a port)
    #[arg(requires = "proxy_port")]
    pub proxy_host: Option<String>,

    /// Optional HTTP proxy port
    #[arg(requires = "proxy_host")]
    pub proxy_port: Option<u16>,

    /// Output results in JSON format instead of lines
    #[arg(long)]
    pub json: bool,

    /// Log every request to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The proxy as (host, port), when both were given.
    pub fn proxy(&self) -> Option<(String, u16)> {
        match (&self.proxy_host, self.proxy_port) {
            (Some(host), Some(port)) => Some((host.clone(), port)),
            _ => None,
        }
    }
}
