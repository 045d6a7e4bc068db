// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr) and the HTTP transport
// 3. Crawl the root URL and its links
// 4. Print the report to stdout
// 5. Exit with proper code (0 = report printed, 2 = error)
//
// A crawl itself never fails: broken links end up in the report. Only
// setup problems (bad proxy, can't write stdout) reach the error path.
// =============================================================================

// Module declarations - the crawler itself lives in the library (src/lib.rs)
mod cli; // src/cli.rs - command-line parsing

use std::io;

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method

use cli::Cli;
use link_crawler::{logging, report, Crawler, ReqwestTransport, TransportSettings};

fn main() {
    let exit_code = match run() {
        Ok(()) => 0,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.verbose);

    let settings = TransportSettings {
        proxy: cli.proxy(),
        ..TransportSettings::default()
    };
    let transport =
        ReqwestTransport::new(&settings).context("could not set up the HTTP client")?;

    let mut crawler = Crawler::new(transport);
    crawler.crawl(&cli.root_url);

    // Crawling is silent; this is the only place the results are printed
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        report::report_json(crawler.entries(), &mut out)
    } else {
        crawler.report(&mut out)
    }
    .context("could not write the report")?;

    Ok(())
}
