// src/crawl/transport.rs
// =============================================================================
// The HTTP side of the crawler.
//
// The engine never talks to reqwest directly. It only sees the `Transport`
// trait: "GET this URL, give me a status and maybe a body, or tell me what
// kind of failure happened". That keeps the engine testable with fake
// transports and keeps connection handling, TLS and redirects out of it.
//
// Key functionality:
// - `Transport` trait + `HttpResponse` value
// - `FetchError`: the failure categories the engine cares about
// - `ReqwestTransport`: the real implementation, using reqwest's blocking
//   client (one request at a time, no async runtime needed)
//
// Rust concepts:
// - Traits: the seam between the engine and the network
// - Box<dyn Read>: a body stream of unknown concrete type
// - Drop: dropping the body closes the connection's stream
// =============================================================================

use std::fmt;
use std::io::Read;
use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;

// Failures a fetch can end with
//
// Only the distinction Timeout vs. everything else changes the report
// (404 vs. INVALID); the other variants exist so logs say what went wrong.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Could not get a connection / an answer in time
    #[error("timed out: {0}")]
    Timeout(String),
    /// Connection refused, bad redirect chain, malformed HTTP, ...
    #[error("protocol error: {0}")]
    Protocol(String),
    /// The stream broke while we were reading it
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Anything the transport could not categorize
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout(_))
    }
}

/// A successful answer from the server, whatever its status code.
pub struct HttpResponse {
    pub status: u16,
    /// The body stream, if the response has one. Dropping it closes it.
    pub body: Option<Box<dyn Read>>,
}

impl HttpResponse {
    pub fn new(status: u16, body: Option<Box<dyn Read>>) -> Self {
        Self { status, body }
    }
}

// Box<dyn Read> has no Debug, so print whether a body is present instead
impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("has_body", &self.body.is_some())
            .finish()
    }
}

/// Something that can perform a single GET request.
pub trait Transport {
    fn execute(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

// Transport settings
//
// Mirrors what the command line can configure plus a few fixed limits.
#[derive(Debug, Clone)]
pub struct TransportSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    /// Optional HTTP proxy as (host, port)
    pub proxy: Option<(String, u16)>,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            proxy: None,
        }
    }
}

/// The real transport, backed by a blocking reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    // Builds the client once; every request reuses its connection pool
    pub fn new(settings: &TransportSettings) -> anyhow::Result<Self> {
        let mut builder = Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit));

        // Only an explicitly configured proxy is used, never the environment's
        builder = match &settings.proxy {
            Some((host, port)) => {
                let proxy_url = format!("http://{}:{}", host, port);
                log::info!("using proxy {}", proxy_url);
                builder.proxy(reqwest::Proxy::all(&proxy_url)?)
            }
            None => builder.no_proxy(),
        };

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let response = self.client.get(url).send().map_err(categorize_error)?;
        let status = response.status().as_u16();

        // A blocking Response is itself a Read over the body
        let body: Option<Box<dyn Read>> = match response.content_length() {
            Some(0) => None,
            _ => Some(Box::new(response)),
        };

        Ok(HttpResponse::new(status, body))
    }
}

// Sorts a reqwest error into one of our categories
//
// Order matters: a connect timeout is both `is_connect()` and
// `is_timeout()`, and we want it counted as a timeout.
fn categorize_error(error: reqwest::Error) -> FetchError {
    let message = error.to_string();

    if error.is_timeout() {
        FetchError::Timeout(message)
    } else if error.is_connect()
        || error.is_redirect()
        || error.is_request()
        || error.is_builder()
        || error.is_status()
    {
        FetchError::Protocol(message)
    } else if error.is_body() || error.is_decode() {
        FetchError::Io(std::io::Error::new(std::io::ErrorKind::Other, message))
    } else {
        FetchError::Unexpected(message)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait instead of calling reqwest directly?
//    - The engine only needs "GET this URL"
//    - Tests plug in a fake that returns canned responses or errors
//    - No test ever needs a network connection
//
// 2. Why reqwest::blocking?
//    - We fetch one page at a time and wait for each answer
//    - The blocking client gives exactly that without an async runtime
//
// 3. How is the body stream closed?
//    - `Box<dyn Read>` owns the stream
//    - When the box is dropped, the stream (and its connection) is released
//    - The engine drops it right after reading, whatever the read returned
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_timeout_is_timeout() {
        assert!(FetchError::Timeout("pool".into()).is_timeout());
        assert!(!FetchError::Protocol("refused".into()).is_timeout());
        assert!(!FetchError::Unexpected("boom".into()).is_timeout());
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        assert!(!FetchError::from(io).is_timeout());
    }

    #[test]
    fn test_default_settings() {
        let settings = TransportSettings::default();
        assert_eq!(settings.connect_timeout, Duration::from_secs(10));
        assert_eq!(settings.redirect_limit, 5);
        assert!(settings.proxy.is_none());
    }

    #[test]
    fn test_build_transport_with_proxy() {
        let settings = TransportSettings {
            proxy: Some(("proxy.local".to_string(), 3128)),
            ..TransportSettings::default()
        };
        assert!(ReqwestTransport::new(&settings).is_ok());
    }
}
