// src/model/link.rs
// =============================================================================
// A Link is a URL we might want to fetch, plus whether it is well-formed.
//
// The validity flag is decided exactly once, when the Link is built
// (see `support::create_link`), and there is no way to change it afterwards.
// An invalid Link is never handed to the transport.
// =============================================================================

/// A candidate URL (the root or one discovered on the root page).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    url: Option<String>,
    valid: bool,
}

impl Link {
    /// A link whose URL parsed as an absolute URL with a host.
    pub fn valid(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            valid: true,
        }
    }

    /// A link that failed validation. The malformed text is kept so it can
    /// still be reported.
    pub fn invalid(url: Option<String>) -> Self {
        Self { url, valid: false }
    }

    /// The (trimmed) URL, or `None` when the candidate was missing entirely.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The text used for this link in the report.
    ///
    /// A missing URL has nothing to show, so it renders as an empty string.
    pub fn display_url(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }
}
