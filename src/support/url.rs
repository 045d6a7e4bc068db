// src/support/url.rs
// =============================================================================
// URL validation and base-URL derivation.
//
// We use the `url` crate to decide whether a string is a well-formed absolute
// URL. This is purely syntactic - no DNS lookup, no request.
//
// Rust concepts:
// - Option<&str>: the candidate may be missing entirely
// - String slicing: deriving the base URL is plain string surgery
// =============================================================================

use url::Url;

use crate::model::Link;

// Builds a Link from a candidate URL string
//
// Parameters:
//   candidate: the raw string (may be None, may have surrounding whitespace)
//
// Returns: a Link that is valid only if the trimmed string parses as an
// absolute URL with a host (scheme + authority).
//
// Examples:
//   Some("http://good.com   ") -> valid,   url = "http://good.com"
//   Some("htp:/bad.com")       -> invalid, url = "htp:/bad.com"
//   None                       -> invalid, url = None
pub fn create_link(candidate: Option<&str>) -> Link {
    let raw = match candidate {
        Some(raw) => raw.trim(),
        None => return Link::invalid(None),
    };

    match Url::parse(raw) {
        Ok(parsed) if parsed.has_host() => Link::valid(raw),
        // Unparseable, or parsed without an authority ("mailto:x", "htp:/bad.com")
        _ => Link::invalid(Some(raw.to_string())),
    }
}

// Removes the final path segment of a URL
//
// Examples:
//   "http://host/test/index.html" -> "http://host/test"
//   "http://host/test/"           -> "http://host/test"
//   "http://host"                 -> "http://host"
//
// Only the path is considered: a '/' inside the query or fragment is not a
// segment separator, and the authority is never cut.
pub fn get_base_url(url: &str) -> String {
    let path_start = match url.find("://") {
        Some(idx) => {
            let after_scheme = idx + 3;
            let authority_end = url[after_scheme..]
                .find(|c: char| c == '/' || c == '?' || c == '#')
                .map(|offset| after_scheme + offset);
            match authority_end {
                Some(end) if url[end..].starts_with('/') => end,
                // Query or fragment straight after the host: there is no path
                Some(end) => return url[..end].to_string(),
                None => return url.to_string(),
            }
        }
        None => 0,
    };

    let path_end = url[path_start..]
        .find(|c: char| c == '?' || c == '#')
        .map(|offset| path_start + offset)
        .unwrap_or(url.len());

    match url[path_start..path_end].rfind('/') {
        Some(offset) => url[..path_start + offset].to_string(),
        None => url.to_string(),
    }
}
