// src/support/links.rs
// =============================================================================
// This module finds link targets in raw page text.
//
// Unlike a full HTML parser, we scan the text with a regular expression:
// - it works on broken or partial markup (we never need a valid DOM)
// - it keeps every match, in the order it appears, duplicates included
//
// What counts as a link:
//   <a ... href="target" ...>   or   <A HREF='target'>
// The tag and attribute names are matched case-insensitively and `href`
// may appear after other attributes.
//
// Rust concepts:
// - LazyLock: compile the regex once, the first time it is used
// - Iterators: captures_iter() walks the matches left to right
// =============================================================================

use std::sync::LazyLock;

use regex::Regex;

use super::url::get_base_url;

// Group 1 holds a double-quoted value, group 2 a single-quoted one.
// `(?:[^>]*?\s)?` skips any attributes that come before href without
// leaving the tag, and the leading whitespace stops `data-href` matching.
static ANCHOR_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a\s(?:[^>]*?\s)?href\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("hardcoded anchor pattern is valid")
});

// Extracts every anchor href from page text
//
// Parameters:
//   content: the raw page text
//   page_url: the URL the text was fetched from, if known
//
// Returns: link targets in first-occurrence order. Values starting with '/'
// are resolved against the page's base URL when a page URL is given;
// everything else is returned exactly as written.
//
// Example:
//   content  = r#"<A HREF="/test"> <a href="next.org">"#
//   page_url = Some("http://host/dir/index.html")
//   result   = ["http://host/dir/test", "next.org"]
pub fn get_links(content: &str, page_url: Option<&str>) -> Vec<String> {
    let base_url = page_url.map(get_base_url);

    let links: Vec<String> = ANCHOR_HREF
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|value| resolve(value.as_str(), base_url.as_deref()))
        .collect();

    log::debug!(
        "found {} link(s) on {}",
        links.len(),
        page_url.unwrap_or("<unknown page>")
    );
    links
}

// Root-relative values are glued onto the base URL. No `..` handling, no
// slash collapsing - plain concatenation.
fn resolve(value: &str, base_url: Option<&str>) -> String {
    match base_url {
        Some(base) if value.starts_with('/') => format!("{}{}", base, value),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content() {
        assert!(get_links("", None).is_empty());
    }

    #[test]
    fn test_no_links() {
        assert!(get_links("Robert'); DROP TABLE Students;--", None).is_empty());
    }

    #[test]
    fn test_anchor_without_href() {
        let content = r#"<a name="top">Top</a> <link href="style.css">"#;
        assert!(get_links(content, Some("http://host")).is_empty());
    }

    #[test]
    fn test_href_not_first_attribute() {
        let links = get_links(
            r#"drop tables; <A target="self" href="test.com"> junk junk"#,
            Some("http://www.bobbylough.com"),
        );
        assert_eq!(links, vec!["test.com"]);
    }

    #[test]
    fn test_upper_case_anchor() {
        let links = get_links(r#"drop tables; <A HREF="test.com"> junk junk"#, None);
        assert_eq!(links, vec!["test.com"]);
    }

    #[test]
    fn test_single_quoted_href() {
        let links = get_links("<a class='x' href='http://a.com/b'>b</a>", None);
        assert_eq!(links, vec!["http://a.com/b"]);
    }

    #[test]
    fn test_data_href_is_not_href() {
        let links = get_links(r#"<a data-href="nope.com" href="yes.com">"#, None);
        assert_eq!(links, vec!["yes.com"]);
    }

    #[test]
    fn test_relative_link_resolved_against_base() {
        let links = get_links(
            r#"drop tables; <A HREF="/test"> junk junk"#,
            Some("http://www.bobbylough.com"),
        );
        assert_eq!(links, vec!["http://www.bobbylough.com/test"]);

        let links = get_links(r#"<a href="/about">"#, Some("http://host/dir/index.html"));
        assert_eq!(links, vec!["http://host/dir/about"]);
    }

    #[test]
    fn test_relative_link_on_page_with_query_only() {
        let links = get_links(r#"<a href="/x">"#, Some("http://host?next=/b"));
        assert_eq!(links, vec!["http://host/x"]);
    }

    #[test]
    fn test_relative_link_without_page_url_is_kept() {
        let links = get_links(r#"<a href="/test">"#, None);
        assert_eq!(links, vec!["/test"]);
    }

    #[test]
    fn test_multiple_links_in_order() {
        let links = get_links(
            r#"drop tables; <A HREF="test.com"> <a href="nexttest.org". junk junk"#,
            None,
        );
        assert_eq!(links, vec!["test.com", "nexttest.org"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let content = r#"<a href="x.com">1</a><p>text</p><a href="y.com">2</a><a href="x.com">3</a>"#;
        assert_eq!(get_links(content, None), vec!["x.com", "y.com", "x.com"]);
    }
}
