//! Page and database identifiers
//!
//! Notion IDs are 32 hex characters, usually shown hyphen-grouped as
//! 8-4-4-4-12 (e.g., `2f987123-2f45-80b6-bf51-e923c03cb30f`). Users paste
//! them bare, hyphenated, or embedded at the end of a page URL:
//!
//! ```text
//! https://notion.so/My-Page-2f9871232f4580b6bf51e923c03cb30f?pvs=4
//! ```
//!
//! Parsing never fails. Input that doesn't end in 32 hex characters is kept
//! as-is (minus query string and trailing slashes) and left for the API to
//! reject.

use std::fmt;

/// Number of hex digits in a Notion ID
const ID_HEX_LEN: usize = 32;

/// Offsets (into the compact form) where hyphens go
const GROUP_BREAKS: [usize; 4] = [8, 12, 16, 20];

/// Base for user-facing page links
pub const PAGE_URL_BASE: &str = "https://notion.so";

/// A page or database ID, canonicalized when recognizable
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageId {
    value: String,
    canonical: bool,
}

impl PageId {
    /// Normalizes a raw ID or URL
    pub fn parse(input: &str) -> Self {
        let stripped = input.split('?').next().unwrap_or(input).trim_end_matches('/');
        let compact: Vec<u8> = stripped.bytes().filter(|b| *b != b'-').collect();

        if compact.len() >= ID_HEX_LEN {
            let tail = &compact[compact.len() - ID_HEX_LEN..];
            if tail.iter().all(u8::is_ascii_hexdigit) {
                return Self {
                    value: hyphenate(tail),
                    canonical: true,
                };
            }
        }

        Self {
            value: stripped.to_string(),
            canonical: false,
        }
    }

    /// Returns the ID as sent to the API
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns true if the input contained a recognizable 32-hex ID
    pub fn is_canonical(&self) -> bool {
        self.canonical
    }

    /// Returns the page link for this ID
    pub fn url(&self) -> String {
        page_url(&self.value)
    }
}

/// Inserts hyphens into 32 ASCII hex digits
fn hyphenate(hex: &[u8]) -> String {
    let mut out = String::with_capacity(ID_HEX_LEN + GROUP_BREAKS.len());
    for (i, b) in hex.iter().enumerate() {
        if GROUP_BREAKS.contains(&i) {
            out.push('-');
        }
        out.push(b.to_ascii_lowercase() as char);
    }
    out
}

/// Builds the page link for an ID as returned by the API
pub fn page_url(id: &str) -> String {
    format!("{}/{}", PAGE_URL_BASE, id.replace('-', ""))
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = "2f987123-2f45-80b6-bf51-e923c03cb30f";

    #[test]
    fn bare_id_is_hyphenated() {
        let id = PageId::parse("2f9871232f4580b6bf51e923c03cb30f");
        assert_eq!(id.as_str(), CANONICAL);
        assert!(id.is_canonical());
    }

    #[test]
    fn hyphenated_id_is_unchanged() {
        assert_eq!(PageId::parse(CANONICAL).as_str(), CANONICAL);
    }

    #[test]
    fn url_with_slug_and_query() {
        let id = PageId::parse("https://notion.so/My-Page-2f9871232f4580b6bf51e923c03cb30f?pvs=4");
        assert_eq!(id.as_str(), CANONICAL);
    }

    #[test]
    fn url_with_trailing_slashes() {
        let id = PageId::parse("https://www.notion.so/workspace/2f9871232f4580b6bf51e923c03cb30f//");
        assert_eq!(id.as_str(), CANONICAL);
    }

    #[test]
    fn hyphenated_id_inside_url() {
        let input = format!("https://notion.so/{}?v=abc", CANONICAL);
        assert_eq!(PageId::parse(&input).as_str(), CANONICAL);
    }

    #[test]
    fn uppercase_hex_is_lowercased() {
        let id = PageId::parse("2F9871232F4580B6BF51E923C03CB30F");
        assert_eq!(id.as_str(), CANONICAL);
    }

    #[test]
    fn short_input_passes_through() {
        let id = PageId::parse("abc123/?x=1");
        assert_eq!(id.as_str(), "abc123");
        assert!(!id.is_canonical());
    }

    #[test]
    fn non_hex_tail_passes_through() {
        // 32 chars at the end, but the last one isn't hex
        let input = "2f9871232f4580b6bf51e923c03cb30g";
        assert_eq!(PageId::parse(input).as_str(), input);
    }

    #[test]
    fn hyphens_kept_in_passthrough() {
        let id = PageId::parse("not-a-page-id");
        assert_eq!(id.as_str(), "not-a-page-id");
    }

    #[test]
    fn multibyte_input_does_not_panic() {
        let id = PageId::parse("Ünïcödé-page-title-without-any-identifier-at-all");
        assert!(!id.is_canonical());
    }

    #[test]
    fn page_url_strips_hyphens() {
        assert_eq!(
            page_url(CANONICAL),
            "https://notion.so/2f9871232f4580b6bf51e923c03cb30f"
        );
        assert_eq!(PageId::parse(CANONICAL).url(), page_url(CANONICAL));
    }

    #[test]
    fn empty_input_is_not_canonical() {
        let id = PageId::parse("");
        assert_eq!(id.as_str(), "");
        assert!(!id.is_canonical());
    }
}
