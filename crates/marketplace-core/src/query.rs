//! Search query strings and URL paths.
//!
//! Terms are encoded the way browsers' `encodeURIComponent` does it, so the
//! paths built here are identical to the ones a storefront page would push
//! or request.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Default path of the backend search endpoint.
pub const SEARCH_PATH: &str = "/search";

/// Path of the on-sale item listing endpoint.
pub const ITEMS_PATH: &str = "/items";

/// Query parameter carrying the search term.
pub const NAME_PARAM: &str = "name";

/// Characters left unescaped by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode text for use as a single query component.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// A search term that is worth sending to the backend.
///
/// Only terms with at least one non-whitespace character can be turned into
/// a query. The term itself is kept as typed; trimming is used only to decide
/// whether a request happens at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
}

impl SearchQuery {
    /// Build a query from raw input, or `None` for blank input.
    pub fn from_input(input: &str) -> Option<Self> {
        if input.trim().is_empty() {
            return None;
        }
        Some(Self {
            term: input.to_owned(),
        })
    }

    /// The term as typed.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// `name=<encoded term>`
    #[must_use]
    pub fn query_string(&self) -> String {
        format!("{NAME_PARAM}={}", encode_component(&self.term))
    }

    /// Path of the request against the default search endpoint.
    #[must_use]
    pub fn request_path(&self) -> String {
        self.path_under(SEARCH_PATH)
    }

    /// Path of the request against an arbitrary endpoint path.
    #[must_use]
    pub fn path_under(&self, endpoint: &str) -> String {
        format!("{endpoint}?{}", self.query_string())
    }
}

/// History entry path for the URL-reflecting item list.
///
/// The empty term maps back to the root path.
pub fn history_path(term: &str) -> String {
    if term.is_empty() {
        return "/".to_string();
    }
    format!("{SEARCH_PATH}?{NAME_PARAM}={}", encode_component(term))
}

/// Extract the `name` parameter from a location query string.
///
/// Accepts the string with or without its leading `?`. `+` decodes to a
/// space, as in form-encoded URLs.
pub fn term_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| *key == NAME_PARAM)
        .map(|(_, value)| {
            let value = value.replace('+', " ");
            percent_decode_str(&value).decode_utf8_lossy().into_owned()
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component_matches_browser_behaviour() {
        assert_eq!(encode_component("red shirt"), "red%20shirt");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_component("it's (new)!"), "it's%20(new)!");
        assert_eq!(encode_component("~_.-*"), "~_.-*");
        assert_eq!(encode_component("50%/+"), "50%25%2F%2B");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn test_blank_input_has_no_query() {
        assert_eq!(SearchQuery::from_input(""), None);
        assert_eq!(SearchQuery::from_input("   "), None);
        assert_eq!(SearchQuery::from_input("\t\n"), None);
    }

    #[test]
    fn test_query_keeps_untrimmed_term() {
        let query = SearchQuery::from_input(" hat ").unwrap();
        assert_eq!(query.term(), " hat ");
        assert_eq!(query.request_path(), "/search?name=%20hat%20");
    }

    #[test]
    fn test_request_path() {
        let query = SearchQuery::from_input("Red Shirt").unwrap();
        assert_eq!(query.query_string(), "name=Red%20Shirt");
        assert_eq!(query.request_path(), "/search?name=Red%20Shirt");
        assert_eq!(query.path_under("/api/search"), "/api/search?name=Red%20Shirt");
    }

    #[test]
    fn test_history_path() {
        assert_eq!(history_path(""), "/");
        assert_eq!(history_path("sh"), "/search?name=sh");
        assert_eq!(history_path("a b"), "/search?name=a%20b");
        assert_eq!(history_path(" "), "/search?name=%20");
    }

    #[test]
    fn test_term_from_query() {
        assert_eq!(term_from_query("?name=Red%20Shirt"), Some("Red Shirt".to_string()));
        assert_eq!(term_from_query("page=2&name=a+b"), Some("a b".to_string()));
        assert_eq!(term_from_query("?name="), Some(String::new()));
        assert_eq!(term_from_query("?name"), Some(String::new()));
        assert_eq!(term_from_query("?names=x"), None);
        assert_eq!(term_from_query(""), None);
    }

    #[test]
    fn test_history_path_round_trips_through_location() {
        let path = history_path("Tシャツ & hat");
        let (_, query) = path.split_once('?').unwrap();
        assert_eq!(term_from_query(query).as_deref(), Some("Tシャツ & hat"));
    }
}
