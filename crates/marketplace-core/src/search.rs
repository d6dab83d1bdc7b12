//! Search bar submission.
//!
//! A submission with a non-blank term sends exactly one `GET` to the search
//! endpoint. The response body is received and dropped; a failure is logged
//! and swallowed. Nothing is retried, cancelled or ordered across
//! overlapping submissions.

use tracing::{debug, error};

use crate::error::{Error, Result};
use crate::query::{SEARCH_PATH, SearchQuery};

/// Something that can perform a `GET` against the marketplace backend.
///
/// The UI implements this over the browser's fetch API. Futures are not
/// required to be `Send`; submissions run on a single-threaded event loop.
#[allow(async_fn_in_trait)]
pub trait SearchTransport {
    /// Fetch `path` (including its query string) and return the body.
    async fn get(&self, path: &str) -> Result<String>;
}

/// What happened to a search bar submission.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The term was blank; no request was made.
    Skipped,
    /// The request succeeded. The body is discarded.
    Completed {
        /// Size of the discarded response body.
        bytes: usize,
    },
    /// The request failed. The error has already been logged.
    Failed(Error),
}

impl SubmitOutcome {
    /// Returns true if a request was sent.
    #[must_use]
    pub const fn was_sent(&self) -> bool {
        !matches!(self, Self::Skipped)
    }
}

/// Submit `term` to the default `/search` endpoint.
pub async fn submit_search<T: SearchTransport + ?Sized>(transport: &T, term: &str) -> SubmitOutcome {
    submit_search_to(transport, SEARCH_PATH, term).await
}

/// Submit `term` to the search endpoint mounted at `endpoint`.
pub async fn submit_search_to<T: SearchTransport + ?Sized>(
    transport: &T,
    endpoint: &str,
    term: &str,
) -> SubmitOutcome {
    let Some(query) = SearchQuery::from_input(term) else {
        debug!("Blank search term, skipping request");
        return SubmitOutcome::Skipped;
    };

    let path = query.path_under(endpoint);
    debug!(path = %path, "Submitting search");

    match transport.get(&path).await {
        Ok(body) => {
            debug!(path = %path, bytes = body.len(), "Search completed");
            SubmitOutcome::Completed { bytes: body.len() }
        }
        Err(e) => {
            error!(path = %path, error = %e, "Error searching for items");
            SubmitOutcome::Failed(e)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Records every path it is asked for and answers with a canned result.
    struct RecordingTransport {
        paths: RefCell<Vec<String>>,
        fail_with_status: Option<u16>,
    }

    impl RecordingTransport {
        fn ok() -> Self {
            Self {
                paths: RefCell::new(Vec::new()),
                fail_with_status: None,
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                paths: RefCell::new(Vec::new()),
                fail_with_status: Some(status),
            }
        }

        fn paths(&self) -> Vec<String> {
            self.paths.borrow().clone()
        }
    }

    impl SearchTransport for RecordingTransport {
        async fn get(&self, path: &str) -> Result<String> {
            self.paths.borrow_mut().push(path.to_string());
            match self.fail_with_status {
                Some(status) => Err(Error::Status {
                    path: path.to_string(),
                    status,
                }),
                None => Ok(r#"[{"id":1,"name":"Red Shirt","price":1200,"category_name":"Fashion"}]"#.to_string()),
            }
        }
    }

    #[tokio::test]
    async fn test_non_blank_term_sends_exactly_one_request() {
        let transport = RecordingTransport::ok();
        let outcome = submit_search(&transport, "red shirt").await;

        assert!(matches!(outcome, SubmitOutcome::Completed { bytes } if bytes > 0));
        assert_eq!(transport.paths(), vec!["/search?name=red%20shirt".to_string()]);
    }

    #[tokio::test]
    async fn test_blank_terms_send_nothing() {
        let transport = RecordingTransport::ok();
        for term in ["", " ", "\t  \n"] {
            let outcome = submit_search(&transport, term).await;
            assert!(matches!(outcome, SubmitOutcome::Skipped));
            assert!(!outcome.was_sent());
        }
        assert!(transport.paths().is_empty());
    }

    #[tokio::test]
    async fn test_failure_is_reported_not_retried() {
        let transport = RecordingTransport::failing(503);
        let outcome = submit_search(&transport, "hat").await;

        match outcome {
            SubmitOutcome::Failed(Error::Status { status, .. }) => assert_eq!(status, 503),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(transport.paths().len(), 1);
    }

    #[tokio::test]
    async fn test_custom_endpoint() {
        let transport = RecordingTransport::ok();
        submit_search_to(&transport, "/api/search", "a&b").await;
        assert_eq!(transport.paths(), vec!["/api/search?name=a%26b".to_string()]);
    }

    #[tokio::test]
    async fn test_each_submission_is_independent() {
        let transport = RecordingTransport::ok();
        submit_search(&transport, "one").await;
        submit_search(&transport, "  ").await;
        submit_search(&transport, "two").await;
        assert_eq!(
            transport.paths(),
            vec!["/search?name=one".to_string(), "/search?name=two".to_string()]
        );
    }
}
