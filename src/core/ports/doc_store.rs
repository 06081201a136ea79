//! Document store port
//!
//! Defines the interface to the service that knows where legacy content
//! now lives.

/// Answer to a content query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentQueryResponse {
    /// HTTP status the document store answered with
    pub status: u16,
    /// `Location` of the canonical content, when the store sent one
    pub location: Option<String>,
}

impl ContentQueryResponse {
    /// A `301 Moved Permanently` pointing at `location`
    #[must_use]
    pub fn moved(location: impl Into<String>) -> Self {
        Self {
            status: 301,
            location: Some(location.into()),
        }
    }

    /// A bare status with no location
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self {
            status,
            location: None,
        }
    }
}

/// Document store client abstraction
///
/// Implementations must be safe to share between threads; the resolver
/// calls them concurrently without locking.
#[cfg_attr(test, mockall::automock)]
pub trait DocStoreClient: Send + Sync {
    /// Ask where the content identified by `(authority, identifier_value)` lives
    ///
    /// `authority` is a system URI such as
    /// `http://api.ft.com/system/FT-LABS-WP-1-24`. Errors are reserved for
    /// failures to talk to the store; a 404 is an `Ok` response.
    fn content_query(
        &self,
        authority: &str,
        identifier_value: &str,
        transaction_id: &str,
    ) -> anyhow::Result<ContentQueryResponse>;

    /// Check whether content with this UUID exists
    fn content_exists(&self, uuid: &str, transaction_id: &str) -> anyhow::Result<bool>;
}
