//! Identifier resolver - maps legacy content URLs to canonical UUIDs
//!
//! Resolution takes two lookups: the URL's host is mapped to an authority
//! through static configuration, then the document store is asked where the
//! `(authority, url)` pair now lives. The answer is a redirect whose
//! location ends in the content UUID.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::core::models::{
    AuthorityMapping, ContentUri, ContentUriError, host_of, system_authority_uri,
};
use crate::core::ports::DocStoreClient;

/// Errors that can occur during identifier resolution
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The URL's host is not in the authority mapping
    #[error("couldn't find authority in mapping table for host '{0}'")]
    MappingNotFound(String),

    /// The document store could not be reached
    #[error(transparent)]
    Transport(anyhow::Error),

    /// The document store has no content for this URL
    #[error("content not found in document store (404)")]
    NotFound,

    /// The document store answered with something other than a redirect or 404
    #[error("unexpected status {0} from document store")]
    UnexpectedStatus(u16),

    /// The redirect location is not a content URI carrying a canonical UUID
    #[error(transparent)]
    InvalidLocation(#[from] ContentUriError),
}

/// Resolves legacy URLs to content UUIDs against a document store
#[derive(Clone)]
pub struct IdentifierResolver {
    client: Arc<dyn DocStoreClient>,
    authorities: AuthorityMapping,
}

impl IdentifierResolver {
    /// Create a resolver over a document store client and an authority table
    #[must_use]
    pub fn new(client: Arc<dyn DocStoreClient>, authorities: AuthorityMapping) -> Self {
        Self { client, authorities }
    }

    /// Resolve a legacy URL to its canonical content UUID
    ///
    /// `post_id` identifies the legacy post for tracing only; the URL
    /// already carries it. `transaction_id` is forwarded unchanged.
    ///
    /// Exactly one document store call is made, and none at all when the
    /// host is unmapped.
    pub fn resolve_identifier(
        &self,
        url: &str,
        post_id: &str,
        transaction_id: &str,
    ) -> Result<String, ResolveError> {
        let host = host_of(url).unwrap_or_default();
        let authority = self
            .authorities
            .authority_for(&host)
            .ok_or_else(|| ResolveError::MappingNotFound(host.clone()))?;

        log::debug!(
            "resolving post {post_id} from {url} under authority {authority} (tid {transaction_id})"
        );

        let response = self
            .client
            .content_query(&system_authority_uri(authority), url, transaction_id)
            .map_err(ResolveError::Transport)?;

        match response.status {
            404 => Err(ResolveError::NotFound),
            300..=399 => {
                let location = response.location.unwrap_or_default();
                Ok(ContentUri::parse(&location)?.into_uuid())
            },
            other => Err(ResolveError::UnexpectedStatus(other)),
        }
    }

    /// Check whether content with this UUID exists in the document store
    ///
    /// The UUID is passed through without validation and the client's
    /// answer is returned unchanged.
    pub fn content_exists(&self, uuid: &str, transaction_id: &str) -> anyhow::Result<bool> {
        self.client.content_exists(uuid, transaction_id)
    }
}

impl fmt::Debug for IdentifierResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentifierResolver")
            .field("authorities", &self.authorities)
            .finish_non_exhaustive()
    }
}
