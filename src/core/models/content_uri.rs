//! Canonical content URI parsing
//!
//! The document store answers a content query with a location of the form
//! `scheme://host/content/<uuid>`. This module parses that location and
//! validates the UUID it carries.
//!
//! # Examples
//!
//! ```
//! use idmapper::core::models::ContentUri;
//!
//! let uri = ContentUri::parse("http://api.ft.com/content/5414b08f-5ae1-3bd6-9901-a9dd1bf9db03")
//!     .unwrap();
//! assert_eq!(uri.host(), "api.ft.com");
//! assert_eq!(uri.uuid(), "5414b08f-5ae1-3bd6-9901-a9dd1bf9db03");
//! ```

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static CONTENT_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]*)://([^/?#\s]+)/content/([^/?#\s]+)$")
        .expect("content URI pattern is valid")
});

static UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("uuid pattern is valid")
});

/// Errors that can occur when parsing a content URI
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentUriError {
    /// Location does not have the `scheme://host/content/<id>` shape
    #[error("invalid FT URI: '{0}'")]
    InvalidUri(String),

    /// The trailing segment is not a canonical UUID
    #[error("invalid uuid: '{0}'")]
    InvalidUuid(String),
}

/// A parsed `scheme://host/content/<uuid>` location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentUri {
    scheme: String,
    host: String,
    uuid: String,
}

impl ContentUri {
    /// Parse a location URI and validate the UUID it ends with
    pub fn parse(location: &str) -> Result<Self, ContentUriError> {
        let caps = CONTENT_URI
            .captures(location)
            .ok_or_else(|| ContentUriError::InvalidUri(location.to_string()))?;

        let uuid = &caps[3];
        if !is_valid_uuid(uuid) {
            return Err(ContentUriError::InvalidUuid(uuid.to_string()));
        }

        Ok(Self {
            scheme: caps[1].to_string(),
            host: caps[2].to_string(),
            uuid: uuid.to_string(),
        })
    }

    /// URI scheme (e.g. `http`)
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Host the document store answered with
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The content UUID
    #[must_use]
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Take the UUID, dropping the rest
    #[must_use]
    pub fn into_uuid(self) -> String {
        self.uuid
    }
}

/// Check a string against canonical 8-4-4-4-12 hex UUID syntax
#[must_use]
pub fn is_valid_uuid(candidate: &str) -> bool {
    UUID.is_match(candidate)
}
