//! Host to authority mapping and legacy URL helpers
//!
//! Legacy content is identified in the document store by the system it
//! originated from (the "authority") plus its original URL. The mapping
//! from a URL's host to that authority is static configuration.
//!
//! # Examples
//!
//! ```
//! use idmapper::core::models::{AuthorityMapping, host_of, system_authority_uri};
//!
//! let mapping: AuthorityMapping =
//!     [("ftalphaville.ft.com", "FT-LABS-WP-1-24")].into_iter().collect();
//!
//! let host = host_of("http://ftalphaville.ft.com/?p=2193913").unwrap();
//! let authority = mapping.authority_for(&host).unwrap();
//! assert_eq!(
//!     system_authority_uri(authority),
//!     "http://api.ft.com/system/FT-LABS-WP-1-24"
//! );
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use url::Url;

/// Prefix of the internal system URI an authority is addressed by
pub const SYSTEM_URI_PREFIX: &str = "http://api.ft.com/system/";

/// Immutable hostname to authority table
///
/// Lookups are exact matches on the hostname as it appears in the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorityMapping {
    entries: HashMap<String, String>,
}

impl AuthorityMapping {
    /// Create a mapping from an existing table
    #[must_use]
    pub const fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Find the authority for a hostname
    #[must_use]
    pub fn authority_for(&self, host: &str) -> Option<&str> {
        self.entries.get(host).map(String::as_str)
    }

    /// Number of mapped hosts
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no hosts are mapped
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All `(host, authority)` pairs, sorted by host
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> =
            self.entries.iter().map(|(h, a)| (h.as_str(), a.as_str())).collect();
        pairs.sort_unstable();
        pairs
    }
}

impl<K, V> FromIterator<(K, V)> for AuthorityMapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Build the system URI the document store knows an authority by
#[must_use]
pub fn system_authority_uri(authority: &str) -> String {
    format!("{SYSTEM_URI_PREFIX}{authority}")
}

/// Extract the hostname from a URL
///
/// The URL is parsed the way an HTTP client would request it, so the host
/// comes back in its normalized form. A non-default port stays part of the
/// host; any `user@` prefix does not.
#[must_use]
pub fn host_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str().filter(|host| !host.is_empty())?;

    Some(match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

/// Extract the legacy post id (the `p` query parameter) from a URL
#[must_use]
pub fn post_id_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()?
        .query_pairs()
        .find(|(key, _)| key == "p")
        .map(|(_, id)| id.into_owned())
        .filter(|id| !id.is_empty())
}
