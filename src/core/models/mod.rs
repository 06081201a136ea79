//! Domain models for idmapper
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`AuthorityMapping`] - Which legacy system a host belongs to
//! - [`ContentUri`] - The `scheme://host/content/<uuid>` location shape
//! - [`TransactionId`] - Tracing token forwarded downstream

mod authority;
mod content_uri;
mod transaction;

pub use authority::{AuthorityMapping, SYSTEM_URI_PREFIX, host_of, post_id_of, system_authority_uri};
pub use content_uri::{ContentUri, ContentUriError, is_valid_uuid};
pub use transaction::TransactionId;
