//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (here, the document store service).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Mock implementations for unit tests
//! - **Flexibility**: Swap implementations without changing business logic

mod doc_store;

#[cfg(test)]
pub(crate) use doc_store::MockDocStoreClient;
pub use doc_store::{ContentQueryResponse, DocStoreClient};
