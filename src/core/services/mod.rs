//! Business logic services
//!
//! Orchestration logic that depends only on domain models and port
//! traits. Concrete I/O is injected by the caller.
//!
//! - [`resolver`] - Resolve legacy URLs to content UUIDs

pub mod resolver;

pub use resolver::{IdentifierResolver, ResolveError};
