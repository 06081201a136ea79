//! Core domain logic for idmapper
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`AuthorityMapping`, `ContentUri`, `TransactionId`)
//! - `services/` - Business logic orchestration (`IdentifierResolver`)
//! - `ports/` - Trait definitions for external dependencies (`DocStoreClient`)

pub mod models;
pub mod ports;
pub mod services;
