//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `http/` - Document store over its HTTP API

pub mod http;

pub use http::HttpDocStoreClient;
