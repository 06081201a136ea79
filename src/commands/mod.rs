//! Command implementations

mod authorities;
mod exists;
mod resolve;

use std::sync::Arc;

use idmapper::adapters::HttpDocStoreClient;
use idmapper::config::Config;
use idmapper::core::models::TransactionId;
use idmapper::core::services::IdentifierResolver;

pub use authorities::authorities;
pub use exists::exists;
pub use resolve::resolve;

/// Wire the HTTP document store into a resolver
fn build_resolver(config: &Config) -> anyhow::Result<IdentifierResolver> {
    let client = HttpDocStoreClient::new(&config.document_store)?;
    Ok(IdentifierResolver::new(Arc::new(client), config.authorities.clone()))
}

fn transaction_id(tid: Option<String>) -> TransactionId {
    tid.map_or_else(TransactionId::generate, TransactionId::from)
}
