//! Exists command - check a UUID against the document store

use idmapper::config::Config;
use idmapper::output::{ExistsResult, OutputMode};

/// Check whether content exists
pub fn exists(config: &Config, uuid: &str, tid: Option<String>, mode: OutputMode) -> anyhow::Result<()> {
    let resolver = super::build_resolver(config)?;
    let tid = super::transaction_id(tid);

    let exists = resolver.content_exists(uuid, tid.as_str())?;

    ExistsResult {
        uuid: uuid.to_string(),
        exists,
        transaction_id: tid.to_string(),
    }
    .render(mode);

    Ok(())
}
