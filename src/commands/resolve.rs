//! Resolve command - map a legacy URL to its content UUID

use idmapper::config::Config;
use idmapper::core::models::post_id_of;
use idmapper::output::{OutputMode, ResolveResult};

/// Resolve a legacy URL
pub fn resolve(
    config: &Config,
    url: &str,
    post_id: Option<String>,
    tid: Option<String>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let resolver = super::build_resolver(config)?;
    let tid = super::transaction_id(tid);
    let post_id = post_id.or_else(|| post_id_of(url)).unwrap_or_default();

    let uuid = resolver.resolve_identifier(url, &post_id, tid.as_str())?;
    log::info!("resolved {url} to {uuid} (tid {tid})");

    ResolveResult {
        url: url.to_string(),
        post_id,
        transaction_id: tid.to_string(),
        uuid,
    }
    .render(mode);

    Ok(())
}
