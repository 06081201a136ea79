//! Authorities command - show the host to authority table

use idmapper::config::Config;
use idmapper::output::{AuthorityListResult, OutputMode};

/// List configured authorities
pub fn authorities(config: &Config, mode: OutputMode) {
    AuthorityListResult::from(&config.authorities).render(mode);
}
