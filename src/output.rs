//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::core::models::AuthorityMapping;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a resolve operation
#[derive(Debug, Serialize)]
pub struct ResolveResult {
    /// The legacy URL that was resolved
    pub url: String,
    /// Legacy post id
    pub post_id: String,
    /// Transaction id sent downstream
    pub transaction_id: String,
    /// The canonical content UUID
    pub uuid: String,
}

/// Result of an exists operation
#[derive(Debug, Serialize)]
pub struct ExistsResult {
    /// UUID that was checked
    pub uuid: String,
    /// Whether the document store has it
    pub exists: bool,
    /// Transaction id sent downstream
    pub transaction_id: String,
}

/// Result of listing the authority table
#[derive(Debug, Serialize)]
pub struct AuthorityListResult {
    /// Mapped hosts, sorted by host
    pub authorities: Vec<AuthorityInfo>,
}

/// One row of the authority table
#[derive(Debug, Serialize)]
pub struct AuthorityInfo {
    /// Hostname as matched against URLs
    pub host: String,
    /// Authority the host maps to
    pub authority: String,
}

impl ResolveResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.uuid),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl ExistsResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        if self.exists {
            println!("Content {} exists.", self.uuid);
        } else {
            println!("Content {} not found.", self.uuid);
        }
    }
}

impl From<&AuthorityMapping> for AuthorityListResult {
    fn from(mapping: &AuthorityMapping) -> Self {
        Self {
            authorities: mapping
                .entries()
                .into_iter()
                .map(|(host, authority)| AuthorityInfo {
                    host: host.to_string(),
                    authority: authority.to_string(),
                })
                .collect(),
        }
    }
}

impl AuthorityListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        if self.authorities.is_empty() {
            println!("No authorities configured.");
            return;
        }

        println!("Authorities:\n");
        let width = self.authorities.iter().map(|a| a.host.len()).max().unwrap_or(0);
        for a in &self.authorities {
            println!("  {:<width$}  {}", a.host, a.authority);
        }
    }
}
