//! HTTP document store adapter
//!
//! Talks to the document store API over blocking HTTP:
//!
//! - `GET {base}/content-query?identifierAuthority=..&identifierValue=..`
//!   answers `301` with a `Location` header, or `404`
//! - `HEAD {base}/content/{uuid}` answers `2xx` or `404`
//!
//! Redirects are never followed; the redirect itself is the answer.

use std::time::Duration;

use anyhow::{Context, anyhow, bail};
use reqwest::blocking::Client;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use reqwest::{StatusCode, Url};

use crate::config::DocStoreConfig;
use crate::core::ports::{ContentQueryResponse, DocStoreClient};

/// Header carrying the transaction id downstream
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// `DocStoreClient` backed by the document store HTTP API
#[derive(Debug, Clone)]
pub struct HttpDocStoreClient {
    http: Client,
    base_url: String,
}

impl HttpDocStoreClient {
    /// Build a client from connection settings
    pub fn new(config: &DocStoreConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(Policy::none())
            .build()
            .context("failed to build document store HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl DocStoreClient for HttpDocStoreClient {
    fn content_query(
        &self,
        authority: &str,
        identifier_value: &str,
        transaction_id: &str,
    ) -> anyhow::Result<ContentQueryResponse> {
        let endpoint = format!("{}/content-query", self.base_url);
        let url = Url::parse_with_params(
            &endpoint,
            &[("identifierAuthority", authority), ("identifierValue", identifier_value)],
        )
        .with_context(|| format!("invalid document store URL: {endpoint}"))?;

        log::debug!("GET {url} (tid {transaction_id})");
        let response = self
            .http
            .get(url)
            .header(REQUEST_ID_HEADER, transaction_id)
            .send()
            .context("document store content query failed")?;

        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        log::debug!("content query answered {status} (tid {transaction_id})");

        Ok(ContentQueryResponse {
            status: status.as_u16(),
            location,
        })
    }

    fn content_exists(&self, uuid: &str, transaction_id: &str) -> anyhow::Result<bool> {
        let mut url = Url::parse(&self.base_url)
            .with_context(|| format!("invalid document store URL: {}", self.base_url))?;
        url.path_segments_mut()
            .map_err(|()| anyhow!("document store URL cannot take a path: {}", self.base_url))?
            .pop_if_empty()
            .push("content")
            .push(uuid);

        log::debug!("HEAD {url} (tid {transaction_id})");
        let response = self
            .http
            .head(url)
            .header(REQUEST_ID_HEADER, transaction_id)
            .send()
            .context("document store content check failed")?;

        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => bail!("unexpected status {status} checking content {uuid}"),
        }
    }
}
