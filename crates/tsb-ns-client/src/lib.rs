//! Blocking HTTP client for the management API listing endpoints.
//!
//! Implements [`tsb_ns_core::EntityFetcher`] over `GET /v2/<parent>/<collection>`.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;
use tsb_ns_core::{parse_listing, EntityFetcher, EntityKind, EntityRecord, FetchError};

pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
const ERROR_BODY_PREVIEW_CHARS: usize = 240;

#[derive(Debug, Clone)]
pub struct TsbClientConfig {
    /// Scheme and host, e.g. `https://tsb.example.com`.
    pub api_base: String,
    pub token: String,
    pub request_timeout_ms: u64,
    pub insecure_skip_verify: bool,
}

#[derive(Debug, Clone)]
pub struct TsbClient {
    client: reqwest::blocking::Client,
    api_base: String,
}

impl TsbClient {
    pub fn new(config: TsbClientConfig) -> Result<Self, FetchError> {
        let token = config.token.trim();
        if token.is_empty() {
            return Err(FetchError::MissingToken);
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut bearer = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|error| FetchError::InvalidToken(error.to_string()))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.request_timeout_ms.max(1)))
            .danger_accept_invalid_certs(config.insecure_skip_verify)
            .build()
            .map_err(|error| FetchError::Transport(format!("failed to build client: {error}")))?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn listing_url(&self, kind: EntityKind, parent_fqn: &str) -> String {
        format!(
            "{}/v2/{}/{}",
            self.api_base,
            parent_fqn.trim_matches('/'),
            kind.collection_path()
        )
    }
}

impl EntityFetcher for TsbClient {
    fn fetch_children(
        &self,
        kind: EntityKind,
        parent_fqn: &str,
    ) -> Result<Vec<EntityRecord>, FetchError> {
        let url = self.listing_url(kind, parent_fqn);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|error| FetchError::Transport(error.to_string()))?;

        let status = response.status();
        debug!(kind = %kind, url = %url, status = status.as_u16(), "listed entities");
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_PREVIEW_CHARS).collect(),
            });
        }

        let payload = response
            .json::<serde_json::Value>()
            .map_err(|error| {
                FetchError::InvalidResponse(format!("failed to parse {kind} listing json: {error}"))
            })?;
        parse_listing(kind, payload)
    }
}
