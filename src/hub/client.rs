// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! HuggingFace Hub API client
//!
//! A thin wrapper over the hub's REST API. The search command is the
//! only consumer today; it issues one request per invocation with no
//! retries, pagination, or caching.

use std::time::Duration;

use reqwest::Client;

use crate::config::HubConfig;
use crate::error::{ManagerError, Result};
use crate::hub::types::ModelSummary;

/// Client for HuggingFace Hub API operations.
#[derive(Debug, Clone)]
pub struct HubClient {
    /// HTTP client
    client: Client,
    /// API base URL, e.g. "https://huggingface.co"
    base_url: String,
    /// Bearer token for gated or private repositories
    token: Option<String>,
}

impl HubClient {
    /// Create a client from hub settings.
    pub fn new(config: &HubConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("model-manager/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ManagerError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Search the hub's model index.
    ///
    /// Results are filtered by `query`, sorted by download count
    /// descending, and truncated server-side to `limit`.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<ModelSummary>> {
        let url = format!("{}/api/models", self.base_url);
        let limit = limit.to_string();

        tracing::debug!(query, limit = %limit, "Querying hub model index");

        let mut request = self.client.get(&url).query(&[
            ("search", query),
            ("sort", "downloads"),
            ("direction", "-1"),
            ("limit", limit.as_str()),
        ]);

        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ManagerError::Hub(format!(
                "HuggingFace API returned {}",
                status
            )));
        }

        let models: Vec<ModelSummary> = response
            .json()
            .await
            .map_err(|e| ManagerError::Hub(format!("Failed to parse hub response: {}", e)))?;

        tracing::debug!(count = models.len(), "Hub query returned");

        Ok(models)
    }
}
