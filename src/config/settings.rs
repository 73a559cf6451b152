// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for the model manager
//!
//! Handles loading and saving settings from
//! ~/.model-manager/settings.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Main settings structure, stored in ~/.model-manager/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Model hub configuration
    #[serde(default)]
    pub hub: HubConfig,
}

/// Configuration for the HuggingFace Hub client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubConfig {
    /// Hub endpoint (override for mirrors or tests)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Access token for gated or private repositories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://huggingface.co".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Settings {
    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        Self::manager_home().join("settings.json")
    }

    /// Load settings from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path.
    ///
    /// A missing file yields defaults; unknown keys are ignored so
    /// settings written by newer versions keep loading.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut settings = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };
        settings.apply_env_overrides();
        Ok(settings)
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the model manager home directory (~/.model-manager or
    /// $MODEL_MANAGER_HOME).
    pub fn manager_home() -> PathBuf {
        if let Ok(home) = std::env::var("MODEL_MANAGER_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".model-manager")
    }

    /// HF_TOKEN in the environment wins over the settings file, the
    /// same convention the hub's own tooling follows.
    fn apply_env_overrides(&mut self) {
        if let Ok(token) = std::env::var("HF_TOKEN") {
            if !token.is_empty() {
                self.hub.token = Some(token);
            }
        }
    }
}
