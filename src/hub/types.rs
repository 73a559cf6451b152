// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Hub API response types

use serde::Deserialize;

/// A model summary returned by the hub's search endpoint.
///
/// Received, printed, and discarded; never persisted or cached. The
/// hub serves `modelId` on older API payloads and `id` on current
/// ones, so both spellings are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelSummary {
    /// Repository identifier, e.g. "TheBloke/Llama-2-7B-GGUF"
    #[serde(alias = "modelId")]
    pub id: String,

    /// Owning user or organization; absent for some repositories
    #[serde(default)]
    pub author: Option<String>,

    /// Repository tags (frameworks, licenses, pipeline tags, ...)
    #[serde(default)]
    pub tags: Vec<String>,

    /// Lifetime download count; present on downloads-sorted queries
    #[serde(default)]
    pub downloads: Option<u64>,
}
