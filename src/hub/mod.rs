// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! HuggingFace Hub integration
//!
//! Provides the API client used by the search command and the
//! transient model-summary record it returns.

pub mod client;
pub mod types;

pub use client::HubClient;
pub use types::ModelSummary;
