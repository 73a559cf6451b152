// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for the model manager
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Main error type for model manager operations
#[derive(Error, Debug)]
pub enum ManagerError {
    /// The hub answered with a non-success status or an unusable payload
    #[error("Hub error: {0}")]
    Hub(String),

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for model manager operations
pub type Result<T> = std::result::Result<T, ManagerError>;
