// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! model-manager - model management for the LLM repository.
//!
//! This crate exposes the runtime used by the `model-manager` CLI
//! (`src/main.rs`):
//! - `cli`: argument parsing and the subcommand surface
//! - `hub`: HuggingFace Hub API client and the transient search record
//! - `commands`: one handler per subcommand; only `search` does real
//!   work today, the rest are stubs awaiting implementation
//! - `config`: user settings (hub endpoint, token, timeout)

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod hub;

pub use error::{ManagerError, Result};
