// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI module for the model manager
//!
//! Handles command-line argument parsing and command dispatch.

pub mod args;

pub use args::*;
