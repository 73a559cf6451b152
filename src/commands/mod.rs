// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand handlers
//!
//! One handler per CLI subcommand. Handlers share no state; each
//! receives its parsed arguments and a writer for user-facing output.
//! Only `search` does real work today - the remaining commands are
//! stubs in `stubs` awaiting their implementations.

pub mod search;
pub mod stubs;
