// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for the model
//! manager.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// model-manager - manage models for the LLM repository
#[derive(Parser, Debug)]
#[command(name = "model-manager")]
#[command(version, about = "Manage models for the LLM repository")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search for models on the HuggingFace Hub
    Search(SearchArgs),

    /// Show available models
    List,

    /// Download specified model
    Download(DownloadArgs),

    /// Convert model format
    Convert(ConvertArgs),

    /// Quantize model
    Quantize(QuantizeArgs),

    /// Check model integrity
    Validate(ValidateArgs),

    /// Remove unused models
    Cleanup,
}

/// Arguments for the search subcommand
#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// The search query string
    pub query: String,
}

/// Arguments for the download subcommand
#[derive(clap::Args, Debug)]
pub struct DownloadArgs {
    /// The ID of the model to download
    pub model_id: String,
}

/// Arguments for the convert subcommand
#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// Input model path
    pub input: PathBuf,

    /// Output model path
    pub output: PathBuf,

    /// The target format for conversion
    #[arg(long)]
    pub format: String,
}

/// Arguments for the quantize subcommand
#[derive(clap::Args, Debug)]
pub struct QuantizeArgs {
    /// The model to quantize
    pub model: String,

    /// Bits for quantization (4 or 8)
    #[arg(long, value_enum)]
    pub bits: QuantBits,
}

/// Bit widths accepted by the quantization pipeline
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuantBits {
    /// 4-bit quantization
    #[value(name = "4")]
    Four,

    /// 8-bit quantization
    #[value(name = "8")]
    Eight,
}

impl QuantBits {
    /// Numeric bit width
    pub fn as_u8(self) -> u8 {
        match self {
            QuantBits::Four => 4,
            QuantBits::Eight => 8,
        }
    }
}

/// Arguments for the validate subcommand
#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// The model to validate
    pub model: String,
}
