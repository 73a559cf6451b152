// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Placeholder handlers for commands that are not implemented yet
//!
//! Each handler prints what the command will eventually do with the
//! arguments it was given, then a fixed "not yet implemented" notice.
//! All of them succeed; none performs any work.

use std::io::Write;

use crate::cli::{ConvertArgs, DownloadArgs, QuantizeArgs, ValidateArgs};
use crate::error::Result;

/// `model-manager list`
pub fn list(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Listing available models...")?;
    writeln!(out, "List functionality is not yet implemented.")?;
    Ok(())
}

/// `model-manager download <model_id>`
pub fn download(args: &DownloadArgs, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Downloading model: {}...", args.model_id)?;
    writeln!(out, "Download functionality is not yet implemented.")?;
    Ok(())
}

/// `model-manager convert <input> <output> --format <fmt>`
pub fn convert(args: &ConvertArgs, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "Converting model {} to {} with format {}...",
        args.input.display(),
        args.output.display(),
        args.format
    )?;
    writeln!(out, "Convert functionality is not yet implemented.")?;
    Ok(())
}

/// `model-manager quantize <model> --bits {4|8}`
pub fn quantize(args: &QuantizeArgs, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "Quantizing model {} to {} bits...",
        args.model,
        args.bits.as_u8()
    )?;
    writeln!(out, "Quantize functionality is not yet implemented.")?;
    Ok(())
}

/// `model-manager validate <model>`
pub fn validate(args: &ValidateArgs, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Validating model: {}...", args.model)?;
    writeln!(out, "Validate functionality is not yet implemented.")?;
    Ok(())
}

/// `model-manager cleanup`
pub fn cleanup(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Cleaning up unused models...")?;
    writeln!(out, "Cleanup functionality is not yet implemented.")?;
    Ok(())
}
