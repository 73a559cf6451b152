// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! model-manager - model management for the LLM repository
//!
//! Entry point for the model-manager CLI.

use std::io;

use clap::{CommandFactory, Parser};

use model_manager::cli::{Cli, Commands};
use model_manager::commands;
use model_manager::config::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // Practical debug toggle: `-v` enables hub request diagnostics without
    // requiring users to know target names up front. `RUST_LOG` still takes
    // precedence.
    if cli.verbose > 0 {
        let directive = if cli.verbose == 1 {
            "model_manager=debug"
        } else {
            "model_manager=trace"
        };
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load settings
    let settings = match cli.config {
        Some(ref path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    let mut out = io::stdout();

    // Dispatch to appropriate command
    match cli.command {
        None => {
            // Invoked bare: usage on stderr, non-zero exit.
            eprint!("{}", Cli::command().render_help());
            std::process::exit(1);
        }
        Some(Commands::Search(args)) => {
            if let Err(e) = commands::search::execute(&args, &settings, &mut out).await {
                eprintln!("An error occurred while searching for models: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::List) => {
            commands::stubs::list(&mut out)?;
        }
        Some(Commands::Download(args)) => {
            commands::stubs::download(&args, &mut out)?;
        }
        Some(Commands::Convert(args)) => {
            commands::stubs::convert(&args, &mut out)?;
        }
        Some(Commands::Quantize(args)) => {
            commands::stubs::quantize(&args, &mut out)?;
        }
        Some(Commands::Validate(args)) => {
            commands::stubs::validate(&args, &mut out)?;
        }
        Some(Commands::Cleanup) => {
            commands::stubs::cleanup(&mut out)?;
        }
    }

    Ok(())
}
