/*
 * main.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! storymark CLI - Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod input;

use input::InputArgs;

#[derive(Parser)]
#[command(name = "storymark")]
#[command(version)]
#[command(about = "Parse and check citation and entity markup in story content", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse content and print segments, citation numbers and warnings as JSON
    Parse {
        #[command(flatten)]
        input: InputArgs,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Report malformed markup and unresolved references
    Check {
        #[command(flatten)]
        input: InputArgs,

        /// Treat every warning as an error (non-zero exit status)
        #[arg(long)]
        strict: bool,

        /// Print diagnostics as JSON
        #[arg(long)]
        json: bool,

        /// Do not report references missing from the story metadata
        #[arg(long)]
        ignore_unresolved: bool,
    },

    /// List cited pages and mentioned entities
    Refs {
        #[command(flatten)]
        input: InputArgs,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the content as plain text with numbered citations
    Plain {
        #[command(flatten)]
        input: InputArgs,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Parse { input, pretty } => commands::parse::execute(&input, pretty),
        Commands::Check {
            input,
            strict,
            json,
            ignore_unresolved,
        } => commands::check::execute(
            &input,
            commands::check::CheckArgs {
                strict,
                json,
                ignore_unresolved,
            },
        ),
        Commands::Refs { input, json } => commands::refs::execute(&input, json),
        Commands::Plain { input } => commands::plain::execute(&input),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
