/*
 * check.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! `storymark check`: report markup problems as diagnostics.

use anyhow::{Context, Result};
use std::process::ExitCode;
use storymark_markup::ParseOptions;
use storymark_source_map::SourceContext;
use tracing::info;

use crate::input::{InputArgs, load};

/// Flags for the check command
#[derive(Debug, Clone, Copy)]
pub struct CheckArgs {
    pub strict: bool,
    pub json: bool,
    pub ignore_unresolved: bool,
}

pub fn execute(input: &InputArgs, args: CheckArgs) -> Result<ExitCode> {
    let loaded = load(input)?;
    let options = ParseOptions::new()
        .with_strict(args.strict)
        .with_report_unresolved(!args.ignore_unresolved);
    let parsed = loaded.document.parse(options);

    let mut ctx = SourceContext::new();
    let file_id = ctx.add_source(loaded.name.as_str(), loaded.document.content.as_str());
    let diagnostics = parsed.diagnostics(file_id);

    if args.json {
        let values: Vec<serde_json::Value> = diagnostics.iter().map(|d| d.to_json()).collect();
        let text =
            serde_json::to_string_pretty(&values).context("Failed to serialize diagnostics")?;
        println!("{}", text);
    } else {
        for diagnostic in &diagnostics {
            print!("{}", diagnostic.to_text(Some(&ctx)));
        }
        match diagnostics.len() {
            0 => println!("{}: no problems found", loaded.name),
            1 => println!("{}: 1 problem", loaded.name),
            n => println!("{}: {} problems", loaded.name, n),
        }
    }

    info!(
        name = %loaded.name,
        problems = diagnostics.len(),
        strict = args.strict,
        "Checked content"
    );

    if diagnostics.iter().any(|d| d.is_error()) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
