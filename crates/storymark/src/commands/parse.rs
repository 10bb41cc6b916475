/*
 * parse.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! `storymark parse`: segments, citation numbers and warnings as JSON.

use anyhow::{Context, Result};
use serde_json::json;
use std::process::ExitCode;
use storymark_markup::ParseOptions;

use crate::input::{InputArgs, load};

pub fn execute(input: &InputArgs, pretty: bool) -> Result<ExitCode> {
    let loaded = load(input)?;
    let parsed = loaded.document.parse(ParseOptions::default());

    let output = json!({
        "segments": parsed.segments(),
        "citationNumbers": parsed.citation_numbers(),
        "warnings": parsed.warnings(),
    });

    let text = if pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .context("Failed to serialize parse result")?;

    println!("{}", text);
    Ok(ExitCode::SUCCESS)
}
