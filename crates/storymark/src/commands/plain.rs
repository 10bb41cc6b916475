/*
 * plain.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! `storymark plain`: plain-text projection for previews and indexing.

use anyhow::Result;
use std::process::ExitCode;
use storymark_markup::ParseOptions;

use crate::input::{InputArgs, load};

pub fn execute(input: &InputArgs) -> Result<ExitCode> {
    let loaded = load(input)?;
    let parsed = loaded
        .document
        .parse(ParseOptions::new().with_report_unresolved(false));
    let numbers = parsed.citation_numbers();

    let text = parsed.plain_text(&numbers);
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
    Ok(ExitCode::SUCCESS)
}
