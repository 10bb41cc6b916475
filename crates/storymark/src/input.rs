/*
 * input.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Loading command input from a file or stdin.

use anyhow::{Context, Result};
use clap::Args;
use std::path::Path;
use storymark_markup::StoryDocument;
use tracing::debug;

const STDIN_NAME: &str = "<stdin>";

/// Input selection shared by every subcommand.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Content file, or '-' for stdin
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Read the input as a story JSON document (implied for .json files)
    #[arg(long)]
    pub story: bool,
}

impl InputArgs {
    fn is_stdin(&self) -> bool {
        self.input == "-"
    }

    fn is_story(&self) -> bool {
        self.story
            || (!self.is_stdin()
                && Path::new(&self.input)
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json")))
    }
}

/// A loaded story plus the name it is reported under.
pub struct LoadedInput {
    pub name: String,
    pub document: StoryDocument,
}

pub fn load(args: &InputArgs) -> Result<LoadedInput> {
    let text = if args.is_stdin() {
        std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")?
    } else {
        std::fs::read_to_string(&args.input)
            .with_context(|| format!("Failed to read input file: {}", args.input))?
    };

    let source_name = if args.is_stdin() {
        STDIN_NAME
    } else {
        args.input.as_str()
    };

    let document = if args.is_story() {
        StoryDocument::from_json_str(&text)
            .with_context(|| format!("Failed to load story document: {}", source_name))?
    } else {
        StoryDocument::from_content(text)
    };

    let name = document.display_name(source_name).to_string();
    debug!(
        name = %name,
        story = args.is_story(),
        bytes = document.content.len(),
        "Loaded input"
    );

    Ok(LoadedInput { name, document })
}
