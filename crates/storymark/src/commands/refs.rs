/*
 * refs.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! `storymark refs`: cited pages and mentioned entities.

use anyhow::{Context, Result};
use std::fmt::Write;
use std::process::ExitCode;
use storymark_markup::{ContentMetadata, ParseOptions, ReferenceSummary};

use crate::input::{InputArgs, load};

pub fn execute(input: &InputArgs, json: bool) -> Result<ExitCode> {
    let loaded = load(input)?;
    let parsed = loaded
        .document
        .parse(ParseOptions::new().with_report_unresolved(false));
    let summary = ReferenceSummary::from_parsed(&parsed);

    if json {
        let text = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{}", text);
    } else {
        print!("{}", render_summary(&summary, &loaded.document.metadata));
    }
    Ok(ExitCode::SUCCESS)
}

fn render_summary(summary: &ReferenceSummary, metadata: &ContentMetadata) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Citations ({}):", summary.citations.len());
    for cited in &summary.citations {
        let _ = write!(out, "  [{}] {}", cited.number, cited.page_id);
        if let Some(domain) = metadata.citation(&cited.page_id).and_then(|s| s.domain.as_deref()) {
            let _ = write!(out, " ({})", domain);
        }
        let _ = writeln!(out, " x{}", cited.occurrences);
    }

    let _ = writeln!(out, "Entities ({}):", summary.entities.len());
    for entity in &summary.entities {
        match &entity.canonical_id {
            Some(id) => {
                let _ = write!(out, "  {} <{}>", entity.name, id);
            }
            None => {
                let _ = write!(out, "  {}", entity.name);
            }
        }
        let _ = writeln!(out, " x{}", entity.mentions);
    }

    if !summary.domain_like_entities.is_empty() {
        let _ = writeln!(out, "Domain-like entities without a canonical id:");
        for domain in &summary.domain_like_entities {
            let _ = writeln!(out, "  {}", domain);
        }
    }

    out
}
