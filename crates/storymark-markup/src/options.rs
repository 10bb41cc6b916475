/*
 * options.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Options controlling which warnings the parser reports and how.
///
/// Segments are identical under every combination of options; only the
/// warnings and their severity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ParseOptions {
    /// Report warnings as error diagnostics.
    pub strict: bool,

    /// Report identifiers missing from the supplied metadata.
    pub report_unresolved: bool,

    /// Report unterminated and empty markup tokens.
    pub report_malformed: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strict: false,
            report_unresolved: true,
            report_malformed: true,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_report_unresolved(mut self, report: bool) -> Self {
        self.report_unresolved = report;
        self
    }

    pub fn with_report_malformed(mut self, report: bool) -> Self {
        self.report_malformed = report;
        self
    }
}
