/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Structured diagnostics for story markup.
//!
//! Parsing story content never fails on bad data; problems are reported as
//! diagnostics instead. This crate provides the shape those diagnostics take:
//!
//! - [`DiagnosticMessage`]: code, title, kind, problem statement, details, hints
//!   and an optional [`SourceInfo`](storymark_source_map::SourceInfo) location
//! - [`DiagnosticMessageBuilder`]: the preferred way to construct messages
//! - [`catalog`]: the embedded error-code catalog (`SM-<subsystem>-<number>`)
//!
//! Messages render either as text (with an `ariadne` source snippet when a
//! [`SourceContext`](storymark_source_map::SourceContext) is available) or
//! as JSON.
//!
//! # Example
//!
//! ```
//! use storymark_diagnostics::DiagnosticMessageBuilder;
//!
//! let warning = DiagnosticMessageBuilder::warning("Unresolved Citation")
//!     .with_code("SM-2-1")
//!     .problem("Page `p7` is cited but has no source metadata")
//!     .add_hint("Was the page removed from the story's artifacts?")
//!     .build();
//!
//! assert!(warning.to_text(None).contains("Warning [SM-2-1]: Unresolved Citation"));
//! ```

pub mod builder;
pub mod catalog;
pub mod diagnostic;

pub use builder::DiagnosticMessageBuilder;
pub use catalog::{ERROR_CATALOG, ErrorCodeInfo, get_error_info, get_subsystem};
pub use diagnostic::{DetailItem, DetailKind, DiagnosticKind, DiagnosticMessage, MessageContent};
