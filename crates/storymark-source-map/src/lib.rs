/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Source locations for story markup.
//!
//! This crate tracks where things live in a story's content string so that
//! parse warnings can point back at the offending token. It is deliberately
//! small:
//!
//! - [`Location`] and [`Range`]: byte offsets with row/column information
//! - [`LineIndex`]: O(log n) offset → row/column lookups
//! - [`SourceContext`]: a registry of named sources (a story id, a file path,
//!   `<stdin>`) with their content, used when rendering source snippets
//! - [`SourceInfo`]: a range tied to a source in a [`SourceContext`]
//!
//! # Example
//!
//! ```rust
//! use storymark_source_map::*;
//!
//! let mut ctx = SourceContext::new();
//! let file_id = ctx.add_source("story-42", "Hello\n[[World]]");
//!
//! let info = ctx.source_info(file_id, 6, 15).unwrap();
//! assert_eq!(info.range.start.row, 1);
//! assert_eq!(info.range.start.column, 0);
//! ```

pub mod context;
pub mod line_index;
pub mod source_info;
pub mod types;

pub use context::{SourceContext, SourceFile};
pub use line_index::LineIndex;
pub use source_info::SourceInfo;
pub use types::{FileId, Location, Range};
