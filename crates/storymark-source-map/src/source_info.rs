/*
 * source_info.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! A range tied to a registered source

use crate::types::{FileId, Range};
use serde::{Deserialize, Serialize};

/// Where a piece of content came from: a source in a
/// [`crate::SourceContext`] plus the range inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub file_id: FileId,
    pub range: Range,
}

impl SourceInfo {
    pub fn new(file_id: FileId, range: Range) -> Self {
        SourceInfo { file_id, range }
    }

    /// Create source info carrying only byte offsets.
    pub fn from_offsets(file_id: FileId, start: usize, end: usize) -> Self {
        SourceInfo {
            file_id,
            range: Range::from_offsets(start, end),
        }
    }

    pub fn start_offset(&self) -> usize {
        self.range.start.offset
    }

    pub fn end_offset(&self) -> usize {
        self.range.end.offset
    }
}
