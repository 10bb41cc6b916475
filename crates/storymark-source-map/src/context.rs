/*
 * context.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Registry of named sources

use crate::line_index::LineIndex;
use crate::source_info::SourceInfo;
use crate::types::FileId;
use serde::{Deserialize, Serialize};

/// Registry of the sources diagnostics may point into.
///
/// Story content usually does not live in a file on disk (it arrives in an
/// API payload), so every source keeps its content in memory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceContext {
    files: Vec<SourceFile>,
}

/// A named piece of content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path, story id or pseudo-name such as `<stdin>`
    pub name: String,
    pub content: String,
    #[serde(skip)]
    line_index: Option<LineIndex>,
}

impl SourceFile {
    /// Line index for this source, built on registration.
    ///
    /// Deserialized sources rebuild it on demand.
    pub fn line_index(&self) -> LineIndex {
        self.line_index
            .clone()
            .unwrap_or_else(|| LineIndex::new(&self.content))
    }
}

impl SourceContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source and return its id.
    pub fn add_source(&mut self, name: impl Into<String>, content: impl Into<String>) -> FileId {
        let id = FileId(self.files.len());
        let content = content.into();
        let line_index = Some(LineIndex::new(&content));
        self.files.push(SourceFile {
            name: name.into(),
            content,
            line_index,
        });
        id
    }

    pub fn get_file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.0)
    }

    /// Build a [`SourceInfo`] with full row/column information.
    ///
    /// Returns `None` for an unknown id or offsets outside the source.
    pub fn source_info(&self, id: FileId, start: usize, end: usize) -> Option<SourceInfo> {
        let file = self.get_file(id)?;
        let range = match &file.line_index {
            Some(index) => index.range(start, end)?,
            None => LineIndex::new(&file.content).range(start, end)?,
        };
        Some(SourceInfo::new(id, range))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut ctx = SourceContext::new();
        let a = ctx.add_source("a", "first");
        let b = ctx.add_source("b", "second\nline");

        assert_eq!(a, FileId(0));
        assert_eq!(b, FileId(1));
        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.get_file(b).unwrap().name, "b");
        assert!(ctx.get_file(FileId(7)).is_none());
    }

    #[test]
    fn test_source_info_rows() {
        let mut ctx = SourceContext::new();
        let id = ctx.add_source("story", "abc\n{{cite:x}}");
        let info = ctx.source_info(id, 4, 14).unwrap();
        assert_eq!(info.range.start.row, 1);
        assert_eq!(info.range.end.column, 10);
        assert!(ctx.source_info(id, 4, 100).is_none());
    }

    #[test]
    fn test_deserialized_context_rebuilds_index() {
        let mut ctx = SourceContext::new();
        let id = ctx.add_source("story", "one\ntwo");
        let json = serde_json::to_string(&ctx).unwrap();
        let back: SourceContext = serde_json::from_str(&json).unwrap();

        let info = back.source_info(id, 4, 7).unwrap();
        assert_eq!(info.range.start.row, 1);
        assert_eq!(back.get_file(id).unwrap().line_index().line_count(), 2);
    }
}
