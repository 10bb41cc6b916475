/*
 * line_index.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Line-break index for offset → row/column lookups

use crate::types::{Location, Range};
use serde::{Deserialize, Serialize};

/// Index of line breaks in a piece of content.
///
/// Built with one scan of the content; lookups binary-search the break
/// positions, so converting many offsets stays cheap on long stories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineIndex {
    /// Byte offsets of each `\n` in the content
    line_breaks: Vec<usize>,

    /// Total length of the content in bytes
    total_length: usize,
}

impl LineIndex {
    /// Build the index for `content`.
    ///
    /// # Example
    ///
    /// ```
    /// use storymark_source_map::LineIndex;
    ///
    /// let index = LineIndex::new("hello\nworld");
    /// let loc = index.location(6).unwrap();
    /// assert_eq!(loc.row, 1);
    /// assert_eq!(loc.column, 0);
    /// ```
    pub fn new(content: &str) -> Self {
        let line_breaks = content
            .bytes()
            .enumerate()
            .filter_map(|(idx, b)| (b == b'\n').then_some(idx))
            .collect();

        LineIndex {
            line_breaks,
            total_length: content.len(),
        }
    }

    /// Convert a byte offset to a [`Location`].
    ///
    /// Returns `None` if the offset is past the end of the content. An offset
    /// sitting on a `\n` belongs to the row that newline terminates.
    pub fn location(&self, offset: usize) -> Option<Location> {
        if offset > self.total_length {
            return None;
        }

        let row = match self.line_breaks.binary_search(&offset) {
            Ok(idx) | Err(idx) => idx,
        };

        let line_start = if row == 0 {
            0
        } else {
            self.line_breaks[row - 1] + 1
        };

        Some(Location {
            offset,
            row,
            column: offset - line_start,
        })
    }

    /// Convert a pair of byte offsets to a [`Range`].
    pub fn range(&self, start: usize, end: usize) -> Option<Range> {
        if start > end {
            return None;
        }
        Some(Range {
            start: self.location(start)?,
            end: self.location(end)?,
        })
    }

    /// Convert a (row, column) pair back to a byte offset.
    pub fn offset(&self, row: usize, column: usize) -> Option<usize> {
        let line_start = if row == 0 {
            0
        } else {
            self.line_breaks.get(row - 1)? + 1
        };
        let line_end = self
            .line_breaks
            .get(row)
            .copied()
            .unwrap_or(self.total_length);

        let offset = line_start + column;
        (offset <= line_end).then_some(offset)
    }

    /// Total length of the indexed content in bytes
    pub fn total_length(&self) -> usize {
        self.total_length
    }

    /// Number of rows in the content (always at least one)
    pub fn line_count(&self) -> usize {
        self.line_breaks.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content() {
        let index = LineIndex::new("");
        assert_eq!(index.total_length(), 0);
        assert_eq!(index.line_count(), 1);

        let loc = index.location(0).unwrap();
        assert_eq!(loc.row, 0);
        assert_eq!(loc.column, 0);
    }

    #[test]
    fn test_location_simple() {
        let index = LineIndex::new("hello\nworld");

        let loc = index.location(3).unwrap();
        assert_eq!((loc.row, loc.column), (0, 3));

        // The newline itself still belongs to the first row
        let loc = index.location(5).unwrap();
        assert_eq!((loc.row, loc.column), (0, 5));

        let loc = index.location(9).unwrap();
        assert_eq!((loc.row, loc.column), (1, 3));

        let loc = index.location(11).unwrap();
        assert_eq!((loc.row, loc.column), (1, 5));
    }

    #[test]
    fn test_location_out_of_bounds() {
        let index = LineIndex::new("hello");
        assert!(index.location(100).is_none());
    }

    #[test]
    fn test_range() {
        let index = LineIndex::new("line1\nline2\nline3");
        let range = index.range(6, 14).unwrap();
        assert_eq!(range.start.row, 1);
        assert_eq!(range.end.row, 2);
        assert_eq!(range.end.column, 2);

        assert!(index.range(5, 2).is_none());
        assert!(index.range(0, 99).is_none());
    }

    #[test]
    fn test_offset_roundtrip() {
        let source = "hello\nworld\ntest";
        let index = LineIndex::new(source);

        for offset in [0, 3, 5, 6, 10, 12, 16] {
            let loc = index.location(offset).unwrap();
            assert_eq!(index.offset(loc.row, loc.column), Some(offset));
        }
    }

    #[test]
    fn test_offset_out_of_bounds() {
        let index = LineIndex::new("hello\nworld");
        assert!(index.offset(10, 0).is_none());
        assert!(index.offset(0, 100).is_none());
    }
}
