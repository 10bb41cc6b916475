/*
 * types.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Core location types

use serde::{Deserialize, Serialize};

/// A unique identifier for a source registered in a [`crate::SourceContext`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileId(pub usize);

/// A location in source text (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    /// Byte offset from start of source
    pub offset: usize,
    /// Row number (0-indexed)
    pub row: usize,
    /// Column number (0-indexed, in bytes from the start of the row)
    pub column: usize,
}

/// A range in source text from start to end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    /// Start location (inclusive)
    pub start: Location,
    /// End location (exclusive)
    pub end: Location,
}

impl Range {
    /// Create a range that only carries byte offsets (row and column are 0).
    ///
    /// Use [`crate::LineIndex::range`] when row/column information matters.
    pub fn from_offsets(start: usize, end: usize) -> Self {
        Range {
            start: Location {
                offset: start,
                row: 0,
                column: 0,
            },
            end: Location {
                offset: end,
                row: 0,
                column: 0,
            },
        }
    }

    /// The byte range covered, suitable for slicing the source string.
    pub fn byte_range(&self) -> std::ops::Range<usize> {
        self.start.offset..self.end.offset
    }

    /// Length of the range in bytes.
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_id_equality() {
        assert_eq!(FileId(0), FileId(0));
        assert_ne!(FileId(0), FileId(1));
    }

    #[test]
    fn test_location_ordering() {
        let loc1 = Location {
            offset: 0,
            row: 0,
            column: 0,
        };
        let loc2 = Location {
            offset: 5,
            row: 0,
            column: 5,
        };
        let loc3 = Location {
            offset: 10,
            row: 1,
            column: 0,
        };

        assert!(loc1 < loc2);
        assert!(loc2 < loc3);
    }

    #[test]
    fn test_range_from_offsets() {
        let range = Range::from_offsets(10, 20);
        assert_eq!(range.start.offset, 10);
        assert_eq!(range.end.offset, 20);
        assert_eq!(range.start.row, 0);
        assert_eq!(range.byte_range(), 10..20);
        assert_eq!(range.len(), 10);
        assert!(!range.is_empty());
        assert!(Range::from_offsets(3, 3).is_empty());
    }

    #[test]
    fn test_range_serialization() {
        let range = Range::from_offsets(1, 4);
        let json = serde_json::to_value(&range).unwrap();
        assert_eq!(json["start"]["offset"], 1);
        assert_eq!(json["end"]["offset"], 4);

        let back: Range = serde_json::from_value(json).unwrap();
        assert_eq!(back, range);
    }
}
