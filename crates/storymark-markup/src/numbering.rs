/*
 * numbering.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Footnote-style citation numbering.
//!
//! Every distinct cited page gets a number, in order of first appearance:
//! by segment order, then by position inside a multi-page citation group.
//! Numbers start at 1 and increase by one per new page, so the numbering
//! matches reading order.

use crate::segment::Segment;
use hashlink::LinkedHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Page identifier → reference number, in first-appearance order.
///
/// Built once per content string and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitationNumberMap {
    numbers: LinkedHashMap<String, u32>,
}

/// Assign reference numbers to every page cited in `segments`.
///
/// Total over any segment list; the empty list yields an empty map.
pub fn assign_citation_numbers(segments: &[Segment]) -> CitationNumberMap {
    CitationNumberMap::from_groups(segments.iter().filter_map(Segment::page_ids))
}

impl CitationNumberMap {
    /// Build the map directly from citation groups, in order.
    pub fn from_groups<G, S>(groups: impl IntoIterator<Item = G>) -> Self
    where
        G: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut numbers = LinkedHashMap::new();
        let mut next: u32 = 1;

        for group in groups {
            for page_id in group {
                let page_id = page_id.as_ref();
                if numbers.contains_key(page_id) {
                    continue;
                }
                numbers.insert(page_id.to_string(), next);
                next += 1;
            }
        }

        CitationNumberMap { numbers }
    }

    pub fn get(&self, page_id: &str) -> Option<u32> {
        self.numbers.get(page_id).copied()
    }

    pub fn contains(&self, page_id: &str) -> bool {
        self.numbers.contains_key(page_id)
    }

    /// Numbers to display for one citation group.
    ///
    /// Follows the group's order; a page repeated inside the group is shown
    /// once and unknown pages are skipped.
    pub fn numbers_for<S: AsRef<str>>(&self, page_ids: &[S]) -> Vec<u32> {
        let mut shown = Vec::with_capacity(page_ids.len());
        for page_id in page_ids {
            if let Some(number) = self.get(page_id.as_ref()) {
                if !shown.contains(&number) {
                    shown.push(number);
                }
            }
        }
        shown
    }

    /// Page identifiers with their numbers, in ascending number order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.numbers.iter().map(|(id, n)| (id.as_str(), *n))
    }

    /// Page identifiers in ascending number order.
    pub fn page_ids(&self) -> impl Iterator<Item = &str> {
        self.numbers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

impl Serialize for CitationNumberMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.numbers.len()))?;
        for (page_id, number) in &self.numbers {
            map.serialize_entry(page_id, number)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty() {
        let numbers = assign_citation_numbers(&[]);
        assert!(numbers.is_empty());
        assert_eq!(numbers.get("a"), None);
    }

    #[test]
    fn test_first_appearance_order() {
        let segments = vec![
            Segment::text("x"),
            Segment::citation(["b", "a"]),
            Segment::entity("E", None),
            Segment::citation(["a", "c"]),
            Segment::citation(["b"]),
        ];
        let numbers = assign_citation_numbers(&segments);

        let pairs: Vec<_> = numbers.iter().collect();
        assert_eq!(pairs, vec![("b", 1), ("a", 2), ("c", 3)]);
    }

    #[test]
    fn test_group_members_get_distinct_numbers() {
        let numbers = assign_citation_numbers(&[Segment::citation(["p", "q"])]);
        assert_eq!(numbers.get("p"), Some(1));
        assert_eq!(numbers.get("q"), Some(2));
    }

    #[test]
    fn test_duplicate_within_group_is_skipped() {
        let numbers = assign_citation_numbers(&[Segment::citation(["a", "a", "b"])]);
        assert_eq!(numbers.len(), 2);
        assert_eq!(numbers.get("b"), Some(2));
        assert_eq!(numbers.numbers_for(&["a", "a", "b"]), vec![1, 2]);
    }

    #[test]
    fn test_idempotent() {
        let segments = vec![Segment::citation(["z", "y"]), Segment::citation(["x", "z"])];
        assert_eq!(
            assign_citation_numbers(&segments),
            assign_citation_numbers(&segments)
        );
    }

    #[test]
    fn test_no_gaps() {
        let segments = vec![
            Segment::citation(["a", "b", "a"]),
            Segment::citation(["c", "b", "d"]),
        ];
        let numbers = assign_citation_numbers(&segments);
        let assigned: Vec<u32> = numbers.iter().map(|(_, n)| n).collect();
        assert_eq!(assigned, (1..=4).collect::<Vec<u32>>());
    }

    #[test]
    fn test_from_groups() {
        let groups = vec![vec!["k1".to_string()], vec!["k2".to_string(), "k1".to_string()]];
        let numbers = CitationNumberMap::from_groups(&groups);
        assert_eq!(numbers.page_ids().collect::<Vec<_>>(), vec!["k1", "k2"]);
        assert!(numbers.contains("k2"));
    }

    #[test]
    fn test_numbers_for_skips_unknown() {
        let numbers = assign_citation_numbers(&[Segment::citation(["a"])]);
        assert_eq!(numbers.numbers_for(&["missing", "a"]), vec![1]);
    }

    #[test]
    fn test_serializes_in_number_order() {
        let numbers = assign_citation_numbers(&[Segment::citation(["zeta", "alpha"])]);
        let json = serde_json::to_string(&numbers).unwrap();
        assert_eq!(json, r#"{"zeta":1,"alpha":2}"#);
    }
}
