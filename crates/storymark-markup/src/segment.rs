/*
 * segment.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The parser's output unit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One classified piece of story content.
///
/// Serializes as an internally tagged object, e.g.
/// `{"type":"citation","pageIds":["a","b"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum Segment {
    /// Literal prose, rendered verbatim.
    Text { content: String },

    /// One or more source pages cited together at a single point.
    ///
    /// Identifiers keep their order and any duplicates.
    Citation { page_ids: Vec<String> },

    /// A mention of a real-world entity.
    ///
    /// `canonical_id` is absent for legacy `[[Name]]` markup.
    Entity {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        canonical_id: Option<String>,
    },
}

impl Segment {
    pub fn text(content: impl Into<String>) -> Self {
        Segment::Text {
            content: content.into(),
        }
    }

    pub fn citation<I, S>(page_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Segment::Citation {
            page_ids: page_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn entity(name: impl Into<String>, canonical_id: Option<&str>) -> Self {
        Segment::Entity {
            name: name.into(),
            canonical_id: canonical_id.map(str::to_string),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Segment::Text { .. })
    }

    /// Page identifiers if this is a citation group.
    pub fn page_ids(&self) -> Option<&[String]> {
        match self {
            Segment::Citation { page_ids } => Some(page_ids),
            _ => None,
        }
    }

    /// Re-serialize this segment to canonical markup.
    ///
    /// Text comes back verbatim. Tokens come back in canonical form
    /// (no padding around identifiers), so the result equals the source
    /// token whenever that token was written canonically.
    pub fn to_markup(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Text { content } => f.write_str(content),
            Segment::Citation { page_ids } => write!(f, "{{{{cite:{}}}}}", page_ids.join(",")),
            Segment::Entity {
                name,
                canonical_id: Some(id),
            } => write!(f, "[[{}|{}]]", name, id),
            Segment::Entity {
                name,
                canonical_id: None,
            } => write!(f, "[[{}]]", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_markup() {
        assert_eq!(Segment::text("plain {text}").to_markup(), "plain {text}");
        assert_eq!(Segment::citation(["a", "b"]).to_markup(), "{{cite:a,b}}");
        assert_eq!(
            Segment::entity("Jane Doe", Some("Q1")).to_markup(),
            "[[Jane Doe|Q1]]"
        );
        assert_eq!(
            Segment::entity("Springfield", None).to_markup(),
            "[[Springfield]]"
        );
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_value(Segment::citation(["p1", "p2"])).unwrap();
        assert_eq!(json, serde_json::json!({"type": "citation", "pageIds": ["p1", "p2"]}));

        let json = serde_json::to_value(Segment::entity("Alice", Some("Q42"))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "entity", "name": "Alice", "canonicalId": "Q42"})
        );

        let json = serde_json::to_value(Segment::entity("Alice", None)).unwrap();
        assert_eq!(json, serde_json::json!({"type": "entity", "name": "Alice"}));

        let json = serde_json::to_value(Segment::text("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"type": "text", "content": "hi"}));
    }

    #[test]
    fn test_deserialize_legacy_entity() {
        let segment: Segment =
            serde_json::from_value(serde_json::json!({"type": "entity", "name": "Bob"})).unwrap();
        assert_eq!(segment, Segment::entity("Bob", None));
    }

    #[test]
    fn test_page_ids() {
        assert_eq!(
            Segment::citation(["x"]).page_ids(),
            Some(&["x".to_string()][..])
        );
        assert_eq!(Segment::text("x").page_ids(), None);
        assert!(Segment::text("x").is_text());
    }
}
