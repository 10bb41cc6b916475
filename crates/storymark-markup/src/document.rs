/*
 * document.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Story payloads as delivered by the story API.
//!
//! The API answers `GET /api/stories/<id>` with
//! `{"status": "success", "story": {...}}`; cached or exported stories are
//! often just the inner object. [`StoryDocument`] accepts both.

use crate::error::{MarkupError, MarkupResult, json_type_name};
use crate::lookup::ContentMetadata;
use crate::metadata::{EntityDescriptor, EntityGroups, SourceDescriptor};
use crate::options::ParseOptions;
use crate::parsed::ParsedContent;
use crate::scanner::parse_content_with;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// A story's content together with the metadata needed to check it.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryDocument {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: String,
    pub metadata: ContentMetadata,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStory {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Value,
    #[serde(default, alias = "citations_metadata")]
    citations_metadata: Option<HashMap<String, SourceDescriptor>>,
    #[serde(default, alias = "entities_metadata")]
    entities_metadata: Option<HashMap<String, EntityDescriptor>>,
    #[serde(default)]
    entities: Option<EntityGroups>,
}

impl StoryDocument {
    /// Create a document from bare content, with no metadata.
    pub fn from_content(content: impl Into<String>) -> Self {
        StoryDocument {
            id: None,
            title: None,
            content: content.into(),
            metadata: ContentMetadata::default(),
        }
    }

    /// Parse a story document from JSON text.
    pub fn from_json_str(json: &str) -> MarkupResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build a story document from a JSON value.
    ///
    /// A missing or `null` content is an empty story. Content of any other
    /// non-string type is rejected with [`MarkupError::InvalidContentType`].
    pub fn from_value(value: Value) -> MarkupResult<Self> {
        let story = match value {
            Value::Object(mut envelope) if envelope.get("story").is_some_and(Value::is_object) => {
                envelope.remove("story").unwrap_or(Value::Null)
            }
            other => other,
        };

        if !story.is_object() {
            return Err(MarkupError::InvalidDocument {
                message: format!("expected a story object, found {}", json_type_name(&story)),
            });
        }

        let raw: RawStory = serde_json::from_value(story)?;
        let content = match raw.content {
            Value::String(content) => content,
            Value::Null => String::new(),
            other => {
                return Err(MarkupError::InvalidContentType {
                    found: json_type_name(&other),
                });
            }
        };

        let mut metadata = ContentMetadata {
            citations: raw.citations_metadata,
            entities: raw.entities_metadata,
        };
        if let Some(groups) = &raw.entities {
            metadata.merge_entity_groups(groups);
        }

        Ok(StoryDocument {
            id: raw.id,
            title: raw.title,
            content,
            metadata,
        })
    }

    /// Parse the content, checking references against this story's metadata.
    pub fn parse(&self, options: ParseOptions) -> ParsedContent {
        parse_content_with(&self.content, &self.metadata, options)
    }

    /// Name to show in diagnostics: the story id, or `fallback`.
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.id.as_deref().unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_and_bare_story_agree() {
        let story = json!({
            "id": "s1",
            "title": "Flood",
            "content": "Water rose {{cite:p1}}.",
            "citationsMetadata": {"p1": {"url": "https://example.org", "domain": "example.org"}}
        });
        let bare = StoryDocument::from_value(story.clone()).unwrap();
        let wrapped =
            StoryDocument::from_value(json!({"status": "success", "story": story})).unwrap();

        assert_eq!(bare, wrapped);
        assert_eq!(bare.id.as_deref(), Some("s1"));
        assert_eq!(
            bare.metadata.citation("p1").unwrap().domain.as_deref(),
            Some("example.org")
        );
    }

    #[test]
    fn test_snake_case_metadata_keys() {
        let doc = StoryDocument::from_value(json!({
            "content": "",
            "entities_metadata": {"Q1": {"name": "Jane"}}
        }))
        .unwrap();
        assert!(doc.metadata.entity("Q1").is_some());
        assert!(doc.metadata.citations.is_none());
    }

    #[test]
    fn test_entity_groups_fold_into_lookup() {
        let doc = StoryDocument::from_value(json!({
            "content": "[[Jane Doe|Q1]] met [[Bob|Q2]]",
            "entities": {
                "people": [{"canonical_id": "Q1", "name": "Jane Doe", "entity_type": "person"}]
            }
        }))
        .unwrap();

        let parsed = doc.parse(ParseOptions::default());
        assert_eq!(parsed.warnings().len(), 1);
        assert_eq!(parsed.warnings()[0].code, "SM-2-2");
    }

    #[test]
    fn test_missing_and_null_content() {
        assert_eq!(StoryDocument::from_value(json!({})).unwrap().content, "");
        assert_eq!(
            StoryDocument::from_value(json!({"content": null}))
                .unwrap()
                .content,
            ""
        );
    }

    #[test]
    fn test_non_string_content_is_an_error() {
        let err = StoryDocument::from_value(json!({"content": 42})).unwrap_err();
        assert!(matches!(err, MarkupError::InvalidContentType { found: "number" }));

        let err = StoryDocument::from_value(json!({"story": {"content": ["a"]}})).unwrap_err();
        assert!(matches!(err, MarkupError::InvalidContentType { found: "array" }));
    }

    #[test]
    fn test_non_object_document() {
        let err = StoryDocument::from_value(json!("just text")).unwrap_err();
        assert!(matches!(err, MarkupError::InvalidDocument { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let err = StoryDocument::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, MarkupError::Json(_)));
    }

    #[test]
    fn test_display_name() {
        let doc = StoryDocument::from_content("x");
        assert_eq!(doc.display_name("<stdin>"), "<stdin>");
    }
}
