/*
 * metadata.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Descriptors for cited pages and mentioned entities, as delivered by the
//! story API alongside the content.

use serde::{Deserialize, Serialize};

/// A cited source page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(
        default,
        alias = "pub_time",
        alias = "publishedAt",
        skip_serializing_if = "Option::is_none"
    )]
    pub published_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

/// A real-world entity (person, organization, location).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityDescriptor {
    #[serde(default, alias = "canonicalId", skip_serializing_if = "Option::is_none")]
    pub canonical_id: Option<String>,
    #[serde(default, alias = "canonical_name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, alias = "entityType", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    /// Wikidata QID, e.g. `Q42`
    #[serde(default, alias = "wikidata_qid", skip_serializing_if = "Option::is_none")]
    pub qid: Option<String>,
    #[serde(default, alias = "wikidataThumbnail", skip_serializing_if = "Option::is_none")]
    pub wikidata_thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Entities of a story grouped by type, the shape the story endpoint
/// returns under `entities`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityGroups {
    #[serde(default)]
    pub people: Vec<EntityDescriptor>,
    #[serde(default)]
    pub organizations: Vec<EntityDescriptor>,
    #[serde(default)]
    pub locations: Vec<EntityDescriptor>,
}

impl EntityGroups {
    /// All entities, people first, then organizations, then locations.
    pub fn iter(&self) -> impl Iterator<Item = &EntityDescriptor> {
        self.people
            .iter()
            .chain(&self.organizations)
            .chain(&self.locations)
    }
}
