/*
 * lookup.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Reference resolution.
//!
//! The scanner never needs metadata to produce segments. When the caller has
//! metadata at hand it passes a [`ReferenceLookup`] so that citations and
//! entities without a matching record are reported as warnings.

use crate::metadata::{EntityDescriptor, EntityGroups, SourceDescriptor};
use std::collections::HashMap;

/// Answers whether a cited page or an entity has metadata.
pub trait ReferenceLookup {
    /// Whether the page identifier resolves to a source.
    fn has_citation(&self, page_id: &str) -> bool;

    /// Whether the canonical identifier resolves to an entity.
    fn has_entity(&self, canonical_id: &str) -> bool;
}

/// Lookup that resolves everything (no metadata supplied).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLookup;

impl ReferenceLookup for NullLookup {
    fn has_citation(&self, _page_id: &str) -> bool {
        true
    }

    fn has_entity(&self, _canonical_id: &str) -> bool {
        true
    }
}

/// Citation and entity metadata for one story.
///
/// Either map may be absent; an absent map resolves every identifier, so
/// only the metadata the caller actually supplied produces warnings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentMetadata {
    pub citations: Option<HashMap<String, SourceDescriptor>>,
    pub entities: Option<HashMap<String, EntityDescriptor>>,
}

impl ContentMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_citations(mut self, citations: HashMap<String, SourceDescriptor>) -> Self {
        self.citations = Some(citations);
        self
    }

    pub fn with_entities(mut self, entities: HashMap<String, EntityDescriptor>) -> Self {
        self.entities = Some(entities);
        self
    }

    /// Add one cited source, creating the citation map if needed.
    pub fn add_citation(
        &mut self,
        page_id: impl Into<String>,
        source: SourceDescriptor,
    ) -> &mut Self {
        self.citations
            .get_or_insert_with(HashMap::new)
            .insert(page_id.into(), source);
        self
    }

    /// Add one entity keyed by canonical id, creating the entity map if needed.
    pub fn add_entity(
        &mut self,
        canonical_id: impl Into<String>,
        entity: EntityDescriptor,
    ) -> &mut Self {
        self.entities
            .get_or_insert_with(HashMap::new)
            .insert(canonical_id.into(), entity);
        self
    }

    /// Fold grouped entities into the entity map by canonical id.
    ///
    /// Entries without a canonical id are skipped; existing entries win.
    pub fn merge_entity_groups(&mut self, groups: &EntityGroups) -> &mut Self {
        let entities = self.entities.get_or_insert_with(HashMap::new);
        for entity in groups.iter() {
            if let Some(id) = &entity.canonical_id {
                entities
                    .entry(id.clone())
                    .or_insert_with(|| entity.clone());
            }
        }
        self
    }

    pub fn citation(&self, page_id: &str) -> Option<&SourceDescriptor> {
        self.citations.as_ref()?.get(page_id)
    }

    pub fn entity(&self, canonical_id: &str) -> Option<&EntityDescriptor> {
        self.entities.as_ref()?.get(canonical_id)
    }
}

impl ReferenceLookup for ContentMetadata {
    fn has_citation(&self, page_id: &str) -> bool {
        self.citations
            .as_ref()
            .is_none_or(|citations| citations.contains_key(page_id))
    }

    fn has_entity(&self, canonical_id: &str) -> bool {
        self.entities
            .as_ref()
            .is_none_or(|entities| entities.contains_key(canonical_id))
    }
}

impl<L: ReferenceLookup + ?Sized> ReferenceLookup for &L {
    fn has_citation(&self, page_id: &str) -> bool {
        (**self).has_citation(page_id)
    }

    fn has_entity(&self, canonical_id: &str) -> bool {
        (**self).has_entity(canonical_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_lookup_resolves_everything() {
        assert!(NullLookup.has_citation("anything"));
        assert!(NullLookup.has_entity("anything"));
    }

    #[test]
    fn test_absent_maps_resolve_everything() {
        let metadata = ContentMetadata::new();
        assert!(metadata.has_citation("p1"));
        assert!(metadata.has_entity("Q1"));
    }

    #[test]
    fn test_supplied_maps_are_checked() {
        let mut metadata = ContentMetadata::new();
        metadata.add_citation("p1", SourceDescriptor::default());

        assert!(metadata.has_citation("p1"));
        assert!(!metadata.has_citation("p2"));
        // No entity map supplied
        assert!(metadata.has_entity("Q1"));
        assert!(metadata.citation("p1").is_some());
        assert!(metadata.entity("Q1").is_none());
    }

    #[test]
    fn test_merge_entity_groups() {
        let groups = EntityGroups {
            people: vec![EntityDescriptor {
                canonical_id: Some("Q1".into()),
                name: Some("Jane Doe".into()),
                ..Default::default()
            }],
            organizations: vec![EntityDescriptor {
                name: Some("No Id Corp".into()),
                ..Default::default()
            }],
            locations: Vec::new(),
        };

        let mut metadata = ContentMetadata::new();
        metadata.add_entity(
            "Q1",
            EntityDescriptor {
                name: Some("Existing".into()),
                ..Default::default()
            },
        );
        metadata.merge_entity_groups(&groups);

        assert_eq!(metadata.entities.as_ref().unwrap().len(), 1);
        assert_eq!(metadata.entity("Q1").unwrap().name.as_deref(), Some("Existing"));
    }
}
