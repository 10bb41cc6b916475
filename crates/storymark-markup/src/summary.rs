/*
 * summary.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Per-story reference summaries.
//!
//! Editors use these to audit a story: which pages it cites and how often,
//! which entities it mentions, and which legacy mentions look like bare
//! domain names (usually a media outlet that still lacks an entity record).

use crate::numbering::CitationNumberMap;
use crate::parsed::ParsedContent;
use crate::segment::Segment;
use hashlink::LinkedHashMap;
use serde::Serialize;

/// A cited page with its reference number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CitedSource {
    pub page_id: String,
    pub number: u32,
    /// Number of citation groups that cite this page
    pub occurrences: usize,
}

/// An entity and how often it is mentioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMention {
    /// Display name of the first mention
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_id: Option<String>,
    pub mentions: usize,
}

/// Everything a story references, in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceSummary {
    pub citations: Vec<CitedSource>,
    pub entities: Vec<EntityMention>,
    /// Legacy mentions whose name is a domain (e.g. `litera.hu`), lowercased
    pub domain_like_entities: Vec<String>,
}

#[derive(Hash, PartialEq, Eq)]
enum EntityKey<'a> {
    Canonical(&'a str),
    Legacy(&'a str),
}

impl ReferenceSummary {
    pub fn from_parsed(parsed: &ParsedContent) -> Self {
        let numbers = parsed.citation_numbers();
        Self::from_segments(parsed.segments(), &numbers)
    }

    pub fn from_segments(segments: &[Segment], numbers: &CitationNumberMap) -> Self {
        let mut occurrences: LinkedHashMap<&str, usize> = LinkedHashMap::new();
        let mut entities: LinkedHashMap<EntityKey<'_>, EntityMention> = LinkedHashMap::new();
        let mut domains: Vec<String> = Vec::new();

        for segment in segments {
            match segment {
                Segment::Text { .. } => {}
                Segment::Citation { page_ids } => {
                    let mut seen_in_group: Vec<&str> = Vec::new();
                    for page_id in page_ids {
                        if seen_in_group.contains(&page_id.as_str()) {
                            continue;
                        }
                        seen_in_group.push(page_id);
                        *occurrences.entry(page_id.as_str()).or_insert(0) += 1;
                    }
                }
                Segment::Entity { name, canonical_id } => {
                    let key = match canonical_id {
                        Some(id) => EntityKey::Canonical(id),
                        None => EntityKey::Legacy(name),
                    };
                    entities
                        .entry(key)
                        .or_insert_with(|| EntityMention {
                            name: name.clone(),
                            canonical_id: canonical_id.clone(),
                            mentions: 0,
                        })
                        .mentions += 1;

                    if canonical_id.is_none() && looks_like_domain(name) {
                        let domain = name.to_lowercase();
                        if !domains.contains(&domain) {
                            domains.push(domain);
                        }
                    }
                }
            }
        }

        let citations = numbers
            .iter()
            .map(|(page_id, number)| CitedSource {
                page_id: page_id.to_string(),
                number,
                occurrences: occurrences.get(page_id).copied().unwrap_or(0),
            })
            .collect();

        ReferenceSummary {
            citations,
            entities: entities.into_iter().map(|(_, mention)| mention).collect(),
            domain_like_entities: domains,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.citations.is_empty() && self.entities.is_empty()
    }
}

/// Whether `name` is a bare domain such as `litera.hu` or `bbc.co.uk`.
///
/// Labels are `[a-z0-9-]+` (case-insensitive) and the last label is at least
/// two ASCII letters.
pub fn looks_like_domain(name: &str) -> bool {
    let name = name.trim();
    let Some((host, tld)) = name.rsplit_once('.') else {
        return false;
    };

    let tld_ok = tld.len() >= 2 && tld.bytes().all(|b| b.is_ascii_alphabetic());
    let host_ok = host.split('.').all(|label| {
        !label.is_empty()
            && label
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-')
    });

    tld_ok && host_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::parse_content;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summary() {
        let parsed = parse_content(
            "{{cite:b,a}} [[Jane Doe|Q1]] and [[Jane|Q1]] per [[Litera.hu]] {{cite:a,a}} [[Pécs]]",
        );
        let summary = ReferenceSummary::from_parsed(&parsed);

        assert_eq!(
            summary.citations,
            vec![
                CitedSource {
                    page_id: "b".into(),
                    number: 1,
                    occurrences: 1
                },
                CitedSource {
                    page_id: "a".into(),
                    number: 2,
                    occurrences: 2
                },
            ]
        );
        assert_eq!(
            summary.entities,
            vec![
                EntityMention {
                    name: "Jane Doe".into(),
                    canonical_id: Some("Q1".into()),
                    mentions: 2
                },
                EntityMention {
                    name: "Litera.hu".into(),
                    canonical_id: None,
                    mentions: 1
                },
                EntityMention {
                    name: "Pécs".into(),
                    canonical_id: None,
                    mentions: 1
                },
            ]
        );
        assert_eq!(summary.domain_like_entities, vec!["litera.hu".to_string()]);
    }

    #[test]
    fn test_empty_summary() {
        let summary = ReferenceSummary::from_parsed(&parse_content("nothing here"));
        assert!(summary.is_empty());
        assert!(summary.domain_like_entities.is_empty());
    }

    #[test]
    fn test_looks_like_domain() {
        assert!(looks_like_domain("litera.hu"));
        assert!(looks_like_domain("news.bbc.co.uk"));
        assert!(looks_like_domain("444.hu"));
        assert!(looks_like_domain("Index.HU"));
        assert!(!looks_like_domain("Jane Doe"));
        assert!(!looks_like_domain("v1.2"));
        assert!(!looks_like_domain(".hu"));
        assert!(!looks_like_domain("St. Louis"));
        assert!(!looks_like_domain("example.c"));
    }
}
