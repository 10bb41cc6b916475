/*
 * cache.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Opt-in memoization of parse results.
//!
//! Parsing is pure, so results can be shared between callers that render
//! the same content repeatedly (story lists, previews). Nothing in this
//! crate caches implicitly; callers that want it wrap their lookup and
//! options in a [`ParseCache`].

use crate::lookup::{NullLookup, ReferenceLookup};
use crate::options::ParseOptions;
use crate::parsed::ParsedContent;
use crate::scanner::parse_content_with;
use hashlink::LruCache;
use std::sync::Arc;

/// Default number of distinct content strings kept.
pub const DEFAULT_CAPACITY: usize = 64;

/// Least-recently-used cache of parse results keyed by content.
///
/// Every entry was produced with the same lookup and options, so the
/// warnings in a cached result are those a fresh parse would report.
pub struct ParseCache<L = NullLookup> {
    lookup: L,
    options: ParseOptions,
    entries: LruCache<String, Arc<ParsedContent>>,
    hits: u64,
    misses: u64,
}

impl ParseCache<NullLookup> {
    /// Cache for parses without metadata.
    pub fn new(capacity: usize) -> Self {
        Self::with_lookup(NullLookup, ParseOptions::default(), capacity)
    }
}

impl Default for ParseCache<NullLookup> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<L: ReferenceLookup> ParseCache<L> {
    /// Cache for parses checked against `lookup`. A zero capacity holds one entry.
    pub fn with_lookup(lookup: L, options: ParseOptions, capacity: usize) -> Self {
        ParseCache {
            lookup,
            options,
            entries: LruCache::new(capacity.max(1)),
            hits: 0,
            misses: 0,
        }
    }

    /// Return the cached result for `content`, parsing it on a miss.
    pub fn get_or_parse(&mut self, content: &str) -> Arc<ParsedContent> {
        if let Some(parsed) = self.entries.get(content) {
            self.hits += 1;
            tracing::trace!(bytes = content.len(), "Parse cache hit");
            return Arc::clone(parsed);
        }

        self.misses += 1;
        tracing::trace!(bytes = content.len(), "Parse cache miss");

        let parsed = Arc::new(parse_content_with(content, &self.lookup, self.options));
        self.entries.insert(content.to_string(), Arc::clone(&parsed));
        parsed
    }

    pub fn contains(&self, content: &str) -> bool {
        self.entries.contains_key(content)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Drop every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
