/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Inline markup parser for synthesized story content.
//!
//! Story text carries two kinds of inline markup:
//!
//! - Citation groups: `{{cite:page-1,page-2}}`
//! - Entity references: `[[Display Name|canonical-id]]`, or the legacy
//!   name-only form `[[Display Name]]`
//!
//! [`parse_content`] turns such text into an ordered list of [`Segment`]s
//! (text, citation, entity) plus non-fatal [`ParseWarning`]s, and
//! [`assign_citation_numbers`] derives footnote-style reference numbers in
//! order of first appearance.
//!
//! # Architecture
//!
//! The parser is a single left-to-right scan ([`scanner`]). It never fails
//! on malformed markup: anything it cannot recognize stays literal text and
//! is reported as a warning. Metadata about cited pages and entities is
//! optional and reaches the scanner through the [`ReferenceLookup`] trait;
//! it is only used to report unresolved references.
//!
//! # Example
//!
//! ```
//! use storymark_markup::{Segment, assign_citation_numbers, parse_content};
//!
//! let parsed = parse_content("Officials confirmed {{cite:a,b}} that [[Jane Doe|Q1]] left.");
//! assert_eq!(parsed.segments().len(), 5);
//! assert_eq!(
//!     parsed.segments()[3],
//!     Segment::entity("Jane Doe", Some("Q1")),
//! );
//!
//! let numbers = assign_citation_numbers(parsed.segments());
//! assert_eq!(numbers.get("a"), Some(1));
//! assert_eq!(numbers.get("b"), Some(2));
//! ```

pub mod cache;
pub mod document;
pub mod error;
pub mod lookup;
pub mod metadata;
pub mod numbering;
pub mod options;
pub mod parsed;
pub mod scanner;
pub mod segment;
pub mod summary;
pub mod warning;

pub use cache::ParseCache;
pub use document::StoryDocument;
pub use error::{MarkupError, MarkupResult};
pub use lookup::{ContentMetadata, NullLookup, ReferenceLookup};
pub use metadata::{EntityDescriptor, EntityGroups, SourceDescriptor};
pub use numbering::{CitationNumberMap, assign_citation_numbers};
pub use options::ParseOptions;
pub use parsed::ParsedContent;
pub use scanner::{parse_content, parse_content_with};
pub use segment::Segment;
pub use summary::{CitedSource, EntityMention, ReferenceSummary};
pub use warning::{ParseWarning, WarningKind};
