/*
 * scanner.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Single-pass markup scanner.
//!
//! The scanner walks the content once with a cursor. Only `{` and `[` can
//! start a token, so it jumps between those bytes with `memchr` and treats
//! everything in between as pending text. At a candidate position it tries,
//! in order:
//!
//! 1. a citation group, `{{cite:id[,id...]}}`
//! 2. an entity, `[[name|canonical-id]]` or legacy `[[name]]`
//!
//! A token is only accepted when its closing delimiter appears before the
//! opening delimiter of any other token. When a candidate is rejected the
//! cursor moves one byte forward and the opening character stays in the
//! pending text run, so nothing is ever dropped.
//!
//! Delimiter positions are looked up through [`NextMatch`], which remembers
//! the next occurrence of each delimiter. Every byte is searched a bounded
//! number of times, so rejected candidates never cause a rescan of the rest
//! of the input.

use crate::lookup::{NullLookup, ReferenceLookup};
use crate::options::ParseOptions;
use crate::parsed::ParsedContent;
use crate::segment::Segment;
use crate::warning::WarningKind;
use memchr::memmem;

const CITE_OPEN: &str = "{{cite:";
const CITE_CLOSE: &str = "}}";
const ENTITY_OPEN: &str = "[[";
const ENTITY_CLOSE: &str = "]]";

/// Parse story content into segments, without metadata.
///
/// Never fails: malformed markup stays literal text and is reported in
/// [`ParsedContent::warnings`].
pub fn parse_content(content: &str) -> ParsedContent {
    parse_content_with(content, &NullLookup, ParseOptions::default())
}

/// Parse story content, checking references against `lookup`.
pub fn parse_content_with<L>(content: &str, lookup: &L, options: ParseOptions) -> ParsedContent
where
    L: ReferenceLookup + ?Sized,
{
    let mut scanner = Scanner::new(content, lookup, options);
    scanner.run();
    let searched = scanner.bytes_searched();
    let parsed = scanner.finish();

    tracing::debug!(
        bytes = content.len(),
        searched,
        segments = parsed.segments().len(),
        warnings = parsed.warnings().len(),
        "Parsed story content"
    );

    parsed
}

/// A recognized token: the segment and the byte length it consumed.
struct Token {
    segment: Segment,
    len: usize,
}

/// A warning still in byte offsets; converted to a located warning at the end.
pub(crate) struct PendingWarning {
    pub kind: WarningKind,
    pub start: usize,
    pub end: usize,
}

/// Next occurrence of one delimiter, cached between lookups.
///
/// Lookups arrive in nearly increasing order. A cached match is reused
/// until a lookup starts past it; a lookup that starts before the cached
/// search only examines the few bytes between the two starts.
struct NextMatch {
    finder: memmem::Finder<'static>,
    /// `(searched_from, first match at or after searched_from)`
    cached: Option<(usize, Option<usize>)>,
    /// Bytes examined so far
    searched: usize,
}

impl NextMatch {
    fn new(needle: &'static str) -> Self {
        NextMatch {
            finder: memmem::Finder::new(needle.as_bytes()),
            cached: None,
            searched: 0,
        }
    }

    /// Offset of the first occurrence starting at or after `from`.
    fn find_from(&mut self, haystack: &[u8], from: usize) -> Option<usize> {
        if let Some((searched_from, next)) = self.cached {
            if from >= searched_from && next.is_none_or(|at| at >= from) {
                return next;
            }
            if from < searched_from {
                // Only matches starting in [from, searched_from) are unknown
                let window_end =
                    (searched_from + self.finder.needle().len() - 1).min(haystack.len());
                if from < window_end {
                    self.searched += window_end - from;
                    if let Some(i) = self.finder.find(&haystack[from..window_end]) {
                        return Some(from + i);
                    }
                }
                return next;
            }
        }

        let rest = haystack.get(from..).unwrap_or_default();
        let next = self.finder.find(rest).map(|i| from + i);
        self.searched += match next {
            Some(at) => at - from + self.finder.needle().len(),
            None => rest.len(),
        };
        self.cached = Some((from, next));
        next
    }
}

struct Scanner<'a, L: ?Sized> {
    source: &'a str,
    lookup: &'a L,
    options: ParseOptions,
    cursor: usize,
    /// Start of the text run not yet emitted
    text_start: usize,
    cite_open: NextMatch,
    cite_close: NextMatch,
    entity_open: NextMatch,
    entity_close: NextMatch,
    /// End of the last unterminated opening marker
    unterminated_end: usize,
    segments: Vec<Segment>,
    spans: Vec<(usize, usize)>,
    warnings: Vec<PendingWarning>,
}

impl<'a, L: ReferenceLookup + ?Sized> Scanner<'a, L> {
    fn new(source: &'a str, lookup: &'a L, options: ParseOptions) -> Self {
        Scanner {
            source,
            lookup,
            options,
            cursor: 0,
            text_start: 0,
            cite_open: NextMatch::new(CITE_OPEN),
            cite_close: NextMatch::new(CITE_CLOSE),
            entity_open: NextMatch::new(ENTITY_OPEN),
            entity_close: NextMatch::new(ENTITY_CLOSE),
            unterminated_end: 0,
            segments: Vec::new(),
            spans: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn run(&mut self) {
        let bytes = self.source.as_bytes();

        while self.cursor < bytes.len() {
            let Some(found) = memchr::memchr2(b'{', b'[', &bytes[self.cursor..]) else {
                break;
            };
            let at = self.cursor + found;

            match self.try_token(at) {
                Some(token) => {
                    self.flush_text(at);
                    let end = at + token.len;
                    self.segments.push(token.segment);
                    self.spans.push((at, end));
                    self.cursor = end;
                    self.text_start = end;
                }
                // Both delimiters are ASCII, so the next byte is a char boundary
                None => self.cursor = at + 1,
            }
        }

        self.flush_text(self.source.len());
    }

    fn finish(self) -> ParsedContent {
        ParsedContent::from_scan(
            self.source,
            self.segments,
            self.spans,
            self.warnings,
            self.options,
        )
    }

    fn flush_text(&mut self, end: usize) {
        if end > self.text_start {
            self.segments
                .push(Segment::text(&self.source[self.text_start..end]));
            self.spans.push((self.text_start, end));
        }
        self.text_start = end;
    }

    fn try_token(&mut self, at: usize) -> Option<Token> {
        let rest = &self.source[at..];
        if rest.starts_with(CITE_OPEN) {
            self.try_citation(at)
        } else if rest.starts_with(ENTITY_OPEN) {
            self.try_entity(at)
        } else {
            None
        }
    }

    /// Find the body of a token opened at `at`.
    ///
    /// Returns `None` when the closing delimiter is missing, or when another
    /// token opens before it; either way the token is unterminated.
    fn token_body(&mut self, at: usize, open: &str, close: &str) -> Option<&'a str> {
        let source: &'a str = self.source;
        let bytes = source.as_bytes();
        let body_start = at + open.len();

        let closer = if close == CITE_CLOSE {
            &mut self.cite_close
        } else {
            &mut self.entity_close
        };
        let close_at = closer.find_from(bytes, body_start)?;

        // An opener interrupts the token only if it lies wholly inside the body
        let opens_inside = |opener: &mut NextMatch, len: usize| {
            opener
                .find_from(bytes, body_start)
                .is_some_and(|found| found + len <= close_at)
        };
        let interrupted = opens_inside(&mut self.cite_open, CITE_OPEN.len())
            || opens_inside(&mut self.entity_open, ENTITY_OPEN.len());

        (!interrupted).then(|| &source[body_start..close_at])
    }

    /// Report an unterminated opening marker at `at`.
    ///
    /// A marker that starts inside the previous unterminated marker (`[[[`)
    /// belongs to the same malformed token and is not reported again.
    fn unterminated(&mut self, kind: WarningKind, at: usize, open: &str) {
        if at >= self.unterminated_end {
            self.malformed(kind, at, at + open.len());
        }
        self.unterminated_end = at + open.len();
    }

    /// Total bytes examined by delimiter searches.
    fn bytes_searched(&self) -> usize {
        self.cite_open.searched
            + self.cite_close.searched
            + self.entity_open.searched
            + self.entity_close.searched
    }

    fn try_citation(&mut self, at: usize) -> Option<Token> {
        let Some(body) = self.token_body(at, CITE_OPEN, CITE_CLOSE) else {
            self.unterminated(WarningKind::UnterminatedCitation, at, CITE_OPEN);
            return None;
        };
        let len = CITE_OPEN.len() + body.len() + CITE_CLOSE.len();

        let mut page_ids = Vec::new();
        let mut saw_blank = false;
        for page_id in body.split(',').map(str::trim) {
            if page_id.is_empty() {
                saw_blank = true;
            } else {
                page_ids.push(page_id.to_string());
            }
        }

        if page_ids.is_empty() {
            self.malformed(WarningKind::EmptyCitation, at, at + len);
            return None;
        }
        if saw_blank {
            self.malformed(WarningKind::EmptyCitationId, at, at + len);
        }

        if self.options.report_unresolved {
            for page_id in &page_ids {
                if !self.lookup.has_citation(page_id) {
                    self.warnings.push(PendingWarning {
                        kind: WarningKind::UnresolvedCitation {
                            page_id: page_id.clone(),
                        },
                        start: at,
                        end: at + len,
                    });
                }
            }
        }

        Some(Token {
            segment: Segment::Citation { page_ids },
            len,
        })
    }

    fn try_entity(&mut self, at: usize) -> Option<Token> {
        let Some(body) = self.token_body(at, ENTITY_OPEN, ENTITY_CLOSE) else {
            self.unterminated(WarningKind::UnterminatedEntity, at, ENTITY_OPEN);
            return None;
        };
        let len = ENTITY_OPEN.len() + body.len() + ENTITY_CLOSE.len();

        // The pipe form is checked first: legacy syntax is a subset of it
        let (name, canonical_id) = match body.split_once('|') {
            Some((name, canonical_id)) => (name.trim(), Some(canonical_id.trim())),
            None => (body.trim(), None),
        };

        if name.is_empty() {
            self.malformed(WarningKind::EmptyEntityName, at, at + len);
            return None;
        }

        let canonical_id = match canonical_id {
            Some("") => {
                self.malformed(
                    WarningKind::EmptyCanonicalId {
                        name: name.to_string(),
                    },
                    at,
                    at + len,
                );
                None
            }
            other => other,
        };

        if let Some(id) = canonical_id {
            if self.options.report_unresolved && !self.lookup.has_entity(id) {
                self.warnings.push(PendingWarning {
                    kind: WarningKind::UnresolvedEntity {
                        name: name.to_string(),
                        canonical_id: id.to_string(),
                    },
                    start: at,
                    end: at + len,
                });
            }
        }

        Some(Token {
            segment: Segment::entity(name, canonical_id),
            len,
        })
    }

    fn malformed(&mut self, kind: WarningKind, start: usize, end: usize) {
        if self.options.report_malformed {
            self.warnings.push(PendingWarning { kind, start, end });
        }
    }
}
