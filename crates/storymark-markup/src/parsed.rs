/*
 * parsed.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The result of parsing one content string.

use crate::numbering::{CitationNumberMap, assign_citation_numbers};
use crate::options::ParseOptions;
use crate::scanner::PendingWarning;
use crate::segment::Segment;
use crate::warning::ParseWarning;
use serde::Serialize;
use storymark_diagnostics::DiagnosticMessage;
use storymark_source_map::{FileId, LineIndex, Range};

/// Segments, their source ranges and the warnings collected while scanning.
///
/// `segments()[i]` was produced from the bytes in `spans()[i]`. Spans are
/// contiguous and cover the whole input, so slicing the input by the spans
/// and concatenating gives the input back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedContent {
    segments: Vec<Segment>,
    spans: Vec<Range>,
    warnings: Vec<ParseWarning>,
    #[serde(skip)]
    strict: bool,
}

impl ParsedContent {
    pub(crate) fn from_scan(
        source: &str,
        segments: Vec<Segment>,
        spans: Vec<(usize, usize)>,
        warnings: Vec<PendingWarning>,
        options: ParseOptions,
    ) -> Self {
        let index = LineIndex::new(source);
        let to_range = |start: usize, end: usize| {
            index
                .range(start, end)
                .unwrap_or_else(|| Range::from_offsets(start, end))
        };

        let spans = spans
            .into_iter()
            .map(|(start, end)| to_range(start, end))
            .collect();
        let warnings = warnings
            .into_iter()
            .map(|w| ParseWarning::new(w.kind, to_range(w.start, w.end)))
            .collect();

        ParsedContent {
            segments,
            spans,
            warnings,
            strict: options.strict,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn spans(&self) -> &[Range] {
        &self.spans
    }

    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// Segments paired with the source range they came from.
    pub fn iter_spanned(&self) -> impl Iterator<Item = (&Segment, &Range)> {
        self.segments.iter().zip(&self.spans)
    }

    /// Consume the result, returning segments and warnings.
    pub fn into_parts(self) -> (Vec<Segment>, Vec<ParseWarning>) {
        (self.segments, self.warnings)
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Whether the parse ran in strict mode.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Citation groups in order of appearance.
    pub fn citation_groups(&self) -> impl Iterator<Item = &[String]> {
        self.segments.iter().filter_map(Segment::page_ids)
    }

    /// Reference numbers for every cited page.
    pub fn citation_numbers(&self) -> CitationNumberMap {
        assign_citation_numbers(&self.segments)
    }

    /// Rebuild the exact input from the recorded spans.
    ///
    /// Returns `None` if `source` is not the string this result came from
    /// (a span falls outside it or off a char boundary).
    pub fn reconstruct(&self, source: &str) -> Option<String> {
        let mut out = String::with_capacity(source.len());
        for span in &self.spans {
            out.push_str(source.get(span.byte_range())?);
        }
        Some(out)
    }

    /// Re-serialize every segment to canonical markup.
    pub fn to_markup(&self) -> String {
        self.segments.iter().map(Segment::to_markup).collect()
    }

    /// Project the content to plain text.
    ///
    /// Text is kept verbatim, entities become their display names and
    /// citation groups become bracketed reference numbers (`[1, 2]`).
    pub fn plain_text(&self, numbers: &CitationNumberMap) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text { content } => out.push_str(content),
                Segment::Entity { name, .. } => out.push_str(name),
                Segment::Citation { page_ids } => {
                    let shown = numbers.numbers_for(page_ids);
                    if shown.is_empty() {
                        continue;
                    }
                    let labels: Vec<String> = shown.iter().map(u32::to_string).collect();
                    out.push('[');
                    out.push_str(&labels.join(", "));
                    out.push(']');
                }
            }
        }
        out
    }

    /// Warnings as diagnostics located in `file_id`.
    ///
    /// Strict parses produce error diagnostics.
    pub fn diagnostics(&self, file_id: FileId) -> Vec<DiagnosticMessage> {
        self.warnings
            .iter()
            .map(|w| w.to_diagnostic(file_id, self.strict))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::lookup::NullLookup;
    use crate::options::ParseOptions;
    use crate::scanner::{parse_content, parse_content_with};
    use pretty_assertions::assert_eq;
    use storymark_source_map::FileId;

    #[test]
    fn test_spans_cover_input() {
        let source = "a {{cite: x }} b\n[[C|c1]] {{cite:y";
        let parsed = parse_content(source);

        assert_eq!(parsed.reconstruct(source).as_deref(), Some(source));

        let mut expected_start = 0;
        for (_, span) in parsed.iter_spanned() {
            assert_eq!(span.start.offset, expected_start);
            expected_start = span.end.offset;
        }
        assert_eq!(expected_start, source.len());
    }

    #[test]
    fn test_span_rows() {
        let parsed = parse_content("first line\nsecond [[Entity]]");
        let (segment, span) = parsed.iter_spanned().nth(1).unwrap();
        assert_eq!(segment.to_markup(), "[[Entity]]");
        assert_eq!(span.start.row, 1);
        assert_eq!(span.start.column, 7);
    }

    #[test]
    fn test_reconstruct_wrong_source() {
        let parsed = parse_content("hello [[world]]");
        assert_eq!(parsed.reconstruct("hi"), None);
    }

    #[test]
    fn test_to_markup_canonical() {
        let parsed = parse_content("x {{cite: a , b }} [[ N | Q ]]");
        assert_eq!(parsed.to_markup(), "x {{cite:a,b}} [[N|Q]]");
    }

    #[test]
    fn test_plain_text() {
        let parsed = parse_content(
            "Aides confirmed {{cite:a,b}} that [[Jane Doe|Q1]] visited [[Springfield]]{{cite:b}}.",
        );
        let numbers = parsed.citation_numbers();
        assert_eq!(
            parsed.plain_text(&numbers),
            "Aides confirmed [1, 2] that Jane Doe visited Springfield[2]."
        );
    }

    #[test]
    fn test_diagnostics_strictness() {
        let lenient = parse_content("[[open");
        assert!(!lenient.diagnostics(FileId(0))[0].is_error());

        let strict = parse_content_with(
            "[[open",
            &NullLookup,
            ParseOptions::new().with_strict(true),
        );
        assert!(strict.is_strict());
        assert!(strict.diagnostics(FileId(0))[0].is_error());
    }

    #[test]
    fn test_citation_groups() {
        let parsed = parse_content("{{cite:a}} text {{cite:b,c}}");
        let groups: Vec<&[String]> = parsed.citation_groups().collect();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1], &["b".to_string(), "c".to_string()][..]);
    }

    #[test]
    fn test_serialize() {
        let parsed = parse_content("[[A]]");
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["segments"][0]["name"], "A");
        assert_eq!(json["spans"][0]["end"]["offset"], 5);
        assert!(json["warnings"].as_array().unwrap().is_empty());
    }
}
