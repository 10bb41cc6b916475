/*
 * warning.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Non-fatal parse diagnostics.

use serde::{Deserialize, Serialize};
use storymark_diagnostics::{DiagnosticKind, DiagnosticMessage, DiagnosticMessageBuilder};
use storymark_source_map::{FileId, Range, SourceInfo};

/// What the scanner found wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum WarningKind {
    /// `{{cite:` with no `}}` before the end of input or the next token.
    UnterminatedCitation,
    /// `{{cite:}}` or a group of only blank identifiers.
    EmptyCitation,
    /// A blank identifier between commas; it is dropped from the group.
    EmptyCitationId,
    /// `[[` with no `]]` before the end of input or the next token.
    UnterminatedEntity,
    /// `[[]]` or `[[|id]]`.
    EmptyEntityName,
    /// `[[Name|]]`; parsed as a legacy entity.
    EmptyCanonicalId { name: String },
    /// A cited page with no source metadata.
    UnresolvedCitation { page_id: String },
    /// An entity whose canonical id has no entity metadata.
    UnresolvedEntity { name: String, canonical_id: String },
}

impl WarningKind {
    /// Stable diagnostic code (see the diagnostics catalog).
    pub fn code(&self) -> &'static str {
        match self {
            WarningKind::UnterminatedCitation => "SM-1-1",
            WarningKind::EmptyCitation => "SM-1-2",
            WarningKind::EmptyCitationId => "SM-1-3",
            WarningKind::UnterminatedEntity => "SM-1-4",
            WarningKind::EmptyEntityName => "SM-1-5",
            WarningKind::EmptyCanonicalId { .. } => "SM-1-6",
            WarningKind::UnresolvedCitation { .. } => "SM-2-1",
            WarningKind::UnresolvedEntity { .. } => "SM-2-2",
        }
    }

    /// Whether this is a markup syntax problem rather than a missing reference.
    pub fn is_malformed(&self) -> bool {
        !self.is_unresolved()
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(
            self,
            WarningKind::UnresolvedCitation { .. } | WarningKind::UnresolvedEntity { .. }
        )
    }

    fn describe(&self) -> String {
        match self {
            WarningKind::UnterminatedCitation => {
                "`{{cite:` is never closed with `}}`; the marker is kept as text".to_string()
            }
            WarningKind::EmptyCitation => {
                "Citation lists no page identifiers; the marker is kept as text".to_string()
            }
            WarningKind::EmptyCitationId => {
                "Citation contains an empty page identifier; it was skipped".to_string()
            }
            WarningKind::UnterminatedEntity => {
                "`[[` is never closed with `]]`; the marker is kept as text".to_string()
            }
            WarningKind::EmptyEntityName => {
                "Entity marker has no display name; the marker is kept as text".to_string()
            }
            WarningKind::EmptyCanonicalId { name } => format!(
                "Entity `{}` has an empty canonical id and is treated as a name-only mention",
                name
            ),
            WarningKind::UnresolvedCitation { page_id } => {
                format!("Page `{}` is cited but has no source metadata", page_id)
            }
            WarningKind::UnresolvedEntity { name, canonical_id } => format!(
                "Entity `{}` refers to `{}`, which has no entity metadata",
                name, canonical_id
            ),
        }
    }

    fn hint(&self) -> Option<&'static str> {
        match self {
            WarningKind::UnterminatedCitation => Some("Did you forget the closing `}}`?"),
            WarningKind::UnterminatedEntity => Some("Did you forget the closing `]]`?"),
            WarningKind::EmptyCanonicalId { .. } => {
                Some("Remove the `|` or add the canonical id after it?")
            }
            WarningKind::UnresolvedCitation { .. } => {
                Some("Was the page dropped from the story's sources?")
            }
            _ => None,
        }
    }
}

/// A malformed or unresolvable token found while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    #[serde(flatten)]
    pub kind: WarningKind,
    pub code: String,
    pub message: String,
    /// Byte range of the offending token (or of its opening marker when the
    /// token never closes)
    pub range: Range,
}

impl ParseWarning {
    pub fn new(kind: WarningKind, range: Range) -> Self {
        ParseWarning {
            code: kind.code().to_string(),
            message: kind.describe(),
            kind,
            range,
        }
    }

    /// Convert to a [`DiagnosticMessage`] located in `file_id`.
    ///
    /// In strict mode the diagnostic is an error rather than a warning.
    pub fn to_diagnostic(&self, file_id: FileId, strict: bool) -> DiagnosticMessage {
        let code = self.kind.code();
        let title = storymark_diagnostics::get_error_info(code)
            .map_or("Markup Warning", |info| info.title.as_str());

        let mut builder = DiagnosticMessageBuilder::warning(title)
            .with_code(code)
            .problem(self.message.clone())
            .with_location(SourceInfo::new(file_id, self.range.clone()));
        if let Some(hint) = self.kind.hint() {
            builder = builder.add_hint(hint);
        }

        let diagnostic = builder.build();
        if strict {
            diagnostic.with_kind(DiagnosticKind::Error)
        } else {
            diagnostic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_exist_in_catalog() {
        let kinds = [
            WarningKind::UnterminatedCitation,
            WarningKind::EmptyCitation,
            WarningKind::EmptyCitationId,
            WarningKind::UnterminatedEntity,
            WarningKind::EmptyEntityName,
            WarningKind::EmptyCanonicalId { name: "n".into() },
            WarningKind::UnresolvedCitation { page_id: "p".into() },
            WarningKind::UnresolvedEntity {
                name: "n".into(),
                canonical_id: "c".into(),
            },
        ];
        for kind in kinds {
            assert!(
                storymark_diagnostics::get_error_info(kind.code()).is_some(),
                "missing catalog entry for {}",
                kind.code()
            );
        }
    }

    #[test]
    fn test_classification() {
        assert!(WarningKind::UnterminatedEntity.is_malformed());
        assert!(WarningKind::UnresolvedCitation { page_id: "p".into() }.is_unresolved());
    }

    #[test]
    fn test_to_diagnostic() {
        let warning = ParseWarning::new(
            WarningKind::UnresolvedCitation {
                page_id: "p9".into(),
            },
            Range::from_offsets(4, 16),
        );

        let diag = warning.to_diagnostic(FileId(0), false);
        assert_eq!(diag.kind, DiagnosticKind::Warning);
        assert_eq!(diag.code.as_deref(), Some("SM-2-1"));
        assert_eq!(diag.title, "Unresolved Citation");
        assert_eq!(diag.location.as_ref().unwrap().start_offset(), 4);
        assert_eq!(diag.hints.len(), 1);

        let strict = warning.to_diagnostic(FileId(0), true);
        assert!(strict.is_error());
    }

    #[test]
    fn test_serialization_shape() {
        let warning = ParseWarning::new(
            WarningKind::UnresolvedEntity {
                name: "Alice".into(),
                canonical_id: "Q42".into(),
            },
            Range::from_offsets(0, 13),
        );
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["kind"], "unresolved-entity");
        assert_eq!(json["canonicalId"], "Q42");
        assert_eq!(json["code"], "SM-2-2");
        assert_eq!(json["range"]["end"]["offset"], 13);

        let back: ParseWarning = serde_json::from_value(json).unwrap();
        assert_eq!(back, warning);
    }
}
