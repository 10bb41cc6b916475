/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for story documents.
//!
//! Malformed markup is never an error (see [`crate::ParseWarning`]). Errors
//! only arise when the input itself has the wrong shape.

use storymark_diagnostics::{DiagnosticMessage, DiagnosticMessageBuilder};
use thiserror::Error;

/// Errors that can occur while loading story input.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// The story's `content` field is present but not a string.
    #[error("Story content must be a string, found {found}")]
    InvalidContentType { found: &'static str },

    /// The payload is not a story object.
    #[error("Invalid story document: {message}")]
    InvalidDocument { message: String },

    /// The payload is not valid JSON, or a metadata field has the wrong shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for story document operations.
pub type MarkupResult<T> = Result<T, MarkupError>;

impl MarkupError {
    /// Convert this error to a [`DiagnosticMessage`].
    pub fn to_diagnostic(&self) -> DiagnosticMessage {
        match self {
            MarkupError::InvalidContentType { found } => {
                DiagnosticMessageBuilder::error("Invalid Content Type")
                    .with_code("SM-3-1")
                    .problem("Story `content` must be a string")
                    .add_detail(format!("Found a value of type `{}`", found))
                    .build()
            }
            MarkupError::InvalidDocument { message } => {
                DiagnosticMessageBuilder::error("Invalid Story Document")
                    .problem(message.clone())
                    .add_hint("Is this the story API response or the story object itself?")
                    .build()
            }
            MarkupError::Json(e) => DiagnosticMessageBuilder::error("Invalid JSON")
                .problem(e.to_string())
                .build(),
        }
    }
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
