//! Error types for song parsing and export
//!
//! Defines the error hierarchy: construction-time model errors, fatal
//! parse errors (malformed XML, schema violations, invalid values) and
//! export errors raised while walking an already-built tree.

use thiserror::Error;

/// Invariant violations detected while constructing model nodes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("chord name cannot be empty")]
    EmptyChordName,

    #[error("strophe label cannot be empty")]
    EmptyLabel,

    #[error("song title cannot be empty")]
    EmptyTitle,

    #[error("repeat count must be at least 2, got {0}")]
    RepeatCountTooLow(u32),

    /// A node kind that is not allowed at the container's grammatical level
    #[error("<{container}> cannot contain {found}")]
    DisallowedChild {
        container: &'static str,
        found: &'static str,
    },

    #[error("strophe reference #{0} points outside the reference table")]
    DanglingReference(usize),
}

impl ModelError {
    /// Name of the XML element this error is about
    pub fn element(&self) -> &'static str {
        match self {
            ModelError::EmptyChordName => "chord",
            ModelError::EmptyLabel => "strophe",
            ModelError::EmptyTitle => "title",
            ModelError::RepeatCountTooLow(_) => "repeat",
            ModelError::DisallowedChild { container, .. } => container,
            ModelError::DanglingReference(_) => "strophe-ref",
        }
    }
}

/// Fatal errors while parsing a song document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// XML is not well-formed
    #[error("Malformed XML: {0}")]
    MalformedDocument(String),

    /// Missing or empty required element/attribute, disallowed child, unresolved reference
    #[error("Schema violation in <{element}>: {message}")]
    SchemaViolation { element: String, message: String },

    /// Non-numeric or out-of-range value
    #[error("Invalid value in <{element}>: {message}")]
    InvalidValue { element: String, message: String },
}

impl ParseError {
    pub fn schema(element: impl Into<String>, message: impl Into<String>) -> Self {
        ParseError::SchemaViolation {
            element: element.into(),
            message: message.into(),
        }
    }

    pub fn invalid(element: impl Into<String>, message: impl Into<String>) -> Self {
        ParseError::InvalidValue {
            element: element.into(),
            message: message.into(),
        }
    }
}

impl From<ModelError> for ParseError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::RepeatCountTooLow(_) => ParseError::invalid(err.element(), err.to_string()),
            _ => ParseError::schema(err.element(), err.to_string()),
        }
    }
}

/// Errors raised while rendering a song tree
#[derive(Debug, Error)]
pub enum ExportError {
    /// Tree shape the renderer cannot express (e.g. block repeat of a paragraph)
    #[error("Unsupported structure: {0}")]
    UnsupportedStructure(String),

    /// Operation not available for this renderer or node
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Invalid export option
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Template rendering failed: {0}")]
    Template(String),

    /// Typesetting or compositing backend failure
    #[error("Print backend failed: {0}")]
    Backend(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error for one-call conversions (parse then export)
#[derive(Debug, Error)]
pub enum SongError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_count_maps_to_invalid_value() {
        let err: ParseError = ModelError::RepeatCountTooLow(1).into();
        assert!(matches!(err, ParseError::InvalidValue { ref element, .. } if element == "repeat"));
    }

    #[test]
    fn test_disallowed_child_maps_to_schema_violation() {
        let err: ParseError = ModelError::DisallowedChild {
            container: "lyrics",
            found: "verse",
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Schema violation in <lyrics>: <lyrics> cannot contain verse"
        );
    }
}
