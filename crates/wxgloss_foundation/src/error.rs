//! Error types for the wxgloss system.
//!
//! Classification and explanation never fail; these errors only surface at the
//! edges, where lexicons, catalogs and messages are loaded from JSON or files.

use std::fmt;

use thiserror::Error;

/// The main error type for wxgloss operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a lexicon format error.
    #[must_use]
    pub fn lexicon_format(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LexiconFormat(message.into()))
    }

    /// Creates a catalog format error.
    #[must_use]
    pub fn catalog_format(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CatalogFormat(message.into()))
    }

    /// Creates a message format error.
    #[must_use]
    pub fn message_format(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MessageFormat(message.into()))
    }

    /// Creates an unknown locale error.
    #[must_use]
    pub fn unknown_locale(tag: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownLocale(tag.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Wraps a `serde_json` error, keeping its line and column as context.
    ///
    /// `wrap` picks the error kind for the document being read.
    #[must_use]
    pub fn from_json(
        err: &serde_json::Error,
        source: impl Into<String>,
        wrap: fn(String) -> ErrorKind,
    ) -> Self {
        Self::new(wrap(err.to_string())).with_context(
            ErrorContext::new()
                .with_source(source)
                .with_position(err.line(), err.column()),
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A lexicon document did not have the `table -> code -> locale -> text` shape.
    #[error("lexicon format error: {0}")]
    LexiconFormat(String),

    /// A catalog document was not a flat `key -> template` map.
    #[error("catalog format error: {0}")]
    CatalogFormat(String),

    /// A structured message or station document could not be read.
    #[error("message format error: {0}")]
    MessageFormat(String),

    /// The locale tag is not one of the supported locales.
    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// A command-line argument was missing or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or table name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for wxgloss operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_unknown_locale() {
        let err = Error::unknown_locale("fr");
        assert!(matches!(err.kind, ErrorKind::UnknownLocale(_)));
        assert_eq!(format!("{err}"), "unknown locale: fr");
    }

    #[test]
    fn error_with_context() {
        let err = Error::lexicon_format("expected object").with_context(
            ErrorContext::new()
                .with_source("lexicon.json")
                .with_position(3, 7),
        );

        let ctx = err.context.unwrap();
        assert_eq!(ctx.source, Some("lexicon.json".to_string()));
        assert_eq!(format!("{ctx}"), "at lexicon.json:3:7");
    }

    #[test]
    fn error_from_json_keeps_position() {
        let json_err = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }").unwrap_err();
        let err = Error::from_json(&json_err, "inline", ErrorKind::MessageFormat);

        assert!(matches!(err.kind, ErrorKind::MessageFormat(_)));
        let ctx = err.context.unwrap();
        assert_eq!(ctx.line, Some(2));
        assert_eq!(ctx.source.as_deref(), Some("inline"));
    }

    #[test]
    fn context_without_source_is_empty() {
        assert_eq!(format!("{}", ErrorContext::new()), "");
    }
}
