//! Error handling types for the parser and the element tree
//!
//! Every failure surfaced by this crate is an [`XmlError`]. The [`XmlErrorKind`]
//! tells callers whether the input document was malformed, an argument to a
//! tree operation was rejected, or the I/O boundary failed.

use std::{error::Error, fmt};

/// Main error type for parsing and tree operations
#[derive(Debug)]
pub struct XmlError {
    /// The specific kind of error
    kind: XmlErrorKind,
    /// Character offset into the trimmed input, when known
    position: Option<usize>,
    /// Source error that caused this error
    source: Option<Box<dyn Error + Send + Sync>>,
}

/// Error categories
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum XmlErrorKind {
    /// The document is structurally malformed
    #[error("parse failure: {0}")]
    ParseFailure(String),

    /// A tree or node operation received an unusable argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading or writing a document failed
    #[error("io error: {0}")]
    Io(String),
}

impl XmlError {
    pub fn new(kind: XmlErrorKind) -> Self {
        Self {
            kind,
            position: None,
            source: None,
        }
    }

    pub fn parse_failure(reason: impl Into<String>) -> Self {
        Self::new(XmlErrorKind::ParseFailure(reason.into()))
    }

    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::new(XmlErrorKind::InvalidArgument(reason.into()))
    }

    pub fn io(reason: impl Into<String>) -> Self {
        Self::new(XmlErrorKind::Io(reason.into()))
    }

    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> &XmlErrorKind {
        &self.kind
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn is_parse_failure(&self) -> bool {
        matches!(self.kind, XmlErrorKind::ParseFailure(_))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, XmlErrorKind::InvalidArgument(_))
    }
}

impl fmt::Display for XmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(position) = self.position {
            write!(f, " at offset {}", position)?;
        }
        Ok(())
    }
}

impl Error for XmlError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| -> &(dyn Error + 'static) { e })
    }
}

pub type Result<T> = std::result::Result<T, XmlError>;
