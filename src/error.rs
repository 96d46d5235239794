//! Typed errors for the translation engine.
//!
//! `ValidationError` covers malformed requests and is always recoverable by
//! the caller correcting its input. `EngineFault` covers defects in rule
//! configuration; it is surfaced as an internal error and logged, never
//! swallowed. An unsupported language *pair* is deliberately not an error —
//! the service degrades to an annotated passthrough instead.

use thiserror::Error;

/// A caller-supplied request was malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was missing or empty.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    /// A language name is outside the supported set.
    #[error("unsupported language: {name}")]
    UnsupportedLanguage { name: String },

    /// Source and target languages are the same.
    #[error("source and target languages must be different")]
    SameLanguage,
}

impl ValidationError {
    /// Machine-readable reason code for transport layers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "MISSING_FIELD",
            Self::UnsupportedLanguage { .. } => "UNSUPPORTED_LANGUAGE",
            Self::SameLanguage => "SAME_LANGUAGE",
        }
    }
}

/// An unexpected failure inside rule application.
///
/// Rule patterns are authored as plain strings in the catalog and compiled
/// on first use, so a malformed pattern shows up here rather than at
/// process start. This is a configuration defect, not a caller mistake.
#[derive(Debug, Error)]
pub enum EngineFault {
    #[error("invalid rule pattern '{pattern}': {source}")]
    InvalidRule {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Umbrella error returned by [`crate::service::translate`].
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("translation engine fault: {0}")]
    Engine(#[from] EngineFault),
}
