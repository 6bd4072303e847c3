//! Error types for the thaiid-core library.

use thiserror::Error;

/// Main error type for the thaiid library.
#[derive(Error, Debug)]
pub enum ThaiIdError {
    /// Malformed OCR input.
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while turning OCR engine output into recognized text.
///
/// A field that fails to match is never an error; only input that breaks the
/// fragment contract ends up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A fragment in the sequence was null.
    #[error("fragment {index} is null")]
    NullFragment { index: usize },

    /// The input document has a shape we do not understand.
    #[error("malformed OCR output: {0}")]
    Malformed(String),
}

/// Result type for the thaiid library.
pub type Result<T> = std::result::Result<T, ThaiIdError>;
