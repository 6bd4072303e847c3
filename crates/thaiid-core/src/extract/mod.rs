//! ID card field extraction.

pub mod normalize;
mod parser;
pub mod rules;

pub use normalize::{normalize, normalize_text};
pub use parser::{ExtractionResult, IdCardParser};

use crate::models::record::{ExtractionResponse, IdCardRecord};
use crate::ocr::RecognizedText;

/// Trait for ID card parsers.
pub trait CardParser {
    /// Normalize the fragments and extract every field.
    fn parse(&self, text: &RecognizedText) -> ExtractionResult;

    /// Extract every field from already cleaned text.
    fn extract_from_text(&self, cleaned: &str) -> IdCardRecord;
}

/// Extract every field from cleaned text with the default parser.
pub fn extract(cleaned: &str) -> IdCardRecord {
    IdCardParser::new().extract_from_text(cleaned)
}

/// Run the whole pipeline over raw fragments and build the transport document.
pub fn extract_fields<S: AsRef<str>>(fragments: &[S]) -> ExtractionResponse {
    let text = RecognizedText::new(fragments.iter().map(|f| f.as_ref()));
    IdCardParser::new().parse(&text).response()
}
