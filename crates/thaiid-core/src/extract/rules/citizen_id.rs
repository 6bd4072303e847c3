//! Citizen identification number (เลขประจำตัวประชาชน).
//!
//! The number is printed as 13 digits grouped 1-4-5-2-1. OCR may keep or drop
//! the spaces between groups; the extracted value never contains them. The
//! checksum digit is not verified.

use super::patterns::CITIZEN_ID;
use super::{Capture, ExtractionRule, FieldExtractor, Transform};
use crate::models::record::FieldName;

pub fn rule() -> ExtractionRule {
    ExtractionRule::new(
        "citizen_id",
        &CITIZEN_ID,
        vec![Capture::new(0, FieldName::CitizenId, Transform::StripSpaces)],
    )
}

/// Extract the citizen ID from cleaned text.
pub fn extract_citizen_id(text: &str) -> Option<String> {
    rule()
        .extract(text)
        .and_then(|m| m.value(FieldName::CitizenId).map(str::to_string))
}
