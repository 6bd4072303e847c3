//! Religion (ศาสนา).

use super::patterns::RELIGION;
use super::{Capture, ExtractionRule, FieldExtractor, Transform};
use crate::models::record::FieldName;

pub fn rule() -> ExtractionRule {
    ExtractionRule::new(
        "religion",
        &RELIGION,
        vec![Capture::new(1, FieldName::Religion, Transform::Capitalize)],
    )
}

pub fn extract_religion(text: &str) -> Option<String> {
    rule()
        .extract(text)
        .and_then(|m| m.value(FieldName::Religion).map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thai_religion() {
        assert_eq!(extract_religion("ศาสนา พุทธ ที่อยู่"), Some("พุทธ".to_string()));
        assert_eq!(extract_religion("ศาสนาอิสลาม"), Some("อิสลาม".to_string()));
    }

    #[test]
    fn test_latin_religion_capitalized() {
        assert_eq!(extract_religion("ศาสนา buddhism"), Some("Buddhism".to_string()));
    }

    #[test]
    fn test_missing_religion() {
        assert_eq!(extract_religion("religion buddhism"), None);
    }
}
