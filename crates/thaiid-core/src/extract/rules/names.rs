//! Holder names in Thai and English.

use super::markers::{title_category, TitleCategory};
use super::patterns::{ENGLISH_LASTNAME, ENGLISH_NAME, THAI_NAME};
use super::{Capture, ExtractionRule, FieldExtractor, Transform};
use crate::models::record::FieldName;

/// Title followed by given name and surname in Thai script.
pub fn thai_name_rule() -> ExtractionRule {
    ExtractionRule::new(
        "name_th",
        &THAI_NAME,
        vec![
            Capture::new(1, FieldName::Prefix, Transform::Verbatim),
            Capture::new(2, FieldName::NameTh, Transform::Verbatim),
            Capture::new(3, FieldName::LastnameTh, Transform::Verbatim),
        ],
    )
}

/// English title followed by the given name.
pub fn english_name_rule() -> ExtractionRule {
    ExtractionRule::new(
        "name_en",
        &ENGLISH_NAME,
        vec![Capture::new(2, FieldName::NameEn, Transform::Capitalize)],
    )
}

/// "last name" label followed by the surname.
pub fn english_lastname_rule() -> ExtractionRule {
    ExtractionRule::new(
        "lastname_en",
        &ENGLISH_LASTNAME,
        vec![Capture::new(1, FieldName::LastnameEn, Transform::Capitalize)],
    )
}

/// Thai name with its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThaiName {
    pub prefix: String,
    pub first_name: String,
    pub last_name: String,
}

impl ThaiName {
    pub fn category(&self) -> Option<TitleCategory> {
        title_category(&self.prefix)
    }
}

/// Extract the Thai title, given name and surname.
pub fn extract_thai_name(text: &str) -> Option<ThaiName> {
    let m = thai_name_rule().extract(text)?;
    Some(ThaiName {
        prefix: m.value(FieldName::Prefix)?.to_string(),
        first_name: m.value(FieldName::NameTh)?.to_string(),
        last_name: m.value(FieldName::LastnameTh)?.to_string(),
    })
}

pub fn extract_english_name(text: &str) -> Option<String> {
    english_name_rule()
        .extract(text)
        .and_then(|m| m.value(FieldName::NameEn).map(str::to_string))
}

pub fn extract_english_lastname(text: &str) -> Option<String> {
    english_lastname_rule()
        .extract(text)
        .and_then(|m| m.value(FieldName::LastnameEn).map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thai(prefix: &str, first: &str, last: &str) -> Option<ThaiName> {
        Some(ThaiName {
            prefix: prefix.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
        })
    }

    #[test]
    fn test_thai_name() {
        assert_eq!(
            extract_thai_name("ชื่อตัวและชื่อสกุล นาย สมชาย ใจดี name mr somchai"),
            thai("นาย", "สมชาย", "ใจดี")
        );
    }

    #[test]
    fn test_thai_name_without_space_after_title() {
        assert_eq!(extract_thai_name("น.ส.สมหญิง รักไทย"), thai("น.ส.", "สมหญิง", "รักไทย"));
    }

    #[test]
    fn test_longer_civilian_title_wins() {
        assert_eq!(extract_thai_name("นางสาว สมหญิง รักไทย"), thai("นางสาว", "สมหญิง", "รักไทย"));
        assert_eq!(extract_thai_name("นาง สมศรี มีสุข"), thai("นาง", "สมศรี", "มีสุข"));
    }

    #[test]
    fn test_military_title() {
        let name = extract_thai_name("พล.ต. ประยุทธ์ มั่นคง").unwrap();
        assert_eq!(name.prefix, "พล.ต.");
        assert_eq!(name.category(), Some(TitleCategory::Military));
    }

    #[test]
    fn test_thai_name_needs_two_words() {
        assert_eq!(extract_thai_name("นาย สมชาย"), None);
        assert_eq!(extract_thai_name("สมชาย ใจดี"), None);
    }

    #[test]
    fn test_english_name() {
        assert_eq!(extract_english_name("mr smith"), Some("Smith".to_string()));
        assert_eq!(extract_english_name("name: mrs: jane"), Some("Jane".to_string()));
        assert_eq!(extract_english_name("name mr. somchai"), Some("Somchai".to_string()));
        assert_eq!(extract_english_name("miss  malee"), Some("Malee".to_string()));
    }

    #[test]
    fn test_english_title_must_be_a_word() {
        assert_eq!(extract_english_name("summr smith"), None);
        assert_eq!(extract_english_name("mrsmith"), None);
    }

    #[test]
    fn test_english_lastname() {
        assert_eq!(extract_english_lastname("last name jaidee"), Some("Jaidee".to_string()));
        assert_eq!(extract_english_lastname("last  name: rakthai"), Some("Rakthai".to_string()));
        assert_eq!(extract_english_lastname("lastname jaidee"), None);
    }
}
