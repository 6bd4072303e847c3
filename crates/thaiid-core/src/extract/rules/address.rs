//! Address components.
//!
//! Each component has its own rule that searches the whole text. The address
//! rule stops at the first component marker, but it does not tell the other
//! rules where to look, so the components can disagree on noisy input.

use super::patterns::{ADDRESS, DISTRICT_NAME, PROVINCE_NAME, SUBDISTRICT_NAME, VILLAGE_NUMBER};
use super::{Capture, ExtractionRule, FieldExtractor, Transform};
use crate::models::record::FieldName;

/// House number (`99/1`) and whatever follows up to the first marker.
pub fn address_rule() -> ExtractionRule {
    ExtractionRule::new(
        "address",
        &ADDRESS,
        vec![Capture::new(1, FieldName::Address, Transform::Trim)],
    )
}

pub fn village_rule() -> ExtractionRule {
    ExtractionRule::new(
        "village",
        &VILLAGE_NUMBER,
        vec![Capture::new(2, FieldName::Village, Transform::Verbatim)],
    )
}

pub fn subdistrict_rule() -> ExtractionRule {
    ExtractionRule::new(
        "subdistrict",
        &SUBDISTRICT_NAME,
        vec![Capture::new(2, FieldName::Subdistrict, Transform::Verbatim)],
    )
}

pub fn district_rule() -> ExtractionRule {
    ExtractionRule::new(
        "district",
        &DISTRICT_NAME,
        vec![Capture::new(2, FieldName::District, Transform::Verbatim)],
    )
}

pub fn province_rule() -> ExtractionRule {
    ExtractionRule::new(
        "province",
        &PROVINCE_NAME,
        vec![Capture::new(2, FieldName::Province, Transform::Verbatim)],
    )
}

fn single(rule: ExtractionRule, field: FieldName, text: &str) -> Option<String> {
    rule.extract(text)
        .and_then(|m| m.value(field).map(str::to_string))
}

pub fn extract_address(text: &str) -> Option<String> {
    single(address_rule(), FieldName::Address, text)
}

pub fn extract_village(text: &str) -> Option<String> {
    single(village_rule(), FieldName::Village, text)
}

pub fn extract_subdistrict(text: &str) -> Option<String> {
    single(subdistrict_rule(), FieldName::Subdistrict, text)
}

pub fn extract_district(text: &str) -> Option<String> {
    single(district_rule(), FieldName::District, text)
}

pub fn extract_province(text: &str) -> Option<String> {
    single(province_rule(), FieldName::Province, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS_TEXT: &str = "ที่อยู่ 99/1 ถนนมิตรภาพ หมู่ที่ 5 ต.ในเมือง อ.เมืองขอนแก่น จ.ขอนแก่น";

    #[test]
    fn test_full_address() {
        assert_eq!(extract_address(ADDRESS_TEXT), Some("99/1 ถนนมิตรภาพ".to_string()));
        assert_eq!(extract_village(ADDRESS_TEXT), Some("5".to_string()));
        assert_eq!(extract_subdistrict(ADDRESS_TEXT), Some("ในเมือง".to_string()));
        assert_eq!(extract_district(ADDRESS_TEXT), Some("เมืองขอนแก่น".to_string()));
        assert_eq!(extract_province(ADDRESS_TEXT), Some("ขอนแก่น".to_string()));
    }

    #[test]
    fn test_address_stops_at_first_marker() {
        assert_eq!(
            extract_address("12/345 ซอยสุขใจ ถนนพหลโยธิน ต.คลองหนึ่ง อ.คลองหลวง"),
            Some("12/345 ซอยสุขใจ ถนนพหลโยธิน".to_string())
        );
    }

    #[test]
    fn test_address_stops_at_misspelled_village_marker() {
        assert_eq!(
            extract_address("7/2 บ้านนา หม่ที 3 ต.นาดี"),
            Some("7/2 บ้านนา".to_string())
        );
    }

    #[test]
    fn test_address_needs_house_number_and_marker() {
        assert_eq!(extract_address("ถนนมิตรภาพ ต.ในเมือง"), None);
        assert_eq!(extract_address("99/1 ถนนมิตรภาพ"), None);
    }

    #[test]
    fn test_village_variants() {
        assert_eq!(extract_village("หมู่ที 12"), Some("12".to_string()));
        assert_eq!(extract_village("หมูที่ 7"), Some("7".to_string()));
        assert_eq!(extract_village("หมที. 4"), Some("4".to_string()));
        assert_eq!(extract_village("ม.8 ต.บ้านเป็ด"), Some("8".to_string()));
        assert_eq!(extract_village("หมู่ที่ 123"), Some("12".to_string()));
        assert_eq!(extract_village("หมู่บ้าน"), None);
    }

    #[test]
    fn test_full_word_markers() {
        let text = "ตำบลในเมือง อำเภอเมือง จังหวัดขอนแก่น";
        assert_eq!(extract_subdistrict(text), Some("ในเมือง".to_string()));
        assert_eq!(extract_district(text), Some("เมือง".to_string()));
        assert_eq!(extract_province(text), Some("ขอนแก่น".to_string()));
    }

    #[test]
    fn test_address_keeps_spelled_out_components() {
        assert_eq!(
            extract_address("99/1 ถนนมิตรภาพ ตำบลในเมือง อ.เมือง"),
            Some("99/1 ถนนมิตรภาพ ตำบลในเมือง".to_string())
        );
    }

    #[test]
    fn test_district_needs_district_marker() {
        let text = "99/1 ซอยเขต ถนนสุขุมวิท ต.บางนา";
        assert_eq!(extract_district(text), None);
        assert_eq!(extract_subdistrict(text), Some("บางนา".to_string()));
    }
}
