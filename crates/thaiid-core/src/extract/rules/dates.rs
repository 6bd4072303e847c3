//! Dates printed on the card: birth, issue and expiry.
//!
//! Extraction keeps the date text as printed. [`parse_card_date`] turns such a
//! text into a calendar date when a caller needs one.

use chrono::NaiveDate;

use super::patterns::{BIRTH_DATE, BIRTH_DATE_LABEL_FIRST, CARD_DATES, DATE_PARTS};
use super::{Capture, ExtractionRule, FieldExtractor, Transform};
use crate::models::record::FieldName;

/// Offset between Buddhist Era and Common Era years.
const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Years above this are taken to be Buddhist Era.
const BUDDHIST_ERA_THRESHOLD: i32 = 2400;

/// Sara ue and sara uee are misread for sara i; fold them back.
pub fn normalize_date_vowels(date: &str) -> String {
    date.replace('\u{0E36}', "\u{0E34}").replace('\u{0E37}', "\u{0E34}")
}

/// Date of birth, next to its label.
pub fn dob_rule() -> ExtractionRule {
    ExtractionRule::new(
        "dob",
        &BIRTH_DATE,
        vec![Capture::new(1, FieldName::Dob, Transform::CardDate)],
    )
    .with_fallback(&BIRTH_DATE_LABEL_FIRST)
}

/// Issue and expiry dates on either side of the issue-date label.
pub fn card_dates_rule() -> ExtractionRule {
    ExtractionRule::new(
        "card_dates",
        &CARD_DATES,
        vec![
            Capture::new(1, FieldName::IssuedDate, Transform::CardDate),
            Capture::new(2, FieldName::ExpiredDate, Transform::CardDate),
        ],
    )
}

pub fn extract_dob(text: &str) -> Option<String> {
    dob_rule()
        .extract(text)
        .and_then(|m| m.value(FieldName::Dob).map(str::to_string))
}

/// Extract `(issued, expired)` dates.
pub fn extract_card_dates(text: &str) -> Option<(String, String)> {
    let m = card_dates_rule().extract(text)?;
    Some((
        m.value(FieldName::IssuedDate)?.to_string(),
        m.value(FieldName::ExpiredDate)?.to_string(),
    ))
}

/// Parse a card date such as `12 ม.ค. 2530`, `12 มกราคม 2530` or `12 jan. 1987`.
///
/// Buddhist Era years are converted to Common Era.
pub fn parse_card_date(text: &str) -> Option<NaiveDate> {
    let text = normalize_date_vowels(text.trim()).to_lowercase();
    let caps = DATE_PARTS.captures(&text)?;

    let day: u32 = caps[1].parse().ok()?;
    let month = month_to_number(&caps[2])?;
    let mut year: i32 = caps[3].parse().ok()?;
    if year > BUDDHIST_ERA_THRESHOLD {
        year -= BUDDHIST_ERA_OFFSET;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_to_number(month: &str) -> Option<u32> {
    let key: String = month.chars().filter(|c| *c != '.').collect();
    let number = match key.as_str() {
        "มกราคม" | "มค" | "january" | "jan" => 1,
        "กุมภาพันธ์" | "กพ" | "february" | "feb" => 2,
        "มีนาคม" | "มีค" | "march" | "mar" => 3,
        "เมษายน" | "เมย" | "april" | "apr" => 4,
        "พฤษภาคม" | "พค" | "may" => 5,
        "มิถุนายน" | "มิย" | "june" | "jun" => 6,
        "กรกฎาคม" | "กค" | "july" | "jul" => 7,
        "สิงหาคม" | "สค" | "august" | "aug" => 8,
        "กันยายน" | "กย" | "september" | "sept" | "sep" => 9,
        "ตุลาคม" | "ตค" | "october" | "oct" => 10,
        "พฤศจิกายน" | "พย" | "november" | "nov" => 11,
        "ธันวาคม" | "ธค" | "december" | "dec" => 12,
        _ => return None,
    };
    Some(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dob_before_label() {
        assert_eq!(
            extract_dob("12 มกราคม 2530 เกิดวันที่"),
            Some("12 มกราคม 2530".to_string())
        );
    }

    #[test]
    fn test_dob_english_label() {
        assert_eq!(
            extract_dob("12 jan. 1987 date of birth"),
            Some("12 jan. 1987".to_string())
        );
    }

    #[test]
    fn test_dob_label_too_far() {
        let text = "12 มกราคม 2530 xxxxxxxxxxxxxxxxxxxxxxxxx เกิดวันที่";
        assert_eq!(dob_rule().find(text, false), None);
    }

    #[test]
    fn test_dob_vowels_folded() {
        assert_eq!(
            extract_dob("5 มื.ย. 2530 เกิดวันที่"),
            Some("5 มิ.ย. 2530".to_string())
        );
        assert_eq!(
            extract_dob("5 มึ.ย. 2530 เกิดวันที่"),
            Some("5 มิ.ย. 2530".to_string())
        );
    }

    #[test]
    fn test_dob_label_first_fallback() {
        let text = "เกิดวันที่ 12 ม.ค. 2530 ศาสนา พุทธ";
        assert_eq!(extract_dob(text), None);

        let m = dob_rule().find(text, true).unwrap();
        assert!(m.fallback);
        assert_eq!(m.value(FieldName::Dob), Some("12 ม.ค. 2530"));
    }

    #[test]
    fn test_card_dates() {
        assert_eq!(
            extract_card_dates("1 ม.ค. 2560 วันออกบัตร 31 ธ.ค. 2569 วันบัตรหมดอายุ"),
            Some(("1 ม.ค. 2560".to_string(), "31 ธ.ค. 2569".to_string()))
        );
    }

    #[test]
    fn test_card_dates_skip_english_issue_date() {
        assert_eq!(
            extract_card_dates("1 ม.ค. 2560 วันออกบัตร date of issue 1 jan. 2017 31 ธ.ค. 2569"),
            Some(("1 ม.ค. 2560".to_string(), "31 ธ.ค. 2569".to_string()))
        );
    }

    #[test]
    fn test_card_dates_glued_to_label() {
        assert_eq!(
            extract_card_dates("1 ม.ค. 2560 วันออกบัตร31 ธ.ค. 2569"),
            Some(("1 ม.ค. 2560".to_string(), "31 ธ.ค. 2569".to_string()))
        );
    }

    #[test]
    fn test_card_dates_need_label() {
        assert_eq!(extract_card_dates("1 ม.ค. 2560 31 ธ.ค. 2569"), None);
    }

    #[test]
    fn test_parse_thai_dates() {
        assert_eq!(parse_card_date("12 มกราคม 2530"), NaiveDate::from_ymd_opt(1987, 1, 12));
        assert_eq!(parse_card_date("1 ม.ค. 2560"), NaiveDate::from_ymd_opt(2017, 1, 1));
        assert_eq!(parse_card_date("5 มื.ย. 2530"), NaiveDate::from_ymd_opt(1987, 6, 5));
    }

    #[test]
    fn test_parse_english_dates() {
        assert_eq!(parse_card_date("12 Jan. 1987"), NaiveDate::from_ymd_opt(1987, 1, 12));
        assert_eq!(parse_card_date("31 dec 2026"), NaiveDate::from_ymd_opt(2026, 12, 31));
    }

    #[test]
    fn test_parse_invalid_dates() {
        assert_eq!(parse_card_date("31 ก.พ. 2560"), None);
        assert_eq!(parse_card_date("12 foo 2530"), None);
        assert_eq!(parse_card_date("ตลอดชีพ"), None);
    }
}
