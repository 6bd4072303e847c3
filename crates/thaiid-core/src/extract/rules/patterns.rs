//! Compiled patterns for Thai ID card extraction.
//!
//! Every pattern runs against lower-cased cleaned text.

use lazy_static::lazy_static;
use regex::Regex;

use super::markers::{
    self, BIRTH_DATE_LABELS, DISTRICT, ENGLISH_TITLES, ISSUE_DATE_LABEL,
    PROVINCE, RELIGION_LABEL, SUBDISTRICT, VILLAGE,
};

/// Day, Thai or Latin month (full or dotted abbreviation), four-digit year.
pub const DATE_TOKEN: &str = r"[0-9]{1,2}\s*[ก-๙a-z.]+\s*[0-9]{4}";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

lazy_static! {
    // 13 digits, optionally grouped 1-4-5-2-1
    pub static ref CITIZEN_ID: Regex = compile(
        r"\b\d\s?\d{4}\s?\d{5}\s?\d{2}\s?\d\b"
    );

    pub static ref THAI_NAME: Regex = compile(&format!(
        r"({})\s*([ก-๙]+)\s+([ก-๙]+)",
        markers::thai_title_alternation()
    ));

    pub static ref ENGLISH_NAME: Regex = compile(&format!(
        r"\b({})\.?[\s:]+([a-z]+)",
        ENGLISH_TITLES.join("|")
    ));

    pub static ref ENGLISH_LASTNAME: Regex = compile(
        r"last\s+name[\s:]+([a-z]+)"
    );

    // Date printed before its label
    pub static ref BIRTH_DATE: Regex = compile(&format!(
        r"({DATE_TOKEN}).{{0,20}}({})",
        markers::alternation(BIRTH_DATE_LABELS.iter().copied())
    ));

    // Label printed before its date; nearest date wins
    pub static ref BIRTH_DATE_LABEL_FIRST: Regex = compile(&format!(
        r"(?:{}).{{0,20}}?({DATE_TOKEN})",
        markers::alternation(BIRTH_DATE_LABELS.iter().copied())
    ));

    pub static ref RELIGION: Regex = compile(&format!(
        r"{}\s*([ก-๙a-z]+)",
        regex::escape(RELIGION_LABEL)
    ));

    pub static ref ADDRESS: Regex = compile(&format!(
        r"(\d{{1,4}}/\d{{1,4}}.*?)\s+({})",
        markers::alternation(markers::address_terminators())
    ));

    pub static ref VILLAGE_NUMBER: Regex = compile(&format!(
        r"({})\.?\s*(\d{{1,2}})",
        VILLAGE.alternation()
    ));

    pub static ref SUBDISTRICT_NAME: Regex = compile(&format!(
        r"({})\s*([ก-๙]+)",
        SUBDISTRICT.alternation()
    ));

    pub static ref DISTRICT_NAME: Regex = compile(&format!(
        r"({})\s*([ก-๙]+)",
        DISTRICT.alternation()
    ));

    pub static ref PROVINCE_NAME: Regex = compile(&format!(
        r"({})\s*([ก-๙]+)",
        PROVINCE.alternation()
    ));

    // Issue date, label, expiry date. The expiry gap is greedy but must not end
    // inside a number, so a two-digit day is never cut in half.
    pub static ref CARD_DATES: Regex = compile(&format!(
        r"({DATE_TOKEN}).{{0,30}}{}(?:.{{0,29}}[^0-9])?({DATE_TOKEN})",
        regex::escape(ISSUE_DATE_LABEL)
    ));

    // Split a single date token into day, month, year
    pub static ref DATE_PARTS: Regex = compile(
        r"^([0-9]{1,2})\s*([ก-๙a-z.]+?)\s*([0-9]{4})$"
    );
}
