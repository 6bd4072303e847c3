//! Rule-based field extractors for Thai ID cards.
//!
//! Every field is recovered by an [`ExtractionRule`]: a primary pattern with
//! optional fallbacks, a mapping from capture groups to fields, and a named
//! transform per captured value. Rules are independent; each one searches the
//! whole cleaned text and keeps only its first match.

pub mod address;
pub mod citizen_id;
pub mod dates;
pub mod markers;
pub mod names;
pub mod patterns;
pub mod religion;

pub use address::{extract_address, extract_district, extract_province, extract_subdistrict, extract_village};
pub use citizen_id::extract_citizen_id;
pub use dates::{extract_card_dates, extract_dob, normalize_date_vowels, parse_card_date};
pub use names::{extract_english_lastname, extract_english_name, extract_thai_name, ThaiName};
pub use religion::extract_religion;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::models::record::FieldName;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}

/// Post-match transform applied to a captured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    /// Keep the capture as is.
    Verbatim,
    /// Trim surrounding whitespace.
    Trim,
    /// Remove every whitespace character.
    StripSpaces,
    /// Upper-case the first character, lower-case the rest.
    Capitalize,
    /// Trim, then fold OCR-confusable Thai vowels.
    CardDate,
}

impl Transform {
    pub fn apply(&self, value: &str) -> String {
        match self {
            Transform::Verbatim => value.to_string(),
            Transform::Trim => value.trim().to_string(),
            Transform::StripSpaces => value.chars().filter(|c| !c.is_whitespace()).collect(),
            Transform::Capitalize => capitalize(value),
            Transform::CardDate => normalize_date_vowels(value.trim()),
        }
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Where a captured group goes.
#[derive(Debug, Clone, Copy)]
pub struct Capture {
    pub group: usize,
    pub field: FieldName,
    pub transform: Transform,
}

impl Capture {
    pub const fn new(group: usize, field: FieldName, transform: Transform) -> Self {
        Self {
            group,
            field,
            transform,
        }
    }
}

/// One named extraction rule.
#[derive(Debug)]
pub struct ExtractionRule {
    name: &'static str,
    patterns: Vec<&'static Regex>,
    captures: Vec<Capture>,
}

impl ExtractionRule {
    pub fn new(name: &'static str, primary: &'static Regex, captures: Vec<Capture>) -> Self {
        Self {
            name,
            patterns: vec![primary],
            captures,
        }
    }

    /// Add a pattern tried only when every earlier one found nothing.
    pub fn with_fallback(mut self, pattern: &'static Regex) -> Self {
        self.patterns.push(pattern);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fields this rule writes.
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.captures.iter().map(|c| c.field)
    }

    /// First match of the first pattern that matches anywhere in `text`.
    ///
    /// With `use_fallbacks` off only the primary pattern is tried.
    pub fn find(&self, text: &str, use_fallbacks: bool) -> Option<ExtractionMatch> {
        let limit = if use_fallbacks { self.patterns.len() } else { 1 };

        self.patterns
            .iter()
            .take(limit)
            .enumerate()
            .find_map(|(index, pattern)| {
                let caps = pattern.captures(text)?;
                let full_match = caps.get(0)?;

                let values = self
                    .captures
                    .iter()
                    .filter_map(|c| {
                        caps.get(c.group)
                            .map(|m| (c.field, c.transform.apply(m.as_str())))
                    })
                    .collect();

                Some(ExtractionMatch {
                    rule: self.name,
                    values,
                    fallback: index > 0,
                    position: (full_match.start(), full_match.end()),
                    source: full_match.as_str().to_string(),
                })
            })
    }
}

impl FieldExtractor for ExtractionRule {
    type Output = ExtractionMatch;

    /// Primary pattern only, like the default parser.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.find(text, false)
    }
}

/// A rule that matched, with the values it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionMatch {
    /// Rule name.
    pub rule: &'static str,
    /// Transformed values per field.
    pub values: Vec<(FieldName, String)>,
    /// Whether a fallback pattern produced the match.
    pub fallback: bool,
    /// Byte span of the whole match in the cleaned text.
    pub position: (usize, usize),
    /// Text that was matched.
    pub source: String,
}

impl ExtractionMatch {
    /// Value produced for `field`, if any.
    pub fn value(&self, field: FieldName) -> Option<&str> {
        self.values
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }
}

lazy_static! {
    /// Every rule, in evaluation order.
    pub static ref RULES: Vec<ExtractionRule> = vec![
        citizen_id::rule(),
        names::thai_name_rule(),
        names::english_name_rule(),
        names::english_lastname_rule(),
        dates::dob_rule(),
        religion::rule(),
        address::address_rule(),
        address::village_rule(),
        address::subdistrict_rule(),
        address::district_rule(),
        address::province_rule(),
        dates::card_dates_rule(),
    ];
}

/// Look up a rule by name.
pub fn rule(name: &str) -> Option<&'static ExtractionRule> {
    RULES.iter().find(|r| r.name == name)
}
