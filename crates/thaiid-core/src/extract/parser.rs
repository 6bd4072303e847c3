//! ID card parser: normalization followed by the rule table.

use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::record::{ExtractionResponse, FieldName, IdCardRecord};
use crate::ocr::RecognizedText;

use super::normalize::{collapse_whitespace, normalize};
use super::rules::{ExtractionMatch, RULES};
use super::CardParser;

/// Result of ID card extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted fields.
    pub record: IdCardRecord,
    /// Fragments joined with single spaces, before normalization.
    pub full_text: String,
    /// Text the rules ran against.
    pub cleaned_text: String,
    /// Rules that matched, in evaluation order.
    pub matches: Vec<ExtractionMatch>,
    /// Fields no rule produced.
    pub missing_fields: Vec<FieldName>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl ExtractionResult {
    /// Document handed to transports.
    pub fn response(&self) -> ExtractionResponse {
        ExtractionResponse {
            full_text: self.full_text.clone(),
            fields: self.record.clone(),
        }
    }
}

/// Wall-clock timer for parse diagnostics.
///
/// `std::time::Instant` panics on wasm32-unknown-unknown, so there the timer
/// always reads zero.
struct Stopwatch {
    #[cfg(not(target_arch = "wasm32"))]
    started: std::time::Instant,
}

impl Stopwatch {
    fn start() -> Self {
        Self {
            #[cfg(not(target_arch = "wasm32"))]
            started: std::time::Instant::now(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    #[cfg(target_arch = "wasm32")]
    fn elapsed_ms(&self) -> u64 {
        0
    }
}

/// Rule-based ID card parser.
#[derive(Debug, Clone, Default)]
pub struct IdCardParser {
    config: ExtractionConfig,
}

impl IdCardParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Set whether fallback patterns are tried.
    pub fn with_fallbacks(mut self, enabled: bool) -> Self {
        self.config.use_fallbacks = enabled;
        self
    }

    /// Set whether whitespace runs are collapsed before matching.
    pub fn with_collapsed_whitespace(mut self, enabled: bool) -> Self {
        self.config.collapse_whitespace = enabled;
        self
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Normalize fragments the way this parser is configured to.
    pub fn clean<S: AsRef<str>>(&self, fragments: &[S]) -> String {
        let cleaned = normalize(fragments);
        if self.config.collapse_whitespace {
            collapse_whitespace(&cleaned)
        } else {
            cleaned
        }
    }

    fn run_rules(&self, cleaned: &str) -> (IdCardRecord, Vec<ExtractionMatch>) {
        let mut record = IdCardRecord::default();
        let mut matches = Vec::new();

        for rule in RULES.iter() {
            match rule.find(cleaned, self.config.use_fallbacks) {
                Some(m) => {
                    debug!(
                        rule = rule.name(),
                        fallback = m.fallback,
                        "Matched {:?} at {}..{}",
                        m.source,
                        m.position.0,
                        m.position.1
                    );
                    for (field, value) in &m.values {
                        *record.slot_mut(*field) = Some(value.clone());
                    }
                    matches.push(m);
                }
                None => debug!(rule = rule.name(), "No match"),
            }
        }

        (record, matches)
    }
}

impl CardParser for IdCardParser {
    fn parse(&self, text: &RecognizedText) -> ExtractionResult {
        let stopwatch = Stopwatch::start();

        let full_text = text.full_text();
        let cleaned_text = self.clean(text.fragments());

        info!(
            "Extracting ID card fields from {} fragments ({} characters)",
            text.len(),
            cleaned_text.chars().count()
        );

        let (record, matches) = self.run_rules(&cleaned_text);
        let missing_fields = record.missing_fields();

        debug!(
            "Extracted {} of {} fields",
            FieldName::ALL.len() - missing_fields.len(),
            FieldName::ALL.len()
        );

        ExtractionResult {
            record,
            full_text,
            cleaned_text,
            matches,
            missing_fields,
            processing_time_ms: stopwatch.elapsed_ms(),
        }
    }

    fn extract_from_text(&self, cleaned: &str) -> IdCardRecord {
        self.run_rules(cleaned).0
    }
}
