//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the thaiid pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThaiIdConfig {
    /// OCR input handling.
    pub input: InputConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// How OCR engine output is turned into fragments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Drop boxes whose recognition confidence is below this value (0.0 - 1.0).
    pub min_confidence: f32,

    /// Reorder boxes top-to-bottom, left-to-right instead of keeping the engine order.
    pub sort_reading_order: bool,

    /// Vertical distance (pixels) under which two boxes count as the same row.
    pub row_tolerance: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.0,
            sort_reading_order: false,
            row_tolerance: 20.0,
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Collapse runs of whitespace in the cleaned text.
    pub collapse_whitespace: bool,

    /// Try secondary patterns when a field's primary pattern finds nothing.
    /// Off by default, so every field follows its primary pattern only.
    pub use_fallbacks: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            collapse_whitespace: false,
            use_fallbacks: false,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty: bool,

    /// Report validation issues after extraction.
    pub validate: bool,
}

impl ThaiIdConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
