//! WASM bindings for Thai national ID card field extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.
//! OCR runs on the JavaScript side; these bindings take its output.

use wasm_bindgen::prelude::*;

use thaiid_core::{
    CardParser, ExtractionResponse, IdCardParser, InputConfig, InputError, RecognizedText, TextBox,
};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn fragments_from_js(fragments: JsValue) -> Result<RecognizedText, JsValue> {
    let raw: Vec<Option<String>> =
        serde_wasm_bindgen::from_value(fragments).map_err(to_js_error)?;
    recognized_text(raw).map_err(to_js_error)
}

fn recognized_text(raw: Vec<Option<String>>) -> Result<RecognizedText, InputError> {
    RecognizedText::from_optional(raw)
}

/// Extract card fields from an array of OCR text fragments.
///
/// Returns `{ full_text, fields }` with every field present, `null` when not found.
/// Throws if any fragment is `null`.
#[wasm_bindgen(js_name = extractFields)]
pub fn extract_fields(fragments: JsValue) -> Result<JsValue, JsValue> {
    let text = fragments_from_js(fragments)?;
    let response = IdCardParser::new().parse(&text).response();

    serde_wasm_bindgen::to_value(&response).map_err(to_js_error)
}

/// Normalized text the extraction rules run against.
#[wasm_bindgen(js_name = normalizeText)]
pub fn normalize_text(fragments: JsValue) -> Result<String, JsValue> {
    let text = fragments_from_js(fragments)?;
    Ok(thaiid_core::normalize(text.fragments()))
}

/// ID card extractor class for browser use.
#[wasm_bindgen]
pub struct CardExtractor {
    parser: IdCardParser,
}

#[wasm_bindgen]
impl CardExtractor {
    /// Create a new card extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: IdCardParser::new(),
        }
    }

    /// Configure whether fallback patterns are tried.
    #[wasm_bindgen(js_name = setUseFallbacks)]
    pub fn set_use_fallbacks(&mut self, enabled: bool) {
        self.parser = self.parser.clone().with_fallbacks(enabled);
    }

    /// Configure whether whitespace runs are collapsed before matching.
    #[wasm_bindgen(js_name = setCollapseWhitespace)]
    pub fn set_collapse_whitespace(&mut self, enabled: bool) {
        self.parser = self.parser.clone().with_collapsed_whitespace(enabled);
    }

    /// Extract fields from text fragments.
    #[wasm_bindgen]
    pub fn extract(&self, fragments: JsValue) -> Result<JsValue, JsValue> {
        let text = fragments_from_js(fragments)?;
        serde_wasm_bindgen::to_value(&self.parser.parse(&text).response()).map_err(to_js_error)
    }

    /// Get extraction result with metadata.
    #[wasm_bindgen(js_name = extractWithMetadata)]
    pub fn extract_with_metadata(&self, fragments: JsValue) -> Result<JsValue, JsValue> {
        let text = fragments_from_js(fragments)?;
        let result = self.parser.parse(&text);

        #[derive(serde::Serialize)]
        struct ExtractResult<'a> {
            #[serde(flatten)]
            response: ExtractionResponse,
            cleaned_text: &'a str,
            matches: &'a [thaiid_core::extract::rules::ExtractionMatch],
            missing_fields: Vec<&'static str>,
            processing_time_ms: u64,
        }

        let output = ExtractResult {
            response: result.response(),
            cleaned_text: &result.cleaned_text,
            matches: &result.matches,
            missing_fields: result.missing_fields.iter().map(|f| f.as_str()).collect(),
            processing_time_ms: result.processing_time_ms,
        };

        serde_wasm_bindgen::to_value(&output).map_err(to_js_error)
    }
}

impl Default for CardExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// OCR result from browser-side processing, built box by box.
#[wasm_bindgen]
pub struct OcrResultJs {
    boxes: Vec<TextBox>,
    config: InputConfig,
}

#[wasm_bindgen]
impl OcrResultJs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            boxes: Vec::new(),
            config: InputConfig::default(),
        }
    }

    /// Add a text box to the result.
    #[wasm_bindgen(js_name = addBox)]
    #[allow(clippy::too_many_arguments)]
    pub fn add_box(
        &mut self,
        text: &str,
        x1: f32, y1: f32,
        x2: f32, y2: f32,
        x3: f32, y3: f32,
        x4: f32, y4: f32,
        confidence: f32,
    ) {
        self.boxes
            .push(TextBox::new([x1, y1, x2, y2, x3, y3, x4, y4], text, confidence));
    }

    /// Drop boxes below this confidence.
    #[wasm_bindgen(js_name = setMinConfidence)]
    pub fn set_min_confidence(&mut self, min_confidence: f32) {
        self.config.min_confidence = min_confidence;
    }

    /// Reorder boxes top-to-bottom, left-to-right before joining.
    #[wasm_bindgen(js_name = setSortReadingOrder)]
    pub fn set_sort_reading_order(&mut self, enabled: bool) {
        self.config.sort_reading_order = enabled;
    }

    fn recognized(&self) -> RecognizedText {
        RecognizedText::from_boxes(self.boxes.clone(), &self.config)
    }

    /// Get the full text.
    #[wasm_bindgen(js_name = getText)]
    pub fn get_text(&self) -> String {
        self.recognized().full_text()
    }

    /// Extract card fields from this OCR result.
    #[wasm_bindgen(js_name = extractFields)]
    pub fn extract_fields(&self) -> Result<JsValue, JsValue> {
        let response = IdCardParser::new().parse(&self.recognized()).response();
        serde_wasm_bindgen::to_value(&response).map_err(to_js_error)
    }
}

impl Default for OcrResultJs {
    fn default() -> Self {
        Self::new()
    }
}
