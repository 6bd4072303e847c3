//! OCR engine output: text boxes and the recognized text fed to extraction.
//!
//! The OCR engine itself lives outside this crate. It hands us either plain
//! strings or `(bbox, text, confidence)` triples; this module turns those into
//! a [`RecognizedText`], rejecting input that breaks the fragment contract.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{InputError, Result};
use crate::models::config::InputConfig;

/// A detected text box with its coordinates and content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBox {
    /// Bounding box coordinates (x1, y1, x2, y2, x3, y3, x4, y4) for quadrilateral.
    pub bbox: [f32; 8],

    /// Recognized text content.
    pub text: String,

    /// Recognition confidence score (0.0 - 1.0).
    pub confidence: f32,
}

impl TextBox {
    pub fn new(bbox: [f32; 8], text: impl Into<String>, confidence: f32) -> Self {
        Self {
            bbox,
            text: text.into(),
            confidence,
        }
    }

    /// Get the center point of the bounding box.
    pub fn center(&self) -> (f32, f32) {
        let x = (self.bbox[0] + self.bbox[2] + self.bbox[4] + self.bbox[6]) / 4.0;
        let y = (self.bbox[1] + self.bbox[3] + self.bbox[5] + self.bbox[7]) / 4.0;
        (x, y)
    }

    /// Get the axis-aligned bounding rectangle.
    pub fn rect(&self) -> (f32, f32, f32, f32) {
        let xs = [self.bbox[0], self.bbox[2], self.bbox[4], self.bbox[6]];
        let ys = [self.bbox[1], self.bbox[3], self.bbox[5], self.bbox[7]];

        let min_x = xs.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_x = xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let min_y = ys.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_y = ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max);

        (min_x, min_y, max_x, max_y)
    }
}

/// Sort boxes by reading order (top-to-bottom, left-to-right).
///
/// Boxes whose top edges fall in the same `row_tolerance` band are treated as
/// one row.
pub fn sort_by_reading_order(boxes: &mut [TextBox], row_tolerance: f32) {
    let tolerance = row_tolerance.max(1.0);
    boxes.sort_by(|a, b| {
        let (ax, ay, _, _) = a.rect();
        let (bx, by, _, _) = b.rect();

        let row_a = (ay / tolerance) as i32;
        let row_b = (by / tolerance) as i32;

        if row_a != row_b {
            row_a.cmp(&row_b)
        } else {
            ax.partial_cmp(&bx).unwrap_or(std::cmp::Ordering::Equal)
        }
    });
}

/// Ordered text fragments recognized on one card image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecognizedText {
    fragments: Vec<String>,
}

impl RecognizedText {
    /// Wrap fragments in the order supplied.
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fragments: fragments.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from fragments that may be missing, failing on the first null.
    pub fn from_optional<I>(fragments: I) -> std::result::Result<Self, InputError>
    where
        I: IntoIterator<Item = Option<String>>,
    {
        fragments
            .into_iter()
            .enumerate()
            .map(|(index, f)| f.ok_or(InputError::NullFragment { index }))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(|fragments| Self { fragments })
    }

    /// Build from OCR boxes, applying the confidence filter and optional sort.
    pub fn from_boxes(mut boxes: Vec<TextBox>, config: &InputConfig) -> Self {
        let total = boxes.len();
        boxes.retain(|b| b.confidence >= config.min_confidence);
        if boxes.len() < total {
            debug!(
                "Dropped {} of {} boxes below confidence {}",
                total - boxes.len(),
                total,
                config.min_confidence
            );
        }

        if config.sort_reading_order {
            sort_by_reading_order(&mut boxes, config.row_tolerance);
        }

        Self::new(boxes.into_iter().map(|b| b.text))
    }

    /// Parse OCR engine output serialized as JSON.
    ///
    /// Accepted shapes: an array of strings, an array of
    /// `{"bbox", "text", "confidence"}` objects, an array of
    /// `[bbox, text, confidence]` triples, or any of those wrapped as
    /// `{"fragments": [...]}`. A bbox is either 8 numbers or 4 `[x, y]` points.
    pub fn from_json(json: &str, config: &InputConfig) -> Result<Self> {
        let document: RawDocument = serde_json::from_str(json)
            .map_err(|e| InputError::Malformed(e.to_string()))?;

        let items = match document {
            RawDocument::List(items) => items,
            RawDocument::Wrapped { fragments } => fragments,
        };

        let mut texts = Vec::new();
        let mut boxes = Vec::new();
        for (index, item) in items.into_iter().enumerate() {
            match item {
                None => return Err(InputError::NullFragment { index }.into()),
                Some(RawFragment::Text(text)) => texts.push(text),
                Some(RawFragment::Triple(bbox, text, confidence)) => {
                    boxes.push(TextBox::new(bbox.into(), text, confidence))
                }
                Some(RawFragment::Box {
                    bbox,
                    text,
                    confidence,
                }) => boxes.push(TextBox::new(bbox.into(), text, confidence)),
            }
        }

        match (texts.is_empty(), boxes.is_empty()) {
            (_, true) => Ok(Self::new(texts)),
            (true, false) => Ok(Self::from_boxes(boxes, config)),
            (false, false) => Err(InputError::Malformed(
                "plain strings mixed with text boxes".to_string(),
            )
            .into()),
        }
    }

    /// Plain text with one fragment per line. Blank lines are skipped.
    pub fn from_lines(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(|l| l.trim_end_matches('\r'))
                .filter(|l| !l.trim().is_empty()),
        )
    }

    /// The fragments, in order.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Fragments joined with a single space, untouched otherwise.
    pub fn full_text(&self) -> String {
        self.fragments.join(" ")
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDocument {
    List(Vec<Option<RawFragment>>),
    Wrapped { fragments: Vec<Option<RawFragment>> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFragment {
    Text(String),
    Triple(Quad, String, f32),
    Box {
        bbox: Quad,
        text: String,
        #[serde(default = "default_confidence")]
        confidence: f32,
    },
}

fn default_confidence() -> f32 {
    1.0
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Quad {
    Flat([f32; 8]),
    Points([[f32; 2]; 4]),
}

impl From<Quad> for [f32; 8] {
    fn from(quad: Quad) -> Self {
        match quad {
            Quad::Flat(coords) => coords,
            Quad::Points(p) => [
                p[0][0], p[0][1], p[1][0], p[1][1], p[2][0], p[2][1], p[3][0], p[3][1],
            ],
        }
    }
}
