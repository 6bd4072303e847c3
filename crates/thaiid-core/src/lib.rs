//! Core library for Thai national ID card OCR processing.
//!
//! This crate provides:
//! - Parsing of OCR engine output into ordered text fragments
//! - Normalization of systematic OCR misreads
//! - Rule-based extraction of the 15 card fields (citizen ID, names, dates, address)
//! - Card record model with date parsing and validation

pub mod error;
pub mod extract;
pub mod models;
pub mod ocr;

pub use error::{InputError, Result, ThaiIdError};
pub use extract::{extract, extract_fields, normalize, CardParser, ExtractionResult, IdCardParser};
pub use models::config::{ExtractionConfig, InputConfig, OutputConfig, ThaiIdConfig};
pub use models::record::{ExtractionResponse, FieldName, IdCardRecord};
pub use ocr::{RecognizedText, TextBox};
