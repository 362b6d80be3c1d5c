//! Configuration for the redaction pipeline.

use serde::{Deserialize, Serialize};

/// Global pipeline execution config.
///
/// Defaults reproduce the tuning the pipeline was calibrated with:
/// a 5 px margin around every matched word, a strong (sigma 15) blur,
/// 200 dpi rasterization for OCR and a 100 dpi output document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Standard deviation of the Gaussian blur applied to matched regions
    pub blur_sigma: f32,
    /// Pixels added on each side of an OCR word box before blurring
    pub box_margin: i32,
    /// Resolution pages are rasterized at for OCR, in dots per inch
    pub render_dpi: f32,
    /// Resolution the reassembled output PDF is written at
    pub output_dpi: f32,
    /// Name tokens shorter than this are not redacted on their own
    pub min_name_token_len: usize,
    /// Minimum candidate length for plain substring matches inside a word;
    /// shorter candidates must sit on a word boundary
    pub min_substring_len: usize,
    /// Tesseract language code
    pub ocr_language: String,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            blur_sigma: 15.0,
            box_margin: 5,
            render_dpi: 200.0,
            output_dpi: 100.0,
            min_name_token_len: 3,
            min_substring_len: 4,
            ocr_language: "eng".to_string(),
        }
    }
}
