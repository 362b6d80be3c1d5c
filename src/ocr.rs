//! Word-location matching via OCR.
//!
//! Segments a rasterized page into word boxes, reads the text of each
//! box, and tests every recognized word against the candidate list. The
//! matching heuristic deliberately tolerates OCR concatenation (a name
//! glued to adjacent punctuation) while refusing to blur on very short
//! substrings: a candidate under the configured length only matches
//! inside a word when it sits on a word boundary.

use leptess::{capi, LepTess};
use regex::Regex;
use tracing::debug;

use crate::config::ProcessingConfig;
use crate::error::OcrError;
use crate::types::{BoundingBox, PageImage, SensitiveItem};

/// One compiled candidate. Short candidates carry their word-boundary
/// pattern, compiled once per run rather than per recognized word.
struct Candidate {
    lowered: String,
    boundary: Option<Regex>,
}

/// The candidate list compiled for matching, applied uniformly to every
/// page of a run.
pub struct CandidateSet {
    candidates: Vec<Candidate>,
}

impl CandidateSet {
    /// Compiles `items` in order. Empty items are dropped; they can
    /// never match a word.
    pub fn compile(items: &[SensitiveItem], min_substring_len: usize) -> Self {
        let candidates = items
            .iter()
            .filter(|item| !item.is_empty())
            .map(|item| {
                let lowered = item.as_str().to_lowercase();
                let boundary = if item.char_len() < min_substring_len {
                    Regex::new(&format!(r"\b{}\b", regex::escape(&lowered))).ok()
                } else {
                    None
                };
                Candidate { lowered, boundary }
            })
            .collect();

        Self { candidates }
    }

    /// Case-insensitive word test: exact equality, or the candidate
    /// appears inside the word and is either long enough to be
    /// unambiguous or bounded by word boundaries within it. Candidates
    /// are tried in order and the first match wins.
    pub fn matches(&self, word: &str) -> bool {
        let word_lower = word.to_lowercase();

        self.candidates.iter().any(|candidate| {
            if word_lower == candidate.lowered {
                return true;
            }
            if !word_lower.contains(&candidate.lowered) {
                return false;
            }
            match &candidate.boundary {
                // long enough for the plain substring rule
                None => true,
                Some(re) => re.is_match(&word_lower),
            }
        })
    }
}

/// OCR-backed locator for sensitive words on rendered pages.
///
/// Holds one Tesseract engine for the whole run; pages are fed to it
/// sequentially.
pub struct WordLocator {
    engine: LepTess,
    box_margin: i32,
}

impl WordLocator {
    pub fn new(config: &ProcessingConfig) -> Result<Self, OcrError> {
        let engine = LepTess::new(None, &config.ocr_language)
            .map_err(|e| OcrError::Init(e.to_string()))?;

        Ok(Self {
            engine,
            box_margin: config.box_margin,
        })
    }

    /// Finds the expanded bounding boxes of every recognized word on the
    /// page that matches a candidate. A word never produces more than
    /// one box.
    pub fn locate(
        &mut self,
        page: &PageImage,
        candidates: &CandidateSet,
    ) -> Result<Vec<BoundingBox>, OcrError> {
        self.engine
            .set_image(&page.path)
            .map_err(|e| OcrError::Read(e.to_string()))?;

        let word_boxes = match self
            .engine
            .get_component_boxes(capi::TessPageIteratorLevel_RIL_WORD, true)
        {
            Some(boxes) => boxes,
            // Tesseract found nothing it considers a word (blank page)
            None => return Ok(Vec::new()),
        };

        let mut positions = Vec::new();

        for word_box in &word_boxes {
            let b = word_box.get_geometry();
            self.engine.set_rectangle(b.x, b.y, b.w, b.h);
            let text = self
                .engine
                .get_utf8_text()
                .map_err(|e| OcrError::Text(e.to_string()))?;

            let word = text.trim();
            if word.is_empty() {
                continue;
            }

            if candidates.matches(word) {
                positions.push(BoundingBox::from_word_box(
                    b.x,
                    b.y,
                    b.w,
                    b.h,
                    self.box_margin,
                ));
            }
        }

        debug!("Page {}: {} words matched", page.index + 1, positions.len());
        Ok(positions)
    }
}
