//! Shared type definitions for the redaction pipeline.

use std::path::PathBuf;

/// A single string candidate for redaction: the full name, a name
/// fragment, an email address, a profile URL or a phone number.
///
/// Candidates are collected into an ordered list; duplicates are
/// tolerated and iterated linearly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensitiveItem(String);

impl SensitiveItem {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Character count, used by the substring-match length rule
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

/// Axis-aligned pixel rectangle marking a region to blur on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// Builds a box from an OCR-reported word rectangle, expanded by
    /// `margin` pixels on each side. The origin saturates at zero while
    /// width and height always grow by the full `2 * margin`, so a box
    /// near the page edge keeps its expanded size.
    pub fn from_word_box(x: i32, y: i32, width: i32, height: i32, margin: i32) -> Self {
        Self {
            x: (x - margin).max(0) as u32,
            y: (y - margin).max(0) as u32,
            width: (width + 2 * margin).max(0) as u32,
            height: (height + 2 * margin).max(0) as u32,
        }
    }
}

/// One rasterized PDF page, staged as a PNG in the run's scratch
/// directory. Removed together with the scratch directory once the
/// output document has been written.
#[derive(Debug, Clone)]
pub struct PageImage {
    /// Zero-based page index in the source document
    pub index: usize,
    /// Path of the staged PNG
    pub path: PathBuf,
}
