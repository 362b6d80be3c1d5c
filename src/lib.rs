//! OCR-driven PII redaction for rendered PDFs.
//!
//! Provides a linear, pipeline-based architecture for blurring personally
//! identifying information (names, emails, profile links, phone numbers)
//! out of a PDF: extract text, derive sensitive strings, rasterize each
//! page, locate matching words via OCR, blur the matched regions, and
//! reassemble the pages into a single output PDF.

// Configuration and core pipeline
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

// Stage 1: text extraction
pub mod extract;

// Stage 2: sensitive-item derivation
pub mod detect;

// Stage 3: rasterization and word location
pub mod ocr;
pub mod render;

// Stage 4: blur and reassembly
pub mod output;
pub mod redact;

// Re-exports for crate consumers
pub use config::ProcessingConfig;
pub use error::{Error, Result};
pub use pipeline::Pipeline;
pub use types::{BoundingBox, PageImage, SensitiveItem};
