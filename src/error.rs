//! Error types and handling for the redaction pipeline.

use std::{io, result::Result as StdResult};

use thiserror::Error;

/// Custom result type for redaction operations
pub type Result<T> = StdResult<T, Error>;

/// Core error type for redaction operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Text extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    #[error("Redaction error: {0}")]
    Redaction(#[from] RedactionError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

// -------------------- Sub-Error Categories --------------------

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExtractionError {
    #[error("failed to read PDF: {0}")]
    Pdf(#[from] lopdf::Error),
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RenderError {
    /// PDFium could not be bound or failed while rendering a page.
    /// The pdfium error type has no Display impl, so callers stringify it.
    #[error("pdfium: {0}")]
    Pdfium(String),

    #[error("failed to write page image: {0}")]
    Image(#[from] image::ImageError),
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum OcrError {
    #[error("failed to initialize OCR engine: {0}")]
    Init(String),

    #[error("failed to load page image for OCR: {0}")]
    Read(String),

    #[error("failed to read recognized text: {0}")]
    Text(String),
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RedactionError {
    #[error("failed to load page image: {0}")]
    Image(#[from] image::ImageError),
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum OutputError {
    #[error("failed to encode page image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write output PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("failed to write output PDF: {0}")]
    Io(#[from] std::io::Error),
}
