//! Text extraction from the source PDF.

use std::path::Path;

use lopdf::Document;
use tracing::debug;

use crate::error::ExtractionError;

/// Extracts the text of every page, concatenated in page order.
///
/// Failures (malformed or encrypted documents) propagate to the caller;
/// there is no partial-result recovery.
pub fn extract_text(path: &Path) -> Result<String, ExtractionError> {
    let document = Document::load(path)?;

    let mut text = String::new();
    for page_number in document.get_pages().keys() {
        text.push_str(&document.extract_text(&[*page_number])?);
    }

    debug!("Extracted {} characters of text", text.len());
    Ok(text)
}
