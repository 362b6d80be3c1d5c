//! Redaction pipeline — stage-by-stage execution.
//!
//! Four stages run strictly downstream with no retry, checkpoint or
//! rollback: text extraction, sensitive-item derivation, per-page
//! rasterization + word location, and blur + reassembly. The candidate
//! list is derived once, before any page work, and applied uniformly to
//! every page.

use std::path::Path;

use tracing::{info, instrument};

use crate::config::ProcessingConfig;
use crate::detect;
use crate::error::{RedactionError, Result};
use crate::extract;
use crate::ocr::{CandidateSet, WordLocator};
use crate::output;
use crate::redact;
use crate::render::PageRenderer;

/// Orchestrates one redaction run.
#[derive(Debug)]
pub struct Pipeline {
    config: ProcessingConfig,
}

impl Pipeline {
    /// Creates a new pipeline with the given configuration
    pub fn new(config: ProcessingConfig) -> Self {
        Self { config }
    }

    /// Executes the complete pipeline: reads `input`, blurs every region
    /// matching `full_name` or a detected identifier, and writes the
    /// redacted document to `output`.
    ///
    /// Page images are staged in a scratch directory scoped to this run
    /// and removed on every exit path, including errors.
    #[instrument(skip(self))]
    pub async fn execute(&self, input: &Path, output_path: &Path, full_name: &str) -> Result<()> {
        let text = extract::extract_text(input)?;
        let items = detect::find_sensitive_items(&text, full_name, &self.config);
        info!("Found {} items to redact", items.len());
        let candidates = CandidateSet::compile(&items, self.config.min_substring_len);

        let scratch = tempfile::tempdir()?;
        let renderer = PageRenderer::new()?;
        let pages = renderer.render_pages(input, scratch.path(), self.config.render_dpi)?;

        let mut locator = WordLocator::new(&self.config)?;
        let mut redacted = Vec::with_capacity(pages.len());

        for page in &pages {
            info!("Processing page {}...", page.index + 1);
            let boxes = locator.locate(page, &candidates)?;
            info!("  Found {} areas to blur on this page", boxes.len());

            let raster = image::open(&page.path)
                .map_err(RedactionError::from)?
                .into_rgb8();
            if boxes.is_empty() {
                redacted.push(raster);
            } else {
                redacted.push(redact::blur_regions(&raster, &boxes, self.config.blur_sigma));
            }
        }

        output::write_pdf(&redacted, output_path, self.config.output_dpi)?;
        info!("Redacted PDF saved to {}", output_path.display());
        Ok(())
    }
}
