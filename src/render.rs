//! PDF page rasterization.
//!
//! Renders every page of the input document into a PNG in the run's
//! scratch directory, at the OCR resolution. Pixel data is pulled out of
//! PDFium as raw BGRA bytes and repacked into an RGB buffer, keeping the
//! raster stage independent of the image-crate version PDFium links
//! against.

use std::path::Path;

use image::{Rgb, RgbImage};
use pdfium_render::prelude::*;
use tracing::{debug, info};

use crate::error::RenderError;
use crate::types::PageImage;

const POINTS_PER_INCH: f32 = 72.0;

/// Rasterizer backed by a PDFium binding.
pub struct PageRenderer {
    pdfium: Pdfium,
}

impl PageRenderer {
    /// Binds PDFium from the current directory first, then falls back to
    /// the system library.
    pub fn new() -> Result<Self, RenderError> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| RenderError::Pdfium(format!("failed to load PDFium library: {e:?}")))?;

        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }

    /// Renders all pages of `pdf_path` into `scratch_dir` as
    /// `page_<index>.png`, in page order.
    pub fn render_pages(
        &self,
        pdf_path: &Path,
        scratch_dir: &Path,
        dpi: f32,
    ) -> Result<Vec<PageImage>, RenderError> {
        let document = self
            .pdfium
            .load_pdf_from_file(pdf_path, None)
            .map_err(|e| RenderError::Pdfium(format!("failed to open {}: {e:?}", pdf_path.display())))?;

        // default bitmap format is four-byte BGRA
        let render_config = PdfRenderConfig::new().scale_page_by_factor(dpi / POINTS_PER_INCH);

        let mut pages = Vec::new();
        for (index, page) in document.pages().iter().enumerate() {
            let bitmap = page
                .render_with_config(&render_config)
                .map_err(|e| RenderError::Pdfium(format!("failed to render page {}: {e:?}", index + 1)))?;

            let image = bgra_to_rgb(bitmap.width() as u32, bitmap.height() as u32, &bitmap.as_bytes());
            let path = scratch_dir.join(format!("page_{index}.png"));
            image.save(&path)?;

            debug!("Rendered page {} to {}", index + 1, path.display());
            pages.push(PageImage { index, path });
        }

        info!("Rendered {} pages at {} dpi", pages.len(), dpi);
        Ok(pages)
    }
}

fn bgra_to_rgb(width: u32, height: u32, bytes: &[u8]) -> RgbImage {
    let mut image = RgbImage::new(width, height);
    for (i, pixel) in image.pixels_mut().enumerate() {
        let p = &bytes[i * 4..i * 4 + 4];
        *pixel = Rgb([p[2], p[1], p[0]]);
    }
    image
}
