//! Output document assembly.
//!
//! JPEG-encodes every redacted page and embeds each one as the sole
//! image XObject of a fresh PDF page, sized so the pixel raster maps to
//! the configured output resolution. Pages keep their original order.

use std::io::Cursor;
use std::path::Path;

use image::RgbImage;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use tracing::info;

use crate::error::OutputError;

const POINTS_PER_INCH: f64 = 72.0;
const JPEG_QUALITY: u8 = 90;

/// Writes `pages` as one multi-page PDF at `dpi`.
pub fn write_pdf(pages: &[RgbImage], path: &Path, dpi: f32) -> Result<(), OutputError> {
    let mut document = Document::with_version("1.5");
    let pages_id = document.new_object_id();
    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());

    for page in pages {
        let (width, height) = page.dimensions();
        let point_width = pixels_to_points(width, dpi);
        let point_height = pixels_to_points(height, dpi);

        let mut jpeg = Vec::new();
        page.write_to(
            &mut Cursor::new(&mut jpeg),
            image::ImageOutputFormat::Jpeg(JPEG_QUALITY),
        )?;

        let image_id = document.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width as i64,
                "Height" => height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            },
            jpeg,
        ));

        // Scale the unit image square up to the full page
        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        point_width.into(),
                        0.into(),
                        0.into(),
                        point_height.into(),
                        0.into(),
                        0.into(),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(b"Im0".to_vec())]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_id = document.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), point_width.into(), point_height.into()],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => dictionary! { "Im0" => image_id },
            },
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    document.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
        }),
    );

    let catalog_id = document.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    document.trailer.set("Root", catalog_id);

    document.save(path)?;
    info!("Wrote {} pages to {}", page_count, path.display());
    Ok(())
}

/// Page-space size of a raster dimension, rounded to whole points.
fn pixels_to_points(pixels: u32, dpi: f32) -> i64 {
    (f64::from(pixels) * POINTS_PER_INCH / f64::from(dpi)).round() as i64
}
