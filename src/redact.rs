//! Localized blur compositing.
//!
//! Each bounding box gets its own pass: a same-size mask with a filled
//! white rectangle, a full-image Gaussian blur, and a composite of the
//! blurred image into the page wherever the mask is set. Overlapping
//! boxes therefore compound blur strength, since every pass blurs the
//! already-composited page rather than the pristine original.

use image::{imageops, GrayImage, Luma, RgbImage};

use crate::types::BoundingBox;

/// Blurs the boxed regions of one page. Pixels outside every box are
/// returned untouched; an empty box list yields an identical copy.
pub fn blur_regions(page: &RgbImage, boxes: &[BoundingBox], sigma: f32) -> RgbImage {
    let mut composed = page.clone();

    for bounding_box in boxes {
        let mask = rect_mask(composed.dimensions(), bounding_box);
        let blurred = imageops::blur(&composed, sigma);

        for (x, y, pixel) in composed.enumerate_pixels_mut() {
            if mask.get_pixel(x, y) != &Luma([0u8]) {
                *pixel = *blurred.get_pixel(x, y);
            }
        }
    }

    composed
}

/// Mask with a filled white rectangle at the box, clipped to the page.
fn rect_mask((width, height): (u32, u32), bounding_box: &BoundingBox) -> GrayImage {
    let mut mask = GrayImage::new(width, height);

    let x0 = bounding_box.x.min(width);
    let y0 = bounding_box.y.min(height);
    let x1 = bounding_box.x.saturating_add(bounding_box.width).min(width);
    let y1 = bounding_box.y.saturating_add(bounding_box.height).min(height);

    for y in y0..y1 {
        for x in x0..x1 {
            mask.put_pixel(x, y, Luma([255u8]));
        }
    }

    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            if (x / 4 + y / 4) % 2 == 0 {
                image::Rgb([255, 255, 255])
            } else {
                image::Rgb([0, 0, 0])
            }
        })
    }

    fn region_variance(image: &RgbImage, b: &BoundingBox) -> f64 {
        let mut values = Vec::new();
        for y in b.y..(b.y + b.height).min(image.height()) {
            for x in b.x..(b.x + b.width).min(image.width()) {
                values.push(image.get_pixel(x, y)[0] as f64);
            }
        }
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
    }

    #[test]
    fn test_no_boxes_is_identity() {
        let page = checkerboard(64, 48);
        let out = blur_regions(&page, &[], 15.0);
        assert_eq!(page, out);
    }

    #[test]
    fn test_pixels_outside_box_untouched() {
        let page = checkerboard(96, 64);
        let b = BoundingBox { x: 20, y: 16, width: 32, height: 16 };
        let out = blur_regions(&page, &[b], 15.0);

        for (x, y, pixel) in page.enumerate_pixels() {
            let inside = x >= b.x && x < b.x + b.width && y >= b.y && y < b.y + b.height;
            if !inside {
                assert_eq!(pixel, out.get_pixel(x, y), "pixel changed at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_boxed_region_is_blurred() {
        let page = checkerboard(96, 64);
        let b = BoundingBox { x: 20, y: 16, width: 32, height: 16 };
        let out = blur_regions(&page, &[b], 15.0);

        let before = region_variance(&page, &b);
        let after = region_variance(&out, &b);
        assert!(after < before, "variance not reduced: {after} >= {before}");
    }

    #[test]
    fn test_box_clipped_to_page() {
        // box hanging off the bottom-right corner must not panic
        let page = checkerboard(40, 40);
        let b = BoundingBox { x: 30, y: 30, width: 50, height: 50 };
        let out = blur_regions(&page, &[b], 15.0);
        assert_eq!(out.dimensions(), (40, 40));
    }
}
