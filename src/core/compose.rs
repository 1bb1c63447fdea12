// macicon - core/compose.rs
//
// Pixel pipeline for one icon: resize the whole source, clip, then place it
// on a transparent canvas. No filesystem access.

use crate::core::geometry::RenderTarget;
use crate::core::mask;
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Render `source` into the canvas described by `target`.
pub fn compose_icon(source: &RgbaImage, target: &RenderTarget) -> RgbaImage {
    let mut content = imageops::resize(
        source,
        target.inner_width,
        target.inner_height,
        FilterType::Lanczos3,
    );

    if target.has_rounded_corners() {
        let clip = mask::rounded_rect_mask(
            target.inner_width,
            target.inner_height,
            target.corner_radius_px,
        );
        mask::apply_mask(&mut content, &clip);
    }

    // `RgbaImage::new` is zero-filled, i.e. fully transparent.
    let mut canvas = RgbaImage::new(target.target_width, target.target_height);
    let offset = i64::from(target.border_px);
    imageops::replace(&mut canvas, &content, offset, offset);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sizes::IconSpec;
    use image::Rgba;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn red_source() -> RgbaImage {
        RgbaImage::from_pixel(64, 64, RED)
    }

    fn target(size: u32, scale: u32, border: f32, corner: f32) -> RenderTarget {
        RenderTarget::compute(IconSpec { width: size, height: size, scale }, border, corner)
            .unwrap()
    }

    #[test]
    fn canvas_matches_target_size() {
        let t = target(32, 2, 0.1, 0.0);
        let out = compose_icon(&red_source(), &t);
        assert_eq!(out.dimensions(), (64, 64));
    }

    #[test]
    fn margin_is_transparent_and_content_opaque() {
        let t = target(32, 1, 0.1, 0.0);
        assert_eq!(t.border_px, 3);
        let out = compose_icon(&red_source(), &t);
        for (x, y, p) in out.enumerate_pixels() {
            let inside = (3..29).contains(&x) && (3..29).contains(&y);
            if inside {
                assert!(p[3] >= 250, "content pixel ({x},{y})");
            } else {
                assert_eq!(p[3], 0, "margin pixel ({x},{y})");
            }
        }
    }

    #[test]
    fn rounded_corners_clip_content_corners() {
        let t = target(32, 1, 0.1, 0.2);
        let out = compose_icon(&red_source(), &t);
        let b = t.border_px;
        let last = b + t.inner_width - 1;
        for (x, y) in [(b, b), (last, b), (b, last), (last, last)] {
            assert_eq!(out.get_pixel(x, y)[3], 0, "corner ({x},{y})");
        }
        let mid = b + t.inner_width / 2;
        assert!(out.get_pixel(mid, mid)[3] > 0);
    }

    #[test]
    fn zero_border_fills_canvas() {
        let t = target(16, 1, 0.0, 0.0);
        let out = compose_icon(&red_source(), &t);
        assert!(out.pixels().all(|p| p[3] >= 250));
    }
}
