// macicon - core/mask.rs
//
// Rounded-rectangle alpha mask and alpha multiplication.
//
// The mask is binary and conservative: a pixel is opaque iff the whole
// pixel square lies inside the rounded rectangle. Any radius above zero
// therefore clears the four extreme corner pixels.

use image::{GrayImage, Luma, RgbaImage};

/// Build a `width x height` mask, 255 inside a rounded rectangle spanning the
/// whole area with corner radius `radius`, 0 outside.
///
/// The radius is clamped to half the shorter side.
pub fn rounded_rect_mask(width: u32, height: u32, radius: f32) -> GrayImage {
    let r = radius.clamp(0.0, width.min(height) as f32 / 2.0);
    let r_sq = r * r;

    GrayImage::from_fn(width, height, |x, y| {
        // Distance from the pixel's outer corner to the nearest canvas sides.
        // Integer-valued, so the left/right and top/bottom halves mirror exactly.
        let ex = x.min(width - 1 - x) as f32;
        let ey = y.min(height - 1 - y) as f32;
        let inside = if ex >= r || ey >= r {
            true
        } else {
            let dx = r - ex;
            let dy = r - ey;
            dx * dx + dy * dy <= r_sq
        };
        if inside {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Multiply the alpha channel of `image` by `mask`.
///
/// Pixels beyond the mask bounds are left untouched.
pub fn apply_mask(image: &mut RgbaImage, mask: &GrayImage) {
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        if x >= mask.width() || y >= mask.height() {
            continue;
        }
        let m = u16::from(mask.get_pixel(x, y)[0]);
        let a = u16::from(pixel[3]);
        pixel[3] = ((a * m + 127) / 255) as u8;
    }
}
