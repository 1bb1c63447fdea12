// macicon - core/geometry.rs
//
// Per-output layout: canvas size, border inset, content size, corner radius.

use crate::core::sizes::IconSpec;
use crate::util::error::RenderError;

/// Pixel layout for one output icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTarget {
    /// Canvas width in pixels.
    pub target_width: u32,
    /// Canvas height in pixels.
    pub target_height: u32,
    /// Transparent margin on every side.
    pub border_px: u32,
    /// Width of the resized content.
    pub inner_width: u32,
    /// Height of the resized content.
    pub inner_height: u32,
    /// Rounded-rectangle radius; 0 disables clipping.
    pub corner_radius_px: f32,
}

impl RenderTarget {
    /// Lay out `spec` with the given fractions.
    ///
    /// Fails with `BorderTooLarge` when the border consumes the whole canvas.
    pub fn compute(
        spec: IconSpec,
        border_fraction: f32,
        corner_radius_fraction: f32,
    ) -> Result<Self, RenderError> {
        let target_width = spec.pixel_width();
        let target_height = spec.pixel_height();
        let short_side = target_width.min(target_height);

        let border_px = (short_side as f64 * f64::from(border_fraction)).floor() as u32;

        let inner_width = i64::from(target_width) - 2 * i64::from(border_px);
        let inner_height = i64::from(target_height) - 2 * i64::from(border_px);
        if inner_width <= 0 || inner_height <= 0 {
            return Err(RenderError::BorderTooLarge {
                icon: spec.to_string(),
                target_px: short_side,
                border_px,
                border_fraction,
            });
        }
        let inner_width = inner_width as u32;
        let inner_height = inner_height as u32;

        let corner_radius_px = inner_width.min(inner_height) as f32 * corner_radius_fraction;

        Ok(Self {
            target_width,
            target_height,
            border_px,
            inner_width,
            inner_height,
            corner_radius_px,
        })
    }

    /// Whether the content is clipped to a rounded rectangle.
    pub fn has_rounded_corners(&self) -> bool {
        self.corner_radius_px > 0.0
    }
}
