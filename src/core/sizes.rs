// macicon - core/sizes.rs
//
// The fixed macOS app icon size table, exposed as data.

use crate::util::constants;
use std::fmt;

/// One nominal icon size and the scale factors it is produced at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeEntry {
    /// Nominal (1x) width in points.
    pub width: u32,
    /// Nominal (1x) height in points.
    pub height: u32,
    /// Supported scale factors.
    pub scales: &'static [u32],
}

/// Every size an `.appiconset` for macOS needs, in output order.
pub const REQUIRED_SIZES: &[SizeEntry] = &[
    SizeEntry { width: 16, height: 16, scales: &[1, 2] },
    SizeEntry { width: 32, height: 32, scales: &[1, 2] },
    SizeEntry { width: 128, height: 128, scales: &[1, 2] },
    SizeEntry { width: 256, height: 256, scales: &[1, 2] },
    SizeEntry { width: 512, height: 512, scales: &[1, 2] },
];

/// A single (nominal size, scale) output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconSpec {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
}

impl IconSpec {
    /// Output canvas width in pixels.
    pub fn pixel_width(&self) -> u32 {
        self.width * self.scale
    }

    /// Output canvas height in pixels.
    pub fn pixel_height(&self) -> u32 {
        self.height * self.scale
    }

    /// Nominal size label, e.g. `128x128`.
    pub fn size_label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    /// Scale label, e.g. `2x`.
    pub fn scale_label(&self) -> String {
        format!("{}x", self.scale)
    }

    /// `Icon-App-{W}x{H}@{S}x.png`
    pub fn file_name(&self) -> String {
        format!(
            "{}-{}x{}@{}x.png",
            constants::OUTPUT_FILE_PREFIX,
            self.width,
            self.height,
            self.scale
        )
    }
}

impl fmt::Display for IconSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}@{}x", self.width, self.height, self.scale)
    }
}

/// Flatten a size table into one `IconSpec` per (size, scale), preserving
/// table order.
pub fn icon_specs_from(table: &[SizeEntry]) -> Vec<IconSpec> {
    table
        .iter()
        .flat_map(|entry| {
            entry.scales.iter().map(move |&scale| IconSpec {
                width: entry.width,
                height: entry.height,
                scale,
            })
        })
        .collect()
}

/// All outputs of the built-in table.
pub fn icon_specs() -> Vec<IconSpec> {
    icon_specs_from(REQUIRED_SIZES)
}
