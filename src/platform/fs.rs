// macicon - platform/fs.rs
//
// Image decode and PNG encode/write. The only place that touches image
// files on disk.

use crate::util::error::{RenderError, SourceError};
use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// Open and decode an image, guessing the format from its content.
pub fn open_image(path: &Path) -> Result<DynamicImage, SourceError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| SourceError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(
        path = %path.display(),
        format = ?reader.format(),
        "Decoding source image"
    );

    reader.decode().map_err(|e| SourceError::Decode {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Encode `image` as PNG and write it to `path`, replacing any existing file.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<(), RenderError> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| RenderError::Encode {
            path: path.to_path_buf(),
            source: e,
        })?;

    std::fs::write(path, &bytes).map_err(|e| RenderError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "PNG written");
    Ok(())
}
