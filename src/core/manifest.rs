// macicon - core/manifest.rs
//
// Xcode asset catalog manifest (`Contents.json`) for the generated icons.
// Core layer: writes to any Write trait object.

use crate::core::sizes::IconSpec;
use crate::util::constants;
use crate::util::error::ManifestError;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Top-level `Contents.json` document.
#[derive(Debug, Serialize, PartialEq)]
pub struct Manifest {
    pub images: Vec<ManifestImage>,
    pub info: ManifestInfo,
}

/// One `images[]` entry.
#[derive(Debug, Serialize, PartialEq)]
pub struct ManifestImage {
    pub size: String,
    pub idiom: String,
    pub filename: String,
    pub scale: String,
}

/// The `info` block.
#[derive(Debug, Serialize, PartialEq)]
pub struct ManifestInfo {
    pub version: u32,
    pub author: String,
}

impl Manifest {
    /// Build a manifest listing `icons` in the given order.
    pub fn for_icons<'a, I>(icons: I) -> Self
    where
        I: IntoIterator<Item = &'a IconSpec>,
    {
        let images = icons
            .into_iter()
            .map(|spec| ManifestImage {
                size: spec.size_label(),
                idiom: constants::MANIFEST_IDIOM.to_string(),
                filename: spec.file_name(),
                scale: spec.scale_label(),
            })
            .collect();

        Self {
            images,
            info: ManifestInfo {
                version: constants::MANIFEST_VERSION,
                author: constants::MANIFEST_AUTHOR.to_string(),
            },
        }
    }
}

/// Serialise `manifest` as pretty JSON into `writer`.
///
/// `path` is only used for error context.
pub fn write_manifest<W: Write>(
    manifest: &Manifest,
    mut writer: W,
    path: &Path,
) -> Result<(), ManifestError> {
    serde_json::to_writer_pretty(&mut writer, manifest).map_err(|e| ManifestError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|e| ManifestError::Io {
            path: path.to_path_buf(),
            source: e,
        })
}
