// macicon - app/renderer.rs
//
// Icon set generation. Validates the source once, then renders every
// (size, scale) target independently, in parallel by default.
//
// Failure policy:
//   - Source and parameter problems abort before anything is written.
//   - A failure for one target is recorded and the other targets continue.
//   - A failed Contents.json is recorded too; the icons stay reported.

use crate::core::compose;
use crate::core::geometry::RenderTarget;
use crate::core::manifest::{self, Manifest};
use crate::core::sizes::{self, IconSpec};
use crate::platform::config::{self, AppConfig};
use crate::platform::fs;
use crate::util::constants;
use crate::util::error::{IconError, ManifestError, RenderError, SourceError};
use image::RgbaImage;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Parameters for one run.
///
/// The default reproduces a plain resize: no border, no rounding, output in
/// the current directory.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Fraction of the shorter output side kept transparent on each side.
    pub border_fraction: f32,
    /// Fraction of the shorter content side used as the corner radius.
    pub corner_radius_fraction: f32,
    /// Directory receiving the PNG files.
    pub output_dir: PathBuf,
    /// Render targets on the rayon thread pool.
    pub parallel: bool,
    /// Also write `Contents.json` next to the icons.
    pub write_manifest: bool,
}

/// Values given explicitly on the command line. `None` / `false` means
/// "not given".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOverrides {
    pub border_fraction: Option<f32>,
    pub corner_radius_fraction: Option<f32>,
    pub output_dir: Option<PathBuf>,
    pub contents_json: bool,
    pub sequential: bool,
}

impl RenderOptions {
    /// Merge command-line overrides with config.toml.
    ///
    /// Precedence per field: override > config > built-in CLI default.
    pub fn from_sources(overrides: RenderOverrides, config: &AppConfig) -> Self {
        Self {
            border_fraction: overrides
                .border_fraction
                .or(config.border_fraction)
                .unwrap_or(constants::DEFAULT_BORDER_FRACTION),
            corner_radius_fraction: overrides
                .corner_radius_fraction
                .or(config.corner_radius_fraction)
                .unwrap_or(constants::DEFAULT_CORNER_RADIUS_FRACTION),
            output_dir: overrides
                .output_dir
                .or_else(|| config.output_dir.clone())
                .unwrap_or_else(|| PathBuf::from(".")),
            parallel: !overrides.sequential,
            write_manifest: overrides.contents_json || config.contents_json,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            border_fraction: 0.0,
            corner_radius_fraction: 0.0,
            output_dir: PathBuf::from("."),
            parallel: true,
            write_manifest: false,
        }
    }
}

/// A successfully written icon.
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenIcon {
    pub spec: IconSpec,
    pub path: PathBuf,
}

/// A target that was skipped.
#[derive(Debug)]
pub struct FailedIcon {
    pub spec: IconSpec,
    pub error: RenderError,
}

/// Outcome of a run, both lists in size-table order.
#[derive(Debug, Default)]
pub struct RenderReport {
    pub written: Vec<WrittenIcon>,
    pub failed: Vec<FailedIcon>,
    /// Path of `Contents.json` when one was written.
    pub manifest_path: Option<PathBuf>,
    /// Why `Contents.json` could not be written, if it was requested.
    pub manifest_error: Option<ManifestError>,
}

impl RenderReport {
    /// Paths of every written PNG.
    pub fn written_paths(&self) -> Vec<&Path> {
        self.written.iter().map(|w| w.path.as_path()).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.manifest_error.is_none()
    }
}

/// Decode `path` and check it is exactly the required source size.
pub fn load_source(path: &Path) -> Result<RgbaImage, SourceError> {
    let image = fs::open_image(path)?;
    let (width, height) = (image.width(), image.height());
    if width != constants::SOURCE_DIMENSION || height != constants::SOURCE_DIMENSION {
        return Err(SourceError::WrongDimensions {
            path: path.to_path_buf(),
            width,
            height,
            expected: constants::SOURCE_DIMENSION,
        });
    }
    tracing::debug!(
        path = %path.display(),
        color = ?image.color(),
        "Source image accepted"
    );
    Ok(image.into_rgba8())
}

/// Generate the full icon set for the image at `source_path`.
pub fn render(source_path: &Path, options: &RenderOptions) -> Result<RenderReport, IconError> {
    config::validate_border_fraction(options.border_fraction)?;
    config::validate_corner_radius_fraction(options.corner_radius_fraction)?;

    let source = load_source(source_path)?;
    render_image(&source, options)
}

/// Generate the full icon set from an already validated source image.
pub fn render_image(source: &RgbaImage, options: &RenderOptions) -> Result<RenderReport, IconError> {
    std::fs::create_dir_all(&options.output_dir).map_err(|e| IconError::Io {
        path: options.output_dir.clone(),
        operation: "create output directory",
        source: e,
    })?;

    let specs = sizes::icon_specs();
    tracing::info!(
        targets = specs.len(),
        border_fraction = options.border_fraction,
        corner_radius_fraction = options.corner_radius_fraction,
        output_dir = %options.output_dir.display(),
        parallel = options.parallel,
        "Rendering icon set"
    );

    let results: Vec<(IconSpec, Result<PathBuf, RenderError>)> = if options.parallel {
        specs
            .par_iter()
            .map(|&spec| (spec, render_one(source, spec, options)))
            .collect()
    } else {
        specs
            .iter()
            .map(|&spec| (spec, render_one(source, spec, options)))
            .collect()
    };

    let mut report = RenderReport::default();
    for (spec, result) in results {
        match result {
            Ok(path) => report.written.push(WrittenIcon { spec, path }),
            Err(error) => {
                tracing::warn!(icon = %spec, error = %error, "Icon skipped");
                report.failed.push(FailedIcon { spec, error });
            }
        }
    }

    if options.write_manifest {
        let path = options.output_dir.join(constants::MANIFEST_FILE_NAME);
        match write_manifest_file(&report.written, &path) {
            Ok(()) => report.manifest_path = Some(path),
            Err(error) => {
                tracing::warn!(error = %error, "Manifest skipped");
                report.manifest_error = Some(error);
            }
        }
    }

    tracing::info!(
        written = report.written.len(),
        failed = report.failed.len(),
        "Icon set complete"
    );
    Ok(report)
}

fn render_one(
    source: &RgbaImage,
    spec: IconSpec,
    options: &RenderOptions,
) -> Result<PathBuf, RenderError> {
    let target =
        RenderTarget::compute(spec, options.border_fraction, options.corner_radius_fraction)?;
    tracing::debug!(
        icon = %spec,
        border_px = target.border_px,
        inner = target.inner_width,
        radius = target.corner_radius_px,
        "Rendering target"
    );

    let canvas = compose::compose_icon(source, &target);
    let path = options.output_dir.join(spec.file_name());
    fs::write_png(&canvas, &path)?;
    Ok(path)
}

fn write_manifest_file(written: &[WrittenIcon], path: &Path) -> Result<(), ManifestError> {
    let manifest = Manifest::for_icons(written.iter().map(|w| &w.spec));
    let file = std::fs::File::create(path).map_err(|e| ManifestError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    manifest::write_manifest(&manifest, std::io::BufWriter::new(file), path)?;
    tracing::debug!(path = %path.display(), images = manifest.images.len(), "Manifest written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn opaque_source() -> RgbaImage {
        RgbaImage::from_pixel(
            constants::SOURCE_DIMENSION,
            constants::SOURCE_DIMENSION,
            Rgba([0, 128, 255, 255]),
        )
    }

    #[test]
    fn default_options_reproduce_plain_resize() {
        let options = RenderOptions::default();
        assert_eq!(options.border_fraction, 0.0);
        assert_eq!(options.corner_radius_fraction, 0.0);
        assert_eq!(options.output_dir, PathBuf::from("."));
    }

    #[test]
    fn sequential_and_parallel_agree() {
        let source = opaque_source();
        let seq_dir = tempfile::tempdir().unwrap();
        let par_dir = tempfile::tempdir().unwrap();

        let base = RenderOptions {
            border_fraction: 0.1,
            corner_radius_fraction: 0.2,
            ..Default::default()
        };
        let seq = render_image(
            &source,
            &RenderOptions {
                output_dir: seq_dir.path().to_path_buf(),
                parallel: false,
                ..base.clone()
            },
        )
        .unwrap();
        let par = render_image(
            &source,
            &RenderOptions {
                output_dir: par_dir.path().to_path_buf(),
                parallel: true,
                ..base
            },
        )
        .unwrap();

        let seq_specs: Vec<IconSpec> = seq.written.iter().map(|w| w.spec).collect();
        let par_specs: Vec<IconSpec> = par.written.iter().map(|w| w.spec).collect();
        assert_eq!(seq_specs, sizes::icon_specs());
        assert_eq!(seq_specs, par_specs);

        for spec in sizes::icon_specs() {
            let a = std::fs::read(seq_dir.path().join(spec.file_name())).unwrap();
            let b = std::fs::read(par_dir.path().join(spec.file_name())).unwrap();
            assert_eq!(a, b, "{spec} differs");
        }
    }

    #[test]
    fn overrides_win_over_config() {
        let config = AppConfig {
            border_fraction: Some(0.065),
            corner_radius_fraction: Some(0.3),
            output_dir: Some(PathBuf::from("from-config")),
            contents_json: false,
            log_level: None,
        };
        let overrides = RenderOverrides {
            border_fraction: Some(0.0),
            corner_radius_fraction: Some(0.1),
            output_dir: Some(PathBuf::from("from-cli")),
            contents_json: true,
            sequential: true,
        };
        let options = RenderOptions::from_sources(overrides, &config);
        assert_eq!(options.border_fraction, 0.0);
        assert_eq!(options.corner_radius_fraction, 0.1);
        assert_eq!(options.output_dir, PathBuf::from("from-cli"));
        assert!(options.write_manifest);
        assert!(!options.parallel);
    }

    #[test]
    fn config_fills_missing_overrides() {
        let config = AppConfig {
            border_fraction: Some(0.065),
            corner_radius_fraction: None,
            output_dir: Some(PathBuf::from("icons")),
            contents_json: true,
            log_level: None,
        };
        let options = RenderOptions::from_sources(RenderOverrides::default(), &config);
        assert_eq!(options.border_fraction, 0.065);
        assert_eq!(
            options.corner_radius_fraction,
            constants::DEFAULT_CORNER_RADIUS_FRACTION
        );
        assert_eq!(options.output_dir, PathBuf::from("icons"));
        assert!(options.write_manifest);
        assert!(options.parallel);
    }

    #[test]
    fn built_in_defaults_apply_when_nothing_is_set() {
        let options =
            RenderOptions::from_sources(RenderOverrides::default(), &AppConfig::default());
        assert_eq!(options.border_fraction, constants::DEFAULT_BORDER_FRACTION);
        assert_eq!(
            options.corner_radius_fraction,
            constants::DEFAULT_CORNER_RADIUS_FRACTION
        );
        assert_eq!(options.output_dir, PathBuf::from("."));
        assert!(!options.write_manifest);
    }

    #[test]
    fn invalid_parameters_are_rejected_before_decoding() {
        let options = RenderOptions {
            border_fraction: -1.0,
            ..Default::default()
        };
        let result = render(Path::new("does-not-matter.png"), &options);
        assert!(matches!(result, Err(IconError::Config(_))));
    }

    #[test]
    fn output_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let options = RenderOptions {
            output_dir: nested.clone(),
            ..Default::default()
        };
        let report = render_image(&opaque_source(), &options).unwrap();
        assert!(report.is_complete());
        assert!(nested.join("Icon-App-16x16@1x.png").exists());
    }
}
