// macicon - platform/config.rs
//
// Config directory resolution and config.toml loading with startup
// validation. Uses the `directories` crate for XDG (Linux), AppData
// (Windows), Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for macicon configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/macicon/).
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[render]` section.
    pub render: RenderSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[render]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RenderSection {
    pub border_fraction: Option<f32>,
    pub corner_radius_fraction: Option<f32>,
    /// Output directory (empty = current directory).
    pub output_dir: Option<String>,
    /// Also write Contents.json.
    pub contents_json: Option<bool>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated configuration derived from `config.toml`.
///
/// Fields left `None` were absent (or invalid) and fall through to the CLI
/// defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub border_fraction: Option<f32>,
    pub corner_radius_fraction: Option<f32>,
    pub output_dir: Option<PathBuf>,
    pub contents_json: bool,
    pub log_level: Option<String>,
}

/// Check a border fraction against the accepted range.
pub fn validate_border_fraction(value: f32) -> Result<f32, ConfigError> {
    validate_fraction("border_fraction", value, constants::MAX_BORDER_FRACTION)
}

/// Check a corner radius fraction against the accepted range.
pub fn validate_corner_radius_fraction(value: f32) -> Result<f32, ConfigError> {
    validate_fraction(
        "corner_radius_fraction",
        value,
        constants::MAX_CORNER_RADIUS_FRACTION,
    )
}

fn validate_fraction(field: &str, value: f32, max: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && (0.0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::ValueOutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            expected: format!("a number between 0 and {max}"),
        })
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// A missing file yields defaults with no warnings. An unreadable or
/// unparseable file yields defaults with one warning.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let raw = match read_raw(&config_path) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let mut config = AppConfig::default();

    if let Some(fraction) = raw.render.border_fraction {
        match validate_border_fraction(fraction) {
            Ok(v) => config.border_fraction = Some(v),
            Err(e) => warnings.push(format!("[render] {e}. Using default.")),
        }
    }

    if let Some(fraction) = raw.render.corner_radius_fraction {
        match validate_corner_radius_fraction(fraction) {
            Ok(v) => config.corner_radius_fraction = Some(v),
            Err(e) => warnings.push(format!("[render] {e}. Using default.")),
        }
    }

    if let Some(ref dir) = raw.render.output_dir {
        if !dir.is_empty() {
            config.output_dir = Some(PathBuf::from(dir));
        }
    }

    config.contents_json = raw.render.contents_json.unwrap_or(false);

    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: {}. Using default ({}).",
                constants::VALID_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

fn read_raw(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(dir: &Path, body: &str) {
        fs::write(dir.join(constants::CONFIG_FILE_NAME), body).unwrap();
    }

    #[test]
    fn missing_file_gives_defaults_silently() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn valid_file_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
[render]
border_fraction = 0.065
corner_radius_fraction = 0.25
output_dir = "icons"
contents_json = true

[logging]
level = "DEBUG"
"#,
        );
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty(), "{warnings:?}");
        let border = config.border_fraction.unwrap();
        assert!((border - 0.065).abs() < 1e-6);
        assert_eq!(config.corner_radius_fraction, Some(0.25));
        assert_eq!(config.output_dir, Some(PathBuf::from("icons")));
        assert!(config.contents_json);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn malformed_toml_warns_once() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[render\nborder_fraction = ");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn out_of_range_values_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "[render]\nborder_fraction = -0.1\ncorner_radius_fraction = 0.9\n\
             [logging]\nlevel = \"loud\"\n",
        );
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.border_fraction, None);
        assert_eq!(config.corner_radius_fraction, None);
        assert_eq!(config.log_level, None);
        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[render]\nfuture_option = 3\n[extra]\nx = 1\n");
        let (_, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
    }

    #[test]
    fn fraction_validation_bounds() {
        assert!(validate_border_fraction(0.0).is_ok());
        assert!(validate_border_fraction(0.5).is_ok());
        assert!(validate_border_fraction(1.0).is_ok());
        assert!(validate_border_fraction(1.5).is_err());
        assert!(validate_border_fraction(f32::NAN).is_err());
        assert!(validate_corner_radius_fraction(0.5).is_ok());
        assert!(validate_corner_radius_fraction(0.51).is_err());
        assert!(validate_corner_radius_fraction(-0.01).is_err());
    }
}
