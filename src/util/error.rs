// macicon - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Fatal errors (source, config) abort a run; RenderError is per size and
// never aborts the remaining sizes.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all macicon operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum IconError {
    /// The source image could not be used. Always fatal.
    Source(SourceError),

    /// Configuration or parameter validation failed.
    Config(ConfigError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Source errors
// ---------------------------------------------------------------------------

/// Errors that make the source image unusable for the whole run.
#[derive(Debug)]
pub enum SourceError {
    /// The file could not be opened or its format could not be sniffed.
    Open { path: PathBuf, source: io::Error },

    /// The file was readable but could not be decoded as an image.
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// The decoded image is not the required square size.
    WrongDimensions {
        path: PathBuf,
        width: u32,
        height: u32,
        expected: u32,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "Cannot open image '{}': {source}", path.display())
            }
            Self::Decode { path, source } => {
                write!(f, "Cannot decode image '{}': {source}", path.display())
            }
            Self::WrongDimensions {
                path,
                width,
                height,
                expected,
            } => write!(
                f,
                "Input image must be {expected}x{expected} pixels, \
                 '{}' is {width}x{height}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::WrongDimensions { .. } => None,
        }
    }
}

impl From<SourceError> for IconError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

// ---------------------------------------------------------------------------
// Render errors (per size)
// ---------------------------------------------------------------------------

/// Errors confined to one (size, scale) output. Recorded in the run report,
/// never propagated as an `IconError`.
#[derive(Debug)]
pub enum RenderError {
    /// The border leaves no room for content at this size.
    BorderTooLarge {
        icon: String,
        target_px: u32,
        border_px: u32,
        border_fraction: f32,
    },

    /// PNG encoding failed.
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Writing the encoded PNG failed.
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BorderTooLarge {
                icon,
                target_px,
                border_px,
                border_fraction,
            } => write!(
                f,
                "Border too large for {icon}: a {border_px}px border \
                 (fraction {border_fraction}) leaves no content in {target_px}px"
            ),
            Self::Encode { path, source } => {
                write!(f, "Failed to encode '{}': {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "Failed to write '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encode { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
            Self::BorderTooLarge { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading and parameter validation.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "'{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::ValueOutOfRange { .. } => None,
        }
    }
}

impl From<ConfigError> for IconError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Manifest errors
// ---------------------------------------------------------------------------

/// Errors writing the asset catalog `Contents.json`. Recorded in the run
/// report; the icons already written stay valid.
#[derive(Debug)]
pub enum ManifestError {
    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// I/O error creating or flushing the manifest file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { path, source } => {
                write!(f, "JSON error '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}
