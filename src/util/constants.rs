// macicon - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "macicon";

/// Application identifier used for the config directory.
pub const APP_ID: &str = "macicon";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Source image
// =============================================================================

/// Required width and height of the source image in pixels.
pub const SOURCE_DIMENSION: u32 = 1024;

// =============================================================================
// Rendering defaults and bounds
// =============================================================================

/// Border fraction used when the CLI flag and config are both absent.
pub const DEFAULT_BORDER_FRACTION: f32 = 0.1;

/// Corner radius fraction used when the CLI flag and config are both absent.
pub const DEFAULT_CORNER_RADIUS_FRACTION: f32 = 0.2;

/// Upper bound on the border fraction. Values in `[0.5, 1.0]` are accepted
/// and leave no content area, so every size is skipped individually.
pub const MAX_BORDER_FRACTION: f32 = 1.0;

/// Upper bound on the corner radius fraction (0.5 turns the content into a
/// circle or stadium).
pub const MAX_CORNER_RADIUS_FRACTION: f32 = 0.5;

// =============================================================================
// Output naming
// =============================================================================

/// File name prefix shared by every generated icon.
pub const OUTPUT_FILE_PREFIX: &str = "Icon-App";

/// Asset catalog manifest file name.
pub const MANIFEST_FILE_NAME: &str = "Contents.json";

/// Idiom written into every manifest image entry.
pub const MANIFEST_IDIOM: &str = "mac";

/// Asset catalog format version.
pub const MANIFEST_VERSION: u32 = 1;

/// Author recorded in the manifest `info` block.
pub const MANIFEST_AUTHOR: &str = "xcode";

// =============================================================================
// CLI
// =============================================================================

/// Prompt shown when no input path is given on the command line.
pub const INPUT_PROMPT: &str = "Enter the path to your 1024x1024 image: ";

// =============================================================================
// Logging
// =============================================================================

/// Default log level. Kept at "warn" so normal runs print only the
/// `Saved:` confirmations.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log levels accepted in config.toml.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
