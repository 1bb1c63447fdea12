// macicon - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing (prompting for the input path when omitted)
// 2. config.toml loading and logging initialisation
// 3. Running the renderer and printing one line per icon

use clap::Parser;
use macicon::app::prompt;
use macicon::app::renderer::{self, RenderOptions, RenderOverrides, RenderReport};
use macicon::platform::config::{self, PlatformPaths};
use macicon::util;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// macicon - generate the macOS app icon set from a 1024x1024 image.
///
/// Writes Icon-App-{W}x{H}@{S}x.png for 16, 32, 128, 256 and 512 at 1x and
/// 2x, optionally with a transparent border and rounded corners.
#[derive(Parser, Debug)]
#[command(name = "macicon", version, about)]
struct Cli {
    /// Source image, exactly 1024x1024 pixels (prompted for if omitted).
    input_path: Option<PathBuf>,

    /// Fraction of each side kept as transparent border (e.g. 0.1).
    #[arg(long = "border_percentage", visible_alias = "border-percentage")]
    border_percentage: Option<f32>,

    /// Corner radius as a fraction of the content size (0 disables rounding).
    #[arg(
        long = "corner_radius_percentage",
        visible_alias = "corner-radius-percentage"
    )]
    corner_radius_percentage: Option<f32>,

    /// Directory to write the icons into (default: current directory).
    #[arg(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Also write an Xcode asset catalog Contents.json.
    #[arg(long = "contents-json")]
    contents_json: bool,

    /// Render one size at a time instead of in parallel.
    #[arg(long = "sequential")]
    sequential: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let paths = PlatformPaths::resolve();
    let (app_config, config_warnings) = config::load_config(&paths.config_dir);

    util::logging::init(cli.debug, app_config.log_level.as_deref());
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "macicon starting"
    );

    let input_path = match cli.input_path.clone() {
        Some(path) => path,
        None => match prompt::read_input_path(io::stdin().lock(), io::stdout()) {
            Ok(Some(path)) => path,
            Ok(None) => {
                eprintln!("Error: no input image given");
                return ExitCode::FAILURE;
            }
            Err(e) => {
                eprintln!("Error: failed to read input path: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let overrides = RenderOverrides {
        border_fraction: cli.border_percentage,
        corner_radius_fraction: cli.corner_radius_percentage,
        output_dir: cli.output_dir,
        contents_json: cli.contents_json,
        sequential: cli.sequential,
    };
    let options = RenderOptions::from_sources(overrides, &app_config);

    match renderer::render(&input_path, &options) {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, input = %input_path.display(), "Icon generation aborted");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_report(report: &RenderReport) {
    for icon in &report.written {
        let name = icon
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| icon.path.display().to_string());
        println!("Saved: {name}");
    }
    for failure in &report.failed {
        eprintln!("Error: {}", failure.error);
    }
    if let Some(ref path) = report.manifest_path {
        println!("Saved: {}", path.display());
    }
    if let Some(ref error) = report.manifest_error {
        eprintln!("Error: {error}");
    }
}
