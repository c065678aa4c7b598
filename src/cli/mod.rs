//! Command-line interface implementation
//!
//! Running the binary with no arguments generates the preview next to the
//! executable. The optional flags only redirect output or add diagnostics.

mod preview;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;

/// Render a labeled preview of the farm game's sprite atlas to PNG
#[derive(Parser, Debug)]
#[command(name = "sprite-preview")]
#[command(about = "Render a labeled preview of the farm game's sprite atlas to PNG")]
#[command(version)]
pub struct Cli {
    /// Output file or directory (ends with / or exists).
    /// If omitted: sprite-preview-screenshot.png next to the executable
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML config with output file name and font settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also write the raw 256x256 sprite atlas to this PNG file
    #[arg(long)]
    pub atlas: Option<PathBuf>,

    /// Print diagnostics (font fallback, extra outputs) to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse arguments and run the generator.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    preview::run_preview(&cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["sprite-preview"]).unwrap();
        assert!(cli.output.is_none());
        assert!(cli.config.is_none());
        assert!(cli.atlas.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "sprite-preview",
            "-o",
            "out.png",
            "--config",
            "preview.toml",
            "--atlas",
            "atlas.png",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out.png")));
        assert_eq!(cli.config, Some(PathBuf::from("preview.toml")));
        assert_eq!(cli.atlas, Some(PathBuf::from("atlas.png")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_unknown_argument_rejected() {
        assert!(Cli::try_parse_from(["sprite-preview", "--scale", "4"]).is_err());
    }
}
