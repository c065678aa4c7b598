//! Preview command implementation

use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

use crate::atlas::build_atlas;
use crate::config::{load_config, ConfigError};
use crate::output::{executable_dir, resolve_output_path, save_png, OutputError};
use crate::preview::compose_preview;
use crate::text::FontSet;

use super::{Cli, EXIT_ERROR, EXIT_SUCCESS};

#[derive(Debug, Error)]
enum PreviewError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Execute the generate-and-save sequence.
pub fn run_preview(cli: &Cli) -> ExitCode {
    println!("Generating sprite preview...");

    match generate(cli) {
        Ok((path, (width, height))) => {
            println!("Sprite preview saved to: {}", path.display());
            println!("Image size: {}x{}", width, height);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Build, compose and save; returns the preview path and its dimensions.
fn generate(cli: &Cli) -> Result<(PathBuf, (u32, u32)), PreviewError> {
    let config = load_config(cli.config.as_deref())?;

    let (fonts, font_error) = FontSet::load_or_builtin(&config.fonts);
    if let Some(e) = font_error {
        if cli.verbose {
            eprintln!("Warning: {}, using built-in font", e);
        }
    }

    let atlas = build_atlas();
    let preview = compose_preview(&atlas, &fonts);

    // Only the default location depends on where the binary lives
    let exe_dir = match cli.output {
        Some(_) => PathBuf::new(),
        None => executable_dir()?,
    };
    let output_path =
        resolve_output_path(cli.output.as_deref(), &exe_dir, &config.output.file_name);

    // Atlas first: a failed atlas write leaves no preview on disk
    if let Some(atlas_path) = cli.atlas.as_deref() {
        save_png(&atlas, atlas_path)?;
        if cli.verbose {
            eprintln!("Atlas saved to: {}", atlas_path.display());
        }
    }
    save_png(&preview, &output_path)?;

    Ok((output_path, preview.dimensions()))
}
