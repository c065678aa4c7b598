//! PNG output and output path resolution

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::canvas::Canvas;

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Save a canvas to a PNG file.
///
/// Missing parent directories are created first.
pub fn save_png(canvas: &Canvas, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    canvas.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Directory containing the running executable.
pub fn executable_dir() -> Result<PathBuf, OutputError> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("executable path '{}' has no parent directory", exe.display()),
        )
    })?;
    Ok(dir)
}

/// Resolve where the preview should be written.
///
/// | Scenario                         | Output                      |
/// |----------------------------------|-----------------------------|
/// | No `-o`                          | `{exe_dir}/{file_name}`     |
/// | `-o preview.png`                 | `preview.png`               |
/// | `-o dir/` or an existing dir     | `dir/{file_name}`           |
pub fn resolve_output_path(output_arg: Option<&Path>, exe_dir: &Path, file_name: &str) -> PathBuf {
    match output_arg {
        Some(output) => {
            let is_dir = output.as_os_str().to_string_lossy().ends_with('/') || output.is_dir();
            if is_dir {
                output.join(file_name)
            } else {
                output.to_path_buf()
            }
        }
        None => exe_dir.join(file_name),
    }
}
