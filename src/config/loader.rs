//! Configuration loading for the preview generator

use super::schema::PreviewConfig;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", format_problems(.0))]
    Validation(Vec<String>),
}

fn format_problems(problems: &[String]) -> String {
    problems.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n")
}

/// Load configuration.
///
/// With no path the built-in defaults are returned; nothing is searched for
/// on disk. With a path the file must exist, parse, and validate.
///
/// # Example
/// ```ignore
/// let config = load_config(Some(Path::new("preview.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<PreviewConfig, ConfigError> {
    match path {
        Some(p) => {
            let content = fs::read_to_string(p)?;
            parse_config(&content)
        }
        None => Ok(PreviewConfig::default()),
    }
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<PreviewConfig, ConfigError> {
    let config: PreviewConfig = toml::from_str(content)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_without_path_returns_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.output.file_name, "sprite-preview-screenshot.png");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nfile_name = \"atlas-preview.png\"").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.output.file_name, "atlas-preview.png");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(dir.path().join("nope.toml").as_path()));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_parse_error() {
        let result = parse_config("[output\nfile_name = 3");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let result = parse_config("[output]\nfile_name = 3");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validation_error_message_lists_problems() {
        let err = parse_config("[fonts]\ntitle = { path = \"a.ttf\", size = -1.0 }").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref e) if e.len() == 1));
        let message = err.to_string();
        assert!(message.starts_with("Config validation failed:"));
        assert!(message.contains("  - fonts.title.size"));
    }
}
