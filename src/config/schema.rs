//! Configuration schema types for the preview generator
//!
//! Every key is optional; an empty file yields [`PreviewConfig::default`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory the stock DejaVu fonts are installed to on most Linux systems
const DEJAVU_DIR: &str = "/usr/share/fonts/truetype/dejavu";

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Output file settings
    #[serde(default)]
    pub output: OutputConfig,
    /// Fonts used for preview labels
    #[serde(default)]
    pub fonts: FontsConfig,
}

/// Output file settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// File name of the preview, placed next to the executable
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

fn default_file_name() -> String {
    "sprite-preview-screenshot.png".to_string()
}

/// A TrueType font file and its size in pixels per em
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub path: PathBuf,
    pub size: f32,
}

impl FontSpec {
    pub fn new(path: impl Into<PathBuf>, size: f32) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }
}

/// Fonts for the three text roles of the preview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontsConfig {
    /// Page title
    #[serde(default = "default_title_font")]
    pub title: FontSpec,
    /// Section headers
    #[serde(default = "default_section_font")]
    pub section: FontSpec,
    /// Per-item captions
    #[serde(default = "default_label_font")]
    pub label: FontSpec,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            title: default_title_font(),
            section: default_section_font(),
            label: default_label_font(),
        }
    }
}

fn default_title_font() -> FontSpec {
    FontSpec::new(PathBuf::from(DEJAVU_DIR).join("DejaVuSansMono-Bold.ttf"), 24.0)
}

fn default_section_font() -> FontSpec {
    FontSpec::new(PathBuf::from(DEJAVU_DIR).join("DejaVuSansMono-Bold.ttf"), 18.0)
}

fn default_label_font() -> FontSpec {
    FontSpec::new(PathBuf::from(DEJAVU_DIR).join("DejaVuSansMono.ttf"), 14.0)
}

impl PreviewConfig {
    /// Check the configuration for values that cannot produce a preview.
    ///
    /// Returns every problem found rather than stopping at the first.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.output.file_name.trim().is_empty() {
            errors.push("output.file_name must not be empty".to_string());
        }

        for (role, spec) in [
            ("title", &self.fonts.title),
            ("section", &self.fonts.section),
            ("label", &self.fonts.label),
        ] {
            if !spec.size.is_finite() || spec.size <= 0.0 {
                errors.push(format!(
                    "fonts.{}.size must be a positive number, got {}",
                    role, spec.size
                ));
            }
        }

        errors
    }
}
