//! Text rendering for preview labels
//!
//! Labels are drawn either with a TrueType font (rasterized by `ab_glyph`
//! and alpha-blended onto the canvas) or with the built-in 8x8 bitmap font.
//! Font loading is best effort: if any of the three configured fonts cannot
//! be used, every role falls back to the built-in font.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use ab_glyph::{point, Font, FontArc, FontVec, GlyphId, PxScale, ScaleFont};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::Rgb;
use thiserror::Error;

use crate::canvas::{blend_pixel, set_pixel, Canvas};
use crate::config::{FontSpec, FontsConfig};

/// Cell size of the built-in bitmap font
pub const BUILTIN_GLYPH_SIZE: i32 = 8;

/// Glyph a TrueType font maps every unsupported character to
const NOTDEF: GlyphId = GlyphId(0);

/// Error loading a TrueType font
#[derive(Debug, Error)]
pub enum FontError {
    #[error("cannot read font '{file}': {source}", file = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("'{file}' is not a usable font file", file = .path.display())]
    Invalid { path: PathBuf },
}

/// A typeface at a fixed size
#[derive(Clone)]
pub enum Face {
    TrueType { font: FontArc, scale: PxScale },
    Builtin,
}

impl fmt::Debug for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::TrueType { scale, .. } => write!(f, "TrueType({}px)", scale.y),
            Face::Builtin => write!(f, "Builtin"),
        }
    }
}

impl Face {
    /// Load a TrueType face, sized so that `spec.size` is the em height in pixels.
    pub fn load(spec: &FontSpec) -> Result<Self, FontError> {
        let data = fs::read(&spec.path).map_err(|source| FontError::Io {
            path: spec.path.clone(),
            source,
        })?;
        let font = FontVec::try_from_vec(data).map_err(|_| FontError::Invalid {
            path: spec.path.clone(),
        })?;

        // PxScale is ascent-to-descent height, not em size
        let scale = match font.units_per_em() {
            Some(units) if units > 0.0 => PxScale::from(spec.size * font.height_unscaled() / units),
            _ => PxScale::from(spec.size),
        };

        Ok(Face::TrueType {
            font: FontArc::new(font),
            scale,
        })
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Face::Builtin)
    }
}

/// Faces for the three text roles of the preview
#[derive(Debug, Clone)]
pub struct FontSet {
    pub title: Face,
    pub section: Face,
    pub label: Face,
}

impl FontSet {
    /// The built-in bitmap font for every role.
    pub fn builtin() -> Self {
        Self {
            title: Face::Builtin,
            section: Face::Builtin,
            label: Face::Builtin,
        }
    }

    /// Load all three configured fonts, failing on the first that cannot be used.
    pub fn load(config: &FontsConfig) -> Result<Self, FontError> {
        Ok(Self {
            title: Face::load(&config.title)?,
            section: Face::load(&config.section)?,
            label: Face::load(&config.label)?,
        })
    }

    /// Load the configured fonts, or fall back to [`FontSet::builtin`].
    ///
    /// The error that triggered the fallback is returned alongside so the
    /// caller can report it; it never prevents rendering.
    pub fn load_or_builtin(config: &FontsConfig) -> (Self, Option<FontError>) {
        match Self::load(config) {
            Ok(fonts) => (fonts, None),
            Err(e) => (Self::builtin(), Some(e)),
        }
    }
}

/// Draw `text` with its top-left corner at `(x, y)`.
///
/// For TrueType faces `y` is the top of the ascender line. Characters the
/// face has no glyph for advance the caret without drawing; the font's
/// `.notdef` box is never rendered. Pixels outside the canvas are clipped.
pub fn draw_text(canvas: &mut Canvas, x: i32, y: i32, text: &str, color: Rgb<u8>, face: &Face) {
    match face {
        Face::TrueType { font, scale } => draw_truetype(canvas, x, y, text, color, font, *scale),
        Face::Builtin => draw_builtin(canvas, x, y, text, color),
    }
}

fn draw_truetype(
    canvas: &mut Canvas,
    x: i32,
    y: i32,
    text: &str,
    color: Rgb<u8>,
    font: &FontArc,
    scale: PxScale,
) {
    let scaled = font.as_scaled(scale);
    let baseline = y as f32 + scaled.ascent();
    let mut caret = x as f32;
    let mut previous: Option<GlyphId> = None;

    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, baseline));
        caret += scaled.h_advance(id);
        previous = Some(id);

        if id == NOTDEF {
            continue;
        }
        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        let bounds = outlined.px_bounds();
        let (left, top) = (bounds.min.x as i32, bounds.min.y as i32);
        outlined.draw(|gx, gy, coverage| {
            blend_pixel(canvas, left + gx as i32, top + gy as i32, color, coverage);
        });
    }
}

fn draw_builtin(canvas: &mut Canvas, x: i32, y: i32, text: &str, color: Rgb<u8>) {
    let mut caret = x;
    for ch in text.chars() {
        if let Some(rows) = BASIC_FONTS.get(ch) {
            for (row, &bits) in rows.iter().enumerate() {
                for col in 0..BUILTIN_GLYPH_SIZE {
                    // Least significant bit is the leftmost pixel
                    if bits & (1u8 << col) != 0 {
                        set_pixel(canvas, caret + col, y + row as i32, color);
                    }
                }
            }
        }
        caret += BUILTIN_GLYPH_SIZE;
    }
}
