//! RGB pixel canvas primitives
//!
//! A canvas is a plain [`RgbImage`]. Every write made through this module is
//! bounds-checked: coordinates outside the canvas are dropped silently, so
//! drawing slightly past a sprite's nominal bounds can never panic.

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

/// An RGB pixel grid owned by whoever is drawing into it.
pub type Canvas = RgbImage;

/// Create a canvas of the given size filled with `background`.
pub fn new_canvas(width: u32, height: u32, background: Rgb<u8>) -> Canvas {
    RgbImage::from_pixel(width, height, background)
}

/// Write `color` at `(x, y)` if the coordinate lies inside the canvas.
///
/// Out-of-range coordinates (including negative ones) are a no-op.
///
/// # Examples
///
/// ```
/// use farm_sprites::canvas::{new_canvas, set_pixel};
/// use image::Rgb;
///
/// let mut canvas = new_canvas(2, 2, Rgb([0, 0, 0]));
/// set_pixel(&mut canvas, 1, 1, Rgb([255, 0, 0]));
/// set_pixel(&mut canvas, -1, 5, Rgb([255, 0, 0])); // dropped
/// assert_eq!(*canvas.get_pixel(1, 1), Rgb([255, 0, 0]));
/// ```
pub fn set_pixel(canvas: &mut Canvas, x: i32, y: i32, color: Rgb<u8>) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x < canvas.width() && y < canvas.height() {
        canvas.put_pixel(x, y, color);
    }
}

/// Blend `color` over the pixel at `(x, y)` with the given coverage.
///
/// `coverage` is clamped to `0.0..=1.0`; 1.0 is equivalent to [`set_pixel`].
/// Out-of-range coordinates are a no-op.
pub fn blend_pixel(canvas: &mut Canvas, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
    if x < 0 || y < 0 || x as u32 >= canvas.width() || y as u32 >= canvas.height() {
        return;
    }
    let alpha = coverage.clamp(0.0, 1.0);
    let pixel = canvas.get_pixel_mut(x as u32, y as u32);
    for (dst, src) in pixel.0.iter_mut().zip(color.0) {
        let mixed = *dst as f32 * (1.0 - alpha) + src as f32 * alpha;
        *dst = mixed.round() as u8;
    }
}

/// Fill the `w` x `h` rectangle whose top-left corner is `(x, y)`.
///
/// Goes through [`set_pixel`], so the rectangle is clipped to the canvas.
pub fn fill_rect(canvas: &mut Canvas, x: i32, y: i32, w: i32, h: i32, color: Rgb<u8>) {
    for py in y..y + h {
        for px in x..x + w {
            set_pixel(canvas, px, py, color);
        }
    }
}

/// Copy the `w` x `h` region at `(x, y)` out of `canvas`.
///
/// The region is clamped to the canvas by `image`, so asking for more than
/// exists yields a smaller image rather than a panic.
pub fn crop(canvas: &Canvas, x: u32, y: u32, w: u32, h: u32) -> Canvas {
    imageops::crop_imm(canvas, x, y, w, h).to_image()
}

/// Scale a canvas by an integer factor using nearest-neighbor interpolation.
///
/// This keeps pixel edges crisp. A factor of 0 or 1 returns the input as is,
/// and so does a factor whose scaled size would not fit in a `u32`.
pub fn scale_nearest(canvas: Canvas, factor: u32) -> Canvas {
    if factor <= 1 {
        return canvas;
    }
    let (w, h) = canvas.dimensions();
    match (w.checked_mul(factor), h.checked_mul(factor)) {
        (Some(new_w), Some(new_h)) => imageops::resize(&canvas, new_w, new_h, FilterType::Nearest),
        _ => canvas,
    }
}

/// Copy `src` into `dst` with its top-left corner at `(x, y)`.
///
/// Pixels that land outside `dst` are clipped.
pub fn paste(dst: &mut Canvas, src: &Canvas, x: i64, y: i64) {
    imageops::replace(dst, src, x, y);
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const RED: Rgb<u8> = Rgb([255, 0, 0]);
    const GREEN: Rgb<u8> = Rgb([0, 255, 0]);

    #[test]
    fn test_new_canvas_fills_background() {
        let canvas = new_canvas(3, 2, GREEN);
        assert_eq!(canvas.dimensions(), (3, 2));
        assert!(canvas.pixels().all(|p| *p == GREEN));
    }

    #[test]
    fn test_set_pixel_in_bounds() {
        let mut canvas = new_canvas(4, 4, BLACK);
        set_pixel(&mut canvas, 3, 0, RED);
        assert_eq!(*canvas.get_pixel(3, 0), RED);
    }

    #[test]
    fn test_set_pixel_out_of_bounds_is_noop() {
        let mut canvas = new_canvas(4, 4, BLACK);
        let before = canvas.clone();

        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 4), (100, 100), (i32::MIN, i32::MAX)] {
            set_pixel(&mut canvas, x, y, RED);
        }

        assert_eq!(canvas.as_raw(), before.as_raw());
    }

    #[test]
    fn test_blend_pixel_mixes_by_coverage() {
        let mut canvas = new_canvas(2, 1, BLACK);
        blend_pixel(&mut canvas, 0, 0, Rgb([200, 100, 0]), 0.5);
        blend_pixel(&mut canvas, 1, 0, RED, 1.5);
        assert_eq!(*canvas.get_pixel(0, 0), Rgb([100, 50, 0]));
        assert_eq!(*canvas.get_pixel(1, 0), RED);
    }

    #[test]
    fn test_blend_pixel_out_of_bounds_is_noop() {
        let mut canvas = new_canvas(2, 2, BLACK);
        blend_pixel(&mut canvas, 2, 0, RED, 1.0);
        blend_pixel(&mut canvas, 0, -1, RED, 1.0);
        assert!(canvas.pixels().all(|p| *p == BLACK));
    }

    #[test]
    fn test_fill_rect_clips_to_canvas() {
        let mut canvas = new_canvas(4, 4, BLACK);
        fill_rect(&mut canvas, 2, 2, 5, 5, RED);

        let painted = canvas.pixels().filter(|p| **p == RED).count();
        assert_eq!(painted, 4, "Only the 2x2 in-bounds corner should be painted");
        assert_eq!(*canvas.get_pixel(3, 3), RED);
        assert_eq!(*canvas.get_pixel(1, 1), BLACK);
    }

    #[test]
    fn test_fill_rect_empty_size_paints_nothing() {
        let mut canvas = new_canvas(4, 4, BLACK);
        fill_rect(&mut canvas, 1, 1, 0, 3, RED);
        fill_rect(&mut canvas, 1, 1, 3, -2, RED);
        assert!(canvas.pixels().all(|p| *p == BLACK));
    }

    #[test]
    fn test_crop_copies_region() {
        let mut canvas = new_canvas(4, 4, BLACK);
        set_pixel(&mut canvas, 2, 1, RED);

        let region = crop(&canvas, 2, 1, 2, 2);
        assert_eq!(region.dimensions(), (2, 2));
        assert_eq!(*region.get_pixel(0, 0), RED);
        assert_eq!(*region.get_pixel(1, 1), BLACK);
    }

    #[test]
    fn test_scale_nearest_factor_one_returns_original() {
        let canvas = new_canvas(3, 3, RED);
        let scaled = scale_nearest(canvas, 1);
        assert_eq!(scaled.dimensions(), (3, 3));
    }

    #[test]
    fn test_scale_nearest_overflowing_factor_returns_original() {
        let mut canvas = new_canvas(2, 2, BLACK);
        set_pixel(&mut canvas, 1, 0, RED);

        let scaled = scale_nearest(canvas.clone(), u32::MAX);
        assert_eq!(scaled.dimensions(), (2, 2));
        assert_eq!(scaled.as_raw(), canvas.as_raw());
    }

    #[test]
    fn test_scale_nearest_expands_each_pixel_to_block() {
        let mut canvas = new_canvas(2, 1, BLACK);
        set_pixel(&mut canvas, 0, 0, RED);

        let scaled = scale_nearest(canvas, 3);
        assert_eq!(scaled.dimensions(), (6, 3));
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(*scaled.get_pixel(x, y), RED, "({}, {})", x, y);
                assert_eq!(*scaled.get_pixel(x + 3, y), BLACK, "({}, {})", x + 3, y);
            }
        }
    }

    #[test]
    fn test_paste_places_source() {
        let mut dst = new_canvas(4, 4, BLACK);
        let src = new_canvas(2, 2, RED);
        paste(&mut dst, &src, 1, 2);

        assert_eq!(*dst.get_pixel(1, 2), RED);
        assert_eq!(*dst.get_pixel(2, 3), RED);
        assert_eq!(*dst.get_pixel(0, 2), BLACK);
        assert_eq!(*dst.get_pixel(1, 1), BLACK);
    }

    #[test]
    fn test_paste_clips_outside_destination() {
        let mut dst = new_canvas(4, 4, BLACK);
        let src = new_canvas(3, 3, RED);

        paste(&mut dst, &src, 3, 3);
        paste(&mut dst, &src, -2, -2);
        paste(&mut dst, &src, 10, 10);

        assert_eq!(*dst.get_pixel(3, 3), RED);
        assert_eq!(*dst.get_pixel(0, 0), RED);
        assert_eq!(*dst.get_pixel(2, 2), BLACK);
    }
}
