//! Procedural sprite drawers and the sprite catalogs
//!
//! Each drawer paints a fixed pattern of filled rectangles into a 16x16 cell
//! whose top-left corner is `(x, y)`. Drawers never allocate and never fail;
//! anything outside the target canvas is clipped by the pixel writer.

use image::Rgb;

use crate::canvas::{fill_rect, set_pixel, Canvas};
use crate::palette;

/// Highest growth stage; anything above is drawn as harvestable.
pub const MAX_STAGE: u8 = 4;

/// Number of growth stages per crop.
pub const STAGE_COUNT: u8 = MAX_STAGE + 1;

/// Facing direction of the player sprite, one atlas row each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Up,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Down, Direction::Up, Direction::Left, Direction::Right];

    /// Atlas row holding this direction's frames
    pub fn row(self) -> u32 {
        match self {
            Direction::Down => 0,
            Direction::Up => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// Whether the atlas carries drawn frames for this direction.
    ///
    /// Only the downward walk cycle exists so far; the other rows stay blank.
    pub fn is_drawn(self) -> bool {
        matches!(self, Direction::Down)
    }
}

/// Crop types in atlas order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CropKind {
    Parsnip,
    Cauliflower,
    Potato,
    Tomato,
    Corn,
    Pumpkin,
    Wheat,
}

impl CropKind {
    pub const ALL: [CropKind; 7] = [
        CropKind::Parsnip,
        CropKind::Cauliflower,
        CropKind::Potato,
        CropKind::Tomato,
        CropKind::Corn,
        CropKind::Pumpkin,
        CropKind::Wheat,
    ];

    /// Position of this crop in [`CropKind::ALL`]
    pub fn index(self) -> u32 {
        match self {
            CropKind::Parsnip => 0,
            CropKind::Cauliflower => 1,
            CropKind::Potato => 2,
            CropKind::Tomato => 3,
            CropKind::Corn => 4,
            CropKind::Pumpkin => 5,
            CropKind::Wheat => 6,
        }
    }

    /// Color of the harvestable crop (also used for the seed)
    pub fn color(self) -> Rgb<u8> {
        match self {
            CropKind::Parsnip => palette::PARSNIP,
            CropKind::Cauliflower => palette::CAULIFLOWER,
            CropKind::Potato => palette::POTATO,
            CropKind::Tomato => palette::TOMATO,
            CropKind::Corn => palette::CORN,
            CropKind::Pumpkin => palette::PUMPKIN,
            CropKind::Wheat => palette::WHEAT,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            CropKind::Parsnip => "Parsnip",
            CropKind::Cauliflower => "Cauliflower",
            CropKind::Potato => "Potato",
            CropKind::Tomato => "Tomato",
            CropKind::Corn => "Corn",
            CropKind::Pumpkin => "Pumpkin",
            CropKind::Wheat => "Wheat",
        }
    }
}

/// Human-readable name of a growth stage (stages past the last clamp).
pub fn stage_name(stage: u8) -> &'static str {
    match stage.min(MAX_STAGE) {
        0 => "Seed",
        1 => "Sprout",
        2 => "Growing",
        3 => "Mature",
        _ => "Harvest",
    }
}

/// Named villagers in atlas order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Npc {
    Pierre,
    Emily,
    Shane,
}

impl Npc {
    pub const ALL: [Npc; 3] = [Npc::Pierre, Npc::Emily, Npc::Shane];

    pub fn index(self) -> u32 {
        match self {
            Npc::Pierre => 0,
            Npc::Emily => 1,
            Npc::Shane => 2,
        }
    }

    /// (clothing, hair) colors
    pub fn colors(self) -> (Rgb<u8>, Rgb<u8>) {
        match self {
            Npc::Pierre => (palette::PIERRE_SHIRT, palette::PIERRE_HAIR),
            Npc::Emily => (palette::EMILY_DRESS, palette::EMILY_HAIR),
            Npc::Shane => (palette::SHANE_SHIRT, palette::SHANE_HAIR),
        }
    }

    /// Caption shown next to the sprite in the preview
    pub fn caption(self) -> &'static str {
        match self {
            Npc::Pierre => "Pierre (Merchant)",
            Npc::Emily => "Emily (Villager)",
            Npc::Shane => "Shane (Villager)",
        }
    }
}

/// Colors for the shared humanoid body plan.
struct Figure {
    skin: Rgb<u8>,
    hair: Rgb<u8>,
    eyes: Rgb<u8>,
    torso: Rgb<u8>,
    legs: Rgb<u8>,
}

/// Head, hair strip, eyes, torso and legs. Covers rows 4..15, cols 5..11.
fn draw_figure(canvas: &mut Canvas, x: i32, y: i32, figure: &Figure) {
    fill_rect(canvas, x + 5, y + 4, 6, 4, figure.skin);
    fill_rect(canvas, x + 5, y + 4, 6, 1, figure.hair);
    set_pixel(canvas, x + 6, y + 6, figure.eyes);
    set_pixel(canvas, x + 9, y + 6, figure.eyes);
    fill_rect(canvas, x + 5, y + 8, 6, 4, figure.torso);
    fill_rect(canvas, x + 6, y + 12, 4, 3, figure.legs);
}

/// Draw the player facing down.
pub fn draw_player_down(canvas: &mut Canvas, x: i32, y: i32) {
    draw_figure(
        canvas,
        x,
        y,
        &Figure {
            skin: palette::SKIN,
            hair: palette::HAIR,
            eyes: palette::EYES,
            torso: palette::SHIRT,
            legs: palette::PANTS,
        },
    );
}

/// Draw a crop at `stage` of growth.
///
/// - stage 0: 2x2 seed block in the crop color
/// - stages 1-3: dark green stem, `4 + stage * 2` pixels tall, growing up from row 13
/// - stage 4: crop body (rows 11-13) under a dark green leaf cap (rows 8-10)
///
/// Stages above 4 are drawn as stage 4.
pub fn draw_crop_stage(canvas: &mut Canvas, x: i32, y: i32, stage: u8, crop_color: Rgb<u8>) {
    match stage.min(MAX_STAGE) {
        0 => fill_rect(canvas, x + 7, y + 12, 2, 2, crop_color),
        MAX_STAGE => {
            fill_rect(canvas, x + 6, y + 10, 5, 4, crop_color);
            // Leaf cap overlaps the top row of the body
            fill_rect(canvas, x + 6, y + 8, 5, 3, palette::DARK_GREEN);
        }
        growing => {
            let height = 4 + growing as i32 * 2;
            fill_rect(canvas, x + 7, y + 14 - height, 2, height, palette::DARK_GREEN);
        }
    }
}

/// Draw a villager with the given clothing and hair colors.
pub fn draw_npc(canvas: &mut Canvas, x: i32, y: i32, clothing: Rgb<u8>, hair: Rgb<u8>) {
    draw_figure(
        canvas,
        x,
        y,
        &Figure {
            skin: palette::NPC_SKIN,
            hair,
            eyes: palette::OUTLINE,
            torso: clothing,
            legs: palette::NPC_PANTS,
        },
    );
}
