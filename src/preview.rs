//! Labeled preview of the sprite atlas
//!
//! The preview shows the whole atlas at 2x near the top, followed by one
//! section each for the player, the crops and the NPCs. Section sprites are
//! cropped out of the unscaled atlas and enlarged 3x. Sections are stacked
//! with a running vertical offset; anything that runs past the bottom edge
//! is clipped.

use image::Rgb;

use crate::atlas::{crop_sprite, npc_sprite, player_sprite, ATLAS_SIZE, PLAYER_FRAMES, SPRITE_SIZE};
use crate::canvas::{new_canvas, paste, scale_nearest, Canvas};
use crate::sprites::{CropKind, Direction, Npc, STAGE_COUNT};
use crate::text::{draw_text, FontSet};

pub const PREVIEW_WIDTH: u32 = 1200;
pub const PREVIEW_HEIGHT: u32 = 1400;

/// Enlargement of the full atlas
pub const ATLAS_SCALE: u32 = 2;

/// Enlargement of individual section sprites
pub const SPRITE_SCALE: u32 = 3;

pub const TITLE: &str = "STARDEW VALLEY CLONE - Sprite Atlas";

const BACKGROUND: Rgb<u8> = Rgb([26, 26, 26]);
const HEADING: Rgb<u8> = Rgb([76, 175, 80]);
const CAPTION: Rgb<u8> = Rgb([136, 136, 136]);
const DESCRIPTION: Rgb<u8> = Rgb([170, 170, 170]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Top edge of the enlarged atlas
const ATLAS_TOP: i32 = 70;

/// Left edge of section headers
const SECTION_LEFT: i32 = 50;

/// Left edge of section sprites
const ITEM_LEFT: i32 = 70;

/// Left edge of the first crop stage
const STAGES_LEFT: i32 = 200;

/// Edge length of an enlarged section sprite
const SCALED_SPRITE: i32 = (SPRITE_SIZE * SPRITE_SCALE) as i32;

/// Compose the labeled preview of `atlas`.
///
/// `atlas` must be the unscaled sprite atlas from
/// [`build_atlas`](crate::atlas::build_atlas). The result is always
/// [`PREVIEW_WIDTH`] x [`PREVIEW_HEIGHT`].
pub fn compose_preview(atlas: &Canvas, fonts: &FontSet) -> Canvas {
    let mut preview = new_canvas(PREVIEW_WIDTH, PREVIEW_HEIGHT, BACKGROUND);
    let width = PREVIEW_WIDTH as i32;

    draw_text(&mut preview, width / 2 - 250, 20, TITLE, HEADING, &fonts.title);

    let scaled_atlas = (ATLAS_SIZE * ATLAS_SCALE) as i32;
    let atlas_left = (width - scaled_atlas) / 2;
    paste(
        &mut preview,
        &scale_nearest(atlas.clone(), ATLAS_SCALE),
        atlas_left as i64,
        ATLAS_TOP as i64,
    );
    draw_text(
        &mut preview,
        atlas_left,
        ATLAS_TOP + scaled_atlas + 10,
        "Full Sprite Atlas (16x16 px sprites, 2x scale)",
        CAPTION,
        &fonts.label,
    );

    let mut y = ATLAS_TOP + scaled_atlas + 60;
    y = draw_player_section(&mut preview, atlas, fonts, y);
    y = draw_crop_section(&mut preview, atlas, fonts, y);
    draw_npc_section(&mut preview, atlas, fonts, y);

    preview
}

/// Paste a single enlarged sprite.
fn paste_sprite(preview: &mut Canvas, sprite: Canvas, x: i32, y: i32) {
    paste(preview, &scale_nearest(sprite, SPRITE_SCALE), x as i64, y as i64);
}

fn draw_player_section(preview: &mut Canvas, atlas: &Canvas, fonts: &FontSet, mut y: i32) -> i32 {
    draw_text(preview, SECTION_LEFT, y, "PLAYER CHARACTER - Farmer", HEADING, &fonts.section);
    y += 35;
    draw_text(
        preview,
        SECTION_LEFT,
        y,
        "Royal blue shirt, brown hair, animated",
        DESCRIPTION,
        &fonts.label,
    );
    y += 30;

    for frame in 0..PLAYER_FRAMES {
        let x = ITEM_LEFT + frame as i32 * (SCALED_SPRITE + 10);
        paste_sprite(preview, player_sprite(Direction::Down, frame).extract(atlas), x, y);
        draw_text(
            preview,
            x,
            y + SCALED_SPRITE + 5,
            &format!("Frame {}", frame + 1),
            CAPTION,
            &fonts.label,
        );
    }

    y + 90
}

fn draw_crop_section(preview: &mut Canvas, atlas: &Canvas, fonts: &FontSet, mut y: i32) -> i32 {
    draw_text(
        preview,
        SECTION_LEFT,
        y,
        "CROPS - 7 Types, 5 Growth Stages",
        HEADING,
        &fonts.section,
    );
    y += 35;

    for kind in CropKind::ALL {
        draw_text(preview, ITEM_LEFT, y, kind.display_name(), WHITE, &fonts.label);
        for stage in 0..STAGE_COUNT {
            let x = STAGES_LEFT + stage as i32 * (SCALED_SPRITE + 5);
            paste_sprite(preview, crop_sprite(kind, stage).extract(atlas), x, y - 5);
        }
        y += SCALED_SPRITE + 15;
    }

    y + 30
}

fn draw_npc_section(preview: &mut Canvas, atlas: &Canvas, fonts: &FontSet, mut y: i32) {
    draw_text(preview, SECTION_LEFT, y, "NPCs - Unique Characters", HEADING, &fonts.section);
    y += 35;

    for npc in Npc::ALL {
        paste_sprite(preview, npc_sprite(npc).extract(atlas), ITEM_LEFT, y);
        draw_text(preview, ITEM_LEFT + 50, y + 10, npc.caption(), WHITE, &fonts.label);
        y += SCALED_SPRITE + 20;
    }
}
