//! Sprite atlas - the game's procedurally drawn sprite sheet
//!
//! The atlas is a 256x256 grid of 16x16 cells laid out in row bands:
//!
//! | Rows  | Contents                                              |
//! |-------|-------------------------------------------------------|
//! | 0-3   | Player walk cycle, one row per [`Direction`], 4 frames |
//! | 4-10  | One row per [`CropKind`], one column per growth stage  |
//! | 11-13 | One row per [`Npc`], column 0                          |
//!
//! Only the downward player row is drawn; the other direction rows are
//! reserved and stay background.

use crate::canvas::{crop, new_canvas, Canvas};
use crate::palette;
use crate::sprites::{
    draw_crop_stage, draw_npc, draw_player_down, CropKind, Direction, Npc, MAX_STAGE, STAGE_COUNT,
};

/// Edge length of one sprite cell in pixels
pub const SPRITE_SIZE: u32 = 16;

/// Edge length of the atlas in pixels
pub const ATLAS_SIZE: u32 = 256;

/// Walk-cycle frames per direction
pub const PLAYER_FRAMES: u32 = 4;

/// First atlas row of the crop band
pub const CROP_ROW: u32 = 4;

/// First atlas row of the NPC band
pub const NPC_ROW: u32 = 11;

/// A sprite's position and size within the atlas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl SpriteRect {
    /// The cell at grid column `col`, row `row`.
    pub fn cell(col: u32, row: u32) -> Self {
        Self {
            x: col.saturating_mul(SPRITE_SIZE),
            y: row.saturating_mul(SPRITE_SIZE),
            w: SPRITE_SIZE,
            h: SPRITE_SIZE,
        }
    }

    /// Copy this region out of `atlas`.
    pub fn extract(&self, atlas: &Canvas) -> Canvas {
        crop(atlas, self.x, self.y, self.w, self.h)
    }
}

/// Region of the player sprite for `direction` and walk `frame`.
///
/// `frame` is used as the column directly; frames past the walk cycle
/// address cells that hold no player art.
pub fn player_sprite(direction: Direction, frame: u32) -> SpriteRect {
    SpriteRect::cell(frame, direction.row())
}

/// Region of `kind` at growth `stage`; stages past harvest use the harvest cell.
pub fn crop_sprite(kind: CropKind, stage: u8) -> SpriteRect {
    SpriteRect::cell(stage.min(MAX_STAGE) as u32, CROP_ROW + kind.index())
}

/// Region of a villager sprite.
pub fn npc_sprite(npc: Npc) -> SpriteRect {
    SpriteRect::cell(0, NPC_ROW + npc.index())
}

/// Build the full sprite atlas.
///
/// The result depends only on constants, so repeated calls are
/// pixel-identical.
///
/// # Examples
///
/// ```
/// use farm_sprites::atlas::{build_atlas, ATLAS_SIZE};
///
/// let atlas = build_atlas();
/// assert_eq!(atlas.dimensions(), (ATLAS_SIZE, ATLAS_SIZE));
/// ```
pub fn build_atlas() -> Canvas {
    let mut atlas = new_canvas(ATLAS_SIZE, ATLAS_SIZE, palette::BG);

    for direction in Direction::ALL {
        if !direction.is_drawn() {
            continue;
        }
        for frame in 0..PLAYER_FRAMES {
            let rect = player_sprite(direction, frame);
            draw_player_down(&mut atlas, rect.x as i32, rect.y as i32);
        }
    }

    for kind in CropKind::ALL {
        for stage in 0..STAGE_COUNT {
            let rect = crop_sprite(kind, stage);
            draw_crop_stage(&mut atlas, rect.x as i32, rect.y as i32, stage, kind.color());
        }
    }

    for npc in Npc::ALL {
        let rect = npc_sprite(npc);
        let (clothing, hair) = npc.colors();
        draw_npc(&mut atlas, rect.x as i32, rect.y as i32, clothing, hair);
    }

    atlas
}
