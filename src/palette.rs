//! The fixed sprite palette
//!
//! Colors are shared by the atlas drawers and match the in-game sprite
//! colors. Every entry is also reachable by its symbolic name through
//! [`lookup`].

use image::Rgb;

// Player
pub const SKIN: Rgb<u8> = Rgb([255, 220, 177]);
pub const SHIRT: Rgb<u8> = Rgb([65, 105, 225]);
pub const PANTS: Rgb<u8> = Rgb([101, 67, 33]);
pub const HAIR: Rgb<u8> = Rgb([139, 69, 19]);
pub const OUTLINE: Rgb<u8> = Rgb([30, 30, 30]);
pub const EYES: Rgb<u8> = Rgb([50, 50, 50]);

// Crops at their harvestable stage
pub const PARSNIP: Rgb<u8> = Rgb([255, 248, 220]);
pub const CAULIFLOWER: Rgb<u8> = Rgb([255, 255, 240]);
pub const POTATO: Rgb<u8> = Rgb([222, 184, 135]);
pub const TOMATO: Rgb<u8> = Rgb([255, 69, 0]);
pub const CORN: Rgb<u8> = Rgb([255, 215, 0]);
pub const PUMPKIN: Rgb<u8> = Rgb([255, 117, 24]);
pub const WHEAT: Rgb<u8> = Rgb([245, 222, 179]);

pub const STEM: Rgb<u8> = Rgb([34, 139, 34]);
pub const DARK_GREEN: Rgb<u8> = Rgb([0, 100, 0]);
pub const SOIL: Rgb<u8> = Rgb([101, 67, 33]);

// NPCs
pub const NPC_SKIN: Rgb<u8> = Rgb([255, 220, 177]);
pub const PIERRE_SHIRT: Rgb<u8> = Rgb([34, 139, 34]);
pub const PIERRE_HAIR: Rgb<u8> = Rgb([85, 107, 47]);
pub const EMILY_DRESS: Rgb<u8> = Rgb([147, 112, 219]);
pub const EMILY_HAIR: Rgb<u8> = Rgb([255, 69, 0]);
pub const SHANE_SHIRT: Rgb<u8> = Rgb([105, 105, 105]);
pub const SHANE_HAIR: Rgb<u8> = Rgb([47, 79, 79]);
pub const NPC_PANTS: Rgb<u8> = Rgb([60, 60, 60]);

/// Atlas background
pub const BG: Rgb<u8> = Rgb([40, 40, 40]);

/// Every palette entry keyed by its symbolic name.
pub const ENTRIES: &[(&str, Rgb<u8>)] = &[
    ("skin", SKIN),
    ("shirt", SHIRT),
    ("pants", PANTS),
    ("hair", HAIR),
    ("outline", OUTLINE),
    ("eyes", EYES),
    ("parsnip", PARSNIP),
    ("cauliflower", CAULIFLOWER),
    ("potato", POTATO),
    ("tomato", TOMATO),
    ("corn", CORN),
    ("pumpkin", PUMPKIN),
    ("wheat", WHEAT),
    ("stem", STEM),
    ("darkGreen", DARK_GREEN),
    ("soil", SOIL),
    ("npcSkin", NPC_SKIN),
    ("pierreShirt", PIERRE_SHIRT),
    ("pierreHair", PIERRE_HAIR),
    ("emilyDress", EMILY_DRESS),
    ("emilyHair", EMILY_HAIR),
    ("shaneShirt", SHANE_SHIRT),
    ("shaneHair", SHANE_HAIR),
    ("npcPants", NPC_PANTS),
    ("bg", BG),
];

/// Look up a palette color by its symbolic name.
///
/// # Examples
///
/// ```
/// use farm_sprites::palette::{lookup, SHIRT};
///
/// assert_eq!(lookup("shirt"), Some(SHIRT));
/// assert_eq!(lookup("chartreuse"), None);
/// ```
pub fn lookup(name: &str) -> Option<Rgb<u8>> {
    ENTRIES.iter().find(|(key, _)| *key == name).map(|(_, color)| *color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = ENTRIES.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), ENTRIES.len());
    }

    #[test]
    fn test_lookup_matches_constants() {
        assert_eq!(lookup("darkGreen"), Some(DARK_GREEN));
        assert_eq!(lookup("bg"), Some(Rgb([40, 40, 40])));
        assert_eq!(lookup("soil"), Some(PANTS));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(lookup("DarkGreen"), None);
        assert_eq!(lookup(""), None);
    }
}
