//! Farm sprites - procedural sprite atlas and labeled preview generator
//!
//! This library provides functionality to:
//! - Draw the game's player, crop and NPC sprites into a 256x256 atlas
//! - Compose a labeled, upscaled preview of that atlas
//! - Write the result to PNG

pub mod atlas;
pub mod canvas;
pub mod cli;
pub mod config;
pub mod output;
pub mod palette;
pub mod preview;
pub mod sprites;
pub mod text;
