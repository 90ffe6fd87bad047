//! Crafting recipes

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Rarity;

/// A fixed crafting recipe: consume duplicates of one rarity, receive newly
/// drawn stickers of another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CraftRecipe {
    pub input_rarity: Rarity,
    pub input_count: u32,
    pub output_rarity: Rarity,
    pub output_count: u32,
}
