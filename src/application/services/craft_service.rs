//! Craft service - turns duplicate stickers into higher-rarity ones

use std::sync::Arc;

use tracing::info;

use crate::application::services::{DrawService, InventoryService};
use crate::domain::entities::{CollectionTag, ItemId, LedgerError};
use crate::domain::value_objects::{CraftRecipe, OwnerId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CraftError {
    #[error("unknown craft recipe index {0}")]
    UnknownRecipe(usize),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Applies the fixed recipe table: consume duplicates of the input rarity,
/// draw and credit fresh stickers of the output rarity.
pub struct CraftService {
    recipes: Vec<CraftRecipe>,
    inventory: Arc<InventoryService>,
    draw: Arc<DrawService>,
}

impl CraftService {
    pub fn new(
        recipes: Vec<CraftRecipe>,
        inventory: Arc<InventoryService>,
        draw: Arc<DrawService>,
    ) -> Self {
        Self {
            recipes,
            inventory,
            draw,
        }
    }

    pub fn recipes(&self) -> &[CraftRecipe] {
        &self.recipes
    }

    /// Apply one recipe for `owner` and return the newly drawn sticker ids.
    ///
    /// The duplicate debit and the output credit happen together or not at
    /// all: a failed precondition leaves the ledger untouched, and once the
    /// debit lands the draw cannot fail. Outputs come from the main series.
    pub fn craft(&self, owner: &OwnerId, recipe_index: usize) -> Result<Vec<ItemId>, CraftError> {
        let recipe = *self
            .recipes
            .get(recipe_index)
            .ok_or(CraftError::UnknownRecipe(recipe_index))?;
        let consumed =
            self.inventory
                .debit_duplicates(owner, recipe.input_rarity, recipe.input_count)?;
        let minted =
            self.draw
                .draw_of_rarity(recipe.output_count, recipe.output_rarity, CollectionTag::Main);
        self.inventory.credit_all(owner, &minted);
        info!(
            %owner,
            recipe = recipe_index,
            consumed = consumed.len(),
            minted = minted.len(),
            "crafted"
        );
        Ok(minted)
    }
}
