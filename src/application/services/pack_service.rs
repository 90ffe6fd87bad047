//! Pack service - opening purchased sticker packs

use std::sync::Arc;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::application::services::{DrawService, InventoryService};
use crate::domain::entities::{CollectionTag, ItemId};
use crate::domain::value_objects::{OwnerId, RarityWeights};

/// A purchasable pack tier: how many stickers it opens into and under which
/// weight tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackTier {
    pub key: String,
    pub cards: u32,
    pub weights: RarityWeights,
    /// Boosted table for owners holding at least one bonus-series sticker.
    pub bonus_weights: RarityWeights,
}

pub struct PackService {
    tiers: Vec<PackTier>,
    inventory: Arc<InventoryService>,
    draw: Arc<DrawService>,
}

impl PackService {
    pub fn new(
        tiers: Vec<PackTier>,
        inventory: Arc<InventoryService>,
        draw: Arc<DrawService>,
    ) -> Self {
        Self {
            tiers,
            inventory,
            draw,
        }
    }

    pub fn tiers(&self) -> &[PackTier] {
        &self.tiers
    }

    pub fn tier(&self, key: &str) -> Option<&PackTier> {
        self.tiers.iter().find(|tier| tier.key == key)
    }

    /// Open one pack of `tier_key` for `owner`: draw the tier's sticker
    /// count from the main series and credit the result. Bonus-series
    /// holders draw under the tier's boosted weights.
    pub fn open(&self, owner: &OwnerId, tier_key: &str) -> Result<Vec<ItemId>> {
        let Some(tier) = self.tier(tier_key) else {
            bail!("unknown pack tier {tier_key:?}");
        };
        let weights = if self.holds_bonus(owner) {
            &tier.bonus_weights
        } else {
            &tier.weights
        };
        let drawn = self.draw.draw(tier.cards, weights, CollectionTag::Main);
        self.inventory.credit_all(owner, &drawn);
        info!(%owner, tier = tier_key, count = drawn.len(), "opened pack");
        Ok(drawn)
    }

    fn holds_bonus(&self, owner: &OwnerId) -> bool {
        self.inventory
            .holdings_of(owner)
            .keys()
            .any(|id| id.collection == CollectionTag::Bonus)
    }
}
