//! Draw service - weighted random sticker draws
//!
//! One instance owns the injected randomness source; packs, crafting, and
//! daily rewards all draw through it.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::application::ports::outbound::RandomnessPort;
use crate::domain::entities::{Catalog, CollectionTag, ItemId};
use crate::domain::value_objects::{Rarity, RarityWeights};

pub struct DrawService {
    catalog: Arc<Catalog>,
    rng: Mutex<Box<dyn RandomnessPort>>,
}

impl DrawService {
    pub fn new(catalog: Arc<Catalog>, rng: Box<dyn RandomnessPort>) -> Self {
        Self {
            catalog,
            rng: Mutex::new(rng),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Draw `count` sticker ids from one series under the given weight table.
    ///
    /// Per draw: sample a unit float, walk the tiers common → legendary
    /// accumulating weights, take the first tier whose cumulative weight
    /// covers the sample. The legendary tier absorbs any probability mass
    /// the table leaves unassigned, so the draw is total even for tables
    /// that do not sum to 1.0. Always returns exactly `count` ids.
    pub fn draw(
        &self,
        count: u32,
        weights: &RarityWeights,
        collection: CollectionTag,
    ) -> Vec<ItemId> {
        if !weights.is_normalized() {
            debug!(
                total = weights.total(),
                "rarity weights do not sum to 1.0; legendary absorbs the remainder"
            );
        }
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let mut drawn = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let rarity = sample_rarity(rng.next_unit(), weights);
            drawn.push(self.pick_of_rarity(rng.as_mut(), rarity, collection));
        }
        debug!(count, %collection, "drew stickers");
        drawn
    }

    /// Uniform picks within a single rarity tier (craft outputs).
    pub fn draw_of_rarity(
        &self,
        count: u32,
        rarity: Rarity,
        collection: CollectionTag,
    ) -> Vec<ItemId> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        (0..count)
            .map(|_| self.pick_of_rarity(rng.as_mut(), rarity, collection))
            .collect()
    }

    fn pick_of_rarity(
        &self,
        rng: &mut dyn RandomnessPort,
        rarity: Rarity,
        collection: CollectionTag,
    ) -> ItemId {
        let tier = self.nearest_tier(collection, rarity);
        tier[rng.pick(tier.len())]
    }

    /// The requested tier, or the nearest populated one when the layout has
    /// no slots of that rarity: lower tiers first, then higher ones. Config
    /// validation guarantees the series itself is never empty, so the search
    /// always lands on a populated tier.
    fn nearest_tier(&self, collection: CollectionTag, rarity: Rarity) -> &[ItemId] {
        let tier = self.catalog.tier(collection, rarity);
        if !tier.is_empty() {
            return tier;
        }
        let below = Rarity::ALL.iter().rev().filter(|r| **r < rarity);
        let above = Rarity::ALL.iter().filter(|r| **r > rarity);
        for fallback in below.chain(above) {
            let tier = self.catalog.tier(collection, *fallback);
            if !tier.is_empty() {
                return tier;
            }
        }
        &[]
    }
}

/// Walk the tiers in fixed order; the last tier is the catch-all.
fn sample_rarity(sample: f64, weights: &RarityWeights) -> Rarity {
    let mut cumulative = 0.0;
    for rarity in Rarity::ALL {
        cumulative += weights.weight(rarity);
        if sample < cumulative {
            return rarity;
        }
    }
    Rarity::Legendary
}
