//! Game configuration
//!
//! The shipped defaults carry the live game data: catalog layouts, pack
//! tiers, craft recipes, and the daily reward schedule. A JSON override
//! file can replace any of it, pointed at by the `STICKERDEX_CONFIG`
//! environment variable.

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::application::services::PackTier;
use crate::domain::entities::{Catalog, CatalogLayout, CollectionTag, RewardSchedule};
use crate::domain::value_objects::{CraftRecipe, Rarity, RarityWeights};

pub const CONFIG_ENV: &str = "STICKERDEX_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub main: CatalogLayout,
    pub bonus: CatalogLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub catalog: CatalogConfig,
    pub packs: Vec<PackTier>,
    /// Pack tier granted by the daily login reward.
    pub daily_pack_tier: String,
    pub recipes: Vec<CraftRecipe>,
    pub daily_schedule: RewardSchedule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig {
                // Main series: 9 album pages of 12 slots. Per page: slots
                // 6..10 rare, slot 10 epic, and every third page ends in a
                // legendary.
                main: CatalogLayout {
                    pages: 9,
                    page_size: 12,
                    rare_slots: 6..10,
                    epic_slots: vec![10],
                    legendary_page_interval: 3,
                },
                // Bonus series: a single page.
                bonus: CatalogLayout {
                    pages: 1,
                    page_size: 12,
                    rare_slots: 4..8,
                    epic_slots: vec![8, 9, 10],
                    legendary_page_interval: 1,
                },
            },
            packs: vec![
                PackTier {
                    key: "basic".to_string(),
                    cards: 3,
                    weights: RarityWeights {
                        common: 0.70,
                        rare: 0.22,
                        epic: 0.07,
                        legendary: 0.01,
                    },
                    bonus_weights: RarityWeights {
                        common: 0.60,
                        rare: 0.25,
                        epic: 0.12,
                        legendary: 0.03,
                    },
                },
                PackTier {
                    key: "premium".to_string(),
                    cards: 5,
                    weights: RarityWeights {
                        common: 0.55,
                        rare: 0.30,
                        epic: 0.12,
                        legendary: 0.03,
                    },
                    bonus_weights: RarityWeights {
                        common: 0.45,
                        rare: 0.30,
                        epic: 0.18,
                        legendary: 0.07,
                    },
                },
                PackTier {
                    key: "legendary".to_string(),
                    cards: 5,
                    weights: RarityWeights {
                        common: 0.30,
                        rare: 0.40,
                        epic: 0.22,
                        legendary: 0.08,
                    },
                    bonus_weights: RarityWeights {
                        common: 0.20,
                        rare: 0.40,
                        epic: 0.28,
                        legendary: 0.12,
                    },
                },
            ],
            daily_pack_tier: "basic".to_string(),
            recipes: vec![
                CraftRecipe {
                    input_rarity: Rarity::Common,
                    input_count: 5,
                    output_rarity: Rarity::Rare,
                    output_count: 1,
                },
                CraftRecipe {
                    input_rarity: Rarity::Rare,
                    input_count: 5,
                    output_rarity: Rarity::Epic,
                    output_count: 1,
                },
                CraftRecipe {
                    input_rarity: Rarity::Epic,
                    input_count: 4,
                    output_rarity: Rarity::Legendary,
                    output_count: 1,
                },
            ],
            daily_schedule: RewardSchedule([1, 1, 2, 1, 1, 2, 3]),
        }
    }
}

impl GameConfig {
    /// Shipped defaults, or the JSON override pointed at by
    /// `STICKERDEX_CONFIG`.
    pub fn load() -> Result<Self> {
        match env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read game config {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("invalid game config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the engine cannot run on.
    ///
    /// Beyond shape checks, this generates the catalog the layouts describe
    /// and refuses any rarity reference the generated catalog cannot serve:
    /// a series without commons, a recipe minting an absent tier, or pack
    /// weight mass on an absent tier.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.main.size() == 0 {
            bail!("main catalog layout is empty");
        }
        if self.catalog.bonus.size() == 0 {
            bail!("bonus catalog layout is empty");
        }
        let catalog = Catalog::generate(&self.catalog.main, &self.catalog.bonus);
        for collection in [CollectionTag::Main, CollectionTag::Bonus] {
            if catalog.tier(collection, Rarity::Common).is_empty() {
                bail!("{collection} series layout has no common slots");
            }
        }
        for recipe in &self.recipes {
            if catalog
                .tier(CollectionTag::Main, recipe.output_rarity)
                .is_empty()
            {
                bail!(
                    "recipe {} -> {} mints a rarity the main series does not contain",
                    recipe.input_rarity,
                    recipe.output_rarity
                );
            }
        }
        if self.packs.is_empty() {
            bail!("no pack tiers configured");
        }
        for tier in &self.packs {
            for weights in [&tier.weights, &tier.bonus_weights] {
                for rarity in Rarity::ALL {
                    if weights.weight(rarity) > 0.0
                        && catalog.tier(CollectionTag::Main, rarity).is_empty()
                    {
                        bail!(
                            "pack tier {:?} assigns weight to {rarity}, which the main series does not contain",
                            tier.key
                        );
                    }
                }
            }
        }
        if !self.packs.iter().any(|tier| tier.key == self.daily_pack_tier) {
            bail!(
                "daily pack tier {:?} is not a configured pack tier",
                self.daily_pack_tier
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn defaults_validate() {
        GameConfig::default().validate().unwrap();
    }

    #[test]
    fn default_catalog_sizes() {
        let config = GameConfig::default();
        assert_eq!(config.catalog.main.size(), 108);
        assert_eq!(config.catalog.bonus.size(), 12);
    }

    #[test]
    fn override_file_round_trips() {
        let mut config = GameConfig::default();
        config.daily_schedule = RewardSchedule([2, 2, 2, 2, 2, 2, 5]);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&config).unwrap().as_bytes())
            .unwrap();
        let loaded = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn unknown_daily_tier_is_rejected() {
        let mut config = GameConfig::default();
        config.daily_pack_tier = "mythic".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn commonless_layouts_are_rejected() {
        // Widening the rare band over every slot leaves the main series
        // without a single common sticker.
        let mut config = GameConfig::default();
        config.catalog.main.rare_slots = 0..12;
        assert!(config.validate().is_err());
    }

    #[test]
    fn recipes_minting_an_absent_tier_are_rejected() {
        // No legendary pages, but the shipped table still has an
        // epic -> legendary recipe.
        let mut config = GameConfig::default();
        config.catalog.main.legendary_page_interval = 0;
        for tier in &mut config.packs {
            tier.weights.legendary = 0.0;
            tier.bonus_weights.legendary = 0.0;
        }
        assert!(config.validate().is_err());
    }

    #[test]
    fn pack_weight_on_an_absent_tier_is_rejected() {
        let mut config = GameConfig::default();
        config.catalog.main.legendary_page_interval = 0;
        config.recipes.truncate(2); // drop the legendary-minting recipe
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_layouts_are_rejected() {
        let mut config = GameConfig::default();
        config.catalog.main.pages = 0;
        assert!(config.validate().is_err());
    }
}
