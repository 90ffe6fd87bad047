//! Rarity tiers and the weight tables that drive sticker draws

use serde::{Deserialize, Serialize};

/// Rarity tier of a collectible sticker.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Tiers in the order the draw walk visits them.
    pub const ALL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        };
        write!(f, "{name}")
    }
}

/// Draw probabilities per rarity tier.
///
/// The draw walks tiers in [`Rarity::ALL`] order and the legendary tier
/// absorbs whatever probability mass the table leaves unassigned, so a table
/// summing below 1.0 is still total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RarityWeights {
    pub common: f64,
    pub rare: f64,
    pub epic: f64,
    pub legendary: f64,
}

impl RarityWeights {
    pub fn weight(&self, rarity: Rarity) -> f64 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Rare => self.rare,
            Rarity::Epic => self.epic,
            Rarity::Legendary => self.legendary,
        }
    }

    pub fn total(&self) -> f64 {
        self.common + self.rare + self.epic + self.legendary
    }

    /// True when the table sums to 1.0 within floating-point tolerance.
    pub fn is_normalized(&self) -> bool {
        (self.total() - 1.0).abs() < 1e-6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_order_starts_at_common() {
        assert_eq!(Rarity::ALL[0], Rarity::Common);
        assert_eq!(Rarity::ALL[3], Rarity::Legendary);
    }

    #[test]
    fn normalized_detection() {
        let weights = RarityWeights {
            common: 0.70,
            rare: 0.22,
            epic: 0.07,
            legendary: 0.01,
        };
        assert!(weights.is_normalized());

        let short = RarityWeights {
            common: 0.5,
            rare: 0.2,
            epic: 0.1,
            legendary: 0.1,
        };
        assert!(!short.is_normalized());
    }
}
