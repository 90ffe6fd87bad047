//! Value objects - Immutable objects defined by their attributes

mod ids;
mod price;
mod rarity;
mod recipe;

pub use ids::{ListingId, OwnerId, SaleId};
pub use price::{Price, PriceError};
pub use rarity::{Rarity, RarityWeights};
pub use recipe::CraftRecipe;
