//! Application services - the commands and queries the presentation layer calls

mod craft_service;
mod draw_service;
mod inventory_service;
mod market_service;
mod pack_service;
mod reward_service;

pub use craft_service::{CraftError, CraftService};
pub use draw_service::DrawService;
pub use inventory_service::InventoryService;
pub use market_service::{MarketError, MarketService};
pub use pack_service::{PackService, PackTier};
pub use reward_service::{ClaimReward, RewardService};
