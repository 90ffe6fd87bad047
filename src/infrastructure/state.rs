//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::ports::outbound::{ClockPort, RandomnessPort, StatePort};
use crate::application::services::{
    CraftService, DrawService, InventoryService, MarketService, PackService, RewardService,
};
use crate::domain::entities::Catalog;
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::config::GameConfig;
use crate::infrastructure::persistence::SavedState;
use crate::infrastructure::random::ThreadRandomness;

/// The engine's composition root: every service wired over one shared
/// catalog and ledger.
///
/// The presentation layer (or a test harness) holds the only instance,
/// calls the services directly, and triggers persistence explicitly via
/// [`AppState::save`] / [`AppState::load`].
pub struct AppState {
    pub config: GameConfig,
    pub catalog: Arc<Catalog>,
    pub inventory: Arc<InventoryService>,
    pub draw: Arc<DrawService>,
    pub crafting: Arc<CraftService>,
    pub market: Arc<MarketService>,
    pub packs: Arc<PackService>,
    pub rewards: Arc<RewardService>,
}

impl AppState {
    /// Wire the engine with live randomness and the system clock.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_adapters(config, Box::new(ThreadRandomness), Arc::new(SystemClock))
    }

    /// Wire the engine with injected randomness and clock adapters.
    pub fn with_adapters(
        config: GameConfig,
        rng: Box<dyn RandomnessPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self> {
        config.validate()?;
        let catalog = Arc::new(Catalog::generate(&config.catalog.main, &config.catalog.bonus));
        let inventory = Arc::new(InventoryService::new(catalog.clone()));
        let draw = Arc::new(DrawService::new(catalog.clone(), rng));
        let crafting = Arc::new(CraftService::new(
            config.recipes.clone(),
            inventory.clone(),
            draw.clone(),
        ));
        let market = Arc::new(MarketService::new(inventory.clone(), clock.clone()));
        let packs = Arc::new(PackService::new(
            config.packs.clone(),
            inventory.clone(),
            draw.clone(),
        ));
        let rewards = Arc::new(RewardService::new(
            config.daily_schedule,
            config.daily_pack_tier.clone(),
            clock,
            packs.clone(),
        ));
        Ok(Self {
            config,
            catalog,
            inventory,
            draw,
            crafting,
            market,
            packs,
            rewards,
        })
    }

    /// Persist the mutable game state to the given store.
    pub fn save(&self, store: &dyn StatePort) -> Result<()> {
        SavedState::capture(self).persist(store)?;
        Ok(())
    }

    /// Restore previously persisted game state.
    pub fn load(&self, store: &dyn StatePort) -> Result<()> {
        SavedState::hydrate(store)?.apply(self);
        Ok(())
    }
}
