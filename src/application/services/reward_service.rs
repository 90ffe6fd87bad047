//! Reward service - the daily login claim flow
//!
//! Wraps the pure claim state machine with the clock and pack opening:
//! a successful claim opens the granted number of packs and credits the
//! stickers they contain.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{info, warn};

use crate::application::ports::outbound::ClockPort;
use crate::application::services::PackService;
use crate::domain::entities::{DailyLoginState, ItemId, RewardSchedule};
use crate::domain::value_objects::OwnerId;

/// Outcome of a successful daily claim: the cycle grant plus the stickers
/// the granted packs opened into.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimReward {
    pub day: u8,
    pub streak: u32,
    pub packs: u32,
    pub items: Vec<ItemId>,
}

pub struct RewardService {
    schedule: RewardSchedule,
    pack_tier: String,
    clock: Arc<dyn ClockPort>,
    packs: Arc<PackService>,
    state: RwLock<DailyLoginState>,
}

impl RewardService {
    pub fn new(
        schedule: RewardSchedule,
        pack_tier: String,
        clock: Arc<dyn ClockPort>,
        packs: Arc<PackService>,
    ) -> Self {
        Self {
            schedule,
            pack_tier,
            clock,
            packs,
            state: RwLock::new(DailyLoginState::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, DailyLoginState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, DailyLoginState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn can_claim(&self) -> bool {
        self.read().can_claim(self.clock.today())
    }

    /// Claim today's login reward for `owner`. `None` when it was already
    /// taken today; otherwise the cycle advances, the granted packs are
    /// opened, and their stickers are credited.
    pub fn claim(&self, owner: &OwnerId) -> Option<ClaimReward> {
        let today = self.clock.today();
        let grant = self.write().claim(today, &self.schedule)?;

        let mut items = Vec::new();
        for _ in 0..grant.packs {
            // Config validation pins the tier, so this only fires on a
            // misconfigured harness.
            match self.packs.open(owner, &self.pack_tier) {
                Ok(drawn) => items.extend(drawn),
                Err(error) => {
                    warn!(%error, tier = %self.pack_tier, "daily reward pack failed to open")
                }
            }
        }
        info!(
            %owner,
            day = grant.day,
            streak = grant.streak,
            packs = grant.packs,
            "claimed daily reward"
        );
        Some(ClaimReward {
            day: grant.day,
            streak: grant.streak,
            packs: grant.packs,
            items,
        })
    }

    pub fn snapshot(&self) -> DailyLoginState {
        self.read().clone()
    }

    pub fn restore(&self, state: DailyLoginState) {
        *self.write() = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{DrawService, InventoryService, PackTier};
    use crate::domain::entities::{Catalog, CatalogLayout};
    use crate::domain::value_objects::RarityWeights;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::random::SeededRandomness;
    use chrono::NaiveDate;

    fn harness() -> (Arc<InventoryService>, Arc<FixedClock>, RewardService) {
        let layout = CatalogLayout {
            pages: 2,
            page_size: 6,
            rare_slots: 3..5,
            epic_slots: vec![5],
            legendary_page_interval: 0,
        };
        let catalog = Arc::new(Catalog::generate(&layout, &layout));
        let inventory = Arc::new(InventoryService::new(catalog.clone()));
        let draw = Arc::new(DrawService::new(
            catalog,
            Box::new(SeededRandomness::new(3)),
        ));
        let weights = RarityWeights {
            common: 0.70,
            rare: 0.22,
            epic: 0.07,
            legendary: 0.01,
        };
        let packs = Arc::new(PackService::new(
            vec![PackTier {
                key: "basic".to_string(),
                cards: 3,
                weights,
                bonus_weights: weights,
            }],
            inventory.clone(),
            draw,
        ));
        let clock = Arc::new(FixedClock::on_date(
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        ));
        let service = RewardService::new(
            RewardSchedule([1, 1, 2, 1, 1, 2, 3]),
            "basic".to_string(),
            clock.clone(),
            packs,
        );
        (inventory, clock, service)
    }

    #[test]
    fn first_claim_opens_day_one_packs() {
        let (inventory, _, service) = harness();
        let owner = OwnerId::new("0xabc");
        assert!(service.can_claim());

        let reward = service.claim(&owner).unwrap();
        assert_eq!(reward.day, 1);
        assert_eq!(reward.streak, 1);
        assert_eq!(reward.packs, 1);
        assert_eq!(reward.items.len(), 3);
        assert_eq!(inventory.total_quantity(&owner), 3);
        assert_eq!(service.snapshot().day_in_cycle, 2);
    }

    #[test]
    fn same_day_second_claim_is_a_no_op() {
        let (inventory, _, service) = harness();
        let owner = OwnerId::new("0xabc");
        service.claim(&owner).unwrap();
        let held = inventory.total_quantity(&owner);

        assert!(!service.can_claim());
        assert!(service.claim(&owner).is_none());
        assert_eq!(inventory.total_quantity(&owner), held);
    }

    #[test]
    fn day_three_grants_the_scheduled_two_packs() {
        let (_, clock, service) = harness();
        let owner = OwnerId::new("0xabc");
        service.claim(&owner).unwrap();
        clock.advance_days(1);
        service.claim(&owner).unwrap();
        clock.advance_days(1);

        let reward = service.claim(&owner).unwrap();
        assert_eq!(reward.day, 3);
        assert_eq!(reward.packs, 2);
        assert_eq!(reward.items.len(), 6);
        assert_eq!(reward.streak, 3);
    }

    #[test]
    fn a_gap_resets_to_day_one() {
        let (_, clock, service) = harness();
        let owner = OwnerId::new("0xabc");
        service.claim(&owner).unwrap();
        clock.advance_days(2);

        let reward = service.claim(&owner).unwrap();
        assert_eq!(reward.day, 1);
        assert_eq!(reward.streak, 1);
    }
}
