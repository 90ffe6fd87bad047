//! The ownership ledger: who holds how many of which sticker

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::catalog::Catalog;
use crate::domain::entities::collectible::ItemId;
use crate::domain::value_objects::{OwnerId, Rarity};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("insufficient quantity of {item}: have {have}, need {need}")]
    InsufficientQuantity { item: ItemId, have: u32, need: u32 },
    #[error("insufficient {rarity} duplicates: have {have}, need {need}")]
    InsufficientDuplicates {
        rarity: Rarity,
        have: u32,
        need: u32,
    },
}

/// Per-owner sticker holdings: owner → (item → quantity).
///
/// Pure bookkeeping: no locking, no logging, no persistence. Stored
/// quantities are always at least 1; an entry that reaches 0 is pruned, so
/// "ran out" is indistinguishable from "never owned". A rejected debit never
/// mutates anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OwnershipLedger {
    holdings: HashMap<OwnerId, HashMap<ItemId, u32>>,
}

impl OwnershipLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credit(&mut self, owner: &OwnerId, item: ItemId, delta: u32) {
        if delta == 0 {
            return;
        }
        *self
            .holdings
            .entry(owner.clone())
            .or_default()
            .entry(item)
            .or_insert(0) += delta;
    }

    pub fn debit(&mut self, owner: &OwnerId, item: ItemId, delta: u32) -> Result<(), LedgerError> {
        if delta == 0 {
            return Ok(());
        }
        let have = self.quantity(owner, item);
        if have < delta {
            return Err(LedgerError::InsufficientQuantity {
                item,
                have,
                need: delta,
            });
        }
        if let Some(items) = self.holdings.get_mut(owner) {
            if have == delta {
                items.remove(&item);
                if items.is_empty() {
                    self.holdings.remove(owner);
                }
            } else if let Some(quantity) = items.get_mut(&item) {
                *quantity -= delta;
            }
        }
        Ok(())
    }

    pub fn quantity(&self, owner: &OwnerId, item: ItemId) -> u32 {
        self.holdings
            .get(owner)
            .and_then(|items| items.get(&item))
            .copied()
            .unwrap_or(0)
    }

    /// Units owned beyond the one copy kept in the album, summed over every
    /// owned item of the given rarity.
    pub fn duplicates_of(&self, owner: &OwnerId, rarity: Rarity, catalog: &Catalog) -> u32 {
        self.holdings
            .get(owner)
            .map(|items| {
                items
                    .iter()
                    .filter(|(id, _)| catalog.rarity_of(**id) == Some(rarity))
                    .map(|(_, quantity)| quantity.saturating_sub(1))
                    .sum()
            })
            .unwrap_or(0)
    }

    /// Consume `count` duplicates of `rarity`: highest-quantity item first,
    /// ties broken by ascending id, never taking an item below its one kept
    /// copy. Either the whole amount is debited or nothing changes.
    ///
    /// Returns the applied plan as (item, units taken) pairs.
    pub fn debit_duplicates(
        &mut self,
        owner: &OwnerId,
        rarity: Rarity,
        count: u32,
        catalog: &Catalog,
    ) -> Result<Vec<(ItemId, u32)>, LedgerError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let have = self.duplicates_of(owner, rarity, catalog);
        if have < count {
            return Err(LedgerError::InsufficientDuplicates {
                rarity,
                have,
                need: count,
            });
        }

        // Plan in full before mutating.
        let mut pool: Vec<(ItemId, u32)> = self
            .holdings
            .get(owner)
            .map(|items| {
                items
                    .iter()
                    .filter(|(id, quantity)| {
                        **quantity > 1 && catalog.rarity_of(**id) == Some(rarity)
                    })
                    .map(|(id, quantity)| (*id, *quantity))
                    .collect()
            })
            .unwrap_or_default();
        pool.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let mut remaining = count;
        let mut plan = Vec::new();
        for (item, quantity) in pool {
            if remaining == 0 {
                break;
            }
            let take = remaining.min(quantity - 1);
            plan.push((item, take));
            remaining -= take;
        }
        for (item, take) in &plan {
            self.debit(owner, *item, *take)?;
        }
        Ok(plan)
    }

    /// Snapshot of one owner's holdings.
    pub fn holdings_of(&self, owner: &OwnerId) -> HashMap<ItemId, u32> {
        self.holdings.get(owner).cloned().unwrap_or_default()
    }

    /// Total units held by one owner across all items.
    pub fn total_quantity(&self, owner: &OwnerId) -> u32 {
        self.holdings
            .get(owner)
            .map(|items| items.values().sum())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::catalog::CatalogLayout;

    fn catalog() -> Catalog {
        let layout = CatalogLayout {
            pages: 2,
            page_size: 6,
            rare_slots: 3..5,
            epic_slots: vec![5],
            legendary_page_interval: 0,
        };
        Catalog::generate(&layout, &layout)
    }

    fn owner() -> OwnerId {
        OwnerId::new("0xabc")
    }

    #[test]
    fn credit_then_debit_round_trips() {
        let mut ledger = OwnershipLedger::new();
        let item = ItemId::main(1);
        ledger.credit(&owner(), item, 3);
        assert_eq!(ledger.quantity(&owner(), item), 3);
        ledger.debit(&owner(), item, 3).unwrap();
        assert_eq!(ledger.quantity(&owner(), item), 0);
        // Fully debited owners are pruned, not kept at zero.
        assert!(ledger.holdings_of(&owner()).is_empty());
    }

    #[test]
    fn over_debit_fails_without_mutation() {
        let mut ledger = OwnershipLedger::new();
        let item = ItemId::main(1);
        ledger.credit(&owner(), item, 2);
        let err = ledger.debit(&owner(), item, 3).unwrap_err();
        assert_eq!(
            err,
            LedgerError::InsufficientQuantity {
                item,
                have: 2,
                need: 3
            }
        );
        assert_eq!(ledger.quantity(&owner(), item), 2);
    }

    #[test]
    fn debit_of_unowned_item_fails() {
        let mut ledger = OwnershipLedger::new();
        assert!(ledger.debit(&owner(), ItemId::main(1), 1).is_err());
    }

    #[test]
    fn duplicates_count_excludes_kept_copies() {
        let catalog = catalog();
        let mut ledger = OwnershipLedger::new();
        // Commons: items 1 and 2. 4 + 1 copies = 3 duplicates.
        ledger.credit(&owner(), ItemId::main(1), 4);
        ledger.credit(&owner(), ItemId::main(2), 1);
        // A rare does not count toward common duplicates.
        ledger.credit(&owner(), ItemId::main(4), 5);
        assert_eq!(ledger.duplicates_of(&owner(), Rarity::Common, &catalog), 3);
        assert_eq!(ledger.duplicates_of(&owner(), Rarity::Rare, &catalog), 4);
        assert_eq!(ledger.duplicates_of(&owner(), Rarity::Epic, &catalog), 0);
    }

    #[test]
    fn debit_duplicates_takes_highest_quantity_first() {
        let catalog = catalog();
        let mut ledger = OwnershipLedger::new();
        ledger.credit(&owner(), ItemId::main(1), 2); // 1 duplicate
        ledger.credit(&owner(), ItemId::main(2), 4); // 3 duplicates
        let plan = ledger
            .debit_duplicates(&owner(), Rarity::Common, 3, &catalog)
            .unwrap();
        assert_eq!(plan, vec![(ItemId::main(2), 3)]);
        // The kept copy floor held for both items.
        assert_eq!(ledger.quantity(&owner(), ItemId::main(1)), 2);
        assert_eq!(ledger.quantity(&owner(), ItemId::main(2)), 1);
    }

    #[test]
    fn debit_duplicates_spills_across_items_but_keeps_floors() {
        let catalog = catalog();
        let mut ledger = OwnershipLedger::new();
        ledger.credit(&owner(), ItemId::main(1), 3); // 2 duplicates
        ledger.credit(&owner(), ItemId::main(2), 3); // 2 duplicates
        ledger
            .debit_duplicates(&owner(), Rarity::Common, 4, &catalog)
            .unwrap();
        // Every duplicate consumed, every kept copy intact.
        assert_eq!(ledger.quantity(&owner(), ItemId::main(1)), 1);
        assert_eq!(ledger.quantity(&owner(), ItemId::main(2)), 1);
        assert_eq!(ledger.duplicates_of(&owner(), Rarity::Common, &catalog), 0);
    }

    #[test]
    fn debit_duplicates_shortfall_mutates_nothing() {
        let catalog = catalog();
        let mut ledger = OwnershipLedger::new();
        ledger.credit(&owner(), ItemId::main(1), 3); // 2 duplicates
        let err = ledger
            .debit_duplicates(&owner(), Rarity::Common, 5, &catalog)
            .unwrap_err();
        assert_eq!(
            err,
            LedgerError::InsufficientDuplicates {
                rarity: Rarity::Common,
                have: 2,
                need: 5
            }
        );
        assert_eq!(ledger.quantity(&owner(), ItemId::main(1)), 3);
    }

    #[test]
    fn ledger_survives_json_round_trip() {
        let mut ledger = OwnershipLedger::new();
        ledger.credit(&owner(), ItemId::main(3), 2);
        ledger.credit(&owner(), ItemId::bonus(1), 1);
        let json = serde_json::to_string(&ledger).unwrap();
        let back: OwnershipLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ledger);
    }
}
