//! Inventory service - locking, logging façade over the ownership ledger
//!
//! Persistence is the caller's job: snapshot the ledger through
//! [`InventoryService::snapshot`] and restore it on startup.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::domain::entities::{Catalog, ItemId, LedgerError, OwnershipLedger};
use crate::domain::value_objects::{OwnerId, Rarity};

pub struct InventoryService {
    catalog: Arc<Catalog>,
    ledger: RwLock<OwnershipLedger>,
}

impl InventoryService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            ledger: RwLock::new(OwnershipLedger::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, OwnershipLedger> {
        self.ledger.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, OwnershipLedger> {
        self.ledger.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn credit(&self, owner: &OwnerId, item: ItemId, delta: u32) {
        self.write().credit(owner, item, delta);
        debug!(%owner, %item, delta, "credited");
    }

    /// Credit one unit of each id, all under one ledger lock.
    pub fn credit_all(&self, owner: &OwnerId, items: &[ItemId]) {
        let mut ledger = self.write();
        for item in items {
            ledger.credit(owner, *item, 1);
        }
    }

    pub fn debit(&self, owner: &OwnerId, item: ItemId, delta: u32) -> Result<(), LedgerError> {
        self.write().debit(owner, item, delta)?;
        debug!(%owner, %item, delta, "debited");
        Ok(())
    }

    pub fn quantity(&self, owner: &OwnerId, item: ItemId) -> u32 {
        self.read().quantity(owner, item)
    }

    pub fn duplicates_of(&self, owner: &OwnerId, rarity: Rarity) -> u32 {
        self.read().duplicates_of(owner, rarity, &self.catalog)
    }

    /// Atomically consume `count` duplicates of `rarity`; see
    /// [`OwnershipLedger::debit_duplicates`] for the selection policy.
    pub fn debit_duplicates(
        &self,
        owner: &OwnerId,
        rarity: Rarity,
        count: u32,
    ) -> Result<Vec<(ItemId, u32)>, LedgerError> {
        self.write()
            .debit_duplicates(owner, rarity, count, &self.catalog)
    }

    pub fn holdings_of(&self, owner: &OwnerId) -> HashMap<ItemId, u32> {
        self.read().holdings_of(owner)
    }

    pub fn total_quantity(&self, owner: &OwnerId) -> u32 {
        self.read().total_quantity(owner)
    }

    /// Credit a confirmed mint event from the wallet layer: the buyer plus
    /// the sticker ids the contract reports as minted. Unconfirmed purchases
    /// never reach this call.
    pub fn apply_mint_event(&self, buyer: &OwnerId, minted: &[ItemId]) {
        self.credit_all(buyer, minted);
        info!(%buyer, count = minted.len(), "applied confirmed mint event");
    }

    pub fn snapshot(&self) -> OwnershipLedger {
        self.read().clone()
    }

    pub fn restore(&self, ledger: OwnershipLedger) {
        *self.write() = ledger;
    }
}
