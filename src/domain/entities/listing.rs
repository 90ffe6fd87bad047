//! Marketplace listings and the sales history log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::collectible::ItemId;
use crate::domain::value_objects::{ListingId, OwnerId, Price, SaleId};

/// An open offer to transfer one unit of a sticker for a price.
///
/// Created when a seller lists an owned unit (the unit is debited from the
/// seller up front); destroyed on cancel or on purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub item: ItemId,
    pub price: Price,
    pub seller: OwnerId,
    pub created_at: DateTime<Utc>,
}

/// A completed sale. Append-only: never mutated or deleted, used only for
/// derived statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: SaleId,
    pub item: ItemId,
    pub price: Price,
    pub seller: OwnerId,
    pub buyer: OwnerId,
    pub sold_at: DateTime<Utc>,
}

/// Active listings plus the sales history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingBook {
    listings: Vec<Listing>,
    sales: Vec<SaleRecord>,
}

impl ListingBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(listings: Vec<Listing>, sales: Vec<SaleRecord>) -> Self {
        Self { listings, sales }
    }

    pub fn into_parts(self) -> (Vec<Listing>, Vec<SaleRecord>) {
        (self.listings, self.sales)
    }

    pub fn insert(&mut self, listing: Listing) {
        self.listings.push(listing);
    }

    pub fn get(&self, id: ListingId) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    /// Remove a listing by id. `None` when it was already sold or cancelled.
    pub fn remove(&mut self, id: ListingId) -> Option<Listing> {
        let index = self.listings.iter().position(|listing| listing.id == id)?;
        Some(self.listings.remove(index))
    }

    pub fn record_sale(&mut self, sale: SaleRecord) {
        self.sales.push(sale);
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn sales(&self) -> &[SaleRecord] {
        &self.sales
    }
}
