//! Marketplace service - listings, purchases, and the sales history
//!
//! Price settlement is the wallet layer's problem; the price recorded here
//! is a display/record field. The engine only moves sticker units.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::info;

use crate::application::ports::outbound::ClockPort;
use crate::application::services::InventoryService;
use crate::domain::entities::{ItemId, Listing, ListingBook, SaleRecord};
use crate::domain::value_objects::{ListingId, OwnerId, Price, PriceError, SaleId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarketError {
    #[error("seller does not own {0}")]
    NotOwned(ItemId),
    #[error("only the seller may cancel listing {0}")]
    NotOwner(ListingId),
    #[error("cannot buy own listing {0}")]
    SelfPurchase(ListingId),
    #[error("listing {0} not found")]
    ListingNotFound(ListingId),
    #[error(transparent)]
    InvalidPrice(#[from] PriceError),
}

pub struct MarketService {
    inventory: Arc<InventoryService>,
    clock: Arc<dyn ClockPort>,
    book: RwLock<ListingBook>,
}

impl MarketService {
    pub fn new(inventory: Arc<InventoryService>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            inventory,
            clock,
            book: RwLock::new(ListingBook::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, ListingBook> {
        self.book.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ListingBook> {
        self.book.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// List one owned unit for sale. The unit is debited from the seller
    /// immediately: reserved, not merely earmarked.
    pub fn create_listing(
        &self,
        seller: &OwnerId,
        item: ItemId,
        price: &str,
    ) -> Result<Listing, MarketError> {
        let price = Price::parse(price)?;
        self.inventory
            .debit(seller, item, 1)
            .map_err(|_| MarketError::NotOwned(item))?;
        let listing = Listing {
            id: ListingId::new(),
            item,
            price,
            seller: seller.clone(),
            created_at: self.clock.now(),
        };
        self.write().insert(listing.clone());
        info!(%seller, %item, listing = %listing.id, "created listing");
        Ok(listing)
    }

    /// Cancel an own listing and take the reserved unit back.
    pub fn cancel_listing(&self, id: ListingId, requester: &OwnerId) -> Result<(), MarketError> {
        let mut book = self.write();
        let listing = book.get(id).ok_or(MarketError::ListingNotFound(id))?;
        if listing.seller != *requester {
            return Err(MarketError::NotOwner(id));
        }
        let listing = book.remove(id).ok_or(MarketError::ListingNotFound(id))?;
        drop(book);
        self.inventory.credit(&listing.seller, listing.item, 1);
        info!(listing = %id, "cancelled listing");
        Ok(())
    }

    /// Buy a listing: the unit goes to the buyer, the listing becomes a
    /// sale record. A second buy of the same id fails with `ListingNotFound`
    /// since the listing is gone.
    pub fn buy(&self, id: ListingId, buyer: &OwnerId) -> Result<SaleRecord, MarketError> {
        let mut book = self.write();
        let listing = book.get(id).ok_or(MarketError::ListingNotFound(id))?;
        if listing.seller == *buyer {
            return Err(MarketError::SelfPurchase(id));
        }
        let listing = book.remove(id).ok_or(MarketError::ListingNotFound(id))?;
        let sale = SaleRecord {
            id: SaleId::new(),
            item: listing.item,
            price: listing.price.clone(),
            seller: listing.seller.clone(),
            buyer: buyer.clone(),
            sold_at: self.clock.now(),
        };
        book.record_sale(sale.clone());
        drop(book);
        self.inventory.credit(buyer, listing.item, 1);
        info!(listing = %id, %buyer, "sold listing");
        Ok(sale)
    }

    pub fn listings(&self) -> Vec<Listing> {
        self.read().listings().to_vec()
    }

    pub fn listings_by(&self, seller: &OwnerId) -> Vec<Listing> {
        self.read()
            .listings()
            .iter()
            .filter(|listing| listing.seller == *seller)
            .cloned()
            .collect()
    }

    pub fn sales(&self) -> Vec<SaleRecord> {
        self.read().sales().to_vec()
    }

    pub fn sales_of(&self, item: ItemId) -> Vec<SaleRecord> {
        self.read()
            .sales()
            .iter()
            .filter(|sale| sale.item == item)
            .cloned()
            .collect()
    }

    /// Total traded volume, from the recorded price strings.
    pub fn sales_volume(&self) -> f64 {
        self.read().sales().iter().map(|sale| sale.price.value()).sum()
    }

    pub fn snapshot(&self) -> ListingBook {
        self.read().clone()
    }

    pub fn restore(&self, book: ListingBook) {
        *self.write() = book;
    }
}
