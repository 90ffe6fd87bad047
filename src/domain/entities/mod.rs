//! Domain entities - The catalog, the ledger, and the books they feed

mod catalog;
mod collectible;
mod daily_login;
mod ledger;
mod listing;

pub use catalog::{Catalog, CatalogLayout};
pub use collectible::{CollectibleItem, CollectionTag, ItemId, ParseItemIdError};
pub use daily_login::{ClaimGrant, DailyLoginState, RewardSchedule};
pub use ledger::{LedgerError, OwnershipLedger};
pub use listing::{Listing, ListingBook, SaleRecord};
