//! Stickerdex Engine - Core game logic for a collectible sticker album
//!
//! The engine owns the parts of the game that are not presentation:
//! - the deterministic sticker catalog (rarity fixed per album slot)
//! - probability-weighted draws for packs and rewards
//! - the ownership ledger (credit, debit, duplicate accounting)
//! - crafting duplicates into higher-rarity stickers
//! - the in-app marketplace (listings and the sales history)
//! - the 7-day daily login reward cycle
//!
//! Wallet connection, contract interaction, routing, and rendering are
//! external collaborators: they call the command/query surface on
//! [`AppState`] and feed confirmed chain events back in through
//! `InventoryService::apply_mint_event`.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use infrastructure::config::GameConfig;
pub use infrastructure::state::AppState;
