//! Domain layer - Game rules with no external dependencies
//!
//! This layer contains:
//! - Entities: the catalog, the ownership ledger, listings, login state
//! - Value Objects: rarity tiers, prices, recipes, identifiers
//!
//! Everything here is pure data plus pure rules: no I/O, no logging, no
//! shared state. Locking and orchestration live in the application layer.

pub mod entities;
pub mod value_objects;
