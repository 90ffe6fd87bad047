//! Infrastructure layer - Adapters for the outbound ports, configuration,
//! and the composition root

pub mod clock;
pub mod config;
pub mod persistence;
pub mod random;
pub mod state;
