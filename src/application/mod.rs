//! Application layer - The command/query surface over the domain
//!
//! Services orchestrate the domain entities and own their locking; outbound
//! ports abstract the non-deterministic collaborators (randomness, the
//! clock, the key-value state store) so harnesses can inject their own.

pub mod ports;
pub mod services;
