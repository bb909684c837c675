//! Core business logic - framework-agnostic wardrobe, outfit and persistence operations.
//!
//! Every operation except persistence works synchronously on a `&mut AppState`.
//! Callers load the state, apply one operation and persist the result.

/// Outfit generation, reshuffling and saving
pub mod outfit;
/// Per-user JSON snapshots in the key-value table
pub mod persistence;
/// Free-tier daily outfit counter
pub mod quota;
/// Settings updates, premium activation and reset
pub mod settings;
/// Uploads, capacity policy, filtering and stats
pub mod wardrobe;
/// Mock weather conditions
pub mod weather;
