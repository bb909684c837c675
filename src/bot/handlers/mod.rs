//! Discord interaction handlers
//!
//! Handlers for Discord interactions that are not commands themselves, such as
//! autocomplete.

/// Autocomplete handlers for outfit ids
pub mod autocomplete;
