//! Tier limits and storage settings loaded from config.toml
//!
//! Both sections are optional. Any key left out of the file falls back to the
//! built-in default, so an empty or missing config.toml behaves exactly like
//! the free/premium plans described in `/help`.

use serde::Deserialize;

/// Numeric limits that separate the free and premium tiers.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TierLimits {
    /// Maximum wardrobe size for free accounts
    pub free_item_limit: usize,
    /// Outfits per `/generate` call for free accounts
    pub free_outfits_per_call: usize,
    /// Outfits per `/generate` call for premium accounts
    pub premium_outfits_per_call: usize,
    /// Cumulative outfits per day for free accounts
    pub free_daily_outfits: usize,
    /// Wardrobe size below which generation is refused
    pub min_items_to_generate: usize,
}

impl Default for TierLimits {
    fn default() -> Self {
        Self {
            free_item_limit: 50,
            free_outfits_per_call: 3,
            premium_outfits_per_call: 10,
            free_daily_outfits: 5,
            min_items_to_generate: 3,
        }
    }
}

impl TierLimits {
    /// Outfits a single generation may produce for the given tier.
    #[must_use]
    pub const fn outfits_per_call(&self, is_premium: bool) -> usize {
        if is_premium {
            self.premium_outfits_per_call
        } else {
            self.free_outfits_per_call
        }
    }
}

/// Where and how user snapshots are stored.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Prefix of the key-value key; the owner id is appended after a colon
    pub key_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key_prefix: "smartfit-state".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = TierLimits::default();
        assert_eq!(limits.free_item_limit, 50);
        assert_eq!(limits.outfits_per_call(false), 3);
        assert_eq!(limits.outfits_per_call(true), 10);
        assert_eq!(limits.free_daily_outfits, 5);
    }

    #[test]
    fn test_partial_limits_keep_defaults() {
        let limits: TierLimits = toml::from_str("free_item_limit = 20").unwrap();
        assert_eq!(limits.free_item_limit, 20);
        assert_eq!(limits.free_daily_outfits, 5);
        assert_eq!(limits.premium_outfits_per_call, 10);
    }
}
