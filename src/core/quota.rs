//! Daily outfit quota for free accounts.
//!
//! Free accounts may generate a limited number of outfits per calendar day
//! (UTC). The counter lives in `AppState::quota` together with the day it was
//! last touched, so it survives restarts and rolls over on the first
//! generation of a new day. Premium accounts are never counted.

use crate::{
    config::limits::TierLimits,
    models::{AppState, OutfitQuota},
};
use chrono::NaiveDate;
use tracing::debug;

/// Whether the stored counter belongs to an earlier day and must restart at zero.
#[must_use]
pub fn is_reset_needed(quota: &OutfitQuota, today: NaiveDate) -> bool {
    quota.day != Some(today)
}

/// Outfits counted against today's allowance.
#[must_use]
pub fn generated_today(quota: &OutfitQuota, today: NaiveDate) -> usize {
    if is_reset_needed(quota, today) {
        0
    } else {
        quota.generated
    }
}

/// Outfits the account may still generate today. `None` means unlimited.
#[must_use]
pub fn remaining(state: &AppState, limits: &TierLimits, today: NaiveDate) -> Option<usize> {
    if state.is_premium {
        return None;
    }
    Some(
        limits
            .free_daily_outfits
            .saturating_sub(generated_today(&state.quota, today)),
    )
}

/// Counts `produced` outfits against today's allowance.
pub fn record(state: &mut AppState, produced: usize, today: NaiveDate) {
    if state.is_premium {
        return;
    }
    if is_reset_needed(&state.quota, today) {
        debug!("Starting new outfit quota day {today}");
        state.quota = OutfitQuota {
            day: Some(today),
            generated: 0,
        };
    }
    state.quota.generated += produced;
}
