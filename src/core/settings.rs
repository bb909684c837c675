//! Settings and the premium tier flag.

use crate::models::AppState;
use std::collections::BTreeSet;
use tracing::info;

/// Partial settings update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    /// Replaces the preferred styles wholesale
    pub preferred_styles: Option<Vec<String>>,
    /// New location
    pub location: Option<String>,
    /// New sustainability mode
    pub sustainability_mode: Option<bool>,
    /// New affiliate mode
    pub affiliate_mode: Option<bool>,
}

impl SettingsUpdate {
    /// Whether the update would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.preferred_styles.is_none()
            && self.location.is_none()
            && self.sustainability_mode.is_none()
            && self.affiliate_mode.is_none()
    }
}

/// Normalizes style names: trimmed, lowercased, empties dropped.
#[must_use]
pub fn normalize_styles<I, S>(styles: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    styles
        .into_iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Applies a partial settings update.
pub fn update_settings(state: &mut AppState, update: SettingsUpdate) {
    let settings = &mut state.settings;
    if let Some(styles) = update.preferred_styles {
        settings.preferred_styles = normalize_styles(styles);
    }
    if let Some(location) = update.location {
        settings.location = location.trim().to_string();
    }
    if let Some(sustainability) = update.sustainability_mode {
        settings.sustainability_mode = sustainability;
    }
    if let Some(affiliate) = update.affiliate_mode {
        settings.affiliate_mode = affiliate;
    }
    info!("Settings updated: {:?}", state.settings);
}

/// Mock subscription: flips the account to premium. No payment is processed.
///
/// Returns `true` if the account was not premium before.
pub fn activate_premium(state: &mut AppState) -> bool {
    let changed = !state.is_premium;
    state.is_premium = true;
    if changed {
        info!("Premium activated");
    }
    changed
}
