//! Outfit business logic - generation, reshuffling and saving.
//!
//! Outfits are built by independent uniform draws: one item from each of
//! tops/bottoms/shoes plus an occasion and a weather tag. There is no ranking
//! or learning; draws are with replacement, so the same item (or the same whole
//! outfit) can appear more than once in one generation.

use crate::{
    config::limits::TierLimits,
    core::quota,
    errors::{Error, Result},
    models::{AppState, Category, ClothingItem, Occasion, Outfit, Weather},
};
use chrono::NaiveDate;
use rand::{Rng, seq::IndexedRandom};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Optional tags to pin instead of drawing them at random.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutfitFilters {
    /// Use this occasion for every outfit
    pub occasion: Option<Occasion>,
    /// Use this weather for every outfit
    pub weather: Option<Weather>,
}

/// Parameters of one `/generate` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Requested number of outfits; clamped to the tier's per-call cap. `None` means the cap.
    pub count: Option<usize>,
    /// Occasion/weather to pin
    pub filters: OutfitFilters,
}

/// Result of saving an outfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The outfit was added to the saved list
    Saved,
    /// An outfit with this id was already saved; nothing changed
    AlreadySaved,
}

fn pick<R: Rng + ?Sized>(
    wardrobe: &[ClothingItem],
    category: Category,
    rng: &mut R,
) -> Option<ClothingItem> {
    let candidates: Vec<&ClothingItem> = wardrobe
        .iter()
        .filter(|item| item.category == category)
        .collect();
    candidates.choose(rng).map(|item| (*item).clone())
}

/// Draws one random outfit from the wardrobe.
///
/// Returns `None` when any of tops/bottoms/shoes has no items.
pub fn create_random_outfit<R: Rng + ?Sized>(
    wardrobe: &[ClothingItem],
    filters: OutfitFilters,
    rng: &mut R,
) -> Option<Outfit> {
    let top = pick(wardrobe, Category::Tops, rng)?;
    let bottom = pick(wardrobe, Category::Bottoms, rng)?;
    let shoes = pick(wardrobe, Category::Shoes, rng)?;

    let occasion = filters
        .occasion
        .or_else(|| Occasion::ALL.choose(rng).copied())
        .unwrap_or(Occasion::Casual);
    let weather = filters
        .weather
        .or_else(|| Weather::ALL.choose(rng).copied())
        .unwrap_or(Weather::Sunny);

    Some(Outfit {
        id: Uuid::new_v4(),
        items: [top, bottom, shoes],
        occasion,
        weather,
    })
}

/// Replaces the current outfits with a freshly generated batch.
///
/// The batch size is the requested count clamped to the tier's per-call cap
/// and, for free accounts, to what is left of today's allowance. Iterations
/// that cannot build an outfit (a required category is empty) produce nothing,
/// so the returned slice may be shorter than requested or empty.
///
/// # Errors
/// - `Error::NotEnoughItems` if the wardrobe is below the minimum size
/// - `Error::OutfitLimitReached` if a free account has no allowance left today
pub fn generate<'a, R: Rng + ?Sized>(
    state: &'a mut AppState,
    request: GenerateRequest,
    limits: &TierLimits,
    rng: &mut R,
    today: NaiveDate,
) -> Result<&'a [Outfit]> {
    let have = state.wardrobe.len();
    if have < limits.min_items_to_generate {
        return Err(Error::NotEnoughItems {
            have,
            need: limits.min_items_to_generate,
        });
    }

    let remaining = quota::remaining(state, limits, today);
    if remaining == Some(0) {
        warn!("Daily outfit limit reached");
        return Err(Error::OutfitLimitReached {
            limit: limits.free_daily_outfits,
        });
    }

    let cap = limits.outfits_per_call(state.is_premium);
    let mut count = request.count.map_or(cap, |requested| requested.min(cap));
    if let Some(remaining) = remaining {
        count = count.min(remaining);
    }

    let outfits: Vec<Outfit> = (0..count)
        .filter_map(|_| create_random_outfit(&state.wardrobe, request.filters, rng))
        .collect();

    quota::record(state, outfits.len(), today);
    info!("Generated {} of {count} requested outfits", outfits.len());
    state.outfits = outfits;
    Ok(&state.outfits)
}

/// Redraws one current outfit in place, keeping its id.
///
/// Returns `Ok(false)` and leaves the outfit untouched when a required
/// category has become empty.
///
/// # Errors
/// Returns `Error::OutfitNotFound` if `outfit_id` is not a current outfit.
pub fn shuffle<R: Rng + ?Sized>(
    state: &mut AppState,
    outfit_id: Uuid,
    filters: OutfitFilters,
    rng: &mut R,
) -> Result<bool> {
    let index = state
        .outfits
        .iter()
        .position(|o| o.id == outfit_id)
        .ok_or_else(|| Error::OutfitNotFound {
            id: outfit_id.to_string(),
        })?;

    let Some(mut fresh) = create_random_outfit(&state.wardrobe, filters, rng) else {
        return Ok(false);
    };
    fresh.id = outfit_id;
    state.outfits[index] = fresh;
    debug!("Shuffled outfit {outfit_id}");
    Ok(true)
}

/// Copies a current outfit into the saved list.
///
/// # Errors
/// Returns `Error::OutfitNotFound` if the id is neither saved nor current.
pub fn save(state: &mut AppState, outfit_id: Uuid) -> Result<SaveOutcome> {
    if is_saved(state, outfit_id) {
        return Ok(SaveOutcome::AlreadySaved);
    }

    let outfit = state
        .outfits
        .iter()
        .find(|o| o.id == outfit_id)
        .cloned()
        .ok_or_else(|| Error::OutfitNotFound {
            id: outfit_id.to_string(),
        })?;

    state.saved_outfits.push(outfit);
    info!("Saved outfit {outfit_id}");
    Ok(SaveOutcome::Saved)
}

/// Saves an outfit that is not part of the current list, such as the daily suggestion.
pub fn save_suggestion(state: &mut AppState, outfit: Outfit) -> SaveOutcome {
    if is_saved(state, outfit.id) {
        return SaveOutcome::AlreadySaved;
    }
    info!("Saved suggested outfit {}", outfit.id);
    state.saved_outfits.push(outfit);
    SaveOutcome::Saved
}

/// Removes a saved outfit. Returns whether anything was removed.
pub fn unsave(state: &mut AppState, outfit_id: Uuid) -> bool {
    let before = state.saved_outfits.len();
    state.saved_outfits.retain(|o| o.id != outfit_id);
    before != state.saved_outfits.len()
}

/// Whether an outfit with this id is in the saved list.
#[must_use]
pub fn is_saved(state: &AppState, outfit_id: Uuid) -> bool {
    state.saved_outfits.iter().any(|o| o.id == outfit_id)
}

/// Outfit of the day for the dashboard. Does not touch the quota or the current list.
pub fn suggest_today<R: Rng + ?Sized>(
    state: &AppState,
    limits: &TierLimits,
    rng: &mut R,
) -> Option<Outfit> {
    if state.wardrobe.len() < limits.min_items_to_generate {
        return None;
    }
    create_random_outfit(&state.wardrobe, OutfitFilters::default(), rng)
}

/// Resolves a current or saved outfit from its full id or an unambiguous prefix.
///
/// # Errors
/// Returns `Error::OutfitNotFound` when nothing matches or the prefix is ambiguous.
pub fn find_outfit(state: &AppState, needle: &str) -> Result<Uuid> {
    let needle = needle.trim().to_lowercase();
    let not_found = || Error::OutfitNotFound { id: needle.clone() };
    if needle.is_empty() {
        return Err(not_found());
    }

    let mut matches: Vec<Uuid> = state
        .outfits
        .iter()
        .chain(&state.saved_outfits)
        .map(|o| o.id)
        .filter(|id| {
            id.simple().to_string().starts_with(&needle)
                || id.hyphenated().to_string().starts_with(&needle)
        })
        .collect();
    matches.sort_unstable();
    matches.dedup();

    match matches.as_slice() {
        [id] => Ok(*id),
        _ => Err(not_found()),
    }
}
