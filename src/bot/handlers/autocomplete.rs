//! Autocomplete handlers for Discord slash command parameters.

use crate::{bot::Context, models::AppState};

/// Discord's limit on autocomplete suggestions
const MAX_SUGGESTIONS: usize = 25;

/// Short ids of current and saved outfits that start with `partial`.
///
/// Current outfits come first, in list order, followed by saved ones.
#[must_use]
pub fn matching_outfit_ids(state: &AppState, partial: &str) -> Vec<String> {
    let partial = partial.trim().to_lowercase();
    let mut ids: Vec<String> = Vec::new();
    for outfit in state.outfits.iter().chain(&state.saved_outfits) {
        let short = outfit.short_id();
        if short.starts_with(&partial) && !ids.contains(&short) {
            ids.push(short);
        }
    }
    ids.truncate(MAX_SUGGESTIONS);
    ids
}

/// Provides autocomplete suggestions for outfit ids.
///
/// Looks up the invoking user's state and offers the ids of their current and
/// saved outfits. Database errors yield no suggestions.
pub async fn autocomplete_outfit_id(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let owner = ctx.author().id.to_string();
    let Ok(state) = ctx.data().read_state(&owner).await else {
        return Vec::new();
    };
    matching_outfit_ids(&state, partial)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        config::limits::TierLimits,
        core::outfit::{self, GenerateRequest},
        test_utils::{seeded_rng, state_with, today},
    };

    #[test]
    fn test_matching_outfit_ids() {
        let mut state = state_with(1, 1, 1, 0);
        outfit::generate(
            &mut state,
            GenerateRequest::default(),
            &TierLimits::default(),
            &mut seeded_rng(),
            today(),
        )
        .unwrap();
        let first = state.outfits[0].id;
        outfit::save(&mut state, first).unwrap();

        let all = matching_outfit_ids(&state, "");
        assert_eq!(all.len(), 3);
        assert_eq!(all[0], state.outfits[0].short_id());

        let prefix = &state.outfits[1].short_id()[..6];
        let narrowed = matching_outfit_ids(&state, prefix);
        assert!(narrowed.contains(&state.outfits[1].short_id()));
    }
}
