//! Reply text for Discord messages.
//!
//! Pure string builders so the wording can be tested without a Discord
//! connection. Replies are clipped to Discord's message limit.

use crate::{
    core::weather,
    errors::Error,
    models::{Category, ClothingItem, Outfit},
};
use std::{collections::BTreeMap, fmt::Write};

/// Discord's hard limit on message content length
pub const DISCORD_MESSAGE_LIMIT: usize = 2000;

/// Lines shown in a list reply before it is cut off
const MAX_LIST_LINES: usize = 25;

/// Clips a message to Discord's limit, on a character boundary.
#[must_use]
pub fn clip(message: String) -> String {
    if message.chars().count() <= DISCORD_MESSAGE_LIMIT {
        return message;
    }
    let mut clipped: String = message.chars().take(DISCORD_MESSAGE_LIMIT - 1).collect();
    clipped.push('…');
    clipped
}

/// Friendly text for an advisory error, with an upgrade hint where it applies.
#[must_use]
pub fn advisory_message(error: &Error) -> String {
    match error {
        Error::WardrobeFull { .. } | Error::OutfitLimitReached { .. } => {
            format!("❌ {error}. Upgrade with `/premium` for higher limits!")
        }
        Error::OutfitNotFound { id } => {
            format!("❌ No outfit matches `{id}`. Use `/generate` or `/saved` to see outfit ids.")
        }
        _ => format!("❌ {error}"),
    }
}

/// One line describing a clothing item.
#[must_use]
pub fn format_item(item: &ClothingItem) -> String {
    format!(
        "{} **{}** ({}) · added {}",
        item.category.icon(),
        item.name,
        item.category,
        item.upload_timestamp.format("%Y-%m-%d")
    )
}

/// A wardrobe listing with a header.
pub fn format_item_list(title: &str, items: &[&ClothingItem]) -> Result<String, std::fmt::Error> {
    if items.is_empty() {
        return Ok(format!(
            "🧺 **{title}**\n\nNo items in this category. Upload some clothes with `/upload` to get started."
        ));
    }

    let mut response = format!("🧺 **{title}** ({})\n\n", items.len());
    for item in items.iter().take(MAX_LIST_LINES) {
        writeln!(&mut response, "{}", format_item(item))?;
    }
    if items.len() > MAX_LIST_LINES {
        writeln!(&mut response, "_…and {} more_", items.len() - MAX_LIST_LINES)?;
    }
    Ok(clip(response))
}

/// A block describing one outfit; `number` is its 1-based position in a list.
pub fn format_outfit(number: Option<usize>, outfit: &Outfit) -> Result<String, std::fmt::Error> {
    let condition = weather::condition_for(outfit.weather);
    let mut block = String::new();
    match number {
        Some(n) => write!(&mut block, "**Outfit {n}**")?,
        None => write!(&mut block, "**Outfit**")?,
    }
    writeln!(
        &mut block,
        " `{}` · {} · {}",
        outfit.short_id(),
        outfit.occasion,
        condition.label
    )?;
    let pieces: Vec<String> = outfit
        .items
        .iter()
        .map(|item| format!("{} {}", item.category.icon(), item.name))
        .collect();
    writeln!(&mut block, "{}", pieces.join(" · "))?;
    Ok(block)
}

/// A numbered list of outfits with a header.
pub fn format_outfit_list(title: &str, outfits: &[Outfit]) -> Result<String, std::fmt::Error> {
    let mut response = format!("✨ **{title}**\n\n");
    for (index, outfit) in outfits.iter().enumerate().take(MAX_LIST_LINES) {
        response.push_str(&format_outfit(Some(index + 1), outfit)?);
        response.push('\n');
    }
    if outfits.len() > MAX_LIST_LINES {
        writeln!(&mut response, "_…and {} more_", outfits.len() - MAX_LIST_LINES)?;
    }
    Ok(clip(response))
}

/// Per-category counts as a single line.
#[must_use]
pub fn format_counts(counts: &BTreeMap<Category, usize>) -> String {
    counts
        .iter()
        .map(|(category, count)| format!("{} {category}: {count}", category.icon()))
        .collect::<Vec<_>>()
        .join(" · ")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        core::{outfit, wardrobe},
        models::Occasion,
        test_utils::{seeded_rng, state_with},
    };

    #[test]
    fn test_clip_long_messages() {
        let short = "hello".to_string();
        assert_eq!(clip(short.clone()), short);

        let long = "é".repeat(DISCORD_MESSAGE_LIMIT + 10);
        let clipped = clip(long);
        assert_eq!(clipped.chars().count(), DISCORD_MESSAGE_LIMIT);
        assert!(clipped.ends_with('…'));
    }

    #[test]
    fn test_advisory_upgrade_hint() {
        let msg = advisory_message(&Error::OutfitLimitReached { limit: 5 });
        assert!(msg.contains("5 outfits per day"));
        assert!(msg.contains("/premium"));

        let msg = advisory_message(&Error::NotEnoughItems { have: 1, need: 3 });
        assert!(!msg.contains("/premium"));
    }

    #[test]
    fn test_format_outfit() {
        let state = state_with(1, 1, 1, 0);
        let mut o = outfit::create_random_outfit(
            &state.wardrobe,
            outfit::OutfitFilters::default(),
            &mut seeded_rng(),
        )
        .unwrap();
        o.occasion = Occasion::Evening;
        o.weather = crate::models::Weather::Cold;

        let text = format_outfit(Some(2), &o).unwrap();
        assert!(text.starts_with("**Outfit 2**"));
        assert!(text.contains(&o.short_id()));
        assert!(text.contains("evening"));
        assert!(text.contains("❄️ Cold"));
        assert!(text.contains("👕 tops-0 · 👖 bottoms-0 · 👟 shoes-0"));
    }

    #[test]
    fn test_item_list_truncates() {
        let state = state_with(40, 0, 0, 0);
        let items = wardrobe::filter_by_category(&state, crate::models::CategoryFilter::All);
        let text = format_item_list("Wardrobe", &items).unwrap();
        assert!(text.contains("(40)"));
        assert!(text.contains("…and 15 more"));

        let empty = format_item_list("Shoes", &[]).unwrap();
        assert!(empty.contains("No items in this category"));
    }

    #[test]
    fn test_format_counts() {
        let counts = wardrobe::category_counts(&state_with(1, 0, 2, 0));
        assert_eq!(
            format_counts(&counts),
            "👕 tops: 1 · 👖 bottoms: 0 · 👟 shoes: 2 · 👗 accessories: 0"
        );
    }
}
