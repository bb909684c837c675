//! Outfit Discord commands - generate, shuffle, save and the daily suggestion.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, handlers::autocomplete, reply},
        core::{
            outfit::{self, GenerateRequest, OutfitFilters, SaveOutcome},
            weather,
        },
        errors::Result,
        models::{Occasion, Outfit, Weather},
    };
    use chrono::Utc;
    use std::fmt::Write;

    /// Suggests new outfits from your wardrobe.
    ///
    /// Replaces your current outfit list. Free accounts get a few outfits per
    /// request and a daily allowance; Premium gets more per request.
    #[poise::command(slash_command)]
    pub async fn generate(
        ctx: Context<'_>,
        #[description = "How many outfits (capped by your plan)"]
        #[min = 1]
        #[max = 10]
        count: Option<u8>,
        #[description = "Only this occasion"] occasion: Option<Occasion>,
        #[description = "Only this weather"] weather: Option<Weather>,
    ) -> Result<()> {
        let data = ctx.data();
        let limits = &data.config.limits;
        let owner = ctx.author().id.to_string();
        let request = GenerateRequest {
            count: count.map(usize::from),
            filters: OutfitFilters { occasion, weather },
        };
        let today = Utc::now().date_naive();

        let outfits: Vec<Outfit> = data
            .with_state(&owner, |state| {
                let mut rng = rand::rng();
                outfit::generate(state, request, limits, &mut rng, today).map(<[Outfit]>::to_vec)
            })
            .await?;

        if outfits.is_empty() {
            ctx.say(
                "❌ No outfits could be put together. You need at least one top, one bottom \
                and one pair of shoes.",
            )
            .await?;
            return Ok(());
        }

        let title = format!("Generated {} outfits!", outfits.len());
        let mut response = reply::format_outfit_list(&title, &outfits)?;
        response.push_str("Use `/shuffle <id>` to redraw one or `/save <id>` to keep it.");
        ctx.say(reply::clip(response)).await?;
        Ok(())
    }

    /// Redraws the items and tags of one of your current outfits.
    #[poise::command(slash_command)]
    pub async fn shuffle(
        ctx: Context<'_>,
        #[description = "Outfit id"]
        #[autocomplete = "autocomplete::autocomplete_outfit_id"]
        outfit: String,
    ) -> Result<()> {
        let owner = ctx.author().id.to_string();

        let shuffled: Option<Outfit> = ctx
            .data()
            .with_state(&owner, |state| {
                let id = outfit::find_outfit(state, &outfit)?;
                let mut rng = rand::rng();
                let changed = outfit::shuffle(state, id, OutfitFilters::default(), &mut rng)?;
                Ok(changed
                    .then(|| state.outfits.iter().find(|o| o.id == id).cloned())
                    .flatten())
            })
            .await?;

        match shuffled {
            Some(fresh) => {
                let mut response = String::from("🔄 Outfit shuffled!\n\n");
                response.push_str(&reply::format_outfit(None, &fresh)?);
                ctx.say(response).await?;
            }
            None => {
                ctx.say("❌ Could not shuffle: you need at least one top, one bottom and one pair of shoes.")
                    .await?;
            }
        }
        Ok(())
    }

    /// Saves one of your current outfits.
    #[poise::command(slash_command)]
    pub async fn save(
        ctx: Context<'_>,
        #[description = "Outfit id"]
        #[autocomplete = "autocomplete::autocomplete_outfit_id"]
        outfit: String,
    ) -> Result<()> {
        let owner = ctx.author().id.to_string();

        let outcome = ctx
            .data()
            .with_state(&owner, |state| {
                let id = outfit::find_outfit(state, &outfit)?;
                outfit::save(state, id)
            })
            .await?;

        match outcome {
            SaveOutcome::Saved => ctx.say("💾 Outfit saved!").await?,
            SaveOutcome::AlreadySaved => ctx.say("ℹ️ Outfit already saved").await?,
        };
        Ok(())
    }

    /// Lists your saved outfits.
    #[poise::command(slash_command)]
    pub async fn saved(ctx: Context<'_>) -> Result<()> {
        let owner = ctx.author().id.to_string();
        let state = ctx.data().read_state(&owner).await?;

        if state.saved_outfits.is_empty() {
            ctx.say("💾 No saved outfits yet. Use `/generate` and then `/save <id>`.")
                .await?;
            return Ok(());
        }

        let title = format!("Saved Outfits ({})", state.saved_outfits.len());
        ctx.say(reply::format_outfit_list(&title, &state.saved_outfits)?)
            .await?;
        Ok(())
    }

    /// Removes an outfit from your saved list.
    #[poise::command(slash_command)]
    pub async fn unsave(
        ctx: Context<'_>,
        #[description = "Outfit id"]
        #[autocomplete = "autocomplete::autocomplete_outfit_id"]
        outfit: String,
    ) -> Result<()> {
        let owner = ctx.author().id.to_string();

        let removed = ctx
            .data()
            .with_state(&owner, |state| {
                let id = outfit::find_outfit(state, &outfit)?;
                Ok(outfit::unsave(state, id))
            })
            .await?;

        if removed {
            ctx.say("🗑️ Outfit removed from your saved list.").await?;
        } else {
            ctx.say("ℹ️ That outfit is not in your saved list.").await?;
        }
        Ok(())
    }

    /// Shows today's (mock) weather and an outfit suggestion.
    #[poise::command(slash_command)]
    pub async fn today(
        ctx: Context<'_>,
        #[description = "Save the suggestion right away"] save: Option<bool>,
    ) -> Result<()> {
        let data = ctx.data();
        let limits = &data.config.limits;
        let owner = ctx.author().id.to_string();

        let (location, condition, suggestion, outcome) = data
            .with_state(&owner, |state| {
                let mut rng = rand::rng();
                let condition = weather::random_condition(&mut rng);
                let suggestion = outfit::suggest_today(state, limits, &mut rng);
                let outcome = match (&suggestion, save) {
                    (Some(o), Some(true)) => Some(outfit::save_suggestion(state, o.clone())),
                    _ => None,
                };
                Ok((state.settings.location.clone(), condition, suggestion, outcome))
            })
            .await?;

        let mut response = format!(
            "🌤️ **Today in {location}:** {} {}\n\n",
            condition.temp, condition.label
        );
        match suggestion {
            Some(o) => {
                response.push_str(&reply::format_outfit(None, &o)?);
                if outcome == Some(SaveOutcome::Saved) {
                    writeln!(&mut response, "\n💾 Outfit saved!")?;
                }
            }
            None => {
                response.push_str("Upload clothes to get outfit suggestions!");
            }
        }

        ctx.say(response).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
