//! Wardrobe Discord commands - upload, listing, stats and reset.
//!
//! Uploads arrive as slash-command attachments. Capacity is checked before any
//! attachment is downloaded, then again when the items are actually added.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, reply},
        core::{quota, wardrobe},
        errors::{Error, Result},
        models::{Category, CategoryFilter, ClothingItem},
    };
    use chrono::Utc;
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;
    use tracing::info;

    /// Adds clothing photos to your wardrobe.
    ///
    /// Each image gets a display name from its file name and a category picked
    /// at random (no image recognition is performed).
    #[poise::command(slash_command)]
    pub async fn upload(
        ctx: Context<'_>,
        #[description = "Clothing photo"] image: serenity::Attachment,
        #[description = "Another photo"] image2: Option<serenity::Attachment>,
        #[description = "Another photo"] image3: Option<serenity::Attachment>,
        #[description = "Another photo"] image4: Option<serenity::Attachment>,
    ) -> Result<()> {
        let data = ctx.data();
        let limits = &data.config.limits;
        let owner = ctx.author().id.to_string();
        let attachments: Vec<serenity::Attachment> = [Some(image), image2, image3, image4]
            .into_iter()
            .flatten()
            .collect();

        let current = data.read_state(&owner).await?;
        wardrobe::check_capacity(&current, attachments.len(), limits)?;

        ctx.defer().await?;

        let mut uploads = Vec::with_capacity(attachments.len());
        for attachment in &attachments {
            let bytes = attachment.download().await?;
            uploads.push(wardrobe::Upload {
                filename: attachment.filename.clone(),
                content_type: attachment.content_type.clone(),
                bytes,
            });
        }

        let now = Utc::now();
        let (added, skipped) = data
            .with_state(&owner, |state| {
                let mut rng = rand::rng();
                let mut items: Vec<ClothingItem> = Vec::new();
                let mut skipped: Vec<String> = Vec::new();
                for upload in &uploads {
                    match wardrobe::ingest_upload(upload, &mut rng, now) {
                        Ok(item) => items.push(item),
                        Err(e @ Error::NotAnImage { .. }) => skipped.push(e.to_string()),
                        Err(e) => return Err(e),
                    }
                }
                let added = items.clone();
                wardrobe::add_items(state, items, limits)?;
                Ok((added, skipped))
            })
            .await?;

        info!("User {owner} uploaded {} items ({} skipped)", added.len(), skipped.len());

        let mut response = String::new();
        for item in &added {
            writeln!(
                &mut response,
                "✅ Added **{}** to wardrobe as {} {}",
                item.name,
                item.category.icon(),
                item.category
            )?;
        }
        for reason in &skipped {
            writeln!(&mut response, "⚠️ Skipped: {reason}")?;
        }
        if response.is_empty() {
            response.push_str("Nothing was added.");
        }

        ctx.say(reply::clip(response)).await?;
        Ok(())
    }

    /// Lists the items in your wardrobe.
    #[poise::command(slash_command)]
    pub async fn wardrobe(
        ctx: Context<'_>,
        #[description = "Only show this category (default: all)"] category: Option<Category>,
    ) -> Result<()> {
        let owner = ctx.author().id.to_string();
        let state = ctx.data().read_state(&owner).await?;

        let filter = CategoryFilter::from(category);
        let items = wardrobe::filter_by_category(&state, filter);
        let title = category.map_or_else(
            || "Your Wardrobe".to_string(),
            |c| format!("Your Wardrobe: {c}"),
        );

        ctx.say(reply::format_item_list(&title, &items)?).await?;
        Ok(())
    }

    /// Shows item counts per category and your plan limits.
    #[poise::command(slash_command)]
    pub async fn stats(ctx: Context<'_>) -> Result<()> {
        let data = ctx.data();
        let limits = &data.config.limits;
        let owner = ctx.author().id.to_string();
        let state = data.read_state(&owner).await?;
        let today = Utc::now().date_naive();

        let counts = wardrobe::category_counts(&state);
        let mut response = String::from("📊 **Wardrobe Stats**\n\n");
        writeln!(&mut response, "{}", reply::format_counts(&counts))?;
        writeln!(&mut response, "Saved outfits: {}", state.saved_outfits.len())?;
        writeln!(&mut response)?;

        if state.is_premium {
            writeln!(&mut response, "🌟 **Premium** - unlimited outfit combinations")?;
            writeln!(&mut response, "Items: {}", state.wardrobe.len())?;
        } else {
            writeln!(&mut response, "**Free plan**")?;
            writeln!(
                &mut response,
                "Items: {} / {}",
                state.wardrobe.len(),
                limits.free_item_limit
            )?;
            let left = quota::remaining(&state, limits, today).unwrap_or_default();
            writeln!(
                &mut response,
                "Outfits left today: {left} / {}",
                limits.free_daily_outfits
            )?;
        }

        ctx.say(response).await?;
        Ok(())
    }

    /// Deletes your whole wardrobe, outfits and settings.
    #[poise::command(slash_command)]
    pub async fn reset(
        ctx: Context<'_>,
        #[description = "Set to true to really delete everything"] confirm: bool,
    ) -> Result<()> {
        if !confirm {
            ctx.say("ℹ️ Nothing deleted. Run `/reset confirm:true` to wipe your wardrobe.")
                .await?;
            return Ok(());
        }

        let owner = ctx.author().id.to_string();
        ctx.data().clear_state(&owner).await?;
        info!("User {owner} reset their state");

        ctx.say("🗑️ Your wardrobe, outfits and settings have been reset.")
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
