//! Account Discord commands - settings and the (mock) premium upgrade.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::Context,
        core::settings::{self, SettingsUpdate},
        errors::Result,
        models::Settings,
    };
    use std::fmt::Write;

    fn on_off(value: bool) -> &'static str {
        if value { "On" } else { "Off" }
    }

    fn format_settings(settings: &Settings, is_premium: bool) -> Result<String> {
        let mut response = String::from("⚙️ **Your Settings**\n\n");
        writeln!(&mut response, "📍 Location: {}", settings.location)?;
        let styles: Vec<&str> = settings.preferred_styles.iter().map(String::as_str).collect();
        writeln!(
            &mut response,
            "🎨 Styles: {}",
            if styles.is_empty() { "none".to_string() } else { styles.join(", ") }
        )?;
        writeln!(
            &mut response,
            "🌱 Sustainability mode: {}",
            on_off(settings.sustainability_mode)
        )?;
        writeln!(&mut response, "🛍️ Affiliate mode: {}", on_off(settings.affiliate_mode))?;
        writeln!(
            &mut response,
            "⭐ Plan: {}",
            if is_premium { "Premium" } else { "Free" }
        )?;
        Ok(response)
    }

    /// Shows or changes your preferences.
    ///
    /// Run without options to see the current settings.
    #[poise::command(slash_command)]
    pub async fn settings(
        ctx: Context<'_>,
        #[description = "Your city"] location: Option<String>,
        #[description = "Preferred styles, comma separated (replaces the current list)"]
        styles: Option<String>,
        #[description = "Prefer sustainable suggestions"] sustainability: Option<bool>,
        #[description = "Allow affiliate shopping links"] affiliate: Option<bool>,
    ) -> Result<()> {
        let owner = ctx.author().id.to_string();
        let update = SettingsUpdate {
            preferred_styles: styles
                .map(|s| s.split(',').map(str::to_string).collect::<Vec<_>>()),
            location,
            sustainability_mode: sustainability,
            affiliate_mode: affiliate,
        };

        if update.is_empty() {
            let state = ctx.data().read_state(&owner).await?;
            ctx.say(format_settings(&state.settings, state.is_premium)?)
                .await?;
            return Ok(());
        }

        let (current, is_premium) = ctx
            .data()
            .with_state(&owner, |state| {
                settings::update_settings(state, update);
                Ok((state.settings.clone(), state.is_premium))
            })
            .await?;

        let mut response = String::from("✅ Settings saved!\n\n");
        response.push_str(&format_settings(&current, is_premium)?);
        ctx.say(response).await?;
        Ok(())
    }

    /// Activates Premium. Demo mode: no payment is taken.
    #[poise::command(slash_command)]
    pub async fn premium(ctx: Context<'_>) -> Result<()> {
        let owner = ctx.author().id.to_string();
        let limits = &ctx.data().config.limits;

        let activated = ctx
            .data()
            .with_state(&owner, |state| Ok(settings::activate_premium(state)))
            .await?;

        if activated {
            ctx.say(format!(
                "🌟 Premium subscription activated! (Demo mode)\n\
                Unlimited items and {} outfits per request.",
                limits.premium_outfits_per_call
            ))
            .await?;
        } else {
            ctx.say("🌟 You already have Premium.").await?;
        }
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
