//! General Discord commands - ping and help.
//! Simple commands that don't touch any user state.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{bot::Context, errors::Result};

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command)]
    pub async fn ping(ctx: Context<'_>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command)]
    pub async fn help(ctx: Context<'_>) -> Result<()> {
        let limits = &ctx.data().config.limits;
        let help_text = format!(
            "**SmartFit Help**\n\
            Upload your clothes, then let SmartFit put outfits together.\n\n\
            **Wardrobe**\n\
            • `/upload <image> [image2..4]` - Adds clothing photos to your wardrobe.\n\
            • `/wardrobe [category]` - Lists your items.\n\
            • `/stats` - Shows item counts and your plan limits.\n\n\
            **Outfits**\n\
            • `/generate [count] [occasion] [weather]` - Suggests new outfits.\n\
            • `/shuffle <outfit>` - Redraws one outfit.\n\
            • `/save <outfit>` / `/unsave <outfit>` / `/saved` - Manage saved outfits.\n\
            • `/today [save]` - Weather and outfit of the day.\n\n\
            **Account**\n\
            • `/settings [location] [styles] [sustainability] [affiliate]` - View or change preferences.\n\
            • `/premium` - Activate Premium (demo mode, no payment).\n\
            • `/reset confirm:true` - Deletes everything.\n\n\
            Free plan: {} items, {} outfits per request, {} outfits per day. \
            Premium: unlimited items, {} outfits per request.\n\n\
            Note: categories are assigned at random and outfits are random combinations.",
            limits.free_item_limit,
            limits.free_outfits_per_call,
            limits.free_daily_outfits,
            limits.premium_outfits_per_call,
        );

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
