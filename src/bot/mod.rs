//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for SmartFit: slash commands,
//! autocomplete, reply formatting, and the shared bot context that owns the
//! database connection.

/// Discord command implementations (wardrobe, outfit, account, general)
pub mod commands;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;
/// Reply text formatting
pub mod reply;

use crate::{
    config::AppConfig,
    core::persistence,
    errors::{Error, Result},
    models::AppState,
};
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, instrument, warn};

/// Poise context type used by every command.
pub type Context<'a> = poise::Context<'a, BotData, Error>;

/// Shared data available to all bot commands.
pub struct BotData {
    /// Database connection for all persistence
    pub database: DatabaseConnection,
    /// Loaded application configuration
    pub config: Arc<AppConfig>,
    /// Serializes load-mutate-persist sequences
    state_lock: Mutex<()>,
}

impl BotData {
    /// Creates a new `BotData` instance.
    #[must_use]
    pub fn new(database: DatabaseConnection, config: Arc<AppConfig>) -> Self {
        Self {
            database,
            config,
            state_lock: Mutex::new(()),
        }
    }

    /// Loads `owner`'s state without changing it.
    pub async fn read_state(&self, owner: &str) -> Result<AppState> {
        persistence::load_state(&self.database, &self.config.storage.key_prefix, owner).await
    }

    /// Loads `owner`'s state, applies `mutate`, and persists the result if it succeeded.
    ///
    /// The whole sequence runs under one lock so concurrent commands never
    /// interleave. A failed mutation is not persisted.
    pub async fn with_state<T, F>(&self, owner: &str, mutate: F) -> Result<T>
    where
        F: FnOnce(&mut AppState) -> Result<T>,
    {
        let _guard = self.state_lock.lock().await;
        let prefix = &self.config.storage.key_prefix;

        let mut state = persistence::load_state(&self.database, prefix, owner).await?;
        let value = mutate(&mut state)?;
        persistence::save_state(&self.database, prefix, owner, &state).await?;
        Ok(value)
    }

    /// Deletes `owner`'s stored state; the next load starts from defaults.
    pub async fn clear_state(&self, owner: &str) -> Result<bool> {
        let _guard = self.state_lock.lock().await;
        persistence::delete_state(&self.database, &self.config.storage.key_prefix, owner).await
    }
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            let message = if error.is_advisory() {
                warn!("Command `{}` refused: {}", ctx.command().name, error);
                reply::advisory_message(&error)
            } else {
                error!("Error in command `{}`: {:?}", ctx.command().name, error);
                format!("An error occurred: {error}")
            };
            let reply = poise::CreateReply::default().content(message).ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// All slash commands the bot registers.
#[must_use]
pub fn all_commands() -> Vec<poise::Command<BotData, Error>> {
    vec![
        commands::upload(),
        commands::wardrobe(),
        commands::stats(),
        commands::reset(),
        commands::generate(),
        commands::shuffle(),
        commands::save(),
        commands::saved(),
        commands::unsave(),
        commands::today(),
        commands::settings(),
        commands::premium(),
        commands::ping(),
        commands::help(),
    ]
}

/// Connects to Discord and runs the bot until the client stops.
#[instrument(skip(token, config, database))]
pub async fn run_bot(
    token: String,
    config: Arc<AppConfig>,
    database: DatabaseConnection,
) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: all_commands(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(BotData::new(database, config))
            })
        })
        .build();

    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::limits::TierLimits,
        core::wardrobe,
        models::Category,
        test_utils::{item, setup_test_db},
    };

    async fn bot_data() -> Result<BotData> {
        Ok(BotData::new(
            setup_test_db().await?,
            Arc::new(AppConfig::default()),
        ))
    }

    #[tokio::test]
    async fn test_with_state_persists_mutation() -> Result<()> {
        let data = bot_data().await?;
        let limits = TierLimits::default();

        let size = data
            .with_state("42", |state| {
                wardrobe::add_item(state, item("shirt", Category::Tops), &limits)
            })
            .await?;
        assert_eq!(size, 1);

        let state = data.read_state("42").await?;
        assert_eq!(state.wardrobe.len(), 1);
        assert!(data.read_state("43").await?.wardrobe.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_with_state_skips_persist_on_error() -> Result<()> {
        let data = bot_data().await?;

        let result: Result<()> = data
            .with_state("42", |state| {
                state.is_premium = true;
                Err(Error::OutfitLimitReached { limit: 5 })
            })
            .await;
        assert!(result.is_err());
        assert!(!data.read_state("42").await?.is_premium);
        Ok(())
    }

    #[tokio::test]
    async fn test_clear_state() -> Result<()> {
        let data = bot_data().await?;
        data.with_state("42", |state| {
            state.is_premium = true;
            Ok(())
        })
        .await?;

        assert!(data.clear_state("42").await?);
        assert_eq!(data.read_state("42").await?, AppState::default());
        Ok(())
    }
}
