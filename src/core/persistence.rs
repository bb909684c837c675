//! Persistence of per-user `AppState` snapshots.
//!
//! Each user's state is serialized to JSON and stored under one key in the
//! `kv_store` table. Loading merges the stored document over the default state:
//! fields missing from the snapshot keep their defaults.

use crate::{
    entities::{StoredState, stored_state},
    errors::Result,
    models::AppState,
};
use chrono::Utc;
use sea_orm::{Set, prelude::*};
use tracing::{debug, info};

/// Key under which `owner`'s state is stored.
#[must_use]
pub fn state_key(prefix: &str, owner: &str) -> String {
    format!("{prefix}:{owner}")
}

/// Reads the raw value stored under `key`.
pub async fn get_value<C>(db: &C, key: &str) -> Result<Option<String>>
where
    C: ConnectionTrait,
{
    let row = StoredState::find()
        .filter(stored_state::Column::Key.eq(key))
        .one(db)
        .await?;
    debug!("Value for key '{key}' present: {}", row.is_some());
    Ok(row.map(|r| r.value))
}

/// Writes `value` under `key`, updating the existing row if there is one.
pub async fn set_value<C>(db: &C, key: &str, value: String) -> Result<()>
where
    C: ConnectionTrait,
{
    let now = Utc::now().naive_utc();

    let existing = StoredState::find()
        .filter(stored_state::Column::Key.eq(key))
        .one(db)
        .await?;

    if let Some(row) = existing {
        let mut active_model: stored_state::ActiveModel = row.into();
        active_model.value = Set(value);
        active_model.updated_at = Set(now);
        active_model.update(db).await?;
    } else {
        let new_row = stored_state::ActiveModel {
            key: Set(key.to_string()),
            value: Set(value),
            updated_at: Set(now),
            ..Default::default()
        };
        new_row.insert(db).await?;
    }

    Ok(())
}

/// Loads `owner`'s state, or the default state if nothing is stored yet.
pub async fn load_state<C>(db: &C, prefix: &str, owner: &str) -> Result<AppState>
where
    C: ConnectionTrait,
{
    let key = state_key(prefix, owner);
    match get_value(db, &key).await? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => {
            debug!("No stored state for {key}, starting fresh");
            Ok(AppState::default())
        }
    }
}

/// Serializes and stores `owner`'s state.
pub async fn save_state<C>(db: &C, prefix: &str, owner: &str, state: &AppState) -> Result<()>
where
    C: ConnectionTrait,
{
    let key = state_key(prefix, owner);
    let json = serde_json::to_string(state)?;
    debug!("Persisting {} bytes under {key}", json.len());
    set_value(db, &key, json).await
}

/// Removes `owner`'s stored state. Returns whether a row was deleted.
pub async fn delete_state<C>(db: &C, prefix: &str, owner: &str) -> Result<bool>
where
    C: ConnectionTrait,
{
    let key = state_key(prefix, owner);
    let result = StoredState::delete_many()
        .filter(stored_state::Column::Key.eq(key.as_str()))
        .exec(db)
        .await?;
    info!("Deleted stored state {key} ({} rows)", result.rows_affected);
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::limits::TierLimits,
        core::outfit::{self, GenerateRequest},
        core::settings::{self, SettingsUpdate},
        test_utils::{init_test_tracing, seeded_rng, setup_test_db, state_with, today},
    };

    const PREFIX: &str = "smartfit-state";

    #[tokio::test]
    async fn test_set_and_get_value() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;

        set_value(&db, "k", "one".to_string()).await?;
        assert_eq!(get_value(&db, "k").await?, Some("one".to_string()));

        set_value(&db, "k", "two".to_string()).await?;
        assert_eq!(get_value(&db, "k").await?, Some("two".to_string()));

        assert_eq!(StoredState::find().all(&db).await?.len(), 1);
        assert!(get_value(&db, "missing").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_load_missing_state_is_default() -> Result<()> {
        let db = setup_test_db().await?;
        let state = load_state(&db, PREFIX, "nobody").await?;
        assert_eq!(state, AppState::default());
        Ok(())
    }

    #[tokio::test]
    async fn test_state_round_trip() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;
        let mut rng = seeded_rng();

        let mut state = state_with(2, 2, 2, 1);
        outfit::generate(
            &mut state,
            GenerateRequest::default(),
            &TierLimits::default(),
            &mut rng,
            today(),
        )?;
        let id = state.outfits[0].id;
        outfit::save(&mut state, id)?;
        settings::update_settings(
            &mut state,
            SettingsUpdate {
                location: Some("Lisbon".to_string()),
                ..SettingsUpdate::default()
            },
        );

        save_state(&db, PREFIX, "user-1", &state).await?;
        let loaded = load_state(&db, PREFIX, "user-1").await?;

        assert_eq!(loaded.wardrobe, state.wardrobe);
        assert_eq!(loaded.saved_outfits, state.saved_outfits);
        assert_eq!(loaded.settings, state.settings);
        assert_eq!(loaded, state);
        Ok(())
    }

    #[tokio::test]
    async fn test_states_are_per_owner() -> Result<()> {
        let db = setup_test_db().await?;

        let mut premium = AppState::default();
        settings::activate_premium(&mut premium);
        save_state(&db, PREFIX, "a", &premium).await?;
        save_state(&db, PREFIX, "b", &AppState::default()).await?;

        assert!(load_state(&db, PREFIX, "a").await?.is_premium);
        assert!(!load_state(&db, PREFIX, "b").await?.is_premium);

        assert!(delete_state(&db, PREFIX, "a").await?);
        assert!(!delete_state(&db, PREFIX, "a").await?);
        assert!(!load_state(&db, PREFIX, "a").await?.is_premium);
        Ok(())
    }

    #[tokio::test]
    async fn test_partial_snapshot_merges_over_defaults() -> Result<()> {
        let db = setup_test_db().await?;
        set_value(
            &db,
            &state_key(PREFIX, "legacy"),
            r#"{"isPremium": true, "settings": {"location": "Paris"}}"#.to_string(),
        )
        .await?;

        let state = load_state(&db, PREFIX, "legacy").await?;
        assert!(state.is_premium);
        assert_eq!(state.settings.location, "Paris");
        assert!(state.settings.sustainability_mode);
        assert!(state.wardrobe.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_is_an_error() -> Result<()> {
        let db = setup_test_db().await?;
        set_value(&db, &state_key(PREFIX, "broken"), "{not json".to_string()).await?;

        let result = load_state(&db, PREFIX, "broken").await;
        assert!(matches!(result, Err(crate::errors::Error::Serialization(_))));
        Ok(())
    }
}
