//! Shared test utilities for SmartFit.
//!
//! Helpers for setting up an in-memory database, building wardrobes with a
//! known shape, and getting deterministic randomness.

#![allow(clippy::unwrap_used)]

use crate::{
    errors::Result,
    models::{AppState, Category, ClothingItem},
};
use chrono::{NaiveDate, Utc};
use rand::{SeedableRng, rngs::StdRng};
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Installs a test-writer tracing subscriber; safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// A deterministic RNG so failures are reproducible.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5EED)
}

/// A fixed "today" for quota tests.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

/// Builds a clothing item with a tiny placeholder image.
pub fn item(name: &str, category: Category) -> ClothingItem {
    ClothingItem {
        id: Uuid::new_v4(),
        name: name.to_string(),
        image_data: "data:image/png;base64,AA==".to_string(),
        category,
        upload_timestamp: Utc::now(),
    }
}

/// Builds a free-tier state with the given number of items per category.
///
/// Items are named `<category>-<n>` and added tops first, then bottoms,
/// shoes and accessories.
pub fn state_with(tops: usize, bottoms: usize, shoes: usize, accessories: usize) -> AppState {
    let mut state = AppState::default();
    for (category, count) in [
        (Category::Tops, tops),
        (Category::Bottoms, bottoms),
        (Category::Shoes, shoes),
        (Category::Accessories, accessories),
    ] {
        for n in 0..count {
            state
                .wardrobe
                .push(item(&format!("{category}-{n}"), category));
        }
    }
    state
}
