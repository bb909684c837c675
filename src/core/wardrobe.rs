//! Wardrobe business logic - uploads, capacity policy, filtering and stats.
//!
//! The wardrobe is an insertion-ordered list inside `AppState`. Items are never
//! deduplicated or edited; the only way to remove them is a full reset.
//!
//! Category "detection" is a uniform-random stub. No image analysis happens.

use crate::{
    config::limits::TierLimits,
    errors::{Error, Result},
    models::{AppState, Category, CategoryFilter, ClothingItem},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{DateTime, Utc};
use rand::{Rng, seq::IndexedRandom};
use std::collections::BTreeMap;
use tracing::{info, warn};
use uuid::Uuid;

/// A file handed to SmartFit for ingestion.
#[derive(Debug, Clone)]
pub struct Upload {
    /// Original file name, e.g. "blue-shirt.jpg"
    pub filename: String,
    /// Declared content type, if the sender provided one
    pub content_type: Option<String>,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

/// Stand-in for image recognition: picks a category uniformly at random.
pub fn detect_category<R: Rng + ?Sized>(rng: &mut R) -> Category {
    *Category::ALL.choose(rng).unwrap_or(&Category::Tops)
}

/// Display name for an uploaded file: everything before the first `.`.
#[must_use]
pub fn display_name(filename: &str) -> String {
    let stem = filename.split('.').next().unwrap_or_default().trim();
    if stem.is_empty() {
        "item".to_string()
    } else {
        stem.to_string()
    }
}

/// Content type of an upload, preferring the declared one over a guess from the extension.
#[must_use]
pub fn resolve_content_type(upload: &Upload) -> String {
    upload
        .content_type
        .as_deref()
        .map(str::trim)
        .filter(|ct| !ct.is_empty())
        .map_or_else(
            || {
                mime_guess::from_path(&upload.filename)
                    .first_or_octet_stream()
                    .essence_str()
                    .to_string()
            },
            str::to_string,
        )
}

/// Encodes bytes as a `data:` URI.
#[must_use]
pub fn data_uri(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{content_type};base64,{}", STANDARD.encode(bytes))
}

/// Turns an uploaded file into a new clothing item with a randomly assigned category.
///
/// # Errors
/// Returns `Error::NotAnImage` when the content type is not `image/*`.
pub fn ingest_upload<R: Rng + ?Sized>(
    upload: &Upload,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<ClothingItem> {
    let content_type = resolve_content_type(upload);
    if !content_type.starts_with("image/") {
        return Err(Error::NotAnImage {
            file: upload.filename.clone(),
            content_type,
        });
    }

    Ok(ClothingItem {
        id: Uuid::new_v4(),
        name: display_name(&upload.filename),
        image_data: data_uri(&content_type, &upload.bytes),
        category: detect_category(rng),
        upload_timestamp: now,
    })
}

/// Checks whether `adding` more items fit in the wardrobe for the account's tier.
///
/// # Errors
/// Returns `Error::WardrobeFull` for free accounts that would exceed the item limit.
pub fn check_capacity(state: &AppState, adding: usize, limits: &TierLimits) -> Result<()> {
    let current = state.wardrobe.len();
    if !state.is_premium && current + adding > limits.free_item_limit {
        warn!(
            "Rejected upload of {adding} items: wardrobe has {current}, limit {}",
            limits.free_item_limit
        );
        return Err(Error::WardrobeFull {
            current,
            adding,
            limit: limits.free_item_limit,
        });
    }
    Ok(())
}

/// Appends a batch of items. Either the whole batch fits or nothing is added.
///
/// Returns the new wardrobe size.
pub fn add_items(
    state: &mut AppState,
    items: Vec<ClothingItem>,
    limits: &TierLimits,
) -> Result<usize> {
    check_capacity(state, items.len(), limits)?;
    let added = items.len();
    state.wardrobe.extend(items);
    info!("Added {added} items, wardrobe now has {}", state.wardrobe.len());
    Ok(state.wardrobe.len())
}

/// Appends a single item.
pub fn add_item(state: &mut AppState, item: ClothingItem, limits: &TierLimits) -> Result<usize> {
    add_items(state, vec![item], limits)
}

/// Items that pass the filter, in insertion order.
#[must_use]
pub fn filter_by_category(state: &AppState, filter: CategoryFilter) -> Vec<&ClothingItem> {
    state
        .wardrobe
        .iter()
        .filter(|item| filter.matches(item.category))
        .collect()
}

/// Number of items per category. Every category is present, even at zero.
#[must_use]
pub fn category_counts(state: &AppState) -> BTreeMap<Category, usize> {
    let mut counts: BTreeMap<Category, usize> = Category::ALL.into_iter().map(|c| (c, 0)).collect();
    for item in &state.wardrobe {
        *counts.entry(item.category).or_default() += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{item, seeded_rng, state_with};

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("blue-shirt.jpg"), "blue-shirt");
        assert_eq!(display_name("archive.tar.gz"), "archive");
        assert_eq!(display_name("noext"), "noext");
        assert_eq!(display_name(".hidden"), "item");
    }

    #[test]
    fn test_ingest_upload_builds_data_uri() {
        let mut rng = seeded_rng();
        let upload = Upload {
            filename: "jeans.png".to_string(),
            content_type: Some("image/png".to_string()),
            bytes: vec![1, 2, 3],
        };
        let item = ingest_upload(&upload, &mut rng, Utc::now()).unwrap();
        assert_eq!(item.name, "jeans");
        assert_eq!(item.image_data, "data:image/png;base64,AQID");
    }

    #[test]
    fn test_ingest_upload_guesses_content_type() {
        let mut rng = seeded_rng();
        let upload = Upload {
            filename: "boots.jpg".to_string(),
            content_type: None,
            bytes: vec![0xff],
        };
        let item = ingest_upload(&upload, &mut rng, Utc::now()).unwrap();
        assert!(item.image_data.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_ingest_upload_rejects_non_images() {
        let mut rng = seeded_rng();
        let upload = Upload {
            filename: "notes.txt".to_string(),
            content_type: Some("text/plain".to_string()),
            bytes: b"hello".to_vec(),
        };
        let result = ingest_upload(&upload, &mut rng, Utc::now());
        assert!(matches!(result, Err(Error::NotAnImage { .. })));
    }

    #[test]
    fn test_detect_category_is_uniform_stub() {
        let mut rng = seeded_rng();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(detect_category(&mut rng));
        }
        assert_eq!(seen.len(), Category::ALL.len());
    }

    #[test]
    fn test_add_items_preserves_order_without_dedup() {
        let limits = TierLimits::default();
        let mut state = AppState::default();
        let shirt = item("shirt", Category::Tops);

        add_item(&mut state, shirt.clone(), &limits).unwrap();
        add_item(&mut state, item("jeans", Category::Bottoms), &limits).unwrap();
        add_item(&mut state, shirt.clone(), &limits).unwrap();

        let names: Vec<_> = state.wardrobe.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["shirt", "jeans", "shirt"]);
    }

    #[test]
    fn test_free_capacity_limit() {
        let limits = TierLimits::default();
        let mut state = state_with(49, 0, 0, 0);

        let result = add_items(
            &mut state,
            vec![item("a", Category::Tops), item("b", Category::Tops)],
            &limits,
        );
        assert!(matches!(
            result,
            Err(Error::WardrobeFull {
                current: 49,
                adding: 2,
                limit: 50
            })
        ));
        assert_eq!(state.wardrobe.len(), 49);

        assert_eq!(add_item(&mut state, item("c", Category::Tops), &limits).unwrap(), 50);
        assert!(add_item(&mut state, item("d", Category::Tops), &limits).is_err());
    }

    #[test]
    fn test_premium_is_unlimited() {
        let limits = TierLimits::default();
        let mut state = state_with(50, 0, 0, 0);
        state.is_premium = true;

        assert_eq!(add_item(&mut state, item("extra", Category::Shoes), &limits).unwrap(), 51);
    }

    #[test]
    fn test_filter_and_counts() {
        let state = state_with(2, 1, 3, 0);

        assert_eq!(filter_by_category(&state, CategoryFilter::All).len(), 6);
        let shoes = filter_by_category(&state, CategoryFilter::Only(Category::Shoes));
        assert_eq!(shoes.len(), 3);
        assert!(shoes.iter().all(|i| i.category == Category::Shoes));
        assert!(filter_by_category(&state, CategoryFilter::Only(Category::Accessories)).is_empty());

        let counts = category_counts(&state);
        assert_eq!(counts[&Category::Tops], 2);
        assert_eq!(counts[&Category::Bottoms], 1);
        assert_eq!(counts[&Category::Shoes], 3);
        assert_eq!(counts[&Category::Accessories], 0);
    }
}
