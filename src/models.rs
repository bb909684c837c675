//! Domain model for SmartFit - clothing items, outfits, settings and the
//! per-user `AppState` snapshot.
//!
//! Everything here is plain data with serde derives. The JSON field names are
//! camelCase because the whole `AppState` is stored as one JSON document.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt, str::FromStr};
use uuid::Uuid;

/// Clothing category assigned on upload.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, poise::ChoiceParameter,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Shirts, sweaters, jackets
    #[name = "tops"]
    Tops,
    /// Trousers, skirts, shorts
    #[name = "bottoms"]
    Bottoms,
    /// Footwear
    #[name = "shoes"]
    Shoes,
    /// Everything else; never part of a generated outfit
    #[name = "accessories"]
    Accessories,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 4] = [Self::Tops, Self::Bottoms, Self::Shoes, Self::Accessories];

    /// Categories an outfit must contain, in outfit order.
    pub const REQUIRED: [Self; 3] = [Self::Tops, Self::Bottoms, Self::Shoes];

    /// Lowercase name used in storage and replies.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tops => "tops",
            Self::Bottoms => "bottoms",
            Self::Shoes => "shoes",
            Self::Accessories => "accessories",
        }
    }

    /// Emoji shown next to items of this category.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Tops => "👕",
            Self::Bottoms => "👖",
            Self::Shoes => "👟",
            Self::Accessories => "👗",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

/// Category filter for wardrobe listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every item
    #[default]
    All,
    /// Only items of one category
    Only(Category),
}

impl CategoryFilter {
    /// Whether an item of `category` passes the filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }
}

impl From<Option<Category>> for CategoryFilter {
    fn from(value: Option<Category>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Occasion tag on a generated outfit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, poise::ChoiceParameter)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    /// Everyday wear
    #[name = "casual"]
    Casual,
    /// Office, ceremonies
    #[name = "formal"]
    Formal,
    /// Gym, outdoors
    #[name = "sporty"]
    Sporty,
    /// Going out
    #[name = "evening"]
    Evening,
}

impl Occasion {
    /// All occasions.
    pub const ALL: [Self; 4] = [Self::Casual, Self::Formal, Self::Sporty, Self::Evening];

    /// Lowercase name used in storage and replies.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Formal => "formal",
            Self::Sporty => "sporty",
            Self::Evening => "evening",
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weather tag on a generated outfit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, poise::ChoiceParameter)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    /// Clear sky
    #[name = "sunny"]
    Sunny,
    /// Overcast
    #[name = "cloudy"]
    Cloudy,
    /// Rain
    #[name = "rainy"]
    Rainy,
    /// Low temperatures
    #[name = "cold"]
    Cold,
}

impl Weather {
    /// All weather conditions.
    pub const ALL: [Self; 4] = [Self::Sunny, Self::Cloudy, Self::Rainy, Self::Cold];

    /// Lowercase name used in storage and replies.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Cold => "cold",
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single uploaded piece of clothing. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    /// Unique identifier
    pub id: Uuid,
    /// Display name taken from the uploaded file name
    pub name: String,
    /// Image as a `data:` URI
    pub image_data: String,
    /// Assigned category
    pub category: Category,
    /// When the item was uploaded
    pub upload_timestamp: DateTime<Utc>,
}

/// A generated combination of one top, one bottom and one pair of shoes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outfit {
    /// Identifier, kept across reshuffles
    pub id: Uuid,
    /// Top, bottom and shoes, in that order
    pub items: [ClothingItem; 3],
    /// Occasion tag
    pub occasion: Occasion,
    /// Weather tag
    pub weather: Weather,
}

impl Outfit {
    /// The top of this outfit.
    #[must_use]
    pub const fn top(&self) -> &ClothingItem {
        &self.items[0]
    }

    /// The bottom of this outfit.
    #[must_use]
    pub const fn bottom(&self) -> &ClothingItem {
        &self.items[1]
    }

    /// The shoes of this outfit.
    #[must_use]
    pub const fn shoes(&self) -> &ClothingItem {
        &self.items[2]
    }

    /// First eight characters of the id, used as a handle in replies.
    #[must_use]
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

/// User preferences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Preferred styles (e.g. "casual", "minimal")
    pub preferred_styles: BTreeSet<String>,
    /// Free-form location, shown with the weather
    pub location: String,
    /// Prefer sustainable suggestions
    pub sustainability_mode: bool,
    /// Allow affiliate shopping links
    pub affiliate_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preferred_styles: BTreeSet::from(["casual".to_string()]),
            location: "New York".to_string(),
            sustainability_mode: true,
            affiliate_mode: false,
        }
    }
}

/// Free-tier outfit counter for one calendar day.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutfitQuota {
    /// Day of the last counted generation
    pub day: Option<NaiveDate>,
    /// Outfits produced on `day`
    pub generated: usize,
}

/// Everything SmartFit knows about one user.
///
/// Missing fields in a stored snapshot fall back to their defaults, so older
/// or partial snapshots merge over the default state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppState {
    /// All uploaded items, in upload order
    pub wardrobe: Vec<ClothingItem>,
    /// Outfits from the most recent generation
    pub outfits: Vec<Outfit>,
    /// Outfits the user chose to keep
    pub saved_outfits: Vec<Outfit>,
    /// User preferences
    pub settings: Settings,
    /// Premium tier flag
    pub is_premium: bool,
    /// Free-tier daily outfit counter
    pub quota: OutfitQuota,
}
