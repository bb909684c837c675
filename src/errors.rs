use thiserror::Error;

/// Unified error type for SmartFit.
///
/// The first group of variants are advisories: expected, user-facing outcomes
/// such as a full wardrobe or an exhausted daily quota. The bot turns them into
/// friendly replies. Everything else is an operational fault.
#[derive(Debug, Error)]
pub enum Error {
    /// Adding the items would push a free wardrobe past its capacity
    #[error("Free plan limit: {limit} items (have {current}, adding {adding})")]
    WardrobeFull {
        /// Items currently in the wardrobe
        current: usize,
        /// Items in the rejected upload
        adding: usize,
        /// Capacity for the account's tier
        limit: usize,
    },

    /// The wardrobe is too small to generate outfits from
    #[error("Add at least {need} items to generate outfits (have {have})")]
    NotEnoughItems {
        /// Items currently in the wardrobe
        have: usize,
        /// Minimum needed
        need: usize,
    },

    /// The free-tier daily outfit allowance is used up
    #[error("Free plan limit: {limit} outfits per day")]
    OutfitLimitReached {
        /// Daily allowance for the account's tier
        limit: usize,
    },

    /// No current or saved outfit matches the given id
    #[error("Outfit not found: {id}")]
    OutfitNotFound {
        /// The id or id prefix that was looked up
        id: String,
    },

    /// An uploaded file is not an image
    #[error("{file} is not an image ({content_type})")]
    NotAnImage {
        /// Uploaded file name
        file: String,
        /// Declared or guessed content type
        content_type: String,
    },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Stored state could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Required environment variable missing
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Formatting a reply failed
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Serenity/Poise framework error
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl Error {
    /// Whether this error is an expected, user-facing advisory rather than a fault.
    #[must_use]
    pub const fn is_advisory(&self) -> bool {
        matches!(
            self,
            Self::WardrobeFull { .. }
                | Self::NotEnoughItems { .. }
                | Self::OutfitLimitReached { .. }
                | Self::OutfitNotFound { .. }
                | Self::NotAnImage { .. }
        )
    }
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
