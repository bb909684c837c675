//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Settings and premium commands
pub mod account;

/// General utility commands
pub mod general;

/// Outfit generation and saving commands
pub mod outfit;

/// Wardrobe upload and listing commands
pub mod wardrobe;

// Export commands
pub use account::*;
pub use general::*;
pub use outfit::*;
pub use wardrobe::*;
