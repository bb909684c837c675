//! Entity module - SeaORM entity definitions for the database.
//! SmartFit only needs a single key-value table; the domain data lives inside
//! the JSON values it stores.

pub mod stored_state;

pub use stored_state::{
    Column as StoredStateColumn, Entity as StoredState, Model as StoredStateModel,
};
