//! Data model for fetched user profiles.
//!
//! Records are decoded once from the API response and never mutated; views
//! only read them and pass clones between screens.

mod user;

pub use user::*;
