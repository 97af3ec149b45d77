//! Domain layer for Profile Map Explorer.
//!
//! Holds the profile model and store, the search filter, the
//! selection/navigation state machine, form validation, theme resolution and
//! the map adapter capability. Nothing in this crate renders or performs I/O;
//! storage and map backends are provided by `pmx-infrastructure`.

pub mod config;
pub mod error;
pub mod map;
pub mod navigation;
pub mod profile;
pub mod search;
pub mod theme;
pub mod validation;

// Re-export common error type
pub use error::PmxError;
