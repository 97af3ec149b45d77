//! Light/dark theme preference.
//!
//! The theme is explicit configuration rather than ambient state: a resolved
//! [`Theme`] value plus a [`PreferenceStore`] port through which the choice is
//! persisted.

mod model;
mod preference;

pub use model::{SystemAppearance, THEME_STORAGE_KEY, Theme, resolve_initial_theme};
pub use preference::PreferenceStore;
