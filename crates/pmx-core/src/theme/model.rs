//! Theme domain model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Key under which the theme choice is persisted.
pub const THEME_STORAGE_KEY: &str = "theme";

/// UI colour scheme.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Colour scheme reported by the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemAppearance {
    #[default]
    NoPreference,
    Light,
    Dark,
}

/// Picks the startup theme: a valid persisted value, else the OS
/// preference for dark, else light.
pub fn resolve_initial_theme(persisted: Option<&str>, system: SystemAppearance) -> Theme {
    if let Some(theme) = persisted.and_then(|v| v.parse::<Theme>().ok()) {
        return theme;
    }
    match system {
        SystemAppearance::Dark => Theme::Dark,
        SystemAppearance::Light | SystemAppearance::NoPreference => Theme::Light,
    }
}
