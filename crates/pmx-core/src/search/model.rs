//! Search domain models.

use serde::{Deserialize, Serialize};

use crate::profile::Profile;

/// Transient query state of the explore view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Matched against name and bio
    #[serde(default)]
    pub query: String,
    /// Matched against the address city
    #[serde(default)]
    pub location: String,
}

impl SearchFilters {
    pub fn new(query: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            location: location.into(),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// True when both filters are empty and every profile passes.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.location.is_empty()
    }

    /// Whether `profile` passes both filters.
    pub fn matches(&self, profile: &Profile) -> bool {
        let query_ok = self.query.is_empty() || {
            let needle = self.query.to_lowercase();
            contains_ci(&profile.name, &needle) || contains_ci(&profile.bio, &needle)
        };
        let location_ok = self.location.is_empty()
            || contains_ci(&profile.address.city, &self.location.to_lowercase());
        query_ok && location_ok
    }
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
