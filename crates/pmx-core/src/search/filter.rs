//! Filter engine.

use super::model::SearchFilters;
use crate::profile::Profile;

/// Returns the profiles passing `filters`, in their input order.
///
/// Pure and stable: matching profiles are never reordered, and empty
/// filters return the input unchanged.
pub fn filter_profiles(profiles: &[Profile], filters: &SearchFilters) -> Vec<Profile> {
    profiles
        .iter()
        .filter(|profile| filters.matches(profile))
        .cloned()
        .collect()
}
