//! Search over the profile collection.
//!
//! Filtering is a case-insensitive substring match: the free-text query
//! against name and bio, the location against the address city.

mod filter;
mod model;

pub use filter::filter_profiles;
pub use model::SearchFilters;
