//! Admin form validation.
//!
//! # Module Structure
//!
//! - `field`: form field names as used in error maps
//! - `rules`: the field-level rules and the resulting error map
//! - `form`: an editing session over one profile payload

mod field;
mod form;
mod rules;

pub use field::{CoordinateAxis, FormField};
pub use form::{ProfileForm, ProfileFormData};
pub use rules::{ValidationErrors, validate};
