//! Field-level validation rules.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::field::FormField;
use super::form::ProfileFormData;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .unwrap_or_else(|e| panic!("invalid email regex: {e}"))
});

/// Mapping of field key to error message.
///
/// Empty means the payload is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field.key().to_string(), message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(field.key()).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(field.key())
    }

    /// Removes one field's error, leaving the others in place.
    pub fn clear(&mut self, field: FormField) -> Option<String> {
        self.0.remove(field.key())
    }

    /// Field keys with errors, in key order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        write!(f, "{}", parts.join("; "))
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Checks every rule against `data`; no rule short-circuits another.
pub fn validate(data: &ProfileFormData) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if is_blank(&data.name) {
        errors.insert(FormField::Name, "Name is required");
    }

    if is_blank(&data.email) {
        errors.insert(FormField::Email, "Email is required");
    } else if !EMAIL_RE.is_match(&data.email) {
        errors.insert(FormField::Email, "Email is invalid");
    }

    if is_blank(&data.avatar) {
        errors.insert(FormField::Avatar, "Avatar URL is required");
    } else if !data.avatar.starts_with("http") {
        errors.insert(FormField::Avatar, "Avatar must be a valid URL");
    }

    if is_blank(&data.bio) {
        errors.insert(FormField::Bio, "Bio is required");
    }

    if is_blank(&data.street) {
        errors.insert(FormField::Street, "Street address is required");
    }

    if is_blank(&data.city) {
        errors.insert(FormField::City, "City is required");
    }

    if !is_blank(&data.website) && !data.website.starts_with("http") {
        errors.insert(FormField::Website, "Website must be a valid URL");
    }

    errors
}
