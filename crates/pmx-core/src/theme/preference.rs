//! Preference store port.

use async_trait::async_trait;

use crate::error::Result;

/// Durable string key-value store for client preferences.
///
/// The browser's local storage in a web shell, a JSON file on desktop, or a
/// map in tests.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;

    async fn remove(&self, key: &str) -> Result<()>;
}
