//! Infrastructure for Profile Map Explorer.
//!
//! Concrete implementations of the ports defined in `pmx-core`: the seeded
//! in-memory profile repository, preference stores, configuration loading and
//! the two map backends.

pub mod config_service;
pub mod in_memory_profile_repository;
pub mod map;
pub mod paths;
pub mod preference_store;
pub mod seed;

pub use crate::config_service::ConfigService;
pub use crate::in_memory_profile_repository::InMemoryProfileRepository;
pub use crate::map::{OpenTileMapAdapter, VectorTileMapAdapter, create_map_adapter};
pub use crate::preference_store::{FilePreferenceStore, InMemoryPreferenceStore};
