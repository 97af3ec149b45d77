//! Map backend implementations.
//!
//! # Module Structure
//!
//! - `vector_tile`: commercial vector-tile service, needs an access token
//! - `open_tile`: open raster tiles, no credentials
//!
//! The backend is picked once from [`AppConfig::map_backend`] by
//! [`create_map_adapter`].

mod open_tile;
mod vector_tile;

use std::sync::Arc;

use pmx_core::config::AppConfig;
use pmx_core::map::{MapAdapter, MapBackend};

pub use open_tile::OpenTileMapAdapter;
pub use vector_tile::VectorTileMapAdapter;

/// Builds the adapter configured for this process.
pub fn create_map_adapter(config: &AppConfig) -> Arc<dyn MapAdapter> {
    tracing::info!("[Map] Using {} backend", config.map_backend);
    match config.map_backend {
        MapBackend::VectorTile => Arc::new(VectorTileMapAdapter::new(
            config.mapbox_access_token.clone(),
        )),
        MapBackend::OpenTile => Arc::new(OpenTileMapAdapter::new()),
    }
}
