//! Map adapter capability.
//!
//! Both map integrations reduce to the same contract: one marker per located
//! profile, the selected marker highlighted, a callback on marker activation
//! and a recenter when the selection changes. [`MapAdapter`] captures what
//! differs between backends; the scene types describe what a shell draws.

mod adapter;
mod model;

pub use adapter::{DEFAULT_CENTER, DEFAULT_ZOOM, FOCUS_ZOOM, MapAdapter};
pub use model::{Camera, MapBackend, MapPlaceholder, MapScene, MapStyle, MapView, Marker};
