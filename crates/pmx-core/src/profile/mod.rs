//! Profile domain module.
//!
//! # Module Structure
//!
//! - `model`: `Profile`, `ProfileDraft` and their value types
//! - `store`: ordered in-memory collection with max+1 id assignment
//! - `repository`: async port the application layer talks to
//!
//! # Usage
//!
//! ```ignore
//! use pmx_core::profile::{Profile, ProfileDraft, ProfileStore, ProfileRepository};
//! ```

mod model;
mod repository;
mod store;

// Re-export public API
pub use model::{Address, Coordinates, Profile, ProfileDraft, ProfileId, SocialLinks};
pub use repository::ProfileRepository;
pub use store::{ProfileLookup, ProfileStore};
