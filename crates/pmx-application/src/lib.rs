//! Application layer for Profile Map Explorer.
//!
//! Use cases and the [`DirectoryApp`] facade a UI shell drives. Everything a
//! shell needs is reachable from [`bootstrap`].

pub mod admin_service;
pub mod bootstrap;
pub mod directory_app;
pub mod map_controller;
pub mod telemetry;
pub mod theme_service;

pub use admin_service::{AdminService, ConfirmationPrompt, DeleteOutcome};
pub use bootstrap::{AppPorts, bootstrap, bootstrap_default, bootstrap_from_files};
pub use directory_app::{DetailView, DirectoryApp};
pub use map_controller::MapController;
pub use theme_service::ThemeService;
