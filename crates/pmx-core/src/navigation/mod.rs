//! Selection and navigation state machine.
//!
//! The explore view, the map and deep links all share one notion of the
//! "selected" profile. This module models that as an explicit state machine:
//! [`NavigationState::apply`] maps a state and a [`NavigationEvent`] to a new
//! state, optionally with a [`Route`] the shell should push to its history.
//!
//! # Module Structure
//!
//! - `route`: URL space of the application (`/`, `/explore`, `/profile/:id`, `/admin`)
//! - `state`: views, events and transitions

mod route;
mod state;

pub use route::{PROFILE_ID_PARAM, Route};
pub use state::{NavigationEvent, NavigationState, Transition, View};
