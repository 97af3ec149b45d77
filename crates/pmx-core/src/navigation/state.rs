//! Navigation state and transitions.

use serde::{Deserialize, Serialize};

use super::route::Route;
use crate::profile::{ProfileId, ProfileLookup};

/// The screen currently shown by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "view", content = "profileId", rename_all = "snake_case")]
pub enum View {
    #[default]
    Landing,
    /// List + map exploration screen; the only view with a selection
    Explore,
    ProfileDetail(Option<ProfileId>),
    Admin,
}

impl From<Route> for View {
    fn from(route: Route) -> Self {
        match route {
            Route::Landing => View::Landing,
            Route::Explore { .. } => View::Explore,
            Route::ProfileDetail { profile_id } => View::ProfileDetail(profile_id),
            Route::Admin => View::Admin,
        }
    }
}

/// Something the user or the shell did that may move the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum NavigationEvent {
    /// A route change (link, address bar, back/forward).
    Navigate(Route),
    /// A list card's summary action or a map pin was activated.
    SelectProfile(ProfileId),
    /// A card's "view on map" action.
    ViewOnMap(ProfileId),
    /// The profile was removed from the store.
    ProfileDeleted(ProfileId),
}

/// Current view plus the selected profile.
///
/// The selection is a weak reference into the store: it only ever names an
/// id that existed when it was set, and it is cleared when the user leaves
/// the explore view or the profile is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    current_view: View,
    selected_id: Option<ProfileId>,
}

/// Result of applying an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: NavigationState,
    /// Location the shell must push so reloads and back/forward reproduce
    /// the new state. `None` means the current URL already does.
    pub location: Option<Route>,
}

impl Transition {
    fn stay(state: NavigationState) -> Self {
        Self {
            state,
            location: None,
        }
    }
}

impl NavigationState {
    /// Initial state: landing page, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn selected_id(&self) -> Option<ProfileId> {
        self.selected_id
    }

    pub fn is_selected(&self, id: ProfileId) -> bool {
        self.selected_id == Some(id)
    }

    /// Applies `event`, consulting `profiles` for which ids exist.
    pub fn apply<L>(&self, event: NavigationEvent, profiles: &L) -> Transition
    where
        L: ProfileLookup + ?Sized,
    {
        match event {
            NavigationEvent::Navigate(route) => Transition::stay(self.navigate(route, profiles)),
            NavigationEvent::SelectProfile(id) => {
                if self.current_view != View::Explore || !profiles.contains_profile(id) {
                    return Transition::stay(*self);
                }
                Transition::stay(Self {
                    selected_id: Some(id),
                    ..*self
                })
            }
            NavigationEvent::ViewOnMap(id) => {
                if !profiles.contains_profile(id) {
                    return Transition::stay(*self);
                }
                Transition {
                    state: Self {
                        current_view: View::Explore,
                        selected_id: Some(id),
                    },
                    location: Some(Route::explore_profile(id)),
                }
            }
            NavigationEvent::ProfileDeleted(id) => {
                let selected_id = self.selected_id.filter(|selected| *selected != id);
                Transition::stay(Self {
                    selected_id,
                    ..*self
                })
            }
        }
    }

    /// Drops a selection whose profile no longer exists.
    pub fn reconcile<L>(&self, profiles: &L) -> Self
    where
        L: ProfileLookup + ?Sized,
    {
        Self {
            selected_id: self.selected_id.filter(|id| profiles.contains_profile(*id)),
            ..*self
        }
    }

    fn navigate<L>(&self, route: Route, profiles: &L) -> Self
    where
        L: ProfileLookup + ?Sized,
    {
        match route {
            Route::Explore { profile_id } => {
                // Leaving explore always clears, so "unchanged" here is either
                // the in-view selection or none.
                let selected_id = match profile_id {
                    Some(id) if profiles.contains_profile(id) => Some(id),
                    _ => self.selected_id,
                };
                Self {
                    current_view: View::Explore,
                    selected_id,
                }
            }
            other => Self {
                current_view: other.into(),
                selected_id: None,
            },
        }
    }
}
