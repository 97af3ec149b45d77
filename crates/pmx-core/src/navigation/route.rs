//! Application routes and their URL form.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::profile::ProfileId;

/// Query parameter carrying the deep-linked profile on `/explore`.
pub const PROFILE_ID_PARAM: &str = "profileId";

/// A navigation request as carried in the URL.
///
/// Parsing never fails: unknown paths resolve to [`Route::Landing`] and a
/// malformed `profileId` is dropped. A malformed `/profile/:id` keeps the
/// detail route with no id so the view can report the profile as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    Landing,
    Explore {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        profile_id: Option<ProfileId>,
    },
    ProfileDetail {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        profile_id: Option<ProfileId>,
    },
    Admin,
}

impl Route {
    /// `/explore` without a deep link.
    pub fn explore() -> Self {
        Route::Explore { profile_id: None }
    }

    /// `/explore?profileId=<id>`.
    pub fn explore_profile(id: ProfileId) -> Self {
        Route::Explore {
            profile_id: Some(id),
        }
    }

    /// `/profile/<id>`.
    pub fn profile_detail(id: ProfileId) -> Self {
        Route::ProfileDetail {
            profile_id: Some(id),
        }
    }

    /// Parses a location such as `/explore?profileId=2`.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        let location = location.split('#').next().unwrap_or_default();
        let (path, query) = match location.split_once('?') {
            Some((path, query)) => (path, query),
            None => (location, ""),
        };
        let path = path.trim_end_matches('/');

        let mut segments = path.split('/').filter(|s| !s.is_empty());
        match (segments.next(), segments.next(), segments.next()) {
            (None, _, _) => Route::Landing,
            (Some("explore"), None, _) => Route::Explore {
                profile_id: query_param(query, PROFILE_ID_PARAM).and_then(|v| v.parse().ok()),
            },
            (Some("profile"), Some(id), None) => Route::ProfileDetail {
                profile_id: id.parse().ok(),
            },
            (Some("admin"), None, _) => Route::Admin,
            _ => Route::Landing,
        }
    }

    /// The URL form of this route.
    pub fn to_location(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Landing => write!(f, "/"),
            Route::Explore { profile_id: None } => write!(f, "/explore"),
            Route::Explore {
                profile_id: Some(id),
            } => write!(f, "/explore?{}={}", PROFILE_ID_PARAM, id),
            Route::ProfileDetail {
                profile_id: Some(id),
            } => write!(f, "/profile/{}", id),
            Route::ProfileDetail { profile_id: None } => write!(f, "/profile/"),
            Route::Admin => write!(f, "/admin"),
        }
    }
}

impl FromStr for Route {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Route::parse(s))
    }
}

fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}
