//! Hash-Fragment Routing
//!
//! Maps the URL fragment onto one of the site's views. The router only
//! observes the fragment; anchors elsewhere in the page are what change it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A view of the site, selected by the URL fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Read,
    Characters,
    Shop,
    Support,
    /// Any non-empty fragment that names no view. Keeps the raw fragment.
    NotFound(String),
}

impl Default for Route {
    fn default() -> Self {
        Route::Home
    }
}

impl Route {
    /// Links shown in the header and the mobile sidebar, in order
    pub const NAV: [Route; 4] = [Route::Home, Route::Characters, Route::Shop, Route::Support];

    /// Resolve a fragment, with or without its leading `#`.
    ///
    /// An empty fragment is the home page.
    pub fn from_fragment(fragment: &str) -> Self {
        let name = fragment.strip_prefix('#').unwrap_or(fragment);
        match name {
            "" | "home" => Route::Home,
            "read" => Route::Read,
            "characters" => Route::Characters,
            "shop" => Route::Shop,
            "support" => Route::Support,
            other => Route::NotFound(other.to_string()),
        }
    }

    /// Fragment naming this view, without the `#`
    pub fn fragment(&self) -> &str {
        match self {
            Route::Home => "home",
            Route::Read => "read",
            Route::Characters => "characters",
            Route::Shop => "shop",
            Route::Support => "support",
            Route::NotFound(raw) => raw,
        }
    }

    /// `href` for an anchor pointing at this view
    pub fn href(&self) -> String {
        format!("#{}", self.fragment())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Read => "Read",
            Route::Characters => "Characters",
            Route::Shop => "Shop",
            Route::Support => "Support",
            Route::NotFound(_) => "Not Found",
        }
    }

    /// Whether this view renders the comic reader
    pub fn shows_reader(&self) -> bool {
        matches!(self, Route::Home | Route::Read)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Route::NotFound(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.fragment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fragment_is_home() {
        assert_eq!(Route::from_fragment(""), Route::Home);
        assert_eq!(Route::from_fragment("#"), Route::Home);
    }

    #[test]
    fn test_known_fragments() {
        assert_eq!(Route::from_fragment("#home"), Route::Home);
        assert_eq!(Route::from_fragment("read"), Route::Read);
        assert_eq!(Route::from_fragment("#characters"), Route::Characters);
        assert_eq!(Route::from_fragment("#shop"), Route::Shop);
        assert_eq!(Route::from_fragment("#support"), Route::Support);
    }

    #[test]
    fn test_unknown_fragment_is_not_found() {
        let route = Route::from_fragment("#unknown123");
        assert_eq!(route, Route::NotFound("unknown123".to_string()));
        assert!(route.is_not_found());
        assert!(!route.shows_reader());
    }

    #[test]
    fn test_fragments_are_case_sensitive() {
        assert!(Route::from_fragment("#Home").is_not_found());
    }

    #[test]
    fn test_href_round_trip_for_nav() {
        for route in Route::NAV {
            assert_eq!(Route::from_fragment(&route.href()), route);
        }
    }
}
