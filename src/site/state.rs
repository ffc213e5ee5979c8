//! Site state
//!
//! Every value the page renders from lives in [`SiteState`]. It is only
//! ever replaced wholesale by the reducer, so a render never observes half
//! of a transition.

use serde::{Deserialize, Serialize};

use crate::catalog::ChapterId;
use crate::config::ReaderConfig;
use crate::route::Route;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Glyph for the toggle button: the mode you would switch to
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ThemeMode::Light => "🌙",
            ThemeMode::Dark => "☀️",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReaderMode {
    /// Continuous vertical strip, pages revealed as the reader scrolls
    #[default]
    Webtoon,
    /// Fixed grid of pages
    Manga,
}

impl ReaderMode {
    pub const ALL: [ReaderMode; 2] = [ReaderMode::Webtoon, ReaderMode::Manga];

    pub fn label(self) -> &'static str {
        match self {
            ReaderMode::Webtoon => "Webtoon Mode",
            ReaderMode::Manga => "Manga Mode",
        }
    }
}

/// Visibility of an overlay (mobile sidebar, survey modal)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overlay {
    #[default]
    Hidden,
    Visible,
}

impl Overlay {
    pub fn is_visible(self) -> bool {
        self == Overlay::Visible
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteState {
    pub theme: ThemeMode,
    pub reader_mode: ReaderMode,
    pub route: Route,
    pub search: String,
    pub selected_chapter: ChapterId,
    /// Pages revealed in the webtoon strip. Only grows, except when a new
    /// chapter is selected.
    pub pages_loaded: u32,
    pub sidebar: Overlay,
    pub survey: Overlay,
}

impl SiteState {
    /// Initial state for a page loaded at `fragment`
    pub fn new(fragment: &str, reader: &ReaderConfig) -> Self {
        Self {
            theme: ThemeMode::default(),
            reader_mode: ReaderMode::default(),
            route: Route::from_fragment(fragment),
            search: String::new(),
            selected_chapter: 1,
            pages_loaded: reader.initial_pages.max(1),
            sidebar: Overlay::Hidden,
            survey: Overlay::Hidden,
        }
    }

    /// Whether the bottom sentinel of the webtoon strip is on the page
    pub fn sentinel_armed(&self) -> bool {
        self.reader_mode == ReaderMode::Webtoon && self.route.shows_reader()
    }

    pub fn previous_disabled(&self) -> bool {
        self.selected_chapter <= 1
    }
}

impl Default for SiteState {
    fn default() -> Self {
        Self::new("", &ReaderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SiteState::default();
        assert_eq!(state.route, Route::Home);
        assert_eq!(state.theme, ThemeMode::Light);
        assert_eq!(state.reader_mode, ReaderMode::Webtoon);
        assert_eq!(state.selected_chapter, 1);
        assert_eq!(state.pages_loaded, 3);
        assert!(!state.sidebar.is_visible());
        assert!(!state.survey.is_visible());
        assert!(state.previous_disabled());
    }

    #[test]
    fn test_initial_route_from_fragment() {
        let state = SiteState::new("#shop", &ReaderConfig::default());
        assert_eq!(state.route, Route::Shop);
        assert!(!state.sentinel_armed());
    }

    #[test]
    fn test_initial_pages_is_at_least_one() {
        let reader = ReaderConfig {
            initial_pages: 0,
            ..ReaderConfig::default()
        };
        assert_eq!(SiteState::new("", &reader).pages_loaded, 1);
    }

    #[test]
    fn test_theme_toggle_icon() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggle_icon(), "☀️");
    }
}
