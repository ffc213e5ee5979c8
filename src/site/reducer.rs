//! Pure transition function
//!
//! `reduce(state, event) -> (state, effects)`. No I/O, no clocks, no storage:
//! everything the reducer needs beyond the state is passed in [`Rules`].

use crate::catalog::Catalog;
use crate::config::ReaderConfig;

use super::event::{Effect, SiteEvent};
use super::state::{Overlay, SiteState};
use crate::route::Route;

/// Read-only inputs to the reducer
#[derive(Debug, Clone, Copy)]
pub struct Rules<'a> {
    pub catalog: &'a Catalog,
    pub reader: &'a ReaderConfig,
}

/// Result of reducing one event
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: SiteState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn quiet(state: SiteState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }
}

/// Apply `event` to `state`.
///
/// `PreviousChapter` and `NextChapter` leave the state untouched here; the
/// controller resolves them into a `SelectChapter` through its paging
/// collaborator.
pub fn reduce(state: &SiteState, event: &SiteEvent, rules: &Rules<'_>) -> Transition {
    let mut next = state.clone();

    match event {
        SiteEvent::FragmentChanged { fragment } => {
            next.route = Route::from_fragment(fragment);
        }
        SiteEvent::ToggleTheme => {
            next.theme = state.theme.toggled();
            return Transition {
                effects: vec![Effect::ApplyTheme { theme: next.theme }],
                state: next,
            };
        }
        SiteEvent::SetReaderMode { mode } => {
            next.reader_mode = *mode;
        }
        SiteEvent::Search { query } => {
            next.search = query.clone();
        }
        SiteEvent::SelectChapter { id } => {
            if rules.catalog.chapter(*id).is_none() {
                tracing::warn!(chapter = id, "Ignoring selection of unknown chapter");
                return Transition::quiet(next);
            }
            next.selected_chapter = *id;
            next.pages_loaded = rules.reader.initial_pages.max(1);
            next.route = Route::Read;
        }
        SiteEvent::PreviousChapter | SiteEvent::NextChapter => {}
        SiteEvent::SentinelIntersected { ratio } => {
            if state.sentinel_armed() && *ratio >= rules.reader.sentinel_threshold {
                next.pages_loaded = state.pages_loaded.saturating_add(1);
            }
        }
        SiteEvent::OpenSidebar => next.sidebar = Overlay::Visible,
        SiteEvent::CloseSidebar => next.sidebar = Overlay::Hidden,
        SiteEvent::OpenSurvey | SiteEvent::SurveyTimerFired => next.survey = Overlay::Visible,
        SiteEvent::CloseSurvey | SiteEvent::SurveyAnswered { .. } => {
            next.survey = Overlay::Hidden
        }
    }

    Transition::quiet(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::state::{ReaderMode, ThemeMode};

    fn run(state: &SiteState, events: &[SiteEvent]) -> SiteState {
        let catalog = Catalog::placeholder();
        let reader = ReaderConfig::default();
        let rules = Rules {
            catalog: &catalog,
            reader: &reader,
        };
        events
            .iter()
            .fold(state.clone(), |s, e| reduce(&s, e, &rules).state)
    }

    fn full_visibility() -> SiteEvent {
        SiteEvent::SentinelIntersected { ratio: 1.0 }
    }

    #[test]
    fn test_select_chapter_is_one_transition() {
        let catalog = Catalog::placeholder();
        let reader = ReaderConfig::default();
        let rules = Rules {
            catalog: &catalog,
            reader: &reader,
        };

        let scrolled = run(
            &SiteState::default(),
            &[full_visibility(), full_visibility()],
        );
        assert_eq!(scrolled.pages_loaded, 5);

        let t = reduce(&scrolled, &SiteEvent::SelectChapter { id: 3 }, &rules);
        assert_eq!(t.state.selected_chapter, 3);
        assert_eq!(t.state.pages_loaded, 3);
        assert_eq!(t.state.route, Route::Read);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_select_unknown_chapter_is_ignored() {
        let state = SiteState::default();
        let next = run(&state, &[SiteEvent::SelectChapter { id: 42 }]);
        assert_eq!(next, state);
    }

    #[test]
    fn test_sentinel_grows_one_page_per_event() {
        let state = SiteState::default();
        assert_eq!(state.pages_loaded, 3);

        let next = run(&state, &[full_visibility(), full_visibility()]);
        assert_eq!(next.pages_loaded, 5);
    }

    #[test]
    fn test_partial_visibility_does_not_load() {
        let next = run(
            &SiteState::default(),
            &[SiteEvent::SentinelIntersected { ratio: 0.99 }],
        );
        assert_eq!(next.pages_loaded, 3);
    }

    #[test]
    fn test_sentinel_ignored_in_manga_mode() {
        let next = run(
            &SiteState::default(),
            &[
                SiteEvent::SetReaderMode {
                    mode: ReaderMode::Manga,
                },
                full_visibility(),
            ],
        );
        assert_eq!(next.pages_loaded, 3);
    }

    #[test]
    fn test_sentinel_ignored_off_reader_views() {
        let next = run(
            &SiteState::default(),
            &[
                SiteEvent::FragmentChanged {
                    fragment: "#characters".to_string(),
                },
                full_visibility(),
            ],
        );
        assert_eq!(next.pages_loaded, 3);
    }

    #[test]
    fn test_mode_switch_preserves_loaded_pages() {
        let state = run(&SiteState::default(), &[full_visibility()]);
        assert_eq!(state.pages_loaded, 4);

        let manga = run(
            &state,
            &[SiteEvent::SetReaderMode {
                mode: ReaderMode::Manga,
            }],
        );
        assert_eq!(manga.reader_mode, ReaderMode::Manga);
        assert_eq!(manga.pages_loaded, 4);

        let back = run(
            &manga,
            &[SiteEvent::SetReaderMode {
                mode: ReaderMode::Webtoon,
            }],
        );
        assert_eq!(back.pages_loaded, 4);
    }

    #[test]
    fn test_toggle_theme_emits_effect() {
        let catalog = Catalog::placeholder();
        let reader = ReaderConfig::default();
        let rules = Rules {
            catalog: &catalog,
            reader: &reader,
        };

        let t = reduce(&SiteState::default(), &SiteEvent::ToggleTheme, &rules);
        assert_eq!(t.state.theme, ThemeMode::Dark);
        assert_eq!(
            t.effects,
            vec![Effect::ApplyTheme {
                theme: ThemeMode::Dark
            }]
        );

        let t = reduce(&t.state, &SiteEvent::ToggleTheme, &rules);
        assert_eq!(t.state.theme, ThemeMode::Light);
    }

    #[test]
    fn test_fragment_changes() {
        let state = run(
            &SiteState::default(),
            &[SiteEvent::FragmentChanged {
                fragment: "#unknown123".to_string(),
            }],
        );
        assert_eq!(state.route, Route::NotFound("unknown123".to_string()));

        let state = run(
            &state,
            &[SiteEvent::FragmentChanged {
                fragment: String::new(),
            }],
        );
        assert_eq!(state.route, Route::Home);
    }

    #[test]
    fn test_search_keeps_raw_query() {
        let state = run(
            &SiteState::default(),
            &[SiteEvent::Search {
                query: "ShAdOwS".to_string(),
            }],
        );
        assert_eq!(state.search, "ShAdOwS");
    }

    #[test]
    fn test_overlays() {
        let state = run(&SiteState::default(), &[SiteEvent::OpenSidebar]);
        assert!(state.sidebar.is_visible());
        let state = run(&state, &[SiteEvent::CloseSidebar]);
        assert!(!state.sidebar.is_visible());

        let state = run(&state, &[SiteEvent::SurveyTimerFired]);
        assert!(state.survey.is_visible());
        let state = run(
            &state,
            &[SiteEvent::SurveyAnswered {
                source: "TikTok".to_string(),
            }],
        );
        assert!(!state.survey.is_visible());

        let state = run(&state, &[SiteEvent::OpenSurvey, SiteEvent::CloseSurvey]);
        assert!(!state.survey.is_visible());
    }

    #[test]
    fn test_paging_events_do_not_touch_state() {
        let state = SiteState::default();
        let next = run(&state, &[SiteEvent::PreviousChapter, SiteEvent::NextChapter]);
        assert_eq!(next, state);
    }
}
