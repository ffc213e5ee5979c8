//! Site controller
//!
//! Owns the state, the static catalog and the flag store, and runs events
//! through the reducer. This is the only place that touches storage.

use std::time::Duration;

use crate::catalog::{Catalog, Chapter, ChapterPaging, NoPaging};
use crate::config::{ReaderConfig, SurveyConfig};
use crate::store::KeyValueStore;
use crate::survey::SurveyGate;

use super::event::{Effect, SiteEvent};
use super::reducer::{reduce, Rules};
use super::state::SiteState;

/// Lifecycle of the first-visit survey timer within one page load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SurveyTimer {
    Idle,
    Armed,
    Fired,
}

pub struct SiteController<S> {
    state: SiteState,
    catalog: Catalog,
    reader: ReaderConfig,
    survey: SurveyConfig,
    store: S,
    paging: Box<dyn ChapterPaging>,
    timer: SurveyTimer,
    mounted: bool,
}

impl<S: KeyValueStore> SiteController<S> {
    /// Controller for a page loaded at `fragment`
    pub fn new(
        reader: ReaderConfig,
        survey: SurveyConfig,
        catalog: Catalog,
        store: S,
        fragment: &str,
    ) -> Self {
        Self {
            state: SiteState::new(fragment, &reader),
            catalog,
            reader,
            survey,
            store,
            paging: Box::new(NoPaging),
            timer: SurveyTimer::Idle,
            mounted: false,
        }
    }

    /// Plug in a collaborator for the previous/next chapter controls
    pub fn with_paging(mut self, paging: impl ChapterPaging + 'static) -> Self {
        self.paging = Box::new(paging);
        self
    }

    pub fn state(&self) -> &SiteState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn reader_config(&self) -> &ReaderConfig {
        &self.reader
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Chapters matching the current search box contents
    pub fn filtered_chapters(&self) -> Vec<&Chapter> {
        self.catalog.filter_chapters(&self.state.search)
    }

    /// Whether the survey timer is pending
    pub fn survey_armed(&self) -> bool {
        self.timer == SurveyTimer::Armed
    }

    /// First render of the page.
    ///
    /// Applies the initial theme and, on a first visit, schedules the survey.
    /// The "shown" flag is written here, before the popup appears, so a
    /// reload inside the delay window never shows it. Calling this again is
    /// a no-op.
    pub fn mount(&mut self) -> Vec<Effect> {
        if self.mounted {
            return Vec::new();
        }
        self.mounted = true;

        let mut effects = vec![Effect::ApplyTheme {
            theme: self.state.theme,
        }];

        let key = self.survey.storage_key.as_str();
        let gate = match SurveyGate::load(&self.store, key) {
            Ok(gate) => gate,
            Err(e) => {
                tracing::warn!("Could not read survey flag, not scheduling survey: {}", e);
                SurveyGate::Shown
            }
        };

        if gate.is_eligible() {
            if let Err(e) = SurveyGate::mark_shown(&mut self.store, key) {
                tracing::warn!("Could not persist survey flag: {}", e);
            }
            let delay = Duration::from_millis(self.survey.delay_ms);
            tracing::debug!(delay_ms = self.survey.delay_ms, "Scheduling first-visit survey");
            self.timer = SurveyTimer::Armed;
            effects.push(Effect::ScheduleSurvey { delay });
        }

        effects
    }

    /// Run one event through the state machine
    pub fn dispatch(&mut self, event: SiteEvent) -> Vec<Effect> {
        let event = match event {
            SiteEvent::PreviousChapter => {
                match self.paging.previous(self.state.selected_chapter) {
                    Some(id) => SiteEvent::SelectChapter { id },
                    None => return Vec::new(),
                }
            }
            SiteEvent::NextChapter => match self.paging.next(self.state.selected_chapter) {
                Some(id) => SiteEvent::SelectChapter { id },
                None => return Vec::new(),
            },
            SiteEvent::SurveyTimerFired => {
                if self.timer != SurveyTimer::Armed {
                    tracing::debug!("Ignoring survey timer that was never armed");
                    return Vec::new();
                }
                self.timer = SurveyTimer::Fired;
                SiteEvent::SurveyTimerFired
            }
            SiteEvent::SurveyAnswered { source } => {
                tracing::info!(source = %source, "Survey answered");
                SiteEvent::SurveyAnswered { source }
            }
            other => other,
        };

        let rules = Rules {
            catalog: &self.catalog,
            reader: &self.reader,
        };
        let transition = reduce(&self.state, &event, &rules);
        self.state = transition.state;
        transition.effects
    }
}
