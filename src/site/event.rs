//! Site events and effects
//!
//! Events are what the host reports (clicks, keystrokes, hash changes,
//! intersection and timer callbacks). Effects are what a transition asks the
//! host to do in return.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::catalog::ChapterId;

use super::state::{ReaderMode, ThemeMode};

/// Input to the site state machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SiteEvent {
    /// The URL fragment changed, or a nav link for it was clicked
    FragmentChanged {
        fragment: String,
    },
    ToggleTheme,
    SetReaderMode {
        mode: ReaderMode,
    },
    /// Every keystroke in the chapter search box
    Search {
        query: String,
    },
    SelectChapter {
        id: ChapterId,
    },
    PreviousChapter,
    NextChapter,
    /// The webtoon sentinel's intersection ratio changed
    SentinelIntersected {
        ratio: f64,
    },
    OpenSidebar,
    CloseSidebar,
    OpenSurvey,
    CloseSurvey,
    SurveyAnswered {
        source: String,
    },
    /// The first-visit survey timer expired
    SurveyTimerFired,
}

/// Host-side action requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// Add or remove the root `dark` class
    ApplyTheme { theme: ThemeMode },
    /// Dispatch [`SiteEvent::SurveyTimerFired`] once `delay` has elapsed
    ScheduleSurvey {
        #[serde(serialize_with = "duration_ms::serialize")]
        delay: Duration,
    },
}

mod duration_ms {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(delay: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(delay.as_millis() as u64)
    }
}
