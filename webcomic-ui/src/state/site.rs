//! Site Context
//!
//! Bridges the site state machine into Leptos. The controller is kept in a
//! `StoredValue`; its state is mirrored into one `RwSignal` that the views
//! read, so every transition lands as a single reactive update.

use gloo_timers::callback::Timeout;
use leptos::*;

use webcomic::catalog::Catalog;
use webcomic::config::Config;
use webcomic::site::{Effect, SiteController, SiteEvent, SiteState};

use super::storage::LocalStorage;

/// Shared handle provided to all components
#[derive(Clone, Copy)]
pub struct SiteContext {
    /// Snapshot of the controller's state after the last transition
    pub state: RwSignal<SiteState>,
    controller: StoredValue<SiteController<LocalStorage>>,
}

/// Create the controller for the current URL and provide it as context
pub fn provide_site_context() -> SiteContext {
    let config = Config::default();
    let controller = SiteController::new(
        config.reader,
        config.survey,
        Catalog::placeholder(),
        LocalStorage,
        &current_fragment(),
    );

    let site = SiteContext {
        state: create_rw_signal(controller.state().clone()),
        controller: store_value(controller),
    };
    provide_context(site);
    site
}

/// Fetch the site context provided by the app root
pub fn use_site() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext not found")
}

/// `location.hash` of the page, empty when unavailable
pub fn current_fragment() -> String {
    window().location().hash().unwrap_or_default()
}

impl SiteContext {
    /// Run the mount-time transition (initial theme, first-visit survey)
    pub fn mount(self) {
        let mut effects = Vec::new();
        self.controller.update_value(|site| effects = site.mount());
        self.run_effects(effects);
    }

    /// Feed one host event through the state machine
    pub fn dispatch(self, event: SiteEvent) {
        let mut outcome = None;
        self.controller.update_value(|site| {
            let effects = site.dispatch(event);
            outcome = Some((effects, site.state().clone()));
        });

        let Some((effects, snapshot)) = outcome else {
            return;
        };
        // Signals are set outside the controller borrow: subscribers may dispatch.
        if self.state.with_untracked(|current| *current != snapshot) {
            self.state.set(snapshot);
        }
        self.run_effects(effects);
    }

    pub fn catalog(self) -> Catalog {
        self.controller.with_value(|site| site.catalog().clone())
    }

    pub fn sentinel_threshold(self) -> f64 {
        self.controller
            .with_value(|site| site.reader_config().sentinel_threshold)
    }

    fn run_effects(self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ApplyTheme { theme } => apply_theme_class(theme.is_dark()),
                Effect::ScheduleSurvey { delay } => {
                    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                    Timeout::new(millis, move || {
                        self.dispatch(SiteEvent::SurveyTimerFired);
                    })
                    .forget();
                }
            }
        }
    }
}

/// Add or remove the `dark` class the stylesheet keys its dark variants on
fn apply_theme_class(dark: bool) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force("dark", dark) {
        web_sys::console::error_1(&format!("Failed to apply theme: {:?}", e).into());
    }
}
