//! Site State Machine
//!
//! The whole page as an explicit state struct plus a pure reducer.
//!
//! - [`state`]: everything the page renders from
//! - [`event`]: host events in, host effects out
//! - [`reducer`]: `reduce(state, event) -> (state, effects)`
//! - [`controller`]: owns state, catalog and the flag store
//!
//! # Example
//!
//! ```rust
//! use webcomic::catalog::Catalog;
//! use webcomic::config::Config;
//! use webcomic::site::{SiteController, SiteEvent};
//! use webcomic::store::MemoryStore;
//!
//! let config = Config::default();
//! let mut site = SiteController::new(
//!     config.reader,
//!     config.survey,
//!     Catalog::placeholder(),
//!     MemoryStore::new(),
//!     "#home",
//! );
//! site.mount();
//!
//! site.dispatch(SiteEvent::SelectChapter { id: 3 });
//! site.dispatch(SiteEvent::SentinelIntersected { ratio: 1.0 });
//! assert_eq!(site.state().pages_loaded, 4);
//! ```

pub mod controller;
pub mod event;
pub mod reducer;
pub mod state;

pub use controller::SiteController;
pub use event::{Effect, SiteEvent};
pub use reducer::{reduce, Rules, Transition};
pub use state::{Overlay, ReaderMode, SiteState, ThemeMode};
