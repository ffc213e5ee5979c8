//! # MyWebComic
//!
//! A webcomic fan site: hero banner, searchable chapter list, a two-mode
//! reader (infinite-scroll webtoon or paginated manga), character gallery,
//! merch shop, support page and a first-visit survey.
//!
//! The page is modelled as an explicit state machine so every behavior can be
//! exercised without a browser. The Leptos frontend in `webcomic-ui/` renders
//! [`site::SiteState`] and feeds host events back as [`site::SiteEvent`]s.
//!
//! ## Modules
//!
//! - [`site`]: state, events, reducer and controller
//! - [`route`]: URL fragment to view mapping
//! - [`catalog`]: static chapters, characters and merch
//! - [`survey`]: the persisted "survey already shown" gate
//! - [`store`]: key-value storage backends
//! - [`config`]: TOML configuration with environment overrides
//! - `server` (feature `server`): static file server for the built frontend

pub mod catalog;
pub mod config;
pub mod route;
pub mod site;
pub mod store;
pub mod survey;

#[cfg(feature = "server")]
pub mod logging;
#[cfg(feature = "server")]
pub mod server;

// Re-export top-level types for convenience
pub use catalog::{Catalog, Chapter, ChapterId, ChapterPaging, Character, MerchItem, NoPaging};

pub use config::{Config, ConfigError, LoadedConfig, LoggingConfig, ReaderConfig, ServerConfig, SurveyConfig};

pub use route::Route;

pub use site::{
    Effect, Overlay, ReaderMode, SiteController, SiteEvent, SiteState, ThemeMode,
};

pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError, StoreResult};

pub use survey::SurveyGate;

#[cfg(feature = "server")]
pub use server::{build_router, serve, ServerError};
