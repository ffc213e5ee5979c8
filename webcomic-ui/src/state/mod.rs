//! State Management
//!
//! Site context wiring and the browser storage backend.

pub mod site;
pub mod storage;

pub use site::{current_fragment, provide_site_context, use_site, SiteContext};
pub use storage::LocalStorage;
