//! UI Components
//!
//! Reusable Leptos components for the site.

pub mod chapter_list;
pub mod nav;
pub mod newsletter;
pub mod reader;
pub mod sidebar;
pub mod survey;

pub use chapter_list::ChapterList;
pub use nav::{Nav, NavLink};
pub use newsletter::Newsletter;
pub use reader::Reader;
pub use sidebar::Sidebar;
pub use survey::SurveyModal;
