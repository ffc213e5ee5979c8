//! Pages
//!
//! Top-level view components, one per route.

pub mod characters;
pub mod home;
pub mod read;
pub mod shop;
pub mod support;

pub use characters::Characters;
pub use home::Home;
pub use read::Read;
pub use shop::Shop;
pub use support::Support;
