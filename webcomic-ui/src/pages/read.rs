//! Read Page
//!
//! Where selecting a chapter lands: the reader without the hero banner.

use leptos::*;

use super::home::ComicSection;

#[component]
pub fn Read() -> impl IntoView {
    view! { <ComicSection /> }
}
