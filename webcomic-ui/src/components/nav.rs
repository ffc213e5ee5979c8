//! Navigation Components
//!
//! Header bar with brand, desktop links, theme toggle and the mobile menu
//! button.

use leptos::*;

use webcomic::route::Route;
use webcomic::site::SiteEvent;

use crate::state::use_site;

/// Sticky site header
#[component]
pub fn Nav() -> impl IntoView {
    let site = use_site();

    view! {
        <header class="bg-gradient-to-r from-purple-600 to-pink-500 text-white shadow-lg sticky top-0 z-50">
            <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                <h1 class="text-2xl font-bold">"MyWebComic"</h1>

                // Desktop links
                <nav class="hidden md:flex space-x-6">
                    {Route::NAV
                        .into_iter()
                        .map(|route| view! { <NavLink route=route link_class="hover:underline" /> })
                        .collect_view()}
                </nav>

                <div class="flex items-center gap-4">
                    <button
                        on:click=move |_| site.dispatch(SiteEvent::ToggleTheme)
                        class="p-2 rounded-full hover:bg-white/20 transition"
                    >
                        {move || site.state.with(|s| s.theme.toggle_icon())}
                    </button>
                    <button
                        on:click=move |_| site.dispatch(SiteEvent::OpenSidebar)
                        class="md:hidden p-2 rounded-md hover:bg-white/20"
                    >
                        "☰"
                    </button>
                </div>
            </div>
        </header>
    }
}

/// Anchor to one of the site's views.
///
/// The browser updates the fragment; the click also reports the target so
/// that re-clicking the current fragment (no `hashchange`) still navigates.
#[component]
pub fn NavLink(
    route: Route,
    #[prop(default = "")]
    link_class: &'static str,
    /// Close the mobile sidebar after navigating
    #[prop(optional)]
    closes_sidebar: bool,
) -> impl IntoView {
    let site = use_site();
    let href = route.href();
    let label = route.label();

    let on_click = {
        let fragment = href.clone();
        move |_| {
            site.dispatch(SiteEvent::FragmentChanged {
                fragment: fragment.clone(),
            });
            if closes_sidebar {
                site.dispatch(SiteEvent::CloseSidebar);
            }
        }
    };

    view! {
        <a href=href class=link_class on:click=on_click>
            {label}
        </a>
    }
}
