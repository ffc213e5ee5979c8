//! App Root Component
//!
//! Provides the site context, follows the URL fragment and switches the
//! main view on the current route.

use leptos::*;

use webcomic::route::Route;
use webcomic::site::SiteEvent;

use crate::components::{Nav, NavLink, Newsletter, Sidebar, SurveyModal};
use crate::pages::{Characters, Home, Read, Shop, Support};
use crate::state::{current_fragment, provide_site_context, SiteContext};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let site = provide_site_context();
    site.mount();

    follow_fragment(site);

    let route = create_memo(move |_| site.state.with(|s| s.route.clone()));

    view! {
        <div class="min-h-screen flex flex-col bg-gray-100 text-gray-900 dark:bg-gray-900 dark:text-gray-100 transition-colors">
            <Nav />
            <Sidebar />

            <main class="flex-1">
                {move || match route.get() {
                    Route::Home => view! { <Home /> }.into_view(),
                    Route::Read => view! { <Read /> }.into_view(),
                    Route::Characters => view! { <Characters /> }.into_view(),
                    Route::Shop => view! { <Shop /> }.into_view(),
                    Route::Support => view! { <Support /> }.into_view(),
                    Route::NotFound(fragment) => view! { <NotFound fragment=fragment /> }.into_view(),
                }}
            </main>

            <Newsletter />
            <Footer />
            <SurveyModal />
        </div>
    }
}

/// Feed `hashchange` (back/forward, typed URLs) into the site until the
/// current owner is disposed
pub fn follow_fragment(site: SiteContext) {
    let hash_listener = window_event_listener(ev::hashchange, move |_| {
        site.dispatch(SiteEvent::FragmentChanged {
            fragment: current_fragment(),
        });
    });
    on_cleanup(move || hash_listener.remove());
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-6 bg-gray-800 text-gray-300 text-center text-sm">
            "© 2025 MyWebComic. All rights reserved."
        </footer>
    }
}

/// Shown for any fragment that names no view
#[component]
fn NotFound(fragment: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center px-4">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 dark:text-gray-400 mb-6">
                {format!("There is nothing at #{}.", fragment)}
            </p>
            <NavLink
                route=Route::Home
                link_class="px-6 py-3 bg-purple-600 hover:bg-purple-700 text-white rounded-lg font-medium transition-colors"
            />
        </div>
    }
}
