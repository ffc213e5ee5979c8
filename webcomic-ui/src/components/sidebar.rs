//! Mobile Sidebar
//!
//! Overlay drawer with the same links as the header. Clicking the backdrop,
//! the close button or any link hides it.

use leptos::*;

use webcomic::route::Route;
use webcomic::site::SiteEvent;

use super::nav::NavLink;
use crate::state::use_site;

#[component]
pub fn Sidebar() -> impl IntoView {
    let site = use_site();
    let visible = create_memo(move |_| site.state.with(|s| s.sidebar.is_visible()));

    move || {
        visible.get().then(|| {
            view! {
                <div
                    class="fixed inset-0 bg-black bg-opacity-50 z-40 md:hidden"
                    on:click=move |_| site.dispatch(SiteEvent::CloseSidebar)
                >
                    <div
                        class="bg-white dark:bg-gray-800 h-full w-64 p-4 shadow-lg transform transition-transform duration-300 ease-in-out"
                        on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                    >
                        <button
                            on:click=move |_| site.dispatch(SiteEvent::CloseSidebar)
                            class="mb-6 text-xl font-bold text-right w-full"
                        >
                            "✕"
                        </button>
                        <nav class="flex flex-col space-y-4">
                            {Route::NAV
                                .into_iter()
                                .map(|route| view! { <NavLink route=route closes_sidebar=true /> })
                                .collect_view()}
                        </nav>
                    </div>
                </div>
            }
        })
    }
}
