//! Comic Reader Component
//!
//! Mode switch, the webtoon strip or manga grid, and the chapter paging
//! controls.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use webcomic::catalog::{manga_page_image, webtoon_page_image, MANGA_PAGE_COUNT};
use webcomic::site::{ReaderMode, SiteEvent};

use crate::state::use_site;

#[component]
pub fn Reader() -> impl IntoView {
    let site = use_site();
    let catalog = site.catalog();
    let mode = create_memo(move |_| site.state.with(|s| s.reader_mode));
    let title = create_memo(move |_| {
        let id = site.state.with(|s| s.selected_chapter);
        catalog
            .chapter(id)
            .map(|c| c.title.clone())
            .unwrap_or_else(|| format!("Chapter {}", id))
    });

    view! {
        <div class="lg:col-span-3 bg-white dark:bg-gray-800 rounded-lg shadow p-6">
            <h2 class="text-2xl font-bold mb-4">{move || title.get()}</h2>

            <div class="flex gap-2 mb-6">
                {ReaderMode::ALL
                    .into_iter()
                    .map(|m| view! { <ModeButton mode=m current=mode /> })
                    .collect_view()}
            </div>

            <div class=move || if mode.get() == ReaderMode::Webtoon {
                "comic-reader overflow-y-scroll max-h-[70vh] border border-gray-300 dark:border-gray-600 p-2 rounded mb-6"
            } else {
                "comic-reader mb-6"
            }>
                // Switching modes disposes the strip, which releases its observer
                {move || match mode.get() {
                    ReaderMode::Webtoon => view! { <WebtoonStrip /> }.into_view(),
                    ReaderMode::Manga => view! { <MangaGrid /> }.into_view(),
                }}
            </div>

            <div class="flex justify-between">
                <button
                    on:click=move |_| site.dispatch(SiteEvent::PreviousChapter)
                    disabled=move || site.state.with(|s| s.previous_disabled())
                    class="px-6 py-2 bg-gray-300 dark:bg-gray-700 rounded hover:bg-gray-400
                           dark:hover:bg-gray-600 disabled:opacity-50"
                >
                    "Previous Chapter"
                </button>
                <button
                    on:click=move |_| site.dispatch(SiteEvent::NextChapter)
                    class="px-6 py-2 bg-purple-600 text-white rounded hover:bg-purple-700"
                >
                    "Next Chapter"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ModeButton(mode: ReaderMode, current: Memo<ReaderMode>) -> impl IntoView {
    let site = use_site();

    view! {
        <button
            on:click=move |_| site.dispatch(SiteEvent::SetReaderMode { mode })
            class=move || if current.get() == mode {
                "px-4 py-2 rounded-md bg-purple-600 text-white"
            } else {
                "px-4 py-2 rounded-md bg-gray-300 dark:bg-gray-700"
            }
        >
            {mode.label()}
        </button>
    }
}

/// An attached intersection observer; disconnects when dropped.
struct SentinelWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

#[cfg(test)]
thread_local! {
    static DISCONNECTS: std::cell::Cell<usize> = std::cell::Cell::new(0);
}

impl Drop for SentinelWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
        #[cfg(test)]
        DISCONNECTS.with(|n| n.set(n.get() + 1));
    }
}

/// Continuous strip: loaded pages followed by the sentinel that loads more
#[component]
fn WebtoonStrip() -> impl IntoView {
    let site = use_site();
    let pages = create_memo(move |_| site.state.with(|s| s.pages_loaded));
    let sentinel = create_node_ref::<html::Div>();
    let watch: Rc<RefCell<Option<SentinelWatch>>> = Rc::new(RefCell::new(None));

    let slot = Rc::clone(&watch);
    sentinel.on_load(move |el| {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        site.dispatch(SiteEvent::SentinelIntersected {
                            ratio: entry.intersection_ratio(),
                        });
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(site.sentinel_threshold()));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        {
            Ok(observer) => {
                observer.observe(&el);
                *slot.borrow_mut() = Some(SentinelWatch {
                    observer,
                    _callback: callback,
                });
            }
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Failed to create sentinel observer: {:?}", e).into(),
                );
            }
        }
    });

    on_cleanup(move || {
        watch.borrow_mut().take();
    });

    view! {
        <For
            each=move || 1..=pages.get()
            key=|n| *n
            children=move |n| view! {
                <img
                    src=webtoon_page_image(n)
                    alt=format!("Webtoon Page {}", n)
                    class="w-full mb-4"
                />
            }
        />
        <div node_ref=sentinel class="reader-sentinel h-4"></div>
    }
}

/// Fixed grid, the same pages whatever the chapter
#[component]
fn MangaGrid() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
            {(1..=MANGA_PAGE_COUNT)
                .map(|n| view! {
                    <img
                        src=manga_page_image(n)
                        alt=format!("Manga Page {}", n)
                        class="w-full rounded shadow-md"
                    />
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{mount_with_site, settle};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn disconnects() -> usize {
        DISCONNECTS.with(|n| n.get())
    }

    fn has_sentinel(parent: &web_sys::HtmlElement) -> bool {
        matches!(parent.query_selector(".reader-sentinel"), Ok(Some(_)))
    }

    #[wasm_bindgen_test]
    async fn test_manga_mode_drops_sentinel_observer() {
        let (site, parent) = mount_with_site(|| view! { <Reader /> });
        settle().await;
        assert!(has_sentinel(&parent));
        let before = disconnects();

        site.dispatch(SiteEvent::SetReaderMode {
            mode: ReaderMode::Manga,
        });
        settle().await;

        assert!(!has_sentinel(&parent));
        assert_eq!(disconnects(), before + 1);
        let images = parent
            .query_selector_all("img")
            .map(|nodes| nodes.length())
            .unwrap_or(0);
        assert_eq!(images, MANGA_PAGE_COUNT);
    }

    #[wasm_bindgen_test]
    async fn test_unmounting_reader_drops_sentinel_observer() {
        let alive = create_rw_signal(true);
        let (_site, parent) =
            mount_with_site(move || move || alive.get().then(|| view! { <Reader /> }));
        settle().await;
        assert!(has_sentinel(&parent));
        let before = disconnects();

        alive.set(false);
        settle().await;

        assert!(!has_sentinel(&parent));
        assert_eq!(disconnects(), before + 1);
    }
}
