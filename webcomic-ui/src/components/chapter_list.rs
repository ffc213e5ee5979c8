//! Chapter List Component
//!
//! Search box plus the filtered chapter list. Picking a chapter opens it in
//! the reader.

use leptos::*;

use webcomic::catalog::Chapter;
use webcomic::site::SiteEvent;

use crate::state::use_site;

#[component]
pub fn ChapterList() -> impl IntoView {
    let site = use_site();
    let catalog = site.catalog();

    let search = create_memo(move |_| site.state.with(|s| s.search.clone()));
    let filtered = create_memo(move |_| {
        let query = search.get();
        catalog
            .filter_chapters(&query)
            .into_iter()
            .cloned()
            .collect::<Vec<Chapter>>()
    });

    view! {
        <div class="lg:col-span-1 bg-white dark:bg-gray-800 rounded-lg shadow p-4">
            <h3 class="font-bold text-lg mb-4">"Chapters"</h3>
            <input
                type="text"
                placeholder="Search chapters..."
                prop:value=move || search.get()
                on:input=move |ev| site.dispatch(SiteEvent::Search {
                    query: event_target_value(&ev),
                })
                class="w-full px-3 py-2 rounded mb-4 dark:bg-gray-700 dark:text-white"
            />
            <ul class="space-y-2 max-h-96 overflow-y-auto">
                {move || {
                    let chapters = filtered.get();
                    if chapters.is_empty() {
                        view! {
                            <li class="text-gray-500 italic">"No chapters found."</li>
                        }.into_view()
                    } else {
                        chapters
                            .into_iter()
                            .map(|chapter| view! { <ChapterItem chapter=chapter /> })
                            .collect_view()
                    }
                }}
            </ul>
        </div>
    }
}

#[component]
fn ChapterItem(chapter: Chapter) -> impl IntoView {
    let site = use_site();
    let id = chapter.id;
    let selected = move || site.state.with(|s| s.selected_chapter == id);

    view! {
        <li>
            <button
                on:click=move |_| site.dispatch(SiteEvent::SelectChapter { id })
                class=move || if selected() {
                    "block w-full text-left px-3 py-2 rounded bg-purple-200 dark:bg-purple-800"
                } else {
                    "block w-full text-left px-3 py-2 rounded hover:bg-purple-100 dark:hover:bg-purple-900"
                }
            >
                {chapter.title}
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{mount_with_site, settle};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn chapter_buttons(parent: &web_sys::HtmlElement) -> u32 {
        parent
            .query_selector_all("li button")
            .map(|nodes| nodes.length())
            .unwrap_or(0)
    }

    #[wasm_bindgen_test]
    async fn test_unmatched_search_shows_placeholder() {
        let (site, parent) = mount_with_site(|| view! { <ChapterList /> });
        settle().await;
        assert_eq!(chapter_buttons(&parent), 5);

        site.dispatch(SiteEvent::Search {
            query: "zzz".to_string(),
        });
        settle().await;

        assert_eq!(chapter_buttons(&parent), 0);
        let text = parent.text_content().unwrap_or_default();
        assert!(text.contains("No chapters found."));
    }

    #[wasm_bindgen_test]
    async fn test_search_is_case_insensitive_in_the_list() {
        let (site, parent) = mount_with_site(|| view! { <ChapterList /> });

        site.dispatch(SiteEvent::Search {
            query: "HERO".to_string(),
        });
        settle().await;

        assert_eq!(chapter_buttons(&parent), 1);
        assert!(!parent
            .text_content()
            .unwrap_or_default()
            .contains("No chapters found."));
    }
}
