//! Survey Modal
//!
//! "Where did you hear about us?" popup. Any answer, the submit button or a
//! click on the backdrop closes it.

use leptos::*;

use webcomic::catalog::SURVEY_SOURCES;
use webcomic::site::SiteEvent;

use crate::state::use_site;

#[component]
pub fn SurveyModal() -> impl IntoView {
    let site = use_site();
    let visible = create_memo(move |_| site.state.with(|s| s.survey.is_visible()));

    move || {
        visible.get().then(|| {
            view! {
                <div
                    class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50"
                    on:click=move |_| site.dispatch(SiteEvent::CloseSurvey)
                >
                    <div
                        class="bg-white dark:bg-gray-800 p-6 rounded-lg shadow-lg w-80"
                        on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                    >
                        <h3 class="text-lg font-bold mb-4">"Where did you hear about us?"</h3>
                        <div class="space-y-2">
                            {SURVEY_SOURCES
                                .into_iter()
                                .map(|source| view! {
                                    <button
                                        on:click=move |_| site.dispatch(SiteEvent::SurveyAnswered {
                                            source: source.to_string(),
                                        })
                                        class="w-full text-left px-4 py-2 bg-gray-200 dark:bg-gray-700 rounded
                                               hover:bg-gray-300 dark:hover:bg-gray-600"
                                    >
                                        {source}
                                    </button>
                                })
                                .collect_view()}
                        </div>
                        <button
                            on:click=move |_| site.dispatch(SiteEvent::CloseSurvey)
                            class="mt-4 w-full py-2 bg-purple-600 text-white rounded hover:bg-purple-700"
                        >
                            "Submit"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
