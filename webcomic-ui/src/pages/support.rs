//! Support Page

use leptos::*;

use crate::state::use_site;

#[component]
pub fn Support() -> impl IntoView {
    let links = use_site().catalog().support_links;

    view! {
        <section class="py-12">
            <div class="container mx-auto px-4 text-center">
                <h2 class="text-3xl font-bold mb-6">"Support Me"</h2>
                <p class="max-w-xl mx-auto mb-6">
                    "If you enjoy my work, consider supporting me through Ko-fi or Patreon."
                </p>
                <div class="flex justify-center gap-4">
                    {links
                        .into_iter()
                        .map(|link| {
                            let color = if link.label == "Ko-fi" {
                                "bg-green-500 hover:bg-green-600"
                            } else {
                                "bg-orange-600 hover:bg-orange-700"
                            };
                            view! {
                                <button class=format!(
                                    "px-6 py-3 {} text-white rounded flex items-center gap-2",
                                    color
                                )>
                                    <span>{format!("{} {}", link.icon, link.label)}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
