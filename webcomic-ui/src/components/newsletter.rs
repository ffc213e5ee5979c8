//! Newsletter signup block shown under every view.

use leptos::*;

#[component]
pub fn Newsletter() -> impl IntoView {
    view! {
        <section class="py-12 bg-gray-200 dark:bg-gray-800">
            <div class="container mx-auto px-4 text-center">
                <h2 class="text-3xl font-bold mb-4">"Stay Updated"</h2>
                <p class="mb-6 max-w-xl mx-auto">
                    "Subscribe to our newsletter for updates on new chapters and merch drops!"
                </p>
                // No mailing list backend yet; keep the page from reloading.
                <form
                    class="flex flex-col sm:flex-row gap-2 justify-center"
                    on:submit=|ev: ev::SubmitEvent| ev.prevent_default()
                >
                    <input
                        type="email"
                        placeholder="Your email"
                        class="px-4 py-2 rounded outline-none w-full sm:w-64 text-black"
                    />
                    <button class="px-6 py-2 bg-purple-600 text-white rounded hover:bg-purple-700">
                        "Subscribe"
                    </button>
                </form>
            </div>
        </section>
    }
}
