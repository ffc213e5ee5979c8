//! Merch Shop Page
//!
//! Product grid. There is no cart yet, so "Add to Cart" only logs.

use leptos::*;

use webcomic::catalog::MerchItem;

use crate::state::use_site;

#[component]
pub fn Shop() -> impl IntoView {
    let merch = use_site().catalog().merch;

    view! {
        <section class="py-12 bg-gray-200 dark:bg-gray-800">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold mb-6">"Merch Shop"</h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {merch
                        .into_iter()
                        .map(|item| view! { <ProductCard item=item /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProductCard(item: MerchItem) -> impl IntoView {
    let name = item.name.clone();
    let add_to_cart = move |_| {
        web_sys::console::log_1(&format!("Add to cart: {}", name).into());
    };

    view! {
        <div class="bg-white dark:bg-gray-700 rounded-lg shadow overflow-hidden transition-transform hover:scale-105">
            <img src=item.image alt=format!("Product {}", item.id) class="w-full h-64 object-cover" />
            <div class="p-4">
                <h3 class="font-semibold text-lg">{item.name}</h3>
                <p class="text-sm text-gray-600 dark:text-gray-300 mt-1">{item.blurb}</p>
                <button
                    on:click=add_to_cart
                    class="mt-3 w-full py-2 bg-purple-600 text-white rounded hover:bg-purple-700"
                >
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}
