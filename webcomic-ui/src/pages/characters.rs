//! Characters Page

use leptos::*;

use webcomic::catalog::Character;

use crate::state::use_site;

#[component]
pub fn Characters() -> impl IntoView {
    let characters = use_site().catalog().characters;

    view! {
        <section class="py-12">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold mb-6">"Characters"</h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8">
                    {characters
                        .into_iter()
                        .map(|character| view! { <CharacterCard character=character /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CharacterCard(character: Character) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow overflow-hidden transition-transform hover:scale-105">
            <img src=character.image alt=character.name.clone() class="w-full h-64 object-cover" />
            <div class="p-4">
                <h3 class="font-semibold text-lg">{character.name}</h3>
                <p class="text-sm text-gray-600 dark:text-gray-300 mt-1">{character.bio}</p>
            </div>
        </div>
    }
}
