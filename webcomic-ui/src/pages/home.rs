//! Home Page
//!
//! Hero banner above the chapter list and reader.

use leptos::*;

use webcomic::catalog::hero_banner_image;

use crate::components::{ChapterList, Reader};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Hero />
        <ComicSection />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section
            class="relative h-64 md:h-80 bg-cover bg-center"
            style=format!("background-image: url('{}')", hero_banner_image())
        >
            <div class="absolute inset-0 bg-black opacity-40"></div>
            <div class="relative container mx-auto px-4 flex items-center justify-center h-full">
                <h2 class="text-4xl md:text-5xl font-extrabold text-white drop-shadow-lg">
                    "Welcome to MyWebComic"
                </h2>
            </div>
        </section>
    }
}

/// Chapter list beside the reader; shared by the home and read views
#[component]
pub fn ComicSection() -> impl IntoView {
    view! {
        <section id="comics" class="py-12">
            <div class="container mx-auto px-4 grid grid-cols-1 lg:grid-cols-4 gap-8">
                <ChapterList />
                <Reader />
            </div>
        </section>
    }
}
