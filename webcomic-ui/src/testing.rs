//! Helpers for browser tests: mount a view under a fresh site context and
//! let pending DOM work run.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen::JsCast;

use crate::state::{provide_site_context, SiteContext};

/// Mount `f` into a new `<div>` in the body with a site context provided
pub fn mount_with_site<F, N>(f: F) -> (SiteContext, web_sys::HtmlElement)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let doc = document();
    let parent: web_sys::HtmlElement = doc
        .create_element("div")
        .expect("create test container")
        .unchecked_into();
    doc.body()
        .expect("document has a body")
        .append_child(&parent)
        .expect("attach test container");

    let slot = Rc::new(Cell::new(None));
    let out = Rc::clone(&slot);
    mount_to(parent.clone(), move || {
        out.set(Some(provide_site_context()));
        f()
    });

    (slot.get().expect("site context provided"), parent)
}

/// Yield to the browser so observers, listeners and node refs fire
pub async fn settle() {
    TimeoutFuture::new(50).await;
}

/// Change `location.hash` and wait for `hashchange` to be delivered
pub async fn set_fragment(fragment: &str) {
    window()
        .location()
        .set_hash(fragment)
        .expect("set location hash");
    settle().await;
}
