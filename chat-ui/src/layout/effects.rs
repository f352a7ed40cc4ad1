use chat_core::LayoutStore;
use dioxus::prelude::{ReadableExt, Signal, WritableExt};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::interop::viewport_width;

pub async fn track_viewport(layout: Signal<LayoutStore>) {
    apply_viewport(layout);

    let Some(window) = web_sys::window() else {
        return;
    };

    let callback = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        apply_viewport(layout);
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
    let _ = window
        .add_event_listener_with_callback("orientationchange", callback.as_ref().unchecked_ref());

    // Keep listener alive for app lifetime.
    callback.forget();
}

/// Only writes the signal when the device class flips, so resize storms
/// don't re-render the page.
fn apply_viewport(mut layout: Signal<LayoutStore>) {
    let Some(width) = viewport_width() else {
        return;
    };

    let mut next = layout.peek().clone();
    if next.set_viewport_width(width) {
        layout.set(next);
    }
}

pub fn toggle_login(mut layout: Signal<LayoutStore>) {
    let logged_in = layout.peek().is_logged_in();
    layout.write().set_logged_in(!logged_in);
    dioxus_logger::tracing::info!(logged_in = !logged_in, "Login state changed");
}
