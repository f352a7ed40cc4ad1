use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

/// Get the browser viewport width
pub fn viewport_width() -> Option<u32> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    if width > 0.0 {
        return Some(width.round() as u32);
    }

    let root = window.document()?.document_element()?;
    Some(root.client_width().max(0) as u32)
}

/// Set a custom property on `<html>`.
pub fn set_root_style_property(name: &str, value: &str) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    if let Err(e) = root.style().set_property(name, value) {
        log::error!("Failed to set {name}: {e:?}");
    }
}

fn html_element(id: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Collapse an element to `min_height_px` and report how tall its content
/// wants to be.
pub fn measure_content_height(id: &str, min_height_px: u32) -> Option<u32> {
    let element = html_element(id)?;
    element
        .style()
        .set_property("height", &format!("{min_height_px}px"))
        .ok()?;
    Some(element.scroll_height().max(0) as u32)
}

pub fn set_element_height(id: &str, height_px: u32) {
    let Some(element) = html_element(id) else {
        return;
    };

    if let Err(e) = element
        .style()
        .set_property("height", &format!("{height_px}px"))
    {
        log::error!("Failed to set height on #{id}: {e:?}");
    }
}

pub fn scroll_into_view(id: &str) {
    if let Some(element) = html_element(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
