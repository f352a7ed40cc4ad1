//! Layout context shared by the shell, panel, content area and input bar.
//!
//! The reserved panel width reaches consumers through `LayoutContext`
//! rather than through a shared ancestor's props. The same synchronous write
//! also updates `--sidebar-visible-width` on `<html>` for stylesheet rules.

pub mod effects;

use std::cell::RefCell;
use std::rc::Rc;

use chat_core::{css_px, LayoutBridge, LayoutConfig, LayoutSink, LayoutStore, PANEL_WIDTH_VAR};
use dioxus::prelude::*;

use crate::interop::set_root_style_property;

#[derive(Clone, Copy, PartialEq)]
pub struct LayoutContext {
    pub store: Signal<LayoutStore>,
    /// Last width published by the bridge.
    pub reserved_width: Signal<u32>,
}

/// Writes the bridge value into the context signal and the document.
struct DocumentSink {
    reserved_width: Signal<u32>,
}

impl LayoutSink for DocumentSink {
    fn publish(&mut self, reserved_width_px: u32) {
        set_root_style_property(PANEL_WIDTH_VAR, &css_px(reserved_width_px));
        self.reserved_width.set(reserved_width_px);
    }
}

/// Create the layout state, provide it to the subtree, and keep the bridge
/// and viewport tracking running.
pub fn use_layout_provider(config: LayoutConfig) -> LayoutContext {
    let store = use_signal(|| LayoutStore::new(config));
    let reserved_width = use_signal(|| 0u32);
    let bridge = use_hook(|| Rc::new(RefCell::new(LayoutBridge::new())));
    let context = use_context_provider(|| LayoutContext {
        store,
        reserved_width,
    });

    use_effect(move || {
        spawn(async move {
            effects::track_viewport(store).await;
        });
    });

    use_effect(move || {
        let snapshot = store.read().clone();
        let mut sink = DocumentSink { reserved_width };
        if bridge.borrow_mut().sync(&snapshot, &mut sink) {
            dioxus_logger::tracing::debug!(
                width = snapshot.reserved_width_px(),
                "Published panel width"
            );
        }
    });

    context
}

pub fn use_layout() -> LayoutContext {
    use_context::<LayoutContext>()
}
