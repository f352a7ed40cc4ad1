use std::rc::Rc;

use chat_core::{ConversationConfig, LayoutConfig, PanelCommand};
use dioxus::prelude::*;

use crate::api::HttpGateway;
use crate::components::chat::ChatView;
use crate::components::header::Header;
use crate::components::panel::SidePanel;
use crate::components::styles::SHELL_STYLES;
use crate::conversation::{start_new_conversation, use_chat_provider};
use crate::layout::use_layout_provider;

/// Page frame: header, side panel, content area. Owns the layout and chat
/// contexts for the whole subtree.
#[component]
pub fn ChatShell(title: String) -> Element {
    let layout = use_layout_provider(LayoutConfig::default());
    let chat = use_chat_provider(
        ConversationConfig::default(),
        Rc::new(HttpGateway::default()),
    );
    let mut store = layout.store;

    let on_command = use_callback(move |command: PanelCommand| {
        dioxus_logger::tracing::info!(command = command.name(), "Panel command");
        match command {
            PanelCommand::NewConversation => {
                start_new_conversation(&chat);
                if store.peek().is_mobile() {
                    store.write().close_panel();
                }
            }
            PanelCommand::OpenSettings
            | PanelCommand::OpenProfile
            | PanelCommand::SelectConversation(_) => {}
        }
    });

    let shows_overlay = store.read().shows_overlay();

    rsx! {
        style { {SHELL_STYLES} }

        div {
            class: "layout-container",

            if shows_overlay {
                div {
                    class: "mobile-overlay",
                    onclick: move |_| store.write().close_panel(),
                }
            }

            SidePanel { on_command }

            // Offsets itself from --sidebar-visible-width in SHELL_STYLES
            div {
                class: "content-container",
                Header { title }
                div {
                    class: "main-content",
                    ChatView {}
                }
            }
        }
    }
}
