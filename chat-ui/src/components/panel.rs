use chat_core::{group_by_date, PanelCommand};
use dioxus::prelude::*;
use shared_types::ChatHistoryItem;

use crate::conversation::use_chat;
use crate::layout::{use_layout, LayoutContext};

#[component]
pub fn SidePanel(on_command: Callback<PanelCommand>) -> Element {
    let LayoutContext { mut store, .. } = use_layout();
    let chat = use_chat();

    let signals = store.read().signals();
    let today = chrono::Local::now().date_naive();
    let groups = group_by_date(&chat.history.read().items(today));

    let mut class = String::from("sidebar");
    if signals.is_mobile {
        class.push_str(" sidebar-floating");
    }
    if signals.sidebar_visible {
        class.push_str(" sidebar-open");
    }

    rsx! {
        aside {
            class: "{class}",

            div {
                class: "sidebar-top",
                button {
                    class: "new-chat-button",
                    onclick: move |_| on_command.call(PanelCommand::NewConversation),
                    span { "+" }
                    span { "New chat" }
                }
                if signals.is_mobile {
                    button {
                        class: "sidebar-close",
                        title: "Close",
                        onclick: move |_| store.write().close_panel(),
                        "✕"
                    }
                }
            }

            div {
                class: "chat-history-container",
                if groups.is_empty() {
                    div { class: "chat-history-empty", "No conversations yet" }
                }
                for group in groups.iter() {
                    div {
                        key: "{group.bucket}",
                        class: "chat-history-group",
                        div { class: "chat-date-header", {group.bucket.title()} }
                        for item in group.items.iter() {
                            HistoryEntry { key: "{item.id}", item: item.clone(), on_command }
                        }
                    }
                }
            }

            div {
                class: "sidebar-bottom",
                button {
                    class: "sidebar-link",
                    onclick: move |_| on_command.call(PanelCommand::OpenSettings),
                    "⚙ Settings"
                }
                button {
                    class: "sidebar-link",
                    onclick: move |_| on_command.call(PanelCommand::OpenProfile),
                    "👤 Profile"
                }
            }
        }
    }
}

#[component]
fn HistoryEntry(item: ChatHistoryItem, on_command: Callback<PanelCommand>) -> Element {
    let id = item.id.clone();

    rsx! {
        button {
            class: "chat-history-item",
            title: "{item.name}",
            onclick: move |_| on_command.call(PanelCommand::SelectConversation(id.clone())),
            "{item.name}"
        }
    }
}
