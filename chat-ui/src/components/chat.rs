use chat_core::ConversationStore;
use dioxus::prelude::*;
use shared_types::Message;

use crate::components::input_bar::ChatInput;
use crate::conversation::{send_message, use_chat};
use crate::interop::scroll_into_view;

const MESSAGES_END_ID: &str = "chat-messages-end";

const SUGGESTIONS: [&str; 4] = [
    "How do I get started with web development?",
    "Explain the basics of machine learning in Python",
    "Suggest a name for my side project",
    "Plan a three-day weekend trip",
];

/// What the bottom of the transcript shows: message count and whether the
/// typing indicator is up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct TranscriptMarker {
    messages: usize,
    pending: bool,
}

fn transcript_marker(store: &ConversationStore) -> TranscriptMarker {
    TranscriptMarker {
        messages: store.messages().len(),
        pending: store.is_pending(),
    }
}

/// Transcript column with the input bar pinned underneath.
#[component]
pub fn ChatView() -> Element {
    let chat = use_chat();
    let conversation = chat.conversation;

    // Keep the newest message (or the typing indicator) in view. Only scroll
    // when one of them actually changed.
    let mut last_seen = use_signal(TranscriptMarker::default);
    use_effect(move || {
        let current = transcript_marker(&conversation.read());
        if *last_seen.peek() == current {
            return;
        }
        last_seen.set(current);
        scroll_into_view(MESSAGES_END_ID);
    });

    let (messages, pending) = {
        let state = conversation.read();
        (state.messages().to_vec(), state.is_pending())
    };

    rsx! {
        div {
            class: "chat-column",

            div {
                class: "messages-scroll-area",
                if messages.is_empty() {
                    EmptyState {}
                } else {
                    div {
                        class: "messages-list",
                        for (index, message) in messages.into_iter().enumerate() {
                            MessageRow { key: "{index}", message }
                        }
                        if pending {
                            LoadingIndicator {}
                        }
                        div { id: MESSAGES_END_ID }
                    }
                }
            }

            ChatInput {}
        }
    }
}

#[component]
fn EmptyState() -> Element {
    let chat = use_chat();
    let on_suggestion = use_callback(move |text: &'static str| send_message(&chat, text));

    rsx! {
        div {
            class: "empty-state",
            div { class: "empty-icon", "💬" }
            p { "How can I help you today?" }
            span { class: "empty-blurb", "Ask a question or pick a prompt to get started." }
            div {
                class: "suggestions",
                for suggestion in SUGGESTIONS {
                    button {
                        key: "{suggestion}",
                        class: "suggestion",
                        onclick: move |_| on_suggestion.call(suggestion),
                        "{suggestion}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn MessageRow(message: Message) -> Element {
    let is_user = message.is_user();
    let name = message.sender.display_name();
    let initial = message.sender.initial();

    rsx! {
        div {
            class: if is_user { "message-row user-row" } else { "message-row assistant-row" },

            div {
                class: if is_user { "avatar user-avatar" } else { "avatar assistant-avatar" },
                "{initial}"
            }

            div {
                class: "message-content",
                span { class: "sender-name", "{name}" }
                div {
                    class: if is_user { "message-bubble user-bubble" } else { "message-bubble assistant-bubble" },
                    "{message.text}"
                }
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: "message-row assistant-row",
            div { class: "avatar assistant-avatar", "AI" }
            div {
                class: "message-content",
                div {
                    class: "typing-indicator",
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}
