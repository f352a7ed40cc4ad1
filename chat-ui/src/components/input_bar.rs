use chat_core::{classify_key, InputBuffer, InputConfig, KeyIntent};
use dioxus::prelude::*;

use crate::conversation::{send_message, use_chat};
use crate::interop::{measure_content_height, set_element_height};
use crate::layout::{use_layout, LayoutContext};

const TEXTAREA_ID: &str = "chat-input-textarea";

/// Fixed input bar. Enter submits, Shift+Enter adds a line, and the
/// textarea grows with its content up to the configured cap.
#[component]
pub fn ChatInput() -> Element {
    let chat = use_chat();
    let LayoutContext { reserved_width, .. } = use_layout();
    let config = InputConfig::default();
    let mut input = use_signal(|| InputBuffer::new(config));
    let text = use_memo(move || input.read().text().to_string());
    let pending = chat.conversation.read().is_pending();

    // Re-measure whenever the text changes. Height writes don't touch the
    // memo, so this does not loop.
    use_effect(move || {
        let _ = text.read();
        let Some(measured) = measure_content_height(TEXTAREA_ID, config.min_height_px) else {
            return;
        };
        let height = input.write().autosize(measured);
        set_element_height(TEXTAREA_ID, height);
    });

    let submit = use_callback(move |_: ()| {
        if chat.conversation.peek().is_pending() {
            return;
        }
        let Some(message) = input.write().submit() else {
            return;
        };
        send_message(&chat, &message);
    });

    let onkeydown = use_callback(move |e: KeyboardEvent| {
        if classify_key(e.key() == Key::Enter, e.modifiers().shift()) == KeyIntent::Submit {
            e.prevent_default();
            submit.call(());
        }
    });

    let oninput = use_callback(move |e: FormEvent| {
        input.write().set_text(e.value());
    });

    let current_text = text();
    let can_send = input.read().can_submit() && !pending;
    let offset = reserved_width();

    rsx! {
        div {
            class: "chat-input-area",
            style: "transform: translateX({offset}px); width: calc(100% - {offset}px);",

            div {
                class: "input-wrapper",
                textarea {
                    id: TEXTAREA_ID,
                    class: "chat-textarea",
                    placeholder: "Type a message...",
                    value: "{current_text}",
                    rows: "1",
                    oninput,
                    onkeydown,
                }
                button {
                    class: "send-button",
                    disabled: !can_send,
                    onclick: move |_| submit.call(()),
                    if pending {
                        span { class: "spinner", "◐" }
                    } else {
                        span { "➤" }
                    }
                }
            }

            div { class: "input-hint", "Enter to send, Shift+Enter for a new line" }
        }
    }
}
