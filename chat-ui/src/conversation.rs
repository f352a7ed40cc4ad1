//! Conversation context: transcript, session history and the send flow.

use std::rc::Rc;
use std::time::Duration;

use chat_core::{exchange, ConversationConfig, ConversationStore, InferenceGateway, Settlement};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::history::SessionHistory;

#[derive(Clone)]
pub struct ChatContext {
    pub conversation: Signal<ConversationStore>,
    pub history: Signal<SessionHistory>,
    pub config: ConversationConfig,
    pub gateway: Rc<dyn InferenceGateway>,
}

pub fn use_chat_provider(
    config: ConversationConfig,
    gateway: Rc<dyn InferenceGateway>,
) -> ChatContext {
    let conversation = use_signal(|| ConversationStore::new(&config));
    let history = use_signal(SessionHistory::default);
    use_context_provider(|| ChatContext {
        conversation,
        history,
        config,
        gateway,
    })
}

pub fn use_chat() -> ChatContext {
    use_context::<ChatContext>()
}

/// Append `text` and fetch the reply in the background. Blank text is
/// ignored.
pub fn send_message(chat: &ChatContext, text: &str) {
    let mut conversation = chat.conversation;
    let Some(ticket) = conversation.write().begin_send(text) else {
        return;
    };

    let gateway = chat.gateway.clone();
    let config = chat.config.clone();
    spawn(async move {
        let outcome = exchange(gateway.as_ref(), &ticket).await;
        if let Some(delay) = outcome.pacing(&config) {
            TimeoutFuture::new(millis(delay)).await;
        }
        if conversation.write().settle(ticket, outcome) == Settlement::Stale {
            dioxus_logger::tracing::info!("Reply arrived after the conversation was replaced");
        }
    });
}

/// Archive the current transcript and start an empty one.
pub fn start_new_conversation(chat: &ChatContext) {
    let mut conversation = chat.conversation;
    let mut history = chat.history;

    let today = chrono::Local::now().date_naive();
    let archived = history.write().archive(conversation.peek().messages(), today);
    conversation.write().reset();

    dioxus_logger::tracing::info!(archived = archived.is_some(), "Started new conversation");
}

fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
