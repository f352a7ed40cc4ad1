//! Transcript state and the send protocol.
//!
//! A send runs in three steps so the store never has to be borrowed across
//! the network await:
//!
//! 1. [`ConversationStore::begin_send`] appends the user message and hands
//!    out a [`SendTicket`].
//! 2. [`exchange`] calls the gateway and turns any failure into
//!    [`Outcome::Fallback`].
//! 3. [`ConversationStore::settle`] appends the assistant message, unless the
//!    conversation was reset while the request was in flight.
//!
//! Overlapping sends are not rejected; each settles in completion order and
//! every applied reply clears the pending flag.

use std::time::Duration;

use shared_types::Message;

use crate::gateway::InferenceGateway;

pub const DEFAULT_FALLBACK_TEXT: &str =
    "Sorry, something went wrong while processing your request. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationConfig {
    /// Cosmetic pause between receiving a reply and showing it.
    pub reply_delay: Duration,
    /// Assistant text shown when the backend call fails.
    pub fallback_text: String,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(500),
            fallback_text: DEFAULT_FALLBACK_TEXT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Sending,
}

/// Proof that a user message was appended and a reply is owed.
///
/// Not `Clone`: [`ConversationStore::settle`] consumes the ticket, so one
/// user message gets at most one reply.
///
/// ```compile_fail
/// use chat_core::{ConversationStore, Outcome};
///
/// let mut store = ConversationStore::default();
/// let ticket = store.begin_send("hello").unwrap();
/// store.settle(ticket.clone(), Outcome::Fallback);
/// store.settle(ticket, Outcome::Fallback);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct SendTicket {
    epoch: u64,
    request_id: u64,
    text: String,
}

impl SendTicket {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn request_id(&self) -> u64 {
        self.request_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Fallback,
}

impl Outcome {
    /// Delay to wait before settling. Only replies are paced; the fallback
    /// shows immediately.
    pub fn pacing(&self, config: &ConversationConfig) -> Option<Duration> {
        match self {
            Outcome::Reply(_) if !config.reply_delay.is_zero() => Some(config.reply_delay),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    /// The conversation was reset after the ticket was issued.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationStore {
    messages: Vec<Message>,
    pending: bool,
    epoch: u64,
    next_request_id: u64,
    fallback_text: String,
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new(&ConversationConfig::default())
    }
}

impl ConversationStore {
    pub fn new(config: &ConversationConfig) -> Self {
        Self {
            messages: Vec::new(),
            pending: false,
            epoch: 0,
            next_request_id: 0,
            fallback_text: config.fallback_text.clone(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Set by `begin_send`, cleared by the next applied `settle` or `reset`.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn phase(&self) -> Phase {
        if self.is_pending() {
            Phase::Sending
        } else {
            Phase::Idle
        }
    }

    /// Append `text` as a user message. Blank input is ignored.
    pub fn begin_send(&mut self, text: &str) -> Option<SendTicket> {
        if text.trim().is_empty() {
            return None;
        }

        self.messages.push(Message::user(text));
        self.pending = true;
        let request_id = self.next_request_id;
        self.next_request_id += 1;

        tracing::debug!(request_id, "send started");

        Some(SendTicket {
            epoch: self.epoch,
            request_id,
            text: text.to_string(),
        })
    }

    pub fn settle(&mut self, ticket: SendTicket, outcome: Outcome) -> Settlement {
        if ticket.epoch != self.epoch {
            tracing::debug!(
                request_id = ticket.request_id,
                "dropping reply for a conversation that was reset"
            );
            return Settlement::Stale;
        }

        let reply = match outcome {
            Outcome::Reply(text) => Message::assistant(text),
            Outcome::Fallback => Message::assistant(self.fallback_text.clone()),
        };
        self.messages.push(reply);
        self.pending = false;

        tracing::debug!(request_id = ticket.request_id, "send settled");
        Settlement::Applied
    }

    /// Start a fresh conversation. Replies still in flight become stale.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.pending = false;
        self.epoch += 1;
    }
}

/// Run the backend call for `ticket`.
pub async fn exchange<G: InferenceGateway + ?Sized>(gateway: &G, ticket: &SendTicket) -> Outcome {
    match gateway.infer(ticket.text()).await {
        Ok(result) => Outcome::Reply(result),
        Err(e) => {
            tracing::error!(request_id = ticket.request_id, error = %e, "Error sending message");
            Outcome::Fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Author;

    #[test]
    fn blank_input_is_ignored() {
        let mut store = ConversationStore::default();
        for text in ["", " ", "\n\t  "] {
            assert!(store.begin_send(text).is_none());
        }
        assert!(store.is_empty());
        assert_eq!(store.phase(), Phase::Idle);
    }

    #[test]
    fn user_message_is_appended_before_reply() {
        let mut store = ConversationStore::default();
        let ticket = store.begin_send("  hello ").unwrap();

        assert_eq!(store.messages(), &[Message::user("  hello ")]);
        assert!(store.is_pending());
        assert_eq!(ticket.text(), "  hello ");

        assert_eq!(
            store.settle(ticket, Outcome::Reply("hi there".to_string())),
            Settlement::Applied
        );
        assert_eq!(store.messages()[1], Message::assistant("hi there"));
        assert_eq!(store.phase(), Phase::Idle);
    }

    #[test]
    fn fallback_uses_configured_text() {
        let config = ConversationConfig {
            fallback_text: "try later".to_string(),
            ..ConversationConfig::default()
        };
        let mut store = ConversationStore::new(&config);
        let ticket = store.begin_send("hello").unwrap();
        store.settle(ticket, Outcome::Fallback);

        let last = store.messages().last().unwrap();
        assert_eq!(last.sender, Author::Assistant);
        assert_eq!(last.text, "try later");
        assert!(!store.is_pending());
    }

    #[test]
    fn overlapping_sends_settle_in_completion_order() {
        let mut store = ConversationStore::default();
        let first = store.begin_send("one").unwrap();
        let second = store.begin_send("two").unwrap();
        assert_ne!(first.request_id(), second.request_id());

        store.settle(second, Outcome::Reply("re: two".to_string()));
        assert!(!store.is_pending());
        store.settle(first, Outcome::Reply("re: one".to_string()));
        assert!(!store.is_pending());

        let texts: Vec<_> = store.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["one", "two", "re: two", "re: one"]);
    }

    #[test]
    fn first_applied_reply_clears_pending_while_another_is_outstanding() {
        let mut store = ConversationStore::default();
        let first = store.begin_send("one").unwrap();
        let second = store.begin_send("two").unwrap();

        assert_eq!(
            store.settle(first, Outcome::Reply("re: one".to_string())),
            Settlement::Applied
        );
        assert!(!store.is_pending());
        assert_eq!(store.phase(), Phase::Idle);

        store.settle(second, Outcome::Fallback);
        assert!(!store.is_pending());
        assert_eq!(store.messages().len(), 4);
    }

    #[test]
    fn one_ticket_yields_one_reply() {
        let mut store = ConversationStore::default();
        let ticket = store.begin_send("hello").unwrap();
        store.settle(ticket, Outcome::Reply("hi".to_string()));

        let replies = store.messages().iter().filter(|m| !m.is_user()).count();
        assert_eq!(replies, 1);
        assert_eq!(store.messages().len(), 2);
    }

    #[test]
    fn reset_discards_replies_in_flight() {
        let mut store = ConversationStore::default();
        let ticket = store.begin_send("hello").unwrap();
        store.reset();

        assert!(store.is_empty());
        assert!(!store.is_pending());
        assert_eq!(
            store.settle(ticket, Outcome::Reply("late".to_string())),
            Settlement::Stale
        );
        assert!(store.is_empty());
    }

    #[test]
    fn only_replies_are_paced() {
        let config = ConversationConfig::default();
        assert_eq!(
            Outcome::Reply("x".to_string()).pacing(&config),
            Some(Duration::from_millis(500))
        );
        assert_eq!(Outcome::Fallback.pacing(&config), None);

        let instant = ConversationConfig {
            reply_delay: Duration::ZERO,
            ..ConversationConfig::default()
        };
        assert_eq!(Outcome::Reply("x".to_string()).pacing(&instant), None);
    }
}
