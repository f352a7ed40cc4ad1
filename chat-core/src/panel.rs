//! Commands raised by the side panel.
//!
//! Fire-and-forget: the panel emits a command and moves on. There is no
//! reply and no error channel.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelCommand {
    NewConversation,
    OpenSettings,
    OpenProfile,
    SelectConversation(String),
}

impl PanelCommand {
    pub fn name(&self) -> &'static str {
        match self {
            PanelCommand::NewConversation => "new_conversation",
            PanelCommand::OpenSettings => "open_settings",
            PanelCommand::OpenProfile => "open_profile",
            PanelCommand::SelectConversation(_) => "select_conversation",
        }
    }
}
