use serde::Serialize;

/// Shell → renderer notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "channel", content = "payload", rename_all = "kebab-case")]
pub enum RendererNotification {
    /// Open the settings page.
    ShowSettings,
    /// Display a user-visible error.
    ShowErrors {
        /// Error text.
        message: String,
    },
    /// The machine woke up from sleep.
    OsResume,
    /// Open the chat with a conversation.
    MessageChatto {
        /// Conversation id.
        id: String,
    },
    /// Show a user's profile.
    ShowUserinfo {
        /// User id.
        id: String,
    },
}
