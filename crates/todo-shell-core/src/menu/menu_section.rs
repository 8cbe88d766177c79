use crate::MenuAction;

use serde::Deserialize;

/// Menu sections regenerated from live renderer data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuSection {
    /// Recent conversations, ordered as the renderer lists them.
    Conversations,
    /// Contact list.
    Contacts,
}

impl MenuSection {
    /// Top-level menu title.
    pub fn title(self) -> &'static str {
        match self {
            MenuSection::Conversations => "Conversations",
            MenuSection::Contacts => "Contacts",
        }
    }

    /// Action dispatched when the entry for `id` is clicked.
    pub fn action_for(self, id: &str) -> MenuAction {
        match self {
            MenuSection::Conversations => MenuAction::OpenConversation(id.to_string()),
            MenuSection::Contacts => MenuAction::ShowUserInfo(id.to_string()),
        }
    }
}

/// A contact or conversation as sent by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuSource {
    /// User or conversation id.
    pub id: String,
    /// Display name, used as the menu label.
    pub name: String,
    /// Avatar URL on the chat backend.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// One section whose entries need icons before it can be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRequest {
    /// Section to replace.
    pub section: MenuSection,
    /// Items in display order.
    pub items: Vec<MenuSource>,
}

/// All section changes produced by a single `menu-update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconBatch {
    /// Cookie header used to authenticate avatar downloads.
    pub cookies: Option<String>,
    /// Changed sections.
    pub sections: Vec<SectionRequest>,
}
