use crate::{IconImage, MenuAction, MenuSection};

/// A rendered dynamic menu entry. Data only; clicks go through the action table.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    /// Id of the user or conversation.
    pub id: String,
    /// Label shown in the menu.
    pub label: String,
    /// Resolved avatar.
    pub icon: IconImage,
    /// Keyboard shortcut, if any.
    pub accelerator: Option<String>,
    /// Action dispatched on click.
    pub action: MenuAction,
}

/// Entries for one section after icon resolution, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSection {
    /// Section to replace.
    pub section: MenuSection,
    /// Entries in display order.
    pub entries: Vec<MenuEntry>,
}

impl MenuEntry {
    /// Menu id under which this entry is registered in the action table.
    pub fn menu_id(&self) -> String {
        self.action.menu_id()
    }

    /// Build the entry for `section` at position `index`.
    ///
    /// The first ten conversations get `CmdOrCtrl+<index>` shortcuts.
    pub fn new(
        section: MenuSection,
        index: usize,
        id: String,
        label: String,
        icon: IconImage,
    ) -> Self {
        let accelerator = match section {
            MenuSection::Conversations if index < 10 => Some(format!("CmdOrCtrl+{index}")),
            _ => None,
        };

        Self {
            action: section.action_for(&id),
            id,
            label,
            icon,
            accelerator,
        }
    }
}
