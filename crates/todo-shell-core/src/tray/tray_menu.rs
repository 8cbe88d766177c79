use crate::MenuAction;

/// Tray context menu item, rendered natively by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrayMenuItem {
    /// Disabled informational line.
    Header(String),
    /// Separator line.
    Separator,
    /// Clickable item.
    Action {
        /// Item label.
        label: &'static str,
        /// Dispatched action.
        action: MenuAction,
    },
}

/// Tray context menu contents for a given unread count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayMenuModel {
    unread: u32,
}

impl TrayMenuModel {
    /// Menu reflecting `unread` messages.
    pub fn new(unread: u32) -> Self {
        Self { unread }
    }

    /// Unread count shown in the header.
    pub fn unread(&self) -> u32 {
        self.unread
    }

    /// Items in display order.
    pub fn items(&self) -> Vec<TrayMenuItem> {
        vec![
            TrayMenuItem::Header(format!("You have {} messages", self.unread)),
            TrayMenuItem::Separator,
            TrayMenuItem::Action {
                label: "Show window",
                action: MenuAction::ShowWindow,
            },
            TrayMenuItem::Action {
                label: "Preferences...",
                action: MenuAction::ShowPreferences,
            },
            TrayMenuItem::Action {
                label: "Check for updates",
                action: MenuAction::CheckForUpdates,
            },
            TrayMenuItem::Separator,
            TrayMenuItem::Action {
                label: "Quit",
                action: MenuAction::Quit,
            },
        ]
    }
}
