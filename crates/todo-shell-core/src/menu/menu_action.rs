use std::collections::HashMap;

/// Something the user can trigger from the tray or application menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Show and focus the main window.
    ShowWindow,
    /// Show the window and open the renderer's settings page.
    ShowPreferences,
    /// Start an update check.
    CheckForUpdates,
    /// Terminate the application.
    Quit,
    /// Open the chat with the given conversation id.
    OpenConversation(String),
    /// Show the profile of the given user id.
    ShowUserInfo(String),
}

impl MenuAction {
    /// Stable native menu id for this action.
    pub fn menu_id(&self) -> String {
        match self {
            MenuAction::ShowWindow => "shell.show-window".to_string(),
            MenuAction::ShowPreferences => "shell.preferences".to_string(),
            MenuAction::CheckForUpdates => "shell.check-for-updates".to_string(),
            MenuAction::Quit => "shell.quit".to_string(),
            MenuAction::OpenConversation(id) => format!("conversation:{id}"),
            MenuAction::ShowUserInfo(id) => format!("contact:{id}"),
        }
    }

    fn fixed() -> [MenuAction; 4] {
        [
            MenuAction::ShowWindow,
            MenuAction::ShowPreferences,
            MenuAction::CheckForUpdates,
            MenuAction::Quit,
        ]
    }
}

/// Menu id → action lookup shared by the tray and application menus.
#[derive(Debug, Clone)]
pub struct ActionTable {
    actions: HashMap<String, MenuAction>,
}

impl ActionTable {
    /// Table holding only the fixed shell actions.
    pub fn new() -> Self {
        let actions = MenuAction::fixed()
            .into_iter()
            .map(|action| (action.menu_id(), action))
            .collect();

        Self { actions }
    }

    /// Register `action` under its menu id.
    pub fn register(&mut self, action: MenuAction) {
        self.actions.insert(action.menu_id(), action);
    }

    /// Look up the action for a clicked menu id.
    pub fn get(&self, menu_id: &str) -> Option<&MenuAction> {
        self.actions.get(menu_id)
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the table is empty. Never true in practice.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionTable {
    fn default() -> Self {
        Self::new()
    }
}
