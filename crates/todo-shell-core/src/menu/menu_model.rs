//! Application menu model with label-diffed dynamic sections.
//!
//! The model never touches native menus. It decides which sections must be
//! re-rendered, tracks in-flight icon resolution, and owns the action table
//! that maps clicked menu ids back to [`MenuAction`]s.

use crate::{
    ActionTable, IconBatch, MenuAction, MenuEntry, MenuSection, MenuSource, ResolvedSection,
    SectionRequest,
};

use std::collections::HashMap;

use tracing::{debug, instrument};

/// Fixed items of the application section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMenuItem {
    /// Standard "About <app>" item.
    About,
    /// Separator line.
    Separator,
    /// Standard "Hide <app>".
    Hide,
    /// Standard "Hide Others".
    HideOthers,
    /// Standard "Show All".
    ShowAll,
    /// Shell-handled item.
    Action {
        /// Item label.
        label: &'static str,
        /// Dispatched action.
        action: MenuAction,
        /// Keyboard shortcut.
        accelerator: Option<&'static str>,
    },
}

/// Current application menu contents.
#[derive(Debug, Clone, Default)]
pub struct MenuModel {
    conversations: Vec<MenuEntry>,
    contacts: Vec<MenuEntry>,
    in_flight: HashMap<MenuSection, Vec<String>>,
    actions: ActionTable,
}

impl MenuModel {
    /// Empty model with only the fixed actions registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Items of the fixed application section.
    pub fn app_section() -> Vec<AppMenuItem> {
        vec![
            AppMenuItem::About,
            AppMenuItem::Action {
                label: "Preferences...",
                action: MenuAction::ShowPreferences,
                accelerator: Some("CmdOrCtrl+,"),
            },
            AppMenuItem::Separator,
            AppMenuItem::Hide,
            AppMenuItem::HideOthers,
            AppMenuItem::ShowAll,
            AppMenuItem::Action {
                label: "Check for updates",
                action: MenuAction::CheckForUpdates,
                accelerator: Some("CmdOrCtrl+U"),
            },
            AppMenuItem::Separator,
            AppMenuItem::Action {
                label: "Quit",
                action: MenuAction::Quit,
                accelerator: Some("CmdOrCtrl+Q"),
            },
        ]
    }

    /// Rendered entries of a dynamic section.
    pub fn entries(&self, section: MenuSection) -> &[MenuEntry] {
        match section {
            MenuSection::Conversations => &self.conversations,
            MenuSection::Contacts => &self.contacts,
        }
    }

    /// Labels currently rendered in `section`, in order.
    pub fn rendered_labels(&self, section: MenuSection) -> Vec<&str> {
        self.entries(section)
            .iter()
            .map(|entry| entry.label.as_str())
            .collect()
    }

    /// Whether a resolution for `section` is outstanding.
    pub fn is_in_flight(&self, section: MenuSection) -> bool {
        self.in_flight.contains_key(&section)
    }

    /// Action registered for a clicked menu id.
    pub fn action_for(&self, menu_id: &str) -> Option<&MenuAction> {
        self.actions.get(menu_id)
    }

    /// Work out which sections a `menu-update` changes.
    ///
    /// Returns `None` when nothing changed. Sections included in the returned
    /// batch are marked in flight so a repeated identical update is skipped
    /// even before the first one has resolved.
    #[instrument(skip_all, fields(contacts = contacts.len(), conversations = conversations.len()))]
    pub fn plan_update(
        &mut self,
        cookies: Option<String>,
        contacts: Vec<MenuSource>,
        conversations: Vec<MenuSource>,
    ) -> Option<IconBatch> {
        let sections: Vec<SectionRequest> = [
            self.plan_section(MenuSection::Conversations, conversations),
            self.plan_section(MenuSection::Contacts, contacts),
        ]
        .into_iter()
        .flatten()
        .collect();

        if sections.is_empty() {
            debug!("Menu labels unchanged, skipping rebuild");
            return None;
        }

        Some(IconBatch { cookies, sections })
    }

    /// Install resolved sections.
    ///
    /// A section is only replaced if it is still the latest request for that
    /// section. Returns `true` when at least one section changed and the
    /// native menu must be rebuilt.
    #[instrument(skip_all, fields(sections = resolved.len()))]
    pub fn apply_resolved(&mut self, resolved: Vec<ResolvedSection>) -> bool {
        let mut changed = false;

        for ResolvedSection { section, entries } in resolved {
            let labels: Vec<String> = entries.iter().map(|e| e.label.clone()).collect();

            if self.in_flight.get(&section) != Some(&labels) {
                debug!(section = section.title(), "Superseded menu resolution dropped");
                continue;
            }

            self.in_flight.remove(&section);
            match section {
                MenuSection::Conversations => self.conversations = entries,
                MenuSection::Contacts => self.contacts = entries,
            }
            changed = true;
        }

        if changed {
            self.rebuild_actions();
        }

        changed
    }

    /// Forget outstanding resolutions for `sections`.
    ///
    /// Used when a planned batch never reached the resolver, so the next
    /// identical update is planned again.
    pub fn cancel_in_flight(&mut self, sections: &[MenuSection]) {
        for section in sections {
            if self.in_flight.remove(section).is_some() {
                debug!(section = section.title(), "Menu resolution cancelled");
            }
        }
    }

    fn plan_section(
        &mut self,
        section: MenuSection,
        items: Vec<MenuSource>,
    ) -> Option<SectionRequest> {
        // An empty list means the renderer has not loaded this data yet.
        if items.is_empty() {
            return None;
        }

        let labels: Vec<String> = items.iter().map(|item| item.name.clone()).collect();

        let unchanged = match self.in_flight.get(&section) {
            Some(pending) => *pending == labels,
            None => self.rendered_labels(section) == labels,
        };

        if unchanged {
            return None;
        }

        self.in_flight.insert(section, labels);

        Some(SectionRequest { section, items })
    }

    fn rebuild_actions(&mut self) {
        let mut actions = ActionTable::new();

        for entry in self.conversations.iter().chain(self.contacts.iter()) {
            actions.register(entry.action.clone());
        }

        self.actions = actions;
    }
}
