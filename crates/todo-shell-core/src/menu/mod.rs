mod menu_action;
mod menu_entry;
mod menu_model;
mod menu_section;

pub use {
    menu_action::{ActionTable, MenuAction},
    menu_entry::{MenuEntry, ResolvedSection},
    menu_model::{AppMenuItem, MenuModel},
    menu_section::{IconBatch, MenuSection, MenuSource, SectionRequest},
};
