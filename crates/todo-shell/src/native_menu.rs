//! Native application menu rendered from the [`MenuModel`].

use todo_shell_core::{AppMenuItem, MenuEntry, MenuModel, MenuSection, ShellError, ShellResult};

use std::panic::Location;

use error_location::ErrorLocation;
use tray_icon::menu::{
    AboutMetadata, Icon, IconMenuItem, Menu, MenuItem, PredefinedMenuItem, Submenu,
    accelerator::Accelerator,
};

/// Build the full menu bar: application, edit, then the non-empty dynamic sections.
#[track_caller]
pub(crate) fn build_app_menu(
    model: &MenuModel,
    app_name: &str,
    version: &str,
) -> ShellResult<Menu> {
    let menu = Menu::new();

    let app_submenu = app_submenu(app_name, version)?;
    let edit_submenu = edit_submenu()?;
    menu.append_items(&[&app_submenu, &edit_submenu])
        .map_err(|e| menu_error(format!("Failed to build menu bar: {}", e)))?;

    for section in [MenuSection::Conversations, MenuSection::Contacts] {
        let entries = model.entries(section);
        if entries.is_empty() {
            continue;
        }

        let submenu = section_submenu(section, entries)?;
        menu.append(&submenu)
            .map_err(|e| menu_error(format!("Failed to add {} menu: {}", section.title(), e)))?;
    }

    Ok(menu)
}

#[track_caller]
fn app_submenu(app_name: &str, version: &str) -> ShellResult<Submenu> {
    let submenu = Submenu::new(app_name, true);

    for item in MenuModel::app_section() {
        let appended = match item {
            AppMenuItem::About => {
                let metadata = AboutMetadata {
                    name: Some(app_name.to_string()),
                    version: Some(version.to_string()),
                    ..Default::default()
                };
                submenu.append(&PredefinedMenuItem::about(None, Some(metadata)))
            }
            AppMenuItem::Separator => submenu.append(&PredefinedMenuItem::separator()),
            AppMenuItem::Hide => submenu.append(&PredefinedMenuItem::hide(None)),
            AppMenuItem::HideOthers => submenu.append(&PredefinedMenuItem::hide_others(None)),
            AppMenuItem::ShowAll => submenu.append(&PredefinedMenuItem::show_all(None)),
            AppMenuItem::Action {
                label,
                action,
                accelerator,
            } => {
                let accelerator = accelerator.map(parse_accelerator).transpose()?;
                submenu.append(&MenuItem::with_id(action.menu_id(), label, true, accelerator))
            }
        };

        appended.map_err(|e| menu_error(format!("Failed to build application menu: {}", e)))?;
    }

    Ok(submenu)
}

/// Standard editing items; without them copy and paste shortcuts do not
/// reach the webview on macOS.
#[track_caller]
fn edit_submenu() -> ShellResult<Submenu> {
    Submenu::with_items(
        "Edit",
        true,
        &[
            &PredefinedMenuItem::undo(None),
            &PredefinedMenuItem::redo(None),
            &PredefinedMenuItem::separator(),
            &PredefinedMenuItem::cut(None),
            &PredefinedMenuItem::copy(None),
            &PredefinedMenuItem::paste(None),
            &PredefinedMenuItem::select_all(None),
        ],
    )
    .map_err(|e| menu_error(format!("Failed to build edit menu: {}", e)))
}

#[track_caller]
fn section_submenu(section: MenuSection, entries: &[MenuEntry]) -> ShellResult<Submenu> {
    let submenu = Submenu::new(section.title(), true);

    for entry in entries {
        let icon = Icon::from_rgba(
            entry.icon.rgba().to_vec(),
            entry.icon.width(),
            entry.icon.height(),
        )
        .map_err(|e| menu_error(format!("Invalid icon for {}: {}", entry.id, e)))?;

        let accelerator = entry
            .accelerator
            .as_deref()
            .map(parse_accelerator)
            .transpose()?;

        submenu
            .append(&IconMenuItem::with_id(
                entry.menu_id(),
                &entry.label,
                true,
                Some(icon),
                accelerator,
            ))
            .map_err(|e| menu_error(format!("Failed to add {}: {}", entry.label, e)))?;
    }

    Ok(submenu)
}

#[track_caller]
fn parse_accelerator(accelerator: &str) -> ShellResult<Accelerator> {
    accelerator
        .parse::<Accelerator>()
        .map_err(|e| menu_error(format!("Invalid accelerator {:?}: {}", accelerator, e)))
}

#[track_caller]
fn menu_error(reason: String) -> ShellError {
    ShellError::Menu {
        reason,
        location: ErrorLocation::from(Location::caller()),
    }
}
