use crate::power_monitor::PowerEvent;

use todo_shell_core::{ResolvedSection, UpdateEvent};

use tray_icon::{TrayIconEvent, menu::MenuEvent};

/// Events delivered to the main UI thread through the tao event loop proxy.
///
/// The main thread owns the window, webview, tray icon and menus (all
/// `!Send`), so every source of work outside the loop funnels through here.
#[derive(Debug)]
pub enum ShellEvent {
    /// Raw IPC message body posted by the renderer.
    Ipc(String),
    /// The renderer finished loading a page.
    PageLoaded,
    /// The renderer tried to leave the app origin or open a new window.
    ExternalNavigation(String),
    /// Native tray icon event (clicks, hover).
    TrayIcon(TrayIconEvent),
    /// A tray or application menu item was clicked.
    Menu(MenuEvent),
    /// Deferred tray creation tick.
    TrayTick,
    /// Avatar resolution for a menu batch finished.
    IconsResolved(Vec<ResolvedSection>),
    /// Progress of the update workflow.
    Update(UpdateEvent),
    /// The machine is going to sleep or woke up.
    Power(PowerEvent),
    /// Leave the event loop.
    Exit,
}
