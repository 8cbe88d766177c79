//! Todo-shell Core Library
//!
//! Platform-independent orchestration for the todo desktop shell: tray state,
//! the dynamic application menu, window lifecycle, the update workflow and
//! the renderer IPC gateway. Native integrations are supplied through
//! [`ShellHost`].
//!
//! # Example
//!
//! ```no_run
//! use todo_shell_core::{
//!     IpcEnvelope, Platform, Shell, ShellHost, ShellPaths, ShellResult, UpdateController,
//!     WindowGeometry,
//! };
//!
//! use std::path::Path;
//!
//! fn run<H: ShellHost>(host: H) -> ShellResult<()> {
//!     let paths = ShellPaths::under(Path::new("/tmp/todo"), "/tmp/todo/scratch");
//!     let update = UpdateController::new("Todo", "1.0.0");
//!     let mut shell = Shell::new(host, Platform::current(), paths, WindowGeometry::default(), update);
//!
//!     shell.start()?;
//!
//!     let envelope = IpcEnvelope::parse(r#"{"channel":"message-unread","payload":{"counter":3}}"#)?;
//!     shell.handle_ipc(envelope);
//!     Ok(())
//! }
//! ```

mod error;
mod host;
mod icon;
mod ipc;
mod menu;
mod platform;
mod settings;
mod shell;
mod shell_paths;
mod tray;
mod update;
mod window;

pub use {
    error::{Result as ShellResult, ShellError},
    host::ShellHost,
    icon::{AvatarSource, BROWSER_USER_AGENT, IconCache, IconImage, MENU_ICON_SIZE},
    ipc::{
        ImageDataset, IpcEnvelope, IpcReply, IpcRequest, OpenImagePayload, PasteResult,
        RendererNotification, decode_data_url, write_cached_image, write_download,
        write_paste_image,
    },
    menu::{
        ActionTable, AppMenuItem, IconBatch, MenuAction, MenuEntry, MenuModel, MenuSection,
        MenuSource, ResolvedSection, SectionRequest,
    },
    platform::Platform,
    settings::ShellSettings,
    shell::Shell,
    shell_paths::ShellPaths,
    tray::{
        ClickDetector, ClickOutcome, DOUBLE_CLICK_WINDOW, TrayBackend, TrayController, TrayGlyph,
        TrayMenuItem, TrayMenuModel,
    },
    update::{
        NoticeLevel, RESTART_PROMPT, ReleaseInfo, RestartChoice, UpdateController, UpdateDialogs,
        UpdateEvent, UpdateFeed, UpdateNotice, UpdateOutcome, UpdateState, is_newer_version,
    },
    window::{
        CloseOutcome, MainWindow, WindowGeometry, WindowLifecycle, WindowPhase,
        is_in_app_navigation, origin_of,
    },
};

#[cfg(test)]
mod tests;
