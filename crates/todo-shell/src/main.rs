//! Todo: desktop shell hosting the chat and todo web client.
//!
//! The main thread owns the tao event loop, the webview, the tray icon and
//! the menus. A tokio runtime on a second thread performs network work
//! (avatar downloads, update checks) and reports back through the event loop
//! proxy.

mod app;
mod app_command;
mod bridge;
mod clipboard_reader;
mod config;
mod error;
mod http_avatar_source;
mod http_update_feed;
mod logging;
mod native_dialogs;
mod native_host;
mod native_menu;
mod native_tray;
mod power_monitor;
mod shell_event;
mod webview_window;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    clipboard_reader::ClipboardReader,
    error::{AppError, Result as AppResult},
    http_avatar_source::HttpAvatarSource,
    http_update_feed::HttpUpdateFeed,
    native_host::NativeHost,
    shell_event::ShellEvent,
};

use crate::{
    config::{AppDirs, Config, WindowState},
    logging::init_logging,
    power_monitor::PowerEvent,
};

use todo_shell_core::{
    IconCache, IpcEnvelope, IpcReply, Platform, Shell, ShellPaths, UpdateController,
};

use std::{sync::Arc, time::Instant};

use tao::{
    event::{Event, StartCause, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use tray_icon::{MouseButton, MouseButtonState, TrayIconEvent, menu::MenuEvent};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application entry point.
fn main() {
    let dirs = AppDirs::discover();
    let logs_dir = dirs
        .as_ref()
        .ok()
        .and_then(|dirs| dirs.ensure().ok().map(|()| dirs.logs_dir()));

    // Flushes the log file on drop; must outlive the event loop.
    let log_guard = init_logging(logs_dir.as_deref());

    let dirs = match dirs {
        Ok(dirs) => dirs,
        Err(e) => {
            error!("Failed to locate application directories: {:?}", e);
            std::process::exit(1);
        }
    };

    let config = match Config::load(&dirs) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    // Removed from disk when dropped at exit.
    let scratch = match tempfile::Builder::new().prefix("todo-shell-").tempdir() {
        Ok(dir) => dir,
        Err(e) => {
            error!("Failed to create scratch directory: {:?}", e);
            std::process::exit(1);
        }
    };

    info!(version = VERSION, data_dir = ?dirs.data_dir, "Todo starting");

    let event_loop = EventLoopBuilder::<ShellEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    TrayIconEvent::set_event_handler(Some({
        let proxy = proxy.clone();
        move |event| {
            let _ = proxy.send_event(ShellEvent::TrayIcon(event));
        }
    }));
    MenuEvent::set_event_handler(Some({
        let proxy = proxy.clone();
        move |event| {
            let _ = proxy.send_event(ShellEvent::Menu(event));
        }
    }));

    let window_state = WindowState::load_or(
        &dirs.window_state_file(),
        config.window.default_geometry(),
    );
    let persisted_geometry = window_state.geometry;

    let (command_tx, command_rx) = mpsc::channel(32);

    // Consumed on StartCause::Init.
    let mut window_state = Some(window_state);
    let mut command_rx = Some(command_rx);
    let mut shell: Option<Shell<NativeHost>> = None;

    event_loop.run(move |event, target, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(StartCause::Init) => {
                let (Some(window_state), Some(command_rx)) =
                    (window_state.take(), command_rx.take())
                else {
                    return;
                };

                let host = match NativeHost::new(
                    target,
                    &config,
                    window_state,
                    proxy.clone(),
                    command_tx.clone(),
                ) {
                    Ok(host) => host,
                    Err(e) => {
                        error!("Failed to create main window: {:?}", e);
                        std::process::exit(1);
                    }
                };

                let app = build_app(&config, &dirs, scratch.path(), proxy.clone(), command_rx);
                let app = match app {
                    Ok(app) => app,
                    Err(e) => {
                        error!("Failed to create network runtime state: {:?}", e);
                        std::process::exit(1);
                    }
                };

                // Spawn tokio runtime on separate thread.
                // Window, webview, tray and menus stay on the main thread.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        if let Err(e) = app.run().await {
                            error!(error = ?e, "App error");
                        }
                    });
                });

                let mut started = Shell::new(
                    host,
                    Platform::current(),
                    ShellPaths::under(&dirs.data_dir, scratch.path()),
                    persisted_geometry,
                    UpdateController::new(config.app.name.clone(), VERSION),
                );

                if let Err(e) = started.start() {
                    error!("Failed to start shell: {:?}", e);
                    std::process::exit(1);
                }
                shell = Some(started);

                if let Err(e) = power_monitor::watch(proxy.clone()) {
                    warn!(error = ?e, "Sleep and wake notifications unavailable");
                }

                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }
            }
            Event::UserEvent(event) => {
                if let Some(shell) = shell.as_mut() {
                    handle_shell_event(shell, event);
                }
            }
            Event::WindowEvent { event, .. } => {
                if let Some(shell) = shell.as_mut() {
                    handle_window_event(shell, event);
                }
            }
            Event::Reopen { .. } => {
                if let Some(shell) = shell.as_mut() {
                    shell.on_activate();
                }
            }
            Event::LoopDestroyed => {
                if let Some(shell) = shell.as_mut() {
                    shell.before_quit();
                }
                if command_tx.try_send(AppCommand::Shutdown).is_err() {
                    debug!("Network runtime already stopped");
                }
                info!("Todo shut down");
                return;
            }
            _ => {}
        }

        if shell.as_ref().is_some_and(|shell| shell.host().exit_requested()) {
            *control_flow = ControlFlow::ExitWithCode(0);
        }

        // Keep the scratch directory and log writer alive for the app's lifetime.
        let _ = (&scratch, &log_guard);
    });
}

/// Network-side state: avatar cache and update feed.
fn build_app(
    config: &Config,
    dirs: &AppDirs,
    scratch_dir: &std::path::Path,
    proxy: tao::event_loop::EventLoopProxy<ShellEvent>,
    command_rx: mpsc::Receiver<AppCommand>,
) -> AppResult<App> {
    let icons = IconCache::new(HttpAvatarSource::new()?, scratch_dir);
    let updates = HttpUpdateFeed::new(config.update.feed_url.clone(), VERSION, dirs.updates_dir())?;

    Ok(App {
        icons: Arc::new(icons),
        updates: Arc::new(updates),
        proxy,
        command_rx,
    })
}

fn handle_shell_event(shell: &mut Shell<NativeHost>, event: ShellEvent) {
    match event {
        ShellEvent::Ipc(body) => match IpcEnvelope::parse(&body) {
            Ok(envelope) => {
                if let Some(reply) = shell.handle_ipc(envelope) {
                    shell.host().deliver_reply(&reply);
                }
            }
            Err(e) => match IpcEnvelope::reply_id(&body) {
                Some(id) => {
                    warn!(error = ?e, id, "Rejecting malformed IPC request");
                    shell.host().deliver_reply(&IpcReply::error(id, &e));
                }
                None => warn!(error = ?e, "Dropping malformed IPC message"),
            },
        },
        ShellEvent::PageLoaded => shell.on_content_loaded(),
        ShellEvent::ExternalNavigation(url) => shell.on_external_navigation(&url),
        ShellEvent::TrayIcon(TrayIconEvent::Click {
            button: MouseButton::Left,
            button_state: MouseButtonState::Up,
            ..
        }) => shell.on_tray_click(Instant::now()),
        ShellEvent::TrayIcon(_) => {}
        ShellEvent::Menu(event) => shell.on_menu_action(&event.id.0),
        ShellEvent::TrayTick => shell.on_tray_tick(),
        ShellEvent::IconsResolved(resolved) => shell.on_icons_resolved(resolved),
        ShellEvent::Update(update) => shell.on_update_event(update),
        ShellEvent::Power(PowerEvent::Suspend) => shell.on_suspend(),
        ShellEvent::Power(PowerEvent::Resume) => shell.on_resume(),
        ShellEvent::Exit => debug!("Exit requested"),
    }
}

fn handle_window_event(shell: &mut Shell<NativeHost>, event: WindowEvent<'_>) {
    match event {
        WindowEvent::CloseRequested => {
            let outcome = shell.on_close_requested();
            debug!(?outcome, "Close requested");
        }
        WindowEvent::Moved(_) | WindowEvent::Resized(_) => {
            if let Some(geometry) = shell.host().current_geometry() {
                shell.on_geometry_changed(geometry);
            }
        }
        _ => {}
    }
}
