//! Main window and the renderer webview hosted in it.

use crate::{AppError, AppResult, ShellEvent, bridge::BRIDGE_SCRIPT, config::Config};

use todo_shell_core::{BROWSER_USER_AGENT, WindowGeometry, is_in_app_navigation};

use std::panic::Location;

use error_location::ErrorLocation;
use tao::{
    dpi::{LogicalPosition, LogicalSize},
    event_loop::{EventLoopProxy, EventLoopWindowTarget},
    window::{Icon, Window, WindowBuilder},
};
use tracing::{debug, instrument, warn};
use wry::{PageLoadEvent, WebView, WebViewBuilder, http::Request};

/// Create the hidden, login-sized main window at the persisted position.
#[track_caller]
#[instrument(skip(target, config))]
pub(crate) fn build_window(
    target: &EventLoopWindowTarget<ShellEvent>,
    config: &Config,
    persisted: WindowGeometry,
) -> AppResult<Window> {
    let mut builder = WindowBuilder::new()
        .with_title(&config.app.name)
        .with_visible(false)
        .with_resizable(false)
        .with_inner_size(LogicalSize::new(
            config.window.login_width,
            config.window.login_height,
        ))
        .with_window_icon(load_window_icon());

    if let (Some(x), Some(y)) = (persisted.x, persisted.y) {
        builder = builder.with_position(LogicalPosition::new(x, y));
    }

    builder.build(target).map_err(|e| AppError::WindowError {
        reason: format!("Failed to create main window: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Attach the renderer webview to `window`.
///
/// Every callback forwards to the event loop; none touches shell state.
#[track_caller]
#[instrument(skip_all, fields(url = %config.renderer.url))]
pub(crate) fn build_webview(
    window: &Window,
    config: &Config,
    proxy: &EventLoopProxy<ShellEvent>,
) -> AppResult<WebView> {
    let ipc_proxy = proxy.clone();
    let navigation_proxy = proxy.clone();
    let new_window_proxy = proxy.clone();
    let page_load_proxy = proxy.clone();
    let renderer_url = config.renderer.url.clone();

    let builder = WebViewBuilder::new()
        .with_url(&config.renderer.url)
        .with_user_agent(BROWSER_USER_AGENT)
        .with_background_color(config.window.background_rgba())
        .with_devtools(config.renderer.devtools)
        .with_clipboard(true)
        .with_initialization_script(BRIDGE_SCRIPT)
        .with_ipc_handler(move |request: Request<String>| {
            let _ = ipc_proxy.send_event(ShellEvent::Ipc(request.body().clone()));
        })
        .with_navigation_handler(move |url: String| {
            if is_in_app_navigation(&url, &renderer_url) {
                return true;
            }

            let _ = navigation_proxy.send_event(ShellEvent::ExternalNavigation(url));
            false
        })
        .with_new_window_req_handler(move |url: String| {
            let _ = new_window_proxy.send_event(ShellEvent::ExternalNavigation(url));
            false
        })
        .with_on_page_load_handler(move |event, url| {
            if let PageLoadEvent::Finished = event {
                debug!(url = %url, "Page loaded");
                let _ = page_load_proxy.send_event(ShellEvent::PageLoaded);
            }
        });

    attach(builder, window).map_err(|e| AppError::WindowError {
        reason: format!("Failed to create webview: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[cfg(not(target_os = "linux"))]
fn attach(builder: WebViewBuilder<'_>, window: &Window) -> Result<WebView, String> {
    builder.build(window).map_err(|e| e.to_string())
}

#[cfg(target_os = "linux")]
fn attach(builder: WebViewBuilder<'_>, window: &Window) -> Result<WebView, String> {
    use tao::platform::unix::WindowExtUnix;
    use wry::WebViewBuilderExtUnix;

    let vbox = window
        .default_vbox()
        .ok_or_else(|| "window has no GTK container".to_string())?;

    builder.build_gtk(vbox).map_err(|e| e.to_string())
}

/// Window icon from the embedded dock artwork; a broken asset only loses the icon.
fn load_window_icon() -> Option<Icon> {
    let png_bytes: &[u8] = include_bytes!("../resources/icons/dock.png");

    let rgba = match image::load_from_memory(png_bytes) {
        Ok(img) => img.into_rgba8(),
        Err(e) => {
            warn!(error = %e, "Failed to decode embedded window icon");
            return None;
        }
    };
    let (width, height) = (rgba.width(), rgba.height());

    Icon::from_rgba(rgba.into_raw(), width, height)
        .map_err(|e| warn!(error = %e, "Failed to create window icon"))
        .ok()
}
