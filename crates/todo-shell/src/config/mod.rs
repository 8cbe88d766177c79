mod app_config;
mod app_dirs;
#[allow(clippy::module_inception)]
mod config;
mod renderer_config;
mod toml_file;
mod update_config;
mod window_config;
mod window_state;

pub(crate) use {
    app_config::AppConfig,
    app_dirs::AppDirs,
    config::Config,
    renderer_config::RendererConfig,
    toml_file::{load_toml, save_toml},
    update_config::UpdateConfig,
    window_config::WindowConfig,
    window_state::WindowState,
};

pub(crate) const DEFAULT_APP_NAME: &str = "Todo";
pub(crate) const DEFAULT_RENDERER_URL: &str = "http://localhost:3000/";
pub(crate) const DEFAULT_LOGIN_WIDTH: u32 = 350;
pub(crate) const DEFAULT_LOGIN_HEIGHT: u32 = 460;
pub(crate) const DEFAULT_WINDOW_WIDTH: u32 = 745;
pub(crate) const DEFAULT_WINDOW_HEIGHT: u32 = 500;
pub(crate) const DEFAULT_BACKGROUND: &str = "#403F4D";

pub(crate) fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

pub(crate) fn default_renderer_url() -> String {
    DEFAULT_RENDERER_URL.to_string()
}

pub(crate) fn default_login_width() -> u32 {
    DEFAULT_LOGIN_WIDTH
}

pub(crate) fn default_login_height() -> u32 {
    DEFAULT_LOGIN_HEIGHT
}

pub(crate) fn default_window_width() -> u32 {
    DEFAULT_WINDOW_WIDTH
}

pub(crate) fn default_window_height() -> u32 {
    DEFAULT_WINDOW_HEIGHT
}

pub(crate) fn default_background() -> String {
    DEFAULT_BACKGROUND.to_string()
}
