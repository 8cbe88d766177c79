use crate::config::default_renderer_url;

use serde::{Deserialize, Serialize};

/// Where the renderer UI is loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Start page. Navigations away from its origin open in the OS browser.
    #[serde(default = "default_renderer_url")]
    pub url: String,
    /// Enable webview devtools.
    #[serde(default)]
    pub devtools: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            url: default_renderer_url(),
            devtools: false,
        }
    }
}
