use serde::{Deserialize, Serialize};

/// Logical window position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    /// Left edge; `None` lets the OS place the window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    /// Top edge; `None` lets the OS place the window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    /// Inner width.
    pub width: u32,
    /// Inner height.
    pub height: u32,
}

impl WindowGeometry {
    /// Geometry of `width`×`height` with no stored position.
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            x: None,
            y: None,
            width,
            height,
        }
    }
}

impl Default for WindowGeometry {
    /// Size of a fresh install, before anything was persisted.
    fn default() -> Self {
        Self::sized(745, 500)
    }
}
