use std::time::{Duration, Instant};

/// Maximum gap between two tray clicks that still counts as a double click.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

/// Result of registering a tray click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// First click of a potential double click. No visible effect.
    Armed,
    /// Second click inside the window.
    DoubleClick,
}

/// Debounced double-click detection for the tray icon.
///
/// A lone click never toggles anything: some platforms fire a click while
/// the user interacts with the context menu.
#[derive(Debug, Clone)]
pub struct ClickDetector {
    armed_at: Option<Instant>,
    window: Duration,
}

impl ClickDetector {
    /// Detector using [`DOUBLE_CLICK_WINDOW`].
    pub fn new() -> Self {
        Self {
            armed_at: None,
            window: DOUBLE_CLICK_WINDOW,
        }
    }

    /// Register a click that happened at `now`.
    pub fn register(&mut self, now: Instant) -> ClickOutcome {
        match self.armed_at.take() {
            Some(armed_at) if now.saturating_duration_since(armed_at) <= self.window => {
                ClickOutcome::DoubleClick
            }
            _ => {
                self.armed_at = Some(now);
                ClickOutcome::Armed
            }
        }
    }
}

impl Default for ClickDetector {
    fn default() -> Self {
        Self::new()
    }
}
