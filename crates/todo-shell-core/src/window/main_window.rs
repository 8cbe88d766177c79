use crate::{ShellResult, WindowGeometry};

/// The single main window, as seen by the lifecycle controller.
pub trait MainWindow {
    /// Whether the window is currently shown.
    fn is_visible(&self) -> bool;

    /// Show the window.
    fn show(&mut self);

    /// Hide the window without destroying it.
    fn hide(&mut self);

    /// Give the window keyboard focus.
    fn focus(&mut self);

    /// Keep the window above others.
    fn set_always_on_top(&mut self, always_on_top: bool);

    /// Allow or forbid user resizing.
    fn set_resizable(&mut self, resizable: bool);

    /// Move and resize the window.
    fn set_geometry(&mut self, geometry: WindowGeometry);

    /// Drop the window for good. Called right before the process exits.
    fn release(&mut self);

    /// Persist geometry for the next session.
    fn persist_geometry(&mut self, geometry: &WindowGeometry) -> ShellResult<()>;
}
