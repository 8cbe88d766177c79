/// Sizing phase of the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPhase {
    /// Fixed, non-resizable login size. Geometry is not persisted.
    LoginSizing,
    /// User-sized window whose geometry is persisted.
    Resized,
}
