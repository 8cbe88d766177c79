/// Tray icon variants corresponding to unread state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayGlyph {
    /// No unread messages.
    Normal,
    /// At least one unread message.
    Unread,
}

impl TrayGlyph {
    /// Glyph for an unread message count.
    pub fn for_unread(unread: u32) -> Self {
        if unread > 0 {
            TrayGlyph::Unread
        } else {
            TrayGlyph::Normal
        }
    }
}
