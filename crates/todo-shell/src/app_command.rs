use todo_shell_core::IconBatch;

/// Commands sent from the main thread to the async runtime.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Download and decode avatars for a menu update.
    ResolveMenuIcons(IconBatch),
    /// Query the update feed and download a newer release.
    CheckForUpdates,
    /// Request application shutdown.
    Shutdown,
}
