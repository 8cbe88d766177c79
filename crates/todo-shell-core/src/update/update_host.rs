use crate::{ReleaseInfo, RestartChoice, ShellResult, UpdateNotice};

/// Remote update feed.
///
/// Work started here reports back asynchronously as
/// [`UpdateEvent`](crate::UpdateEvent)s.
pub trait UpdateFeed {
    /// Start a check. A found release is downloaded without further prompting.
    fn begin_check(&mut self);

    /// Hand the downloaded package to the installer. The caller terminates
    /// the process on success.
    fn install_and_relaunch(&mut self, release: &ReleaseInfo) -> ShellResult<()>;

    /// Hand a deferred package to the installer while the process exits.
    fn install_on_quit(&mut self, release: &ReleaseInfo) -> ShellResult<()>;
}

/// Modal dialogs used by the update workflow.
pub trait UpdateDialogs {
    /// Show an informational or error notice and wait for dismissal.
    fn show_notice(&mut self, notice: &UpdateNotice);

    /// Ask whether to restart into `release` now.
    fn confirm_restart(&mut self, release: &ReleaseInfo) -> RestartChoice;
}
