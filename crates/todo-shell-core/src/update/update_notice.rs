/// Headline of the "restart now?" dialog.
pub const RESTART_PROMPT: &str =
    "The new version has been downloaded. Please restart the application to apply the updates.";

/// Severity of a notice dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Informational.
    Info,
    /// Something failed.
    Error,
}

/// Notices shown by the update workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateNotice {
    /// A download is already running.
    AlreadyDownloading,
    /// The running version is the newest.
    UpToDate {
        /// Application name.
        app_name: String,
        /// Running version.
        version: String,
    },
    /// The feed could not be queried.
    CheckFailed {
        /// Application name.
        app_name: String,
    },
    /// The downloaded package could not be installed.
    InstallFailed {
        /// Application name.
        app_name: String,
    },
}

impl UpdateNotice {
    /// Dialog severity.
    pub fn level(&self) -> NoticeLevel {
        match self {
            UpdateNotice::AlreadyDownloading | UpdateNotice::UpToDate { .. } => NoticeLevel::Info,
            UpdateNotice::CheckFailed { .. } | UpdateNotice::InstallFailed { .. } => {
                NoticeLevel::Error
            }
        }
    }

    /// Dismiss button label.
    pub fn button(&self) -> &'static str {
        match self.level() {
            NoticeLevel::Info => "OK",
            NoticeLevel::Error => "Cancel update",
        }
    }

    /// Short headline.
    pub fn message(&self) -> String {
        match self {
            UpdateNotice::AlreadyDownloading => "Downloading...".to_string(),
            UpdateNotice::UpToDate { app_name, .. } => format!("{app_name} is up to date :)"),
            UpdateNotice::CheckFailed { app_name } | UpdateNotice::InstallFailed { app_name } => {
                format!("Failed to update {app_name} :(")
            }
        }
    }

    /// Longer explanation.
    pub fn detail(&self) -> String {
        match self {
            UpdateNotice::AlreadyDownloading => "Please leave the app open, the new version is downloading. You'll receive a new dialog when downloading is finished.".to_string(),
            UpdateNotice::UpToDate { app_name, version } => format!(
                "{app_name} {version} is currently the newest version available, It looks like you're already rocking the latest version!"
            ),
            UpdateNotice::CheckFailed { .. } => {
                "An error occurred in retrieving update information, Please try again later.".to_string()
            }
            UpdateNotice::InstallFailed { .. } => {
                "The downloaded update could not be installed, Please try again later.".to_string()
            }
        }
    }
}
