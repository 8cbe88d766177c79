use std::path::PathBuf;

/// A release offered by the update feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    /// Version string, e.g. `1.4.0`.
    pub version: String,
    /// Human readable release name.
    pub name: String,
    /// Release notes shown in the restart dialog.
    pub notes: String,
    /// Downloaded installer package, once available.
    pub package: Option<PathBuf>,
}

impl ReleaseInfo {
    /// Body of the restart dialog: release name, then notes.
    pub fn restart_detail(&self) -> String {
        format!("{}\n\n{}", self.name, self.notes)
    }
}

/// Update workflow state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateState {
    /// Nothing in progress.
    Idle,
    /// Waiting for the feed to answer a check.
    Checking,
    /// A newer release is downloading in the background.
    Downloading,
    /// Download finished; the restart decision is pending.
    Downloaded(ReleaseInfo),
    /// Installing the downloaded release failed. Checks may be retried.
    Failed,
}

/// Inputs to the update state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateEvent {
    /// User asked for an update check.
    CheckRequested,
    /// Feed reports the running version is current.
    NotAvailable,
    /// Feed found a newer release and started downloading it.
    Available(ReleaseInfo),
    /// Check or download failed.
    Error(String),
    /// Download completed.
    Downloaded(ReleaseInfo),
}

/// Answer to the "restart now?" dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartChoice {
    /// Install and relaunch immediately.
    Restart,
    /// Keep the package for a later relaunch.
    Later,
}
