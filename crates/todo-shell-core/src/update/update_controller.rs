//! Update check / download / install state machine.
//!
//! All transitions go through [`UpdateController::apply`]. The feed and the
//! dialogs are injected per call, so the machine runs without a network.

use crate::{
    ReleaseInfo, RestartChoice, UpdateDialogs, UpdateEvent, UpdateFeed, UpdateNotice, UpdateState,
};

use tracing::{debug, error, info, instrument};

/// What the caller must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Keep running.
    Continue,
    /// The installer took over; terminate the process.
    Relaunch,
}

/// Single owner of the update workflow state.
#[derive(Debug, Clone)]
pub struct UpdateController {
    state: UpdateState,
    pending_install: Option<ReleaseInfo>,
    app_name: String,
    current_version: String,
}

impl UpdateController {
    /// Idle controller for `app_name` running `current_version`.
    pub fn new(app_name: impl Into<String>, current_version: impl Into<String>) -> Self {
        Self {
            state: UpdateState::Idle,
            pending_install: None,
            app_name: app_name.into(),
            current_version: current_version.into(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &UpdateState {
        &self.state
    }

    /// Release downloaded but deferred with "Later".
    pub fn pending_install(&self) -> Option<&ReleaseInfo> {
        self.pending_install.as_ref()
    }

    /// Install the release deferred with "Later", if any.
    ///
    /// Runs once at quit; the pending release is consumed either way.
    #[instrument(skip_all)]
    pub fn install_pending_on_quit<H: UpdateFeed>(&mut self, host: &mut H) {
        let Some(release) = self.pending_install.take() else {
            return;
        };

        match host.install_on_quit(&release) {
            Ok(()) => info!(version = %release.version, "Deferred update handed to installer"),
            Err(e) => {
                error!(error = ?e, version = %release.version, "Deferred update not installed")
            }
        }
    }

    /// Apply one event.
    #[instrument(skip(self, host), fields(state = ?self.state))]
    pub fn apply<H>(&mut self, host: &mut H, event: UpdateEvent) -> UpdateOutcome
    where
        H: UpdateFeed + UpdateDialogs,
    {
        match event {
            UpdateEvent::CheckRequested => {
                self.check_for_updates(host);
                UpdateOutcome::Continue
            }
            UpdateEvent::NotAvailable => {
                info!(version = %self.current_version, "Update not available");
                self.state = UpdateState::Idle;
                host.show_notice(&UpdateNotice::UpToDate {
                    app_name: self.app_name.clone(),
                    version: self.current_version.clone(),
                });
                UpdateOutcome::Continue
            }
            UpdateEvent::Available(release) => {
                info!(version = %release.version, "Update available, downloading");
                self.state = UpdateState::Downloading;
                // Re-entering the check path surfaces the "please wait" notice.
                self.check_for_updates(host);
                UpdateOutcome::Continue
            }
            UpdateEvent::Error(reason) => {
                error!(reason = %reason, "Update failed");
                self.state = UpdateState::Idle;
                host.show_notice(&UpdateNotice::CheckFailed {
                    app_name: self.app_name.clone(),
                });
                UpdateOutcome::Continue
            }
            UpdateEvent::Downloaded(release) => self.on_downloaded(host, release),
        }
    }

    fn check_for_updates<H>(&mut self, host: &mut H)
    where
        H: UpdateFeed + UpdateDialogs,
    {
        match self.state {
            UpdateState::Downloading => {
                host.show_notice(&UpdateNotice::AlreadyDownloading);
            }
            UpdateState::Checking => {
                debug!("Update check already in flight");
            }
            _ => {
                self.state = UpdateState::Checking;
                host.begin_check();
                info!("Update check started");
            }
        }
    }

    fn on_downloaded<H>(&mut self, host: &mut H, release: ReleaseInfo) -> UpdateOutcome
    where
        H: UpdateFeed + UpdateDialogs,
    {
        info!(version = %release.version, "Update downloaded");
        self.state = UpdateState::Downloaded(release.clone());

        match host.confirm_restart(&release) {
            RestartChoice::Restart => match host.install_and_relaunch(&release) {
                Ok(()) => {
                    info!(version = %release.version, "Installing update and relaunching");
                    self.state = UpdateState::Idle;
                    self.pending_install = None;
                    UpdateOutcome::Relaunch
                }
                Err(e) => {
                    error!(error = ?e, "Update install failed");
                    self.state = UpdateState::Failed;
                    self.pending_install = Some(release);
                    host.show_notice(&UpdateNotice::InstallFailed {
                        app_name: self.app_name.clone(),
                    });
                    UpdateOutcome::Continue
                }
            },
            RestartChoice::Later => {
                info!(version = %release.version, "Update install deferred");
                self.state = UpdateState::Idle;
                self.pending_install = Some(release);
                UpdateOutcome::Continue
            }
        }
    }
}
