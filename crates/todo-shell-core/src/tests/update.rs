use crate::{
    NoticeLevel, Platform, ReleaseInfo, RestartChoice, UpdateController, UpdateEvent,
    UpdateNotice, UpdateOutcome, UpdateState,
};

use std::path::PathBuf;

use super::fake_host::{FakeHost, HostCall, fake_shell};

fn release(version: &str) -> ReleaseInfo {
    ReleaseInfo {
        version: version.to_string(),
        name: format!("Todo {version}"),
        notes: "Fixes".to_string(),
        package: Some(PathBuf::from("/tmp/todo.dmg")),
    }
}

fn controller() -> UpdateController {
    UpdateController::new("Todo", "1.2.0")
}

/// WHAT: A check from idle starts the feed
/// WHY: Entry point of the update workflow
#[test]
fn given_idle_when_check_requested_then_checking() {
    // Given: An idle controller
    let mut host = FakeHost::new();
    let mut update = controller();

    // When: A check is requested
    let outcome = update.apply(&mut host, UpdateEvent::CheckRequested);

    // Then: The feed is queried
    assert_eq!(outcome, UpdateOutcome::Continue);
    assert_eq!(update.state(), &UpdateState::Checking);
    assert_eq!(host.calls, vec![HostCall::BeginCheck]);
}

/// WHAT: A second check while checking is ignored
/// WHY: Only one check may be in flight
#[test]
fn given_checking_when_check_requested_then_ignored() {
    // Given: A check in flight
    let mut host = FakeHost::new();
    let mut update = controller();
    update.apply(&mut host, UpdateEvent::CheckRequested);

    // When: Another check is requested
    update.apply(&mut host, UpdateEvent::CheckRequested);

    // Then: Still one feed call
    assert_eq!(host.count(|c| *c == HostCall::BeginCheck), 1);
    assert_eq!(update.state(), &UpdateState::Checking);
}

/// WHAT: Available release downloads and shows the wait notice
/// WHY: Users learn the download is running
#[test]
fn given_checking_when_update_available_then_downloading_with_notice() {
    // Given: A check in flight
    let mut host = FakeHost::new();
    let mut update = controller();
    update.apply(&mut host, UpdateEvent::CheckRequested);

    // When: The feed reports a newer release
    update.apply(&mut host, UpdateEvent::Available(release("1.3.0")));

    // Then: Downloading, wait notice shown, no second check
    assert_eq!(update.state(), &UpdateState::Downloading);
    assert!(host.calls.contains(&HostCall::Notice(UpdateNotice::AlreadyDownloading)));
    assert_eq!(host.count(|c| *c == HostCall::BeginCheck), 1);
}

/// WHAT: Checks during a download short-circuit to the wait notice
/// WHY: Re-triggering would start a second download
#[test]
fn given_downloading_when_check_requested_then_wait_notice_only() {
    // Given: A download in progress
    let mut host = FakeHost::new();
    let mut update = controller();
    update.apply(&mut host, UpdateEvent::CheckRequested);
    update.apply(&mut host, UpdateEvent::Available(release("1.3.0")));
    host.clear();

    // When: The user checks again
    update.apply(&mut host, UpdateEvent::CheckRequested);

    // Then: Only the notice
    assert_eq!(
        host.calls,
        vec![HostCall::Notice(UpdateNotice::AlreadyDownloading)]
    );
    assert_eq!(update.state(), &UpdateState::Downloading);
}

/// WHAT: No update available returns to idle with a notice
/// WHY: Manual checks always get an answer
#[test]
fn given_checking_when_not_available_then_idle_with_up_to_date_notice() {
    // Given: A check in flight
    let mut host = FakeHost::new();
    let mut update = controller();
    update.apply(&mut host, UpdateEvent::CheckRequested);

    // When: The feed has nothing newer
    update.apply(&mut host, UpdateEvent::NotAvailable);

    // Then: Idle and informed
    assert_eq!(update.state(), &UpdateState::Idle);
    assert!(host.calls.contains(&HostCall::Notice(UpdateNotice::UpToDate {
        app_name: "Todo".to_string(),
        version: "1.2.0".to_string(),
    })));
}

/// WHAT: Feed errors show an error notice and allow retry
/// WHY: A failed check must not wedge the workflow
#[test]
fn given_checking_when_error_then_idle_and_retry_possible() {
    // Given: A check in flight that fails
    let mut host = FakeHost::new();
    let mut update = controller();
    update.apply(&mut host, UpdateEvent::CheckRequested);
    update.apply(&mut host, UpdateEvent::Error("timeout".to_string()));

    // When: Retrying
    update.apply(&mut host, UpdateEvent::CheckRequested);

    // Then: Error notice shown and a second check started
    assert!(host.calls.contains(&HostCall::Notice(UpdateNotice::CheckFailed {
        app_name: "Todo".to_string(),
    })));
    assert_eq!(host.count(|c| *c == HostCall::BeginCheck), 2);
}

/// WHAT: Restart after download installs and relaunches
/// WHY: The user accepted the update
#[test]
fn given_downloaded_when_restart_chosen_then_relaunch() {
    // Given: A host answering Restart
    let mut host = FakeHost::new();
    host.restart_choice = Some(RestartChoice::Restart);
    let mut update = controller();

    // When: The download completes
    let outcome = update.apply(&mut host, UpdateEvent::Downloaded(release("1.3.0")));

    // Then: Installed and relaunching
    assert_eq!(outcome, UpdateOutcome::Relaunch);
    assert!(host.calls.contains(&HostCall::Install("1.3.0".to_string())));
    assert!(update.pending_install().is_none());
}

/// WHAT: Later keeps the release pending and returns to idle
/// WHY: The user may restart another time
#[test]
fn given_downloaded_when_later_chosen_then_pending_install_kept() {
    // Given: A host answering Later
    let mut host = FakeHost::new();
    host.restart_choice = Some(RestartChoice::Later);
    let mut update = controller();

    // When: The download completes
    let outcome = update.apply(&mut host, UpdateEvent::Downloaded(release("1.3.0")));

    // Then: Nothing installed, release kept
    assert_eq!(outcome, UpdateOutcome::Continue);
    assert_eq!(update.state(), &UpdateState::Idle);
    assert_eq!(update.pending_install(), Some(&release("1.3.0")));
    assert_eq!(host.count(|c| matches!(c, HostCall::Install(_))), 0);
}

/// WHAT: Install failure enters a retryable failed state
/// WHY: Errors must surface without crashing the shell
#[test]
fn given_downloaded_when_install_fails_then_failed_and_retryable() {
    // Given: A host whose installer fails
    let mut host = FakeHost::new();
    host.restart_choice = Some(RestartChoice::Restart);
    host.fail_install = true;
    let mut update = controller();

    // When: The download completes and the user restarts
    let outcome = update.apply(&mut host, UpdateEvent::Downloaded(release("1.3.0")));

    // Then: Failed, error notice, and a new check may start
    assert_eq!(outcome, UpdateOutcome::Continue);
    assert_eq!(update.state(), &UpdateState::Failed);
    assert!(host.calls.contains(&HostCall::Notice(UpdateNotice::InstallFailed {
        app_name: "Todo".to_string(),
    })));

    update.apply(&mut host, UpdateEvent::CheckRequested);
    assert_eq!(update.state(), &UpdateState::Checking);
}

/// WHAT: Notice texts carry the app name and version
/// WHY: Dialogs are the only feedback for manual checks
#[test]
fn given_notices_when_rendered_then_texts_and_levels_match() {
    // Given: An up-to-date and a failure notice
    let up_to_date = UpdateNotice::UpToDate {
        app_name: "Todo".to_string(),
        version: "1.2.0".to_string(),
    };
    let failed = UpdateNotice::CheckFailed {
        app_name: "Todo".to_string(),
    };

    // When/Then: Texts and buttons follow the level
    assert_eq!(up_to_date.message(), "Todo is up to date :)");
    assert!(up_to_date.detail().starts_with("Todo 1.2.0 is currently the newest version"));
    assert_eq!(up_to_date.level(), NoticeLevel::Info);
    assert_eq!(up_to_date.button(), "OK");
    assert_eq!(failed.message(), "Failed to update Todo :(");
    assert_eq!(failed.button(), "Cancel update");
}

/// WHAT: Accepting an update quits the shell
/// WHY: The installer replaces the running app
#[test]
#[allow(clippy::unwrap_used)]
fn given_shell_when_update_relaunches_then_exit_requested() {
    // Given: A shell whose user accepts restarts
    let dir = tempfile::tempdir().unwrap();
    let mut shell = fake_shell(Platform::MacOs, dir.path());
    shell.host_mut().restart_choice = Some(RestartChoice::Restart);

    // When: A download completes
    shell.on_update_event(UpdateEvent::Downloaded(release("1.3.0")));

    // Then: Force-quit armed and exit requested
    assert!(shell.window().force_quit());
    assert_eq!(shell.host().calls.last(), Some(&HostCall::Exit));
}

/// WHAT: The menu's update item starts a check
/// WHY: Manual update checks come from the menu
#[test]
#[allow(clippy::unwrap_used)]
fn given_shell_when_check_for_updates_clicked_then_feed_queried() {
    // Given: A shell
    let dir = tempfile::tempdir().unwrap();
    let mut shell = fake_shell(Platform::MacOs, dir.path());

    // When: Clicking "Check for updates"
    shell.on_menu_action("shell.check-for-updates");

    // Then: Checking
    assert_eq!(shell.update().state(), &UpdateState::Checking);
    assert!(shell.host().calls.contains(&HostCall::BeginCheck));
}

/// WHAT: A release deferred with Later is installed when the shell quits
/// WHY: Later postpones the update, it must not discard it
#[test]
#[allow(clippy::unwrap_used)]
fn given_update_deferred_when_quitting_then_pending_release_installed() {
    // Given: A shell whose user chose Later for 1.3.0
    let dir = tempfile::tempdir().unwrap();
    let mut shell = fake_shell(Platform::MacOs, dir.path());
    shell.host_mut().restart_choice = Some(RestartChoice::Later);
    shell.on_update_event(UpdateEvent::Downloaded(release("1.3.0")));

    // When: The process quits
    shell.before_quit();

    // Then: The package went to the installer once and is no longer pending
    assert_eq!(
        shell.host().count(|c| *c == HostCall::InstallOnQuit("1.3.0".to_string())),
        1
    );
    assert!(shell.update().pending_install().is_none());
}

/// WHAT: Quitting without a deferred release installs nothing
/// WHY: Only an accepted download may reach the installer
#[test]
#[allow(clippy::unwrap_used)]
fn given_no_deferred_update_when_quitting_then_nothing_installed() {
    // Given: A shell with no downloaded release
    let dir = tempfile::tempdir().unwrap();
    let mut shell = fake_shell(Platform::MacOs, dir.path());

    // When: The process quits
    shell.before_quit();

    // Then: No installer call
    assert_eq!(shell.host().count(|c| matches!(c, HostCall::InstallOnQuit(_))), 0);
}
