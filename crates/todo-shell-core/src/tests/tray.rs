use crate::{Platform, ShellSettings, TrayController, TrayGlyph, TrayMenuItem, TrayMenuModel};

use super::fake_host::{FakeHost, FakeTray, HostCall, fake_shell};

fn tray_calls(host: &FakeHost) -> Vec<HostCall> {
    host.calls
        .iter()
        .filter(|call| {
            matches!(
                call,
                HostCall::CreateTray(..)
                    | HostCall::SetTrayIcon(..)
                    | HostCall::SetTrayMenu(..)
                    | HostCall::DestroyTray(_)
                    | HostCall::ScheduleTick
            )
        })
        .cloned()
        .collect()
}

/// WHAT: Tray creation waits for the scheduled tick
/// WHY: A destroy issued in the same turn must finish before a new icon appears
#[test]
#[allow(clippy::unwrap_used)]
fn given_no_tray_when_updating_visible_then_creation_deferred_to_tick() {
    // Given: An empty controller
    let mut host = FakeHost::new();
    let mut tray: TrayController<FakeTray> = TrayController::new();

    // When: Requesting a visible tray
    tray.update(&mut host, true, 2).unwrap();

    // Then: Nothing exists until the tick runs
    assert!(tray.is_pending());
    assert_eq!(host.live_trays, 0);
    assert_eq!(tray_calls(&host), vec![HostCall::ScheduleTick]);

    tray.complete_pending(&mut host).unwrap();

    assert!(tray.is_live());
    assert_eq!(host.live_trays, 1);
    assert!(host.calls.contains(&HostCall::CreateTray(1, TrayGlyph::Unread, 2)));
}

/// WHAT: Unread sequence 0, 3, 3, 0 renders exactly three times
/// WHY: Unchanged counts must not touch the native tray
#[test]
#[allow(clippy::unwrap_used)]
fn given_unread_sequence_when_updating_then_duplicate_render_skipped() {
    // Given: A live tray showing 0 messages
    let mut host = FakeHost::new();
    let mut tray: TrayController<FakeTray> = TrayController::new();
    tray.update(&mut host, true, 0).unwrap();
    tray.complete_pending(&mut host).unwrap();

    // When: Counts 3, 3, 0 arrive
    tray.update(&mut host, true, 3).unwrap();
    tray.update(&mut host, true, 3).unwrap();
    tray.update(&mut host, true, 0).unwrap();

    // Then: One create and two in-place updates, glyphs following the count
    assert_eq!(
        tray_calls(&host),
        vec![
            HostCall::ScheduleTick,
            HostCall::CreateTray(1, TrayGlyph::Normal, 0),
            HostCall::SetTrayIcon(1, TrayGlyph::Unread),
            HostCall::SetTrayMenu(1, 3),
            HostCall::SetTrayIcon(1, TrayGlyph::Normal),
            HostCall::SetTrayMenu(1, 0),
        ]
    );
    assert_eq!(tray.last_unread(), 0);
}

/// WHAT: A failed in-place tray update still records the count
/// WHY: The last unread count follows every call, rendered or not
#[test]
#[allow(clippy::unwrap_used)]
fn given_failing_tray_update_when_updating_then_count_recorded() {
    // Given: A live tray whose icon updates fail
    let mut host = FakeHost::new();
    let mut tray: TrayController<FakeTray> = TrayController::new();
    tray.update(&mut host, true, 0).unwrap();
    tray.complete_pending(&mut host).unwrap();
    host.fail_tray_update = true;

    // When: A new count arrives, then the same count again
    let first = tray.update(&mut host, true, 5);
    let second = tray.update(&mut host, true, 5);

    // Then: The error surfaces once and the repeat is a no-op
    assert!(first.is_err());
    assert!(second.is_ok());
    assert_eq!(tray.last_unread(), 5);
    assert_eq!(host.count(|c| matches!(c, HostCall::SetTrayIcon(..))), 1);
}

/// WHAT: Hiding the tray destroys the live handle
/// WHY: Disabling the tray in settings must remove the icon
#[test]
#[allow(clippy::unwrap_used)]
fn given_live_tray_when_updating_invisible_then_destroyed() {
    // Given: A live tray
    let mut host = FakeHost::new();
    let mut tray: TrayController<FakeTray> = TrayController::new();
    tray.update(&mut host, true, 1).unwrap();
    tray.complete_pending(&mut host).unwrap();

    // When: Updating with visibility off, twice
    tray.update(&mut host, false, 1).unwrap();
    tray.update(&mut host, false, 1).unwrap();

    // Then: Exactly one destroy and no handle left
    assert_eq!(host.count(|c| matches!(c, HostCall::DestroyTray(_))), 1);
    assert_eq!(host.live_trays, 0);
    assert!(!tray.is_live());
}

/// WHAT: Hide and show in one turn never yields two icons
/// WHY: At most one native tray handle may exist at a time
#[test]
#[allow(clippy::unwrap_used)]
fn given_live_tray_when_hidden_and_shown_same_turn_then_single_handle() {
    // Given: A live tray
    let mut host = FakeHost::new();
    let mut tray: TrayController<FakeTray> = TrayController::new();
    tray.update(&mut host, true, 0).unwrap();
    tray.complete_pending(&mut host).unwrap();

    // When: Destroy then recreate before the tick
    tray.update(&mut host, false, 0).unwrap();
    tray.update(&mut host, true, 0).unwrap();
    assert_eq!(host.live_trays, 0);
    tray.complete_pending(&mut host).unwrap();
    tray.complete_pending(&mut host).unwrap();

    // Then: The old icon is gone and exactly one new icon exists
    assert_eq!(host.live_trays, 1);
    assert!(host.calls.contains(&HostCall::DestroyTray(1)));
    assert!(host.calls.contains(&HostCall::CreateTray(2, TrayGlyph::Normal, 0)));
}

/// WHAT: A pending creation is dropped when the tray is hidden before the tick
/// WHY: Toggling the setting quickly must not leave an icon behind
#[test]
#[allow(clippy::unwrap_used)]
fn given_pending_tray_when_hidden_then_tick_creates_nothing() {
    // Given: A pending creation
    let mut host = FakeHost::new();
    let mut tray: TrayController<FakeTray> = TrayController::new();
    tray.update(&mut host, true, 4).unwrap();

    // When: Hidden before the tick fires
    tray.update(&mut host, false, 4).unwrap();
    tray.complete_pending(&mut host).unwrap();

    // Then: No icon was ever created
    assert_eq!(host.count(|c| matches!(c, HostCall::CreateTray(..))), 0);
    assert!(!tray.is_pending());
}

/// WHAT: Counts arriving while creation is pending are rendered by the tick
/// WHY: The created icon must show the latest state
#[test]
#[allow(clippy::unwrap_used)]
fn given_pending_tray_when_count_changes_then_tick_uses_latest() {
    // Given: A pending creation for 1 message
    let mut host = FakeHost::new();
    let mut tray: TrayController<FakeTray> = TrayController::new();
    tray.update(&mut host, true, 1).unwrap();

    // When: The count drops to 0 before the tick
    tray.update(&mut host, true, 0).unwrap();
    tray.complete_pending(&mut host).unwrap();

    // Then: One tick scheduled, icon created for 0
    assert_eq!(host.count(|c| matches!(c, HostCall::ScheduleTick)), 1);
    assert!(host.calls.contains(&HostCall::CreateTray(1, TrayGlyph::Normal, 0)));
}

/// WHAT: Context menu header reflects the unread count
/// WHY: Users read the count from the tray menu
#[test]
fn given_unread_count_when_building_menu_then_header_shows_count() {
    // Given/When: A tray menu for 7 messages
    let items = TrayMenuModel::new(7).items();

    // Then: Header first, Quit last
    assert_eq!(items[0], TrayMenuItem::Header("You have 7 messages".to_string()));
    assert!(matches!(items.last(), Some(TrayMenuItem::Action { label: "Quit", .. })));
}

/// WHAT: Tray is hidden on the primary desktop until enabled in settings
/// WHY: macOS users opt in to the tray icon
#[test]
#[allow(clippy::unwrap_used)]
fn given_macos_when_settings_toggle_tray_then_icon_follows() {
    // Given: A started macOS shell with default settings
    let dir = tempfile::tempdir().unwrap();
    let mut shell = fake_shell(Platform::MacOs, dir.path());
    shell.start().unwrap();
    shell.on_tray_tick();
    assert_eq!(shell.host().live_trays, 0);

    // When: The tray is enabled
    shell.apply_settings(ShellSettings {
        show_on_tray: true,
        ..ShellSettings::default()
    });
    shell.on_tray_tick();

    // Then: The icon exists; disabling removes it again
    assert_eq!(shell.host().live_trays, 1);

    shell.apply_settings(ShellSettings::default());
    assert_eq!(shell.host().live_trays, 0);
}

/// WHAT: Tray is always shown on secondary platforms
/// WHY: It is the only way back to a hidden window there
#[test]
#[allow(clippy::unwrap_used)]
fn given_linux_when_started_then_tray_created_regardless_of_settings() {
    // Given: A Linux shell with the tray disabled in settings
    let dir = tempfile::tempdir().unwrap();
    let mut shell = fake_shell(Platform::Linux, dir.path());

    // When: Starting and ticking
    shell.start().unwrap();
    shell.on_tray_tick();

    // Then: The tray exists
    assert_eq!(shell.host().live_trays, 1);
    assert!(shell.tray_visible());
}
