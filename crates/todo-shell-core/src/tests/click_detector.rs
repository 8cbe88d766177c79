use crate::{ClickDetector, ClickOutcome, Platform};

use std::time::{Duration, Instant};

use super::fake_host::{HostCall, fake_shell};

/// WHAT: Two clicks within 400 ms form a double click
/// WHY: Double-clicking the tray shows the window
#[test]
fn given_armed_detector_when_clicked_within_window_then_double_click() {
    // Given: One click registered
    let mut detector = ClickDetector::new();
    let start = Instant::now();
    assert_eq!(detector.register(start), ClickOutcome::Armed);

    // When: Clicking again 200 ms later
    let outcome = detector.register(start + Duration::from_millis(200));

    // Then: A double click is reported
    assert_eq!(outcome, ClickOutcome::DoubleClick);
}

/// WHAT: Clicks 500 ms apart are two single clicks
/// WHY: Slow clicks must not toggle the window
#[test]
fn given_armed_detector_when_clicked_after_window_then_rearmed() {
    // Given: One click registered
    let mut detector = ClickDetector::new();
    let start = Instant::now();
    detector.register(start);

    // When: Clicking again after 500 ms
    let outcome = detector.register(start + Duration::from_millis(500));

    // Then: The detector simply re-arms
    assert_eq!(outcome, ClickOutcome::Armed);
}

/// WHAT: A third rapid click starts a new pair
/// WHY: A double click consumes the armed state
#[test]
fn given_double_click_when_clicked_again_then_armed() {
    // Given: A completed double click
    let mut detector = ClickDetector::new();
    let start = Instant::now();
    detector.register(start);
    detector.register(start + Duration::from_millis(100));

    // When: Clicking a third time
    let outcome = detector.register(start + Duration::from_millis(200));

    // Then: Armed again
    assert_eq!(outcome, ClickOutcome::Armed);
}

/// WHAT: Tray double click shows a hidden window, single click does nothing
/// WHY: Lone clicks fire while users open the context menu
#[test]
#[allow(clippy::unwrap_used)]
fn given_hidden_window_when_tray_clicked_then_only_double_click_shows() {
    // Given: A shell with a hidden window
    let dir = tempfile::tempdir().unwrap();
    let mut shell = fake_shell(Platform::Linux, dir.path());
    let start = Instant::now();

    // When: A single click
    shell.on_tray_click(start);

    // Then: Nothing is shown
    assert_eq!(shell.host().count(|c| *c == HostCall::Show), 0);

    // When: A second click 100 ms later
    shell.on_tray_click(start + Duration::from_millis(100));

    // Then: The window is shown and focused
    assert!(shell.host().visible);
    assert!(shell.host().calls.contains(&HostCall::Focus));
}
