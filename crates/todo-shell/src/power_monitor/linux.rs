//! logind `PrepareForSleep` over the system D-Bus.

use super::{PowerEvent, forward, power_error};
use crate::AppResult;

use std::time::Duration;

use dbus::{blocking::Connection, message::MatchRule};
use tracing::{debug, error};

const LOGIN1_MANAGER: &str = "org.freedesktop.login1.Manager";
const PROCESS_TIMEOUT: Duration = Duration::from_secs(1);

#[track_caller]
pub(super) fn subscribe() -> AppResult<()> {
    let conn = Connection::new_system()
        .map_err(|e| power_error(format!("Failed to connect to system bus: {}", e)))?;

    let rule = MatchRule::new_signal(LOGIN1_MANAGER, "PrepareForSleep");
    conn.add_match(rule, |(start,): (bool,), _, _| {
        debug!(start, "PrepareForSleep received");
        forward(PowerEvent::from_prepare_for_sleep(start));
        true
    })
    .map_err(|e| power_error(format!("Failed to watch PrepareForSleep: {}", e)))?;

    std::thread::Builder::new()
        .name("power-monitor".to_string())
        .spawn(move || {
            loop {
                if let Err(e) = conn.process(PROCESS_TIMEOUT) {
                    error!(error = %e, "System bus connection lost, power monitor stopped");
                    break;
                }
            }
        })?;

    Ok(())
}
