//! OS sleep and wake notifications.
//!
//! Each platform subscribes through its native API and forwards what it
//! sees to the event loop as [`ShellEvent::Power`].

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;

use crate::{AppError, AppResult, ShellEvent};

use std::{
    panic::Location,
    sync::{Mutex, OnceLock},
};

use error_location::ErrorLocation;
use tao::event_loop::EventLoopProxy;
use tracing::{error, info};

// Win32 power broadcast codes (`WM_POWERBROADCAST` wParam values).
const PBT_APMSUSPEND: u32 = 0x0004;
const PBT_APMRESUMESUSPEND: u32 = 0x0007;
const PBT_APMRESUMEAUTOMATIC: u32 = 0x0012;

/// Native callbacks have no context pointer to carry the proxy.
static PROXY: OnceLock<Mutex<EventLoopProxy<ShellEvent>>> = OnceLock::new();

/// Machine power transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerEvent {
    /// The system is going to sleep.
    Suspend,
    /// The system woke up.
    Resume,
}

impl PowerEvent {
    /// logind `PrepareForSleep(start)`: `true` before sleeping, `false` after.
    pub fn from_prepare_for_sleep(start: bool) -> Self {
        if start {
            PowerEvent::Suspend
        } else {
            PowerEvent::Resume
        }
    }

    /// Win32 power broadcast code; other codes (battery, AC line) are ignored.
    pub fn from_power_broadcast(code: u32) -> Option<Self> {
        match code {
            PBT_APMSUSPEND => Some(PowerEvent::Suspend),
            PBT_APMRESUMESUSPEND | PBT_APMRESUMEAUTOMATIC => Some(PowerEvent::Resume),
            _ => None,
        }
    }
}

/// Start forwarding sleep and wake notifications to `proxy`.
///
/// Call once, from the main thread.
#[track_caller]
pub(crate) fn watch(proxy: EventLoopProxy<ShellEvent>) -> AppResult<()> {
    if PROXY.set(Mutex::new(proxy)).is_err() {
        return Err(power_error("Power monitor already running".to_string()));
    }

    subscribe()?;

    info!("Power monitor started");
    Ok(())
}

#[cfg(target_os = "linux")]
fn subscribe() -> AppResult<()> {
    linux::subscribe()
}

#[cfg(target_os = "macos")]
fn subscribe() -> AppResult<()> {
    macos::subscribe()
}

#[cfg(target_os = "windows")]
fn subscribe() -> AppResult<()> {
    windows::subscribe()
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn subscribe() -> AppResult<()> {
    Err(power_error("Power notifications unsupported on this platform".to_string()))
}

/// Hand `event` to the event loop. Called from native callbacks.
pub(crate) fn forward(event: PowerEvent) {
    let Some(proxy) = PROXY.get() else {
        return;
    };

    let sent = match proxy.lock() {
        Ok(proxy) => proxy.send_event(ShellEvent::Power(event)).is_ok(),
        Err(_) => false,
    };

    if !sent {
        error!(?event, "Power event dropped, event loop unavailable");
    }
}

#[track_caller]
pub(crate) fn power_error(reason: String) -> AppError {
    AppError::PowerMonitorError {
        reason,
        location: ErrorLocation::from(Location::caller()),
    }
}
