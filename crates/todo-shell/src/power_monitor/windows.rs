//! Suspend and resume callbacks from the Win32 power manager.

use super::{PowerEvent, forward, power_error};
use crate::AppResult;

use std::ffi::c_void;

use tracing::debug;
use windows::Win32::{
    Foundation::{ERROR_SUCCESS, HANDLE},
    System::Power::{DEVICE_NOTIFY_SUBSCRIBE_PARAMETERS, PowerRegisterSuspendResumeNotification},
    UI::WindowsAndMessaging::DEVICE_NOTIFY_CALLBACK,
};

unsafe extern "system" fn on_power_change(
    _context: *const c_void,
    kind: u32,
    _setting: *const c_void,
) -> u32 {
    debug!(kind, "Power broadcast received");
    if let Some(event) = PowerEvent::from_power_broadcast(kind) {
        forward(event);
    }
    ERROR_SUCCESS.0
}

#[track_caller]
pub(super) fn subscribe() -> AppResult<()> {
    // Registration stays active for the rest of the process, so the
    // parameters it points at must too.
    let params: &'static mut DEVICE_NOTIFY_SUBSCRIBE_PARAMETERS =
        Box::leak(Box::new(DEVICE_NOTIFY_SUBSCRIBE_PARAMETERS {
            Callback: Some(on_power_change),
            Context: std::ptr::null_mut(),
        }));
    let mut registration: *mut c_void = std::ptr::null_mut();

    let status = unsafe {
        PowerRegisterSuspendResumeNotification(
            DEVICE_NOTIFY_CALLBACK,
            HANDLE(params as *mut DEVICE_NOTIFY_SUBSCRIBE_PARAMETERS as *mut c_void),
            &mut registration,
        )
    };

    if status != ERROR_SUCCESS {
        return Err(power_error(format!(
            "PowerRegisterSuspendResumeNotification failed: {:?}",
            status
        )));
    }

    Ok(())
}
