//! `NSWorkspace` will-sleep and did-wake notifications.

use super::{PowerEvent, forward, power_error};
use crate::AppResult;

use objc2::{
    msg_send,
    runtime::{AnyClass, AnyObject, ClassBuilder, Sel},
    sel,
};
use objc2_app_kit::{
    NSWorkspace, NSWorkspaceDidWakeNotification, NSWorkspaceWillSleepNotification,
};

unsafe extern "C" fn will_sleep(_this: *const AnyObject, _sel: Sel, _note: *const AnyObject) {
    forward(PowerEvent::Suspend);
}

unsafe extern "C" fn did_wake(_this: *const AnyObject, _sel: Sel, _note: *const AnyObject) {
    forward(PowerEvent::Resume);
}

#[track_caller]
pub(super) fn subscribe() -> AppResult<()> {
    let superclass = AnyClass::get(c"NSObject")
        .ok_or_else(|| power_error("NSObject class not found".to_string()))?;
    let mut builder = ClassBuilder::new(c"TodoShellPowerObserver", superclass)
        .ok_or_else(|| power_error("Power observer class already registered".to_string()))?;

    unsafe {
        builder.add_method(
            sel!(willSleep:),
            will_sleep as unsafe extern "C" fn(*const AnyObject, Sel, *const AnyObject),
        );
        builder.add_method(
            sel!(didWake:),
            did_wake as unsafe extern "C" fn(*const AnyObject, Sel, *const AnyObject),
        );
    }
    let class = builder.register();

    // The observer lives for the rest of the process.
    unsafe {
        let observer: *mut AnyObject = msg_send![class, new];
        let center = NSWorkspace::sharedWorkspace().notificationCenter();
        let no_object: *const AnyObject = std::ptr::null();

        let _: () = msg_send![
            &*center,
            addObserver: observer,
            selector: sel!(willSleep:),
            name: NSWorkspaceWillSleepNotification,
            object: no_object
        ];
        let _: () = msg_send![
            &*center,
            addObserver: observer,
            selector: sel!(didWake:),
            name: NSWorkspaceDidWakeNotification,
            object: no_object
        ];
    }

    Ok(())
}
