//! Modal update dialogs via `rfd`.

use crate::NativeHost;

use todo_shell_core::{
    NoticeLevel, RESTART_PROMPT, ReleaseInfo, RestartChoice, UpdateDialogs, UpdateNotice,
};

use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use tracing::{debug, instrument};

const RESTART_BUTTON: &str = "Restart";
const LATER_BUTTON: &str = "Later";

impl UpdateDialogs for NativeHost {
    #[instrument(skip(self))]
    fn show_notice(&mut self, notice: &UpdateNotice) {
        let level = match notice.level() {
            NoticeLevel::Info => MessageLevel::Info,
            NoticeLevel::Error => MessageLevel::Error,
        };

        MessageDialog::new()
            .set_level(level)
            .set_title(&self.app_name)
            .set_description(format!("{}\n\n{}", notice.message(), notice.detail()))
            .set_buttons(MessageButtons::OkCustom(notice.button().to_string()))
            .show();
    }

    #[instrument(skip(self), fields(version = %release.version))]
    fn confirm_restart(&mut self, release: &ReleaseInfo) -> RestartChoice {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(&self.app_name)
            .set_description(format!("{}\n\n{}", RESTART_PROMPT, release.restart_detail()))
            .set_buttons(MessageButtons::OkCancelCustom(
                RESTART_BUTTON.to_string(),
                LATER_BUTTON.to_string(),
            ))
            .show();

        let choice = restart_choice(&result);
        debug!(?choice, "Restart dialog answered");
        choice
    }
}

/// Map the dialog result; anything but an explicit restart postpones.
pub(crate) fn restart_choice(result: &MessageDialogResult) -> RestartChoice {
    match result {
        MessageDialogResult::Ok | MessageDialogResult::Yes => RestartChoice::Restart,
        MessageDialogResult::Custom(label) if label == RESTART_BUTTON => RestartChoice::Restart,
        _ => RestartChoice::Later,
    }
}
