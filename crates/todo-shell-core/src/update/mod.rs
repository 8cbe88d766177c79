mod release_version;
mod update_controller;
mod update_host;
mod update_notice;
mod update_state;

pub use {
    release_version::is_newer_version,
    update_controller::{UpdateController, UpdateOutcome},
    update_host::{UpdateDialogs, UpdateFeed},
    update_notice::{NoticeLevel, RESTART_PROMPT, UpdateNotice},
    update_state::{ReleaseInfo, RestartChoice, UpdateEvent, UpdateState},
};
