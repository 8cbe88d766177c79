use crate::{
    IconBatch, MainWindow, MenuModel, MenuSection, Platform, ReleaseInfo, RendererNotification,
    RestartChoice, Shell, ShellError, ShellHost, ShellPaths, ShellResult, TrayBackend, TrayGlyph,
    TrayMenuModel, UpdateController, UpdateDialogs, UpdateFeed, UpdateNotice, WindowGeometry,
};

use std::{
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;

/// Native calls recorded by [`FakeHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HostCall {
    Show,
    Hide,
    Focus,
    AlwaysOnTop(bool),
    Resizable(bool),
    Geometry(WindowGeometry),
    Release,
    PersistGeometry(WindowGeometry),
    CreateTray(u32, TrayGlyph, u32),
    SetTrayIcon(u32, TrayGlyph),
    SetTrayMenu(u32, u32),
    DestroyTray(u32),
    ScheduleTick,
    BeginCheck,
    Install(String),
    InstallOnQuit(String),
    Notice(UpdateNotice),
    ConfirmRestart(String),
    InstallMenu(Vec<String>, Vec<String>),
    ResolveIcons(IconBatch),
    OpenPath(PathBuf),
    OpenUrl(String),
    AutoLaunch(bool),
    Exit,
}

/// Fake tray handle: an id unique per created icon.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct FakeTray(pub(crate) u32);

/// In-memory host recording every call.
#[derive(Debug, Default)]
pub(crate) struct FakeHost {
    pub(crate) calls: Vec<HostCall>,
    pub(crate) notifications: Vec<RendererNotification>,
    pub(crate) visible: bool,
    pub(crate) next_tray_id: u32,
    pub(crate) live_trays: u32,
    pub(crate) restart_choice: Option<RestartChoice>,
    pub(crate) fail_install: bool,
    pub(crate) fail_open: bool,
    pub(crate) fail_resolve: bool,
    pub(crate) fail_tray_update: bool,
    pub(crate) clipboard: Option<Vec<u8>>,
}

impl FakeHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Calls matching `pred`.
    pub(crate) fn count(&self, pred: impl Fn(&HostCall) -> bool) -> usize {
        self.calls.iter().filter(|call| pred(call)).count()
    }

    pub(crate) fn clear(&mut self) {
        self.calls.clear();
        self.notifications.clear();
    }
}

#[track_caller]
fn fake_error(reason: &str) -> ShellError {
    ShellError::Desktop {
        reason: reason.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

impl MainWindow for FakeHost {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn show(&mut self) {
        self.visible = true;
        self.calls.push(HostCall::Show);
    }

    fn hide(&mut self) {
        self.visible = false;
        self.calls.push(HostCall::Hide);
    }

    fn focus(&mut self) {
        self.calls.push(HostCall::Focus);
    }

    fn set_always_on_top(&mut self, always_on_top: bool) {
        self.calls.push(HostCall::AlwaysOnTop(always_on_top));
    }

    fn set_resizable(&mut self, resizable: bool) {
        self.calls.push(HostCall::Resizable(resizable));
    }

    fn set_geometry(&mut self, geometry: WindowGeometry) {
        self.calls.push(HostCall::Geometry(geometry));
    }

    fn release(&mut self) {
        self.visible = false;
        self.calls.push(HostCall::Release);
    }

    fn persist_geometry(&mut self, geometry: &WindowGeometry) -> ShellResult<()> {
        self.calls.push(HostCall::PersistGeometry(*geometry));
        Ok(())
    }
}

impl TrayBackend for FakeHost {
    type Handle = FakeTray;

    fn create_tray(&mut self, glyph: TrayGlyph, menu: &TrayMenuModel) -> ShellResult<FakeTray> {
        self.next_tray_id += 1;
        self.live_trays += 1;
        self.calls
            .push(HostCall::CreateTray(self.next_tray_id, glyph, menu.unread()));
        Ok(FakeTray(self.next_tray_id))
    }

    fn set_tray_icon(&mut self, handle: &mut FakeTray, glyph: TrayGlyph) -> ShellResult<()> {
        self.calls.push(HostCall::SetTrayIcon(handle.0, glyph));
        if self.fail_tray_update {
            return Err(fake_error("tray icon rejected"));
        }
        Ok(())
    }

    fn set_tray_menu(&mut self, handle: &mut FakeTray, menu: &TrayMenuModel) -> ShellResult<()> {
        self.calls.push(HostCall::SetTrayMenu(handle.0, menu.unread()));
        Ok(())
    }

    fn destroy_tray(&mut self, handle: FakeTray) {
        self.live_trays -= 1;
        self.calls.push(HostCall::DestroyTray(handle.0));
    }

    fn schedule_tray_tick(&mut self) {
        self.calls.push(HostCall::ScheduleTick);
    }
}

impl UpdateFeed for FakeHost {
    fn begin_check(&mut self) {
        self.calls.push(HostCall::BeginCheck);
    }

    fn install_and_relaunch(&mut self, release: &ReleaseInfo) -> ShellResult<()> {
        self.calls.push(HostCall::Install(release.version.clone()));
        if self.fail_install {
            return Err(fake_error("installer rejected package"));
        }
        Ok(())
    }

    fn install_on_quit(&mut self, release: &ReleaseInfo) -> ShellResult<()> {
        self.calls.push(HostCall::InstallOnQuit(release.version.clone()));
        Ok(())
    }
}

impl UpdateDialogs for FakeHost {
    fn show_notice(&mut self, notice: &UpdateNotice) {
        self.calls.push(HostCall::Notice(notice.clone()));
    }

    fn confirm_restart(&mut self, release: &ReleaseInfo) -> RestartChoice {
        self.calls.push(HostCall::ConfirmRestart(release.version.clone()));
        self.restart_choice.unwrap_or(RestartChoice::Later)
    }
}

impl ShellHost for FakeHost {
    fn notify_renderer(&mut self, notification: RendererNotification) {
        self.notifications.push(notification);
    }

    fn install_app_menu(&mut self, menu: &MenuModel) -> ShellResult<()> {
        let labels = |section: MenuSection| -> Vec<String> {
            menu.rendered_labels(section)
                .into_iter()
                .map(str::to_string)
                .collect()
        };
        self.calls.push(HostCall::InstallMenu(
            labels(MenuSection::Conversations),
            labels(MenuSection::Contacts),
        ));
        Ok(())
    }

    fn resolve_menu_icons(&mut self, batch: IconBatch) -> ShellResult<()> {
        self.calls.push(HostCall::ResolveIcons(batch));
        if self.fail_resolve {
            return Err(fake_error("resolver gone"));
        }
        Ok(())
    }

    fn open_path(&mut self, path: &Path) -> ShellResult<()> {
        self.calls.push(HostCall::OpenPath(path.to_path_buf()));
        if self.fail_open {
            return Err(fake_error("no handler"));
        }
        Ok(())
    }

    fn open_url(&mut self, url: &str) -> ShellResult<()> {
        self.calls.push(HostCall::OpenUrl(url.to_string()));
        Ok(())
    }

    fn read_clipboard_png(&mut self) -> ShellResult<Option<Vec<u8>>> {
        Ok(self.clipboard.clone())
    }

    fn set_auto_launch(&mut self, enabled: bool) -> ShellResult<()> {
        self.calls.push(HostCall::AutoLaunch(enabled));
        Ok(())
    }

    fn request_exit(&mut self) {
        self.calls.push(HostCall::Exit);
    }
}

/// Shell over a [`FakeHost`] with paths under `root`.
pub(crate) fn fake_shell(platform: Platform, root: &Path) -> Shell<FakeHost> {
    Shell::new(
        FakeHost::new(),
        platform,
        ShellPaths::under(root, root.join("scratch")),
        WindowGeometry {
            x: Some(10),
            y: Some(20),
            width: 800,
            height: 600,
        },
        UpdateController::new("Todo", "1.2.0"),
    )
}
