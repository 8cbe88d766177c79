//! Routes renderer requests into the shell.

use crate::{
    IpcEnvelope, IpcReply, IpcRequest, MenuSection, MenuSource, OpenImagePayload, PasteResult,
    RendererNotification, Shell, ShellHost, ShellResult, write_cached_image, write_download,
    write_paste_image,
};

use std::path::Path;

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, error, instrument, warn};

impl<H: ShellHost> Shell<H> {
    /// Handle one renderer request.
    ///
    /// Returns the reply for synchronous channels. Everything else is
    /// fire-and-forget and yields `None`.
    #[instrument(skip_all, fields(channel = envelope.request.channel(), id = ?envelope.id))]
    pub fn handle_ipc(&mut self, envelope: IpcEnvelope) -> Option<IpcReply> {
        let IpcEnvelope { id, request } = envelope;

        let value = match request {
            IpcRequest::SettingsApply(settings) => {
                self.apply_settings(settings);
                None
            }
            IpcRequest::ShowWindow => {
                self.show_window();
                None
            }
            IpcRequest::MenuUpdate {
                cookies,
                contacts,
                conversations,
            } => {
                self.on_menu_update(cookies, contacts, conversations);
                None
            }
            IpcRequest::MessageUnread { counter } => {
                if self.tray_visible() {
                    self.update_tray(counter);
                } else {
                    debug!(counter, "Tray disabled, unread count ignored");
                }
                None
            }
            IpcRequest::FilePaste => Some(self.paste_from_clipboard()),
            IpcRequest::FileDownload { filename, raw } => {
                Some(match write_download(&filename, &raw) {
                    Ok(path) => Value::String(path.display().to_string()),
                    Err(e) => {
                        error!(error = ?e, "Failed to save download");
                        error_value(&e)
                    }
                })
            }
            IpcRequest::OpenFile(path) | IpcRequest::OpenFolder(path) => {
                self.open_with_os(&path);
                None
            }
            IpcRequest::OpenImage(payload) => {
                self.open_image(&payload);
                None
            }
            IpcRequest::OpenMap { url } => {
                self.on_external_navigation(&url);
                None
            }
            IpcRequest::IsSuspend => Some(Value::Bool(self.suspended)),
            IpcRequest::Logined => {
                self.on_logined();
                None
            }
        };

        match (id, value) {
            (Some(id), Some(value)) => Some(IpcReply { id, value }),
            (None, Some(_)) => {
                warn!("Synchronous channel called without reply id");
                None
            }
            (_, None) => None,
        }
    }

    fn on_menu_update(
        &mut self,
        cookies: Option<String>,
        contacts: Vec<MenuSource>,
        conversations: Vec<MenuSource>,
    ) {
        if !self.platform.is_primary_desktop() {
            debug!("No application menu on this platform");
            return;
        }

        let Some(batch) = self.menu.plan_update(cookies, contacts, conversations) else {
            return;
        };

        let sections: Vec<MenuSection> = batch.sections.iter().map(|s| s.section).collect();
        if let Err(e) = self.host.resolve_menu_icons(batch) {
            error!(error = ?e, "Menu icon batch rejected");
            self.menu.cancel_in_flight(&sections);
        }
    }

    fn paste_from_clipboard(&mut self) -> Value {
        let result = self.host.read_clipboard_png().and_then(|png| match png {
            Some(png) => {
                let path = write_paste_image(&self.paths.scratch_dir, &png)?;
                Ok(PasteResult {
                    has_image: true,
                    filename: Some(path.display().to_string()),
                    raw: Some(STANDARD.encode(&png)),
                })
            }
            None => Ok(PasteResult::empty()),
        });

        match result {
            Ok(paste) => to_value(&paste),
            Err(e) => {
                error!(error = ?e, "Failed to paste clipboard image");
                error_value(&e)
            }
        }
    }

    fn open_with_os(&mut self, path: &Path) {
        if let Err(e) = self.host.open_path(path) {
            error!(error = ?e, path = ?path, "Failed to open path");
        }
    }

    fn open_image(&mut self, payload: &OpenImagePayload) {
        let id = payload.dataset_id();

        let opened: ShellResult<()> =
            write_cached_image(&self.paths.images_dir, &id, &payload.base64)
                .and_then(|path| self.host.open_path(&path));

        if let Err(e) = opened {
            error!(error = ?e, id = %id, "Failed to open image");
            self.host.notify_renderer(RendererNotification::ShowErrors {
                message: e.to_string(),
            });
        }
    }
}

fn to_value<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| json!({ "error": e.to_string() }))
}

fn error_value(e: &impl std::fmt::Display) -> Value {
    json!({ "error": e.to_string() })
}
