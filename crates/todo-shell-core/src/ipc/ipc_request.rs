//! Renderer → shell messages.
//!
//! The renderer posts JSON envelopes `{"id"?, "channel", "payload"?}`. An `id`
//! marks a synchronous request whose answer is sent back as an
//! [`IpcReply`](crate::IpcReply).

use crate::{MenuSource, ShellError, ShellResult, ShellSettings};

use std::{panic::Location, path::PathBuf};

use error_location::ErrorLocation;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;

/// Payload of `open-image`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OpenImagePayload {
    /// DOM dataset of the clicked image; `id` keys the cache file.
    pub dataset: ImageDataset,
    /// Base64 image data, optionally as a data URL.
    pub base64: String,
}

/// DOM dataset attached to an image element.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageDataset {
    /// Message id. The renderer may send it as a string or a number.
    pub id: Value,
}

impl OpenImagePayload {
    /// Dataset id as text.
    pub fn dataset_id(&self) -> String {
        match &self.dataset.id {
            Value::String(id) => id.clone(),
            other => other.to_string(),
        }
    }
}

/// A parsed renderer request.
#[derive(Debug, Clone, PartialEq)]
pub enum IpcRequest {
    /// `settings-apply`: replace shell settings.
    SettingsApply(ShellSettings),
    /// `show-window`: show and focus the window if hidden.
    ShowWindow,
    /// `menu-update`: new contact and conversation lists.
    MenuUpdate {
        /// Cookie header for avatar downloads.
        cookies: Option<String>,
        /// Contacts in display order.
        contacts: Vec<MenuSource>,
        /// Conversations in display order.
        conversations: Vec<MenuSource>,
    },
    /// `message-unread`: unread message count changed.
    MessageUnread {
        /// New unread count.
        counter: u32,
    },
    /// `file-paste` (sync): read an image from the clipboard.
    FilePaste,
    /// `file-download` (sync): save base64 image data.
    FileDownload {
        /// Target path chosen by the user.
        filename: PathBuf,
        /// Base64 image data.
        raw: String,
    },
    /// `open-file`: open a file with the OS handler.
    OpenFile(PathBuf),
    /// `open-folder`: open a directory with the OS handler.
    OpenFolder(PathBuf),
    /// `open-image`: cache an inline image and open it.
    OpenImage(OpenImagePayload),
    /// `open-map`: open a map URL in the browser.
    OpenMap {
        /// Map URL.
        url: String,
    },
    /// `is-suspend` (sync): query the suspend flag.
    IsSuspend,
    /// `logined`: the user authenticated.
    Logined,
}

/// A request together with its optional reply id.
#[derive(Debug, Clone, PartialEq)]
pub struct IpcEnvelope {
    /// Present for synchronous requests.
    pub id: Option<u64>,
    /// The request.
    pub request: IpcRequest,
}

#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    id: Option<u64>,
    channel: String,
    #[serde(default)]
    payload: Value,
}

#[derive(Deserialize)]
struct SettingsPayload {
    settings: ShellSettings,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct MenuUpdatePayload {
    cookies: Option<String>,
    contacts: Vec<MenuSource>,
    conversations: Vec<MenuSource>,
}

#[derive(Deserialize)]
struct UnreadPayload {
    counter: u32,
}

#[derive(Deserialize)]
struct DownloadPayload {
    filename: PathBuf,
    raw: String,
}

#[derive(Deserialize)]
struct MapPayload {
    map: String,
}

impl IpcEnvelope {
    /// Parse a message body posted by the renderer.
    #[track_caller]
    pub fn parse(body: &str) -> ShellResult<Self> {
        let raw: RawEnvelope = serde_json::from_str(body).map_err(|e| ShellError::Ipc {
            reason: format!("Invalid envelope: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let request = IpcRequest::from_channel(&raw.channel, raw.payload)?;

        Ok(Self {
            id: raw.id,
            request,
        })
    }

    /// Reply id of a body that failed to parse, when it can still be read.
    ///
    /// Lets a malformed synchronous request be answered instead of leaving
    /// the renderer waiting.
    pub fn reply_id(body: &str) -> Option<u64> {
        serde_json::from_str::<Value>(body)
            .ok()?
            .get("id")?
            .as_u64()
    }
}

impl IpcRequest {
    /// Build a request from its channel name and payload.
    #[track_caller]
    pub fn from_channel(channel: &str, payload: Value) -> ShellResult<Self> {
        let request = match channel {
            "settings-apply" => {
                let SettingsPayload { settings } = decode(channel, payload)?;
                IpcRequest::SettingsApply(settings)
            }
            "show-window" => IpcRequest::ShowWindow,
            "menu-update" => {
                let MenuUpdatePayload {
                    cookies,
                    contacts,
                    conversations,
                } = decode(channel, payload)?;
                IpcRequest::MenuUpdate {
                    cookies,
                    contacts,
                    conversations,
                }
            }
            "message-unread" => {
                let UnreadPayload { counter } = decode(channel, payload)?;
                IpcRequest::MessageUnread { counter }
            }
            "file-paste" => IpcRequest::FilePaste,
            "file-download" => {
                let DownloadPayload { filename, raw } = decode(channel, payload)?;
                IpcRequest::FileDownload { filename, raw }
            }
            "open-file" => IpcRequest::OpenFile(decode(channel, payload)?),
            "open-folder" => IpcRequest::OpenFolder(decode(channel, payload)?),
            "open-image" => IpcRequest::OpenImage(decode(channel, payload)?),
            "open-map" => {
                let MapPayload { map } = decode(channel, payload)?;
                IpcRequest::OpenMap { url: map }
            }
            "is-suspend" => IpcRequest::IsSuspend,
            "logined" => IpcRequest::Logined,
            unknown => {
                return Err(ShellError::Ipc {
                    reason: format!("Unknown channel: {}", unknown),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        Ok(request)
    }

    /// Channel name of this request.
    pub fn channel(&self) -> &'static str {
        match self {
            IpcRequest::SettingsApply(_) => "settings-apply",
            IpcRequest::ShowWindow => "show-window",
            IpcRequest::MenuUpdate { .. } => "menu-update",
            IpcRequest::MessageUnread { .. } => "message-unread",
            IpcRequest::FilePaste => "file-paste",
            IpcRequest::FileDownload { .. } => "file-download",
            IpcRequest::OpenFile(_) => "open-file",
            IpcRequest::OpenFolder(_) => "open-folder",
            IpcRequest::OpenImage(_) => "open-image",
            IpcRequest::OpenMap { .. } => "open-map",
            IpcRequest::IsSuspend => "is-suspend",
            IpcRequest::Logined => "logined",
        }
    }
}

#[track_caller]
fn decode<T: DeserializeOwned>(channel: &str, payload: Value) -> ShellResult<T> {
    serde_json::from_value(payload).map_err(|e| ShellError::Ipc {
        reason: format!("Invalid payload for {}: {}", channel, e),
        location: ErrorLocation::from(Location::caller()),
    })
}
