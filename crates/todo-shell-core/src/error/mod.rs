use std::{panic::Location, path::PathBuf, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Shell orchestration errors with source location tracking.
#[derive(Error, Debug)]
pub enum ShellError {
    /// IO error from filesystem operations.
    #[error("IO error: {source} {location}")]
    Io {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Image could not be decoded, resized or encoded.
    #[error("Image error: {reason} {location}")]
    Image {
        /// Description of the image failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Avatar download failed.
    #[error("Avatar fetch failed: {reason} {location}")]
    Fetch {
        /// Description of the network failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Renderer supplied base64 data that does not decode.
    #[error("Invalid base64 payload: {source} {location}")]
    Base64 {
        /// The underlying decode error.
        #[source]
        source: base64::DecodeError,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Target file already exists and must not be overwritten.
    #[error("Refusing to overwrite existing file: {path:?} {location}")]
    FileExists {
        /// Path of the existing file.
        path: PathBuf,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Renderer message could not be understood.
    #[error("Malformed IPC message: {reason} {location}")]
    Ipc {
        /// Description of the parse failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Native tray operation failed.
    #[error("Tray error: {reason} {location}")]
    Tray {
        /// Description of the tray failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Native menu operation failed.
    #[error("Menu error: {reason} {location}")]
    Menu {
        /// Description of the menu failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Update check, download or install failed.
    #[error("Update error: {reason} {location}")]
    Update {
        /// Description of the update failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// OS integration (opener, clipboard, auto-launch) failed.
    #[error("Desktop integration error: {reason} {location}")]
    Desktop {
        /// Description of the integration failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl From<std::io::Error> for ShellError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        ShellError::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<base64::DecodeError> for ShellError {
    #[track_caller]
    fn from(source: base64::DecodeError) -> Self {
        ShellError::Base64 {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Result type alias using [`ShellError`].
pub type Result<T> = StdResult<T, ShellError>;
