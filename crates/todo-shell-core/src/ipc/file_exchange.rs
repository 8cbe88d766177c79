//! Filesystem side of the renderer's clipboard and download channels.

use crate::{ShellError, ShellResult};

use std::{
    fs::OpenOptions,
    io::{ErrorKind, Write},
    panic::Location,
    path::{Path, PathBuf},
};

use base64::{Engine, engine::general_purpose::STANDARD};
use error_location::ErrorLocation;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Decode base64 data, accepting an optional `data:<mime>;base64,` prefix.
#[track_caller]
pub fn decode_data_url(data: &str) -> ShellResult<Vec<u8>> {
    let encoded = match data.strip_prefix("data:") {
        Some(rest) => match rest.split_once(',') {
            Some((_, body)) => body,
            None => {
                return Err(ShellError::Ipc {
                    reason: "Data URL without payload".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        },
        None => data,
    };

    Ok(STANDARD.decode(encoded.trim())?)
}

/// Write pasted PNG bytes to a fresh file in `scratch_dir`.
#[instrument(skip(png), fields(size = png.len()))]
pub fn write_paste_image(scratch_dir: &Path, png: &[u8]) -> ShellResult<PathBuf> {
    let path = scratch_dir.join(format!("{}.png", Uuid::new_v4()));
    std::fs::write(&path, png)?;

    debug!(path = ?path, "Pasted image written");
    Ok(path)
}

/// Save base64 image data to `path`. An existing file is never overwritten.
#[instrument(skip(raw))]
pub fn write_download(path: &Path, raw: &str) -> ShellResult<PathBuf> {
    let bytes = decode_data_url(raw)?;

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(ShellError::FileExists {
                path: path.to_path_buf(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Err(e) => return Err(e.into()),
    };

    file.write_all(&bytes)?;
    file.flush()?;

    debug!(size = bytes.len(), "Download saved");
    Ok(path.to_path_buf())
}

/// Cache an inline chat image as `img_<id>` under `images_dir`.
///
/// Rewrites the file if it exists; the content for an id never changes.
#[instrument(skip(base64))]
pub fn write_cached_image(images_dir: &Path, id: &str, base64: &str) -> ShellResult<PathBuf> {
    if id.is_empty() || id.contains(['/', '\\']) || id.contains("..") {
        return Err(ShellError::Ipc {
            reason: format!("Invalid image id: {:?}", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let bytes = decode_data_url(base64)?;

    let path = images_dir.join(format!("img_{}", id));
    std::fs::write(&path, bytes)?;

    Ok(path)
}
