//! Clipboard image access for the renderer's paste channel.

use crate::{AppError, AppResult};

use std::{io::Cursor, panic::Location};

use arboard::{Clipboard, ImageData};
use error_location::ErrorLocation;
use image::{ImageFormat, RgbaImage};
use tracing::{debug, info, instrument};

/// Reads images from the system clipboard as PNG.
pub struct ClipboardReader {
    pub(crate) clipboard: Clipboard,
}

impl ClipboardReader {
    /// Open the system clipboard.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let clipboard = Clipboard::new().map_err(|e| AppError::ClipboardError {
            reason: format!("Failed to initialize clipboard: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!("Clipboard initialized");

        Ok(Self { clipboard })
    }

    /// Current clipboard image encoded as PNG, or `None` if it holds no image.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn read_png(&mut self) -> AppResult<Option<Vec<u8>>> {
        let image = match self.clipboard.get_image() {
            Ok(image) => image,
            Err(arboard::Error::ContentNotAvailable) => {
                debug!("Clipboard holds no image");
                return Ok(None);
            }
            Err(e) => {
                return Err(AppError::ClipboardError {
                    reason: format!("Failed to read clipboard image: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        encode_png(image).map(Some)
    }
}

/// Encode raw clipboard RGBA pixels as PNG.
#[track_caller]
pub(crate) fn encode_png(image: ImageData<'_>) -> AppResult<Vec<u8>> {
    let (width, height) = (image.width as u32, image.height as u32);

    let rgba = RgbaImage::from_raw(width, height, image.bytes.into_owned()).ok_or_else(|| {
        AppError::ClipboardError {
            reason: format!("Clipboard image buffer does not match {}x{}", width, height),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    let mut png = Vec::new();
    rgba.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| AppError::ClipboardError {
            reason: format!("Failed to encode clipboard image: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    debug!(width, height, size = png.len(), "Clipboard image encoded");
    Ok(png)
}
