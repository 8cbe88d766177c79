use std::{fmt, sync::Arc};

use image::{
    RgbaImage,
    imageops::{self, FilterType},
};
use tracing::warn;

/// Edge length of menu icons, in pixels.
pub const MENU_ICON_SIZE: u32 = 24;

const PLACEHOLDER_PNG: &[u8] = include_bytes!("../../resources/images/user-fallback.png");

/// Decoded, menu-sized RGBA image. Cheap to clone.
#[derive(Clone, PartialEq)]
pub struct IconImage(Arc<RgbaImage>);

impl IconImage {
    /// Resize `image` to the fixed menu icon square.
    pub fn menu_sized(image: &RgbaImage) -> Self {
        Self(Arc::new(imageops::resize(
            image,
            MENU_ICON_SIZE,
            MENU_ICON_SIZE,
            FilterType::Triangle,
        )))
    }

    /// The bundled "unknown user" avatar.
    pub fn placeholder() -> Self {
        match image::load_from_memory(PLACEHOLDER_PNG) {
            Ok(image) => Self::menu_sized(&image.into_rgba8()),
            Err(e) => {
                warn!(error = %e, "Bundled avatar placeholder failed to decode");
                Self(Arc::new(RgbaImage::new(MENU_ICON_SIZE, MENU_ICON_SIZE)))
            }
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.0.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.0.height()
    }

    /// Raw RGBA8 pixel data, row major.
    pub fn rgba(&self) -> &[u8] {
        self.0.as_raw()
    }
}

impl fmt::Debug for IconImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
