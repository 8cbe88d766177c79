mod avatar_source;
mod icon_cache;
mod icon_image;

pub use {
    avatar_source::{AvatarSource, BROWSER_USER_AGENT},
    icon_cache::IconCache,
    icon_image::{IconImage, MENU_ICON_SIZE},
};
