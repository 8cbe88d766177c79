mod click_detector;
mod fake_host;
mod icon_cache;
mod tray;
mod update;
