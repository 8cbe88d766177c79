mod main_window;
mod navigation;
mod window_geometry;
mod window_lifecycle;
mod window_phase;

pub use {
    main_window::MainWindow,
    navigation::{is_in_app_navigation, origin_of},
    window_geometry::WindowGeometry,
    window_lifecycle::{CloseOutcome, WindowLifecycle},
    window_phase::WindowPhase,
};
