//! Overlay settings - display configuration shared by every presenter.

mod settings_model;

pub use settings_model::OverlayConfig;
