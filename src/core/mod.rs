//! Core module - application infrastructure around the rules engine
//!
//! - [`error`] - [`CoreError`], the front-end's error type
//! - [`logging`] - tracing subscriber setup
//! - [`settings`] / [`settings_persistence`] - user preferences and where they live on disk

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use logging::init_logging;
pub use settings::Settings;
pub use settings_persistence::{load_settings, load_settings_from, save_settings, save_settings_to, settings_path};
