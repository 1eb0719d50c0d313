//! Chartmark Settings Crate
//!
//! Loads and saves the annotation theme and interaction tolerances.

pub mod config;
pub mod error;

pub use config::{Config, InteractionSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
