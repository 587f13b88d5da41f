//! Built-in constants for trip calculation

pub mod presets;

pub use presets::{get_preset, Preset, PRESETS};
