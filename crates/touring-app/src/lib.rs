//! Application service layer - use cases, config, presets

pub mod app;
pub mod config;
pub mod constants;
pub mod repository;
