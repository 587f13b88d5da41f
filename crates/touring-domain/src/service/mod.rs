//! Domain services

pub mod calculator;
pub mod format;

pub use calculator::{clamp_min, compute, sanitize, to_number};
pub use format::{format_currency, format_delta, format_number, DEFAULT_FRACTION_DIGITS};
