//! Use cases

pub mod trip_service;

pub use trip_service::{parse_assignment, resolve_inputs, InputOverrides, TripService};
