//! Domain layer for touring-cost
//!
//! The calculator in [`service::calculator`] is pure: it takes the raw,
//! user-entered trip parameters and derives every cost figure from them.
//! Everything stateful (remembered inputs, saved scenarios) is modeled as
//! plain values handed through [`repository::TripStateRepository`].

pub mod model;
pub mod repository;
pub mod service;

pub use model::{
    ComputedResult, Delta, Field, RawInputs, Scenario, ScenarioBook, Sensitivity, TripInputs,
    TripState,
};
pub use service::{compute, format_currency, format_delta, format_number};
