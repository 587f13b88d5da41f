//! Domain model types

pub mod field;
pub mod inputs;
pub mod result;
mod salvage;
pub mod scenario;
pub mod state;

pub use field::Field;
pub use inputs::{RawInputs, TripInputs};
pub use result::{ComputedResult, Delta, Sensitivity};
pub use scenario::{
    ComparisonRow, ComparisonTable, SaveOutcome, Scenario, ScenarioBook, ScenarioSummary,
    MAX_SCENARIOS, MAX_SCENARIO_NAME_CHARS,
};
pub use state::TripState;
