//! Persistence implementations
//!
//! This module provides file-based implementations of the repository traits.

mod file_trip_state_repo;

pub use file_trip_state_repo::FileTripStateRepository;
