//! Repository trait definitions for data persistence

use touring_types::Error;

use crate::model::TripState;

/// Repository for the remembered inputs and saved scenarios
pub trait TripStateRepository {
    /// Load the stored state, or an empty one if nothing is stored
    fn load(&self) -> Result<TripState, Error>;

    /// Replace the stored state
    fn save(&self, state: &TripState) -> Result<(), Error>;

    /// Forget the remembered inputs, keeping scenarios
    fn clear_last(&self) -> Result<(), Error> {
        let mut state = self.load()?;
        state.last = None;
        self.save(&state)
    }
}
