//! Trip Service - resolving inputs, calculating, and managing scenarios
//!
//! Inputs are layered:
//! 1. a preset, else the remembered inputs, else the defaults
//! 2. explicit per-field overrides
//! 3. `KEY=VALUE` assignments (field id or share key)

use chrono::Utc;
use touring_domain::model::SaveOutcome;
use touring_domain::repository::TripStateRepository;
use touring_domain::{compute, ComputedResult, Field, RawInputs, Scenario, ScenarioBook, TripState};
use touring_types::{Error, Result};

use crate::constants::get_preset;

/// Input adjustments on top of the base inputs
#[derive(Debug, Clone, Default)]
pub struct InputOverrides {
    /// Preset key to start from instead of the remembered inputs
    pub preset: Option<String>,

    /// Per-field values
    pub fields: Vec<(Field, String)>,

    /// Raw `KEY=VALUE` strings, applied last
    pub assignments: Vec<String>,
}

impl InputOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }

    pub fn with_field(mut self, field: Field, value: impl Into<String>) -> Self {
        self.fields.push((field, value.into()));
        self
    }

    pub fn with_assignment(mut self, assignment: impl Into<String>) -> Self {
        self.assignments.push(assignment.into());
        self
    }
}

/// Split `KEY=VALUE` into its field and value
pub fn parse_assignment(assignment: &str) -> Result<(Field, String)> {
    let (key, value) = assignment
        .split_once('=')
        .ok_or_else(|| Error::InvalidAssignment(assignment.to_string()))?;
    let field = Field::from_key(key).ok_or_else(|| Error::UnknownField(key.trim().to_string()))?;
    Ok((field, value.trim().to_string()))
}

/// Build the raw inputs for one calculation
pub fn resolve_inputs(last: Option<&RawInputs>, overrides: &InputOverrides) -> Result<RawInputs> {
    let mut inputs = match (&overrides.preset, last) {
        (Some(key), _) => {
            let preset = get_preset(key).ok_or_else(|| Error::UnknownPreset(key.clone()))?;
            RawInputs::from(&preset.inputs)
        }
        (None, Some(last)) => last.clone(),
        (None, None) => RawInputs::defaults(),
    };

    for (field, value) in &overrides.fields {
        inputs.set(*field, value.as_str());
    }
    for assignment in &overrides.assignments {
        let (field, value) = parse_assignment(assignment)?;
        inputs.set(field, value);
    }

    Ok(inputs)
}

/// Use cases over an optional state repository
///
/// Without a repository nothing is remembered and scenario operations
/// fail with [`Error::StateDisabled`].
pub struct TripService<R> {
    repo: Option<R>,
}

impl<R: TripStateRepository> TripService<R> {
    pub fn new(repo: Option<R>) -> Self {
        Self { repo }
    }

    pub fn remembers(&self) -> bool {
        self.repo.is_some()
    }

    fn repo(&self) -> Result<&R> {
        self.repo.as_ref().ok_or(Error::StateDisabled)
    }

    fn load_state(&self) -> Result<TripState> {
        match &self.repo {
            Some(repo) => repo.load(),
            None => Ok(TripState::default()),
        }
    }

    /// Resolve inputs against the remembered ones without computing
    pub fn resolve(&self, overrides: &InputOverrides) -> Result<RawInputs> {
        let state = self.load_state()?;
        resolve_inputs(state.last.as_ref(), overrides)
    }

    /// Compute a trip; the resolved inputs are remembered when `remember` is set
    pub fn calculate(
        &self,
        overrides: &InputOverrides,
        remember: bool,
    ) -> Result<(RawInputs, ComputedResult)> {
        let mut state = self.load_state()?;
        let inputs = resolve_inputs(state.last.as_ref(), overrides)?;
        let result = compute(&inputs);

        if let (true, Some(repo)) = (remember, &self.repo) {
            state.last = Some(inputs.clone());
            repo.save(&state)?;
            tracing::info!("remembered inputs");
        }

        Ok((inputs, result))
    }

    /// Forget the remembered inputs
    pub fn reset(&self) -> Result<()> {
        if let Some(repo) = &self.repo {
            repo.clear_last()?;
            tracing::info!("cleared remembered inputs");
        }
        Ok(())
    }

    pub fn scenarios(&self) -> Result<ScenarioBook> {
        Ok(self.repo()?.load()?.scenarios)
    }

    /// Save the resolved inputs as a named scenario
    pub fn save_scenario(
        &self,
        name: &str,
        overrides: &InputOverrides,
    ) -> Result<(SaveOutcome, Scenario)> {
        let repo = self.repo()?;
        let mut state = repo.load()?;
        let inputs = resolve_inputs(state.last.as_ref(), overrides)?;

        let outcome = state.scenarios.save(name, inputs, Utc::now())?;
        let saved = state
            .scenarios
            .first()
            .cloned()
            .ok_or_else(|| touring_types::ScenarioError::NotFound(name.to_string()))?;
        repo.save(&state)?;
        tracing::info!(id = %saved.id, name = %saved.name, ?outcome, "saved scenario");

        Ok((outcome, saved))
    }

    /// Make a scenario's inputs the remembered ones and compute it
    pub fn load_scenario(&self, id_or_name: &str) -> Result<(Scenario, ComputedResult)> {
        let repo = self.repo()?;
        let mut state = repo.load()?;
        let scenario = state
            .scenarios
            .find(id_or_name)
            .cloned()
            .ok_or_else(|| touring_types::ScenarioError::NotFound(id_or_name.to_string()))?;

        state.last = Some(scenario.inputs.clone());
        repo.save(&state)?;
        tracing::info!(id = %scenario.id, "loaded scenario");

        let result = compute(&scenario.inputs);
        Ok((scenario, result))
    }

    pub fn delete_scenario(&self, id_or_name: &str) -> Result<Scenario> {
        let repo = self.repo()?;
        let mut state = repo.load()?;
        let removed = state.scenarios.remove(id_or_name)?;
        repo.save(&state)?;
        tracing::info!(id = %removed.id, "deleted scenario");
        Ok(removed)
    }

    /// Delete every scenario, returning how many were removed
    pub fn clear_scenarios(&self) -> Result<usize> {
        let repo = self.repo()?;
        let mut state = repo.load()?;
        let count = state.scenarios.len();
        state.scenarios.clear();
        repo.save(&state)?;
        tracing::info!(count, "cleared scenarios");
        Ok(count)
    }
}
