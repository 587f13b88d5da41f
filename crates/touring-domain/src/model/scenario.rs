//! Named trip scenarios and their side-by-side comparison

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use touring_types::ScenarioError;
use uuid::Uuid;

use super::inputs::RawInputs;
use super::salvage::Salvaged;
use crate::service::compute;

/// Maximum number of saved scenarios
pub const MAX_SCENARIOS: usize = 5;
/// Scenario names are cut to this many characters
pub const MAX_SCENARIO_NAME_CHARS: usize = 24;

/// A saved set of trip inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub inputs: RawInputs,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new scenario was added
    Saved,
    /// A scenario with the same name was overwritten
    Updated,
}

/// Cost figures of one scenario, as shown in lists and comparisons
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    pub id: String,
    pub name: String,
    pub total: f64,
    pub per_person: f64,
    pub fuel: f64,
    pub highway: f64,
    pub meals: f64,
    pub lodging: f64,
    pub sightseeing: f64,
    pub other: f64,
}

impl ScenarioSummary {
    pub fn of(scenario: &Scenario) -> Self {
        let result = compute(&scenario.inputs);
        Self {
            id: scenario.id.clone(),
            name: scenario.name.clone(),
            total: result.total,
            per_person: result.per_person,
            fuel: result.fuel_cost,
            highway: result.inputs.highway,
            meals: result.inputs.meals,
            lodging: result.inputs.lodging,
            sightseeing: result.inputs.sightseeing,
            other: result.inputs.other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub values: Vec<f64>,
}

/// One column per scenario, one row per cost figure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub names: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Collapse whitespace runs, trim, and cut to [`MAX_SCENARIO_NAME_CHARS`]
pub fn sanitize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(MAX_SCENARIO_NAME_CHARS)
        .collect::<String>()
        .trim_end()
        .to_string()
}

fn new_scenario_id() -> String {
    format!("scn_{}", Uuid::new_v4().simple())
}

/// Saved scenarios, most recently saved first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Salvaged<Scenario>>", into = "Vec<Scenario>")]
pub struct ScenarioBook {
    scenarios: Vec<Scenario>,
}

impl From<Vec<Scenario>> for ScenarioBook {
    /// Entries without a usable name are dropped
    fn from(scenarios: Vec<Scenario>) -> Self {
        Self {
            scenarios: scenarios
                .into_iter()
                .filter(|s| !s.name.trim().is_empty())
                .collect(),
        }
    }
}

impl From<Vec<Salvaged<Scenario>>> for ScenarioBook {
    /// Malformed entries are skipped, the rest are kept
    fn from(entries: Vec<Salvaged<Scenario>>) -> Self {
        Self::from(
            entries
                .into_iter()
                .filter_map(Salvaged::into_valid)
                .collect::<Vec<_>>(),
        )
    }
}

impl From<ScenarioBook> for Vec<Scenario> {
    fn from(book: ScenarioBook) -> Self {
        book.scenarios
    }
}

impl ScenarioBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.scenarios.len() >= MAX_SCENARIOS
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn first(&self) -> Option<&Scenario> {
        self.scenarios.first()
    }

    /// Save `inputs` under `name`
    ///
    /// An existing scenario with the same (sanitized) name is overwritten
    /// and moved to the front; otherwise a new one is inserted at the front
    /// as long as the book is not full.
    pub fn save(
        &mut self,
        name: &str,
        inputs: RawInputs,
        now: DateTime<Utc>,
    ) -> Result<SaveOutcome, ScenarioError> {
        let name = sanitize_name(name);
        if name.is_empty() {
            return Err(ScenarioError::EmptyName);
        }

        if let Some(index) = self.scenarios.iter().position(|s| s.name == name) {
            let mut existing = self.scenarios.remove(index);
            existing.inputs = inputs;
            existing.updated_at = now;
            self.scenarios.insert(0, existing);
            return Ok(SaveOutcome::Updated);
        }

        if self.is_full() {
            return Err(ScenarioError::LimitReached { max: MAX_SCENARIOS });
        }

        self.scenarios.insert(
            0,
            Scenario {
                id: new_scenario_id(),
                name,
                inputs,
                updated_at: now,
            },
        );
        Ok(SaveOutcome::Saved)
    }

    fn position(&self, id_or_name: &str) -> Option<usize> {
        self.scenarios
            .iter()
            .position(|s| s.id == id_or_name)
            .or_else(|| {
                let name = sanitize_name(id_or_name);
                self.scenarios.iter().position(|s| s.name == name)
            })
    }

    /// Look up by id, falling back to name
    pub fn find(&self, id_or_name: &str) -> Option<&Scenario> {
        self.position(id_or_name).map(|i| &self.scenarios[i])
    }

    pub fn remove(&mut self, id_or_name: &str) -> Result<Scenario, ScenarioError> {
        self.position(id_or_name)
            .map(|i| self.scenarios.remove(i))
            .ok_or_else(|| ScenarioError::NotFound(id_or_name.to_string()))
    }

    pub fn clear(&mut self) {
        self.scenarios.clear();
    }

    pub fn summaries(&self) -> Vec<ScenarioSummary> {
        self.scenarios.iter().map(ScenarioSummary::of).collect()
    }

    pub fn comparison(&self) -> ComparisonTable {
        let summaries = self.summaries();
        let row = |label: &'static str, pick: fn(&ScenarioSummary) -> f64| ComparisonRow {
            label,
            values: summaries.iter().map(pick).collect(),
        };

        let rows = vec![
            row("合計", |s| s.total),
            row("1人あたり", |s| s.per_person),
            row("ガソリン", |s| s.fuel),
            row("高速料金", |s| s.highway),
            row("食事", |s| s.meals),
            row("宿泊", |s| s.lodging),
            row("観光/温泉", |s| s.sightseeing),
            row("その他", |s| s.other),
        ];

        ComparisonTable {
            names: summaries.iter().map(|s| s.name.clone()).collect(),
            rows,
        }
    }
}
