//! Computed cost breakdown

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::inputs::TripInputs;

/// A sensitivity delta in 円, or the marker that it does not apply
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Delta {
    Value(f64),
    #[default]
    NotApplicable,
}

impl Delta {
    /// `Value(f())` when `applies`, otherwise `NotApplicable`
    pub fn when(applies: bool, f: impl FnOnce() -> f64) -> Self {
        if applies {
            Delta::Value(f())
        } else {
            Delta::NotApplicable
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Delta::Value(v) => Some(v),
            Delta::NotApplicable => None,
        }
    }

    pub fn is_applicable(self) -> bool {
        matches!(self, Delta::Value(_))
    }
}

impl Serialize for Delta {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Delta::Value(v) => serializer.serialize_f64(*v),
            Delta::NotApplicable => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Delta {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.map_or(Delta::NotApplicable, Delta::Value))
    }
}

/// Fuel cost changes under single-parameter perturbations
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sensitivity {
    /// Extra fuel cost for 10 more km
    pub distance_plus10: Delta,
    /// Fuel cost change if efficiency drops by 1 km/L
    pub fuel_efficiency_minus1: Delta,
    /// Extra fuel cost if the fuel price rises by 10 円/L
    pub price_plus10: Delta,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedResult {
    pub inputs: TripInputs,
    pub fuel_liters: f64,
    pub fuel_cost: f64,
    pub total: f64,
    pub per_person: f64,
    pub sensitivity: Sensitivity,
}

impl ComputedResult {
    /// Labeled cost items that make up the total, in display order
    pub fn cost_items(&self) -> [(&'static str, f64); 6] {
        [
            ("ガソリン", self.fuel_cost),
            ("高速料金", self.inputs.highway),
            ("食事", self.inputs.meals),
            ("宿泊", self.inputs.lodging),
            ("観光/温泉", self.inputs.sightseeing),
            ("その他", self.inputs.other),
        ]
    }
}
