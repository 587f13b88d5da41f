//! Trip input records

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use super::field::Field;

/// Unsanitized trip parameters as entered by the user
///
/// Every field is free-form text that is expected to hold a number or
/// nothing. The calculator coerces and clamps them, so no value here is
/// ever rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawInputs {
    #[serde(deserialize_with = "lenient_field")]
    pub distance: String,
    #[serde(deserialize_with = "lenient_field")]
    pub fuel_efficiency: String,
    #[serde(deserialize_with = "lenient_field")]
    pub gas_price: String,
    #[serde(deserialize_with = "lenient_field")]
    pub highway: String,
    #[serde(deserialize_with = "lenient_field")]
    pub meals: String,
    #[serde(deserialize_with = "lenient_field")]
    pub lodging: String,
    #[serde(deserialize_with = "lenient_field")]
    pub sightseeing: String,
    #[serde(deserialize_with = "lenient_field")]
    pub other: String,
    #[serde(deserialize_with = "lenient_field")]
    pub people: String,
}

/// Accepts any JSON value for a raw field
///
/// Booleans keep their text form, which coerces to 0. Arrays and objects
/// read as empty.
fn lenient_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Text(String),
        Number(f64),
        Flag(bool),
        Other(IgnoredAny),
    }

    Ok(match Option::<Lenient>::deserialize(deserializer)? {
        Some(Lenient::Text(text)) => text,
        Some(Lenient::Number(n)) => n.to_string(),
        Some(Lenient::Flag(flag)) => flag.to_string(),
        Some(Lenient::Other(_)) | None => String::new(),
    })
}

impl RawInputs {
    /// The form defaults (200 km, 25 km/L, 170 円/L, ...)
    pub fn defaults() -> Self {
        Self::from(&TripInputs::defaults())
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Distance => &self.distance,
            Field::FuelEfficiency => &self.fuel_efficiency,
            Field::GasPrice => &self.gas_price,
            Field::Highway => &self.highway,
            Field::Meals => &self.meals,
            Field::Lodging => &self.lodging,
            Field::Sightseeing => &self.sightseeing,
            Field::Other => &self.other,
            Field::People => &self.people,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Distance => &mut self.distance,
            Field::FuelEfficiency => &mut self.fuel_efficiency,
            Field::GasPrice => &mut self.gas_price,
            Field::Highway => &mut self.highway,
            Field::Meals => &mut self.meals,
            Field::Lodging => &mut self.lodging,
            Field::Sightseeing => &mut self.sightseeing,
            Field::Other => &mut self.other,
            Field::People => &mut self.people,
        };
        *slot = value.into();
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}

impl From<&TripInputs> for RawInputs {
    fn from(inputs: &TripInputs) -> Self {
        let mut raw = RawInputs::default();
        for field in Field::ALL {
            raw.set(field, inputs.get(field).to_string());
        }
        raw
    }
}

/// Sanitized trip parameters
///
/// Produced by the calculator: every value is finite and non-negative,
/// and `people` is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripInputs {
    /// km
    pub distance: f64,
    /// km per liter
    pub fuel_efficiency: f64,
    /// 円 per liter
    pub gas_price: f64,
    pub highway: f64,
    pub meals: f64,
    pub lodging: f64,
    pub sightseeing: f64,
    pub other: f64,
    pub people: f64,
}

impl TripInputs {
    pub const fn defaults() -> Self {
        Self {
            distance: 200.0,
            fuel_efficiency: 25.0,
            gas_price: 170.0,
            highway: 0.0,
            meals: 2000.0,
            lodging: 0.0,
            sightseeing: 1000.0,
            other: 0.0,
            people: 1.0,
        }
    }

    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Distance => self.distance,
            Field::FuelEfficiency => self.fuel_efficiency,
            Field::GasPrice => self.gas_price,
            Field::Highway => self.highway,
            Field::Meals => self.meals,
            Field::Lodging => self.lodging,
            Field::Sightseeing => self.sightseeing,
            Field::Other => self.other,
            Field::People => self.people,
        }
    }
}

impl Default for TripInputs {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_field_catalog() {
        let defaults = TripInputs::defaults();
        for field in Field::ALL {
            assert_eq!(defaults.get(field), field.default_value(), "{}", field);
        }
    }

    #[test]
    fn test_raw_defaults_are_plain_numbers() {
        let raw = RawInputs::defaults();
        assert_eq!(raw.distance, "200");
        assert_eq!(raw.fuel_efficiency, "25");
        assert_eq!(raw.gas_price, "170");
        assert_eq!(raw.highway, "0");
        assert_eq!(raw.people, "1");
    }

    #[test]
    fn test_set_and_get() {
        let raw = RawInputs::default()
            .with(Field::Meals, "2500")
            .with(Field::People, "3");
        assert_eq!(raw.get(Field::Meals), "2500");
        assert_eq!(raw.get(Field::People), "3");
        assert_eq!(raw.get(Field::Distance), "");
    }

    #[test]
    fn test_deserialize_accepts_numbers_strings_and_null() {
        let json = r#"{"distance": 350, "fuelEfficiency": "23", "gasPrice": null, "people": 2.5}"#;
        let raw: RawInputs = serde_json::from_str(json).unwrap();
        assert_eq!(raw.distance, "350");
        assert_eq!(raw.fuel_efficiency, "23");
        assert_eq!(raw.gas_price, "");
        assert_eq!(raw.people, "2.5");
        // Missing fields are empty
        assert_eq!(raw.meals, "");
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let json = serde_json::to_value(RawInputs::defaults()).unwrap();
        assert_eq!(json["fuelEfficiency"], "25");
        assert_eq!(json["gasPrice"], "170");
    }

    #[test]
    fn test_deserialize_odd_values_never_fail() {
        let json = r#"{"distance": true, "meals": [1, 2], "lodging": {"a": 1}}"#;
        let raw: RawInputs = serde_json::from_str(json).unwrap();
        assert_eq!(raw.distance, "true");
        assert_eq!(raw.meals, "");
        assert_eq!(raw.lodging, "");
    }
}
