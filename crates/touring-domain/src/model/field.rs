//! Trip input field catalog

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the nine trip parameters, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Distance,
    FuelEfficiency,
    GasPrice,
    Highway,
    Meals,
    Lodging,
    Sightseeing,
    Other,
    People,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Distance,
        Field::FuelEfficiency,
        Field::GasPrice,
        Field::Highway,
        Field::Meals,
        Field::Lodging,
        Field::Sightseeing,
        Field::Other,
        Field::People,
    ];

    /// camelCase identifier used in saved state
    pub fn id(self) -> &'static str {
        match self {
            Field::Distance => "distance",
            Field::FuelEfficiency => "fuelEfficiency",
            Field::GasPrice => "gasPrice",
            Field::Highway => "highway",
            Field::Meals => "meals",
            Field::Lodging => "lodging",
            Field::Sightseeing => "sightseeing",
            Field::Other => "other",
            Field::People => "people",
        }
    }

    /// One-letter key used when sharing inputs as key/value pairs
    pub fn share_key(self) -> &'static str {
        match self {
            Field::Distance => "d",
            Field::FuelEfficiency => "f",
            Field::GasPrice => "p",
            Field::Highway => "h",
            Field::Meals => "m",
            Field::Lodging => "l",
            Field::Sightseeing => "s",
            Field::Other => "o",
            Field::People => "n",
        }
    }

    pub fn default_value(self) -> f64 {
        match self {
            Field::Distance => 200.0,
            Field::FuelEfficiency => 25.0,
            Field::GasPrice => 170.0,
            Field::Highway => 0.0,
            Field::Meals => 2000.0,
            Field::Lodging => 0.0,
            Field::Sightseeing => 1000.0,
            Field::Other => 0.0,
            Field::People => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Distance => "距離",
            Field::FuelEfficiency => "燃費",
            Field::GasPrice => "ガソリン単価",
            Field::Highway => "高速料金",
            Field::Meals => "食事",
            Field::Lodging => "宿泊",
            Field::Sightseeing => "観光/温泉",
            Field::Other => "その他",
            Field::People => "人数",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Field::Distance => "km",
            Field::FuelEfficiency => "km/L",
            Field::GasPrice => "円/L",
            Field::People => "人",
            _ => "円",
        }
    }

    /// Look up a field by camelCase id (case-insensitive) or share key
    pub fn from_key(key: &str) -> Option<Field> {
        let key = key.trim();
        Field::ALL
            .into_iter()
            .find(|f| f.share_key() == key || f.id().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Field {
    type Err = touring_types::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::from_key(s).ok_or_else(|| touring_types::Error::UnknownField(s.to_string()))
    }
}
