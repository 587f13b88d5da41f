//! Built-in trip presets

use touring_domain::TripInputs;

/// A named starting point for the trip inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub key: &'static str,
    pub label: &'static str,
    pub inputs: TripInputs,
}

pub const PRESETS: &[Preset] = &[
    Preset {
        key: "default",
        label: "初期値",
        inputs: TripInputs::defaults(),
    },
    Preset {
        key: "day200",
        label: "日帰り 200km",
        inputs: TripInputs {
            distance: 200.0,
            fuel_efficiency: 25.0,
            gas_price: 170.0,
            highway: 2000.0,
            meals: 2500.0,
            lodging: 0.0,
            sightseeing: 1500.0,
            other: 500.0,
            people: 1.0,
        },
    },
    Preset {
        key: "overnight350",
        label: "1泊2日 350km",
        inputs: TripInputs {
            distance: 350.0,
            fuel_efficiency: 23.0,
            gas_price: 170.0,
            highway: 5500.0,
            meals: 4500.0,
            lodging: 9500.0,
            sightseeing: 3000.0,
            other: 1200.0,
            people: 1.0,
        },
    },
    Preset {
        key: "split2",
        label: "2人で割り勘 300km",
        inputs: TripInputs {
            distance: 300.0,
            fuel_efficiency: 25.0,
            gas_price: 170.0,
            highway: 4000.0,
            meals: 5000.0,
            lodging: 0.0,
            sightseeing: 2000.0,
            other: 800.0,
            people: 2.0,
        },
    },
    Preset {
        key: "camping1n",
        label: "キャンプ 1泊",
        inputs: TripInputs {
            distance: 280.0,
            fuel_efficiency: 24.0,
            gas_price: 170.0,
            highway: 1500.0,
            meals: 3000.0,
            lodging: 3500.0,
            sightseeing: 1500.0,
            other: 1500.0,
            people: 1.0,
        },
    },
];

/// Get preset by key
pub fn get_preset(key: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.key.eq_ignore_ascii_case(key.trim()))
}
