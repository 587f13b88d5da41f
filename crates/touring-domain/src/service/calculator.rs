//! Trip cost calculation
//!
//! `compute` never fails: blank, non-numeric, non-finite, and negative
//! inputs are normalized instead of rejected.

use crate::model::{ComputedResult, Delta, RawInputs, Sensitivity, TripInputs};

/// Distance perturbation for the sensitivity analysis (km)
pub const DISTANCE_STEP_KM: f64 = 10.0;
/// Efficiency perturbation for the sensitivity analysis (km/L)
pub const EFFICIENCY_STEP: f64 = 1.0;
/// Fuel price perturbation for the sensitivity analysis (円/L)
pub const PRICE_STEP: f64 = 10.0;

/// Coerce free-form text to a finite number, or 0
///
/// Follows the lenient rules of a web form number: surrounding whitespace
/// is ignored, decimal literals with optional sign and exponent are
/// accepted, and so are unsigned `0x`/`0o`/`0b` integer literals.
pub fn to_number(value: &str) -> f64 {
    let trimmed = value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        return 0.0;
    }

    let parsed = parse_radix_literal(trimmed)
        .unwrap_or_else(|| trimmed.parse::<f64>().unwrap_or(f64::NAN));

    if parsed.is_finite() {
        parsed
    } else {
        0.0
    }
}

/// `Some` when `s` carries a radix prefix; NaN if its digits are invalid
fn parse_radix_literal(s: &str) -> Option<f64> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}

/// `value`, raised to `min` if below it
pub fn clamp_min(value: f64, min: f64) -> f64 {
    if value > min {
        value
    } else {
        min
    }
}

fn sanitize_field(value: &str) -> f64 {
    clamp_min(to_number(value), 0.0)
}

/// Coerce and clamp every raw field
pub fn sanitize(raw: &RawInputs) -> TripInputs {
    let people = sanitize_field(&raw.people);

    TripInputs {
        distance: sanitize_field(&raw.distance),
        fuel_efficiency: sanitize_field(&raw.fuel_efficiency),
        gas_price: sanitize_field(&raw.gas_price),
        highway: sanitize_field(&raw.highway),
        meals: sanitize_field(&raw.meals),
        lodging: sanitize_field(&raw.lodging),
        sightseeing: sanitize_field(&raw.sightseeing),
        other: sanitize_field(&raw.other),
        people: if people > 0.0 { people } else { 1.0 },
    }
}

/// Compute fuel use, totals, the per-person split, and sensitivities
pub fn compute(raw: &RawInputs) -> ComputedResult {
    let inputs = sanitize(raw);
    let TripInputs {
        distance,
        fuel_efficiency,
        gas_price,
        people,
        ..
    } = inputs;

    let has_efficiency = fuel_efficiency > 0.0;
    let fuel_liters = if has_efficiency {
        distance / fuel_efficiency
    } else {
        0.0
    };
    let fuel_cost = fuel_liters * gas_price;

    let total = fuel_cost
        + inputs.highway
        + inputs.meals
        + inputs.lodging
        + inputs.sightseeing
        + inputs.other;
    let per_person = total / people;

    // price_plus10 shares the distance gate even though fuel_liters is
    // already 0 without efficiency
    let sensitivity = Sensitivity {
        distance_plus10: Delta::when(has_efficiency, || {
            (DISTANCE_STEP_KM / fuel_efficiency) * gas_price
        }),
        fuel_efficiency_minus1: Delta::when(fuel_efficiency > EFFICIENCY_STEP, || {
            (distance / (fuel_efficiency - EFFICIENCY_STEP)) * gas_price - fuel_cost
        }),
        price_plus10: Delta::when(has_efficiency, || fuel_liters * PRICE_STEP),
    };

    ComputedResult {
        inputs,
        fuel_liters,
        fuel_cost,
        total,
        per_person,
        sensitivity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;

    fn raw(values: [&str; 9]) -> RawInputs {
        let mut raw = RawInputs::default();
        for (field, value) in Field::ALL.into_iter().zip(values) {
            raw.set(field, value);
        }
        raw
    }

    // ==========================================
    // Coercion
    // ==========================================

    #[test]
    fn test_to_number_empty_and_blank() {
        assert_eq!(to_number(""), 0.0);
        assert_eq!(to_number("   "), 0.0);
        assert_eq!(to_number("\t\n"), 0.0);
    }

    #[test]
    fn test_to_number_decimal_literals() {
        assert_eq!(to_number("200"), 200.0);
        assert_eq!(to_number(" 12.5 "), 12.5);
        assert_eq!(to_number("+5"), 5.0);
        assert_eq!(to_number("-5"), -5.0);
        assert_eq!(to_number(".5"), 0.5);
        assert_eq!(to_number("5."), 5.0);
        assert_eq!(to_number("1e3"), 1000.0);
        assert_eq!(to_number("2.5E-1"), 0.25);
    }

    #[test]
    fn test_to_number_radix_literals() {
        assert_eq!(to_number("0x1A"), 26.0);
        assert_eq!(to_number("0o17"), 15.0);
        assert_eq!(to_number("0b101"), 5.0);
        assert_eq!(to_number("0x"), 0.0);
        assert_eq!(to_number("0x1G"), 0.0);
        assert_eq!(to_number("-0x10"), 0.0);
    }

    #[test]
    fn test_to_number_non_finite_and_garbage() {
        assert_eq!(to_number("Infinity"), 0.0);
        assert_eq!(to_number("-Infinity"), 0.0);
        assert_eq!(to_number("NaN"), 0.0);
        assert_eq!(to_number("1e400"), 0.0);
        assert_eq!(to_number("abc"), 0.0);
        assert_eq!(to_number("12km"), 0.0);
        assert_eq!(to_number("1,000"), 0.0);
        assert_eq!(to_number("."), 0.0);
    }

    #[test]
    fn test_clamp_min() {
        assert_eq!(clamp_min(-3.0, 0.0), 0.0);
        assert_eq!(clamp_min(3.0, 0.0), 3.0);
        assert!(clamp_min(-0.0, 0.0).is_sign_positive());
    }

    // ==========================================
    // Sanitizing
    // ==========================================

    #[test]
    fn test_empty_field_is_zero() {
        let result = compute(&RawInputs::defaults().with(Field::Distance, ""));
        assert_eq!(result.inputs.distance, 0.0);
    }

    #[test]
    fn test_negative_fields_clamped() {
        let result = compute(&raw(["-1", "-2", "-3", "-4", "-5", "-6", "-7", "-8", "-9"]));
        for field in Field::ALL {
            if field == Field::People {
                continue;
            }
            assert_eq!(result.inputs.get(field), 0.0, "{}", field);
        }
        assert_eq!(result.inputs.people, 1.0);
    }

    #[test]
    fn test_people_never_below_one() {
        for value in ["0", "-5", "", "abc", "Infinity"] {
            let result = compute(&RawInputs::defaults().with(Field::People, value));
            assert_eq!(result.inputs.people, 1.0, "people = {:?}", value);
        }
    }

    #[test]
    fn test_fractional_people_kept() {
        let result = compute(&RawInputs::defaults().with(Field::People, "0.5"));
        assert_eq!(result.inputs.people, 0.5);
        assert_eq!(result.per_person, result.total / 0.5);
    }

    // ==========================================
    // Scenarios
    // ==========================================

    #[test]
    fn test_default_trip() {
        let result = compute(&raw(["200", "25", "170", "0", "2000", "0", "1000", "0", "1"]));
        assert_eq!(result.fuel_liters, 8.0);
        assert_eq!(result.fuel_cost, 1360.0);
        assert_eq!(result.total, 4360.0);
        assert_eq!(result.per_person, 4360.0);
    }

    #[test]
    fn test_two_person_split() {
        let result = compute(&raw(["200", "25", "170", "0", "2000", "0", "1000", "0", "2"]));
        assert_eq!(result.total, 4360.0);
        assert_eq!(result.per_person, 2180.0);
    }

    #[test]
    fn test_zero_efficiency() {
        let result = compute(&raw(["100", "0", "170", "500", "1000", "0", "300", "200", "1"]));
        assert_eq!(result.fuel_liters, 0.0);
        assert_eq!(result.fuel_cost, 0.0);
        assert_eq!(result.total, 2000.0);
        assert_eq!(result.sensitivity.distance_plus10, Delta::NotApplicable);
        assert_eq!(result.sensitivity.fuel_efficiency_minus1, Delta::NotApplicable);
        assert_eq!(result.sensitivity.price_plus10, Delta::NotApplicable);
    }

    #[test]
    fn test_total_is_exact_sum() {
        let result = compute(&raw(["123.4", "17.3", "168.9", "1234.5", "987.6", "4321", "55.5", "0.1", "3"]));
        let expected = result.fuel_cost
            + result.inputs.highway
            + result.inputs.meals
            + result.inputs.lodging
            + result.inputs.sightseeing
            + result.inputs.other;
        assert_eq!(result.total, expected);
        assert_eq!(result.per_person, result.total / 3.0);
    }

    // ==========================================
    // Sensitivity
    // ==========================================

    #[test]
    fn test_default_sensitivities() {
        let result = compute(&RawInputs::defaults());
        // 10 km at 25 km/L and 170 円/L
        assert_eq!(result.sensitivity.distance_plus10, Delta::Value(68.0));
        // 200 / 24 * 170 - 1360
        let minus1 = result.sensitivity.fuel_efficiency_minus1.value().unwrap();
        assert!((minus1 - 56.666_666).abs() < 1e-3);
        // 8 L at +10 円/L
        assert_eq!(result.sensitivity.price_plus10, Delta::Value(80.0));
    }

    #[test]
    fn test_efficiency_of_one_has_no_minus1() {
        let result = compute(&RawInputs::defaults().with(Field::FuelEfficiency, "1"));
        assert_eq!(result.sensitivity.fuel_efficiency_minus1, Delta::NotApplicable);
        assert!(result.sensitivity.distance_plus10.is_applicable());
        assert!(result.sensitivity.price_plus10.is_applicable());
    }

    #[test]
    fn test_efficiency_below_one() {
        let result = compute(&RawInputs::defaults().with(Field::FuelEfficiency, "0.5"));
        assert_eq!(result.fuel_liters, 400.0);
        assert_eq!(result.sensitivity.fuel_efficiency_minus1, Delta::NotApplicable);
        assert_eq!(result.sensitivity.distance_plus10, Delta::Value(3400.0));
    }

    #[test]
    fn test_zero_distance_has_zero_deltas_not_absent() {
        let result = compute(&RawInputs::defaults().with(Field::Distance, "0"));
        assert_eq!(result.sensitivity.price_plus10, Delta::Value(0.0));
        assert_eq!(result.sensitivity.fuel_efficiency_minus1, Delta::Value(0.0));
    }

    #[test]
    fn test_compute_is_deterministic() {
        let input = raw(["350", "23", "170", "5500", "4500", "9500", "3000", "1200", "1"]);
        assert_eq!(compute(&input), compute(&input));
    }
}
