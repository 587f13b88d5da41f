//! Number formatting shared by every output surface
//!
//! Grouping follows the ja-JP locale: `,` every three integer digits and
//! `.` as the decimal point.

use crate::model::Delta;

pub const DEFAULT_FRACTION_DIGITS: usize = 1;

/// Round to the nearest integer, ties toward positive infinity
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

fn infinity(value: f64) -> &'static str {
    if value > 0.0 {
        "∞"
    } else {
        "-∞"
    }
}

/// Whole-yen amount, e.g. `1360.4` → `"1,360"`
pub fn format_currency(value: f64) -> String {
    format_number(round_half_up(value), 0)
}

/// Increment a string of ASCII digits by one in the last place
///
/// Returns true when the carry ran off the front.
fn increment_digits(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return false;
        }
    }
    true
}

/// Shortest round-trip significant digits of `value.abs()` and the number
/// of those digits that sit before the decimal point (may be negative or
/// exceed the digit count)
fn shortest_digits(value: f64) -> (Vec<u8>, i64) {
    let sci = format!("{:e}", value.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let exponent: i64 = exponent.parse().unwrap_or(0);
    (digits, exponent + 1)
}

/// Number with at most `fraction_digits` decimals, trailing zeros dropped
///
/// Rounds half away from zero on the shortest decimal that round-trips to
/// `value`, so `1.005` with two digits is `"1.01"` and `1e23` prints as
/// `"100,000,000,000,000,000,000,000"`.
pub fn format_number(value: f64, fraction_digits: usize) -> String {
    if value.is_nan() {
        return "0".to_string();
    }
    if value.is_infinite() {
        return infinity(value).to_string();
    }

    let (digits, mut point) = shortest_digits(value);
    let keep = point.saturating_add(i64::try_from(fraction_digits).unwrap_or(i64::MAX));

    let mut kept = if keep <= 0 {
        Vec::new()
    } else {
        digits[..digits.len().min(keep as usize)].to_vec()
    };

    let round_up = keep >= 0
        && usize::try_from(keep)
            .ok()
            .and_then(|k| digits.get(k))
            .is_some_and(|d| *d >= b'5');
    if round_up && increment_digits(&mut kept) {
        kept.insert(0, b'1');
        point += 1;
    }

    // Split the kept digits around the decimal point, padding with zeros
    let (int_digits, mut frac_digits) = if point <= 0 {
        let mut frac = vec![b'0'; point.unsigned_abs() as usize];
        frac.extend_from_slice(&kept);
        (vec![b'0'], frac)
    } else {
        let point = point as usize;
        if point >= kept.len() {
            let mut int = kept.clone();
            int.resize(point, b'0');
            (int, Vec::new())
        } else {
            (kept[..point].to_vec(), kept[point..].to_vec())
        }
    };

    while frac_digits.last() == Some(&b'0') {
        frac_digits.pop();
    }

    // ASCII digits only
    let int_str = String::from_utf8_lossy(&int_digits);
    let frac_str = String::from_utf8_lossy(&frac_digits);

    let is_zero = int_digits.iter().chain(&frac_digits).all(|d| *d == b'0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac_str.is_empty() {
        format!("{}{}", sign, group_thousands(&int_str))
    } else {
        format!("{}{}.{}", sign, group_thousands(&int_str), frac_str)
    }
}

/// Signed whole-yen delta, e.g. `"+68円"`, or `"—"` when not applicable
pub fn format_delta(delta: Delta) -> String {
    match delta {
        Delta::Value(v) if v.is_finite() => {
            let rounded = round_half_up(v);
            let sign = if rounded >= 0.0 { "+" } else { "" };
            format!("{}{}円", sign, format_currency(rounded))
        }
        _ => "—".to_string(),
    }
}
