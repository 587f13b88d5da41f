//! Tolerant loading of stored state
//!
//! A damaged piece of stored state is dropped on its own instead of
//! failing the whole document.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Either a well-formed `T` or anything else, which is skipped
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Salvaged<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

impl<T> Salvaged<T> {
    pub fn into_valid(self) -> Option<T> {
        match self {
            Salvaged::Valid(value) => Some(value),
            Salvaged::Invalid(_) => None,
        }
    }
}

/// Field deserializer that falls back to `T::default()` on malformed input
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Salvaged::<T>::deserialize(deserializer)?
        .into_valid()
        .unwrap_or_default())
}
