use serde::{Deserialize, Deserializer};

pub mod game;
pub mod user;

/// Reads an explicit JSON `null` as the field's default value, so it is
/// treated the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
