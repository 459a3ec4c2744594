//! Small serde helpers shared by the response types.

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` like a missing field.
///
/// The API sends `null` for empty lists and maps in some payloads; combined with
/// `#[serde(default)]` this keeps those fields as plain collections.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
