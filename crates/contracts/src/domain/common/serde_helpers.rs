use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default value
///
/// Backends send `null` for blank optional columns; records keep plain
/// `String` fields so forms never deal with `Option` text.
pub fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
