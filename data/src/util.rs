use serde::{Deserialize, Deserializer};

/// Falls back to `T::default()` when a field is present but malformed,
/// so one bad entry doesn't throw away the rest of the config.
pub fn ok_or_default<'a, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Deserialize<'a> + Default,
    D: Deserializer<'a>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}
