use serde::{Deserialize, Deserializer};

/// Deserializer for optional string fields that treats an explicit JSON `null`
/// the same as a missing field
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
