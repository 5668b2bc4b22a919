//! Lenient field deserializers for request bodies.

use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i64),
    Text(String),
}

/// Reads an `i32` sent either as a JSON number or as a numeric string (`"3"`).
pub fn deserialize_lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => i32::try_from(n).map_err(de::Error::custom),
        NumberOrText::Text(s) => s.trim().parse::<i32>().map_err(de::Error::custom),
    }
}
