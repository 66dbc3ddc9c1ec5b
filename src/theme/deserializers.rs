use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

use super::ThemeVariant;

pub fn de_variants<'de, D>(deserializer: D) -> Result<SmallVec<[ThemeVariant; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = SmallVec::deserialize(deserializer)?;

    if value.is_empty() {
        return Err(D::Error::custom(
            "at least one theme variant needs to be provided.",
        ));
    }

    Ok(value)
}
