//! Total string-to-ordinal codecs for mood labels and nutrient-level
//! categories.
//!
//! Both functions never fail: unknown categorical input degrades to a safe
//! default because a ranking call must not abort over a single malformed
//! category value.

use crate::types::Mood;
use serde::{Deserialize, Deserializer};

/// Ordinal code for a mood label; anything outside the enumeration maps to
/// the neutral code.
pub fn encode_mood(label: &str) -> f32 {
    f32::from(Mood::parse(label).code())
}

/// Ordinal code for a nutrient-level label (`very_low`..`very_high`,
/// `balanced`/`unbalanced`), case-insensitive. Unrecognized strings map to 0.
pub fn encode_category(value: &str) -> f32 {
    match value.to_lowercase().as_str() {
        "very_low" => 0.0,
        "low" => 1.0,
        "medium" => 2.0,
        "high" => 3.0,
        "very_high" => 4.0,
        "balanced" => 1.0,
        "unbalanced" => 0.0,
        _ => 0.0,
    }
}

/// Serde adapter for ordinal category columns: numeric values pass through
/// unchanged, string labels go through [`encode_category`].
pub fn deserialize_category<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f32),
        Text(String),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Num(value) => value,
        Raw::Text(label) => encode_category(&label),
    }))
}
