//! NutriMood ranking engine.
//!
//! Ranks a food catalog against a requested mood and a set of health
//! conditions, producing an ordered short list with a similarity score per
//! item. The pipeline normalizes the usable feature columns over the
//! mood-filtered catalog subset, skews feature weights by condition
//! priorities, scores candidates with weighted cosine similarity, subtracts
//! condition penalties, and falls back through progressively looser tiers so
//! a call against a non-empty catalog always yields a ranked result.
//!
//! The mood label itself comes from an external classifier; catalog loading
//! and the serving layer are collaborator concerns.

pub mod codec;
pub mod fallback;
pub mod features;
pub mod health;
pub mod normalize;
pub mod recommendation;
pub mod similarity;
pub mod types;
pub mod weights;

// Re-export key types
pub use features::Feature;
pub use recommendation::{FoodRanker, RankerError};
pub use types::{FoodItem, HealthCondition, Mood, Nutrient, RankedFood, UserProfile};

/// Engine tuning knobs.
///
/// The defaults pin the canonical constant set; the per-condition penalty
/// amounts and thresholds live in the static rule table in [`health`].
#[derive(Debug, Clone)]
pub struct RankerConfig {
    /// Multiplier for mood indicator features (default: 2.0). Mood match is
    /// always primary.
    pub mood_weight: f32,
    /// Multiplier for calorie/carbohydrate/fat features named as a priority
    /// nutrient by an active condition (default: 2.0).
    pub macro_priority_weight: f32,
    /// Multiplier for the protein feature when named as a priority nutrient
    /// (default: 1.5).
    pub protein_priority_weight: f32,
    /// Placeholder score attached when ranking by mood heuristic instead of
    /// profile similarity (default: 0.8).
    pub heuristic_score: f32,
    /// Placeholder score attached by the ultimate fallback tier
    /// (default: 0.5).
    pub ultimate_score: f32,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            mood_weight: 2.0,
            macro_priority_weight: 2.0,
            protein_priority_weight: 1.5,
            heuristic_score: 0.8,
            ultimate_score: 0.5,
        }
    }
}

#[cfg(test)]
mod tests;
