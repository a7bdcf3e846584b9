//! Dynamic per-feature weight vector.
//!
//! Mood indicators always dominate; active health conditions amplify the
//! ordinal-category features for their priority nutrients. The final vector
//! is rescaled so its sum equals the feature count, keeping similarity
//! magnitudes comparable across calls with different active feature sets.

use crate::features::Feature;
use crate::types::{HealthCondition, Nutrient};
use crate::RankerConfig;
use ndarray::Array1;

/// Compute the weight vector for the selected features under the active
/// health conditions. Multipliers from several conditions naming the same
/// nutrient stack.
pub fn feature_weights(
    selected: &[Feature],
    conditions: &[HealthCondition],
    config: &RankerConfig,
) -> Array1<f32> {
    let mut weights = Array1::<f32>::ones(selected.len());

    for (i, &feature) in selected.iter().enumerate() {
        let mut weight = 1.0;

        if feature.is_mood_indicator() {
            weight *= config.mood_weight;
        }

        if let Some(nutrient) = feature.nutrient() {
            for condition in conditions {
                if condition.rule().priority_nutrients.contains(&nutrient) {
                    weight *= match nutrient {
                        Nutrient::Calories | Nutrient::Carbohydrate | Nutrient::Fat => {
                            config.macro_priority_weight
                        }
                        Nutrient::Proteins => config.protein_priority_weight,
                    };
                }
            }
        }

        weights[i] = weight;
    }

    // Rescale so the sum equals the feature count (average weight = 1).
    let sum: f32 = weights.sum();
    if sum > 0.0 {
        weights *= selected.len() as f32 / sum;
    }
    weights
}
