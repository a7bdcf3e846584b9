//! Per-feature min-max normalization over the filtered catalog subset.
//!
//! Scaling runs against the subset the mood filter produced, not the whole
//! catalog. A narrowed candidate set may sit in a different nutrient regime
//! and global bounds would wash out the contrast that is left.

use crate::features::{self, Feature};
use crate::types::{FoodItem, UserProfile};
use ndarray::{Array1, Array2};

/// Normalized value assigned to every item and the user when a feature has
/// no variance in the subset. The midpoint avoids division by zero without
/// biasing similarity toward either end of the range.
const DEGENERATE_MIDPOINT: f32 = 0.5;

/// Scale each selected feature into `[0, 1]` independently.
///
/// Returns the scaled catalog matrix (one row per item, one column per
/// feature) and the scaled user vector. The user's raw value is clamped into
/// the subset's observed `[min, max]` before scaling, so both outputs stay
/// inside `[0, 1]`.
pub fn normalize(
    subset: &[&FoodItem],
    profile: &UserProfile,
    selected: &[Feature],
) -> (Array2<f32>, Array1<f32>) {
    let mut foods = Array2::<f32>::zeros((subset.len(), selected.len()));
    let mut user = Array1::<f32>::zeros(selected.len());

    for (col, &feature) in selected.iter().enumerate() {
        let raw: Vec<f32> = subset
            .iter()
            .map(|item| features::item_value(item, feature))
            .collect();
        let min = raw.iter().copied().fold(f32::INFINITY, f32::min);
        let max = raw.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let user_raw = profile.feature(feature).unwrap_or(0.0);

        if (max - min).abs() < f32::EPSILON {
            // No variance: the feature carries no discriminative information
            // in this subset.
            for row in 0..subset.len() {
                foods[[row, col]] = DEGENERATE_MIDPOINT;
            }
            user[col] = DEGENERATE_MIDPOINT;
        } else {
            let span = max - min;
            for (row, value) in raw.iter().enumerate() {
                foods[[row, col]] = (value - min) / span;
            }
            user[col] = (user_raw.clamp(min, max) - min) / span;
        }
    }

    (foods, user)
}
