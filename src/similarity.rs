//! Weighted cosine similarity between the user vector and every catalog
//! item, with an inverse-distance fallback for degenerate vectors.

use anyhow::{ensure, Result};
use ndarray::{Array1, Array2, ArrayView1};

/// Score every catalog row against the user vector.
///
/// Inputs are the normalized (unweighted) catalog matrix and user vector plus
/// the feature weight vector; weighting happens elementwise here. When either
/// weighted vector has zero magnitude, cosine similarity is undefined and the
/// score falls back to `1 / (1 + euclidean_distance)` on the unweighted
/// vectors.
pub fn score_candidates(
    foods_scaled: &Array2<f32>,
    user_scaled: &Array1<f32>,
    weights: &Array1<f32>,
) -> Result<Vec<f32>> {
    ensure!(
        foods_scaled.ncols() == user_scaled.len(),
        "catalog matrix has {} feature columns but the user vector has {}",
        foods_scaled.ncols(),
        user_scaled.len()
    );
    ensure!(
        weights.len() == user_scaled.len(),
        "weight vector length {} does not match feature count {}",
        weights.len(),
        user_scaled.len()
    );

    let user_weighted = user_scaled * weights;
    let user_norm = norm(user_weighted.view());

    let mut scores = Vec::with_capacity(foods_scaled.nrows());
    for row in foods_scaled.outer_iter() {
        let food_weighted = &row * weights;
        let food_norm = norm(food_weighted.view());

        let score = if user_norm == 0.0 || food_norm == 0.0 {
            let diff = &row - user_scaled;
            let distance = norm(diff.view());
            1.0 / (1.0 + distance)
        } else {
            user_weighted.dot(&food_weighted) / (user_norm * food_norm)
        };
        scores.push(score);
    }

    Ok(scores)
}

fn norm(v: ArrayView1<'_, f32>) -> f32 {
    v.dot(&v).sqrt()
}
