//! Fallback ranking tiers.
//!
//! When similarity ranking cannot run (no shared features) or fails
//! unexpectedly, these tiers still produce an ordered, non-empty result. A
//! fixed placeholder score marks the rows as heuristically ranked rather
//! than profile-matched.

use crate::features::{self, Feature};
use crate::types::{FoodItem, HealthCondition, Mood, RankedFood};
use tracing::debug;

/// Mood-specific heuristic ranking (fallback tier 2).
///
/// Used when the catalog and profile share no numeric features: sort by the
/// nutrient that best proxies the mood and attach the placeholder score.
pub fn heuristic_rank(subset: &[&FoodItem], mood: Mood, placeholder_score: f32) -> Vec<RankedFood> {
    let mut ordered: Vec<&FoodItem> = subset.to_vec();
    sort_by_mood_heuristic(&mut ordered, mood);
    debug!(mood = %mood, items = ordered.len(), "ranked by mood heuristic");
    ordered
        .into_iter()
        .map(|item| RankedFood::from_item(item, placeholder_score))
        .collect()
}

/// Ultimate fallback (tier 3), for when the scoring pipeline itself fails.
///
/// Filters by the mood flag column when the catalog carries it, otherwise by
/// label equality, otherwise keeps the whole catalog; applies a simple
/// health-aware secondary sort and attaches the placeholder score.
pub fn ultimate_rank(
    catalog: &[FoodItem],
    mood: Mood,
    conditions: &[HealthCondition],
    placeholder_score: f32,
) -> Vec<RankedFood> {
    let flag_column_present = catalog.iter().any(|item| item.mood_flag(mood).is_some());

    let mut filtered: Vec<&FoodItem> = match mood {
        Mood::Energizing | Mood::Relaxing | Mood::Focusing if flag_column_present => catalog
            .iter()
            .filter(|item| item.mood_flag(mood) == Some(true))
            .collect(),
        Mood::Energizing | Mood::Relaxing | Mood::Focusing => catalog
            .iter()
            .filter(|item| item.primary_mood == mood)
            .collect(),
        Mood::MultiCategory | Mood::Neutral => catalog.iter().collect(),
    };
    if filtered.is_empty() {
        filtered = catalog.iter().collect();
    }

    if conditions.contains(&HealthCondition::Diabetes) {
        sort_by_ordinal_then_calories(&mut filtered, Feature::CarbCategory);
    } else if conditions.contains(&HealthCondition::Obesitas) {
        sort_by_ordinal_then_calories(&mut filtered, Feature::CalorieCategory);
    } else if conditions.contains(&HealthCondition::Kolesterol)
        || conditions.contains(&HealthCondition::Hipertensi)
    {
        sort_by_ordinal_then_calories(&mut filtered, Feature::FatCategory);
    } else {
        sort_by_mood_heuristic(&mut filtered, mood);
    }

    debug!(mood = %mood, items = filtered.len(), "ultimate fallback ranking");
    filtered
        .into_iter()
        .map(|item| RankedFood::from_item(item, placeholder_score))
        .collect()
}

fn sort_by_mood_heuristic(items: &mut [&FoodItem], mood: Mood) {
    match mood {
        // Relaxing prefers light foods; energizing and the rest prefer
        // calorie-dense ones; focusing prefers protein.
        Mood::Relaxing => items.sort_by(|a, b| a.calories.total_cmp(&b.calories)),
        Mood::Focusing => items.sort_by(|a, b| b.proteins.total_cmp(&a.proteins)),
        _ => items.sort_by(|a, b| b.calories.total_cmp(&a.calories)),
    }
}

fn sort_by_ordinal_then_calories(items: &mut [&FoodItem], feature: Feature) {
    items.sort_by(|a, b| {
        features::item_value(a, feature)
            .total_cmp(&features::item_value(b, feature))
            .then_with(|| a.calories.total_cmp(&b.calories))
    });
}
