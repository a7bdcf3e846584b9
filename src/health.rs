//! Static health-condition rules: ordinal constraints, priority nutrients,
//! and threshold penalties.

use crate::features::{self, Feature};
use crate::types::{FoodItem, HealthCondition, Nutrient};
use tracing::debug;

/// Ordinal level at or above which a penalty rule flags an item.
pub const PENALTY_ORDINAL: f32 = 3.0;

/// Penalty subtracted from flagged items under most conditions.
pub const STANDARD_PENALTY: f32 = 0.10;

/// Cholesterol carries a heavier penalty on high-fat items.
pub const CHOLESTEROL_PENALTY: f32 = 0.15;

/// Threshold penalty attached to a condition: items whose `feature` ordinal
/// reaches [`PENALTY_ORDINAL`] lose `amount` from their similarity score.
#[derive(Debug, Clone, Copy)]
pub struct Penalty {
    pub feature: Feature,
    pub amount: f32,
}

/// Static rule for one health condition.
#[derive(Debug, Clone, Copy)]
pub struct HealthRule {
    /// Target ordinal constraints merged into the user profile.
    pub constraints: &'static [(Feature, f32)],
    /// Nutrients whose feature weights the condition amplifies.
    pub priority_nutrients: &'static [Nutrient],
    pub penalty: Option<Penalty>,
}

const DIABETES: HealthRule = HealthRule {
    constraints: &[
        (Feature::CalorieCategory, 1.0),
        (Feature::CarbCategory, 0.0),
    ],
    priority_nutrients: &[Nutrient::Carbohydrate, Nutrient::Calories],
    penalty: Some(Penalty {
        feature: Feature::CarbCategory,
        amount: STANDARD_PENALTY,
    }),
};

const HIPERTENSI: HealthRule = HealthRule {
    constraints: &[
        (Feature::CalorieCategory, 1.0),
        (Feature::FatCategory, 0.0),
        (Feature::ProteinCategory, 2.0),
    ],
    priority_nutrients: &[Nutrient::Fat, Nutrient::Calories],
    penalty: Some(Penalty {
        feature: Feature::FatCategory,
        amount: STANDARD_PENALTY,
    }),
};

const KOLESTEROL: HealthRule = HealthRule {
    constraints: &[
        (Feature::FatCategory, 0.0),
        (Feature::ProteinCategory, 2.0),
    ],
    priority_nutrients: &[Nutrient::Fat],
    penalty: Some(Penalty {
        feature: Feature::FatCategory,
        amount: CHOLESTEROL_PENALTY,
    }),
};

const OBESITAS: HealthRule = HealthRule {
    constraints: &[
        (Feature::CalorieCategory, 0.0),
        (Feature::FatCategory, 1.0),
        (Feature::CarbCategory, 1.0),
    ],
    priority_nutrients: &[Nutrient::Calories, Nutrient::Fat, Nutrient::Carbohydrate],
    penalty: Some(Penalty {
        feature: Feature::CalorieCategory,
        amount: STANDARD_PENALTY,
    }),
};

const ALERGI_GLUTEN: HealthRule = HealthRule {
    constraints: &[
        (Feature::NutrientBalance, 1.0),
        (Feature::ProteinCategory, 2.0),
    ],
    priority_nutrients: &[Nutrient::Proteins],
    penalty: None,
};

const VEGETARIAN: HealthRule = HealthRule {
    constraints: &[
        (Feature::ProteinCategory, 2.0),
        (Feature::NutrientBalance, 1.0),
    ],
    priority_nutrients: &[Nutrient::Proteins],
    penalty: None,
};

impl HealthCondition {
    pub fn rule(self) -> &'static HealthRule {
        match self {
            Self::Diabetes => &DIABETES,
            Self::Hipertensi => &HIPERTENSI,
            Self::Kolesterol => &KOLESTEROL,
            Self::Obesitas => &OBESITAS,
            Self::AlergiGluten => &ALERGI_GLUTEN,
            Self::Vegetarian => &VEGETARIAN,
        }
    }
}

/// Merge the ordinal constraints of all active conditions. When two
/// conditions target the same feature the lower (more restrictive) ordinal
/// wins.
pub fn aggregate_constraints(conditions: &[HealthCondition]) -> Vec<(Feature, f32)> {
    let mut merged: Vec<(Feature, f32)> = Vec::new();
    for condition in conditions {
        for &(feature, value) in condition.rule().constraints {
            match merged.iter_mut().find(|(f, _)| *f == feature) {
                Some((_, existing)) => *existing = existing.min(value),
                None => merged.push((feature, value)),
            }
        }
    }
    merged
}

/// Subtract condition penalties from the raw similarity scores, in place.
///
/// Items whose penalized feature reaches the threshold ordinal lose the
/// condition's penalty amount; penalties from several active conditions
/// accumulate on the same item. Scores may go below zero; only relative
/// order matters downstream.
pub fn apply_penalties(
    subset: &[&FoodItem],
    scores: &mut [f32],
    conditions: &[HealthCondition],
) {
    for condition in conditions {
        let Some(penalty) = condition.rule().penalty else {
            continue;
        };
        let mut flagged = 0usize;
        for (score, item) in scores.iter_mut().zip(subset) {
            if features::item_value(item, penalty.feature) >= PENALTY_ORDINAL {
                *score -= penalty.amount;
                flagged += 1;
            }
        }
        debug!(
            condition = %condition,
            feature = penalty.feature.column(),
            flagged,
            "applied health penalty"
        );
    }
}
