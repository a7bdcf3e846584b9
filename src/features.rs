//! Closed set of numeric feature columns and the catalog/profile
//! intersection that decides which of them a ranking call can use.

use crate::types::{FoodItem, Nutrient, UserProfile};

/// A numeric feature column the similarity pipeline can rank on.
///
/// This is a closed enumeration rather than string keys so the intersection
/// step is structural and a typo cannot silently drop a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    PrimaryMood,
    MoodEnergizing,
    MoodRelaxing,
    MoodFocusing,
    CalorieCategory,
    ProteinCategory,
    FatCategory,
    CarbCategory,
    NutrientBalance,
}

impl Feature {
    /// Candidate order matches the catalog's column order.
    pub const CANDIDATES: [Self; 9] = [
        Self::PrimaryMood,
        Self::MoodEnergizing,
        Self::MoodRelaxing,
        Self::MoodFocusing,
        Self::CalorieCategory,
        Self::ProteinCategory,
        Self::FatCategory,
        Self::CarbCategory,
        Self::NutrientBalance,
    ];

    /// Catalog column name, for logging.
    pub fn column(self) -> &'static str {
        match self {
            Self::PrimaryMood => "primary_mood_num",
            Self::MoodEnergizing => "mood_energizing",
            Self::MoodRelaxing => "mood_relaxing",
            Self::MoodFocusing => "mood_focusing",
            Self::CalorieCategory => "calorie_category_num",
            Self::ProteinCategory => "protein_category_num",
            Self::FatCategory => "fat_category_num",
            Self::CarbCategory => "carb_category_num",
            Self::NutrientBalance => "nutrient_balance_num",
        }
    }

    /// Whether this is one of the per-mood indicator columns. Mood indicators
    /// always get the primary weight boost.
    pub fn is_mood_indicator(self) -> bool {
        matches!(
            self,
            Self::MoodEnergizing | Self::MoodRelaxing | Self::MoodFocusing
        )
    }

    /// The macro nutrient an ordinal-category feature represents, if any.
    pub fn nutrient(self) -> Option<Nutrient> {
        match self {
            Self::CalorieCategory => Some(Nutrient::Calories),
            Self::ProteinCategory => Some(Nutrient::Proteins),
            Self::FatCategory => Some(Nutrient::Fat),
            Self::CarbCategory => Some(Nutrient::Carbohydrate),
            _ => None,
        }
    }
}

/// Whether a feature column is present in the catalog subset being ranked.
/// A column counts as present when at least one item carries a value.
pub fn column_present(subset: &[&FoodItem], feature: Feature) -> bool {
    subset.iter().any(|item| item.feature(feature).is_some())
}

/// Value of a feature for one item; missing per-item values read as 0.
pub fn item_value(item: &FoodItem, feature: Feature) -> f32 {
    item.feature(feature).unwrap_or(0.0)
}

/// Features usable for this call: present both as a column in the filtered
/// catalog subset and as a value in the user profile. An empty result means
/// similarity ranking cannot proceed and the caller must take the heuristic
/// fallback path.
pub fn select_features(subset: &[&FoodItem], profile: &UserProfile) -> Vec<Feature> {
    Feature::CANDIDATES
        .into_iter()
        .filter(|&f| profile.feature(f).is_some() && column_present(subset, f))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mood;

    fn item(mood: Mood, carb_category: Option<f32>) -> FoodItem {
        FoodItem {
            name: "test".to_string(),
            primary_mood: mood,
            primary_mood_num: Some(f32::from(mood.code())),
            carb_category_num: carb_category,
            ..FoodItem::default()
        }
    }

    #[test]
    fn selection_is_the_catalog_profile_intersection() {
        let a = item(Mood::Energizing, Some(2.0));
        let b = item(Mood::Energizing, None);
        let subset = vec![&a, &b];

        let mut profile = UserProfile::build(Mood::Energizing, &[]);
        profile.carb_category = Some(1.0);
        profile.fat_category = Some(1.0); // no fat column in the subset

        let selected = select_features(&subset, &profile);
        // Mood indicator columns are absent from this subset; carb is
        // shared; fat is profile-only.
        assert_eq!(selected, vec![Feature::PrimaryMood, Feature::CarbCategory]);
    }

    #[test]
    fn missing_item_values_read_as_zero() {
        let b = item(Mood::Energizing, None);
        assert_eq!(item_value(&b, Feature::CarbCategory), 0.0);
    }

    #[test]
    fn no_shared_features_yields_empty_selection() {
        let a = item(Mood::Neutral, Some(2.0));
        let subset = vec![&a];
        let profile = UserProfile::default();
        // A default profile constrains nothing, not even primary_mood_num.
        assert!(select_features(&subset, &profile).is_empty());
    }
}
