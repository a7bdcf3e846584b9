//! Core data model: moods, health conditions, catalog items, and the
//! per-request user profile.

use crate::features::Feature;
use crate::health;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse category describing the intended effect of a food on the consumer.
///
/// Ordinal codes follow the catalog's encoding: energizing=0, relaxing=1,
/// focusing=2, multi_category=3, neutral=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Energizing,
    Relaxing,
    Focusing,
    MultiCategory,
    #[default]
    Neutral,
}

impl Mood {
    /// All moods known to the catalog encoding.
    pub const ALL: [Self; 5] = [
        Self::Energizing,
        Self::Relaxing,
        Self::Focusing,
        Self::MultiCategory,
        Self::Neutral,
    ];

    /// Ordinal code used by the `primary_mood_num` feature column.
    pub fn code(self) -> u8 {
        match self {
            Self::Energizing => 0,
            Self::Relaxing => 1,
            Self::Focusing => 2,
            Self::MultiCategory => 3,
            Self::Neutral => 4,
        }
    }

    /// Strict parse; `None` for labels outside the enumeration.
    pub fn try_parse(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "energizing" => Some(Self::Energizing),
            "relaxing" => Some(Self::Relaxing),
            "focusing" => Some(Self::Focusing),
            "multi_category" => Some(Self::MultiCategory),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }

    /// Total parse: unknown labels degrade to [`Mood::Neutral`].
    pub fn parse(label: &str) -> Self {
        Self::try_parse(label).unwrap_or(Self::Neutral)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Energizing => "energizing",
            Self::Relaxing => "relaxing",
            Self::Focusing => "focusing",
            Self::MultiCategory => "multi_category",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named dietary constraint mapping to nutrient thresholds and
/// feature-priority hints (see [`crate::health`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthCondition {
    Diabetes,
    Hipertensi,
    Kolesterol,
    Obesitas,
    AlergiGluten,
    Vegetarian,
}

impl HealthCondition {
    pub const ALL: [Self; 6] = [
        Self::Diabetes,
        Self::Hipertensi,
        Self::Kolesterol,
        Self::Obesitas,
        Self::AlergiGluten,
        Self::Vegetarian,
    ];

    /// `None` for names outside the known set; the caller skips those.
    pub fn try_parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "diabetes" => Some(Self::Diabetes),
            "hipertensi" => Some(Self::Hipertensi),
            "kolesterol" => Some(Self::Kolesterol),
            "obesitas" => Some(Self::Obesitas),
            "alergi_gluten" => Some(Self::AlergiGluten),
            "vegetarian" => Some(Self::Vegetarian),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Diabetes => "diabetes",
            Self::Hipertensi => "hipertensi",
            Self::Kolesterol => "kolesterol",
            Self::Obesitas => "obesitas",
            Self::AlergiGluten => "alergi_gluten",
            Self::Vegetarian => "vegetarian",
        }
    }
}

impl fmt::Display for HealthCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Macro-nutrient identity used by the priority-weighting rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nutrient {
    Calories,
    Proteins,
    Fat,
    Carbohydrate,
}

/// One catalog row.
///
/// The four macro columns and `primary_mood` are always present; the derived
/// flag, indicator, and ordinal-category columns are optional; the engine
/// works with whatever subset the catalog provider supplies.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FoodItem {
    pub name: String,
    pub calories: f32,
    pub proteins: f32,
    pub fat: f32,
    pub carbohydrate: f32,
    pub primary_mood: Mood,

    /// Numeric encoding of `primary_mood`. Kept as a separate optional
    /// column, mirroring catalogs that carry the label without the derived
    /// numeric feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_mood_num: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_energizing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_relaxing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_focusing: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_energizing: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_relaxing: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_focusing: Option<f32>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::deserialize_category"
    )]
    pub calorie_category_num: Option<f32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::deserialize_category"
    )]
    pub protein_category_num: Option<f32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::deserialize_category"
    )]
    pub fat_category_num: Option<f32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::deserialize_category"
    )]
    pub carb_category_num: Option<f32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::deserialize_category"
    )]
    pub nutrient_balance_num: Option<f32>,
}

impl FoodItem {
    /// Raw value of a feature column for this item, `None` when the column
    /// value is missing.
    pub fn feature(&self, feature: Feature) -> Option<f32> {
        match feature {
            Feature::PrimaryMood => self.primary_mood_num,
            Feature::MoodEnergizing => self.mood_energizing,
            Feature::MoodRelaxing => self.mood_relaxing,
            Feature::MoodFocusing => self.mood_focusing,
            Feature::CalorieCategory => self.calorie_category_num,
            Feature::ProteinCategory => self.protein_category_num,
            Feature::FatCategory => self.fat_category_num,
            Feature::CarbCategory => self.carb_category_num,
            Feature::NutrientBalance => self.nutrient_balance_num,
        }
    }

    /// Derived boolean flag for one of the three active moods, when the
    /// catalog carries it.
    pub fn mood_flag(&self, mood: Mood) -> Option<bool> {
        match mood {
            Mood::Energizing => self.is_energizing,
            Mood::Relaxing => self.is_relaxing,
            Mood::Focusing => self.is_focusing,
            Mood::MultiCategory | Mood::Neutral => None,
        }
    }
}

/// Transient per-request profile the ranking call matches the catalog
/// against. Built fresh per call, never persisted.
#[derive(Debug, Clone, Default)]
pub struct UserProfile {
    pub target_mood: Mood,
    pub primary_mood_num: Option<f32>,
    pub mood_energizing: Option<f32>,
    pub mood_relaxing: Option<f32>,
    pub mood_focusing: Option<f32>,
    pub calorie_category: Option<f32>,
    pub protein_category: Option<f32>,
    pub fat_category: Option<f32>,
    pub carb_category: Option<f32>,
    pub nutrient_balance: Option<f32>,
}

impl UserProfile {
    /// Build a profile for the requested mood and the aggregated constraints
    /// of the active health conditions. When several conditions target the
    /// same feature the numerically lower (more restrictive) ordinal wins.
    pub fn build(target_mood: Mood, conditions: &[HealthCondition]) -> Self {
        let mut profile = Self {
            target_mood,
            primary_mood_num: Some(f32::from(target_mood.code())),
            mood_energizing: Some(f32::from(u8::from(target_mood == Mood::Energizing))),
            mood_relaxing: Some(f32::from(u8::from(target_mood == Mood::Relaxing))),
            mood_focusing: Some(f32::from(u8::from(target_mood == Mood::Focusing))),
            ..Self::default()
        };

        for (feature, value) in health::aggregate_constraints(conditions) {
            profile.tighten(feature, value);
        }

        profile
    }

    fn tighten(&mut self, feature: Feature, value: f32) {
        let slot = match feature {
            Feature::CalorieCategory => &mut self.calorie_category,
            Feature::ProteinCategory => &mut self.protein_category,
            Feature::FatCategory => &mut self.fat_category,
            Feature::CarbCategory => &mut self.carb_category,
            Feature::NutrientBalance => &mut self.nutrient_balance,
            // Mood-side features are set at build time, never by conditions.
            Feature::PrimaryMood
            | Feature::MoodEnergizing
            | Feature::MoodRelaxing
            | Feature::MoodFocusing => return,
        };
        *slot = Some(slot.map_or(value, |current| current.min(value)));
    }

    /// Profile-side value of a feature, `None` when the profile does not
    /// constrain it.
    pub fn feature(&self, feature: Feature) -> Option<f32> {
        match feature {
            Feature::PrimaryMood => self.primary_mood_num,
            Feature::MoodEnergizing => self.mood_energizing,
            Feature::MoodRelaxing => self.mood_relaxing,
            Feature::MoodFocusing => self.mood_focusing,
            Feature::CalorieCategory => self.calorie_category,
            Feature::ProteinCategory => self.protein_category,
            Feature::FatCategory => self.fat_category,
            Feature::CarbCategory => self.carb_category,
            Feature::NutrientBalance => self.nutrient_balance,
        }
    }
}

/// One row of a ranking result, the stable contract surface other layers
/// serialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedFood {
    pub name: String,
    pub calories: f32,
    pub proteins: f32,
    pub fat: f32,
    pub carbohydrate: f32,
    pub primary_mood: Mood,
    pub similarity_score: f32,
}

impl RankedFood {
    pub fn from_item(item: &FoodItem, similarity_score: f32) -> Self {
        Self {
            name: item.name.clone(),
            calories: item.calories,
            proteins: item.proteins,
            fat: item.fat,
            carbohydrate: item.carbohydrate,
            primary_mood: item.primary_mood,
            similarity_score,
        }
    }
}
