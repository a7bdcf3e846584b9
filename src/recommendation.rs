//! Ranking orchestrator.
//!
//! Runs the full pipeline (profile build, mood filter, feature selection,
//! normalization, weighting, scoring, penalties, sort, trim) and dispatches
//! to the fallback tiers on any stage that comes up empty or fails. A call
//! against a non-empty catalog always returns a non-empty ranked result.

use crate::features::{self, Feature};
use crate::types::{FoodItem, HealthCondition, Mood, RankedFood, UserProfile};
use crate::{fallback, health, normalize, similarity, weights, RankerConfig};
use thiserror::Error;
use tracing::{debug, info, warn};

/// The only caller-visible failure: ranking requires catalog data.
#[derive(Debug, Error)]
pub enum RankerError {
    #[error("food catalog is empty; load catalog data before ranking")]
    EmptyCatalog,
}

/// Mood- and health-aware food ranking engine.
///
/// Holds an immutable catalog snapshot; every ranking call works on its own
/// score buffers, so concurrent calls through `&self` never observe each
/// other's transient state. Catalog reload is a collaborator concern: swap
/// in a new `FoodRanker` rather than mutating this one.
pub struct FoodRanker {
    catalog: Vec<FoodItem>,
    config: RankerConfig,
}

impl FoodRanker {
    pub fn new(catalog: Vec<FoodItem>) -> Self {
        Self::with_config(catalog, RankerConfig::default())
    }

    pub fn with_config(catalog: Vec<FoodItem>, config: RankerConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &[FoodItem] {
        &self.catalog
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Moods a caller may request.
    pub fn moods() -> &'static [Mood] {
        &[
            Mood::Energizing,
            Mood::Relaxing,
            Mood::Focusing,
            Mood::Neutral,
        ]
    }

    /// Health conditions with defined rules.
    pub fn health_conditions() -> &'static [HealthCondition] {
        &HealthCondition::ALL
    }

    /// Look up catalog items by name: exact matches first, else
    /// case-insensitive substring matches.
    pub fn find_food(&self, name: &str) -> Vec<&FoodItem> {
        let exact: Vec<&FoodItem> = self
            .catalog
            .iter()
            .filter(|item| item.name == name)
            .collect();
        if !exact.is_empty() {
            return exact;
        }
        let needle = name.to_lowercase();
        self.catalog
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Rank the catalog against the requested mood and health conditions and
    /// return at most `top_n` items, best first.
    ///
    /// Unknown mood labels degrade to `neutral` and unknown condition names
    /// are skipped; the only error is an empty catalog.
    pub fn rank(
        &self,
        mood: &str,
        health_conditions: &[String],
        top_n: usize,
    ) -> Result<Vec<RankedFood>, RankerError> {
        if self.catalog.is_empty() {
            return Err(RankerError::EmptyCatalog);
        }

        let target = match Mood::try_parse(mood) {
            Some(m) => m,
            None => {
                warn!(label = mood, "unknown mood label, treating as neutral");
                Mood::Neutral
            }
        };
        let conditions: Vec<HealthCondition> = health_conditions
            .iter()
            .filter_map(|name| {
                let parsed = HealthCondition::try_parse(name);
                if parsed.is_none() {
                    warn!(condition = %name, "unknown health condition, skipping");
                }
                parsed
            })
            .collect();

        info!(mood = %target, conditions = conditions.len(), top_n, "ranking request");

        let profile = UserProfile::build(target, &conditions);

        // Tier 1: an empty mood filter widens to the full catalog.
        let mut subset = self.filter_by_mood(target);
        if subset.is_empty() {
            info!(mood = %target, "mood filter matched nothing, using full catalog");
            subset = self.catalog.iter().collect();
        }
        debug!(candidates = subset.len(), "mood filter");

        // Tier 2: without shared numeric features, similarity is meaningless;
        // rank by the mood heuristic instead.
        let selected = features::select_features(&subset, &profile);
        if selected.is_empty() {
            debug!("no shared features between catalog and profile");
            let mut ranked =
                fallback::heuristic_rank(&subset, target, self.config.heuristic_score);
            ranked.truncate(top_n);
            return Ok(ranked);
        }
        debug!(
            features = ?selected.iter().map(|f| f.column()).collect::<Vec<_>>(),
            "selected features"
        );

        // Tier 3: a scoring failure downgrades to the ultimate fallback
        // rather than surfacing to the caller.
        let scores = match self.score_subset(&subset, &profile, &selected, &conditions) {
            Ok(scores) => scores,
            Err(err) => {
                warn!(error = %err, "scoring failed, using ultimate fallback");
                let mut ranked = fallback::ultimate_rank(
                    &self.catalog,
                    target,
                    &conditions,
                    self.config.ultimate_score,
                );
                ranked.truncate(top_n);
                return Ok(ranked);
            }
        };

        let mut ranked: Vec<(&FoodItem, f32)> = subset.into_iter().zip(scores).collect();
        // Primary key: score, descending. Secondary key: calories, ascending
        // for relaxing (prefer lighter foods among ties), descending
        // otherwise. The sort is stable, so catalog order breaks any
        // remaining ties deterministically.
        ranked.sort_by(|(a, sa), (b, sb)| {
            sb.total_cmp(sa).then_with(|| {
                if target == Mood::Relaxing {
                    a.calories.total_cmp(&b.calories)
                } else {
                    b.calories.total_cmp(&a.calories)
                }
            })
        });
        ranked.truncate(top_n);

        Ok(ranked
            .into_iter()
            .map(|(item, score)| RankedFood::from_item(item, score))
            .collect())
    }

    /// Candidate items for the target mood: the flag column when the catalog
    /// carries it, else label equality; non-active moods select neutral.
    fn filter_by_mood(&self, target: Mood) -> Vec<&FoodItem> {
        match target {
            Mood::Energizing | Mood::Relaxing | Mood::Focusing => {
                let flag_column_present = self
                    .catalog
                    .iter()
                    .any(|item| item.mood_flag(target).is_some());
                if flag_column_present {
                    self.catalog
                        .iter()
                        .filter(|item| item.mood_flag(target) == Some(true))
                        .collect()
                } else {
                    self.catalog
                        .iter()
                        .filter(|item| item.primary_mood == target)
                        .collect()
                }
            }
            Mood::MultiCategory | Mood::Neutral => self
                .catalog
                .iter()
                .filter(|item| item.primary_mood == Mood::Neutral)
                .collect(),
        }
    }

    fn score_subset(
        &self,
        subset: &[&FoodItem],
        profile: &UserProfile,
        selected: &[Feature],
        conditions: &[HealthCondition],
    ) -> anyhow::Result<Vec<f32>> {
        let (foods_scaled, user_scaled) = normalize::normalize(subset, profile, selected);
        let feature_weights = weights::feature_weights(selected, conditions, &self.config);
        let mut scores =
            similarity::score_candidates(&foods_scaled, &user_scaled, &feature_weights)?;

        if !conditions.is_empty() {
            health::apply_penalties(subset, &mut scores, conditions);
        }
        Ok(scores)
    }
}
