//! End-to-end ranking scenarios: determinism, bounds, fallback tiers,
//! penalties, and degenerate inputs.

use crate::types::{FoodItem, Mood};
use crate::{FoodRanker, RankerError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TOLERANCE: f32 = 1e-5;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn plain_item(name: &str, mood: Mood, calories: f32) -> FoodItem {
    FoodItem {
        name: name.to_string(),
        calories,
        proteins: 5.0,
        fat: 2.0,
        carbohydrate: 20.0,
        primary_mood: mood,
        ..FoodItem::default()
    }
}

/// Item with the derived numeric columns the similarity path needs.
fn encoded_item(name: &str, mood: Mood, calories: f32, carb_category: f32) -> FoodItem {
    FoodItem {
        primary_mood_num: Some(f32::from(mood.code())),
        carb_category_num: Some(carb_category),
        ..plain_item(name, mood, calories)
    }
}

fn conditions(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn repeated_calls_return_identical_results() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(42);
    let catalog: Vec<FoodItem> = (0..50)
        .map(|i| {
            let mood = match i % 4 {
                0 => Mood::Energizing,
                1 => Mood::Relaxing,
                2 => Mood::Focusing,
                _ => Mood::Neutral,
            };
            FoodItem {
                primary_mood_num: Some(f32::from(mood.code())),
                carb_category_num: Some(rng.gen_range(0..5) as f32),
                fat_category_num: Some(rng.gen_range(0..5) as f32),
                calorie_category_num: Some(rng.gen_range(0..5) as f32),
                ..plain_item(&format!("food-{i}"), mood, rng.gen_range(10.0..600.0))
            }
        })
        .collect();
    let ranker = FoodRanker::new(catalog);

    let health = conditions(&["diabetes", "kolesterol"]);
    let first = ranker.rank("energizing", &health, 10).unwrap();
    let second = ranker.rank("energizing", &health, 10).unwrap();
    assert_eq!(first, second);
}

#[test]
fn result_length_is_bounded_by_top_n_and_catalog_size() {
    let catalog = vec![
        plain_item("a", Mood::Energizing, 100.0),
        plain_item("b", Mood::Energizing, 200.0),
        plain_item("c", Mood::Energizing, 300.0),
    ];
    let ranker = FoodRanker::new(catalog);

    assert_eq!(ranker.rank("energizing", &[], 2).unwrap().len(), 2);
    // top_n larger than the catalog is fine.
    assert_eq!(ranker.rank("energizing", &[], 100).unwrap().len(), 3);
    assert!(ranker.rank("energizing", &[], 0).unwrap().is_empty());
}

#[test]
fn empty_mood_filter_falls_back_to_full_catalog() {
    // No energizing items at all: tier 1 widens to the whole catalog.
    let catalog = vec![
        plain_item("a", Mood::Relaxing, 100.0),
        plain_item("b", Mood::Relaxing, 200.0),
        plain_item("c", Mood::Neutral, 300.0),
    ];
    let ranker = FoodRanker::new(catalog);

    let ranked = ranker.rank("energizing", &[], 5).unwrap();
    assert_eq!(ranked.len(), 3);
}

#[test]
fn relaxing_ties_break_by_ascending_calories() {
    // All three share the mood and an identical (zero-variance) feature set,
    // so similarity ties at 1.0 and the secondary key decides.
    let catalog = vec![
        encoded_item("mid", Mood::Relaxing, 150.0, 2.0),
        encoded_item("heavy", Mood::Relaxing, 300.0, 2.0),
        encoded_item("light", Mood::Relaxing, 50.0, 2.0),
    ];
    let ranker = FoodRanker::new(catalog);

    let ranked = ranker.rank("relaxing", &[], 3).unwrap();
    assert_eq!(ranked.len(), 3);
    let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["light", "mid", "heavy"]);
    for row in &ranked {
        assert!((row.similarity_score - 1.0).abs() < TOLERANCE);
    }
}

#[test]
fn non_relaxing_ties_break_by_descending_calories() {
    let catalog = vec![
        encoded_item("light", Mood::Energizing, 50.0, 2.0),
        encoded_item("heavy", Mood::Energizing, 300.0, 2.0),
    ];
    let ranker = FoodRanker::new(catalog);

    let ranked = ranker.rank("energizing", &[], 2).unwrap();
    assert_eq!(ranked[0].name, "heavy");
}

#[test]
fn catalog_without_numeric_columns_uses_heuristic_tier() {
    init_tracing();
    let catalog = vec![
        plain_item("heavy", Mood::Relaxing, 300.0),
        plain_item("light", Mood::Relaxing, 50.0),
    ];
    let ranker = FoodRanker::new(catalog);

    let ranked = ranker.rank("relaxing", &[], 5).unwrap();
    // Heuristic tier: relaxing sorts ascending by calories and marks every
    // row with the placeholder score.
    assert_eq!(ranked[0].name, "light");
    for row in &ranked {
        assert!((row.similarity_score - 0.8).abs() < TOLERANCE);
    }
}

#[test]
fn diabetes_penalty_subtracts_exactly_its_amount() {
    // Zero-variance features make the raw similarity exactly 1.0 in both
    // catalogs; the only difference is whether the carb ordinal crosses the
    // penalty threshold.
    let flagged = vec![
        encoded_item("a", Mood::Energizing, 100.0, 4.0),
        encoded_item("b", Mood::Energizing, 100.0, 4.0),
    ];
    let unflagged = vec![
        encoded_item("a", Mood::Energizing, 100.0, 1.0),
        encoded_item("b", Mood::Energizing, 100.0, 1.0),
    ];
    let health = conditions(&["diabetes"]);

    let penalized = FoodRanker::new(flagged).rank("energizing", &health, 2).unwrap();
    let clean = FoodRanker::new(unflagged).rank("energizing", &health, 2).unwrap();

    assert!((clean[0].similarity_score - 1.0).abs() < TOLERANCE);
    assert!(
        (clean[0].similarity_score - penalized[0].similarity_score - 0.10).abs() < TOLERANCE
    );
}

#[test]
fn unknown_mood_is_treated_as_neutral() {
    let catalog = vec![
        plain_item("neutral", Mood::Neutral, 100.0),
        plain_item("energizing", Mood::Energizing, 100.0),
    ];
    let ranker = FoodRanker::new(catalog);

    let ranked = ranker.rank("sad", &[], 5).unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].name, "neutral");
}

#[test]
fn unknown_health_conditions_are_skipped() {
    let catalog = vec![encoded_item("a", Mood::Energizing, 100.0, 4.0)];
    let ranker = FoodRanker::new(catalog);

    let with_noise = ranker
        .rank("energizing", &conditions(&["diabetes", "lactose"]), 1)
        .unwrap();
    let without = ranker
        .rank("energizing", &conditions(&["diabetes"]), 1)
        .unwrap();
    assert_eq!(with_noise, without);
}

#[test]
fn mood_flag_column_beats_label_when_present() {
    let mut tagged = plain_item("tagged", Mood::Neutral, 100.0);
    tagged.is_energizing = Some(true);
    let mut untagged = plain_item("untagged", Mood::Energizing, 100.0);
    untagged.is_energizing = Some(false);
    let ranker = FoodRanker::new(vec![tagged, untagged]);

    let ranked = ranker.rank("energizing", &[], 5).unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].name, "tagged");
}

#[test]
fn empty_catalog_surfaces_the_precondition_error() {
    let ranker = FoodRanker::new(Vec::new());
    assert!(matches!(
        ranker.rank("relaxing", &[], 3),
        Err(RankerError::EmptyCatalog)
    ));
}

#[test]
fn catalog_rows_deserialize_with_missing_optional_columns() {
    let json = r#"[
        {"name": "Nasi Putih", "calories": 130.0, "proteins": 2.7, "fat": 0.3,
         "carbohydrate": 28.0, "primary_mood": "energizing",
         "carb_category_num": 4.0, "primary_mood_num": 0.0},
        {"name": "Sayur Bayam", "calories": 23.0, "proteins": 2.9, "fat": 0.4,
         "carbohydrate": 3.6, "primary_mood": "relaxing"}
    ]"#;
    let catalog: Vec<FoodItem> = serde_json::from_str(json).unwrap();
    assert_eq!(catalog[1].carb_category_num, None);

    let ranker = FoodRanker::new(catalog);
    let ranked = ranker.rank("energizing", &conditions(&["diabetes"]), 5).unwrap();
    assert!(!ranked.is_empty());
    assert_eq!(ranked[0].name, "Nasi Putih");
}
