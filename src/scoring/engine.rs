use serde::Serialize;
use std::collections::BTreeMap;

use super::config::{ScoringConfig, Thresholds};
use super::tier::{classify, RecommendationTier};
use crate::assessment::{Dimension, ResponseSet, TechnicalAnswer};

/// Highest rating on the Likert scale
const LIKERT_MAX: f64 = 5.0;

/// Scores for one evaluation of a response set. All values are percentages
/// and are stored unrounded; use [`round_percent`] for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub psychometric_score: f64,
    pub technical_score: f64,
    /// Always holds all six dimensions
    pub wiscar_scores: BTreeMap<Dimension, f64>,
    pub wiscar_average: f64,
    pub overall_score: f64,
    pub recommendation_tier: RecommendationTier,
}

impl ScoreReport {
    pub fn display_overall(&self) -> i64 {
        round_percent(self.overall_score)
    }

    pub fn wiscar_score(&self, dimension: Dimension) -> f64 {
        self.wiscar_scores.get(&dimension).copied().unwrap_or(0.0)
    }
}

/// Round a percentage to the nearest integer, halves away from zero
pub fn round_percent(value: f64) -> i64 {
    value.round() as i64
}

/// Sum of ratings against the maximum possible sum, as a percentage.
fn likert_percent(ratings: &BTreeMap<usize, i64>) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: f64 = ratings.values().map(|&r| r as f64).sum();
    let max = ratings.len() as f64 * LIKERT_MAX;
    sum * 100.0 / max
}

pub fn score_psychometric(answers: &BTreeMap<usize, i64>) -> f64 {
    likert_percent(answers)
}

/// Share of given answers that match the correct option for their question.
///
/// Answers that do not parse, or whose question has no entry in
/// `correct_answers`, count as incorrect.
pub fn score_technical(
    answers: &BTreeMap<usize, TechnicalAnswer>,
    correct_answers: &[u32],
) -> f64 {
    if answers.is_empty() {
        return 0.0;
    }

    let matches = answers
        .iter()
        .filter(|(question, answer)| {
            match (answer.option_index(), correct_answers.get(**question)) {
                (Some(selected), Some(&correct)) => selected == i64::from(correct),
                _ => false,
            }
        })
        .count();

    matches as f64 * 100.0 / answers.len() as f64
}

/// Per-dimension Likert percentage. Missing or empty dimensions score 0.
pub fn score_wiscar(
    dimensions: &BTreeMap<Dimension, BTreeMap<usize, i64>>,
) -> BTreeMap<Dimension, f64> {
    Dimension::ALL
        .into_iter()
        .map(|dimension| {
            let score = dimensions.get(&dimension).map_or(0.0, likert_percent);
            (dimension, score)
        })
        .collect()
}

/// Combine section scores into a report.
///
/// The WISCAR average always has six terms, and the overall score is the
/// unweighted mean of the three sections.
pub fn aggregate(
    psychometric: f64,
    technical: f64,
    wiscar_scores: &BTreeMap<Dimension, f64>,
    thresholds: &Thresholds,
) -> ScoreReport {
    let wiscar_scores: BTreeMap<Dimension, f64> = Dimension::ALL
        .into_iter()
        .map(|d| (d, wiscar_scores.get(&d).copied().unwrap_or(0.0)))
        .collect();

    let wiscar_average = wiscar_scores.values().sum::<f64>() / Dimension::ALL.len() as f64;
    let overall_score = (psychometric + technical + wiscar_average) / 3.0;

    ScoreReport {
        psychometric_score: psychometric,
        technical_score: technical,
        wiscar_scores,
        wiscar_average,
        overall_score,
        recommendation_tier: classify(overall_score, thresholds),
    }
}

/// Score a response set end to end.
pub fn calculate_report(responses: &ResponseSet, config: &ScoringConfig) -> ScoreReport {
    let psychometric = score_psychometric(&responses.psychometric);
    let technical = score_technical(&responses.technical, config.technical_key());
    let wiscar = score_wiscar(&responses.wiscar);
    aggregate(psychometric, technical, &wiscar, &config.thresholds())
}
