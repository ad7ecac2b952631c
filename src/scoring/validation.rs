use super::config::ScoringConfig;
use crate::assessment::{Dimension, ResponseSet};

const RATING_RANGE: std::ops::RangeInclusive<i64> = 1..=5;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(thresholds) = config.thresholds {
        let bounds = [
            ("yes_min", thresholds.yes_min),
            ("maybe_min", thresholds.maybe_min),
        ];
        for (name, value) in bounds {
            if !(0.0..=100.0).contains(&value) {
                errors.push(format!(
                    "scoring.thresholds.{}: must be between 0 and 100, got {}",
                    name, value
                ));
            }
        }
        if thresholds.maybe_min > thresholds.yes_min {
            errors.push(format!(
                "scoring.thresholds: maybe_min ({}) must not exceed yes_min ({})",
                thresholds.maybe_min, thresholds.yes_min
            ));
        }
    }

    if config.psychometric_questions == Some(0) {
        errors.push("scoring.psychometric_questions: must be at least 1".to_string());
    }

    if config.technical_options == Some(0) {
        errors.push("scoring.technical_options: must be at least 1".to_string());
    }

    if let Some(ref answers) = config.technical_answers {
        if answers.is_empty() {
            errors.push("scoring.technical_answers: must list at least one answer".to_string());
        }
    }

    let options = config.technical_option_count();
    if options > 0 {
        for (i, &correct) in config.technical_key().iter().enumerate() {
            if correct >= options {
                errors.push(format!(
                    "scoring.technical_answers[{}]: option {} out of range \
                     (questions have {} options)",
                    i, correct, options
                ));
            }
        }
    }

    if let Some(ref counts) = config.wiscar_questions {
        for (dimension, &count) in counts {
            if count == 0 {
                errors.push(format!(
                    "scoring.wiscar_questions.{}: must be at least 1",
                    dimension.code()
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Optional stricter check of a response set before scoring.
///
/// Scoring accepts anything; this reports ratings outside 1-5, question
/// indices past a section's length and technical answers that are not a
/// valid option.
pub fn validate_responses(
    responses: &ResponseSet,
    config: &ScoringConfig,
) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    check_ratings(
        "psychometric",
        &responses.psychometric,
        config.psychometric_question_count(),
        &mut errors,
    );

    let technical_count = config.technical_question_count();
    let options = i64::from(config.technical_option_count());
    for (&question, answer) in &responses.technical {
        if question >= technical_count {
            errors.push(format!(
                "technical[{}]: question index out of range (section has {} questions)",
                question, technical_count
            ));
        }
        match answer.option_index() {
            Some(selected) if (0..options).contains(&selected) => {}
            Some(selected) => errors.push(format!(
                "technical[{}]: option {} out of range (questions have {} options)",
                question, selected, options
            )),
            None => errors.push(format!(
                "technical[{}]: answer {:?} is not an option index",
                question, answer
            )),
        }
    }

    for dimension in Dimension::ALL {
        if let Some(ratings) = responses.wiscar.get(&dimension) {
            check_ratings(
                &format!("wiscar.{}", dimension.code()),
                ratings,
                config.wiscar_question_count(dimension),
                &mut errors,
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_ratings(
    section: &str,
    ratings: &std::collections::BTreeMap<usize, i64>,
    question_count: usize,
    errors: &mut Vec<String>,
) {
    for (&question, &rating) in ratings {
        if question >= question_count {
            errors.push(format!(
                "{}[{}]: question index out of range (section has {} questions)",
                section, question, question_count
            ));
        }
        if !RATING_RANGE.contains(&rating) {
            errors.push(format!(
                "{}[{}]: rating {} outside 1-5",
                section, question, rating
            ));
        }
    }
}
