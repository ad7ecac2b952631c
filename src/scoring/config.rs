use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::assessment::Dimension;

pub const DEFAULT_ROLE: &str = "Scrum Master";
pub const DEFAULT_PSYCHOMETRIC_QUESTIONS: usize = 10;
pub const DEFAULT_TECHNICAL_ANSWERS: [u32; 8] = [1, 2, 1, 2, 2, 1, 2, 2];
pub const DEFAULT_TECHNICAL_OPTIONS: u32 = 4;
pub const DEFAULT_WISCAR_QUESTIONS: usize = 3;
pub const DEFAULT_YES_THRESHOLD: f64 = 75.0;
pub const DEFAULT_MAYBE_THRESHOLD: f64 = 55.0;

/// Question-bank tables and thresholds the scoring engine is driven by.
///
/// Every field is optional; missing fields fall back to the built-in
/// Scrum Master assessment through the accessor methods.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   role: "Product Owner"
///   psychometric_questions: 12
///   technical_answers: [0, 3, 1, 1, 2]
///   wiscar_questions: { W: 4, R: 2 }
///   thresholds: { yes_min: 80, maybe_min: 60 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Career role named in guidance text
    #[serde(default)]
    pub role: Option<String>,

    /// Number of Likert questions in the psychometric section
    #[serde(default)]
    pub psychometric_questions: Option<usize>,

    /// Correct option index per technical question, in question order.
    /// Its length is the technical question count.
    #[serde(default)]
    pub technical_answers: Option<Vec<u32>>,

    /// Number of options offered by each technical question
    #[serde(default)]
    pub technical_options: Option<u32>,

    /// Questions per WISCAR dimension; unlisted dimensions use the default
    #[serde(default)]
    pub wiscar_questions: Option<BTreeMap<Dimension, usize>>,

    #[serde(default)]
    pub thresholds: Option<Thresholds>,

    #[serde(default)]
    pub guidance: Option<GuidanceConfig>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            role: Some(DEFAULT_ROLE.to_string()),
            psychometric_questions: Some(DEFAULT_PSYCHOMETRIC_QUESTIONS),
            technical_answers: Some(DEFAULT_TECHNICAL_ANSWERS.to_vec()),
            technical_options: Some(DEFAULT_TECHNICAL_OPTIONS),
            wiscar_questions: Some(
                Dimension::ALL
                    .into_iter()
                    .map(|d| (d, DEFAULT_WISCAR_QUESTIONS))
                    .collect(),
            ),
            thresholds: Some(Thresholds::default()),
            guidance: Some(GuidanceConfig::default()),
        }
    }
}

impl ScoringConfig {
    pub fn role(&self) -> &str {
        self.role.as_deref().unwrap_or(DEFAULT_ROLE)
    }

    pub fn psychometric_question_count(&self) -> usize {
        self.psychometric_questions
            .unwrap_or(DEFAULT_PSYCHOMETRIC_QUESTIONS)
    }

    /// Correct option per technical question
    pub fn technical_key(&self) -> &[u32] {
        self.technical_answers
            .as_deref()
            .unwrap_or(&DEFAULT_TECHNICAL_ANSWERS)
    }

    pub fn technical_question_count(&self) -> usize {
        self.technical_key().len()
    }

    pub fn technical_option_count(&self) -> u32 {
        self.technical_options.unwrap_or(DEFAULT_TECHNICAL_OPTIONS)
    }

    pub fn wiscar_question_count(&self, dimension: Dimension) -> usize {
        self.wiscar_questions
            .as_ref()
            .and_then(|counts| counts.get(&dimension).copied())
            .unwrap_or(DEFAULT_WISCAR_QUESTIONS)
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds.unwrap_or_default()
    }

    pub fn guidance(&self) -> GuidanceConfig {
        self.guidance.clone().unwrap_or_default()
    }
}

/// Lower bounds (inclusive) of the YES and MAYBE recommendation bands.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Thresholds {
    pub yes_min: f64,
    pub maybe_min: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            yes_min: DEFAULT_YES_THRESHOLD,
            maybe_min: DEFAULT_MAYBE_THRESHOLD,
        }
    }
}

/// Static next-step content selected by recommendation tier.
///
/// Lists omitted from a config file keep their built-in content.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GuidanceConfig {
    /// Learning pathway for a YES recommendation
    pub begin_training: Vec<String>,

    /// Focus areas for a MAYBE recommendation
    pub develop_gaps: Vec<String>,

    /// Alternative roles for a NO recommendation
    pub alternatives: Vec<String>,
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            begin_training: owned(&[
                "Enroll in Certified ScrumMaster (CSM) training",
                "Join local Agile meetups and communities",
                "Shadow experienced Scrum Masters",
                "Practice facilitation skills in your current role",
            ]),
            develop_gaps: owned(&[
                "Study the Scrum Guide thoroughly",
                "Improve process understanding",
                "Practice conflict resolution techniques",
                "Develop facilitation skills",
            ]),
            alternatives: owned(&[
                "Project Coordinator",
                "Product Owner Associate",
                "Agile Delivery Support",
                "Business Analyst",
            ]),
        }
    }
}
