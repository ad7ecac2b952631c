use serde::Serialize;

use super::config::{GuidanceConfig, Thresholds};
use super::engine::ScoreReport;
use super::tier::{classify, RecommendationTier};
use crate::assessment::Dimension;

/// Next-step content shown with a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GuidanceContent {
    LearningPath {
        headline: String,
        summary: String,
        steps: Vec<String>,
    },
    AlternativePaths {
        headline: String,
        summary: String,
        roles: Vec<String>,
    },
}

impl GuidanceContent {
    pub fn headline(&self) -> &str {
        match self {
            GuidanceContent::LearningPath { headline, .. }
            | GuidanceContent::AlternativePaths { headline, .. } => headline,
        }
    }

    pub fn summary(&self) -> &str {
        match self {
            GuidanceContent::LearningPath { summary, .. }
            | GuidanceContent::AlternativePaths { summary, .. } => summary,
        }
    }

    /// Ordered steps or alternative roles
    pub fn items(&self) -> &[String] {
        match self {
            GuidanceContent::LearningPath { steps, .. } => steps,
            GuidanceContent::AlternativePaths { roles, .. } => roles,
        }
    }
}

/// Select the guidance for a tier. YES and MAYBE get a learning path, NO
/// gets alternative roles.
pub fn derive_guidance(
    tier: RecommendationTier,
    role: &str,
    content: &GuidanceConfig,
) -> GuidanceContent {
    match tier {
        RecommendationTier::Yes => GuidanceContent::LearningPath {
            headline: "Strong Match - Begin Training".to_string(),
            summary: format!("You show excellent potential for becoming a {}!", role),
            steps: content.begin_training.clone(),
        },
        RecommendationTier::Maybe => GuidanceContent::LearningPath {
            headline: "Potential Match - Develop Gaps".to_string(),
            summary: "You have good potential with some areas for improvement.".to_string(),
            steps: content.develop_gaps.clone(),
        },
        RecommendationTier::No => GuidanceContent::AlternativePaths {
            headline: "Consider Alternative Paths".to_string(),
            summary: format!(
                "{} may not be the best fit. Consider these alternatives:",
                role
            ),
            roles: content.alternatives.clone(),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapLevel {
    Strength,
    Developing,
    Gap,
}

impl GapLevel {
    pub fn label(&self) -> &'static str {
        match self {
            GapLevel::Strength => "Strength",
            GapLevel::Developing => "Developing",
            GapLevel::Gap => "Gap",
        }
    }
}

/// One row of the skill-gap table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGap {
    pub area: String,
    pub score: f64,
    pub level: GapLevel,
}

impl From<RecommendationTier> for GapLevel {
    fn from(tier: RecommendationTier) -> Self {
        match tier {
            RecommendationTier::Yes => GapLevel::Strength,
            RecommendationTier::Maybe => GapLevel::Developing,
            RecommendationTier::No => GapLevel::Gap,
        }
    }
}

/// Rate every scored area against the recommendation bands: psychometric,
/// technical, then each WISCAR dimension in W, I, S, C, A, R order.
pub fn skill_gaps(report: &ScoreReport, thresholds: &Thresholds) -> Vec<SkillGap> {
    let mut areas = vec![
        ("Psychometric".to_string(), report.psychometric_score),
        ("Technical".to_string(), report.technical_score),
    ];
    areas.extend(
        Dimension::ALL
            .into_iter()
            .map(|d| (d.name().to_string(), report.wiscar_score(d))),
    );

    areas
        .into_iter()
        .map(|(area, score)| SkillGap {
            level: classify(score, thresholds).into(),
            area,
            score,
        })
        .collect()
}
