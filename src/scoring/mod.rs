pub mod config;
pub mod engine;
pub mod guidance;
pub mod tier;
pub mod validation;

pub use config::*;
pub use engine::{
    aggregate, calculate_report, round_percent, score_psychometric, score_technical, score_wiscar,
    ScoreReport,
};
pub use guidance::{derive_guidance, skill_gaps, GapLevel, GuidanceContent, SkillGap};
pub use tier::{classify, RecommendationTier};
pub use validation::{validate_responses, validate_scoring};
