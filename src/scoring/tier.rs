use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::config::Thresholds;

/// Categorical recommendation derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecommendationTier {
    Yes,
    Maybe,
    No,
}

impl RecommendationTier {
    pub fn verdict(&self) -> &'static str {
        match self {
            RecommendationTier::Yes => "YES",
            RecommendationTier::Maybe => "MAYBE",
            RecommendationTier::No => "NO",
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            RecommendationTier::Yes => "Strong Match",
            RecommendationTier::Maybe => "Potential Match",
            RecommendationTier::No => "Not the Right Fit",
        }
    }
}

impl fmt::Display for RecommendationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verdict())
    }
}

impl FromStr for RecommendationTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "YES" => Ok(RecommendationTier::Yes),
            "MAYBE" => Ok(RecommendationTier::Maybe),
            "NO" => Ok(RecommendationTier::No),
            other => Err(format!("unknown tier '{}', expected YES, MAYBE or NO", other)),
        }
    }
}

/// Map an overall score to its tier. Band lower bounds are inclusive.
pub fn classify(overall_score: f64, thresholds: &Thresholds) -> RecommendationTier {
    if overall_score >= thresholds.yes_min {
        RecommendationTier::Yes
    } else if overall_score >= thresholds.maybe_min {
        RecommendationTier::Maybe
    } else {
        RecommendationTier::No
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        let t = Thresholds::default();
        assert_eq!(classify(75.0, &t), RecommendationTier::Yes);
        assert_eq!(classify(74.999, &t), RecommendationTier::Maybe);
        assert_eq!(classify(55.0, &t), RecommendationTier::Maybe);
        assert_eq!(classify(54.999, &t), RecommendationTier::No);
    }

    #[test]
    fn test_classify_extremes() {
        let t = Thresholds::default();
        assert_eq!(classify(100.0, &t), RecommendationTier::Yes);
        assert_eq!(classify(0.0, &t), RecommendationTier::No);
    }

    #[test]
    fn test_classify_custom_thresholds() {
        let t = Thresholds { yes_min: 90.0, maybe_min: 40.0 };
        assert_eq!(classify(89.0, &t), RecommendationTier::Maybe);
        assert_eq!(classify(40.0, &t), RecommendationTier::Maybe);
        assert_eq!(classify(39.0, &t), RecommendationTier::No);
    }

    #[test]
    fn test_tier_serde_uppercase() {
        let json = serde_json::to_string(&RecommendationTier::Maybe).unwrap();
        assert_eq!(json, "\"MAYBE\"");
    }

    #[test]
    fn test_tier_from_str() {
        assert_eq!("yes".parse::<RecommendationTier>(), Ok(RecommendationTier::Yes));
        assert_eq!(" NO ".parse::<RecommendationTier>(), Ok(RecommendationTier::No));
        assert!("perhaps".parse::<RecommendationTier>().is_err());
    }
}
