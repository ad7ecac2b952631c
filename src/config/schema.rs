use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Question-bank tables and thresholds; built-in assessment if absent
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}
