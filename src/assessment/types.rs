use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// WISCAR readiness dimension.
///
/// The set is closed; variant order is the canonical W, I, S, C, A, R order
/// used for iteration, output and averaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "W")]
    Will,
    #[serde(rename = "I")]
    Interest,
    #[serde(rename = "S")]
    Skill,
    #[serde(rename = "C")]
    Cognitive,
    #[serde(rename = "A")]
    Ability,
    #[serde(rename = "R")]
    RealWorld,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Will,
        Dimension::Interest,
        Dimension::Skill,
        Dimension::Cognitive,
        Dimension::Ability,
        Dimension::RealWorld,
    ];

    /// Single-letter code ("W", "I", ...)
    pub fn code(&self) -> &'static str {
        match self {
            Dimension::Will => "W",
            Dimension::Interest => "I",
            Dimension::Skill => "S",
            Dimension::Cognitive => "C",
            Dimension::Ability => "A",
            Dimension::RealWorld => "R",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Will => "Will",
            Dimension::Interest => "Interest",
            Dimension::Skill => "Skill",
            Dimension::Cognitive => "Cognitive Readiness",
            Dimension::Ability => "Ability to Learn",
            Dimension::RealWorld => "Real-World Alignment",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A selected option in the technical section.
///
/// Answers arrive either as a raw option index or as its string encoding
/// (`1` or `"1"`). Any other value (null, bool, float, an integer past
/// i64) is kept as `Malformed` so the response set still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TechnicalAnswer {
    Index(i64),
    Text(String),
    Malformed(serde_json::Value),
}

impl TechnicalAnswer {
    /// Option index, or None if the text does not parse as an integer
    pub fn option_index(&self) -> Option<i64> {
        match self {
            TechnicalAnswer::Index(i) => Some(*i),
            TechnicalAnswer::Text(s) => s.trim().parse().ok(),
            TechnicalAnswer::Malformed(_) => None,
        }
    }
}

impl From<i64> for TechnicalAnswer {
    fn from(value: i64) -> Self {
        TechnicalAnswer::Index(value)
    }
}

impl From<&str> for TechnicalAnswer {
    fn from(value: &str) -> Self {
        TechnicalAnswer::Text(value.to_string())
    }
}

/// Assessment section, as used for progress tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Psychometric,
    Technical,
    Wiscar(Dimension),
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Psychometric => f.write_str("Psychometric"),
            Section::Technical => f.write_str("Technical"),
            Section::Wiscar(d) => write!(f, "WISCAR {} ({})", d.code(), d.name()),
        }
    }
}

/// All answers collected so far.
///
/// Ratings are kept as given; out-of-range values are not rejected here.
/// Recording an answer for a question that already has one replaces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResponseSet {
    /// Question index -> Likert rating (1-5)
    #[serde(default)]
    pub psychometric: BTreeMap<usize, i64>,

    /// Question index -> selected option
    #[serde(default)]
    pub technical: BTreeMap<usize, TechnicalAnswer>,

    /// Dimension -> question index -> Likert rating (1-5)
    #[serde(default)]
    pub wiscar: BTreeMap<Dimension, BTreeMap<usize, i64>>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_psychometric(&mut self, question: usize, rating: i64) {
        self.psychometric.insert(question, rating);
    }

    pub fn record_technical(&mut self, question: usize, answer: impl Into<TechnicalAnswer>) {
        self.technical.insert(question, answer.into());
    }

    pub fn record_wiscar(&mut self, dimension: Dimension, question: usize, rating: i64) {
        self.wiscar
            .entry(dimension)
            .or_default()
            .insert(question, rating);
    }

    /// Total number of answers across all sections
    pub fn answer_count(&self) -> usize {
        self.psychometric.len()
            + self.technical.len()
            + self.wiscar.values().map(BTreeMap::len).sum::<usize>()
    }
}
