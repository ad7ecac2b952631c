use super::types::{Dimension, ResponseSet, Section};
use crate::scoring::ScoringConfig;

/// How far one section of the questionnaire has been answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionProgress {
    pub section: Section,
    pub answered: usize,
    pub expected: usize,
}

impl SectionProgress {
    /// A section is complete when its answer count equals its question count
    pub fn is_complete(&self) -> bool {
        self.answered == self.expected
    }
}

/// Progress for every section: psychometric, technical, then W, I, S, C, A, R.
pub fn progress(responses: &ResponseSet, config: &ScoringConfig) -> Vec<SectionProgress> {
    let mut rows = vec![
        SectionProgress {
            section: Section::Psychometric,
            answered: responses.psychometric.len(),
            expected: config.psychometric_question_count(),
        },
        SectionProgress {
            section: Section::Technical,
            answered: responses.technical.len(),
            expected: config.technical_question_count(),
        },
    ];

    rows.extend(Dimension::ALL.into_iter().map(|dimension| SectionProgress {
        section: Section::Wiscar(dimension),
        answered: responses.wiscar.get(&dimension).map_or(0, |a| a.len()),
        expected: config.wiscar_question_count(dimension),
    }));

    rows
}

pub fn is_complete(responses: &ResponseSet, config: &ScoringConfig) -> bool {
    progress(responses, config)
        .iter()
        .all(SectionProgress::is_complete)
}
