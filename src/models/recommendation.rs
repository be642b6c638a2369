use serde::{Deserialize, Serialize};

use super::Course;

/// Component scores kept alongside the final fit score so rationale
/// generation never has to recompute similarity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ComponentScores {
    /// Cosine similarity of the profile against the course document, [0,1]
    pub similarity: f64,
    /// Level compatibility, [0,1]
    pub level: f64,
    /// Fraction of prerequisites the learner already covers, [0,1]
    pub prerequisite: f64,
}

/// A catalog entry scored against one profile. Created per request and
/// discarded with the response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredCourse {
    #[serde(flatten)]
    pub course: Course,
    /// Overall fit on a 0-100 scale
    pub fit_score: u8,
    pub scores: ComponentScores,
}

/// Ranked recommendations split by readiness: courses the learner can
/// start now versus courses to work toward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Timeline {
    pub short_term: Vec<ScoredCourse>,
    pub long_term: Vec<ScoredCourse>,
}
