/// The single, tunable scoring policy.
///
/// Earlier iterations of the product carried several divergent formulas
/// (keyword-overlap similarity, a 3x3 level lookup table, a 1.5 domain
/// bonus). This struct is the one canonical policy: TF-IDF cosine
/// similarity blended with the ordinal-distance level rule, with every
/// weight and cap named here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchPolicy {
    /// Weight of the TF-IDF cosine similarity component
    pub similarity_weight: f64,
    /// Weight of the level-compatibility component
    pub level_weight: f64,
    /// Weight of the prerequisite-coverage component
    pub prerequisite_weight: f64,
    /// Multiplier when the target domain matches the course domain
    pub domain_bonus: f64,
    /// Multiplier when an interest matches the course domain
    pub interest_bonus: f64,
    /// Recommendations must score strictly above this, 0-100 scale
    pub min_fit_score: u8,
    /// Maximum number of recommendations returned
    pub top_k: usize,
    /// Cap on the similarity index vocabulary
    pub max_vocabulary: usize,
    /// Cap on the short-term timeline bucket
    pub short_term_cap: usize,
    /// Cap on the long-term timeline bucket
    pub long_term_cap: usize,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            similarity_weight: 0.5,
            level_weight: 0.25,
            prerequisite_weight: 0.25,
            domain_bonus: 1.2,
            interest_bonus: 1.2,
            min_fit_score: 20,
            top_k: 10,
            max_vocabulary: 1000,
            short_term_cap: 3,
            long_term_cap: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let policy = MatchPolicy::default();
        let sum = policy.similarity_weight + policy.level_weight + policy.prerequisite_weight;
        assert!((sum - 1.0).abs() < f64::EPSILON);
    }
}
