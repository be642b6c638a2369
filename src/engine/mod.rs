mod policy;
mod rationale;
mod scorers;
mod stopwords;
mod tfidf;
mod timeline;

pub use policy::MatchPolicy;
pub use rationale::rationale;
pub use scorers::{
    domain_bonus, interest_bonus, level_match, prerequisite_match, prerequisite_satisfied,
    skill_similarity,
};
pub use tfidf::TfidfIndex;
pub use timeline::partition_timeline;

use thiserror::Error;

use crate::models::{ComponentScores, Course, ScoredCourse, Timeline, UserProfile};

/// Error types for the matching engine
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Course catalog is empty")]
    EmptyCatalog,
}

/// Matching engine: an immutable catalog plus its similarity index and
/// the scoring policy.
///
/// Built once at startup (and rebuilt wholesale on catalog reload);
/// every field is read-only afterwards, so one instance can serve
/// concurrent requests without synchronization.
pub struct MatchingEngine {
    catalog: Vec<Course>,
    index: TfidfIndex,
    policy: MatchPolicy,
}

impl MatchingEngine {
    /// Builds the similarity index and wraps the catalog.
    /// Fails only on an empty catalog.
    pub fn new(catalog: Vec<Course>, policy: MatchPolicy) -> Result<Self, EngineError> {
        if catalog.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }

        let documents: Vec<String> = catalog.iter().map(Course::document_text).collect();
        let index = TfidfIndex::build(&documents, policy.max_vocabulary);
        tracing::info!(
            courses = catalog.len(),
            vocabulary = index.vocabulary_len(),
            "Built matching engine"
        );

        Ok(Self {
            catalog,
            index,
            policy,
        })
    }

    pub fn catalog(&self) -> &[Course] {
        &self.catalog
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// Ranks the whole catalog against `profile` using the engine's policy
    /// defaults for top-K and threshold.
    pub fn recommend(&self, profile: &UserProfile) -> Vec<ScoredCourse> {
        self.rank(profile, self.policy.top_k, self.policy.min_fit_score)
    }

    /// Scores every catalog entry against `profile`, keeps entries whose
    /// fit score is strictly above `min_fit_score`, sorts descending by
    /// fit score (stable, so catalog order breaks ties), and truncates
    /// to `top_k`.
    pub fn rank(
        &self,
        profile: &UserProfile,
        top_k: usize,
        min_fit_score: u8,
    ) -> Vec<ScoredCourse> {
        let similarities = self.index.score(&profile.query_text());

        let mut scored: Vec<ScoredCourse> = self
            .catalog
            .iter()
            .zip(similarities)
            .filter_map(|(course, similarity)| match self.score_course(profile, course, similarity) {
                Some(scored) => Some(scored),
                None => {
                    tracing::warn!(title = %course.title, "Skipping course with invalid score");
                    None
                }
            })
            .filter(|scored| scored.fit_score > min_fit_score)
            .collect();

        scored.sort_by(|a, b| b.fit_score.cmp(&a.fit_score));
        scored.truncate(top_k);
        scored
    }

    /// Scores one entry. Returns None when the combined score is not a
    /// finite number, so a single bad entry never aborts the whole pass.
    fn score_course(
        &self,
        profile: &UserProfile,
        course: &Course,
        similarity: f64,
    ) -> Option<ScoredCourse> {
        let level = level_match(profile.level, course.level);
        let prerequisite = prerequisite_match(&profile.technical_skills, &course.prerequisites);

        let combined = (self.policy.similarity_weight * similarity
            + self.policy.level_weight * level
            + self.policy.prerequisite_weight * prerequisite)
            * domain_bonus(
                profile.target_domain.as_deref(),
                &course.domain,
                self.policy.domain_bonus,
            )
            * interest_bonus(&profile.interests, &course.domain, self.policy.interest_bonus);

        if !combined.is_finite() {
            return None;
        }

        let fit_score = (combined.clamp(0.0, 1.0) * 100.0).floor() as u8;

        Some(ScoredCourse {
            course: course.clone(),
            fit_score,
            scores: ComponentScores {
                similarity,
                level,
                prerequisite,
            },
        })
    }

    /// Splits a ranked list into short-term and long-term buckets.
    pub fn timeline(&self, ranked: &[ScoredCourse], profile: &UserProfile) -> Timeline {
        partition_timeline(
            ranked,
            profile,
            self.policy.short_term_cap,
            self.policy.long_term_cap,
        )
    }
}
