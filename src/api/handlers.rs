use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::catalog::load_catalog;
use crate::engine::{rationale, MatchingEngine};
use crate::error::AppResult;
use crate::models::{Cost, Course, Level, ScoredCourse, Timeline, UserProfile};

use super::AppState;

// Request/Response types

/// One recommendation as returned to the client
#[derive(Debug, Serialize)]
pub struct CourseRecommendation {
    pub title: String,
    pub provider: String,
    pub duration: String,
    pub level: Level,
    pub fit_score: u8,
    pub link: String,
    pub domain: String,
    pub cost: Cost,
    pub rationale: String,
}

impl CourseRecommendation {
    fn new(scored: &ScoredCourse, profile: &UserProfile) -> Self {
        let rationale = rationale(scored, profile);
        let course = &scored.course;
        Self {
            title: course.title.clone(),
            provider: course.provider.clone(),
            duration: course.duration.clone(),
            level: course.level,
            fit_score: scored.fit_score,
            link: course.link.clone(),
            domain: course.domain.clone(),
            cost: course.cost,
            rationale,
        }
    }
}

/// Ranked recommendations split into readiness buckets
#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub short_term: Vec<CourseRecommendation>,
    pub long_term: Vec<CourseRecommendation>,
}

impl TimelineResponse {
    fn new(timeline: &Timeline, profile: &UserProfile) -> Self {
        let annotate = |bucket: &[ScoredCourse]| {
            bucket
                .iter()
                .map(|scored| CourseRecommendation::new(scored, profile))
                .collect()
        };
        Self {
            short_term: annotate(&timeline.short_term),
            long_term: annotate(&timeline.long_term),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<CourseRecommendation>,
    pub timeline: TimelineResponse,
}

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub courses: usize,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get the full course catalog
pub async fn get_courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    let inner = state.inner.read().await;
    Json(inner.engine.catalog().to_vec())
}

/// Rank the catalog against the submitted profile and return the
/// recommendations with their timeline split. An empty result set is a
/// normal response, not an error.
pub async fn recommend(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> AppResult<Json<RecommendationResponse>> {
    let inner = state.inner.read().await;

    let ranked = inner.engine.recommend(&profile);
    let timeline = inner.engine.timeline(&ranked, &profile);
    tracing::info!(
        recommendations = ranked.len(),
        short_term = timeline.short_term.len(),
        long_term = timeline.long_term.len(),
        "Generated recommendations"
    );

    let recommendations = ranked
        .iter()
        .map(|scored| CourseRecommendation::new(scored, &profile))
        .collect();

    Ok(Json(RecommendationResponse {
        recommendations,
        timeline: TimelineResponse::new(&timeline, &profile),
    }))
}

/// Rebuild the engine from the configured catalog file and swap it in.
/// The new index is fully built before the write lock is taken, so
/// in-flight requests keep reading the old one.
pub async fn reload_catalog(State(state): State<AppState>) -> AppResult<Json<ReloadResponse>> {
    let catalog_path = {
        let inner = state.inner.read().await;
        inner.catalog_path.clone()
    };

    let catalog = load_catalog(&catalog_path)?;
    let courses = catalog.len();
    let policy = {
        let inner = state.inner.read().await;
        *inner.engine.policy()
    };
    let engine = MatchingEngine::new(catalog, policy)?;

    let mut inner = state.inner.write().await;
    inner.engine = engine;

    Ok(Json(ReloadResponse { courses }))
}
