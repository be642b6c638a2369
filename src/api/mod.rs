mod handlers;
mod routes;
mod state;

pub use handlers::{CourseRecommendation, RecommendationResponse, ReloadResponse, TimelineResponse};
pub use routes::create_router;
pub use state::{AppState, AppStateInner};
