// Route exports
pub mod dashboard;
pub mod insights;
pub mod matches;

use actix_web::{web, HttpResponse};
use std::sync::Arc;
use validator::Validate;

use crate::config::RecommendationSettings;
use crate::models::{ErrorResponse, MatchmakingWeights};
use crate::services::Dataset;

/// Application state shared across all handlers
///
/// The dataset is loaded once at startup and only ever read.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub weights: MatchmakingWeights,
    pub recommendations: RecommendationSettings,
}

impl AppState {
    pub fn new(dataset: Dataset, weights: MatchmakingWeights, recommendations: RecommendationSettings) -> Self {
        Self {
            dataset: Arc::new(dataset),
            weights,
            recommendations,
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(dashboard::configure)
            .configure(insights::configure)
            .configure(matches::configure),
    );
}

/// 400 response for a request that fails validation, `None` when it is valid
pub(crate) fn validation_error<T: Validate>(request: &T) -> Option<HttpResponse> {
    request.validate().err().map(|errors| {
        tracing::info!("Validation failed: field_errors={:?}", errors);
        HttpResponse::BadRequest().json(ErrorResponse::bad_request("Validation failed", errors.to_string()))
    })
}
