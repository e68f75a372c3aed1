use actix_web::{web, HttpResponse, Responder};

use crate::core::MatchMaker;
use crate::models::{FairMatchesResponse, MatchRequest, TrainingPartnersResponse};
use crate::routes::{validation_error, AppState};

/// Upper bound on `top_k`
const MAX_TOP_K: usize = 50;

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/matches/fair", web::post().to(find_fair_matches))
        .route("/matches/training", web::post().to(find_training_partners));
}

/// Find fair opponents endpoint
///
/// POST /api/v1/matches/fair
///
/// Request body:
/// ```json
/// {
///   "boxer_name": "string",
///   "top_k": 5
/// }
/// ```
async fn find_fair_matches(state: web::Data<AppState>, req: web::Json<MatchRequest>) -> impl Responder {
    if let Some(resp) = validation_error(&*req) {
        return resp;
    }

    let top_k = (req.top_k as usize).min(MAX_TOP_K);

    // Profiles are rebuilt from the current table on every call
    let maker = MatchMaker::new(state.dataset.records(), state.weights);
    let matches = maker.find_fair_matches(&req.boxer_name, top_k);

    tracing::info!("Returning {} fair matches for {}", matches.len(), req.boxer_name);

    HttpResponse::Ok().json(FairMatchesResponse {
        boxer_name: req.boxer_name.clone(),
        matches,
    })
}

/// Find training partners endpoint
///
/// POST /api/v1/matches/training
async fn find_training_partners(state: web::Data<AppState>, req: web::Json<MatchRequest>) -> impl Responder {
    if let Some(resp) = validation_error(&*req) {
        return resp;
    }

    let top_k = (req.top_k as usize).min(MAX_TOP_K);

    let maker = MatchMaker::new(state.dataset.records(), state.weights);
    let partners = maker.find_training_partners(&req.boxer_name, top_k);

    tracing::info!("Returning {} training partners for {}", partners.len(), req.boxer_name);

    HttpResponse::Ok().json(TrainingPartnersResponse {
        boxer_name: req.boxer_name.clone(),
        partners,
    })
}
