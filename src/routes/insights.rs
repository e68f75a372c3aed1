use actix_web::{web, HttpResponse, Responder};

use crate::core::filters::parse_gender;
use crate::core::{GymRecommender, ImprovementAdvisor};
use crate::models::{
    AnalysisRequest, ErrorResponse, RecommendationRequest, RecommendationsResponse, SuggestionRequest,
    SuggestionsResponse,
};
use crate::routes::{validation_error, AppState};

/// Configure gym ranking and improvement advice routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/recommendations", web::post().to(recommend_gyms))
        .route("/analysis", web::post().to(analyze_location))
        .route("/suggestions", web::post().to(get_suggestions));
}

/// Rank gyms inside a location
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "location": "string",
///   "gender": "Both|Male|Female",
///   "weight_class": "All",
///   "limit": 4
/// }
/// ```
async fn recommend_gyms(state: web::Data<AppState>, req: web::Json<RecommendationRequest>) -> impl Responder {
    if let Some(resp) = validation_error(&*req) {
        return resp;
    }

    let gender = match req.gender() {
        Ok(gender) => gender,
        Err(e) => return HttpResponse::BadRequest().json(ErrorResponse::bad_request("Invalid gender", e)),
    };
    let weight_class = req.weight_class();

    let gyms = GymRecommender::new(state.dataset.records()).recommend_gyms_by_location(
        &req.location,
        gender,
        weight_class.as_deref(),
        req.limit,
    );

    tracing::info!("Returning {} ranked gyms for {}", gyms.len(), req.location);

    HttpResponse::Ok().json(RecommendationsResponse {
        location: req.location.clone(),
        total_gyms: gyms.len(),
        gyms,
    })
}

/// Full improvement report for one location
///
/// POST /api/v1/analysis
async fn analyze_location(state: web::Data<AppState>, req: web::Json<AnalysisRequest>) -> impl Responder {
    if let Some(resp) = validation_error(&*req) {
        return resp;
    }

    let gender = match parse_gender(&req.gender) {
        Ok(gender) => gender,
        Err(e) => return HttpResponse::BadRequest().json(ErrorResponse::bad_request("Invalid gender", e)),
    };

    match ImprovementAdvisor::new(state.dataset.records()).get_comprehensive_analysis(&req.location, gender) {
        Some(analysis) => {
            tracing::info!(
                "Analysis for {}: {} gyms, {} boxers",
                analysis.location,
                analysis.total_gyms,
                analysis.total_boxers
            );
            HttpResponse::Ok().json(analysis)
        }
        None => HttpResponse::NotFound().json(ErrorResponse::not_found(
            "No data",
            format!("No data found for {}", req.location),
        )),
    }
}

/// Improvement suggestions for a gym or a boxer
///
/// POST /api/v1/suggestions
///
/// Request body:
/// ```json
/// {
///   "type": "gym|boxer",
///   "name": "string",
///   "location": "string"
/// }
/// ```
async fn get_suggestions(state: web::Data<AppState>, req: web::Json<SuggestionRequest>) -> impl Responder {
    if let Some(resp) = validation_error(&*req) {
        return resp;
    }

    let advisor = ImprovementAdvisor::new(state.dataset.records());
    let suggestions = match req.kind.as_str() {
        "gym" => advisor.get_gym_suggestions(&req.name, &req.location),
        "boxer" => advisor.get_boxer_suggestions(&req.name, Some(req.location.as_str())),
        _ => {
            return HttpResponse::BadRequest().json(ErrorResponse::bad_request(
                "Invalid type",
                "Type must be one of: gym, boxer",
            ));
        }
    };

    tracing::debug!("{} suggestions for {} {}", suggestions.len(), req.kind, req.name);

    HttpResponse::Ok().json(SuggestionsResponse {
        kind: req.kind.clone(),
        name: req.name.clone(),
        location: req.location.clone(),
        suggestions,
    })
}
