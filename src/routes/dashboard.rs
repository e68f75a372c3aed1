use actix_web::{http::header, web, HttpResponse, Responder};

use crate::core::{
    apply_filters, calculate_advanced_stats, calculate_kpis, calculate_win_ratios, FilterCriteria, GymRecommender,
};
use crate::models::{
    DashboardRecommendations, DashboardResponse, ErrorResponse, ExportQuery, FilterRequest, HealthResponse,
    LocationRecommendations, Mode,
};
use crate::routes::AppState;
use crate::services::{boxers_with_gyms, write_csv};

/// Configure health, filter and dashboard routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/filters", web::get().to(get_filters))
        .route("/dashboard", web::post().to(get_dashboard))
        .route("/export", web::get().to(export_csv));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let records = state.dataset.len();
    let status = if records > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        records,
    })
}

/// Distinct filter values
///
/// GET /api/v1/filters
async fn get_filters(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.dataset.available_filters())
}

/// Dashboard endpoint
///
/// POST /api/v1/dashboard
///
/// Request body:
/// ```json
/// {
///   "mode": "Gym|Boxer",
///   "gender": "Both|Male|Female",
///   "location": "All Locations",
///   "year": "All Years",
///   "weight": "All",
///   "gym": "All Gyms",
///   "selected_gyms": ["string"],
///   "selected_boxers": ["string"]
/// }
/// ```
async fn get_dashboard(state: web::Data<AppState>, req: web::Json<FilterRequest>) -> impl Responder {
    let criteria = match req.to_criteria() {
        Ok(criteria) => criteria,
        Err(e) => {
            return HttpResponse::BadRequest().json(ErrorResponse::bad_request("Invalid filter", e));
        }
    };

    let records = state.dataset.records();
    let filtered = apply_filters(records, &criteria);

    let kpis = calculate_kpis(&filtered, criteria.mode);
    let win_ratios = calculate_win_ratios(&filtered, criteria.mode, &criteria.selected_boxers);
    let advanced_stats = calculate_advanced_stats(&filtered, criteria.mode);

    // Rankings always look at the whole table, restricted by gender and weight only
    let recommender = GymRecommender::new(records);
    let weight_class = criteria.weight_class.as_deref();
    let recommendations = match &criteria.location {
        Some(location) => {
            let all_gyms = recommender.recommend_gyms_by_location(location, criteria.gender, weight_class, None);
            let top_gyms = all_gyms
                .iter()
                .take(state.recommendations.dashboard_limit)
                .cloned()
                .collect();
            DashboardRecommendations::Location {
                location: location.clone(),
                top_gyms,
                all_gyms,
            }
        }
        None => DashboardRecommendations::AllLocations {
            locations: recommender
                .recommend_for_all_locations(
                    criteria.gender,
                    weight_class,
                    Some(state.recommendations.location_limit),
                )
                .into_iter()
                .map(|(location, gyms)| LocationRecommendations { location, gyms })
                .collect(),
        },
    };

    // Boxer dropdown: the subset without any gym or selection restriction
    let boxer_rows = apply_filters(
        records,
        &FilterCriteria {
            gym: None,
            selected_gyms: Vec::new(),
            selected_boxers: Vec::new(),
            ..criteria.clone()
        },
    );
    let boxers = match criteria.mode {
        Mode::Boxer => boxers_with_gyms(&boxer_rows, &[], criteria.gender, None),
        Mode::Gym => boxers_with_gyms(
            &boxer_rows,
            &criteria.selected_gyms,
            criteria.gender,
            criteria.location.as_deref(),
        ),
    };

    tracing::info!(
        "Dashboard: {} of {} rows after filtering (mode: {:?})",
        filtered.len(),
        records.len(),
        criteria.mode
    );

    HttpResponse::Ok().json(DashboardResponse {
        kpis,
        win_ratios,
        advanced_stats,
        recommendations,
        boxers,
        total_records: filtered.len(),
    })
}

/// Export the filtered rows as a CSV attachment
///
/// GET /api/v1/export?location=Boudha&year=2023&gyms=Iron%20Fist&gyms=Summit
async fn export_csv(state: web::Data<AppState>, query: web::Query<Vec<(String, String)>>) -> impl Responder {
    let request = FilterRequest::from(query.into_inner().into_iter().collect::<ExportQuery>());
    let criteria = match request.to_criteria() {
        Ok(criteria) => criteria,
        Err(e) => {
            return HttpResponse::BadRequest().json(ErrorResponse::bad_request("Invalid filter", e));
        }
    };

    let filtered = apply_filters(state.dataset.records(), &criteria);

    let mut buffer = Vec::new();
    if let Err(e) = write_csv(&filtered, &mut buffer) {
        tracing::error!("Failed to export {} rows: {}", filtered.len(), e);
        return HttpResponse::InternalServerError().json(ErrorResponse {
            error: "Export failed".to_string(),
            message: e.to_string(),
            status_code: 500,
        });
    }

    let filename = format!(
        "boxing_data_export_{}.csv",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    tracing::info!("Exporting {} rows as {}", filtered.len(), filename);

    HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ))
        .body(buffer)
}
