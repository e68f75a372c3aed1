use serde::{Deserialize, Serialize};

use crate::models::domain::{
    AdvancedStats, BoxerOption, FairMatch, GymStats, Kpis, TrainingPartner, WinRatioEntry,
};

/// Gym rankings shown on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum DashboardRecommendations {
    /// A single location was selected
    Location {
        location: String,
        top_gyms: Vec<GymStats>,
        all_gyms: Vec<GymStats>,
    },
    /// "All Locations": one ranking per location
    AllLocations { locations: Vec<LocationRecommendations> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRecommendations {
    pub location: String,
    pub gyms: Vec<GymStats>,
}

/// Response for the dashboard endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub kpis: Kpis,
    pub win_ratios: Vec<WinRatioEntry>,
    pub advanced_stats: AdvancedStats,
    pub recommendations: DashboardRecommendations,
    pub boxers: Vec<BoxerOption>,
    pub total_records: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub location: String,
    pub gyms: Vec<GymStats>,
    pub total_gyms: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub location: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FairMatchesResponse {
    pub boxer_name: String,
    pub matches: Vec<FairMatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingPartnersResponse {
    pub boxer_name: String,
    pub partners: Vec<TrainingPartner>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub records: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn bad_request(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            status_code: 400,
        }
    }

    pub fn not_found(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            status_code: 404,
        }
    }
}
