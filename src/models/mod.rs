// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AdvancedStats, BoxerOption, BoxerProfile, FairMatch, FightRecord, FilterOptions, Gender, GymAnalysis,
    GymStats, Kpis, LocationAnalysis, MatchType, MatchmakingWeights, Mode, TrainingPartner, WinRatioEntry,
};
pub use requests::{
    AnalysisRequest, ExportQuery, FilterRequest, MatchRequest, RecommendationRequest, SuggestionRequest,
};
pub use responses::{
    DashboardRecommendations, DashboardResponse, ErrorResponse, FairMatchesResponse, HealthResponse,
    LocationRecommendations, RecommendationsResponse, SuggestionsResponse, TrainingPartnersResponse,
};
