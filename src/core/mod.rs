// Core algorithm exports
pub mod advisor;
pub mod analytics;
pub mod filters;
pub mod matcher;
pub mod recommender;
pub mod scoring;
pub mod stats;

pub use advisor::ImprovementAdvisor;
pub use analytics::{calculate_advanced_stats, calculate_kpis, calculate_win_ratios};
pub use filters::{apply_filters, matches_criteria, FilterCriteria};
pub use matcher::{build_profiles, MatchMaker};
pub use recommender::GymRecommender;
pub use scoring::{calculate_match_score, calculate_training_score, classify_match};
pub use stats::{exact_ratio, safe_ratio, WinLoss, EPSILON};
