//! Boxing Analytics - performance analytics engine for boxing fight records
//!
//! This library filters a fight-record table, aggregates KPIs, ranks gyms,
//! pairs boxers for fair fights and sparring, and generates rule-based
//! improvement advice for gyms, boxers and whole locations.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{apply_filters, GymRecommender, ImprovementAdvisor, MatchMaker};
pub use models::{FightRecord, Gender, Mode, MatchmakingWeights};
pub use services::{Dataset, DatasetError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let dataset = Dataset::new(vec![FightRecord::new(
            "Ram", "Iron Fist", "Boudha", Gender::Male, "Lightweight", 22.0, 2023, 8, 2,
        )]);
        let maker = MatchMaker::with_default_weights(dataset.records());
        assert_eq!(maker.profiles().len(), 1);
    }
}
