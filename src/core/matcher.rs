use std::collections::HashSet;

use crate::core::{
    scoring::{calculate_match_score, calculate_training_score, classify_match, experience_level, overall_rating},
    stats::{group_by, WinLoss},
};
use crate::models::{BoxerProfile, FairMatch, FightRecord, MatchmakingWeights, TrainingPartner};

/// Build one profile per boxer from every row carrying that name
///
/// Demographic fields come from the boxer's first row in table order.
pub fn build_profiles(records: &[FightRecord], weights: &MatchmakingWeights) -> Vec<BoxerProfile> {
    group_by(records, |r| r.boxer_name.as_str())
        .into_iter()
        .map(|(name, rows)| {
            let first = rows[0];
            let tally = WinLoss::from_records(rows.iter().copied());
            let win_ratio = tally.exact_ratio();
            let skill_level = win_ratio * 100.0;

            let years_active = rows.iter().map(|r| r.year).collect::<HashSet<_>>().len();
            let experience = experience_level(years_active, weights);

            // rows is never empty, so the latest year always exists
            let recent_year = rows.iter().map(|r| r.year).max().unwrap_or(first.year);
            let recent = WinLoss::from_records(rows.iter().copied().filter(|r| r.year == recent_year));
            let recent_skill = recent.exact_ratio() * 100.0;

            BoxerProfile {
                boxer_name: name.to_string(),
                gender: first.gender,
                weight_class: first.weight_class.clone(),
                age: first.age,
                gym: first.gym.clone(),
                location: first.location.clone(),
                win_ratio,
                total_fights: tally.total(),
                skill_level,
                experience_level: experience,
                recent_skill,
                overall_rating: overall_rating(skill_level, experience, recent_skill, weights),
            }
        })
        .collect()
}

/// Opponent and sparring-partner finder over a snapshot of the table
///
/// Profiles are derived once at construction and never updated; build a
/// new instance to see a different table.
#[derive(Debug, Clone)]
pub struct MatchMaker {
    profiles: Vec<BoxerProfile>,
    weights: MatchmakingWeights,
}

impl MatchMaker {
    pub fn new(records: &[FightRecord], weights: MatchmakingWeights) -> Self {
        let profiles = build_profiles(records, &weights);
        tracing::debug!("Built {} boxer profiles from {} rows", profiles.len(), records.len());
        Self { profiles, weights }
    }

    pub fn with_default_weights(records: &[FightRecord]) -> Self {
        Self::new(records, MatchmakingWeights::default())
    }

    pub fn profiles(&self) -> &[BoxerProfile] {
        &self.profiles
    }

    pub fn profile(&self, boxer_name: &str) -> Option<&BoxerProfile> {
        self.profiles.iter().find(|p| p.boxer_name == boxer_name)
    }

    /// Other boxers sharing gender and weight class
    fn candidates<'a>(&'a self, boxer: &'a BoxerProfile) -> impl Iterator<Item = &'a BoxerProfile> + 'a {
        self.profiles.iter().filter(move |p| {
            p.gender == boxer.gender
                && p.weight_class == boxer.weight_class
                && p.boxer_name != boxer.boxer_name
        })
    }

    /// Rank opponents by fairness
    ///
    /// # Arguments
    /// * `boxer_name` - Boxer to find opponents for
    /// * `top_k` - Maximum number of opponents to return
    ///
    /// # Returns
    /// Opponents sorted by match score, empty when the boxer is unknown
    pub fn find_fair_matches(&self, boxer_name: &str, top_k: usize) -> Vec<FairMatch> {
        let Some(boxer) = self.profile(boxer_name) else {
            tracing::debug!("No profile for {}, no fair matches", boxer_name);
            return Vec::new();
        };

        let mut scored: Vec<(&BoxerProfile, f64)> = self
            .candidates(boxer)
            .map(|opponent| (opponent, calculate_match_score(boxer, opponent, &self.weights)))
            .collect();

        // Stable sort keeps table order among equal scores
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);

        scored
            .into_iter()
            .map(|(opponent, match_score)| {
                let rating_difference = opponent.overall_rating - boxer.overall_rating;
                FairMatch {
                    opponent_name: opponent.boxer_name.clone(),
                    gym: opponent.gym.clone(),
                    location: opponent.location.clone(),
                    opponent_rating: opponent.overall_rating,
                    your_rating: boxer.overall_rating,
                    rating_difference,
                    match_type: classify_match(rating_difference, &self.weights),
                    match_score,
                    opponent_win_ratio: opponent.win_ratio,
                    opponent_total_fights: opponent.total_fights,
                }
            })
            .collect()
    }

    /// Rank sparring partners by location and skill/experience closeness
    pub fn find_training_partners(&self, boxer_name: &str, top_k: usize) -> Vec<TrainingPartner> {
        let Some(boxer) = self.profile(boxer_name) else {
            tracing::debug!("No profile for {}, no training partners", boxer_name);
            return Vec::new();
        };

        let mut scored: Vec<(&BoxerProfile, f64)> = self
            .candidates(boxer)
            .map(|partner| (partner, calculate_training_score(boxer, partner, &self.weights)))
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);

        scored
            .into_iter()
            .map(|(partner, training_score)| TrainingPartner {
                partner_name: partner.boxer_name.clone(),
                gym: partner.gym.clone(),
                location: partner.location.clone(),
                skill_level: partner.skill_level,
                win_ratio: partner.win_ratio,
                total_fights: partner.total_fights,
                training_score,
                same_location: partner.location == boxer.location,
            })
            .collect()
    }
}
