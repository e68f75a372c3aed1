use std::collections::{BTreeSet, HashSet};

use crate::core::stats::{group_by, mean, WinLoss};
use crate::models::{FightRecord, Gender, GymStats};

/// Ranks gyms inside a location by win ratio, then total wins
#[derive(Debug, Clone, Copy)]
pub struct GymRecommender<'a> {
    records: &'a [FightRecord],
}

impl<'a> GymRecommender<'a> {
    pub fn new(records: &'a [FightRecord]) -> Self {
        Self { records }
    }

    /// Ranked gym statistics for one location
    ///
    /// # Arguments
    /// * `location` - Exact location to rank; no sentinel is accepted here
    /// * `gender` - Optional gender restriction (`None` = both)
    /// * `weight_class` - Optional weight-class restriction (`None` = all)
    /// * `limit` - Maximum number of gyms, `None` for the full ranking
    pub fn recommend_gyms_by_location(
        &self,
        location: &str,
        gender: Option<Gender>,
        weight_class: Option<&str>,
        limit: Option<usize>,
    ) -> Vec<GymStats> {
        let filtered: Vec<FightRecord> = self
            .records
            .iter()
            .filter(|r| r.location == location)
            .filter(|r| gender.map_or(true, |g| r.gender == g))
            .filter(|r| weight_class.map_or(true, |w| r.weight_class == w))
            .cloned()
            .collect();

        let mut ranked: Vec<GymStats> = group_by(&filtered, |r| r.gym.as_str())
            .into_iter()
            .map(|(gym, rows)| gym_stats(gym, &rows))
            .collect();

        ranked.sort_by(|a, b| {
            b.win_ratio
                .partial_cmp(&a.win_ratio)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.total_wins.cmp(&a.total_wins))
        });

        if let Some(limit) = limit {
            ranked.truncate(limit);
        }

        tracing::debug!("Ranked {} gyms in {}", ranked.len(), location);
        ranked
    }

    /// Run the location ranking for every location that yields at least one gym
    pub fn recommend_for_all_locations(
        &self,
        gender: Option<Gender>,
        weight_class: Option<&str>,
        limit: Option<usize>,
    ) -> Vec<(String, Vec<GymStats>)> {
        let locations: BTreeSet<&str> = self.records.iter().map(|r| r.location.as_str()).collect();

        locations
            .into_iter()
            .filter_map(|location| {
                let ranked = self.recommend_gyms_by_location(location, gender, weight_class, limit);
                if ranked.is_empty() {
                    None
                } else {
                    Some((location.to_string(), ranked))
                }
            })
            .collect()
    }
}

/// Aggregate one gym's rows into its statistics
pub fn gym_stats(gym: &str, rows: &[&FightRecord]) -> GymStats {
    let tally = WinLoss::from_records(rows.iter().copied());
    let male = WinLoss::from_records(rows.iter().copied().filter(|r| r.gender == Gender::Male));
    let female = WinLoss::from_records(rows.iter().copied().filter(|r| r.gender == Gender::Female));

    let performance: Vec<f64> = rows.iter().map(|r| r.performance_score).collect();

    GymStats {
        gym: gym.to_string(),
        win_ratio: tally.exact_ratio(),
        total_wins: tally.wins,
        total_losses: tally.losses,
        total_boxers: rows.iter().map(|r| r.boxer_name.as_str()).collect::<HashSet<_>>().len(),
        avg_performance: mean(&performance).unwrap_or(0.0),
        male_win_ratio: male.ratio(),
        female_win_ratio: female.ratio(),
        total_fights: tally.total(),
    }
}
