use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::stats::safe_ratio;

/// Boxer gender as recorded in the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            other => Err(format!("unknown gender: {}", other)),
        }
    }
}

/// Which entity the dashboard aggregates over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Gym,
    Boxer,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Gym" => Ok(Mode::Gym),
            "Boxer" => Ok(Mode::Boxer),
            other => Err(format!("unknown mode: {}", other)),
        }
    }
}

/// One row of the fight-record table, with its derived columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightRecord {
    #[serde(rename = "Boxer_Name")]
    pub boxer_name: String,
    #[serde(rename = "Gym")]
    pub gym: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "Weight_Class")]
    pub weight_class: String,
    #[serde(rename = "Age")]
    pub age: f64,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Wins")]
    pub wins: u32,
    #[serde(rename = "Losses")]
    pub losses: u32,
    #[serde(rename = "Win_Ratio")]
    pub win_ratio: f64,
    #[serde(rename = "Total_Fights")]
    pub total_fights: u64,
    /// Filled in by the dataset once table-wide maxima are known
    #[serde(rename = "Performance_Score")]
    pub performance_score: f64,
}

impl FightRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        boxer_name: impl Into<String>,
        gym: impl Into<String>,
        location: impl Into<String>,
        gender: Gender,
        weight_class: impl Into<String>,
        age: f64,
        year: i32,
        wins: u32,
        losses: u32,
    ) -> Self {
        let total_fights = u64::from(wins) + u64::from(losses);
        Self {
            boxer_name: boxer_name.into(),
            gym: gym.into(),
            location: location.into(),
            gender,
            weight_class: weight_class.into(),
            age,
            year,
            wins,
            losses,
            win_ratio: safe_ratio(wins as f64, total_fights as f64),
            total_fights,
            performance_score: 0.0,
        }
    }
}

/// Per-boxer skill/experience profile rebuilt on every match-making call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxerProfile {
    pub boxer_name: String,
    pub gender: Gender,
    pub weight_class: String,
    pub age: f64,
    pub gym: String,
    pub location: String,
    pub win_ratio: f64,
    pub total_fights: u64,
    pub skill_level: f64,
    pub experience_level: f64,
    pub recent_skill: f64,
    pub overall_rating: f64,
}

/// Aggregate statistics for one gym inside a location query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GymStats {
    pub gym: String,
    pub win_ratio: f64,
    pub total_wins: u64,
    pub total_losses: u64,
    pub total_boxers: usize,
    pub avg_performance: f64,
    pub male_win_ratio: f64,
    pub female_win_ratio: f64,
    pub total_fights: u64,
}

/// Key performance indicators for a filtered subset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub total_boxers: usize,
    pub total_gyms: usize,
    pub total_locations: usize,
    pub total_fights: u64,
    /// Percentage, rounded to two decimals
    pub avg_win_ratio: f64,
    pub top_performer: String,
}

impl Default for Kpis {
    fn default() -> Self {
        Self {
            total_boxers: 0,
            total_gyms: 0,
            total_locations: 0,
            total_fights: 0,
            avg_win_ratio: 0.0,
            top_performer: "N/A".to_string(),
        }
    }
}

/// One labelled bar of the win-ratio series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinRatioEntry {
    pub label: String,
    pub win_ratio: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvancedStats {
    pub most_consistent: Option<String>,
    pub best_gym_volume: Option<String>,
    pub highest_win_streak: Option<u32>,
    pub best_location: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchType {
    #[serde(rename = "Fair Match")]
    Fair,
    #[serde(rename = "Challenging (Opponent Stronger)")]
    Challenging,
    #[serde(rename = "Advantage (You Stronger)")]
    Advantage,
}

impl MatchType {
    pub fn label(&self) -> &'static str {
        match self {
            MatchType::Fair => "Fair Match",
            MatchType::Challenging => "Challenging (Opponent Stronger)",
            MatchType::Advantage => "Advantage (You Stronger)",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ranked opponent suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FairMatch {
    pub opponent_name: String,
    pub gym: String,
    pub location: String,
    pub opponent_rating: f64,
    pub your_rating: f64,
    /// Opponent rating minus the requesting boxer's rating
    pub rating_difference: f64,
    pub match_type: MatchType,
    pub match_score: f64,
    pub opponent_win_ratio: f64,
    pub opponent_total_fights: u64,
}

/// Ranked sparring partner suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingPartner {
    pub partner_name: String,
    pub gym: String,
    pub location: String,
    pub skill_level: f64,
    pub win_ratio: f64,
    pub total_fights: u64,
    pub training_score: f64,
    pub same_location: bool,
}

/// Qualitative report for one gym in a location analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GymAnalysis {
    pub gym_name: String,
    pub total_boxers: usize,
    pub total_wins: u64,
    pub total_losses: u64,
    pub win_ratio: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub male_win_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub female_win_ratio: Option<f64>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationAnalysis {
    pub location: String,
    pub total_gyms: usize,
    pub total_boxers: usize,
    pub gym_analysis: Vec<GymAnalysis>,
    pub overall_recommendations: Vec<String>,
}

/// Distinct filter values offered to clients, each list led by its sentinel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub locations: Vec<String>,
    pub gyms: Vec<String>,
    pub years: Vec<String>,
    pub weights: Vec<String>,
    pub genders: Vec<String>,
}

/// Boxer selection entry: raw name plus "Name (Gym, Location)"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxerOption {
    pub value: String,
    pub display: String,
}

/// Match-making weights and thresholds
///
/// The classification threshold and the fairness penalty are independent:
/// with the defaults a 10-point gap already counts as non-fair while the
/// fairness score only reaches zero at a 50-point gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchmakingWeights {
    pub skill: f64,
    pub experience: f64,
    pub recent_skill: f64,
    pub experience_per_year: f64,
    pub fairness: f64,
    pub experience_bonus: f64,
    pub fairness_penalty: f64,
    pub fair_match_threshold: f64,
    pub location_bonus: f64,
    pub skill_similarity: f64,
    pub experience_similarity: f64,
}

impl Default for MatchmakingWeights {
    fn default() -> Self {
        Self {
            skill: 0.5,
            experience: 0.2,
            recent_skill: 0.3,
            experience_per_year: 20.0,
            fairness: 0.7,
            experience_bonus: 0.3,
            fairness_penalty: 2.0,
            fair_match_threshold: 10.0,
            location_bonus: 30.0,
            skill_similarity: 0.4,
            experience_similarity: 0.3,
        }
    }
}
