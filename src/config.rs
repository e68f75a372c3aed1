use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::models::MatchmakingWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub recommendations: RecommendationSettings,
    #[serde(default)]
    pub matchmaking: MatchmakingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self { csv_path: default_csv_path() }
    }
}

fn default_csv_path() -> PathBuf { PathBuf::from("data/boxing_data.csv") }

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RecommendationSettings {
    /// Gyms highlighted for the selected dashboard location
    #[serde(default = "default_dashboard_limit")]
    pub dashboard_limit: usize,
    /// Gyms listed per location in the "All Locations" sweep
    #[serde(default = "default_location_limit")]
    pub location_limit: usize,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            dashboard_limit: default_dashboard_limit(),
            location_limit: default_location_limit(),
        }
    }
}

fn default_dashboard_limit() -> usize { 4 }
fn default_location_limit() -> usize { 4 }

/// Overrides for the match-making formulas; anything omitted keeps its default
#[derive(Debug, Clone, Deserialize)]
pub struct MatchmakingSettings {
    #[serde(default = "default_skill_weight")]
    pub skill: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
    #[serde(default = "default_recent_skill_weight")]
    pub recent_skill: f64,
    #[serde(default = "default_experience_per_year")]
    pub experience_per_year: f64,
    #[serde(default = "default_fairness_weight")]
    pub fairness: f64,
    #[serde(default = "default_experience_bonus_weight")]
    pub experience_bonus: f64,
    #[serde(default = "default_fairness_penalty")]
    pub fairness_penalty: f64,
    #[serde(default = "default_fair_match_threshold")]
    pub fair_match_threshold: f64,
    #[serde(default = "default_location_bonus")]
    pub location_bonus: f64,
    #[serde(default = "default_skill_similarity_weight")]
    pub skill_similarity: f64,
    #[serde(default = "default_experience_similarity_weight")]
    pub experience_similarity: f64,
}

impl Default for MatchmakingSettings {
    fn default() -> Self {
        Self {
            skill: default_skill_weight(),
            experience: default_experience_weight(),
            recent_skill: default_recent_skill_weight(),
            experience_per_year: default_experience_per_year(),
            fairness: default_fairness_weight(),
            experience_bonus: default_experience_bonus_weight(),
            fairness_penalty: default_fairness_penalty(),
            fair_match_threshold: default_fair_match_threshold(),
            location_bonus: default_location_bonus(),
            skill_similarity: default_skill_similarity_weight(),
            experience_similarity: default_experience_similarity_weight(),
        }
    }
}

impl From<&MatchmakingSettings> for MatchmakingWeights {
    fn from(settings: &MatchmakingSettings) -> Self {
        Self {
            skill: settings.skill,
            experience: settings.experience,
            recent_skill: settings.recent_skill,
            experience_per_year: settings.experience_per_year,
            fairness: settings.fairness,
            experience_bonus: settings.experience_bonus,
            fairness_penalty: settings.fairness_penalty,
            fair_match_threshold: settings.fair_match_threshold,
            location_bonus: settings.location_bonus,
            skill_similarity: settings.skill_similarity,
            experience_similarity: settings.experience_similarity,
        }
    }
}

fn default_skill_weight() -> f64 { 0.5 }
fn default_experience_weight() -> f64 { 0.2 }
fn default_recent_skill_weight() -> f64 { 0.3 }
fn default_experience_per_year() -> f64 { 20.0 }
fn default_fairness_weight() -> f64 { 0.7 }
fn default_experience_bonus_weight() -> f64 { 0.3 }
fn default_fairness_penalty() -> f64 { 2.0 }
fn default_fair_match_threshold() -> f64 { 10.0 }
fn default_location_bonus() -> f64 { 30.0 }
fn default_skill_similarity_weight() -> f64 { 0.4 }
fn default_experience_similarity_weight() -> f64 { 0.3 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingSettings {
    /// Apply `LOG_LEVEL` and `LOG_FORMAT`, which win over the configured values
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(format) = std::env::var("LOG_FORMAT") {
            self.format = format;
        }
        self
    }

    pub fn is_pretty(&self) -> bool {
        self.format.eq_ignore_ascii_case("pretty")
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with BOXING__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., BOXING__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("BOXING")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("BOXING")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn matchmaking_weights(&self) -> MatchmakingWeights {
        MatchmakingWeights::from(&self.matchmaking)
    }
}
