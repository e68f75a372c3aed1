use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::core::filters::{
    parse_category, parse_gender, parse_year, FilterCriteria, ALL_GENDERS, ALL_GYMS, ALL_LOCATIONS,
    ALL_WEIGHTS, ALL_YEARS,
};
use crate::models::domain::{Gender, Mode};

/// Dashboard filter state as sent by clients
///
/// Every categorical field uses its sentinel ("All Locations", "All Years",
/// "All", "Both", "All Gyms") for "unrestricted".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterRequest {
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_gender")]
    pub gender: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_year", deserialize_with = "string_or_number")]
    pub year: String,
    #[serde(default = "default_weight")]
    #[serde(alias = "weight_class")]
    pub weight: String,
    #[serde(default = "default_gym")]
    pub gym: String,
    #[serde(default)]
    pub selected_gyms: Vec<String>,
    #[serde(default)]
    pub selected_boxers: Vec<String>,
}

impl Default for FilterRequest {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            gender: default_gender(),
            location: default_location(),
            year: default_year(),
            weight: default_weight(),
            gym: default_gym(),
            selected_gyms: Vec::new(),
            selected_boxers: Vec::new(),
        }
    }
}

impl FilterRequest {
    /// Resolve sentinels into a typed criteria value
    ///
    /// Fails only on an unknown mode or gender; a non-numeric year is
    /// treated as "All Years".
    pub fn to_criteria(&self) -> Result<FilterCriteria, String> {
        let mode: Mode = self.mode.parse()?;
        let gender = parse_gender(&self.gender)?;

        Ok(FilterCriteria {
            mode,
            location: parse_category(&self.location, ALL_LOCATIONS),
            year: parse_year(&self.year),
            weight_class: parse_category(&self.weight, ALL_WEIGHTS),
            gender,
            gym: parse_category(&self.gym, ALL_GYMS),
            selected_gyms: self.selected_gyms.clone(),
            selected_boxers: self.selected_boxers.clone(),
        })
    }
}

/// Query-string form of the filter state used by the export endpoint
///
/// Built from raw query pairs so `gyms` and `boxers` may repeat, e.g.
/// `?mode=Gym&gyms=Iron%20Fist&gyms=Summit`. For every other key the first
/// occurrence wins.
#[derive(Debug, Clone, Serialize)]
pub struct ExportQuery {
    pub mode: String,
    pub gender: String,
    pub location: String,
    pub year: String,
    pub weight: String,
    pub gym: String,
    pub gyms: Vec<String>,
    pub boxers: Vec<String>,
}

impl Default for ExportQuery {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            gender: default_gender(),
            location: default_location(),
            year: default_year(),
            weight: default_weight(),
            gym: default_gym(),
            gyms: Vec::new(),
            boxers: Vec::new(),
        }
    }
}

impl FromIterator<(String, String)> for ExportQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = Self::default();
        let mut seen = HashSet::new();

        for (key, value) in pairs {
            match key.as_str() {
                "gyms" => query.gyms.push(value),
                "boxers" => query.boxers.push(value),
                _ if !seen.insert(key.clone()) => {}
                "mode" => query.mode = value,
                "gender" => query.gender = value,
                "location" => query.location = value,
                "year" => query.year = value,
                "weight" | "weight_class" => query.weight = value,
                "gym" => query.gym = value,
                _ => {}
            }
        }

        query
    }
}

impl From<ExportQuery> for FilterRequest {
    fn from(query: ExportQuery) -> Self {
        Self {
            mode: query.mode,
            gender: query.gender,
            location: query.location,
            year: query.year,
            weight: query.weight,
            gym: query.gym,
            selected_gyms: query.gyms,
            selected_boxers: query.boxers,
        }
    }
}

/// Request to rank gyms inside one location
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationRequest {
    #[validate(length(min = 1))]
    pub location: String,
    #[serde(default = "default_gender")]
    pub gender: String,
    #[serde(default = "default_weight")]
    #[serde(alias = "weight")]
    pub weight_class: String,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl RecommendationRequest {
    pub fn gender(&self) -> Result<Option<Gender>, String> {
        parse_gender(&self.gender)
    }

    pub fn weight_class(&self) -> Option<String> {
        parse_category(&self.weight_class, ALL_WEIGHTS)
    }
}

/// Request for a full location report
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalysisRequest {
    #[validate(length(min = 1))]
    pub location: String,
    #[serde(default = "default_gender")]
    pub gender: String,
}

/// Request for gym or boxer improvement suggestions
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SuggestionRequest {
    #[serde(rename = "type")]
    pub kind: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default = "default_location")]
    pub location: String,
}

/// Request for fair opponents or training partners
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "boxerName")]
    pub boxer_name: String,
    #[serde(default = "default_top_k")]
    #[validate(range(min = 1))]
    pub top_k: u16,
}

/// Accept `"2023"`, `2023` or `"All Years"` for the year field
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

fn default_mode() -> String {
    "Gym".to_string()
}

fn default_gender() -> String {
    ALL_GENDERS.to_string()
}

fn default_location() -> String {
    ALL_LOCATIONS.to_string()
}

fn default_year() -> String {
    ALL_YEARS.to_string()
}

fn default_weight() -> String {
    ALL_WEIGHTS.to_string()
}

fn default_gym() -> String {
    ALL_GYMS.to_string()
}

fn default_top_k() -> u16 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_means_unrestricted() {
        let request: FilterRequest = serde_json::from_str("{}").unwrap();
        let criteria = request.to_criteria().unwrap();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_to_criteria_resolves_values() {
        let request: FilterRequest = serde_json::from_str(
            r#"{"mode":"Boxer","gender":"Female","location":"Boudha","year":"2023","weight":"Flyweight","selected_boxers":["Sita"]}"#,
        )
        .unwrap();
        let criteria = request.to_criteria().unwrap();

        assert_eq!(criteria.mode, Mode::Boxer);
        assert_eq!(criteria.gender, Some(Gender::Female));
        assert_eq!(criteria.location.as_deref(), Some("Boudha"));
        assert_eq!(criteria.year, Some(2023));
        assert_eq!(criteria.weight_class.as_deref(), Some("Flyweight"));
        assert_eq!(criteria.gym, None);
        assert_eq!(criteria.selected_boxers, vec!["Sita".to_string()]);
    }

    #[test]
    fn test_numeric_year_accepted() {
        let request: FilterRequest = serde_json::from_str(r#"{"year":2022}"#).unwrap();
        assert_eq!(request.to_criteria().unwrap().year, Some(2022));
    }

    #[test]
    fn test_invalid_mode_and_gender_rejected() {
        let bad_mode = FilterRequest { mode: "Team".to_string(), ..Default::default() };
        assert!(bad_mode.to_criteria().is_err());

        let bad_gender = FilterRequest { gender: "Other".to_string(), ..Default::default() };
        assert!(bad_gender.to_criteria().is_err());
    }

    #[test]
    fn test_non_numeric_year_is_unrestricted() {
        let request = FilterRequest { year: "last year".to_string(), ..Default::default() };
        assert_eq!(request.to_criteria().unwrap().year, None);
    }

    #[test]
    fn test_export_query_collects_repeated_lists() {
        let pairs = vec![
            ("mode".to_string(), "Boxer".to_string()),
            ("boxers".to_string(), "Ram".to_string()),
            ("gyms".to_string(), "Iron Fist".to_string()),
            ("boxers".to_string(), "Sita".to_string()),
            ("year".to_string(), "2023".to_string()),
            ("year".to_string(), "2021".to_string()),
        ];
        let request = FilterRequest::from(pairs.into_iter().collect::<ExportQuery>());
        let criteria = request.to_criteria().unwrap();

        assert_eq!(criteria.mode, Mode::Boxer);
        assert_eq!(criteria.year, Some(2023));
        assert_eq!(criteria.selected_boxers, vec!["Ram".to_string(), "Sita".to_string()]);
        assert_eq!(criteria.selected_gyms, vec!["Iron Fist".to_string()]);
    }

    #[test]
    fn test_empty_export_query_is_unrestricted() {
        let query: ExportQuery = std::iter::empty().collect();
        let criteria = FilterRequest::from(query).to_criteria().unwrap();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_match_request_defaults_and_validation() {
        let request: MatchRequest = serde_json::from_str(r#"{"boxer_name":"Ram"}"#).unwrap();
        assert_eq!(request.top_k, 5);
        assert!(request.validate().is_ok());

        let empty: MatchRequest = serde_json::from_str(r#"{"boxer_name":"","top_k":0}"#).unwrap();
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_suggestion_request_type_field() {
        let request: SuggestionRequest =
            serde_json::from_str(r#"{"type":"gym","name":"Iron Fist","location":"Boudha"}"#).unwrap();
        assert_eq!(request.kind, "gym");
        assert_eq!(request.location, "Boudha");
    }
}
