use crate::models::{FightRecord, Gender, Mode};

pub const ALL_LOCATIONS: &str = "All Locations";
pub const ALL_YEARS: &str = "All Years";
pub const ALL_WEIGHTS: &str = "All";
pub const ALL_GENDERS: &str = "Both";
pub const ALL_GYMS: &str = "All Gyms";

/// Conjunction of dashboard predicates; `None` means unrestricted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub mode: Mode,
    pub location: Option<String>,
    pub year: Option<i32>,
    pub weight_class: Option<String>,
    pub gender: Option<Gender>,
    pub gym: Option<String>,
    pub selected_gyms: Vec<String>,
    pub selected_boxers: Vec<String>,
}

/// Map a categorical filter value to `None` when it equals its sentinel
pub fn parse_category(value: &str, sentinel: &str) -> Option<String> {
    if value == sentinel {
        None
    } else {
        Some(value.to_string())
    }
}

/// Year filter; the sentinel and anything non-numeric mean unrestricted
pub fn parse_year(value: &str) -> Option<i32> {
    if value == ALL_YEARS {
        return None;
    }
    value.trim().parse().ok()
}

pub fn parse_gender(value: &str) -> Result<Option<Gender>, String> {
    if value == ALL_GENDERS {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

/// Check a single row against every predicate
#[inline]
pub fn matches_criteria(record: &FightRecord, criteria: &FilterCriteria) -> bool {
    if let Some(location) = &criteria.location {
        if &record.location != location {
            return false;
        }
    }

    if let Some(year) = criteria.year {
        if record.year != year {
            return false;
        }
    }

    if let Some(weight_class) = &criteria.weight_class {
        if &record.weight_class != weight_class {
            return false;
        }
    }

    if let Some(gender) = criteria.gender {
        if record.gender != gender {
            return false;
        }
    }

    if let Some(gym) = &criteria.gym {
        if &record.gym != gym {
            return false;
        }
    }

    // Membership lists only apply to the mode they belong to
    match criteria.mode {
        Mode::Gym if !criteria.selected_gyms.is_empty() => {
            criteria.selected_gyms.contains(&record.gym)
        }
        Mode::Boxer if !criteria.selected_boxers.is_empty() => {
            criteria.selected_boxers.contains(&record.boxer_name)
        }
        _ => true,
    }
}

/// Return the rows matching all criteria, preserving table order
pub fn apply_filters(records: &[FightRecord], criteria: &FilterCriteria) -> Vec<FightRecord> {
    let filtered: Vec<FightRecord> = records
        .iter()
        .filter(|record| matches_criteria(record, criteria))
        .cloned()
        .collect();

    tracing::debug!("Filtered {} rows down to {}", records.len(), filtered.len());
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_table() -> Vec<FightRecord> {
        vec![
            FightRecord::new("Ram", "Iron Fist", "Boudha", Gender::Male, "Lightweight", 22.0, 2022, 5, 3),
            FightRecord::new("Sita", "Iron Fist", "Boudha", Gender::Female, "Flyweight", 20.0, 2023, 7, 1),
            FightRecord::new("Hari", "Tiger Den", "Patan", Gender::Male, "Lightweight", 25.0, 2023, 2, 6),
            FightRecord::new("Gita", "Tiger Den", "Patan", Gender::Female, "Bantamweight", 24.0, 2022, 4, 4),
        ]
    }

    #[test]
    fn test_default_criteria_keeps_everything() {
        let table = create_test_table();
        let filtered = apply_filters(&table, &FilterCriteria::default());
        assert_eq!(filtered, table);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let table = create_test_table();
        let criteria = FilterCriteria {
            location: Some("Patan".to_string()),
            gender: Some(Gender::Male),
            ..Default::default()
        };

        let filtered = apply_filters(&table, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].boxer_name, "Hari");
    }

    #[test]
    fn test_selected_gyms_only_apply_in_gym_mode() {
        let table = create_test_table();
        let mut criteria = FilterCriteria {
            mode: Mode::Gym,
            selected_gyms: vec!["Tiger Den".to_string()],
            selected_boxers: vec!["Ram".to_string()],
            ..Default::default()
        };

        let filtered = apply_filters(&table, &criteria);
        assert!(filtered.iter().all(|r| r.gym == "Tiger Den"));
        assert_eq!(filtered.len(), 2);

        criteria.mode = Mode::Boxer;
        let filtered = apply_filters(&table, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].boxer_name, "Ram");
    }

    #[test]
    fn test_parse_year_falls_back_to_unrestricted() {
        assert_eq!(parse_year("All Years"), None);
        assert_eq!(parse_year("twenty"), None);
        assert_eq!(parse_year("2023"), Some(2023));
    }

    #[test]
    fn test_parse_sentinels() {
        assert_eq!(parse_category("All Locations", ALL_LOCATIONS), None);
        assert_eq!(parse_category("Boudha", ALL_LOCATIONS), Some("Boudha".to_string()));
        assert_eq!(parse_gender("Both"), Ok(None));
        assert_eq!(parse_gender("Male"), Ok(Some(Gender::Male)));
        assert!(parse_gender("Other").is_err());
    }

    #[test]
    fn test_empty_table() {
        let criteria = FilterCriteria {
            year: Some(2023),
            ..Default::default()
        };
        assert!(apply_filters(&[], &criteria).is_empty());
    }
}
