use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::core::stats::{distinct_in_order, format_percent, group_by, mean, round_to, sample_std_dev, WinLoss};
use crate::models::{AdvancedStats, FightRecord, Kpis, Mode, WinRatioEntry};

/// Summary counts and the single top performer of a filtered subset
pub fn calculate_kpis(records: &[FightRecord], mode: Mode) -> Kpis {
    if records.is_empty() {
        return Kpis::default();
    }

    let total_boxers = records.iter().map(|r| r.boxer_name.as_str()).collect::<HashSet<_>>().len();
    let total_gyms = records.iter().map(|r| r.gym.as_str()).collect::<HashSet<_>>().len();
    let total_locations = records.iter().map(|r| r.location.as_str()).collect::<HashSet<_>>().len();
    let total_fights = records
        .iter()
        .map(|r| r.wins as u64 + r.losses as u64)
        .sum();

    let ratios: Vec<f64> = records.iter().map(|r| r.win_ratio).collect();
    let avg_win_ratio = round_to(mean(&ratios).unwrap_or(0.0) * 100.0, 2);

    Kpis {
        total_boxers,
        total_gyms,
        total_locations,
        total_fights,
        avg_win_ratio,
        top_performer: find_top_performer(records, mode),
    }
}

/// Highest aggregate win ratio for the mode's entity; ties keep the first seen
fn find_top_performer(records: &[FightRecord], mode: Mode) -> String {
    let groups = match mode {
        Mode::Boxer => group_by(records, |r| r.boxer_name.as_str()),
        Mode::Gym => group_by(records, |r| r.gym.as_str()),
    };

    let mut best: Option<(&str, &FightRecord, f64)> = None;
    for (name, rows) in groups.iter() {
        let ratio = WinLoss::from_records(rows.iter().copied()).exact_ratio();
        if best.map_or(true, |(_, _, best_ratio)| ratio > best_ratio) {
            best = Some((*name, rows[0], ratio));
        }
    }

    match best {
        Some((name, first, ratio)) => match mode {
            Mode::Boxer => format!(
                "{} ({}, {}) - {}",
                name,
                first.gym,
                first.location,
                format_percent(ratio)
            ),
            Mode::Gym => format!("{} ({}) - {}", name, first.location, format_percent(ratio)),
        },
        None => "N/A".to_string(),
    }
}

/// Per-entity win ratios for labelling and charting
///
/// Year restriction is expected to have been applied by the table filter,
/// so every entry is a plain aggregate over the subset. In boxer mode the
/// explicitly selected boxers are used in the given order, otherwise every
/// boxer of the subset; selected boxers without rows produce no entry.
pub fn calculate_win_ratios(
    records: &[FightRecord],
    mode: Mode,
    selected_boxers: &[String],
) -> Vec<WinRatioEntry> {
    let mut entries: Vec<WinRatioEntry> = Vec::new();
    if records.is_empty() {
        return entries;
    }

    match mode {
        Mode::Gym => {
            for (gym, rows) in group_by(records, |r| r.gym.as_str()) {
                entries.push(WinRatioEntry {
                    label: format!("{} ({})", gym, rows[0].location),
                    win_ratio: WinLoss::from_records(rows.iter().copied()).exact_ratio(),
                });
            }
        }
        Mode::Boxer => {
            let boxers: Vec<&str> = if selected_boxers.is_empty() {
                distinct_in_order(records.iter().map(|r| r.boxer_name.as_str()))
            } else {
                selected_boxers.iter().map(String::as_str).collect()
            };

            let mut seen_labels = HashSet::new();
            for boxer in boxers {
                let rows: Vec<&FightRecord> = records.iter().filter(|r| r.boxer_name == boxer).collect();
                let Some(first) = rows.first() else {
                    continue;
                };

                let label = format!("{} ({}, {})", boxer, first.gym, first.location);
                if !seen_labels.insert(label.clone()) {
                    continue;
                }
                entries.push(WinRatioEntry {
                    label,
                    win_ratio: WinLoss::from_records(rows.iter().copied()).exact_ratio(),
                });
            }
        }
    }

    entries
}

/// Secondary dashboard statistics over a filtered subset
pub fn calculate_advanced_stats(records: &[FightRecord], mode: Mode) -> AdvancedStats {
    let mut stats = AdvancedStats::default();
    if records.is_empty() {
        return stats;
    }

    if mode == Mode::Boxer {
        let mut most_consistent: Option<(&str, f64)> = None;
        for (boxer, rows) in group_by(records, |r| r.boxer_name.as_str()) {
            let ratios: Vec<f64> = rows.iter().map(|r| r.win_ratio).collect();
            let Some(std_dev) = sample_std_dev(&ratios) else {
                continue;
            };
            if most_consistent.map_or(true, |(_, best)| std_dev < best) {
                most_consistent = Some((boxer, std_dev));
            }
        }
        stats.most_consistent = most_consistent.map(|(name, std_dev)| format!("{} (σ: {:.3})", name, std_dev));
    }

    let mut wins_by_gym: BTreeMap<&str, u64> = BTreeMap::new();
    for record in records {
        *wins_by_gym.entry(record.gym.as_str()).or_default() += record.wins as u64;
    }
    stats.best_gym_volume = first_max(wins_by_gym.iter().map(|(gym, wins)| (*gym, *wins)))
        .map(|(gym, wins)| format!("{} ({} wins)", gym, wins));

    stats.highest_win_streak = records.iter().map(|r| r.wins).max();

    let mut gyms_by_location: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for record in records {
        gyms_by_location
            .entry(record.location.as_str())
            .or_default()
            .insert(record.gym.as_str());
    }
    stats.best_location = first_max(gyms_by_location.iter().map(|(loc, gyms)| (*loc, gyms.len() as u64)))
        .map(|(location, gyms)| format!("{} ({} gyms)", location, gyms));

    stats
}

fn first_max<'a, I>(items: I) -> Option<(&'a str, u64)>
where
    I: Iterator<Item = (&'a str, u64)>,
{
    items.fold(None, |best, (key, value)| match best {
        Some((_, best_value)) if value <= best_value => best,
        _ => Some((key, value)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn create_test_table() -> Vec<FightRecord> {
        vec![
            FightRecord::new("Ram", "Iron Fist", "Boudha", Gender::Male, "Lightweight", 22.0, 2022, 6, 4),
            FightRecord::new("Ram", "Iron Fist", "Boudha", Gender::Male, "Lightweight", 23.0, 2023, 9, 1),
            FightRecord::new("Sita", "Iron Fist", "Boudha", Gender::Female, "Flyweight", 20.0, 2023, 3, 1),
            FightRecord::new("Hari", "Tiger Den", "Patan", Gender::Male, "Lightweight", 25.0, 2023, 2, 6),
        ]
    }

    #[test]
    fn test_kpis_on_empty_subset() {
        for mode in [Mode::Gym, Mode::Boxer] {
            let kpis = calculate_kpis(&[], mode);
            assert_eq!(kpis.total_boxers, 0);
            assert_eq!(kpis.total_fights, 0);
            assert_eq!(kpis.top_performer, "N/A");
        }
    }

    #[test]
    fn test_kpis_counts() {
        let kpis = calculate_kpis(&create_test_table(), Mode::Boxer);
        assert_eq!(kpis.total_boxers, 3);
        assert_eq!(kpis.total_gyms, 2);
        assert_eq!(kpis.total_locations, 2);
        assert_eq!(kpis.total_fights, 32);
        // mean(0.6, 0.9, 0.75, 0.25) = 0.625
        assert_eq!(kpis.avg_win_ratio, 62.5);
    }

    #[test]
    fn test_top_performer_formats() {
        let table = create_test_table();
        // Ram: 15/20 = 75%, Sita: 3/4 = 75% -> Ram seen first and kept
        assert_eq!(
            calculate_kpis(&table, Mode::Boxer).top_performer,
            "Ram (Iron Fist, Boudha) - 75.0%"
        );
        assert_eq!(
            calculate_kpis(&table, Mode::Gym).top_performer,
            "Iron Fist (Boudha) - 75.0%"
        );
    }

    #[test]
    fn test_win_ratios_gym_mode() {
        let entries = calculate_win_ratios(&create_test_table(), Mode::Gym, &[]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "Iron Fist (Boudha)");
        assert!((entries[0].win_ratio - 0.75).abs() < 1e-6);
        assert_eq!(entries[1].label, "Tiger Den (Patan)");
    }

    #[test]
    fn test_win_ratios_selected_boxers_skip_missing() {
        let selected = vec!["Hari".to_string(), "Nobody".to_string()];
        let entries = calculate_win_ratios(&create_test_table(), Mode::Boxer, &selected);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "Hari (Tiger Den, Patan)");
        assert!((entries[0].win_ratio - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_advanced_stats() {
        let stats = calculate_advanced_stats(&create_test_table(), Mode::Boxer);
        assert_eq!(stats.most_consistent.as_deref(), Some("Ram (σ: 0.212)"));
        assert_eq!(stats.best_gym_volume.as_deref(), Some("Iron Fist (18 wins)"));
        assert_eq!(stats.highest_win_streak, Some(9));
        assert_eq!(stats.best_location.as_deref(), Some("Boudha (1 gyms)"));

        let gym_stats = calculate_advanced_stats(&create_test_table(), Mode::Gym);
        assert_eq!(gym_stats.most_consistent, None);
    }
}
