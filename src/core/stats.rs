use std::collections::{HashMap, HashSet};

use crate::models::FightRecord;

/// Additive guard against division by zero in every ratio
pub const EPSILON: f64 = 1e-8;

/// Divide with an epsilon-guarded denominator
///
/// Never returns NaN or infinity for non-negative inputs; a zero
/// denominator yields zero.
#[inline]
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    numerator / (denominator + EPSILON)
}

/// Divide exactly, yielding zero for an empty denominator
#[inline]
pub fn exact_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Running win/loss totals for a group of records
///
/// Sums are widened to `u64` so large tables cannot overflow the per-row `u32` counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WinLoss {
    pub wins: u64,
    pub losses: u64,
}

impl WinLoss {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a FightRecord>,
    {
        let mut tally = Self::default();
        for record in records {
            tally.add(record);
        }
        tally
    }

    #[inline]
    pub fn add(&mut self, record: &FightRecord) {
        self.wins += u64::from(record.wins);
        self.losses += u64::from(record.losses);
    }

    #[inline]
    pub fn total(&self) -> u64 {
        self.wins + self.losses
    }

    /// Epsilon-guarded ratio, slightly below the exact value
    #[inline]
    pub fn ratio(&self) -> f64 {
        safe_ratio(self.wins as f64, self.total() as f64)
    }

    /// Exact `wins / total`, or zero with no fights
    ///
    /// Use this wherever a ratio is compared against a fixed threshold.
    #[inline]
    pub fn exact_ratio(&self) -> f64 {
        exact_ratio(self.wins as f64, self.total() as f64)
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Sample standard deviation (n - 1 denominator); `None` below two values
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let avg = mean(values)?;
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Format a 0-1 ratio as a one-decimal percentage, e.g. `80.0%`
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Collect values in first-seen order without duplicates
pub fn distinct_in_order<'a, I>(values: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    values.into_iter().filter(|v| seen.insert(*v)).collect()
}

/// Group rows by a string key, keeping groups in first-seen order
pub fn group_by<'a, F>(records: &'a [FightRecord], key: F) -> Vec<(&'a str, Vec<&'a FightRecord>)>
where
    F: Fn(&'a FightRecord) -> &'a str,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<(&'a str, Vec<&'a FightRecord>)> = Vec::new();

    for record in records {
        let k = key(record);
        match index.get(k) {
            Some(&i) => groups[i].1.push(record),
            None => {
                index.insert(k, groups.len());
                groups.push((k, vec![record]));
            }
        }
    }

    groups
}
