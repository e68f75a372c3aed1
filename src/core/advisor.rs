//! Rule-based improvement suggestions for gyms and boxers
//!
//! Every suggestion slot is a fixed decision ladder over aggregate metrics.
//! The thresholds are output-compatibility constants, not tunables.
//! Ladder inputs are exact ratios so a boundary value lands in its own band;
//! yearly ratios and the location report keep the epsilon-guarded form.

use std::collections::{BTreeSet, HashSet};

use crate::core::filters::ALL_LOCATIONS;
use crate::core::stats::{group_by, mean, sample_std_dev, WinLoss};
use crate::models::{FightRecord, Gender, GymAnalysis, LocationAnalysis};

/// Number of suggestions produced per entity
pub const SUGGESTION_COUNT: usize = 5;

/// Gym suggestion ladders
pub mod gym_thresholds {
    pub const LOW_WIN_RATIO: f64 = 0.5;
    pub const HIGH_WIN_RATIO: f64 = 0.7;
    pub const SMALL_TEAM: usize = 5;
    pub const LARGE_TEAM: usize = 15;
    pub const GENDER_GAP: f64 = 0.15;
    pub const FEW_WEIGHT_CLASSES: usize = 3;
    pub const MANY_WEIGHT_CLASSES: usize = 5;
    pub const INCONSISTENT_STD_DEV: f64 = 0.2;
    pub const LOW_FIGHT_VOLUME: u64 = 20;
    pub const HIGH_FIGHT_VOLUME: u64 = 50;
}

/// Boxer suggestion ladders
pub mod boxer_thresholds {
    pub const LOW_WIN_RATIO: f64 = 0.4;
    pub const MID_WIN_RATIO: f64 = 0.6;
    pub const EXCELLENT_WIN_RATIO: f64 = 0.75;
    pub const FEW_FIGHTS: u64 = 5;
    pub const MODERATE_FIGHTS: u64 = 15;
    pub const MANY_FIGHTS: u64 = 30;
}

/// Location report strengths and weaknesses
pub mod analysis_thresholds {
    pub const STRONG_WIN_RATIO: f64 = 0.6;
    pub const WEAK_WIN_RATIO: f64 = 0.4;
    pub const IMPROVE_WIN_RATIO: f64 = 0.5;
    pub const LARGE_TEAM: usize = 10;
    pub const SMALL_TEAM: usize = 5;
    pub const FEW_WEIGHT_CLASSES: usize = 3;
    pub const LOCATION_WIN_RATIO: f64 = 0.5;
    pub const FEW_GYMS: usize = 3;
}

/// Per-group aggregate used for peer comparisons
#[derive(Debug, Clone, Copy)]
struct GroupSummary {
    tally: WinLoss,
    boxers: usize,
}

fn summarize(rows: &[&FightRecord]) -> GroupSummary {
    GroupSummary {
        tally: WinLoss::from_records(rows.iter().copied()),
        boxers: distinct_count(rows, |r| r.boxer_name.as_str()),
    }
}

fn distinct_count<'a, F>(rows: &[&'a FightRecord], key: F) -> usize
where
    F: Fn(&'a FightRecord) -> &'a str,
{
    rows.iter().map(|r| key(*r)).collect::<HashSet<_>>().len()
}

/// Win ratio per year, in ascending year order
fn yearly_ratios(rows: &[&FightRecord]) -> Vec<(i32, f64)> {
    let years: BTreeSet<i32> = rows.iter().map(|r| r.year).collect();
    years
        .into_iter()
        .map(|year| {
            let tally = WinLoss::from_records(rows.iter().copied().filter(|r| r.year == year));
            (year, tally.ratio())
        })
        .collect()
}

fn gender_tally(rows: &[&FightRecord], gender: Gender) -> Option<WinLoss> {
    let matching: Vec<&FightRecord> = rows.iter().copied().filter(|r| r.gender == gender).collect();
    if matching.is_empty() {
        None
    } else {
        Some(WinLoss::from_records(matching))
    }
}

fn pct(ratio: f64) -> f64 {
    ratio * 100.0
}

/// Improvement advisor over the full fight-record table
#[derive(Debug, Clone, Copy)]
pub struct ImprovementAdvisor<'a> {
    records: &'a [FightRecord],
}

impl<'a> ImprovementAdvisor<'a> {
    pub fn new(records: &'a [FightRecord]) -> Self {
        Self { records }
    }

    /// Five suggestions for a gym, compared against the other gyms of its location
    ///
    /// Returns an empty list when the gym has no rows in that location.
    pub fn get_gym_suggestions(&self, gym_name: &str, location: &str) -> Vec<String> {
        use gym_thresholds::*;

        let location_rows: Vec<FightRecord> = self
            .records
            .iter()
            .filter(|r| r.location == location)
            .cloned()
            .collect();
        let groups = group_by(&location_rows, |r| r.gym.as_str());

        let Some((_, gym_rows)) = groups.iter().find(|(gym, _)| *gym == gym_name) else {
            return Vec::new();
        };

        // First pass: per-gym summaries for the whole location
        let summaries: Vec<(&str, GroupSummary)> = groups
            .iter()
            .map(|(gym, rows)| (*gym, summarize(rows)))
            .collect();

        // Second pass: compare the target against its peers
        let peers: Vec<&GroupSummary> = summaries
            .iter()
            .filter(|(gym, _)| *gym != gym_name)
            .map(|(_, summary)| summary)
            .collect();
        let peer_ratios: Vec<f64> = peers
            .iter()
            .filter(|s| s.tally.total() > 0)
            .map(|s| s.tally.exact_ratio())
            .collect();
        let peer_boxers: Vec<f64> = peers.iter().map(|s| s.boxers as f64).collect();
        let avg_other_win_ratio = mean(&peer_ratios).unwrap_or(0.0);
        let avg_other_boxers = mean(&peer_boxers).unwrap_or(0.0);

        let own = summarize(gym_rows);
        let win_ratio = own.tally.exact_ratio();
        let total_boxers = own.boxers;
        let total_fights = own.tally.total();

        let male = gender_tally(gym_rows, Gender::Male);
        let female = gender_tally(gym_rows, Gender::Female);
        let weight_class_count = distinct_count(gym_rows, |r| r.weight_class.as_str());

        let yearly: Vec<f64> = yearly_ratios(gym_rows).into_iter().map(|(_, ratio)| ratio).collect();
        let performance_std = sample_std_dev(&yearly).unwrap_or(0.0);

        let mut suggestions = Vec::with_capacity(SUGGESTION_COUNT);

        // 1. Win ratio standing
        suggestions.push(if win_ratio < avg_other_win_ratio && avg_other_win_ratio > 0.0 {
            let gap = pct(avg_other_win_ratio - win_ratio);
            format!("Improve overall win ratio by {:.1}% to match location average. Focus on strategic fight preparation and technique refinement.", gap)
        } else if win_ratio < LOW_WIN_RATIO {
            format!("Current win ratio is {:.1}%. Implement advanced training programs focusing on defensive techniques and counter-attacking strategies.", pct(win_ratio))
        } else if win_ratio >= HIGH_WIN_RATIO {
            format!("Excellent win ratio of {:.1}%! Maintain this performance by continuing current training methods and mentoring newer boxers.", pct(win_ratio))
        } else {
            format!("Win ratio is {:.1}%. Focus on consistency in training and match preparation to reach the next level.", pct(win_ratio))
        });

        // 2. Team size
        suggestions.push(if (total_boxers as f64) < avg_other_boxers && avg_other_boxers > 0.0 {
            let shortfall = (avg_other_boxers - total_boxers as f64) as i64;
            format!("Recruit {} more boxers to match location average. Larger teams provide better training partners and competitive environment.", shortfall)
        } else if total_boxers < SMALL_TEAM {
            format!("Small team size ({} boxers). Expand recruitment to build team depth and create more competitive training scenarios.", total_boxers)
        } else if total_boxers > LARGE_TEAM {
            format!("Large team ({} boxers). Focus on personalized coaching for each boxer to maximize individual potential.", total_boxers)
        } else {
            format!("Team size is good ({} boxers). Focus on quality training sessions and individual skill development.", total_boxers)
        });

        // 3. Gender balance
        suggestions.push(match (male, female) {
            (Some(male), Some(female)) => {
                let male_ratio = male.exact_ratio();
                let female_ratio = female.exact_ratio();
                if (male_ratio - female_ratio).abs() > GENDER_GAP {
                    if male_ratio < female_ratio {
                        format!("Male boxers' win ratio ({:.1}%) is lower than female ({:.1}%). Provide specialized coaching for male boxers focusing on technique and conditioning.", pct(male_ratio), pct(female_ratio))
                    } else {
                        format!("Female boxers' win ratio ({:.1}%) is lower than male ({:.1}%). Enhance training programs specifically designed for female boxers.", pct(female_ratio), pct(male_ratio))
                    }
                } else {
                    "Gender performance is balanced. Continue equal focus on both male and female training programs.".to_string()
                }
            }
            (Some(_), None) => "Only male boxers present. Consider recruiting female boxers to diversify the team and expand gym's competitive reach.".to_string(),
            // gym_rows is non-empty, so at least one gender is present
            _ => "Only female boxers present. Consider recruiting male boxers to create a more diverse and competitive training environment.".to_string(),
        });

        // 4. Weight class diversity
        suggestions.push(if weight_class_count < FEW_WEIGHT_CLASSES {
            format!("Limited weight class representation ({} classes). Diversify by recruiting boxers across different weight classes to strengthen overall gym performance.", weight_class_count)
        } else if weight_class_count >= MANY_WEIGHT_CLASSES {
            format!("Good weight class diversity ({} classes). Focus on specialized training for each weight class to maximize performance.", weight_class_count)
        } else {
            format!("Moderate weight class coverage ({} classes). Consider adding 1-2 more weight classes to expand competitive opportunities.", weight_class_count)
        });

        // 5. Year consistency takes priority over fight volume
        suggestions.push(if performance_std > INCONSISTENT_STD_DEV && yearly.len() > 1 {
            format!("Inconsistent performance across years (variance: {:.2}). Develop long-term training plans to maintain consistent results year-over-year.", performance_std)
        } else if total_fights < LOW_FIGHT_VOLUME {
            format!("Low fight volume ({} total fights). Increase competition participation to gain experience and improve win rates through more match practice.", total_fights)
        } else if total_fights > HIGH_FIGHT_VOLUME {
            format!("High activity level ({} fights). Focus on recovery and quality over quantity - ensure boxers have adequate rest between competitions.", total_fights)
        } else {
            format!("Good fight volume ({} fights). Balance competition frequency with training quality to optimize performance.", total_fights)
        });

        suggestions.truncate(SUGGESTION_COUNT);
        suggestions
    }

    /// Five suggestions for a boxer, compared against gym-mates
    ///
    /// `location` of `None` or "All Locations" considers every row of the boxer.
    pub fn get_boxer_suggestions(&self, boxer_name: &str, location: Option<&str>) -> Vec<String> {
        use boxer_thresholds::*;

        let location = location.filter(|l| *l != ALL_LOCATIONS);
        let boxer_rows: Vec<&FightRecord> = self
            .records
            .iter()
            .filter(|r| r.boxer_name == boxer_name)
            .filter(|r| location.map_or(true, |l| r.location == l))
            .collect();

        let Some(first) = boxer_rows.first() else {
            return Vec::new();
        };

        let tally = WinLoss::from_records(boxer_rows.iter().copied());
        let win_ratio = tally.exact_ratio();
        let total_fights = tally.total();

        // Gym-mates are matched by gym name across all locations
        let gym_rows: Vec<FightRecord> = self
            .records
            .iter()
            .filter(|r| r.gym == first.gym)
            .cloned()
            .collect();
        let mate_ratios: Vec<f64> = group_by(&gym_rows, |r| r.boxer_name.as_str())
            .into_iter()
            .filter(|(name, _)| *name != boxer_name)
            .map(|(_, rows)| WinLoss::from_records(rows))
            .filter(|t| t.total() > 0)
            .map(|t| t.exact_ratio())
            .collect();
        let avg_gym_win_ratio = mean(&mate_ratios).unwrap_or(0.0);

        let yearly = yearly_ratios(&boxer_rows);
        let improving = match (yearly.first(), yearly.last()) {
            (Some((_, earliest)), Some((_, latest))) if yearly.len() >= 2 => latest > earliest,
            _ => false,
        };

        let mut suggestions = Vec::with_capacity(SUGGESTION_COUNT);

        // 1. Win ratio band
        suggestions.push(if win_ratio < LOW_WIN_RATIO {
            format!("Win ratio is {:.1}%. Focus on fundamental techniques, defensive skills, and consistent training to improve performance.", pct(win_ratio))
        } else if win_ratio < MID_WIN_RATIO {
            format!("Win ratio is {:.1}%. Work on advanced strategies, counter-punching, and mental preparation to reach elite level.", pct(win_ratio))
        } else if win_ratio >= EXCELLENT_WIN_RATIO {
            format!("Excellent win ratio of {:.1}%! Maintain this by focusing on consistency, recovery, and mentoring others.", pct(win_ratio))
        } else {
            format!("Good win ratio of {:.1}%. Push to next level by refining technique and increasing fight frequency.", pct(win_ratio))
        });

        // 2. Gym-mate comparison
        suggestions.push(if avg_gym_win_ratio > 0.0 && win_ratio < avg_gym_win_ratio {
            let gap = pct(avg_gym_win_ratio - win_ratio);
            format!("Performance is {:.1}% below gym average. Train with top performers in your gym and seek additional coaching sessions.", gap)
        } else if avg_gym_win_ratio > 0.0 && win_ratio > avg_gym_win_ratio {
            "Performing above gym average! Share techniques with teammates and consider competing at higher levels.".to_string()
        } else {
            "Focus on consistent training schedule and sparring with diverse opponents to improve skills.".to_string()
        });

        // 3. Fight volume
        suggestions.push(if total_fights < FEW_FIGHTS {
            format!("Limited fight experience ({} fights). Increase competition participation to gain experience and build confidence.", total_fights)
        } else if total_fights < MODERATE_FIGHTS {
            format!("Moderate experience ({} fights). Continue competing regularly while focusing on quality preparation for each match.", total_fights)
        } else if total_fights > MANY_FIGHTS {
            format!("Extensive experience ({} fights). Focus on recovery, technique refinement, and strategic fight selection.", total_fights)
        } else {
            format!("Good fight experience ({} fights). Balance competition with training to optimize performance.", total_fights)
        });

        // 4. Year-over-year trend
        suggestions.push(if yearly.len() >= 2 {
            if improving {
                "Showing improvement over time! Continue current training approach and set higher goals for upcoming competitions.".to_string()
            } else {
                "Performance needs improvement over time. Review training methods, consider new coaching approaches, and focus on weaknesses.".to_string()
            }
        } else {
            "Build long-term training plan focusing on skill development, conditioning, and strategic fight preparation.".to_string()
        });

        // 5. Weight class specialization
        suggestions.push(if total_fights > 0 {
            if distinct_count(&boxer_rows, |r| r.weight_class.as_str()) > 1 {
                "Competing in multiple weight classes. Consider specializing in one weight class where performance is strongest.".to_string()
            } else {
                format!("Specialized in {} weight class. Focus on mastering techniques specific to this weight class and maintaining optimal weight.", first.weight_class)
            }
        } else {
            "Focus on building fundamental boxing skills, conditioning, and finding the optimal weight class for your physique.".to_string()
        });

        suggestions.truncate(SUGGESTION_COUNT);
        suggestions
    }

    /// Strengths, weaknesses and recommendations for every gym of a location
    ///
    /// Returns `None` when the location (after the gender restriction) has no rows.
    pub fn get_comprehensive_analysis(&self, location: &str, gender: Option<Gender>) -> Option<LocationAnalysis> {
        use analysis_thresholds::*;

        let location_rows: Vec<FightRecord> = self
            .records
            .iter()
            .filter(|r| r.location == location)
            .filter(|r| gender.map_or(true, |g| r.gender == g))
            .cloned()
            .collect();

        if location_rows.is_empty() {
            return None;
        }

        let groups = group_by(&location_rows, |r| r.gym.as_str());
        let all_rows: Vec<&FightRecord> = location_rows.iter().collect();

        let gym_analysis: Vec<GymAnalysis> = groups
            .iter()
            .map(|(gym, rows)| {
                let summary = summarize(rows);
                let win_ratio = summary.tally.ratio();
                let male_win_ratio = gender_tally(rows, Gender::Male).map(|t| t.ratio());
                let female_win_ratio = gender_tally(rows, Gender::Female).map(|t| t.ratio());

                let mut strengths = Vec::new();
                let mut weaknesses = Vec::new();
                let mut recommendations = Vec::new();

                if win_ratio > STRONG_WIN_RATIO {
                    strengths.push("High overall win ratio".to_string());
                } else if win_ratio < WEAK_WIN_RATIO {
                    weaknesses.push("Low overall win ratio".to_string());
                }

                if summary.boxers > LARGE_TEAM {
                    strengths.push("Large team size".to_string());
                } else if summary.boxers < SMALL_TEAM {
                    weaknesses.push("Small team size".to_string());
                }

                if win_ratio < IMPROVE_WIN_RATIO {
                    recommendations.push("Focus on improving training techniques and strategy".to_string());
                }

                if distinct_count(rows, |r| r.weight_class.as_str()) < FEW_WEIGHT_CLASSES {
                    recommendations.push("Diversify weight class representation".to_string());
                }

                if let (Some(male), Some(female)) = (male_win_ratio, female_win_ratio) {
                    if male < female {
                        recommendations.push("Provide specialized coaching for male boxers".to_string());
                    } else {
                        recommendations.push("Enhance training programs for female boxers".to_string());
                    }
                }

                GymAnalysis {
                    gym_name: gym.to_string(),
                    total_boxers: summary.boxers,
                    total_wins: summary.tally.wins,
                    total_losses: summary.tally.losses,
                    win_ratio,
                    male_win_ratio,
                    female_win_ratio,
                    strengths,
                    weaknesses,
                    recommendations,
                }
            })
            .collect();

        let mut overall_recommendations = Vec::new();
        if WinLoss::from_records(all_rows.iter().copied()).ratio() < LOCATION_WIN_RATIO {
            overall_recommendations.push("Location-wide training improvement needed".to_string());
        }
        if groups.len() < FEW_GYMS {
            overall_recommendations.push("Consider establishing more gyms in this area".to_string());
        }

        Some(LocationAnalysis {
            location: location.to_string(),
            total_gyms: groups.len(),
            total_boxers: distinct_count(&all_rows, |r| r.boxer_name.as_str()),
            gym_analysis,
            overall_recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, gym: &str, location: &str, gender: Gender, weight: &str, year: i32, wins: u32, losses: u32) -> FightRecord {
        FightRecord::new(name, gym, location, gender, weight, 24.0, year, wins, losses)
    }

    fn create_test_table() -> Vec<FightRecord> {
        vec![
            record("Ram", "Iron Fist", "Boudha", Gender::Male, "Lightweight", 2022, 2, 6),
            record("Ram", "Iron Fist", "Boudha", Gender::Male, "Lightweight", 2023, 6, 2),
            record("Sita", "Iron Fist", "Boudha", Gender::Female, "Flyweight", 2023, 1, 3),
            record("Hari", "Tiger Den", "Boudha", Gender::Male, "Lightweight", 2023, 8, 2),
            record("Gita", "Tiger Den", "Boudha", Gender::Female, "Bantamweight", 2023, 8, 2),
            record("Bishnu", "Tiger Den", "Boudha", Gender::Male, "Welterweight", 2023, 9, 1),
            record("Kiran", "Summit", "Patan", Gender::Female, "Flyweight", 2023, 5, 3),
        ]
    }

    #[test]
    fn test_gym_suggestions_below_peer_average() {
        let table = create_test_table();
        let suggestions = ImprovementAdvisor::new(&table).get_gym_suggestions("Iron Fist", "Boudha");

        assert_eq!(suggestions.len(), SUGGESTION_COUNT);
        // Iron Fist 9/20 vs Tiger Den 25/30
        assert!(suggestions[0].starts_with("Improve overall win ratio by 38.3%"));
        assert!(suggestions[1].starts_with("Recruit 1 more boxers"));
        assert!(suggestions[2].starts_with("Female boxers' win ratio (25.0%) is lower than male (50.0%)"));
        assert!(suggestions[3].starts_with("Limited weight class representation (2 classes)"));
        assert!(suggestions[4].starts_with("Inconsistent performance across years (variance: 0.24)"));
    }

    #[test]
    fn test_gym_suggestions_strong_gym() {
        let table = create_test_table();
        let suggestions = ImprovementAdvisor::new(&table).get_gym_suggestions("Tiger Den", "Boudha");

        assert_eq!(suggestions.len(), SUGGESTION_COUNT);
        assert!(suggestions[0].starts_with("Excellent win ratio of 83.3%!"));
        assert!(suggestions[1].starts_with("Small team size (3 boxers)"));
        assert!(suggestions[2].starts_with("Gender performance is balanced"));
        assert!(suggestions[3].starts_with("Moderate weight class coverage (3 classes)"));
        assert!(suggestions[4].starts_with("Good fight volume (30 fights)"));
    }

    #[test]
    fn test_gym_suggestions_single_gender_without_peers() {
        let table = create_test_table();
        let suggestions = ImprovementAdvisor::new(&table).get_gym_suggestions("Summit", "Patan");

        assert_eq!(suggestions.len(), SUGGESTION_COUNT);
        assert!(suggestions[0].starts_with("Win ratio is 62.5%."));
        assert!(suggestions[2].starts_with("Only female boxers present."));
        assert!(suggestions[4].starts_with("Low fight volume (8 total fights)"));
    }

    #[test]
    fn test_gym_suggestions_unknown_gym() {
        let table = create_test_table();
        let advisor = ImprovementAdvisor::new(&table);
        assert!(advisor.get_gym_suggestions("Iron Fist", "Patan").is_empty());
        assert!(ImprovementAdvisor::new(&[]).get_gym_suggestions("Iron Fist", "Boudha").is_empty());
    }

    #[test]
    fn test_boxer_suggestions() {
        let table = create_test_table();
        let suggestions = ImprovementAdvisor::new(&table).get_boxer_suggestions("Ram", Some("All Locations"));

        assert_eq!(suggestions.len(), SUGGESTION_COUNT);
        assert!(suggestions[0].starts_with("Win ratio is 50.0%. Work on advanced strategies"));
        // Sita is the only gym-mate, at 25%
        assert!(suggestions[1].starts_with("Performing above gym average!"));
        assert!(suggestions[2].starts_with("Good fight experience (16 fights)"));
        assert!(suggestions[3].starts_with("Showing improvement over time!"));
        assert!(suggestions[4].starts_with("Specialized in Lightweight weight class."));
    }

    fn single_row_table(gym: &str, wins: u32, losses: u32) -> Vec<FightRecord> {
        vec![record("Solo", gym, "Boudha", Gender::Male, "Lightweight", 2023, wins, losses)]
    }

    #[test]
    fn test_boxer_win_ratio_bands_at_boundaries() {
        let cases = [
            (3, 1, "Excellent win ratio of 75.0%!"),
            (3, 2, "Good win ratio of 60.0%."),
            (2, 3, "Win ratio is 40.0%. Work on advanced strategies"),
            (1, 2, "Win ratio is 33.3%. Focus on fundamental techniques"),
        ];
        for (wins, losses, expected) in cases {
            let table = single_row_table("Iron Fist", wins, losses);
            let suggestions = ImprovementAdvisor::new(&table).get_boxer_suggestions("Solo", None);
            assert!(
                suggestions[0].starts_with(expected),
                "{}W/{}L gave {:?}",
                wins,
                losses,
                suggestions[0]
            );
        }
    }

    #[test]
    fn test_gym_win_ratio_bands_at_boundaries() {
        let cases = [
            (7, 3, "Excellent win ratio of 70.0%!"),
            (5, 5, "Win ratio is 50.0%. Focus on consistency"),
            (4, 6, "Current win ratio is 40.0%."),
        ];
        for (wins, losses, expected) in cases {
            let table = single_row_table("Iron Fist", wins, losses);
            let suggestions = ImprovementAdvisor::new(&table).get_gym_suggestions("Iron Fist", "Boudha");
            assert!(
                suggestions[0].starts_with(expected),
                "{}W/{}L gave {:?}",
                wins,
                losses,
                suggestions[0]
            );
        }
    }

    #[test]
    fn test_gym_matching_peer_average_is_not_a_gap() {
        // Both gyms sit at exactly 60%, so the peer-gap branch must not fire
        let table = vec![
            record("Ram", "Iron Fist", "Boudha", Gender::Male, "Lightweight", 2023, 3, 2),
            record("Hari", "Tiger Den", "Boudha", Gender::Male, "Lightweight", 2023, 6, 4),
        ];
        let suggestions = ImprovementAdvisor::new(&table).get_gym_suggestions("Iron Fist", "Boudha");
        assert!(suggestions[0].starts_with("Win ratio is 60.0%."));
    }

    #[test]
    fn test_boxer_suggestions_location_mismatch() {
        let table = create_test_table();
        let advisor = ImprovementAdvisor::new(&table);
        assert!(advisor.get_boxer_suggestions("Ram", Some("Patan")).is_empty());
        assert!(advisor.get_boxer_suggestions("Nobody", None).is_empty());
    }

    #[test]
    fn test_comprehensive_analysis() {
        let table = create_test_table();
        let analysis = ImprovementAdvisor::new(&table)
            .get_comprehensive_analysis("Boudha", None)
            .unwrap();

        assert_eq!(analysis.total_gyms, 2);
        assert_eq!(analysis.total_boxers, 5);
        assert_eq!(
            analysis.overall_recommendations,
            vec!["Consider establishing more gyms in this area".to_string()]
        );

        let iron_fist = &analysis.gym_analysis[0];
        assert_eq!(iron_fist.gym_name, "Iron Fist");
        assert!(iron_fist.strengths.is_empty());
        assert_eq!(iron_fist.weaknesses, vec!["Small team size".to_string()]);
        assert_eq!(
            iron_fist.recommendations,
            vec![
                "Focus on improving training techniques and strategy".to_string(),
                "Diversify weight class representation".to_string(),
                "Enhance training programs for female boxers".to_string(),
            ]
        );

        let tiger_den = &analysis.gym_analysis[1];
        assert_eq!(tiger_den.strengths, vec!["High overall win ratio".to_string()]);
    }

    #[test]
    fn test_comprehensive_analysis_gender_and_missing_location() {
        let table = create_test_table();
        let advisor = ImprovementAdvisor::new(&table);

        let female = advisor.get_comprehensive_analysis("Boudha", Some(Gender::Female)).unwrap();
        assert_eq!(female.total_boxers, 2);
        assert!(female.gym_analysis.iter().all(|g| g.male_win_ratio.is_none()));

        assert!(advisor.get_comprehensive_analysis("Nowhere", None).is_none());
    }
}
