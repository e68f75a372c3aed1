// Integration tests for Boxing Analytics

use boxing_analytics::core::{
    apply_filters, calculate_advanced_stats, calculate_kpis, calculate_win_ratios, FilterCriteria, GymRecommender,
    ImprovementAdvisor, MatchMaker,
};
use boxing_analytics::models::{FilterRequest, Gender, MatchType, Mode};
use boxing_analytics::services::{boxers_with_gyms, write_csv, Dataset};

const LEAGUE_CSV: &str = "\
Boxer_Name,Gym,Location,Gender,Weight_Class,Age,Year,Wins,Losses
A1,Gym A,X,Male,Lightweight,22,2023,8,2
B1,Gym B,X,Male,Lightweight,24,2023,3,7
C1,Gym C,Y,Female,Flyweight,20,2023,6,4
";

const RIVALS_CSV: &str = "\
Boxer_Name,Gym,Location,Gender,Weight_Class,Age,Year,Wins,Losses
Z,Iron Fist,Boudha,Male,Lightweight,24,2020,2,2
Z,Iron Fist,Boudha,Male,Lightweight,26,2022,8,2
Twin,Tiger Den,Boudha,Male,Lightweight,24,2020,2,2
Twin,Tiger Den,Boudha,Male,Lightweight,26,2022,8,2
Zoe,Iron Fist,Boudha,Female,Lightweight,24,2020,2,2
Zoe,Iron Fist,Boudha,Female,Lightweight,26,2022,8,2
Zed,Iron Fist,Boudha,Male,Heavyweight,24,2020,2,2
Zed,Iron Fist,Boudha,Male,Heavyweight,26,2022,8,2
Rookie,Summit,Patan,Male,Lightweight,19,2023,1,4
";

fn load(csv: &str) -> Dataset {
    Dataset::from_reader(csv.as_bytes()).expect("valid test CSV")
}

#[test]
fn test_integration_gym_ranking_scenario() {
    let dataset = load(LEAGUE_CSV);
    let ranked = GymRecommender::new(dataset.records()).recommend_gyms_by_location("X", None, None, None);

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].gym, "Gym A");
    assert!((ranked[0].win_ratio - 0.8).abs() < 1e-6);
    assert_eq!(ranked[1].gym, "Gym B");
    assert!((ranked[1].win_ratio - 0.3).abs() < 1e-6);
}

#[test]
fn test_integration_dashboard_pipeline() {
    let dataset = load(LEAGUE_CSV);
    let request = FilterRequest {
        location: "X".to_string(),
        ..Default::default()
    };
    let criteria = request.to_criteria().unwrap();
    let subset = apply_filters(dataset.records(), &criteria);

    let kpis = calculate_kpis(&subset, Mode::Gym);
    assert_eq!(kpis.total_gyms, 2);
    assert_eq!(kpis.total_locations, 1);
    assert_eq!(kpis.total_fights, 20);
    assert_eq!(kpis.avg_win_ratio, 55.0);
    assert_eq!(kpis.top_performer, "Gym A (X) - 80.0%");

    let ratios = calculate_win_ratios(&subset, Mode::Gym, &[]);
    let labels: Vec<&str> = ratios.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["Gym A (X)", "Gym B (X)"]);

    let advanced = calculate_advanced_stats(&subset, Mode::Gym);
    assert_eq!(advanced.best_gym_volume.as_deref(), Some("Gym A (8 wins)"));
    assert_eq!(advanced.highest_win_streak, Some(8));
    assert_eq!(advanced.best_location.as_deref(), Some("X (2 gyms)"));
}

#[test]
fn test_integration_fair_match_pool_is_strict() {
    let dataset = load(RIVALS_CSV);
    let maker = MatchMaker::with_default_weights(dataset.records());
    let matches = maker.find_fair_matches("Z", 10);

    let names: Vec<&str> = matches.iter().map(|m| m.opponent_name.as_str()).collect();
    assert_eq!(names, vec!["Twin", "Rookie"]);
    assert_eq!(matches[0].match_type, MatchType::Fair);
    assert_eq!(matches[1].match_type, MatchType::Advantage);
}

#[test]
fn test_integration_training_partners() {
    let dataset = load(RIVALS_CSV);
    let maker = MatchMaker::with_default_weights(dataset.records());
    let partners = maker.find_training_partners("Rookie", 5);

    let names: Vec<&str> = partners.iter().map(|p| p.partner_name.as_str()).collect();
    assert_eq!(names, vec!["Z", "Twin"]);
    assert!(partners.iter().all(|p| !p.same_location));
}

#[test]
fn test_integration_advisor_outputs() {
    let dataset = load(RIVALS_CSV);
    let advisor = ImprovementAdvisor::new(dataset.records());

    assert_eq!(advisor.get_gym_suggestions("Iron Fist", "Boudha").len(), 5);
    assert_eq!(advisor.get_boxer_suggestions("Rookie", None).len(), 5);
    assert!(advisor.get_gym_suggestions("Iron Fist", "Patan").is_empty());

    let analysis = advisor.get_comprehensive_analysis("Boudha", Some(Gender::Male)).unwrap();
    assert_eq!(analysis.total_gyms, 2);
    assert_eq!(analysis.total_boxers, 3);
}

const BOUNDARY_CSV: &str = "\
Boxer_Name,Gym,Location,Gender,Weight_Class,Age,Year,Wins,Losses
Ace,Iron Fist,Boudha,Male,Lightweight,22,2023,3,1
Even,Tiger Den,Patan,Male,Lightweight,22,2023,2,3
Ace,Iron Fist,Boudha,Male,Lightweight,23,2024,4,2
Half,Summit,Patan,Female,Flyweight,21,2023,3,2
";

#[test]
fn test_integration_advisor_exact_boundaries() {
    let dataset = load(BOUNDARY_CSV);
    let advisor = ImprovementAdvisor::new(dataset.records());

    // Ace: 7/10 over two years, first year alone is 3/4
    let ace = advisor.get_gym_suggestions("Iron Fist", "Boudha");
    assert!(ace[0].starts_with("Excellent win ratio of 70.0%!"));

    let first_year = ImprovementAdvisor::new(&dataset.records()[..1]).get_boxer_suggestions("Ace", None);
    assert!(first_year[0].starts_with("Excellent win ratio of 75.0%!"));

    let even = advisor.get_boxer_suggestions("Even", Some("Patan"));
    assert!(even[0].starts_with("Win ratio is 40.0%. Work on advanced strategies"));

    // Summit at 60% sits above Tiger Den's 40% peer average
    let summit = advisor.get_gym_suggestions("Summit", "Patan");
    assert!(summit[0].starts_with("Win ratio is 60.0%."));
}

#[test]
fn test_integration_empty_table_degrades_gracefully() {
    let dataset = Dataset::load_or_empty("missing/boxing_data.csv");
    let records = dataset.records();

    let kpis = calculate_kpis(records, Mode::Boxer);
    assert_eq!(kpis.total_boxers, 0);
    assert_eq!(kpis.top_performer, "N/A");
    assert!(apply_filters(records, &FilterCriteria::default()).is_empty());
    assert!(GymRecommender::new(records).recommend_for_all_locations(None, None, None).is_empty());
    assert!(MatchMaker::with_default_weights(records).find_fair_matches("Z", 5).is_empty());
    assert!(ImprovementAdvisor::new(records).get_comprehensive_analysis("X", None).is_none());
    assert!(boxers_with_gyms(records, &[], None, None).is_empty());
}

#[test]
fn test_integration_export_reloads() {
    let dataset = load(LEAGUE_CSV);
    let mut buffer = Vec::new();
    write_csv(dataset.records(), &mut buffer).unwrap();

    let reloaded = Dataset::from_reader(buffer.as_slice()).unwrap();
    assert_eq!(reloaded.len(), 3);
    assert_eq!(reloaded.records()[2].boxer_name, "C1");
    assert_eq!(reloaded.records()[2].gender, Gender::Female);
}
