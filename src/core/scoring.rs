use crate::models::{BoxerProfile, MatchType, MatchmakingWeights};

/// Experience level (0-100) from the number of distinct active years
#[inline]
pub fn experience_level(years_active: usize, weights: &MatchmakingWeights) -> f64 {
    (years_active as f64 * weights.experience_per_year).min(100.0)
}

/// Overall rating (0-100)
///
/// Scoring formula:
/// rating = (
///     skill_level * 0.5 +          # Lifetime win ratio x 100
///     experience_level * 0.2 +     # Distinct years active x 20, capped
///     recent_skill * 0.3           # Win ratio x 100 in the latest year
/// )
#[inline]
pub fn overall_rating(
    skill_level: f64,
    experience_level: f64,
    recent_skill: f64,
    weights: &MatchmakingWeights,
) -> f64 {
    skill_level * weights.skill + experience_level * weights.experience + recent_skill * weights.recent_skill
}

/// Similarity on a 0-100 scale: 100 minus the scaled gap, clamped at zero
#[inline]
fn similarity(a: f64, b: f64, penalty: f64) -> f64 {
    (100.0 - (a - b).abs() * penalty).max(0.0)
}

/// Fairness score (0-100); reaches zero once the rating gap hits 100 / penalty
#[inline]
pub fn fairness_score(boxer_rating: f64, opponent_rating: f64, weights: &MatchmakingWeights) -> f64 {
    similarity(boxer_rating, opponent_rating, weights.fairness_penalty)
}

#[inline]
pub fn experience_bonus(boxer_experience: f64, opponent_experience: f64) -> f64 {
    similarity(boxer_experience, opponent_experience, 1.0)
}

/// Opponent ranking score combining fairness and experience closeness
pub fn calculate_match_score(
    boxer: &BoxerProfile,
    opponent: &BoxerProfile,
    weights: &MatchmakingWeights,
) -> f64 {
    let fairness = fairness_score(boxer.overall_rating, opponent.overall_rating, weights);
    let bonus = experience_bonus(boxer.experience_level, opponent.experience_level);

    fairness * weights.fairness + bonus * weights.experience_bonus
}

/// Classify by the signed gap (opponent minus boxer)
#[inline]
pub fn classify_match(rating_difference: f64, weights: &MatchmakingWeights) -> MatchType {
    if rating_difference.abs() <= weights.fair_match_threshold {
        MatchType::Fair
    } else if rating_difference > 0.0 {
        MatchType::Challenging
    } else {
        MatchType::Advantage
    }
}

/// Sparring partner score: same-location bonus plus skill and experience closeness
pub fn calculate_training_score(
    boxer: &BoxerProfile,
    partner: &BoxerProfile,
    weights: &MatchmakingWeights,
) -> f64 {
    let location_bonus = if partner.location == boxer.location {
        weights.location_bonus
    } else {
        0.0
    };
    let skill_similarity = similarity(boxer.skill_level, partner.skill_level, 2.0);
    let experience_similarity = similarity(boxer.experience_level, partner.experience_level, 1.0);

    location_bonus
        + skill_similarity * weights.skill_similarity
        + experience_similarity * weights.experience_similarity
}
