use aidgrid::district::{LandType, Urbanization};
use aidgrid::risk::{self, RiskLevel};

#[test]
fn scoring_is_deterministic() {
    for _ in 0..3 {
        assert_eq!(
            risk::score_district(75_000, LandType::Desert, Urbanization::Urban),
            risk::score_district(75_000, LandType::Desert, Urbanization::Urban)
        );
    }
}

#[test]
fn score_stays_within_bounds_for_all_valid_inputs() {
    let populations = [1, 9_999, 10_000, 50_000, 50_001, 100_000, 100_001, 5_000_000];
    for population in populations {
        for land_type in LandType::ALL {
            for urbanization in Urbanization::ALL {
                let score = risk::score_district(population, land_type, urbanization);
                assert!(
                    (4..=23).contains(&score),
                    "score {} out of bounds for ({}, {}, {})",
                    score,
                    population,
                    land_type,
                    urbanization
                );
            }
        }
    }
}

#[test]
fn desert_urban_metropolis_is_high_risk() {
    let score = risk::score_district(75_000, LandType::Desert, Urbanization::Urban);
    assert_eq!(score, 18);
    assert_eq!(RiskLevel::for_score(score), RiskLevel::High);
}

#[test]
fn rural_forest_hamlet_is_low_risk() {
    let score = risk::score_district(5_000, LandType::Forest, Urbanization::Rural);
    assert_eq!(score, 6);
    assert_eq!(RiskLevel::for_score(score), RiskLevel::Low);
}

#[test]
fn extremes_hit_the_range_ends() {
    assert_eq!(
        risk::score_district(1, LandType::Forest, Urbanization::Rural),
        4
    );
    assert_eq!(
        risk::score_district(500_000, LandType::Urban, Urbanization::Urban),
        23
    );
}

#[test]
fn label_scoring_degrades_unknown_categories_to_zero() {
    // population sub-score alone: 4 * 3
    assert_eq!(risk::score_labels(200_000, "Tundra", "Arcology"), 12);
    // one valid, one unknown
    assert_eq!(risk::score_labels(200_000, "Urban", "Arcology"), 20);
}
