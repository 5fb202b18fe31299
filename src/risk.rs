//! Risk scoring for districts.
//!
//! Three independent sub-scores (population, land type, urbanization) are
//! combined with fixed weights. All functions are pure and total.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::district::{LandType, Urbanization};

const POPULATION_WEIGHT: u32 = 3;
const LAND_TYPE_WEIGHT: u32 = 2;
const URBANIZATION_WEIGHT: u32 = 1;

pub fn population_score(population: u64) -> u32 {
    if population < 10_000 {
        1
    } else if population <= 50_000 {
        2
    } else if population <= 100_000 {
        3
    } else {
        4
    }
}

pub fn land_type_score(land_type: LandType) -> u32 {
    match land_type {
        LandType::Forest => 1,
        LandType::Coastal => 2,
        LandType::Desert => 3,
        LandType::Urban => 4,
    }
}

pub fn urbanization_score(urbanization: Urbanization) -> u32 {
    match urbanization {
        Urbanization::Rural => 1,
        Urbanization::Suburban => 2,
        Urbanization::Urban => 3,
    }
}

/// Weighted combination of the three sub-scores. Population dominates, land
/// type is secondary, urbanization tertiary.
pub fn total_score(population: u32, land_type: u32, urbanization: u32) -> u32 {
    population * POPULATION_WEIGHT + land_type * LAND_TYPE_WEIGHT + urbanization * URBANIZATION_WEIGHT
}

/// Score a district from its raw attributes. Range for valid inputs: 4..=23.
pub fn score_district(population: u64, land_type: LandType, urbanization: Urbanization) -> u32 {
    total_score(
        population_score(population),
        land_type_score(land_type),
        urbanization_score(urbanization),
    )
}

/// Score from raw category labels. An unrecognized label degrades to a 0
/// sub-score instead of failing; strict label validation belongs to the
/// intake layer, not here.
pub fn score_labels(population: u64, land_type: &str, urbanization: &str) -> u32 {
    total_score(
        population_score(population),
        LandType::from_label(land_type).map_or(0, land_type_score),
        Urbanization::from_label(urbanization).map_or(0, urbanization_score),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn for_score(score: u32) -> Self {
        if score <= 10 {
            RiskLevel::Low
        } else if score <= 15 {
            RiskLevel::Medium
        } else if score <= 20 {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_score_boundaries() {
        assert_eq!(population_score(9_999), 1);
        assert_eq!(population_score(10_000), 2);
        assert_eq!(population_score(50_000), 2);
        assert_eq!(population_score(50_001), 3);
        assert_eq!(population_score(100_000), 3);
        assert_eq!(population_score(100_001), 4);
    }

    #[test]
    fn score_is_weighted_sum() {
        // 75k Desert Urban: 3*3 + 3*2 + 3*1
        assert_eq!(
            score_district(75_000, LandType::Desert, Urbanization::Urban),
            18
        );
        // 5k Forest Rural: 1*3 + 1*2 + 1*1
        assert_eq!(
            score_district(5_000, LandType::Forest, Urbanization::Rural),
            6
        );
    }

    #[test]
    fn unknown_labels_score_zero() {
        // only the population component survives: 2*3
        assert_eq!(score_labels(20_000, "Swamp", "Orbital"), 6);
        assert_eq!(
            score_labels(20_000, "Coastal", "Suburban"),
            score_district(20_000, LandType::Coastal, Urbanization::Suburban)
        );
    }

    #[test]
    fn levels_follow_thresholds() {
        assert_eq!(RiskLevel::for_score(4), RiskLevel::Low);
        assert_eq!(RiskLevel::for_score(10), RiskLevel::Low);
        assert_eq!(RiskLevel::for_score(11), RiskLevel::Medium);
        assert_eq!(RiskLevel::for_score(15), RiskLevel::Medium);
        assert_eq!(RiskLevel::for_score(16), RiskLevel::High);
        assert_eq!(RiskLevel::for_score(20), RiskLevel::High);
        assert_eq!(RiskLevel::for_score(21), RiskLevel::Critical);
        assert_eq!(RiskLevel::for_score(23), RiskLevel::Critical);
    }
}
