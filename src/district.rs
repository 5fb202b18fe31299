use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DistrictId(u64);

impl DistrictId {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DistrictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandType {
    Forest,
    Coastal,
    Desert,
    Urban,
}

impl LandType {
    pub const ALL: [LandType; 4] = [
        LandType::Forest,
        LandType::Coastal,
        LandType::Desert,
        LandType::Urban,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Forest" => Some(LandType::Forest),
            "Coastal" => Some(LandType::Coastal),
            "Desert" => Some(LandType::Desert),
            "Urban" => Some(LandType::Urban),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LandType::Forest => "Forest",
            LandType::Coastal => "Coastal",
            LandType::Desert => "Desert",
            LandType::Urban => "Urban",
        }
    }
}

impl fmt::Display for LandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Urbanization {
    Rural,
    Suburban,
    Urban,
}

impl Urbanization {
    pub const ALL: [Urbanization; 3] = [
        Urbanization::Rural,
        Urbanization::Suburban,
        Urbanization::Urban,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Rural" => Some(Urbanization::Rural),
            "Suburban" => Some(Urbanization::Suburban),
            "Urban" => Some(Urbanization::Urban),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Urbanization::Rural => "Rural",
            Urbanization::Suburban => "Suburban",
            Urbanization::Urban => "Urban",
        }
    }
}

impl fmt::Display for Urbanization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// District attributes before the risk score exists. Drafts come out of the
/// intake layer or the scenario loader, both of which enforce the non-empty
/// name and positive population/demand constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftDistrict {
    pub name: String,
    pub population: u64,
    pub land_type: LandType,
    pub urbanization: Urbanization,
    pub resource_demand: u64,
}

/// A registered district. The risk score is assigned exactly once when the
/// registry admits the draft and is never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct District {
    pub id: DistrictId,
    pub name: String,
    pub population: u64,
    pub land_type: LandType,
    pub urbanization: Urbanization,
    pub resource_demand: u64,
    pub risk_score: u32,
}

impl District {
    /// Risk-to-demand ratio used to order districts for allocation.
    pub fn priority(&self) -> f64 {
        self.risk_score as f64 / self.resource_demand as f64
    }
}
