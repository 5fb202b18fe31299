//! The externally-owned state the core operates on: the append-only district
//! collection and the resource-pool scalar.

use serde::{Deserialize, Serialize};

use crate::allocation::{self, AllocationReport, AllocationStatus};
use crate::district::{District, DistrictId, DraftDistrict, LandType, Urbanization};
use crate::risk::{self, RiskLevel};

#[derive(Debug)]
pub struct Registry {
    next_id: u64,
    districts: Vec<District>,
    resource_pool: u64,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            districts: Vec::new(),
            resource_pool: 0,
        }
    }

    /// Score the draft and admit it. Districts are immutable once admitted;
    /// ids come from a monotonic counter and are never reused.
    pub fn add_district(&mut self, draft: DraftDistrict) -> DistrictId {
        let risk_score = risk::score_district(draft.population, draft.land_type, draft.urbanization);
        let id = self.allocate_id();
        self.districts.push(District {
            id,
            name: draft.name,
            population: draft.population,
            land_type: draft.land_type,
            urbanization: draft.urbanization,
            resource_demand: draft.resource_demand,
            risk_score,
        });
        id
    }

    pub fn district(&self, id: DistrictId) -> Option<&District> {
        self.districts.iter().find(|d| d.id == id)
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    pub fn len(&self) -> usize {
        self.districts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }

    pub fn resource_pool(&self) -> u64 {
        self.resource_pool
    }

    pub fn set_resource_pool(&mut self, total: u64) {
        self.resource_pool = total;
    }

    pub fn total_demand(&self) -> u64 {
        self.districts.iter().map(|d| d.resource_demand).sum()
    }

    pub fn total_risk(&self) -> u64 {
        self.districts.iter().map(|d| d.risk_score as u64).sum()
    }

    /// Share of total demand the current pool could cover, capped at 100.
    /// Presentation-only figure; the core itself stays in integers.
    pub fn fulfillment_percent(&self) -> f64 {
        let demand = self.total_demand();
        if demand == 0 {
            return 0.0;
        }
        (self.resource_pool as f64 / demand as f64 * 100.0).min(100.0)
    }

    /// Run the allocator over the current collection and pool. The registry
    /// itself is not modified; the report supersedes any earlier one.
    pub fn allocate(&self) -> AllocationReport {
        allocation::allocate(&self.districts, self.resource_pool)
    }

    pub fn summary(&self) -> RegistrySummary {
        RegistrySummary {
            districts: self.len(),
            resource_pool: self.resource_pool,
            total_demand: self.total_demand(),
            total_risk: self.total_risk(),
            fulfillment_percent: self.fulfillment_percent(),
        }
    }

    pub fn snapshot(&self, report: Option<&AllocationReport>) -> RegistrySnapshot {
        let districts = self
            .districts
            .iter()
            .map(|district| DistrictView::new(district, report))
            .collect();
        RegistrySnapshot {
            summary: self.summary(),
            districts,
            allocation: report.map(|r| AllocationOutcomeView {
                message: r.outcome.message(),
                outcome: r.outcome.clone(),
            }),
        }
    }

    fn allocate_id(&mut self) -> DistrictId {
        let id = DistrictId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySummary {
    pub districts: usize,
    pub resource_pool: u64,
    pub total_demand: u64,
    pub total_risk: u64,
    pub fulfillment_percent: f64,
}

/// One district as renderers see it: raw attributes, derived risk fields,
/// and the result of the latest allocation pass when one exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistrictView {
    pub id: u64,
    pub name: String,
    pub population: u64,
    pub land_type: LandType,
    pub urbanization: Urbanization,
    pub resource_demand: u64,
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub allocated: Option<u64>,
    pub status: Option<AllocationStatus>,
}

impl DistrictView {
    pub fn new(district: &District, report: Option<&AllocationReport>) -> Self {
        Self {
            id: district.id.raw(),
            name: district.name.clone(),
            population: district.population,
            land_type: district.land_type,
            urbanization: district.urbanization,
            resource_demand: district.resource_demand,
            risk_score: district.risk_score,
            risk_level: RiskLevel::for_score(district.risk_score),
            allocated: report.and_then(|r| r.amount_for(district.id)),
            status: report.map(|r| r.status_for(district)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationOutcomeView {
    pub outcome: crate::allocation::AllocationOutcome,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub summary: RegistrySummary,
    pub districts: Vec<DistrictView>,
    pub allocation: Option<AllocationOutcomeView>,
}
