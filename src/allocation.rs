//! Greedy, priority-ordered resource allocation.
//!
//! Districts are served in descending risk-to-demand order until the pool
//! runs out. The walk stops at the first district that cannot be fully
//! served; that district receives whatever remains (possibly 0) and every
//! district after it receives no entry at all.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::district::{District, DistrictId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AllocationOutcome {
    NoDistricts,
    NoResources,
    FullyAllocated,
    PartiallyAllocated { leftover: u64 },
}

impl AllocationOutcome {
    /// User-facing notification text for this outcome.
    pub fn message(&self) -> String {
        match self {
            AllocationOutcome::NoDistricts => "No districts to allocate resources to".to_string(),
            AllocationOutcome::NoResources => "No resources available for allocation".to_string(),
            AllocationOutcome::FullyAllocated => "All resources have been allocated".to_string(),
            AllocationOutcome::PartiallyAllocated { leftover } => {
                format!("Resources allocated with {leftover} remaining")
            }
        }
    }
}

/// How a single district fared in an allocation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationStatus {
    Full,
    Partial,
    Unmet,
}

impl AllocationStatus {
    pub fn label(self) -> &'static str {
        match self {
            AllocationStatus::Full => "Full",
            AllocationStatus::Partial => "Partial",
            AllocationStatus::Unmet => "Unmet",
        }
    }
}

impl fmt::Display for AllocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationReport {
    pub allocations: BTreeMap<DistrictId, u64>,
    pub outcome: AllocationOutcome,
}

impl AllocationReport {
    fn empty(outcome: AllocationOutcome) -> Self {
        Self {
            allocations: BTreeMap::new(),
            outcome,
        }
    }

    pub fn amount_for(&self, id: DistrictId) -> Option<u64> {
        self.allocations.get(&id).copied()
    }

    /// A district absent from the mapping had its demand left unmet; that is
    /// an ordinary result of the pool running out, not an error.
    pub fn status_for(&self, district: &District) -> AllocationStatus {
        match self.amount_for(district.id) {
            Some(amount) if amount >= district.resource_demand => AllocationStatus::Full,
            Some(_) => AllocationStatus::Partial,
            None => AllocationStatus::Unmet,
        }
    }
}

/// Allocate `total_resources` across `districts` by descending risk-to-demand
/// priority. Pure and deterministic: the same inputs always produce the same
/// mapping.
pub fn allocate(districts: &[District], total_resources: u64) -> AllocationReport {
    if districts.is_empty() {
        return AllocationReport::empty(AllocationOutcome::NoDistricts);
    }
    if total_resources == 0 {
        return AllocationReport::empty(AllocationOutcome::NoResources);
    }

    // Stable sort: equal priorities keep their insertion order. Demand is
    // positive by construction, so every ratio is finite and the Equal
    // fallback never fires for in-domain input.
    let mut ordered: Vec<&District> = districts.iter().collect();
    ordered.sort_by(|a, b| {
        b.priority()
            .partial_cmp(&a.priority())
            .unwrap_or(Ordering::Equal)
    });

    let mut remaining = total_resources;
    let mut allocations = BTreeMap::new();
    for district in ordered {
        if remaining >= district.resource_demand {
            allocations.insert(district.id, district.resource_demand);
            remaining -= district.resource_demand;
        } else {
            allocations.insert(district.id, remaining);
            remaining = 0;
            break;
        }
    }

    let outcome = if remaining == 0 {
        AllocationOutcome::FullyAllocated
    } else {
        AllocationOutcome::PartiallyAllocated {
            leftover: remaining,
        }
    };

    AllocationReport {
        allocations,
        outcome,
    }
}
