//! Validation boundary between raw form/API input and the core.
//!
//! Every constraint is checked here before a draft reaches the registry, so
//! the scoring and allocation code can assume well-formed districts.

use serde::Deserialize;
use thiserror::Error;

use crate::district::{DraftDistrict, LandType, Urbanization};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("district name must not be empty")]
    EmptyName,
    #[error("population must be a positive number")]
    InvalidPopulation,
    #[error("resource demand must be a positive number")]
    InvalidDemand,
    #[error("unknown land type '{0}'")]
    UnknownLandType(String),
    #[error("unknown urbanization level '{0}'")]
    UnknownUrbanization(String),
    #[error("total resources must be a non-negative number")]
    InvalidResources,
}

/// Build a draft from already-typed attributes, enforcing the non-empty and
/// positive-value constraints. Shared by the form input below and the
/// scenario loader.
pub fn draft(
    name: &str,
    population: i64,
    land_type: LandType,
    urbanization: Urbanization,
    resource_demand: i64,
) -> Result<DraftDistrict, IntakeError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(IntakeError::EmptyName);
    }
    if population <= 0 {
        return Err(IntakeError::InvalidPopulation);
    }
    if resource_demand <= 0 {
        return Err(IntakeError::InvalidDemand);
    }
    Ok(DraftDistrict {
        name: name.to_string(),
        population: population as u64,
        land_type,
        urbanization,
        resource_demand: resource_demand as u64,
    })
}

/// Raw district submission as it arrives from the web form.
#[derive(Debug, Clone, Deserialize)]
pub struct DistrictInput {
    pub name: String,
    pub population: i64,
    pub land_type: String,
    pub urbanization: String,
    pub resource_demand: i64,
}

impl DistrictInput {
    pub fn validate(&self) -> Result<DraftDistrict, IntakeError> {
        let land_type = LandType::from_label(&self.land_type)
            .ok_or_else(|| IntakeError::UnknownLandType(self.land_type.clone()))?;
        let urbanization = Urbanization::from_label(&self.urbanization)
            .ok_or_else(|| IntakeError::UnknownUrbanization(self.urbanization.clone()))?;
        draft(
            &self.name,
            self.population,
            land_type,
            urbanization,
            self.resource_demand,
        )
    }
}

/// Raw resource-pool update.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ResourceInput {
    pub total: i64,
}

impl ResourceInput {
    pub fn validate(self) -> Result<u64, IntakeError> {
        if self.total < 0 {
            return Err(IntakeError::InvalidResources);
        }
        Ok(self.total as u64)
    }
}
