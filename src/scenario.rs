use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::district::{LandType, Urbanization};
use crate::intake;
use crate::registry::Registry;

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub resources: u64,
    pub districts: Vec<ScenarioDistrict>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioDistrict {
    pub name: String,
    pub population: i64,
    pub land_type: LandType,
    pub urbanization: Urbanization,
    pub resource_demand: i64,
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(scenario)
    }
}

impl Scenario {
    /// Build a registry from the scenario rows. Rows go through the same
    /// constraint checks as form input, so a malformed scenario fails here
    /// instead of producing an unscoreable district.
    pub fn build_registry(&self) -> Result<Registry> {
        let mut registry = Registry::new();
        registry.set_resource_pool(self.resources);
        for district in &self.districts {
            let draft = intake::draft(
                &district.name,
                district.population,
                district.land_type,
                district.urbanization,
                district.resource_demand,
            )
            .with_context(|| format!("Invalid district '{}' in scenario", district.name))?;
            registry.add_district(draft);
        }
        Ok(registry)
    }
}
