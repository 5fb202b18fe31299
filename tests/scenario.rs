use std::fs;

use aidgrid::district::{LandType, Urbanization};
use aidgrid::scenario::ScenarioLoader;
use tempfile::tempdir;

const SCENARIO_YAML: &str = r#"
name: test_basin
description: fixture
resources: 150
districts:
  - name: Harbor Point
    population: 125000
    land_type: Urban
    urbanization: Urban
    resource_demand: 120
  - name: Cedar Valley
    population: 8200
    land_type: Forest
    urbanization: Rural
    resource_demand: 30
"#;

#[test]
fn scenario_builds_a_populated_registry() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("basin.yaml"), SCENARIO_YAML).expect("write fixture");

    let loader = ScenarioLoader::new(dir.path());
    let scenario = loader.load("basin.yaml").expect("scenario should load");
    assert_eq!(scenario.name, "test_basin");

    let registry = scenario.build_registry().expect("registry builds");
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.resource_pool(), 150);

    let harbor = &registry.districts()[0];
    assert_eq!(harbor.name, "Harbor Point");
    assert_eq!(harbor.land_type, LandType::Urban);
    assert_eq!(harbor.urbanization, Urbanization::Urban);
    // 4*3 + 4*2 + 3*1
    assert_eq!(harbor.risk_score, 23);
}

#[test]
fn missing_file_is_a_contextual_error() {
    let dir = tempdir().expect("tempdir");
    let loader = ScenarioLoader::new(dir.path());
    let err = loader.load("absent.yaml").unwrap_err();
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn invalid_district_row_fails_the_build() {
    let dir = tempdir().expect("tempdir");
    let bad = SCENARIO_YAML.replace("resource_demand: 30", "resource_demand: 0");
    fs::write(dir.path().join("bad.yaml"), bad).expect("write fixture");

    let loader = ScenarioLoader::new(dir.path());
    let scenario = loader.load("bad.yaml").expect("yaml still parses");
    let err = scenario.build_registry().unwrap_err();
    assert!(err.to_string().contains("Cedar Valley"));
}

#[test]
fn resources_default_to_zero() {
    let dir = tempdir().expect("tempdir");
    let no_pool = SCENARIO_YAML.replace("resources: 150\n", "");
    fs::write(dir.path().join("lean.yaml"), no_pool).expect("write fixture");

    let loader = ScenarioLoader::new(dir.path());
    let scenario = loader.load("lean.yaml").expect("scenario should load");
    let registry = scenario.build_registry().expect("registry builds");
    assert_eq!(registry.resource_pool(), 0);
}
