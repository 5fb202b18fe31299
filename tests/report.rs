use std::fs;

use aidgrid::district::{DraftDistrict, LandType, Urbanization};
use aidgrid::registry::Registry;
use aidgrid::report::ReportWriter;
use tempfile::tempdir;

#[test]
fn report_round_trips_through_json() {
    let mut registry = Registry::new();
    registry.set_resource_pool(100);
    registry.add_district(DraftDistrict {
        name: "Harbor Point".to_string(),
        population: 125_000,
        land_type: LandType::Urban,
        urbanization: Urbanization::Urban,
        resource_demand: 60,
    });
    registry.add_district(DraftDistrict {
        name: "Cedar Valley".to_string(),
        population: 8_200,
        land_type: LandType::Forest,
        urbanization: Urbanization::Rural,
        resource_demand: 80,
    });
    let report = registry.allocate();

    let dir = tempdir().expect("tempdir");
    let writer = ReportWriter::new(dir.path());
    let path = writer.write(&registry, &report).expect("report writes");
    assert!(path.exists());

    let contents = fs::read_to_string(&path).expect("report readable");
    let value: serde_json::Value = serde_json::from_str(&contents).expect("valid json");
    assert_eq!(value["summary"]["districts"], 2);
    assert_eq!(value["outcome"]["kind"], "fully-allocated");
    assert_eq!(value["districts"][0]["name"], "Harbor Point");
    assert_eq!(value["districts"][0]["status"], "Full");
    assert_eq!(value["districts"][1]["allocated"], 40);
    assert_eq!(value["districts"][1]["status"], "Partial");
}
