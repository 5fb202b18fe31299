pub mod allocation;
pub mod district;
pub mod intake;
pub mod registry;
pub mod report;
pub mod risk;
pub mod sample;
pub mod scenario;
pub mod web;

pub use allocation::{allocate, AllocationOutcome, AllocationReport, AllocationStatus};
pub use district::{District, DistrictId, DraftDistrict, LandType, Urbanization};
pub use registry::Registry;
pub use risk::{score_district, RiskLevel};
