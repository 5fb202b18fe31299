//! JSON export of an allocation pass.
//!
//! One file per pass, named by local timestamp. This is a one-shot dump of
//! the current result for hand-off, not a history mechanism.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::allocation::AllocationReport;
use crate::registry::{DistrictView, Registry, RegistrySummary};

#[derive(Debug, Serialize)]
pub struct AllocationRecord {
    pub generated_at: DateTime<Utc>,
    pub summary: RegistrySummary,
    pub message: String,
    pub outcome: crate::allocation::AllocationOutcome,
    pub districts: Vec<DistrictView>,
}

impl AllocationRecord {
    pub fn build(registry: &Registry, report: &AllocationReport) -> Self {
        Self {
            generated_at: Utc::now(),
            summary: registry.summary(),
            message: report.outcome.message(),
            outcome: report.outcome.clone(),
            districts: registry
                .districts()
                .iter()
                .map(|d| DistrictView::new(d, Some(report)))
                .collect(),
        }
    }
}

pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    pub fn write(&self, registry: &Registry, report: &AllocationReport) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create report dir {}", self.output_dir.display())
        })?;
        let record = AllocationRecord::build(registry, report);
        let file_name = format!(
            "allocation_{}.json",
            Local::now().format("%Y-%m-%d_%H-%M-%S")
        );
        let path = self.output_dir.join(file_name);
        let json = serde_json::to_string_pretty(&record)?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        Ok(path)
    }
}
