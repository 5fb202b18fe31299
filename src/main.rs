use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use aidgrid::{
    allocation::AllocationReport,
    registry::Registry,
    report::ReportWriter,
    risk::{self, RiskLevel},
    sample,
    scenario::ScenarioLoader,
    web::{self, WebServerConfig},
};

#[derive(Debug, Parser)]
#[command(author, version, about = "District risk scoring and resource allocation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load a scenario, run one allocation pass, print the result
    Run {
        /// Path to the scenario YAML file
        #[arg(long, default_value = "scenarios/harbor_coast.yaml")]
        scenario: PathBuf,

        /// Override the scenario's resource pool
        #[arg(long)]
        resources: Option<u64>,

        /// Write a JSON report of the pass into this directory
        #[arg(long)]
        report_dir: Option<PathBuf>,
    },

    /// Score a single district from raw attributes
    Score {
        #[arg(long)]
        population: u64,

        #[arg(long)]
        land_type: String,

        #[arg(long)]
        urbanization: String,
    },

    /// Allocate over deterministic sample districts
    Demo {
        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(long, default_value_t = 8)]
        districts: usize,

        #[arg(long, default_value_t = 400)]
        resources: u64,
    },

    /// Serve the interactive web UI
    Serve {
        /// Pre-seed the registry from a scenario file
        #[arg(long)]
        scenario: Option<PathBuf>,

        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            scenario,
            resources,
            report_dir,
        } => {
            let loader = ScenarioLoader::new(".");
            let scenario = loader.load(&scenario)?;
            let mut registry = scenario.build_registry()?;
            if let Some(total) = resources {
                registry.set_resource_pool(total);
            }
            let report = registry.allocate();
            println!("Scenario '{}'", scenario.name);
            print_allocation(&registry, &report);
            if let Some(dir) = report_dir {
                let path = ReportWriter::new(dir).write(&registry, &report)?;
                println!("Report written to {}", path.display());
            }
            Ok(())
        }
        Command::Score {
            population,
            land_type,
            urbanization,
        } => {
            let score = risk::score_labels(population, &land_type, &urbanization);
            println!("Risk score: {} ({})", score, RiskLevel::for_score(score));
            Ok(())
        }
        Command::Demo {
            seed,
            districts,
            resources,
        } => {
            let mut registry = Registry::new();
            registry.set_resource_pool(resources);
            for draft in sample::sample_districts(seed, districts) {
                registry.add_district(draft);
            }
            let report = registry.allocate();
            print_allocation(&registry, &report);
            Ok(())
        }
        Command::Serve {
            scenario,
            host,
            port,
        } => {
            let registry = match scenario {
                Some(path) => ScenarioLoader::new(".").load(&path)?.build_registry()?,
                None => Registry::new(),
            };
            web::run(WebServerConfig {
                host,
                port,
                registry,
            })
            .await
        }
    }
}

fn print_allocation(registry: &Registry, report: &AllocationReport) {
    let summary = registry.summary();
    println!(
        "{} districts, pool {}, total demand {}, total risk {}",
        summary.districts, summary.resource_pool, summary.total_demand, summary.total_risk
    );
    println!(
        "{:<22} {:>10} {:>5} {:<9} {:>7} {:>10} {:<8}",
        "District", "Population", "Risk", "Level", "Demand", "Allocated", "Status"
    );
    for district in registry.districts() {
        let allocated = report
            .amount_for(district.id)
            .map(|amount| amount.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<22} {:>10} {:>5} {:<9} {:>7} {:>10} {:<8}",
            district.name,
            district.population,
            district.risk_score,
            RiskLevel::for_score(district.risk_score),
            district.resource_demand,
            allocated,
            report.status_for(district),
        );
    }
    println!("{}", report.outcome.message());
}
