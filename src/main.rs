use anyhow::Result;
use clap::{Parser, Subcommand};
use masmcp_eval::commands::{consistency, fixtures, metrics};
use masmcp_eval::logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "masmcp-eval")]
#[command(about = "Evaluation tables, fixture checks and manifest for the MAS/MCP study", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the aggregated KPI and ablation tables
    Metrics {
        /// Fixture root (accepted for symmetry with load-fixtures; not read)
        #[arg(long)]
        fixtures: PathBuf,

        /// Output directory for tables/ and figures/
        #[arg(long)]
        out: PathBuf,
    },

    /// Count NGSI-LD and STA fixtures and check a sample parses as JSON
    LoadFixtures {
        /// Directory holding NGSI-LD entity documents (*.jsonld)
        #[arg(long)]
        ngsi: PathBuf,

        /// Directory holding STA documents (datastream_*.json, observations_*.json)
        #[arg(long)]
        sta: PathBuf,
    },

    /// Write manifest.json recording which tables exist
    ConsistencyCheck {
        /// Output directory previously passed to `metrics`
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Metrics { fixtures, out } => metrics::execute(&fixtures, &out),
        Commands::LoadFixtures { ngsi, sta } => fixtures::execute(&ngsi, &sta),
        Commands::ConsistencyCheck { out } => consistency::execute(&out),
    }
}
