//! Pediatric triage command-line entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use triage_cli::{commands, CliConfig, TriageRequest};
use triage_sdk::TriageServiceBuilder;

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Irish Children's Triage System rule compiler and classifier")]
struct Cli {
    /// Config file to load instead of config/triage (extension optional)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile rules from the token source
    Generate {
        /// Regenerate even when the rules appear up-to-date
        #[arg(long)]
        force: bool,
    },
    /// Show artifact freshness and rule counts
    Status,
    /// List available symptoms
    Symptoms,
    /// Classify a patient
    Triage {
        /// Patient age in years
        #[arg(long)]
        age: String,
        /// Symptoms (comma separated, e.g. "Stridor, Shock")
        #[arg(long, default_value = "")]
        symptoms: String,
        /// Patient identifier
        #[arg(long, default_value = "cli")]
        id: String,
        /// Show which symptoms matched
        #[arg(long)]
        explain: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(name) => {
            dotenvy::dotenv().ok();
            CliConfig::load_from(name)?
        }
        None => CliConfig::load()?,
    };
    info!(
        source = %config.source_path.display(),
        artifact = %config.artifact_path.display(),
        "Loaded configuration"
    );

    let service = Arc::new(
        TriageServiceBuilder::new()
            .with_config(config.engine_config())
            .build()?,
    );

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Generate { force } => commands::generate(service, force, &mut stdout).await,
        Commands::Status => commands::status(&service, &mut stdout),
        Commands::Symptoms => commands::symptoms(&service, &mut stdout),
        Commands::Triage {
            age,
            symptoms,
            id,
            explain,
        } => {
            let request = TriageRequest {
                id,
                age,
                symptoms,
                explain,
            };
            commands::triage(&service, &request, &mut stdout)
        }
    }
}

/// Initialize tracing subscriber
fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "triage_cli=info,triage_sdk=info,triage_compiler=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
