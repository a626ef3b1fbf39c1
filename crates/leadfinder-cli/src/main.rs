mod leads;
mod saved;

use clap::{Parser, Subcommand};
use leadfinder_core::{FilterCriteria, LeadStatus};
use leadfinder_gemini::GeminiClient;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "leadfinder")]
#[command(about = "Find local businesses that need a website")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start a new search, replacing the current result list
    Search {
        /// City and country to search in
        #[arg(long, default_value = "San Francisco, USA")]
        location: String,
        /// Narrow to a district or neighborhood
        #[arg(long, default_value = "")]
        district: String,
        /// Business category
        #[arg(long, default_value = "Restaurants")]
        industry: String,
        /// Kind of web presence to look for (e.g. "No Website")
        #[arg(long, default_value = "Outdated Website")]
        website_status: String,
    },
    /// Fetch another page for the current search, skipping leads already found
    More,
    /// Show every lead found by the current search
    Results,
    /// Save a lead from the current results, or unsave it if already saved
    Save {
        /// Lead id as shown by `results`
        id: String,
    },
    /// List saved leads
    Saved,
    /// Set the outreach status of a saved lead
    Status {
        id: String,
        /// One of: not-contacted, contacted, converted
        status: LeadStatus,
    },
    /// Replace the notes on a saved lead
    Notes { id: String, text: String },
    /// Write saved leads to a CSV file
    Export {
        #[arg(long, short, default_value = "leads.csv")]
        output: std::path::PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = leadfinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::debug!(?config, "configuration loaded");

    let data_dir = config.data_dir.as_path();

    match cli.command {
        Commands::Search {
            location,
            district,
            industry,
            website_status,
        } => {
            let criteria = FilterCriteria {
                location,
                district,
                industry,
                website_status,
            };
            let client = build_client(&config)?;
            leads::run_search(&client, data_dir, criteria).await?;
        }
        Commands::More => {
            let client = build_client(&config)?;
            leads::run_more(&client, data_dir).await?;
        }
        Commands::Results => leads::run_results(data_dir)?,
        Commands::Save { id } => {
            saved::run_save(data_dir, &id)?;
        }
        Commands::Saved => saved::run_saved(data_dir)?,
        Commands::Status { id, status } => {
            saved::run_status(data_dir, &id, status)?;
        }
        Commands::Notes { id, text } => {
            saved::run_notes(data_dir, &id, text)?;
        }
        Commands::Export { output } => {
            saved::run_export(data_dir, &output)?;
        }
    }

    Ok(())
}

/// Only `search` and `more` reach the network, so only they need the key.
fn build_client(config: &leadfinder_core::AppConfig) -> anyhow::Result<GeminiClient> {
    let client = GeminiClient::with_base_url(
        config.require_gemini_api_key()?,
        &config.gemini_model,
        config.request_timeout_secs,
        &config.gemini_base_url,
    )?;
    Ok(client)
}
