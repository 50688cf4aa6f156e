mod countries;
mod item;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "harvest")]
#[command(about = "Scrape eBay item pages and query the REST Countries API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape a single eBay item page and save it as JSON
    Item {
        /// Item page URL
        url: String,
        /// Write the record here instead of `<title>.json` in the output dir
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Print the record without writing a file
        #[arg(long, conflicts_with = "output")]
        no_save: bool,
    },
    /// Look up countries by one attribute
    Countries {
        #[command(subcommand)]
        query: CountriesQuery,
        /// Print rows as JSON instead of a table
        #[arg(long, global = true, conflicts_with = "raw")]
        json: bool,
        /// Print every attribute of the response, flattened to dotted keys
        #[arg(long, global = true)]
        raw: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum CountriesQuery {
    /// Every country
    All,
    /// Common or official name
    Name { name: String },
    /// Alpha-2, alpha-3 or numeric code
    Code { code: String },
    /// Several codes at once
    Codes {
        #[arg(required = true, num_args = 1.., value_delimiter = ',')]
        codes: Vec<String>,
    },
    /// Currency code or name
    Currency { currency: String },
    /// Demonym, e.g. `peruvian`
    Demonym { demonym: String },
    /// Language code or name
    Lang { language: String },
    /// Capital city
    Capital { capital: String },
    /// Region, e.g. `europe`
    Region { region: String },
    /// Subregion, e.g. `northern europe`
    Subregion { subregion: String },
    /// Name in any translated language
    Translation { translation: String },
    /// Independent (or non-independent) countries
    Independent {
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        status: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = harvest_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Item {
            url,
            output,
            no_save,
        } => item::run_item(&config, &url, output.as_deref(), no_save).await?,
        Commands::Countries { query, json, raw } => {
            let format = countries::OutputFormat::from_flags(json, raw);
            countries::run_countries(&config, &query, format).await?;
        }
    }

    Ok(())
}
