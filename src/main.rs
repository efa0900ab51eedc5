use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};

mod config;
mod constants;
mod dates;
mod defaults;
mod error;
mod filter;
mod locale;
mod logging;
mod mapper;
mod reconcile;
mod snapshot;
mod source;
mod types;
mod urls;

use crate::config::Config;
use crate::snapshot::ContentPipeline;
use crate::source::{CsvExportSource, SheetSource, ValuesApiSource};

#[derive(Parser)]
#[command(name = "bandsite_content")]
#[command(about = "Sheet-driven content pipeline for the band site")]
#[command(version = "0.1.0")]
struct Cli {
    /// Fetch strategy for the spreadsheet source
    #[arg(long, value_enum, default_value_t = SourceKind::Csv)]
    source: SourceKind,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceKind {
    /// CSV export (no API key needed)
    Csv,
    /// Values API (needs the key named by config)
    Values,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and normalize the shows listing
    Shows {
        /// List every show instead of upcoming-only
        #[arg(long)]
        all: bool,
        /// Include unpublished shows (admin context)
        #[arg(long)]
        include_unpublished: bool,
        /// Reference date for the upcoming filter (YYYY-MM-DD, default today)
        #[arg(long)]
        as_of: Option<String>,
        /// Truncate the upcoming listing to the first N shows
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Fetch and normalize the media gallery
    Media,
    /// Fetch and normalize the testimonials
    Testimonials,
    /// Fetch the key-value content tree
    Content,
    /// Assemble the bilingual hero record
    Hero {
        /// Reconcile a persisted hero blob (JSON file) instead of reading
        /// the sheet; use "-" for stdin
        #[arg(long)]
        from_file: Option<String>,
    },
}

fn create_source(kind: SourceKind, config: &Config) -> Result<Box<dyn SheetSource>, Box<dyn std::error::Error>> {
    let sheet = &config.sheet;
    match kind {
        SourceKind::Csv => Ok(Box::new(CsvExportSource::new(
            &sheet.spreadsheet_id,
            sheet.timeout_seconds,
        ))),
        SourceKind::Values => {
            let api_key = std::env::var(&sheet.api_key_env)?;
            Ok(Box::new(ValuesApiSource::new(
                &sheet.spreadsheet_id,
                api_key,
                sheet.timeout_seconds,
            )))
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => error!("Failed to serialize output: {e}"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load()?;
    let source = create_source(cli.source, &config)?;
    let pipeline = ContentPipeline::new(source, defaults::builtin())
        .with_hero_source(config.content.hero_source);

    match cli.command {
        Commands::Shows {
            all,
            include_unpublished,
            as_of,
            limit,
        } => {
            if all {
                let shows = pipeline.all_shows(!include_unpublished).await?;
                info!("Loaded {} shows", shows.len());
                print_json(&shows);
            } else {
                let as_of = match as_of {
                    Some(text) => chrono::NaiveDate::parse_from_str(&text, "%Y-%m-%d")?,
                    None => chrono::Local::now().date_naive(),
                };
                let snapshot = pipeline.upcoming_shows_snapshot(as_of, limit).await;
                if snapshot.degraded {
                    eprintln!("⚠️  Source unavailable; showing empty listing");
                }
                print_json(&snapshot.data);
            }
        }
        Commands::Media => {
            let items = pipeline.media().await?;
            info!("Loaded {} media items", items.len());
            print_json(&items);
        }
        Commands::Testimonials => {
            let items = pipeline.testimonials().await?;
            info!("Loaded {} testimonials", items.len());
            print_json(&items);
        }
        Commands::Content => {
            let tree = pipeline.content_tree().await?;
            print_json(&tree);
        }
        Commands::Hero { from_file } => {
            if let Some(path) = from_file {
                let body = if path == "-" {
                    std::io::read_to_string(std::io::stdin())?
                } else {
                    std::fs::read_to_string(&path)?
                };
                let raw: serde_json::Value = serde_json::from_str(&body)?;
                let record = pipeline.hero_from_persistence(&raw);
                print_json(&record);
            } else {
                let snapshot = pipeline.hero().await;
                if snapshot.degraded {
                    eprintln!("⚠️  Source unavailable; showing default hero content");
                }
                print_json(&snapshot.data);
            }
        }
    }
    Ok(())
}
