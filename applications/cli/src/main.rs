/// Moodtune - mood-based music recommendations in the terminal
mod commands;

use clap::{Parser, Subcommand};
use moodtune_cli::AppConfig;
use moodtune_core::SortOrder;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "moodtune")]
#[command(about = "Mood-based music recommendations and community playlists", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "MOODTUNE_CONFIG_FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend tracks and videos for a mood
    Recommend {
        /// How you feel right now
        mood: String,
        /// Save the recommendation as a public playlist
        #[arg(long)]
        save: bool,
        /// Preview tracks interactively afterwards
        #[arg(long)]
        preview: bool,
    },
    /// Browse the public playlist feed
    Feed {
        /// Category filter
        #[arg(long, default_value = "전체")]
        category: String,
        /// Sort order (latest or likes)
        #[arg(long, default_value = "latest", value_parser = parse_sort)]
        sort: SortOrder,
        /// Initial search text
        #[arg(long)]
        search: Option<String>,
        /// Load this many pages, print them and exit
        #[arg(long)]
        pages: Option<u32>,
    },
    /// List playlists saved by the signed-in user
    Mine {
        /// Open the playlist with this number and preview its tracks
        #[arg(long)]
        open: Option<usize>,
    },
    /// Preview a single track
    Preview {
        title: String,
        artist: String,
    },
    /// Show the signed-in profile
    Whoami,
    /// List feed categories
    Categories,
}

fn parse_sort(value: &str) -> Result<SortOrder, String> {
    SortOrder::from_str(value).ok_or_else(|| format!("unknown sort order: {}", value))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodtune=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Recommend {
            mood,
            save,
            preview,
        } => {
            commands::recommend::run(&config, &mood, save, preview).await?;
        }
        Commands::Feed {
            category,
            sort,
            search,
            pages,
        } => {
            let options = commands::feed::FeedOptions {
                category,
                sort,
                search,
                pages,
            };
            commands::feed::run(&config, options).await?;
        }
        Commands::Mine { open } => {
            commands::account::mine(&config, open).await?;
        }
        Commands::Preview { title, artist } => {
            commands::preview::run(&config, &title, &artist).await?;
        }
        Commands::Whoami => {
            commands::account::whoami(&config).await?;
        }
        Commands::Categories => {
            for category in moodtune_core::FEED_CATEGORIES {
                println!("{}", category);
            }
        }
    }

    Ok(())
}
