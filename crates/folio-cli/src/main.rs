mod render;

use clap::{Parser, Subcommand};
use folio_feed::{select_video_section, FeedFetcher};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "folio-cli")]
#[command(about = "Inspect the folio site's recent-video feed")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the feed URL resolved from YOUTUBE_RSS_URL / YOUTUBE_CHANNEL_ID
    FeedUrl,
    /// Fetch and print the normalized recent videos
    Videos {
        /// Maximum number of entries (defaults to FOLIO_FEED_MAX_ITEMS)
        #[arg(long)]
        max: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show what the page's video section would display
    Section {
        /// Maximum number of live entries (defaults to FOLIO_FEED_MAX_ITEMS)
        #[arg(long)]
        max: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = folio_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let fetcher = FeedFetcher::new(&config.feed)?;

    match cli.command {
        Some(Commands::FeedUrl) => {
            println!("{}", render::render_feed_url(fetcher.feed_url().as_deref()));
        }
        Some(Commands::Videos { max, json }) => {
            let max_items = max.unwrap_or(config.feed.max_items);
            let entries = fetcher.fetch_recent_entries(max_items).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print!("{}", render::render_videos(&entries));
            }
        }
        Some(Commands::Section { max, json }) => {
            let max_items = max.unwrap_or(config.feed.max_items);
            let live = fetcher.fetch_recent_entries(max_items).await;
            let manual = folio_core::resolve_videos(&config)?;
            let section = select_video_section(live, manual);
            tracing::info!(section = render::section_kind(&section), "selected video section");
            if json {
                println!("{}", serde_json::to_string_pretty(&section)?);
            } else {
                print!("{}", render::render_section(&section));
            }
        }
        None => println!("folio-cli ready; see --help for commands"),
    }

    Ok(())
}
