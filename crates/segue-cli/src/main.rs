use anyhow::Result;
use clap::Parser;
use segue_load::Config;
use std::path::PathBuf;

mod commands;
mod logging;

#[derive(Debug, Parser)]
#[command(name = "segue", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the track table CSV (default: ~/.local/share/segue/catalog.csv)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Path to the embedding matrix .npy (default: ~/.local/share/segue/embeddings.npy)
    #[arg(long, global = true)]
    embeddings: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Resolve a song title to a catalog track
    ///
    /// Matches the title case-insensitively as a substring of every track
    /// title, optionally narrowed by artist. When several tracks match, a
    /// track whose title equals the query exactly is preferred.
    Resolve {
        /// Song title (or part of it)
        title: String,

        /// Artist name (or part of it)
        #[arg(long, short)]
        artist: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Recommend songs similar to a title
    ///
    /// Resolves the title to a track, then ranks the rest of the catalog by
    /// cosine similarity of their embeddings. If the title is ambiguous, all
    /// matching tracks are listed so a more specific query can be made.
    Recommend {
        /// Song title (or part of it)
        title: String,

        /// Artist name (or part of it)
        #[arg(long, short)]
        artist: Option<String>,

        /// Number of recommendations (default: recommend_limit from config)
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the tracks most similar to a track id
    Similar {
        /// Catalog track id
        track_id: String,

        /// Number of results (default: similar_limit from config)
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Recommend popular tracks that sound unlike a track id
    ///
    /// Takes the least similar half of the catalog and ranks it by
    /// popularity, as a counterweight to similarity recommendations.
    Diverse {
        /// Catalog track id
        track_id: String,

        /// Number of results (default: diverse_limit from config)
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Search the catalog by title or artist
    Search {
        /// Text to look for in titles and artists
        query: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show catalog status
    Status,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Show the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
    /// Set a value in the config file
    Set {
        /// Key, e.g. catalog_path or logging.level
        key: String,
        /// New value
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?.with_paths(cli.catalog, cli.embeddings);
    logging::init(&config.logging, cli.verbose)?;

    match cli.command {
        Commands::Resolve {
            title,
            artist,
            json,
        } => {
            commands::run_resolve(&config, &title, artist.as_deref(), json)?;
        }
        Commands::Recommend {
            title,
            artist,
            limit,
            json,
        } => {
            let limit = limit.unwrap_or(config.recommend_limit);
            commands::run_recommend(&config, &title, artist.as_deref(), limit, json)?;
        }
        Commands::Similar {
            track_id,
            limit,
            json,
        } => {
            let limit = limit.unwrap_or(config.similar_limit);
            commands::run_similar(&config, &track_id, limit, json)?;
        }
        Commands::Diverse {
            track_id,
            limit,
            json,
        } => {
            let limit = limit.unwrap_or(config.diverse_limit);
            commands::run_diverse(&config, &track_id, limit, json)?;
        }
        Commands::Search { query, json } => {
            commands::run_search(&config, &query, json)?;
        }
        Commands::Status => {
            commands::show_status(&config)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config()?,
            ConfigAction::Set { key, value } => commands::config::set_config(&key, &value)?,
        },
    }

    Ok(())
}
