//! CLI for Pitchcraft

use clap::Parser;
use pitchcraft_cli::{ConfigOverrides, commands, error::CliError, load_config};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pitchcraft")]
#[command(about = "Japanese pitch-accent resolution and practice words", long_about = None)]
struct Cli {
    /// Config file (.toml or .json)
    #[arg(short, long, global = true, env = "PITCHCRAFT_CONFIG")]
    config_file: Option<PathBuf>,

    /// Candidate database URL
    #[arg(long, global = true, env = "PITCHCRAFT_DATABASE_URL")]
    database_url: Option<String>,

    /// Lexicon file
    #[arg(long, global = true, env = "PITCHCRAFT_LEXICON")]
    lexicon: Option<String>,

    /// Accent prediction file
    #[arg(long, global = true, env = "PITCHCRAFT_PREDICTIONS")]
    predictions: Option<String>,

    /// Log level (error, warn, info, debug, trace) [default: warn]
    #[arg(short, long, global = true, env = "PITCHCRAFT_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Resolve the pitch accent of words
    Resolve {
        /// Words to resolve
        #[arg(required = true)]
        texts: Vec<String>,

        /// Print JSON lines instead of tab-separated text
        #[arg(long)]
        json: bool,
    },
    /// Build the practice candidate database
    BuildDb {
        /// Extra seed words, one per line
        #[arg(long, short = 's')]
        seeds: Option<PathBuf>,

        /// Skip the built-in seed list
        #[arg(long)]
        no_default_seeds: bool,

        /// Shortest word kept, in morae
        #[arg(long)]
        min_mora: Option<usize>,

        /// Longest word kept, in morae
        #[arg(long)]
        max_mora: Option<usize>,
    },
    /// Print a random practice word
    Sample {
        /// Shortest word, in morae
        #[arg(long, default_value_t = 2)]
        min_mora: usize,

        /// Longest word, in morae
        #[arg(long, default_value_t = 10)]
        max_mora: usize,
    },
    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let mut config = load_config(
        cli.config_file.as_deref(),
        ConfigOverrides {
            database_url: cli.database_url,
            lexicon_path: cli.lexicon,
            predictions_path: cli.predictions,
            log_level: cli.log_level,
        },
    )?;

    let filter = format!(
        "pitchcraft={level},pitchcraft_cli={level}",
        level = config.log_level
    );
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("Effective configuration: {:?}", config);

    match cli.command {
        Commands::Resolve { texts, json } => {
            commands::run_resolve(&config, &texts, json).await?;
        }
        Commands::BuildDb {
            seeds,
            no_default_seeds,
            min_mora,
            max_mora,
        } => {
            if let Some(seeds) = seeds {
                config.build.seed_path = Some(seeds.to_string_lossy().into_owned());
            }
            if no_default_seeds {
                config.build.include_default_seeds = false;
            }
            if let Some(min_mora) = min_mora {
                config.build.min_mora = min_mora;
            }
            if let Some(max_mora) = max_mora {
                config.build.max_mora = max_mora;
            }
            commands::run_build_db(&config).await?;
        }
        Commands::Sample { min_mora, max_mora } => {
            commands::run_sample(&config, min_mora, max_mora).await?;
        }
        Commands::Config => {
            commands::run_show_config(&config)?;
        }
    }

    Ok(())
}
