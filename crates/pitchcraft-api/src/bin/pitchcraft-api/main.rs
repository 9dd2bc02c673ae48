use clap::Parser;
use pitchcraft::{SqliteCandidateRepository, resolver_from_config};
use pitchcraft_api::{ApiConfig, ApiOverrides, AppState, build_app};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Pitchcraft API Server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to [default: 127.0.0.1]
    #[arg(short = 'H', long, env = "PITCHCRAFT_HOST")]
    host: Option<String>,

    /// Port to listen on [default: 8000]
    #[arg(short, long, env = "PITCHCRAFT_PORT")]
    port: Option<u16>,

    /// Log level (error, warn, info, debug, trace) [default: info]
    #[arg(short, long, env = "PITCHCRAFT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Config file path
    #[arg(short, long, env = "PITCHCRAFT_CONFIG")]
    config_file: Option<PathBuf>,

    /// Candidate database URL
    #[arg(long, env = "PITCHCRAFT_DATABASE_URL")]
    database_url: Option<String>,

    /// Lexicon file
    #[arg(long, env = "PITCHCRAFT_LEXICON")]
    lexicon: Option<String>,

    /// Accent prediction file
    #[arg(long, env = "PITCHCRAFT_PREDICTIONS")]
    predictions: Option<String>,

    /// Disable Swagger UI
    #[arg(long, env = "PITCHCRAFT_DISABLE_SWAGGER", default_value_t = false)]
    disable_swagger: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration; the log level may come from the file
    let (mut config, load_error) = match &cli.config_file {
        Some(config_path) => match ApiConfig::load_from_file(config_path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (ApiConfig::default(), Some(e)),
        },
        None => (ApiConfig::default(), None),
    };

    // Override with CLI options
    config.apply_overrides(ApiOverrides {
        host: cli.host,
        port: cli.port,
        log_level: cli.log_level,
        disable_swagger: cli.disable_swagger,
        database_url: cli.database_url,
        lexicon_path: cli.lexicon,
        predictions_path: cli.predictions,
    });

    // Initialize logging
    let filter = format!(
        "pitchcraft_api={level},pitchcraft={level},tower_http=debug",
        level = config.log_level
    );
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(config_path) = &cli.config_file {
        match load_error {
            Some(e) => warn!(
                "Failed to load config file: {}. Using default configuration.",
                e
            ),
            None => info!("Configuration loaded from: {}", config_path.display()),
        }
    }

    let addr = config.socket_addr()?;

    // Collaborators must load before serving
    let resolver = resolver_from_config(&config.pitchcraft)
        .map_err(|e| anyhow::anyhow!("Failed to initialize resolver: {}", e))?;
    let repository = SqliteCandidateRepository::connect(&config.pitchcraft.database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open candidate store: {}", e))?;
    info!("Candidate store: {}", config.pitchcraft.database_url);

    let state = AppState::new(resolver, Arc::new(repository));

    // Build application
    let app = build_app(state, &config);

    // Start server
    info!("Starting server on: {}", addr);
    if config.enable_swagger {
        info!("Swagger UI: http://{}/swagger-ui", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
