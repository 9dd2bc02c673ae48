use pitchcraft::PitchcraftConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Host address
    pub host: String,

    /// Port number
    pub port: u16,

    /// CORS configuration
    pub cors: CorsConfig,

    /// Log level of the server; `pitchcraft.log_level` is not consulted
    pub log_level: String,

    /// Enable Swagger UI
    pub enable_swagger: bool,

    /// Resolver and candidate store settings
    pub pitchcraft: PitchcraftConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            cors: CorsConfig::default(),
            log_level: "info".to_string(),
            enable_swagger: true,
            pitchcraft: PitchcraftConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Convert to SocketAddr
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("Invalid address {}: {}", addr, e))
    }

    /// Load from configuration file
    pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))
    }
}

/// Command-line values applied on top of the config file; `None` keeps the file value
#[derive(Debug, Clone, Default)]
pub struct ApiOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
    pub disable_swagger: bool,
    pub database_url: Option<String>,
    pub lexicon_path: Option<String>,
    pub predictions_path: Option<String>,
}

impl ApiConfig {
    /// Apply command-line overrides
    pub fn apply_overrides(&mut self, overrides: ApiOverrides) {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(log_level) = overrides.log_level {
            self.log_level = log_level;
        }
        if overrides.disable_swagger {
            self.enable_swagger = false;
        }
        if let Some(database_url) = overrides.database_url {
            self.pitchcraft.database_url = database_url;
        }
        if let Some(lexicon_path) = overrides.lexicon_path {
            self.pitchcraft.lexicon_path = lexicon_path;
        }
        if let Some(predictions_path) = overrides.predictions_path {
            self.pitchcraft.predictions_path = predictions_path;
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins
    pub allowed_origins: Vec<String>,

    /// Allow any origin
    pub allow_any_origin: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![],
            allow_any_origin: true,
        }
    }
}
