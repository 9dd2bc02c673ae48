use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pitchcraft configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PitchcraftConfig {
    /// Candidate store location (SQLite URL)
    pub database_url: String,

    /// Lexicon file backing the tokenizer and lexical analyzer
    pub lexicon_path: String,

    /// Precomputed accent-model predictions
    pub predictions_path: String,

    /// Log level
    pub log_level: String,

    /// Candidate build settings
    pub build: BuildConfig,
}

impl Default for PitchcraftConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://data/candidates.db".to_string(),
            lexicon_path: "data/lexicon.tsv".to_string(),
            predictions_path: "data/predictions.json".to_string(),
            log_level: "warn".to_string(),
            build: BuildConfig::default(),
        }
    }
}

impl PitchcraftConfig {
    /// Load from configuration file (`.toml`, otherwise JSON)
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            toml::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))
        } else {
            serde_json::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))
        }
    }
}

/// Offline candidate build configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BuildConfig {
    /// Shortest word kept, in morae
    pub min_mora: usize,

    /// Longest word kept, in morae
    pub max_mora: usize,

    /// Extra seed words, one per line
    pub seed_path: Option<String>,

    /// Start from the built-in seed list
    pub include_default_seeds: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            min_mora: 2,
            max_mora: 10,
            seed_path: None,
            include_default_seeds: true,
        }
    }
}

impl BuildConfig {
    /// Whether a word of `mora_count` morae may be stored
    pub fn accepts(&self, mora_count: usize) -> bool {
        (self.min_mora..=self.max_mora).contains(&mora_count)
    }
}
