//! Pitchcraft CLI library

pub mod commands;
pub mod error;

use error::CliError;
use pitchcraft::PitchcraftConfig;
use std::path::Path;

/// Command-line overrides applied on top of the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub database_url: Option<String>,
    pub lexicon_path: Option<String>,
    pub predictions_path: Option<String>,
    pub log_level: Option<String>,
}

/// Effective configuration: file (or defaults), then overrides
pub fn load_config(
    config_file: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<PitchcraftConfig, CliError> {
    let mut config = match config_file {
        Some(path) => PitchcraftConfig::load_from_file(path)
            .map_err(|e| CliError::Config(e.to_string()))?,
        None => PitchcraftConfig::default(),
    };

    if let Some(database_url) = overrides.database_url {
        config.database_url = database_url;
    }
    if let Some(lexicon_path) = overrides.lexicon_path {
        config.lexicon_path = lexicon_path;
    }
    if let Some(predictions_path) = overrides.predictions_path {
        config.predictions_path = predictions_path;
    }
    if let Some(log_level) = overrides.log_level {
        config.log_level = log_level;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_overrides_win_over_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "database_url = \"sqlite://from-file.db\"\nlexicon_path = \"file.tsv\""
        )
        .unwrap();

        let config = load_config(
            Some(file.path()),
            ConfigOverrides {
                database_url: Some("sqlite::memory:".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.lexicon_path, "file.tsv");
        assert_eq!(config.predictions_path, "data/predictions.json");
    }

    #[test]
    fn test_log_level_from_file_unless_overridden() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "log_level = \"debug\"").unwrap();

        let config = load_config(Some(file.path()), ConfigOverrides::default()).unwrap();
        assert_eq!(config.log_level, "debug");

        let config = load_config(
            Some(file.path()),
            ConfigOverrides {
                log_level: Some("error".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(config.log_level, "error");

        let config = load_config(None, ConfigOverrides::default()).unwrap();
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_missing_config_file() {
        let result = load_config(
            Some(Path::new("/nonexistent/pitchcraft.toml")),
            ConfigOverrides::default(),
        );
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
