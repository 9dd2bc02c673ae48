use crate::error::CliError;
use pitchcraft::PitchcraftConfig;

/// Print the effective configuration as TOML
pub fn run_show_config(config: &PitchcraftConfig) -> Result<(), CliError> {
    let rendered = toml::to_string_pretty(config).map_err(|e| CliError::Config(e.to_string()))?;
    print!("{}", rendered);
    Ok(())
}
