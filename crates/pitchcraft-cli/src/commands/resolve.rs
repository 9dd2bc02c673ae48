use crate::error::CliError;
use pitchcraft::{PitchcraftConfig, Resolution, ResolutionSource, resolver_from_config};
use serde_json::json;

/// One-line summary of a resolution
pub fn format_resolution(resolution: &Resolution) -> String {
    let source = match resolution.source {
        ResolutionSource::Dictionary {
            kernel,
            accent_type,
        } => format!("dictionary, kernel {} ({})", kernel, accent_type),
        ResolutionSource::Model => "model".to_string(),
    };

    format!(
        "{}\t{}\t{}\t{}\t[{}]",
        resolution.text, resolution.reading, resolution.notation, resolution.pattern, source
    )
}

/// JSON form matching the analyze endpoint
pub fn resolution_json(resolution: &Resolution) -> serde_json::Value {
    json!({
        "text": resolution.text,
        "reading": resolution.reading,
        "accent_pattern": resolution.pattern.levels(),
        "accent_code": resolution.notation,
        "source": resolution.source.label(),
    })
}

pub async fn run_resolve(
    config: &PitchcraftConfig,
    texts: &[String],
    as_json: bool,
) -> Result<(), CliError> {
    if texts.is_empty() {
        return Err(CliError::InvalidInput("no text given".to_string()));
    }

    let resolver = resolver_from_config(config)?;
    let mut failures = 0;

    for text in texts {
        match resolver.resolve(text) {
            Ok(resolution) if as_json => println!("{}", resolution_json(&resolution)),
            Ok(resolution) => println!("{}", format_resolution(&resolution)),
            Err(e) => {
                eprintln!("❌ {}: {}", text, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(CliError::InvalidInput(format!(
            "{} of {} texts could not be resolved",
            failures,
            texts.len()
        )));
    }
    Ok(())
}
