use pitchcraft_core::mora::to_katakana;
use pitchcraft_core::{AccentError, AccentModel, Morpheme, NeuralCode, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// One precomputed model output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub surface: String,
    pub reading: String,
    /// Raw boundary codes (0 fall, 1 continue, 2 rise)
    pub codes: Vec<i64>,
}

/// Accent model answering from precomputed outputs
#[derive(Debug, Clone, Default)]
pub struct PredictionTable {
    by_surface: HashMap<String, Vec<NeuralCode>>,
    by_reading: HashMap<String, Vec<NeuralCode>>,
}

impl PredictionTable {
    /// Load a JSON prediction file. Any failure leaves the model unavailable.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AccentError::ModelUnavailable(format!("{}: {}", path.display(), e))
        })?;
        let table = Self::from_json(&content)?;
        info!(
            "Loaded {} accent predictions from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let predictions: Vec<Prediction> = serde_json::from_str(content)
            .map_err(|e| AccentError::ModelUnavailable(format!("invalid predictions: {}", e)))?;
        Self::from_predictions(predictions)
    }

    pub fn from_predictions(predictions: impl IntoIterator<Item = Prediction>) -> Result<Self> {
        let mut table = Self::default();
        for prediction in predictions {
            let codes = NeuralCode::from_codes(&prediction.codes).map_err(|e| {
                AccentError::ModelUnavailable(format!("'{}': {}", prediction.surface, e))
            })?;
            table
                .by_reading
                .insert(to_katakana(&prediction.reading), codes.clone());
            table.by_surface.insert(prediction.surface, codes);
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.by_surface.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_surface.is_empty()
    }
}

impl AccentModel for PredictionTable {
    fn infer(&self, parse: &[Morpheme], reading: &str) -> Result<Vec<NeuralCode>> {
        let surface: String = parse.iter().map(|m| m.surface.as_str()).collect();

        self.by_surface
            .get(&surface)
            .or_else(|| self.by_reading.get(&to_katakana(reading)))
            .cloned()
            .ok_or_else(|| {
                AccentError::Model(format!("no prediction for '{}' ({})", surface, reading))
            })
    }
}
