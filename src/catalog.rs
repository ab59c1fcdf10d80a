//! Model catalog
//!
//! Closed, read-only registry of the encryption architecture presets.
//! Coefficients are stable constants; changing one changes every
//! published score, so treat edits here as a breaking change.

use crate::error::{EngineResult, ScoreError};
use crate::models::ModelDefinition;
use tracing::debug;

static MODELS: &[ModelDefinition] = &[
    ModelDefinition {
        id: "aztec-zk",
        display_name: "Aztec Layered zk Encryption",
        layer_name: "zk encryption",
        description: "Zero-knowledge encrypted state with selective disclosure.",
        base_confidentiality: 0.92,
        base_integrity: 0.85,
        base_compute_cost: 0.40,
        comfort_tps: 5000.0,
    },
    ModelDefinition {
        id: "zama-fhe",
        display_name: "Zama Fully Homomorphic Encryption",
        layer_name: "fhe compute",
        description: "FHE evaluation enabling encrypted compute across all operations.",
        base_confidentiality: 0.97,
        base_integrity: 0.88,
        base_compute_cost: 0.76,
        comfort_tps: 3500.0,
    },
    ModelDefinition {
        id: "soundness-vm",
        display_name: "Soundness-Driven Verified VM",
        layer_name: "verified execution",
        description: "Formally verified execution environment with high correctness focus.",
        base_confidentiality: 0.55,
        base_integrity: 0.99,
        base_compute_cost: 0.32,
        comfort_tps: 4000.0,
    },
];

/// Model used when the caller does not pick one
pub const DEFAULT_MODEL: &str = "aztec-zk";

/// All catalog entries in catalog order
pub fn all() -> &'static [ModelDefinition] {
    MODELS
}

/// Identifiers of every catalog entry
pub fn ids() -> Vec<&'static str> {
    MODELS.iter().map(|m| m.id).collect()
}

/// Look up a model by identifier (exact match, surrounding whitespace ignored)
pub fn lookup(id: &str) -> EngineResult<&'static ModelDefinition> {
    let key = id.trim();
    match MODELS.iter().find(|m| m.id == key) {
        Some(model) => {
            debug!("Resolved model '{}' ({})", model.id, model.layer_name);
            Ok(model)
        }
        None => Err(ScoreError::UnknownModel {
            id: id.to_string(),
            valid: ids().into_iter().map(String::from).collect(),
        }),
    }
}
