//! Core data models for encscore
//!
//! These models describe the catalog entries, the per-run scoring
//! inputs, and the scored result handed to the reporters.

use serde::Serialize;

/// Static description of one encryption architecture preset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelDefinition {
    pub id: &'static str,
    pub display_name: &'static str,
    pub layer_name: &'static str,
    pub description: &'static str,
    /// Intrinsic confidentiality (0-1, higher is better)
    pub base_confidentiality: f64,
    /// Intrinsic integrity (0-1, higher is better)
    pub base_integrity: f64,
    /// Intrinsic compute cost (0-1, higher = more expensive)
    pub base_compute_cost: f64,
    /// Throughput (TPS) the model absorbs before the load penalty kicks in
    pub comfort_tps: f64,
}

/// Optional protective layers stacked on top of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Enhancements {
    /// Extra zk layering
    pub zk: bool,
    /// Extra FHE logic
    pub fhe: bool,
    /// Extra formal soundness proofs
    pub formal: bool,
}

impl Enhancements {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self {
            zk: true,
            fhe: true,
            formal: true,
        }
    }
}

/// Runtime inputs for a single scoring run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringParameters {
    /// Transaction throughput (TPS), must be non-negative
    pub load: f64,
    /// Network volatility factor, nominally 0-1 (not range-checked)
    pub network_pressure: f64,
    pub enhancements: Enhancements,
}

impl ScoringParameters {
    pub const DEFAULT_LOAD: f64 = 3000.0;
    pub const DEFAULT_PRESSURE: f64 = 0.3;

    pub fn new(load: f64, network_pressure: f64) -> Self {
        Self {
            load,
            network_pressure,
            enhancements: Enhancements::none(),
        }
    }

    pub fn with_enhancements(mut self, enhancements: Enhancements) -> Self {
        self.enhancements = enhancements;
        self
    }
}

impl Default for ScoringParameters {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LOAD, Self::DEFAULT_PRESSURE)
    }
}

/// Every intermediate term of a score, for transparency
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub base_reliability: f64,
    /// Magnitude subtracted for load above the comfort threshold
    pub load_penalty: f64,
    /// Magnitude subtracted for network pressure
    pub pressure_penalty: f64,
    /// Sum of enabled enhancement increments
    pub enhancement_bonus: f64,
    /// Score before clamping and rounding
    pub raw_score: f64,
    /// True when the raw score fell outside [0, 1]
    pub clamped: bool,
}

/// Scored output of one run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Final score in [0, 1], rounded to 4 decimal places
    pub final_score: f64,
    pub model: ModelDefinition,
    pub parameters: ScoringParameters,
    pub breakdown: ScoreBreakdown,
}
