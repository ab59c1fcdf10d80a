//! Reliability scoring engine
//!
//! Combines a model's base coefficients with the runtime load, network
//! pressure, and enhancement flags into a single clamped score.

use crate::catalog;
use crate::error::{EngineResult, ScoreError};
use crate::models::{Enhancements, ModelDefinition, ScoreBreakdown, ScoreResult, ScoringParameters};
use tracing::debug;

/// Weights for the base reliability combination
const CONFIDENTIALITY_WEIGHT: f64 = 0.45;
const INTEGRITY_WEIGHT: f64 = 0.45;
const COMPUTE_COST_WEIGHT: f64 = 0.25;

/// Upper bound of the load penalty
const MAX_LOAD_PENALTY: f64 = 0.35;
/// TPS above the comfort threshold at which ~63% of the load penalty applies
const LOAD_SCALE_TPS: f64 = 10_000.0;

/// Penalty at network pressure 1.0 (linear in pressure)
const MAX_PRESSURE_PENALTY: f64 = 0.25;

const ZK_BONUS: f64 = 0.04;
const FHE_BONUS: f64 = 0.03;
const FORMAL_BONUS: f64 = 0.05;

/// Decimal places kept in the final score
const SCORE_PRECISION: i32 = 4;

/// Score a model under the given runtime parameters.
///
/// Fails with [`ScoreError::InvalidParameter`] when `load` is negative or
/// either numeric parameter is not finite. Pressure outside [0, 1] is
/// accepted as-is.
pub fn score(model: &ModelDefinition, params: &ScoringParameters) -> EngineResult<ScoreResult> {
    validate(params)?;

    let base_reliability = base_reliability(model);
    let load_penalty = load_penalty(params.load, model.comfort_tps);
    let pressure_penalty = pressure_penalty(params.network_pressure);
    let enhancement_bonus = enhancement_bonus(&params.enhancements);

    let raw_score = base_reliability - load_penalty - pressure_penalty + enhancement_bonus;
    let clamped = !(0.0..=1.0).contains(&raw_score);
    let final_score = round_to_precision(raw_score.clamp(0.0, 1.0));

    debug!(
        "Score for {}: base={:.4}, load_penalty={:.4}, pressure_penalty={:.4}, bonus={:.4}, raw={:.6}, final={:.4}",
        model.id, base_reliability, load_penalty, pressure_penalty, enhancement_bonus, raw_score, final_score
    );

    Ok(ScoreResult {
        final_score,
        model: *model,
        parameters: *params,
        breakdown: ScoreBreakdown {
            base_reliability,
            load_penalty,
            pressure_penalty,
            enhancement_bonus,
            raw_score,
            clamped,
        },
    })
}

/// Score every catalog model with the same parameters, best first.
///
/// Ties keep catalog order.
pub fn compare(params: &ScoringParameters) -> EngineResult<Vec<ScoreResult>> {
    let mut results = catalog::all()
        .iter()
        .map(|model| score(model, params))
        .collect::<EngineResult<Vec<_>>>()?;
    results.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
    Ok(results)
}

fn validate(params: &ScoringParameters) -> EngineResult<()> {
    if !params.load.is_finite() {
        return Err(ScoreError::InvalidParameter {
            name: "load",
            value: params.load,
            reason: "TPS must be a finite number",
        });
    }
    if params.load < 0.0 {
        return Err(ScoreError::InvalidParameter {
            name: "load",
            value: params.load,
            reason: "TPS cannot be negative",
        });
    }
    if !params.network_pressure.is_finite() {
        return Err(ScoreError::InvalidParameter {
            name: "pressure",
            value: params.network_pressure,
            reason: "network pressure must be a finite number",
        });
    }
    Ok(())
}

fn base_reliability(model: &ModelDefinition) -> f64 {
    CONFIDENTIALITY_WEIGHT * model.base_confidentiality + INTEGRITY_WEIGHT * model.base_integrity
        - COMPUTE_COST_WEIGHT * model.base_compute_cost
}

/// Saturating exponential penalty for load above the comfort threshold
fn load_penalty(load: f64, comfort_tps: f64) -> f64 {
    let excess = load - comfort_tps;
    if excess <= 0.0 {
        return 0.0;
    }
    MAX_LOAD_PENALTY * (1.0 - (-(excess / LOAD_SCALE_TPS)).exp())
}

fn pressure_penalty(pressure: f64) -> f64 {
    MAX_PRESSURE_PENALTY * pressure
}

fn enhancement_bonus(enhancements: &Enhancements) -> f64 {
    let mut bonus = 0.0;
    if enhancements.zk {
        bonus += ZK_BONUS;
    }
    if enhancements.fhe {
        bonus += FHE_BONUS;
    }
    if enhancements.formal {
        bonus += FORMAL_BONUS;
    }
    bonus
}

fn round_to_precision(value: f64) -> f64 {
    let factor = 10f64.powi(SCORE_PRECISION);
    (value * factor).round() / factor
}
