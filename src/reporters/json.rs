//! JSON reporter
//!
//! Flat, camelCase document for piping to jq or other tools.

use crate::models::{ScoreBreakdown, ScoreResult};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    model: &'a str,
    name: &'a str,
    layer: &'a str,
    description: &'a str,
    load: f64,
    pressure: f64,
    enhanced_zk: bool,
    enhanced_fhe: bool,
    enhanced_formal: bool,
    final_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<&'a ScoreBreakdown>,
}

impl<'a> JsonReport<'a> {
    fn new(result: &'a ScoreResult, with_breakdown: bool) -> Self {
        let p = &result.parameters;
        Self {
            model: result.model.id,
            name: result.model.display_name,
            layer: result.model.layer_name,
            description: result.model.description,
            load: p.load,
            pressure: p.network_pressure,
            enhanced_zk: p.enhancements.zk,
            enhanced_fhe: p.enhancements.fhe,
            enhanced_formal: p.enhancements.formal,
            final_score: result.final_score,
            breakdown: with_breakdown.then_some(&result.breakdown),
        }
    }
}

/// Render result as pretty-printed JSON, breakdown included
pub fn render(result: &ScoreResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::new(result, true))?)
}

/// Render a ranked comparison as a JSON array, best first
pub fn render_comparison(results: &[ScoreResult]) -> Result<String> {
    let reports: Vec<JsonReport<'_>> = results.iter().map(|r| JsonReport::new(r, false)).collect();
    Ok(serde_json::to_string_pretty(&reports)?)
}
