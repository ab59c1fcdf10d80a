//! Score command - rate one model under a workload

use super::{emit, ScoreArgs};
use crate::catalog;
use crate::config::CliDefaults;
use crate::reporters::{self, ReportOptions};
use crate::scoring;
use anyhow::Result;
use tracing::info;

/// Run the score command
pub fn run(args: &ScoreArgs, defaults: &CliDefaults, options: ReportOptions) -> Result<()> {
    let model_id = args
        .model
        .as_deref()
        .or(defaults.model.as_deref())
        .unwrap_or(catalog::DEFAULT_MODEL);
    let model = catalog::lookup(model_id)?;
    let params = args.params.resolve(defaults);
    let format = args.output.resolve_format(defaults)?;

    let result = scoring::score(model, &params)?;
    info!("{} scored {:.4}", model.id, result.final_score);

    let output_file = args.output.output_file.as_deref();
    let options = ReportOptions {
        explain: args.explain_score,
        color: output_file.is_none(),
        ..options
    };
    let rendered = reporters::report_with_format(&result, format, options)?;
    emit(&rendered, output_file)
}
