//! Compare command - rank every model under one workload

use super::{emit, OutputArgs, ParamArgs};
use crate::config::CliDefaults;
use crate::reporters::{self, ReportOptions};
use crate::scoring;
use anyhow::Result;
use tracing::info;

/// Run the compare command
pub fn run(
    params: &ParamArgs,
    output: &OutputArgs,
    defaults: &CliDefaults,
    options: ReportOptions,
) -> Result<()> {
    let params = params.resolve(defaults);
    let format = output.resolve_format(defaults)?;

    let results = scoring::compare(&params)?;
    if let Some(best) = results.first() {
        info!("Best model: {} ({:.4})", best.model.id, best.final_score);
    }

    let output_file = output.output_file.as_deref();
    let options = ReportOptions {
        color: output_file.is_none(),
        ..options
    };
    let rendered = reporters::report_comparison(&results, format, options)?;
    emit(&rendered, output_file)
}
