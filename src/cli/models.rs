//! Models command - list the catalog

use crate::catalog;
use anyhow::Result;
use console::style;

/// Run the models command
pub fn run(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog::all())?);
        return Ok(());
    }

    println!("{}", style("Available models").bold());
    println!(
        "{}",
        style(format!(
            "  {:<14}{:<20}{:>6}{:>7}{:>6}{:>12}",
            "ID", "LAYER", "CONF", "INTEG", "COST", "COMFORT TPS"
        ))
        .dim()
    );
    for m in catalog::all() {
        println!(
            "  {:<14}{:<20}{:>6.2}{:>7.2}{:>6.2}{:>12.0}",
            style(m.id).cyan(),
            m.layer_name,
            m.base_confidentiality,
            m.base_integrity,
            m.base_compute_cost,
            m.comfort_tps
        );
        println!("    {}", style(m.description).dim());
    }
    Ok(())
}
