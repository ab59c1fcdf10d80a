//! Text (terminal) reporter

use crate::models::ScoreResult;
use crate::reporters::ReportOptions;
use anyhow::Result;
use console::{style, StyledObject};
use std::fmt::Write;

const TITLE: &str = "Web3 Encryption Reliability Model";

/// `console::style` that never emits escapes when color is off
fn paint<D>(options: ReportOptions, val: D) -> StyledObject<D> {
    let styled = style(val);
    if options.color {
        styled
    } else {
        styled.force_styling(false)
    }
}

fn header(options: ReportOptions) -> String {
    if options.emoji {
        format!("🔐 {}", paint(options, TITLE).bold())
    } else {
        paint(options, TITLE).bold().to_string()
    }
}

/// Render a score result as a multi-line report
pub fn render(result: &ScoreResult, options: ReportOptions) -> Result<String> {
    let model = &result.model;
    let params = &result.parameters;
    let mut out = String::new();

    writeln!(out, "{}", header(options))?;
    writeln!(out, "Model       : {} ({})", model.display_name, model.id)?;
    writeln!(out, "Layer       : {}", model.layer_name)?;
    writeln!(out, "Description : {}", model.description)?;
    writeln!(out)?;
    writeln!(out, "Parameters:")?;
    writeln!(out, "  Load (TPS)          : {}", params.load)?;
    writeln!(out, "  Network pressure    : {}", params.network_pressure)?;
    writeln!(out, "  Enhanced ZK         : {}", params.enhancements.zk)?;
    writeln!(out, "  Enhanced FHE        : {}", params.enhancements.fhe)?;
    writeln!(out, "  Enhanced Formal     : {}", params.enhancements.formal)?;
    writeln!(out)?;

    if options.explain {
        let b = &result.breakdown;
        writeln!(out, "Breakdown:")?;
        writeln!(out, "  Base reliability    : {:+.4}", b.base_reliability)?;
        writeln!(out, "  Load penalty        : {:+.4}", -b.load_penalty)?;
        writeln!(out, "  Pressure penalty    : {:+.4}", -b.pressure_penalty)?;
        writeln!(out, "  Enhancement bonus   : {:+.4}", b.enhancement_bonus)?;
        writeln!(out, "  Raw score           : {:.6}", b.raw_score)?;
        if b.clamped {
            writeln!(out, "  {}", paint(options, "(clamped to [0, 1])").dim())?;
        }
        writeln!(out)?;
    }

    writeln!(
        out,
        "Final Score: {}",
        score_style(options, result.final_score, &format!("{:.4}", result.final_score))
    )?;
    Ok(out)
}

/// Render a ranked table of results sharing one parameter set
pub fn render_comparison(results: &[ScoreResult], options: ReportOptions) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", header(options))?;

    if let Some(first) = results.first() {
        let p = &first.parameters;
        writeln!(
            out,
            "Load {} TPS, pressure {}, enhancements: zk={} fhe={} formal={}",
            p.load, p.network_pressure, p.enhancements.zk, p.enhancements.fhe, p.enhancements.formal
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        paint(options, format!("  #   {:<14}{:<20}{:>8}", "MODEL", "LAYER", "SCORE")).dim()
    )?;
    for (i, result) in results.iter().enumerate() {
        let score = format!("{:>8.4}", result.final_score);
        writeln!(
            out,
            "  {:<3} {:<14}{:<20}{}",
            i + 1,
            result.model.id,
            result.model.layer_name,
            score_style(options, result.final_score, &score)
        )?;
    }
    Ok(out)
}

fn score_style(options: ReportOptions, score: f64, text: &str) -> String {
    let styled = paint(options, text).bold();
    if score >= 0.6 {
        styled.green().to_string()
    } else if score >= 0.3 {
        styled.yellow().to_string()
    } else {
        styled.red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_result;

    fn plain() -> ReportOptions {
        ReportOptions {
            emoji: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_text_render_fields() {
        let out = console::strip_ansi_codes(&render(&test_result(), plain()).unwrap()).to_string();
        assert!(out.contains("Model       : Zama Fully Homomorphic Encryption (zama-fhe)"));
        assert!(out.contains("Layer       : fhe compute"));
        assert!(out.contains("Load (TPS)          : 12000"));
        assert!(out.contains("Network pressure    : 0.4"));
        assert!(out.contains("Enhanced FHE        : true"));
        assert!(out.contains("Enhanced ZK         : false"));
        assert!(out.contains("Final Score: 0.3721"));
        assert!(!out.contains("Breakdown"));
        assert!(!out.contains('🔐'));
    }

    #[test]
    fn test_text_render_emoji_header() {
        let out = render(&test_result(), ReportOptions::default()).unwrap();
        assert!(out.starts_with("🔐"));
    }

    #[test]
    fn test_text_render_explain() {
        let options = ReportOptions {
            emoji: false,
            explain: true,
            ..Default::default()
        };
        let out = console::strip_ansi_codes(&render(&test_result(), options).unwrap()).to_string();
        assert!(out.contains("Breakdown:"));
        assert!(out.contains("Base reliability    : +0.6425"));
        assert!(out.contains("Pressure penalty    : -0.1000"));
        assert!(out.contains("Enhancement bonus   : +0.0300"));
    }

    #[test]
    fn test_comparison_lists_every_result() {
        let results = vec![test_result(), test_result()];
        let out = console::strip_ansi_codes(&render_comparison(&results, plain()).unwrap()).to_string();
        assert_eq!(out.matches("zama-fhe").count(), 2);
        assert!(out.contains("Load 12000 TPS, pressure 0.4"));
    }

    #[test]
    fn test_color_off_never_emits_escapes() {
        console::set_colors_enabled(true);
        let options = ReportOptions {
            explain: true,
            color: false,
            ..Default::default()
        };
        let single = render(&test_result(), options).unwrap();
        let table = render_comparison(&[test_result()], options).unwrap();
        assert!(!single.contains("\x1b["), "{single:?}");
        assert!(!table.contains("\x1b["), "{table:?}");
        assert!(single.contains("Final Score: 0.3721"));
    }
}
