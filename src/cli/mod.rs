//! CLI command definitions and handlers

mod compare;
mod init;
mod models;
mod score;

use crate::config::{load_config_file, load_project_config, CliDefaults, ProjectConfig};
use crate::models::{Enhancements, ScoringParameters};
use crate::reporters::{OutputFormat, ReportOptions};
use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{Args, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// encscore - Web3 encryption reliability scoring
///
/// Scores are synthetic heuristics for exploring trade-offs, not security guarantees.
#[derive(Parser, Debug)]
#[command(name = "encscore")]
#[command(
    version,
    about = "Synthetic reliability scores for Web3 encryption architectures (zk, FHE, verified execution)",
    after_help = "\
Examples:
  encscore                                             Score aztec-zk with default load and pressure
  encscore --model zama-fhe --load 12000 --pressure 0.4 --enh-fhe
  encscore --model soundness-vm --enh-formal --json    JSON output for scripting
  encscore compare --load 8000                         Rank every model under the same workload
  encscore models                                      List available models
  encscore init                                        Write a starter encscore.toml"
)]
pub struct Cli {
    #[command(flatten)]
    pub score: ScoreArgs,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes priority
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Config file (default: ./encscore.toml, then ~/.config/encscore/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable emoji in output (cleaner for CI logs)
    #[arg(long, global = true)]
    pub no_emoji: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse `std::env::args_os`, exiting with a usage error on failure
    pub fn parse_args() -> Self {
        Self::try_parse_args_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse like `try_parse_from`, but reject top-level scoring flags
    /// combined with a subcommand (`encscore --load 12000 compare`).
    /// Those flags belong to the implicit score command and would
    /// otherwise be dropped.
    pub fn try_parse_args_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut cmd = Self::command();
        let local_args: Vec<(String, String)> = cmd
            .get_arguments()
            .filter(|arg| !arg.is_global_set())
            .filter_map(|arg| Some((arg.get_id().to_string(), format!("--{}", arg.get_long()?))))
            .collect();
        let matches = cmd.try_get_matches_from_mut(args)?;

        if let Some(sub) = matches.subcommand_name() {
            let misplaced: Vec<&str> = local_args
                .iter()
                .filter(|(id, _)| matches.value_source(id) == Some(ValueSource::CommandLine))
                .map(|(_, flag)| flag.as_str())
                .collect();
            if !misplaced.is_empty() {
                return Err(cmd.error(
                    ErrorKind::ArgumentConflict,
                    format!("{} must come after the '{sub}' subcommand", misplaced.join(", ")),
                ));
            }
        }

        Self::from_arg_matches(&matches).map_err(|e| e.format(&mut cmd))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one model (the default when no subcommand is given)
    Score(ScoreArgs),

    /// Score every model under the same workload, best first
    Compare {
        #[command(flatten)]
        params: ParamArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the model catalog
    Models {
        /// Output the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a starter encscore.toml config file
    Init {
        /// Directory to write the config into
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

// Arguments for scoring a single model
#[derive(Args, Debug, Clone, Default)]
pub struct ScoreArgs {
    /// Model to score: aztec-zk, zama-fhe, soundness-vm
    #[arg(long, short = 'm', env = "ENCSCORE_MODEL")]
    pub model: Option<String>,

    #[command(flatten)]
    pub params: ParamArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Show every term of the scoring formula
    #[arg(long)]
    pub explain_score: bool,
}

// Workload and enhancement flags
#[derive(Args, Debug, Clone, Default)]
pub struct ParamArgs {
    /// Transaction load in TPS (default: 3000)
    #[arg(long, env = "ENCSCORE_LOAD", allow_negative_numbers = true)]
    pub load: Option<f64>,

    /// Network volatility factor, nominally 0-1 (default: 0.3)
    #[arg(long, env = "ENCSCORE_PRESSURE", allow_negative_numbers = true)]
    pub pressure: Option<f64>,

    /// Enable additional zk enhancements
    #[arg(long)]
    pub enh_zk: bool,

    /// Enable FHE enhancements
    #[arg(long)]
    pub enh_fhe: bool,

    /// Enable formal verification enhancements
    #[arg(long)]
    pub enh_formal: bool,
}

// Report format and destination
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format: text, json
    #[arg(long, short = 'f', value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Shorthand for --format json
    #[arg(long)]
    pub json: bool,

    /// Write the report to a file instead of stdout
    #[arg(long = "output", short = 'o')]
    pub output_file: Option<PathBuf>,
}

impl ParamArgs {
    /// Build scoring parameters: flag or env var, then config, then built-in default
    pub fn resolve(&self, defaults: &CliDefaults) -> ScoringParameters {
        let load = self
            .load
            .or(defaults.load)
            .unwrap_or(ScoringParameters::DEFAULT_LOAD);
        let pressure = self
            .pressure
            .or(defaults.pressure)
            .unwrap_or(ScoringParameters::DEFAULT_PRESSURE);
        ScoringParameters::new(load, pressure).with_enhancements(Enhancements {
            zk: self.enh_zk,
            fhe: self.enh_fhe,
            formal: self.enh_formal,
        })
    }
}

impl OutputArgs {
    pub fn resolve_format(&self, defaults: &CliDefaults) -> Result<OutputFormat> {
        if self.json {
            return Ok(OutputFormat::Json);
        }
        match self.format.as_deref().or(defaults.format.as_deref()) {
            Some(name) => OutputFormat::from_str(name),
            None => Ok(OutputFormat::default()),
        }
    }
}

/// Load config from --config, or discover it from the working directory
fn load_config(explicit: Option<&Path>) -> Result<ProjectConfig> {
    match explicit {
        Some(path) => load_config_file(path),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Ok(load_project_config(&cwd))
        }
    }
}

/// Write a rendered report to a file or stdout
pub(crate) fn emit(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None if rendered.ends_with('\n') => print!("{rendered}"),
        None => println!("{rendered}"),
    }
    Ok(())
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    debug!("Effective config defaults: {:?}", config.defaults);

    let options = ReportOptions {
        emoji: !(cli.no_emoji || config.defaults.no_emoji.unwrap_or(false)),
        explain: false,
        color: true,
    };

    match cli.command {
        None => score::run(&cli.score, &config.defaults, options),
        Some(Commands::Score(args)) => score::run(&args, &config.defaults, options),
        Some(Commands::Compare { params, output }) => {
            compare::run(&params, &output, &config.defaults, options)
        }
        Some(Commands::Models { json }) => models::run(json),
        Some(Commands::Init { path, force }) => init::run(&path, force),
    }
}
