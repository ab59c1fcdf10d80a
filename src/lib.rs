//! encscore - Web3 encryption reliability scoring
//!
//! Rates zk, FHE, and verified-execution architecture presets under a
//! synthetic workload. Scores are heuristics for exploration only; no
//! cryptography is performed or measured.
//!
//! ```
//! use encscore::{catalog, scoring, models::ScoringParameters};
//!
//! let model = catalog::lookup("aztec-zk")?;
//! let result = scoring::score(model, &ScoringParameters::default())?;
//! assert!((0.0..=1.0).contains(&result.final_score));
//! # Ok::<(), encscore::error::ScoreError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod reporters;
pub mod scoring;

pub use error::ScoreError;
