//! Reliability Scoring System
//!
//! This module rates a Web3 encryption architecture preset under a
//! given workload. The score is a synthetic heuristic for exploration,
//! not a security guarantee.
//!
//! # Scoring Formula
//!
//! ```text
//! Base     = 0.45 × confidentiality + 0.45 × integrity − 0.25 × compute_cost
//! Load     = 0.35 × (1 − e^(−(load − comfort_tps) / 10000))   when load > comfort_tps, else 0
//! Pressure = 0.25 × network_pressure
//! Bonus    = zk 0.04 + fhe 0.03 + formal 0.05                  (enabled layers only)
//!
//! Final    = round4(clamp(Base − Load − Pressure + Bonus, 0, 1))
//! ```
//!
//! # Example
//!
//! `zama-fhe` at 12000 TPS, pressure 0.4, FHE enhancement:
//!
//! - Base = 0.45 × 0.97 + 0.45 × 0.88 − 0.25 × 0.76 = 0.6425
//! - Load = 0.35 × (1 − e^−0.85) ≈ 0.2004
//! - Pressure = 0.25 × 0.4 = 0.10
//! - Bonus = 0.03
//!
//! Final = 0.3721

mod engine;

pub use engine::{compare, score};
