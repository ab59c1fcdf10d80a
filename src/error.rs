//! Error types for catalog lookups and scoring

use thiserror::Error;

/// Errors surfaced by the catalog and the scoring engine.
///
/// Every variant is a caller-input problem. Nothing here is transient,
/// so callers should report the error and stop rather than retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("Unknown model '{id}'. Valid models: {}", valid.join(", "))]
    UnknownModel { id: String, valid: Vec<String> },

    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl ScoreError {
    /// Short machine-friendly name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ScoreError::UnknownModel { .. } => "unknown-model",
            ScoreError::InvalidParameter { .. } => "invalid-parameter",
        }
    }

    /// Process exit code for this error kind
    pub fn exit_code(&self) -> u8 {
        match self {
            ScoreError::UnknownModel { .. } => 3,
            ScoreError::InvalidParameter { .. } => 4,
        }
    }
}

pub type EngineResult<T> = Result<T, ScoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_model_message_lists_valid_set() {
        let err = ScoreError::UnknownModel {
            id: "nope".into(),
            valid: vec!["aztec-zk".into(), "zama-fhe".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'nope'"));
        assert!(msg.contains("aztec-zk, zama-fhe"));
        assert_eq!(err.kind(), "unknown-model");
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_invalid_parameter_message() {
        let err = ScoreError::InvalidParameter {
            name: "load",
            value: -5.0,
            reason: "TPS cannot be negative",
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter load = -5: TPS cannot be negative"
        );
        assert_eq!(err.exit_code(), 4);
    }
}
