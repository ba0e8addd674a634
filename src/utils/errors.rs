use thiserror::Error;

/// Errors raised while configuring the design optimizer.
///
/// These are precondition failures: the optimizer call is aborted and the
/// error is returned to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimizerError {
    #[error("No design variables specified")]
    NoDesignVariables,

    #[error("Unknown design variable: {0}")]
    UnknownVariable(String),

    #[error("Design variable '{0}' specified more than once")]
    DuplicateVariable(String),

    #[error("Invalid bounds for '{name}': ({min}, {max})")]
    InvalidBounds { name: String, min: f64, max: f64 },

    #[error("Unknown optimization method: {0}")]
    UnknownMethod(String),
}

/// Errors produced while building or scoring a candidate design.
///
/// The combined objective never propagates these; each one is replaced by
/// the fixed invalid-design penalty.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("Invalid mass properties: {0}")]
    InvalidMass(String),

    #[error("Non-finite {quantity}: {value}")]
    NonFinite { quantity: String, value: f64 },

    #[error("Expected {expected} design variable values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl EvaluationError {
    pub fn non_finite(quantity: &str, value: f64) -> Self {
        EvaluationError::NonFinite {
            quantity: quantity.to_string(),
            value,
        }
    }
}

/// Returns `value` unchanged when finite, otherwise a `NonFinite` error.
pub fn ensure_finite(quantity: &str, value: f64) -> Result<f64, EvaluationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvaluationError::non_finite(quantity, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("range", 12.5), Ok(12.5));
        assert!(matches!(
            ensure_finite("range", f64::NAN),
            Err(EvaluationError::NonFinite { .. })
        ));
        assert!(ensure_finite("range", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = OptimizerError::InvalidBounds {
            name: "wing_span".to_string(),
            min: 40.0,
            max: 30.0,
        };
        assert_eq!(err.to_string(), "Invalid bounds for 'wing_span': (40, 30)");
        assert_eq!(
            OptimizerError::NoDesignVariables.to_string(),
            "No design variables specified"
        );
    }
}
