//! Input validation for SponsorIQ.
//!
//! The valuation pipeline assumes range-plausible input and never validates;
//! surfaces that collect input (the CLI scenario loader) validate before
//! invoking it. This module provides the trait and error type they share.

use thiserror::Error;

/// Validation error.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("{field} must be at least {min}, got {got}")]
    BelowMinimum { field: String, min: f64, got: f64 },

    #[error("{field} must be at most {max}, got {got}")]
    AboveMaximum { field: String, max: f64, got: f64 },

    #[error("Multiple validation errors: {0:?}")]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Trait for validatable input records.
pub trait Validate {
    /// Validate this record.
    fn validate(&self) -> ValidationResult<()>;
}

/// Collapse a list of errors into a single result.
///
/// Zero errors is Ok; one error is returned as-is; several are wrapped in
/// `ValidationError::Multiple`.
pub fn collect_errors(mut errors: Vec<ValidationError>) -> ValidationResult<()> {
    if errors.is_empty() {
        Ok(())
    } else if errors.len() == 1 {
        Err(errors.remove(0))
    } else {
        Err(ValidationError::Multiple(errors))
    }
}

/// Check a numeric lower bound.
pub fn check_min(field: &str, got: f64, min: f64, errors: &mut Vec<ValidationError>) {
    if got < min {
        errors.push(ValidationError::BelowMinimum {
            field: field.to_string(),
            min,
            got,
        });
    }
}

/// Check a numeric upper bound.
pub fn check_max(field: &str, got: f64, max: f64, errors: &mut Vec<ValidationError>) {
    if got > max {
        errors.push(ValidationError::AboveMaximum {
            field: field.to_string(),
            max,
            got,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_errors_empty_is_ok() {
        assert!(collect_errors(vec![]).is_ok());
    }

    #[test]
    fn test_collect_errors_single_passes_through() {
        let err = collect_errors(vec![ValidationError::MissingField {
            field: "capacity".into(),
        }])
        .unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { .. }));
    }

    #[test]
    fn test_collect_errors_many_wraps_in_multiple() {
        let errors = vec![
            ValidationError::MissingField {
                field: "capacity".into(),
            },
            ValidationError::BelowMinimum {
                field: "attendance".into(),
                min: 50.0,
                got: 10.0,
            },
        ];
        let err = collect_errors(errors).unwrap_err();
        match err {
            ValidationError::Multiple(inner) => assert_eq!(inner.len(), 2),
            other => panic!("expected Multiple, got {other:?}"),
        }
    }

    #[test]
    fn test_check_min_and_max() {
        let mut errors = Vec::new();
        check_min("duration_hours", 0.5, 1.0, &mut errors);
        check_max("duration_hours", 80.0, 72.0, &mut errors);
        check_min("edition_number", 3.0, 1.0, &mut errors);
        assert_eq!(errors.len(), 2);
    }
}
