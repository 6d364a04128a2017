//! Tolerance settings shared by the predicates.

use crate::error::AssessmentError;

/// Tolerance for callers that have no reason to pick their own.
///
/// No predicate applies it implicitly; every call takes its tolerance as an
/// argument.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Rejects tolerances that are negative, NaN or infinite.
pub(crate) fn validate_tolerance(tol: f64) -> Result<(), AssessmentError> {
    if !tol.is_finite() || tol < 0.0 {
        return Err(AssessmentError::InvalidTolerance { tol });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_positive() {
        assert!(validate_tolerance(0.0).is_ok());
        assert!(validate_tolerance(DEFAULT_TOLERANCE).is_ok());
        assert!(validate_tolerance(1.0).is_ok());
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        assert!(validate_tolerance(-1e-15).is_err());
        assert!(validate_tolerance(f64::NAN).is_err());
        assert!(validate_tolerance(f64::INFINITY).is_err());
    }
}
