//! Validation utilities for cipher entry points
//!
//! Every public cipher function validates its arguments through these helpers
//! before transforming anything; internal round functions assume validated
//! widths and do not re-check.

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter {
            context: name,
            message: reason.to_string(),
        });
    }
    Ok(())
}

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::InvalidLength {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate a maximum length
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::InvalidLength {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_accepts_exact_and_rejects_off_by_one() {
        assert!(length("key", 16, 16).is_ok());
        assert_eq!(
            length("key", 15, 16),
            Err(Error::InvalidLength {
                context: "key",
                expected: 16,
                actual: 15,
            })
        );
        assert!(length("key", 17, 16).is_err());
    }

    #[test]
    fn parameter_reports_name_and_reason() {
        let err = parameter(false, "rounds", "must be even").unwrap_err();
        match err {
            Error::InvalidParameter { context, message } => {
                assert_eq!(context, "rounds");
                assert_eq!(message, "must be even");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn bounds_helpers() {
        assert!(min_length("ciphertext", 9, 9).is_ok());
        assert!(min_length("ciphertext", 8, 9).is_err());
        assert!(max_length("key", 16, 16).is_ok());
        assert!(max_length("key", 17, 16).is_err());
    }
}
