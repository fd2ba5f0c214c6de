//! Placement validation results.

use thiserror::Error;

/// Why a placement was rejected.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PlacementError {
    /// One of the dimensions is below the configured minimum.
    #[error("Block is too small: {width:.2}m x {height:.2}m (minimum {min:.2}m per side)")]
    TooSmall {
        /// Requested width (meters).
        width: f32,
        /// Requested height (meters).
        height: f32,
        /// Configured minimum dimension (meters).
        min: f32,
    },
    /// The block would overlap another block.
    #[error("Block overlaps with '{other_id}'")]
    Overlap {
        /// Identifier of the first obstacle found in the way.
        other_id: String,
    },
}

/// Outcome of [`validate_placement`](super::CollisionChecker::validate_placement).
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationResult {
    /// Whether the placement is allowed.
    pub valid: bool,
    /// Reason for rejection (if any).
    pub reason: Option<PlacementError>,
}

impl ValidationResult {
    /// Accepted placement.
    pub fn ok() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    /// Rejected placement.
    pub fn rejected(reason: PlacementError) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
        }
    }

    /// Human-readable rejection message, if rejected.
    pub fn message(&self) -> Option<String> {
        self.reason.as_ref().map(|r| r.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_has_no_reason() {
        let r = ValidationResult::ok();
        assert!(r.valid);
        assert!(r.message().is_none());
    }

    #[test]
    fn test_messages() {
        let small = ValidationResult::rejected(PlacementError::TooSmall {
            width: 0.05,
            height: 1.0,
            min: 0.1,
        });
        assert!(!small.valid);
        assert_eq!(
            small.message().unwrap(),
            "Block is too small: 0.05m x 1.00m (minimum 0.10m per side)"
        );

        let overlap = ValidationResult::rejected(PlacementError::Overlap {
            other_id: "shelf-2".to_string(),
        });
        assert_eq!(overlap.message().unwrap(), "Block overlaps with 'shelf-2'");
    }
}
