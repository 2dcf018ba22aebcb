//! Response value object (0.0-1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A user's answer to a dilemma, between 0.0 and 1.0 inclusive.
///
/// Deserialization goes through [`ResponseValue::try_new`], so a persisted
/// or submitted value outside the range never reaches the domain.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ResponseValue(f64);

impl ResponseValue {
    /// Lower bound of the scale.
    pub const MIN: Self = Self(0.0);

    /// Upper bound of the scale.
    pub const MAX: Self = Self(1.0);

    /// Neutral starting position for an answer control.
    pub const MIDPOINT: Self = Self(0.5);

    /// Creates a ResponseValue, returning error if out of range or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::invalid_format(
                "response",
                format!("must be a number between 0 and 1, got {}", value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for ResponseValue {
    fn default() -> Self {
        Self::MIDPOINT
    }
}

impl TryFrom<f64> for ResponseValue {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<ResponseValue> for f64 {
    fn from(value: ResponseValue) -> Self {
        value.0
    }
}

impl fmt::Display for ResponseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(ResponseValue::try_new(0.0).unwrap(), ResponseValue::MIN);
        assert_eq!(ResponseValue::try_new(1.0).unwrap(), ResponseValue::MAX);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(ResponseValue::try_new(-0.01).is_err());
        assert!(ResponseValue::try_new(1.01).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(ResponseValue::try_new(f64::NAN).is_err());
        assert!(ResponseValue::try_new(f64::INFINITY).is_err());
    }

    #[test]
    fn default_is_midpoint() {
        assert_eq!(ResponseValue::default().value(), 0.5);
    }

    #[test]
    fn deserialization_enforces_range() {
        assert!(serde_json::from_str::<ResponseValue>("0.25").is_ok());
        assert!(serde_json::from_str::<ResponseValue>("1.5").is_err());
    }

    proptest! {
        #[test]
        fn in_range_values_are_kept_exactly(r in 0.0f64..=1.0) {
            let value = ResponseValue::try_new(r).unwrap();
            prop_assert_eq!(value.value(), r);
        }

        #[test]
        fn out_of_range_values_are_rejected(r in prop_oneof![-1.0e6f64..-1.0e-9, 1.0 + 1.0e-9..1.0e6]) {
            prop_assert!(ResponseValue::try_new(r).is_err());
        }
    }
}
