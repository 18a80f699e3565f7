//! Constraint model shared by every leaf field
//!
//! Numeric ranges, length ranges and enumerated value sets, carried from the
//! source document into the field registry unchanged.

use serde::{Deserialize, Serialize};

/// Inclusive length bounds for strings, lists and maps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LengthRangeConstraint {
    /// Minimum length, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<u64>,

    /// Maximum length, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<u64>,
}

impl LengthRangeConstraint {
    pub fn new(minimum: Option<u64>, maximum: Option<u64>) -> Self {
        Self { minimum, maximum }
    }

    /// Length constraint for strings: a minimum of zero means "no validation"
    /// and is dropped.
    pub fn for_string(minimum: Option<u64>, maximum: Option<u64>) -> Self {
        Self {
            minimum: minimum.filter(|min| *min != 0),
            maximum,
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.minimum.is_none() && self.maximum.is_none()
    }
}

/// Numeric bounds with optional exclusivity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NumericRangeConstraint<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<T>,

    #[serde(default)]
    pub exclusive_minimum: bool,

    #[serde(default)]
    pub exclusive_maximum: bool,
}

impl<T> NumericRangeConstraint<T> {
    pub fn is_unconstrained(&self) -> bool {
        self.minimum.is_none() && self.maximum.is_none()
    }
}

/// Constraints attached to a string field
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StringConstraints {
    /// Regular expression the value must match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex_constraint: Option<String>,

    #[serde(default)]
    pub length_constraint: LengthRangeConstraint,

    /// Allowed values as `(name, literal value)` pairs, in declaration order.
    /// Non-empty means the field is an enumeration.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub value_constraints: Vec<(String, String)>,
}

impl StringConstraints {
    pub fn is_enumeration(&self) -> bool {
        !self.value_constraints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_length_drops_zero_minimum() {
        let constraint = LengthRangeConstraint::for_string(Some(0), Some(10));
        assert_eq!(constraint.minimum, None);
        assert_eq!(constraint.maximum, Some(10));

        let constraint = LengthRangeConstraint::for_string(Some(3), None);
        assert_eq!(constraint.minimum, Some(3));
    }

    #[test]
    fn test_enumeration_detection() {
        let mut constraints = StringConstraints::default();
        assert!(!constraints.is_enumeration());

        constraints
            .value_constraints
            .push(("Active".to_string(), "active".to_string()));
        assert!(constraints.is_enumeration());
    }

    #[test]
    fn test_unconstrained_ranges() {
        assert!(LengthRangeConstraint::default().is_unconstrained());
        assert!(NumericRangeConstraint::<i64>::default().is_unconstrained());

        let range = NumericRangeConstraint {
            minimum: Some(1.5),
            maximum: None,
            exclusive_minimum: true,
            exclusive_maximum: false,
        };
        assert!(!range.is_unconstrained());
    }
}
