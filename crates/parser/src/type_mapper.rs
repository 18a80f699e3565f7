//! Type mapping from primitive schemas to service model fields
//!
//! Maps boolean, integer, number and string schemas to a `Field`, carrying
//! their constraints across.

use crate::openapi::{Schema, SchemaKind};
use regex::Regex;
use service_model_generator_common::naming::enumeration_case_name;
use service_model_generator_common::{
    Field, LengthRangeConstraint, ModelOverride, NumericRangeConstraint, StringConstraints,
};
use std::sync::LazyLock;

/// `^(a|b|c)$`: an enumeration written as a pattern
static ALTERNATIVE_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\^\(([^()]*)\)\$$").expect("alternative list regex is valid"));

/// Maps primitive schemas to `Field`
pub struct FieldMapper;

impl FieldMapper {
    /// Map a primitive schema to a field, or `None` for non-primitive schemas
    ///
    /// # Examples
    /// ```
    /// use service_model_generator_parser::openapi::Schema;
    /// use service_model_generator_parser::FieldMapper;
    /// use service_model_generator_common::{Field, ModelOverride};
    ///
    /// let schema: Schema = serde_json::from_str(r#"{"type": "boolean"}"#).unwrap();
    /// let field = FieldMapper::map_primitive(&schema, &ModelOverride::default());
    /// assert_eq!(field, Some(Field::Boolean));
    /// ```
    pub fn map_primitive(schema: &Schema, overrides: &ModelOverride) -> Option<Field> {
        match schema.kind() {
            SchemaKind::Boolean => Some(Field::Boolean),
            SchemaKind::Integer => {
                let range_constraint = Self::integer_range(schema);
                if schema.format.as_deref() == Some("int64") {
                    Some(Field::Long { range_constraint })
                } else {
                    Some(Field::Integer { range_constraint })
                }
            }
            SchemaKind::Number => Some(Field::Double {
                range_constraint: Self::double_range(schema),
            }),
            SchemaKind::String => Some(Self::map_string(schema, overrides)),
            _ => None,
        }
    }

    fn map_string(schema: &Schema, overrides: &ModelOverride) -> Field {
        match schema.format.as_deref() {
            Some("date-time") | Some("date") => return Field::Timestamp,
            Some("byte") | Some("binary") => return Field::Binary,
            _ => {}
        }

        let mut constraints = StringConstraints {
            regex_constraint: None,
            length_constraint: LengthRangeConstraint::for_string(
                schema.min_length,
                schema.max_length,
            ),
            value_constraints: Self::enumeration_values(schema),
        };

        if let Some(pattern) = &schema.pattern {
            let alternatives = overrides
                .model_string_patterns_are_alternative_list
                .then(|| Self::parse_alternative_list(pattern))
                .flatten();

            match alternatives {
                Some(values) => {
                    constraints.value_constraints = values
                        .into_iter()
                        .map(|value| (enumeration_case_name(&value), value))
                        .collect();
                }
                None => constraints.regex_constraint = Some(pattern.clone()),
            }
        }

        Field::String(constraints)
    }

    /// Split a pattern of the exact form `^(a|b|c)$` into its alternatives
    pub fn parse_alternative_list(pattern: &str) -> Option<Vec<String>> {
        let captures = ALTERNATIVE_LIST.captures(pattern)?;
        let values: Vec<String> = captures[1].split('|').map(str::to_string).collect();

        if values.iter().any(|value| value.is_empty()) {
            return None;
        }
        Some(values)
    }

    /// `(case name, literal)` pairs for the schema's `enum`, in order
    pub fn enumeration_values(schema: &Schema) -> Vec<(String, String)> {
        schema
            .enum_values
            .iter()
            .filter_map(|value| match value {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Null => None,
                other => Some(other.to_string()),
            })
            .map(|value| (enumeration_case_name(&value), value))
            .collect()
    }

    /// Integer bounds admitting exactly the integers the schema admits
    ///
    /// A fractional bound is rounded inward and becomes inclusive. A bound
    /// outside the `i64` range that excludes nothing is dropped.
    fn integer_range(schema: &Schema) -> NumericRangeConstraint<i64> {
        let (minimum, exclusive_minimum) =
            Self::integer_bound(schema.lower_bound(), f64::ceil, |v| v < i64::MIN as f64);
        let (maximum, exclusive_maximum) =
            Self::integer_bound(schema.upper_bound(), f64::floor, |v| v >= i64::MAX as f64);
        NumericRangeConstraint {
            minimum,
            maximum,
            exclusive_minimum,
            exclusive_maximum,
        }
    }

    fn integer_bound(
        (bound, exclusive): (Option<f64>, bool),
        round_inward: fn(f64) -> f64,
        unbounded: fn(f64) -> bool,
    ) -> (Option<i64>, bool) {
        let Some(value) = bound else {
            return (None, false);
        };

        let rounded = round_inward(value);
        if unbounded(rounded) {
            return (None, false);
        }
        // Saturates when the bound excludes the whole i64 range
        (Some(rounded as i64), exclusive && rounded == value)
    }

    fn double_range(schema: &Schema) -> NumericRangeConstraint<f64> {
        let (minimum, exclusive_minimum) = schema.lower_bound();
        let (maximum, exclusive_maximum) = schema.upper_bound();
        NumericRangeConstraint {
            minimum,
            maximum,
            exclusive_minimum,
            exclusive_maximum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: serde_json::Value) -> Option<Field> {
        let schema: Schema = serde_json::from_value(value).unwrap();
        FieldMapper::map_primitive(&schema, &ModelOverride::default())
    }

    fn string_constraints(field: Option<Field>) -> StringConstraints {
        match field {
            Some(Field::String(constraints)) => constraints,
            other => panic!("expected a string field, got {other:?}"),
        }
    }

    #[test]
    fn test_map_basic_types() {
        assert_eq!(map(json!({"type": "boolean"})), Some(Field::Boolean));
        assert_eq!(
            map(json!({"type": "integer"})),
            Some(Field::Integer {
                range_constraint: NumericRangeConstraint::default()
            })
        );
        assert!(matches!(
            map(json!({"type": "integer", "format": "int64"})),
            Some(Field::Long { .. })
        ));
        assert!(matches!(
            map(json!({"type": "number"})),
            Some(Field::Double { .. })
        ));
        assert_eq!(
            map(json!({"type": "string", "format": "date-time"})),
            Some(Field::Timestamp)
        );
        assert_eq!(
            map(json!({"type": "string", "format": "binary"})),
            Some(Field::Binary)
        );
    }

    #[test]
    fn test_non_primitive_is_not_mapped() {
        assert_eq!(map(json!({"type": "object"})), None);
        assert_eq!(map(json!({"type": "array", "items": {"type": "string"}})), None);
    }

    #[test]
    fn test_numeric_ranges() {
        let field = map(json!({
            "type": "integer",
            "minimum": 1,
            "maximum": 10,
            "exclusiveMaximum": true
        }));
        assert_eq!(
            field,
            Some(Field::Integer {
                range_constraint: NumericRangeConstraint {
                    minimum: Some(1),
                    maximum: Some(10),
                    exclusive_minimum: false,
                    exclusive_maximum: true,
                }
            })
        );
    }

    #[test]
    fn test_fractional_integer_bounds_round_inward() {
        let field = map(json!({
            "type": "integer",
            "minimum": 1.5,
            "exclusiveMinimum": true,
            "maximum": 9.5
        }));
        assert_eq!(
            field,
            Some(Field::Integer {
                range_constraint: NumericRangeConstraint {
                    minimum: Some(2),
                    maximum: Some(9),
                    exclusive_minimum: false,
                    exclusive_maximum: false,
                }
            })
        );

        let field = map(json!({
            "type": "integer",
            "format": "int64",
            "minimum": -1.0e20,
            "maximum": 1.0e20,
            "exclusiveMaximum": true
        }));
        assert_eq!(
            field,
            Some(Field::Long {
                range_constraint: NumericRangeConstraint::default()
            })
        );
    }

    #[test]
    fn test_string_enumeration() {
        let constraints = string_constraints(map(json!({
            "type": "string",
            "enum": ["active", "in-progress", null]
        })));

        assert!(constraints.is_enumeration());
        assert_eq!(
            constraints.value_constraints,
            vec![
                ("Active".to_string(), "active".to_string()),
                ("InProgress".to_string(), "in-progress".to_string()),
            ]
        );
    }

    #[test]
    fn test_zero_min_length_is_dropped() {
        let constraints = string_constraints(map(json!({
            "type": "string",
            "minLength": 0,
            "maxLength": 64
        })));
        assert_eq!(constraints.length_constraint.minimum, None);
        assert_eq!(constraints.length_constraint.maximum, Some(64));
    }

    #[test]
    fn test_pattern_kept_as_regex_by_default() {
        let constraints = string_constraints(map(json!({
            "type": "string",
            "pattern": "^(red|green)$"
        })));
        assert_eq!(constraints.regex_constraint.as_deref(), Some("^(red|green)$"));
        assert!(!constraints.is_enumeration());
    }

    #[test]
    fn test_pattern_as_alternative_list() {
        let schema: Schema =
            serde_json::from_value(json!({"type": "string", "pattern": "^(red|green|blue)$"}))
                .unwrap();
        let overrides = ModelOverride {
            model_string_patterns_are_alternative_list: true,
            ..ModelOverride::default()
        };

        let constraints =
            string_constraints(FieldMapper::map_primitive(&schema, &overrides));
        assert_eq!(constraints.regex_constraint, None);
        assert_eq!(
            constraints
                .value_constraints
                .iter()
                .map(|(_, value)| value.as_str())
                .collect::<Vec<_>>(),
            vec!["red", "green", "blue"]
        );
    }

    #[test]
    fn test_parse_alternative_list() {
        assert_eq!(
            FieldMapper::parse_alternative_list("^(a|b)$"),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(FieldMapper::parse_alternative_list("^[a-z]+$"), None);
        assert_eq!(FieldMapper::parse_alternative_list("(a|b)"), None);
        assert_eq!(FieldMapper::parse_alternative_list("^(a||b)$"), None);
    }
}
