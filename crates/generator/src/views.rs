//! Template views
//!
//! Flattened, already-named shapes handed to the templates. Everything that
//! needs the model or the delegate is decided before rendering.

use serde::Serialize;
use service_model_generator_common::{Field, LengthRangeConstraint, NumericRangeConstraint};
use std::fmt::Display;

#[derive(Debug, Serialize)]
pub struct AliasView {
    pub name: String,
    pub rust_type: String,
    pub constraints: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EnumerationView {
    pub name: String,
    pub cases: Vec<CaseView>,
}

#[derive(Debug, Serialize)]
pub struct CaseView {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct StructureView {
    pub name: String,
    pub documentation: Option<String>,
    pub members: Vec<MemberView>,
}

#[derive(Debug, Serialize)]
pub struct MemberView {
    pub name: String,
    pub wire_name: String,
    /// Whether the wire name differs from `name`
    pub rename: bool,
    pub rust_type: String,
    pub required: bool,
    pub documentation: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DefaultView {
    pub const_name: String,
    pub type_name: String,
    pub member: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorView {
    pub variant: String,
    /// Payload type, `None` for errors known only by name
    pub type_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OperationView {
    pub operation_name: String,
    pub method_name: String,
    pub http_verb: String,
    pub url: String,
    pub documentation: Option<String>,
    pub input: Option<String>,
    /// `()` when the operation has no output
    pub output: String,
    /// `"<code>: <type>"` lines
    pub errors: Vec<String>,
}

/// Human-readable summary of a field's constraints
pub fn describe_constraints(field: &Field) -> Option<String> {
    let parts: Vec<String> = match field {
        Field::String(constraints) => {
            let mut parts = Vec::new();
            if let Some(length) = describe_length(&constraints.length_constraint) {
                parts.push(format!("Length {}", length));
            }
            if let Some(pattern) = &constraints.regex_constraint {
                parts.push(format!("Pattern `{}`", pattern));
            }
            parts
        }
        Field::Integer { range_constraint } | Field::Long { range_constraint } => {
            describe_range(range_constraint).into_iter().collect()
        }
        Field::Double { range_constraint } => describe_range(range_constraint).into_iter().collect(),
        Field::List {
            length_constraint, ..
        }
        | Field::Map {
            length_constraint, ..
        } => describe_length(length_constraint)
            .map(|length| format!("Length {}", length))
            .into_iter()
            .collect(),
        Field::Boolean | Field::Timestamp | Field::Binary => Vec::new(),
    };

    (!parts.is_empty()).then(|| parts.join("\n"))
}

fn describe_length(constraint: &LengthRangeConstraint) -> Option<String> {
    match (constraint.minimum, constraint.maximum) {
        (None, None) => None,
        (Some(minimum), None) => Some(format!("at least {}", minimum)),
        (None, Some(maximum)) => Some(format!("at most {}", maximum)),
        (Some(minimum), Some(maximum)) => Some(format!("between {} and {}", minimum, maximum)),
    }
}

fn describe_range<T: Display>(constraint: &NumericRangeConstraint<T>) -> Option<String> {
    let lower = constraint.minimum.as_ref().map(|minimum| {
        let operator = if constraint.exclusive_minimum { ">" } else { ">=" };
        format!("{} {}", operator, minimum)
    });
    let upper = constraint.maximum.as_ref().map(|maximum| {
        let operator = if constraint.exclusive_maximum { "<" } else { "<=" };
        format!("{} {}", operator, maximum)
    });

    let bounds: Vec<String> = lower.into_iter().chain(upper).collect();
    (!bounds.is_empty()).then(|| format!("Range {}", bounds.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use service_model_generator_common::StringConstraints;

    #[test]
    fn test_describe_string_constraints() {
        let field = Field::String(StringConstraints {
            regex_constraint: Some("^[a-z]+$".to_string()),
            length_constraint: LengthRangeConstraint::new(Some(1), Some(64)),
            value_constraints: Vec::new(),
        });
        assert_eq!(
            describe_constraints(&field).as_deref(),
            Some("Length between 1 and 64\nPattern `^[a-z]+$`")
        );
    }

    #[test]
    fn test_describe_numeric_range() {
        let field = Field::Integer {
            range_constraint: NumericRangeConstraint {
                minimum: Some(0),
                maximum: Some(10),
                exclusive_minimum: true,
                exclusive_maximum: false,
            },
        };
        assert_eq!(
            describe_constraints(&field).as_deref(),
            Some("Range > 0, <= 10")
        );
    }

    #[test]
    fn test_unconstrained_fields_have_no_description() {
        assert_eq!(describe_constraints(&Field::Boolean), None);
        assert_eq!(
            describe_constraints(&Field::String(StringConstraints::default())),
            None
        );
    }
}
