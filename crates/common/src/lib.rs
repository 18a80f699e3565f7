//! Common types and utilities for the Service Model Generator
//!
//! This crate contains the service model IR (field and structure registries,
//! operation descriptions), the constraint model, naming utilities, the
//! `ModelOverride` configuration and the shared error type used by the
//! parser, generator, and CLI components.

pub mod constraints;
pub mod model;
pub mod model_override;
pub mod naming;
pub mod pattern;

pub use constraints::{LengthRangeConstraint, NumericRangeConstraint, StringConstraints};
pub use model::{
    ErrorDescription, Field, InputLocation, Member, OperationDescription,
    OperationInputDescription, OperationOutputDescription, ServiceInformation, ServiceModel,
    Structure, TypeLookup,
};
pub use model_override::ModelOverride;

use std::fmt;
use thiserror::Error;

/// Errors that can occur while building or emitting a service model
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Generation error: {0}")]
    Generation(String),

    /// A schema or operation shape outside the supported subset
    #[error("{construct} is not supported (at `{location}`)")]
    Unsupported {
        construct: UnsupportedConstruct,
        location: String,
    },

    /// A type name that is in neither registry
    #[error("type `{type_name}` referenced by `{referrer}` is not defined in the model")]
    UnresolvedType { type_name: String, referrer: String },

    /// Two definitions competing for the same synthetic name
    #[error("ambiguous definition of `{name}`: {reason}")]
    Ambiguous { name: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl GeneratorError {
    /// Shorthand for an [`GeneratorError::Unsupported`] error
    pub fn unsupported(construct: UnsupportedConstruct, location: impl Into<String>) -> Self {
        Self::Unsupported {
            construct,
            location: location.into(),
        }
    }
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// The kinds of document constructs the model builder rejects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnsupportedConstruct {
    /// A `not` schema
    NotSchema,
    /// A schema with no usable `type`
    UntypedSchema,
    /// A schema of type `null`, or a multi-type list
    SchemaType(String),
    /// A union branch that is not object shaped
    NonObjectUnionBranch,
    /// A union that reaches itself again through references
    CircularComposition(String),
    /// A map whose values are neither strings nor references
    MapValueType,
    /// A request or response body that is not object shaped
    NonObjectBody,
    /// A parameter located in a cookie
    CookieParameter,
    /// A parameter location other than path, query, header or body
    ParameterLocation(String),
    /// A parameter whose schema is a structure
    StructureParameter,
    /// A response key that is not an HTTP status code
    StatusCode(String),
    /// A `$ref` outside the reusable components of the document
    ExternalReference(String),
}

impl fmt::Display for UnsupportedConstruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSchema => write!(f, "`not` schema"),
            Self::UntypedSchema => write!(f, "untyped schema"),
            Self::SchemaType(ty) => write!(f, "schema type `{}`", ty),
            Self::NonObjectUnionBranch => write!(f, "non-object union branch"),
            Self::CircularComposition(name) => {
                write!(f, "circular composition through `{}`", name)
            }
            Self::MapValueType => write!(f, "map value type other than string or reference"),
            Self::NonObjectBody => write!(f, "non-object body"),
            Self::CookieParameter => write!(f, "cookie parameter"),
            Self::ParameterLocation(location) => write!(f, "parameter location `{}`", location),
            Self::StructureParameter => write!(f, "structure-typed parameter"),
            Self::StatusCode(code) => write!(f, "response status `{}`", code),
            Self::ExternalReference(reference) => write!(f, "reference `{}`", reference),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_error_names_construct_and_location() {
        let err = GeneratorError::unsupported(UnsupportedConstruct::CookieParameter, "getWidget.session");
        assert_eq!(
            err.to_string(),
            "cookie parameter is not supported (at `getWidget.session`)"
        );
    }

    #[test]
    fn test_unresolved_type_message() {
        let err = GeneratorError::UnresolvedType {
            type_name: "Missing".to_string(),
            referrer: "Widget.part".to_string(),
        };
        assert!(err.to_string().contains("`Missing`"));
        assert!(err.to_string().contains("`Widget.part`"));
    }
}
