//! Document parsing for the Service Model Generator
//!
//! This crate turns OpenAPI 3.x and Swagger 2.0 documents into the flat
//! `ServiceModel` defined in the common crate.
//!
//! ## Building Strategy
//!
//! - Named schemas are lowered into field and structure registries; nested
//!   schemas get synthetic names derived from their parent
//! - References are recorded by name and never expanded
//! - Operations are split into path/query/header/body members; 2xx responses
//!   become the output, other status codes become errors

pub mod openapi;
mod operation_mapper;
mod type_mapper;

pub use openapi::OpenApiParser;
pub use operation_mapper::{ResponseClassifier, ResponseKind};
pub use type_mapper::FieldMapper;

use service_model_generator_common::{ModelOverride, Result, ServiceModel};
use std::path::Path;

/// Build the service model of a document file
///
/// # Arguments
/// * `path` - JSON or YAML document
/// * `overrides` - Overrides applied while building
pub fn parse_document<P: AsRef<Path>>(path: P, overrides: ModelOverride) -> Result<ServiceModel> {
    OpenApiParser::from_file(path)?
        .with_overrides(overrides)
        .parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_document() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"openapi": "3.0.0", "info": {{"title": "Empty", "version": "1"}}}}"#
        )
        .unwrap();

        let model = parse_document(file.path(), ModelOverride::default()).unwrap();
        assert_eq!(model.service_information.title, "Empty");
    }

    #[test]
    fn test_parse_document_missing_file() {
        assert!(parse_document("does-not-exist.json", ModelOverride::default()).is_err());
    }
}
