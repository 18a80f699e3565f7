//! OpenAPI document file parser

use super::types::OpenApiSpec;
use service_model_generator_common::{GeneratorError, ModelOverride, Result, ServiceModel};
use std::fs;
use std::path::Path;
use tracing::debug;

/// OpenAPI / Swagger document parser
///
/// Reads an OpenAPI 3.x or Swagger 2.0 document in JSON or YAML and builds
/// its service model.
pub struct OpenApiParser {
    /// Loaded document
    spec: OpenApiSpec,

    /// Overrides applied while building the model
    overrides: ModelOverride,
}

impl OpenApiParser {
    /// Load a document from a file path
    ///
    /// Files ending in `.yaml` or `.yml` are read as YAML, everything else as
    /// JSON.
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = OpenApiParser::from_file("widgets.yaml")?;
    /// let model = parser.parse()?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            GeneratorError::Parse(format!(
                "Failed to read OpenAPI file {}: {}",
                path.display(),
                e
            ))
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        debug!(path = %path.display(), yaml = is_yaml, "loading document");
        if is_yaml {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        }
    }

    /// Parse a document from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: OpenApiSpec = serde_json::from_str(json)
            .map_err(|e| GeneratorError::Parse(format!("Failed to parse OpenAPI JSON: {}", e)))?;
        Ok(Self::new(spec))
    }

    /// Parse a document from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let spec: OpenApiSpec = serde_yaml::from_str(yaml)
            .map_err(|e| GeneratorError::Parse(format!("Failed to parse OpenAPI YAML: {}", e)))?;
        Ok(Self::new(spec))
    }

    pub fn new(spec: OpenApiSpec) -> Self {
        Self {
            spec,
            overrides: ModelOverride::default(),
        }
    }

    /// Set the overrides used by [`parse`](Self::parse)
    pub fn with_overrides(mut self, overrides: ModelOverride) -> Self {
        self.overrides = overrides;
        self
    }

    /// Build the service model
    pub fn parse(&self) -> Result<ServiceModel> {
        super::converter::build_service_model(&self.spec, &self.overrides)
    }

    /// Get reference to the underlying document
    pub fn spec(&self) -> &OpenApiSpec {
        &self.spec
    }

    pub fn overrides(&self) -> &ModelOverride {
        &self.overrides
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_minimal_openapi() {
        let openapi_json = r#"{
            "openapi": "3.0.0",
            "info": {
                "title": "Test API",
                "version": "1.0.0"
            },
            "paths": {}
        }"#;

        let parser = OpenApiParser::from_json(openapi_json);
        assert!(parser.is_ok());

        let parser = parser.unwrap();
        assert_eq!(parser.spec().openapi.as_deref(), Some("3.0.0"));
        assert_eq!(parser.spec().info.title, "Test API");

        let model = parser.parse().unwrap();
        assert!(model.operation_descriptions.is_empty());
    }

    #[test]
    fn test_from_file_chooses_yaml_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "swagger: '2.0'\ninfo:\n  title: Legacy\n  version: '0.1'\npaths: {{}}"
        )
        .unwrap();

        let parser = OpenApiParser::from_file(file.path()).unwrap();
        assert_eq!(parser.spec().swagger.as_deref(), Some("2.0"));
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let result = OpenApiParser::from_json("{ not json");
        assert!(matches!(result, Err(GeneratorError::Parse(_))));
    }
}
