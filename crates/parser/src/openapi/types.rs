//! OpenAPI 3.x / Swagger 2.0 document types
//!
//! The subset of the document the model builder reads. Both document
//! generations deserialize into the same types: Swagger's `definitions`,
//! top-level `parameters` and inline parameter types live next to their
//! OpenAPI 3 counterparts. Maps are ordered so traversal is deterministic.

use serde::Deserialize;
use service_model_generator_common::naming::to_upper_camel_case;
use service_model_generator_common::{GeneratorError, Result, UnsupportedConstruct};
use std::collections::BTreeMap;

const COMPONENT_SCHEMA_PREFIX: &str = "#/components/schemas/";
const DEFINITION_PREFIX: &str = "#/definitions/";
const COMPONENT_PARAMETER_PREFIX: &str = "#/components/parameters/";
const PARAMETER_PREFIX: &str = "#/parameters/";
const COMPONENT_RESPONSE_PREFIX: &str = "#/components/responses/";
const RESPONSE_PREFIX: &str = "#/responses/";
const COMPONENT_REQUEST_BODY_PREFIX: &str = "#/components/requestBodies/";

/// Document root
#[derive(Debug, Clone, Deserialize)]
pub struct OpenApiSpec {
    /// OpenAPI version (e.g., "3.0.3"); absent for Swagger 2.0
    #[serde(default)]
    pub openapi: Option<String>,

    /// Swagger version ("2.0"); absent for OpenAPI 3
    #[serde(default)]
    pub swagger: Option<String>,

    /// API metadata
    pub info: Info,

    /// API paths (endpoints)
    #[serde(default)]
    pub paths: BTreeMap<String, PathItem>,

    /// Reusable components (OpenAPI 3)
    #[serde(default)]
    pub components: Option<Components>,

    /// Schema definitions (Swagger 2.0)
    #[serde(default)]
    pub definitions: BTreeMap<String, Schema>,

    /// Reusable parameters (Swagger 2.0)
    #[serde(default)]
    pub parameters: BTreeMap<String, Parameter>,

    /// Reusable responses (Swagger 2.0)
    #[serde(default)]
    pub responses: BTreeMap<String, Response>,
}

/// API information
#[derive(Debug, Clone, Deserialize)]
pub struct Info {
    pub title: String,

    pub version: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// Operations available on one path
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    #[serde(default)]
    pub get: Option<Operation>,

    #[serde(default)]
    pub put: Option<Operation>,

    #[serde(default)]
    pub post: Option<Operation>,

    #[serde(default)]
    pub delete: Option<Operation>,

    #[serde(default)]
    pub options: Option<Operation>,

    #[serde(default)]
    pub head: Option<Operation>,

    #[serde(default)]
    pub patch: Option<Operation>,

    /// Parameters shared by every operation on the path
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl PathItem {
    /// Declared operations with their upper-case HTTP verb, in a fixed order
    pub fn operations(&self) -> Vec<(&'static str, &Operation)> {
        [
            ("GET", &self.get),
            ("PUT", &self.put),
            ("POST", &self.post),
            ("DELETE", &self.delete),
            ("OPTIONS", &self.options),
            ("HEAD", &self.head),
            ("PATCH", &self.patch),
        ]
        .into_iter()
        .filter_map(|(verb, operation)| operation.as_ref().map(|op| (verb, op)))
        .collect()
    }

    /// Copy of `operation` carrying the path-level parameters too
    ///
    /// An operation parameter replaces a path parameter with the same name
    /// and location.
    pub fn merged_operation(&self, operation: &Operation) -> Operation {
        let mut merged = operation.clone();
        let inherited: Vec<Parameter> = self
            .parameters
            .iter()
            .filter(|shared| {
                !operation.parameters.iter().any(|own| {
                    own.ref_path.is_none()
                        && own.name == shared.name
                        && own.location == shared.location
                })
            })
            .cloned()
            .collect();
        merged.parameters = inherited
            .into_iter()
            .chain(operation.parameters.iter().cloned())
            .collect();
        merged
    }
}

/// HTTP operation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
    /// Operation ID (unique identifier)
    #[serde(rename = "operationId")]
    #[serde(default)]
    pub operation_id: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub parameters: Vec<Parameter>,

    #[serde(rename = "requestBody")]
    #[serde(default)]
    pub request_body: Option<RequestBody>,

    /// Responses keyed by status code
    #[serde(default)]
    pub responses: BTreeMap<String, Response>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl Operation {
    /// Description, falling back to the summary
    pub fn documentation(&self) -> Option<String> {
        self.description.clone().or_else(|| self.summary.clone())
    }
}

/// Parameter definition
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Parameter {
    /// Reference to a reusable parameter
    #[serde(rename = "$ref")]
    #[serde(default)]
    pub ref_path: Option<String>,

    #[serde(default)]
    pub name: String,

    /// Location: query, header, path, cookie (or body/formData in Swagger 2.0)
    #[serde(rename = "in")]
    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub required: bool,

    /// Schema (OpenAPI 3, and Swagger 2.0 body parameters)
    #[serde(default)]
    pub schema: Option<Schema>,

    /// Inline type information (Swagger 2.0 non-body parameters)
    #[serde(flatten)]
    pub inline_schema: Schema,
}

impl Parameter {
    /// The schema describing the parameter's value
    pub fn value_schema(&self) -> &Schema {
        self.schema.as_ref().unwrap_or(&self.inline_schema)
    }
}

/// Request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestBody {
    /// Reference to a reusable request body
    #[serde(rename = "$ref")]
    #[serde(default)]
    pub ref_path: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Content types
    #[serde(default)]
    pub content: BTreeMap<String, MediaType>,

    #[serde(default)]
    pub required: bool,
}

impl RequestBody {
    pub fn schema(&self) -> Option<&Schema> {
        preferred_media_type(&self.content).and_then(|media| media.schema.as_ref())
    }
}

/// Response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    /// Reference to a reusable response
    #[serde(rename = "$ref")]
    #[serde(default)]
    pub ref_path: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Content types (OpenAPI 3)
    #[serde(default)]
    pub content: BTreeMap<String, MediaType>,

    /// Response headers
    #[serde(default)]
    pub headers: BTreeMap<String, Header>,

    /// Body schema (Swagger 2.0)
    #[serde(default)]
    pub schema: Option<Schema>,
}

impl Response {
    pub fn body_schema(&self) -> Option<&Schema> {
        self.schema.as_ref().or_else(|| {
            preferred_media_type(&self.content).and_then(|media| media.schema.as_ref())
        })
    }
}

/// Response header
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Header {
    #[serde(default)]
    pub description: Option<String>,

    /// Schema (OpenAPI 3)
    #[serde(default)]
    pub schema: Option<Schema>,

    /// Inline type information (Swagger 2.0)
    #[serde(flatten)]
    pub inline_schema: Schema,
}

impl Header {
    pub fn value_schema(&self) -> &Schema {
        self.schema.as_ref().unwrap_or(&self.inline_schema)
    }
}

/// Media type
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaType {
    #[serde(default)]
    pub schema: Option<Schema>,
}

/// `application/json` when offered, otherwise the first content type
fn preferred_media_type(content: &BTreeMap<String, MediaType>) -> Option<&MediaType> {
    content
        .get("application/json")
        .or_else(|| content.values().next())
}

/// The `type` keyword: a single name, or a list in OpenAPI 3.1
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(String),
    Multiple(Vec<String>),
}

/// `additionalProperties`: a flag or a value schema
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<Schema>),
}

/// `exclusiveMinimum`/`exclusiveMaximum`: a flag (3.0) or the bound itself (3.1)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ExclusiveBound {
    Flag(bool),
    Value(f64),
}

/// Schema definition
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    /// Reference to a named schema
    #[serde(rename = "$ref")]
    #[serde(default)]
    pub ref_path: Option<String>,

    /// Type: string, number, integer, boolean, array, object
    #[serde(rename = "type")]
    #[serde(default)]
    pub schema_type: Option<SchemaType>,

    /// Format (e.g., int32, int64, date-time)
    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Properties (for object type)
    #[serde(default)]
    pub properties: BTreeMap<String, Schema>,

    /// Required properties
    #[serde(default)]
    pub required: Vec<String>,

    /// Items schema (for array type)
    #[serde(default)]
    pub items: Option<Box<Schema>>,

    #[serde(rename = "additionalProperties")]
    #[serde(default)]
    pub additional_properties: Option<AdditionalProperties>,

    /// Enum values
    #[serde(rename = "enum")]
    #[serde(default)]
    pub enum_values: Vec<serde_json::Value>,

    #[serde(default)]
    pub minimum: Option<f64>,

    #[serde(default)]
    pub maximum: Option<f64>,

    #[serde(rename = "exclusiveMinimum")]
    #[serde(default)]
    pub exclusive_minimum: Option<ExclusiveBound>,

    #[serde(rename = "exclusiveMaximum")]
    #[serde(default)]
    pub exclusive_maximum: Option<ExclusiveBound>,

    #[serde(rename = "minLength")]
    #[serde(default)]
    pub min_length: Option<u64>,

    #[serde(rename = "maxLength")]
    #[serde(default)]
    pub max_length: Option<u64>,

    #[serde(default)]
    pub pattern: Option<String>,

    #[serde(rename = "minItems")]
    #[serde(default)]
    pub min_items: Option<u64>,

    #[serde(rename = "maxItems")]
    #[serde(default)]
    pub max_items: Option<u64>,

    #[serde(rename = "minProperties")]
    #[serde(default)]
    pub min_properties: Option<u64>,

    #[serde(rename = "maxProperties")]
    #[serde(default)]
    pub max_properties: Option<u64>,

    #[serde(rename = "allOf")]
    #[serde(default)]
    pub all_of: Vec<Schema>,

    #[serde(rename = "anyOf")]
    #[serde(default)]
    pub any_of: Vec<Schema>,

    #[serde(rename = "oneOf")]
    #[serde(default)]
    pub one_of: Vec<Schema>,

    #[serde(default)]
    pub not: Option<Box<Schema>>,
}

/// What a schema node describes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaKind {
    Reference,
    Boolean,
    Integer,
    Number,
    String,
    Object,
    Array,
    Union,
    Unsupported(UnsupportedConstruct),
}

impl SchemaKind {
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            SchemaKind::Boolean | SchemaKind::Integer | SchemaKind::Number | SchemaKind::String
        )
    }
}

impl Schema {
    /// Classify the schema node
    pub fn kind(&self) -> SchemaKind {
        if self.ref_path.is_some() {
            return SchemaKind::Reference;
        }
        if self.not.is_some() {
            return SchemaKind::Unsupported(UnsupportedConstruct::NotSchema);
        }
        if self.union_branches().next().is_some() {
            return SchemaKind::Union;
        }

        let type_name = match &self.schema_type {
            Some(SchemaType::Single(name)) => name.clone(),
            Some(SchemaType::Multiple(names)) => {
                let non_null: Vec<&String> = names.iter().filter(|n| *n != "null").collect();
                match non_null.as_slice() {
                    [single] => (*single).clone(),
                    _ => {
                        return SchemaKind::Unsupported(UnsupportedConstruct::SchemaType(
                            names.join("|"),
                        ))
                    }
                }
            }
            None if !self.properties.is_empty() || self.map_value_schema().is_some() => {
                return SchemaKind::Object
            }
            None if self.items.is_some() => return SchemaKind::Array,
            None => return SchemaKind::Unsupported(UnsupportedConstruct::UntypedSchema),
        };

        match type_name.as_str() {
            "boolean" => SchemaKind::Boolean,
            "integer" => SchemaKind::Integer,
            "number" => SchemaKind::Number,
            "string" => SchemaKind::String,
            "object" => SchemaKind::Object,
            "array" => SchemaKind::Array,
            other => SchemaKind::Unsupported(UnsupportedConstruct::SchemaType(other.to_string())),
        }
    }

    /// `allOf`, `anyOf` and `oneOf` branches, in that order
    pub fn union_branches(&self) -> impl Iterator<Item = &Schema> {
        self.all_of
            .iter()
            .chain(self.any_of.iter())
            .chain(self.one_of.iter())
    }

    /// Value schema when `additionalProperties` is a schema
    pub fn map_value_schema(&self) -> Option<&Schema> {
        match &self.additional_properties {
            Some(AdditionalProperties::Schema(schema)) => Some(schema),
            _ => None,
        }
    }

    /// An object that only describes string-keyed values
    pub fn is_map(&self) -> bool {
        self.properties.is_empty() && self.map_value_schema().is_some()
    }

    /// An object with named properties (not a map)
    pub fn is_structure(&self) -> bool {
        self.kind() == SchemaKind::Object && !self.is_map()
    }

    pub fn is_required(&self, property: &str) -> bool {
        self.required.iter().any(|name| name == property)
    }

    /// Lower bound and whether it is exclusive
    pub fn lower_bound(&self) -> (Option<f64>, bool) {
        resolve_bound(self.minimum, self.exclusive_minimum)
    }

    /// Upper bound and whether it is exclusive
    pub fn upper_bound(&self) -> (Option<f64>, bool) {
        resolve_bound(self.maximum, self.exclusive_maximum)
    }
}

fn resolve_bound(bound: Option<f64>, exclusive: Option<ExclusiveBound>) -> (Option<f64>, bool) {
    match exclusive {
        Some(ExclusiveBound::Value(value)) => (Some(value), true),
        Some(ExclusiveBound::Flag(flag)) => (bound, flag && bound.is_some()),
        None => (bound, false),
    }
}

/// Reusable components
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: BTreeMap<String, Schema>,

    #[serde(default)]
    pub parameters: BTreeMap<String, Parameter>,

    #[serde(rename = "requestBodies")]
    #[serde(default)]
    pub request_bodies: BTreeMap<String, RequestBody>,

    #[serde(default)]
    pub responses: BTreeMap<String, Response>,
}

impl OpenApiSpec {
    /// Named schemas from `components.schemas` and `definitions`
    pub fn schemas(&self) -> BTreeMap<&String, &Schema> {
        let components = self.components.iter().flat_map(|c| c.schemas.iter());
        self.definitions.iter().chain(components).collect()
    }

    /// Schema name a `$ref` points at
    /// e.g., "#/components/schemas/Pod" -> "Pod"
    pub fn schema_name_from_ref(ref_path: &str) -> Result<&str> {
        ref_path
            .strip_prefix(COMPONENT_SCHEMA_PREFIX)
            .or_else(|| ref_path.strip_prefix(DEFINITION_PREFIX))
            .ok_or_else(|| {
                GeneratorError::unsupported(
                    UnsupportedConstruct::ExternalReference(ref_path.to_string()),
                    ref_path,
                )
            })
    }

    /// Get a schema by reference path
    pub fn resolve_schema_ref(&self, ref_path: &str) -> Result<&Schema> {
        let name = Self::schema_name_from_ref(ref_path)?;
        self.definitions
            .get(name)
            .or_else(|| self.components.as_ref().and_then(|c| c.schemas.get(name)))
            .ok_or_else(|| GeneratorError::UnresolvedType {
                type_name: name.to_string(),
                referrer: ref_path.to_string(),
            })
    }

    /// Follow a `$ref` through top-level aliases (schemas that are only a
    /// `$ref`) to the schema defining the type, returning its name too
    pub fn resolve_schema_alias<'a>(&'a self, ref_path: &'a str) -> Result<(&'a str, &'a Schema)> {
        let mut name = Self::schema_name_from_ref(ref_path)?;
        let mut schema = self.resolve_schema_ref(ref_path)?;
        let mut seen = vec![name];

        while let Some(next) = &schema.ref_path {
            name = Self::schema_name_from_ref(next)?;
            if seen.contains(&name) {
                return Err(GeneratorError::unsupported(
                    UnsupportedConstruct::CircularComposition(name.to_string()),
                    ref_path,
                ));
            }
            seen.push(name);
            schema = self.resolve_schema_ref(next)?;
        }

        Ok((name, schema))
    }

    /// Follow a parameter `$ref`, if any
    pub fn resolve_parameter<'a>(&'a self, parameter: &'a Parameter) -> Result<&'a Parameter> {
        let Some(ref_path) = &parameter.ref_path else {
            return Ok(parameter);
        };

        let found = if let Some(name) = ref_path.strip_prefix(COMPONENT_PARAMETER_PREFIX) {
            self.components.as_ref().and_then(|c| c.parameters.get(name))
        } else if let Some(name) = ref_path.strip_prefix(PARAMETER_PREFIX) {
            self.parameters.get(name)
        } else {
            return Err(external_reference(ref_path));
        };

        found.ok_or_else(|| missing_component(ref_path))
    }

    /// Follow a response `$ref`, if any
    pub fn resolve_response<'a>(&'a self, response: &'a Response) -> Result<&'a Response> {
        let Some(ref_path) = &response.ref_path else {
            return Ok(response);
        };

        let found = if let Some(name) = ref_path.strip_prefix(COMPONENT_RESPONSE_PREFIX) {
            self.components.as_ref().and_then(|c| c.responses.get(name))
        } else if let Some(name) = ref_path.strip_prefix(RESPONSE_PREFIX) {
            self.responses.get(name)
        } else {
            return Err(external_reference(ref_path));
        };

        found.ok_or_else(|| missing_component(ref_path))
    }

    /// Follow a request body `$ref`, if any
    pub fn resolve_request_body<'a>(&'a self, body: &'a RequestBody) -> Result<&'a RequestBody> {
        let Some(ref_path) = &body.ref_path else {
            return Ok(body);
        };

        let name = ref_path
            .strip_prefix(COMPONENT_REQUEST_BODY_PREFIX)
            .ok_or_else(|| external_reference(ref_path))?;

        self.components
            .as_ref()
            .and_then(|c| c.request_bodies.get(name))
            .ok_or_else(|| missing_component(ref_path))
    }

    /// Operation name for an operation without an `operationId`
    /// e.g., ("GET", "/widgets/{id}") -> "getWidgetsId"
    pub fn operation_name_from_path(http_verb: &str, path: &str) -> String {
        let segments: String = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|segment| to_upper_camel_case(segment.trim_matches(|c| c == '{' || c == '}')))
            .collect();

        format!("{}{}", http_verb.to_lowercase(), segments)
    }
}

fn external_reference(ref_path: &str) -> GeneratorError {
    GeneratorError::unsupported(
        UnsupportedConstruct::ExternalReference(ref_path.to_string()),
        ref_path,
    )
}

fn missing_component(ref_path: &str) -> GeneratorError {
    GeneratorError::Parse(format!("Reference {} does not resolve", ref_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema(value: serde_json::Value) -> Schema {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_operation_name_from_path() {
        assert_eq!(
            OpenApiSpec::operation_name_from_path("GET", "/widgets/{id}"),
            "getWidgetsId"
        );
        assert_eq!(
            OpenApiSpec::operation_name_from_path("POST", "/api/v1/widget-groups"),
            "postApiV1WidgetGroups"
        );
    }

    #[test]
    fn test_schema_kind() {
        assert_eq!(schema(json!({"type": "string"})).kind(), SchemaKind::String);
        assert_eq!(
            schema(json!({"$ref": "#/components/schemas/Widget"})).kind(),
            SchemaKind::Reference
        );
        assert_eq!(
            schema(json!({"properties": {"id": {"type": "string"}}})).kind(),
            SchemaKind::Object
        );
        assert_eq!(
            schema(json!({"items": {"type": "string"}})).kind(),
            SchemaKind::Array
        );
        assert_eq!(
            schema(json!({"allOf": [{"type": "object"}]})).kind(),
            SchemaKind::Union
        );
        assert_eq!(
            schema(json!({"type": ["integer", "null"]})).kind(),
            SchemaKind::Integer
        );
        assert_eq!(
            schema(json!({"not": {"type": "string"}})).kind(),
            SchemaKind::Unsupported(UnsupportedConstruct::NotSchema)
        );
        assert_eq!(
            schema(json!({})).kind(),
            SchemaKind::Unsupported(UnsupportedConstruct::UntypedSchema)
        );
        assert_eq!(
            schema(json!({"type": "null"})).kind(),
            SchemaKind::Unsupported(UnsupportedConstruct::SchemaType("null".to_string()))
        );
    }

    #[test]
    fn test_map_detection() {
        let map = schema(json!({"type": "object", "additionalProperties": {"type": "string"}}));
        assert!(map.is_map());
        assert!(!map.is_structure());

        let closed = schema(json!({
            "type": "object",
            "additionalProperties": false,
            "properties": {"id": {"type": "string"}}
        }));
        assert!(!closed.is_map());
        assert!(closed.is_structure());
    }

    #[test]
    fn test_exclusive_bounds_both_dialects() {
        let v30 = schema(json!({"type": "number", "minimum": 1, "exclusiveMinimum": true}));
        assert_eq!(v30.lower_bound(), (Some(1.0), true));

        let v31 = schema(json!({"type": "number", "exclusiveMaximum": 10}));
        assert_eq!(v31.upper_bound(), (Some(10.0), true));

        let plain = schema(json!({"type": "number", "maximum": 5}));
        assert_eq!(plain.upper_bound(), (Some(5.0), false));
    }

    #[test]
    fn test_swagger_inline_parameter() {
        let parameter: Parameter = serde_json::from_value(json!({
            "name": "limit",
            "in": "query",
            "required": true,
            "type": "integer",
            "format": "int64",
            "maximum": 100
        }))
        .unwrap();

        assert!(parameter.required);
        let value = parameter.value_schema();
        assert_eq!(value.kind(), SchemaKind::Integer);
        assert_eq!(value.format.as_deref(), Some("int64"));
        assert_eq!(value.maximum, Some(100.0));
    }

    #[test]
    fn test_schema_name_from_ref() {
        assert_eq!(
            OpenApiSpec::schema_name_from_ref("#/components/schemas/Pod").unwrap(),
            "Pod"
        );
        assert_eq!(
            OpenApiSpec::schema_name_from_ref("#/definitions/Pod").unwrap(),
            "Pod"
        );
        assert!(OpenApiSpec::schema_name_from_ref("other.yaml#/Pod").is_err());
    }

    #[test]
    fn test_merged_operation_prefers_operation_parameters() {
        let item: PathItem = serde_json::from_value(json!({
            "parameters": [
                {"name": "id", "in": "path", "required": true, "schema": {"type": "string"}},
                {"name": "trace", "in": "header", "schema": {"type": "string"}}
            ],
            "get": {
                "parameters": [
                    {"name": "id", "in": "path", "required": true, "schema": {"type": "integer"}}
                ]
            }
        }))
        .unwrap();

        let operations = item.operations();
        assert_eq!(operations.len(), 1);
        let merged = item.merged_operation(operations[0].1);

        assert_eq!(merged.parameters.len(), 2);
        assert_eq!(merged.parameters[0].name, "trace");
        assert_eq!(
            merged.parameters[1].value_schema().kind(),
            SchemaKind::Integer
        );
    }
}
