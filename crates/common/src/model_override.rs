//! Model override configuration
//!
//! A `ModelOverride` adjusts how a document is turned into a service model:
//! which operations and headers to ignore, how string patterns are read, and
//! per-operation replacements for the computed input/output descriptions.
//! It is loaded from a JSON or YAML file and passed by reference into every
//! lowering and decomposition call.

use crate::model::{OperationInputDescription, OperationOutputDescription};
use crate::pattern;
use crate::{GeneratorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// Overrides applied while building a service model
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelOverride {
    /// Operation name patterns to skip entirely
    pub ignore_operations: BTreeSet<String>,

    /// `operation.header` patterns for request headers to drop
    pub ignore_request_headers: BTreeSet<String>,

    /// `operation.code.header` patterns for response headers to drop
    pub ignore_response_headers: BTreeSet<String>,

    /// Read string patterns of the form `^(a|b|c)$` as enumerations
    pub model_string_patterns_are_alternative_list: bool,

    /// Extra error type names added to the model
    pub additional_errors: BTreeSet<String>,

    /// Operation name -> input description replacing the computed one
    pub operation_input_overrides: BTreeMap<String, OperationInputDescription>,

    /// Operation name -> output description replacing the computed one
    pub operation_output_overrides: BTreeMap<String, OperationOutputDescription>,

    /// Type name -> field name -> default value, for emitters
    pub named_field_values_override: BTreeMap<String, BTreeMap<String, String>>,

    /// Field type name -> raw type used by emitters
    pub field_raw_type_override: BTreeMap<String, String>,
}

impl ModelOverride {
    /// Load overrides from a JSON or YAML file, chosen by extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GeneratorError::Parse(format!("Failed to read override file {:?}: {}", path, e))
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            GeneratorError::Parse(format!("Failed to parse override JSON: {}", e))
        })
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| {
            GeneratorError::Parse(format!("Failed to parse override YAML: {}", e))
        })
    }

    pub fn ignores_operation(&self, operation_name: &str) -> bool {
        pattern::any_matches(&self.ignore_operations, &[operation_name])
    }

    pub fn ignores_request_header(&self, operation_name: &str, header: &str) -> bool {
        pattern::any_matches(&self.ignore_request_headers, &[operation_name, header])
    }

    pub fn ignores_response_header(&self, operation_name: &str, code: &str, header: &str) -> bool {
        pattern::any_matches(
            &self.ignore_response_headers,
            &[operation_name, code, header],
        )
    }
}
