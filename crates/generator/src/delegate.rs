//! Emission hooks
//!
//! The generator asks a `CodegenDelegate` for every naming and typing
//! decision that depends on the target language, so emitters for other
//! conventions only need another delegate.

use service_model_generator_common::naming::{
    escape_reserved_word, sanitize_identifier, to_snake_case, to_upper_camel_case,
    RUST_RESERVED_WORDS,
};
use service_model_generator_common::{Field, ModelOverride};

/// One method per emission hook
#[cfg_attr(test, mockall::automock)]
pub trait CodegenDelegate {
    /// Identifier for a model type
    fn type_name(&self, type_name: &str) -> String;

    /// Identifier for a structure member or client method
    fn member_name(&self, member_name: &str) -> String;

    /// Target type to use instead of the default mapping of `field`
    fn raw_type_override(&self, type_name: &str, field: &Field) -> Option<String>;

    /// Default value of a structure member
    fn named_field_value(&self, type_name: &str, member_name: &str) -> Option<String>;

    /// Text placed at the top of every generated source file
    fn file_header(&self) -> Option<String>;
}

/// Rust naming conventions plus the emitter settings of a `ModelOverride`
#[derive(Debug, Clone, Default)]
pub struct RustDelegate {
    overrides: ModelOverride,
}

impl RustDelegate {
    pub fn new(overrides: ModelOverride) -> Self {
        Self { overrides }
    }
}

impl CodegenDelegate for RustDelegate {
    fn type_name(&self, type_name: &str) -> String {
        sanitize_identifier(&to_upper_camel_case(type_name))
    }

    fn member_name(&self, member_name: &str) -> String {
        escape_reserved_word(
            &sanitize_identifier(&to_snake_case(member_name)),
            RUST_RESERVED_WORDS,
        )
    }

    fn raw_type_override(&self, type_name: &str, _field: &Field) -> Option<String> {
        self.overrides.field_raw_type_override.get(type_name).cloned()
    }

    fn named_field_value(&self, type_name: &str, member_name: &str) -> Option<String> {
        self.overrides
            .named_field_values_override
            .get(type_name)
            .and_then(|values| values.get(member_name))
            .cloned()
    }

    fn file_header(&self) -> Option<String> {
        Some("// Generated by service-model-generator. Do not edit.".to_string())
    }
}
