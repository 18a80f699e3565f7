//! Code generation for service models
//!
//! This crate renders a `ServiceModel` into a Rust client crate: model
//! types, an error enum, a client trait with a mock implementation, and the
//! crate manifest. Naming and typing decisions go through a
//! [`CodegenDelegate`].

mod delegate;
mod templates;
mod views;

pub use delegate::{CodegenDelegate, RustDelegate};

use service_model_generator_common::naming::to_snake_case;
use service_model_generator_common::{
    Field, GeneratorError, ModelOverride, Result, ServiceModel, TypeLookup,
};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tera::Tera;
use tracing::debug;
use views::{
    describe_constraints, AliasView, CaseView, DefaultView, EnumerationView, ErrorView,
    MemberView, OperationView, StructureView,
};

/// Files of the generated crate: template name and path relative to the root
const OUTPUT_FILES: &[(&str, &str)] = &[
    ("Cargo.toml", "Cargo.toml"),
    ("lib.rs", "src/lib.rs"),
    ("model.rs", "src/model.rs"),
    ("errors.rs", "src/errors.rs"),
    ("client.rs", "src/client.rs"),
];

/// Service model generator
///
/// Transforms a ServiceModel into a client crate:
/// - src/model.rs (type aliases, enumerations, structures)
/// - src/errors.rs (one variant per error type)
/// - src/client.rs (client trait and mock client)
/// - src/lib.rs
/// - Cargo.toml
///
/// Every type reference is resolved while rendering, so a dangling reference
/// in the model surfaces here as [`GeneratorError::UnresolvedType`].
pub struct ModelGenerator<'a, D: CodegenDelegate> {
    model: &'a ServiceModel,
    delegate: D,
    tera: Tera,
}

impl<'a> ModelGenerator<'a, RustDelegate> {
    /// Create a generator using Rust conventions and the given overrides
    pub fn with_overrides(model: &'a ServiceModel, overrides: ModelOverride) -> Result<Self> {
        Self::new(model, RustDelegate::new(overrides))
    }
}

impl<'a, D: CodegenDelegate> ModelGenerator<'a, D> {
    pub fn new(model: &'a ServiceModel, delegate: D) -> Result<Self> {
        let tera = templates::load_templates()?;
        Ok(Self {
            model,
            delegate,
            tera,
        })
    }

    /// Render every file, paired with its path relative to the crate root
    pub fn render(&self) -> Result<Vec<(PathBuf, String)>> {
        let context = self.create_context()?;

        OUTPUT_FILES
            .iter()
            .map(|(template, path)| {
                let rendered = self.tera.render(template, &context).map_err(|e| {
                    GeneratorError::Generation(format!("Template error in {}: {:?}", template, e))
                })?;
                Ok((PathBuf::from(path), rendered))
            })
            .collect()
    }

    /// Generate the crate into a directory
    ///
    /// Nothing is written unless every file renders.
    pub fn generate_to_directory(&self, output_dir: &Path) -> Result<Vec<PathBuf>> {
        let files = self.render()?;

        fs::create_dir_all(output_dir.join("src")).map_err(|e| {
            GeneratorError::Generation(format!("Failed to create output directory: {}", e))
        })?;

        let mut written = Vec::with_capacity(files.len());
        for (relative_path, contents) in files {
            let path = output_dir.join(&relative_path);
            fs::write(&path, contents).map_err(|e| {
                GeneratorError::Generation(format!(
                    "Failed to write {}: {}",
                    relative_path.display(),
                    e
                ))
            })?;
            debug!(path = %path.display(), "wrote generated file");
            written.push(path);
        }

        Ok(written)
    }

    /// Create template context from the ServiceModel
    fn create_context(&self) -> Result<tera::Context> {
        let info = &self.model.service_information;
        let service_name = if info.title.trim().is_empty() {
            "Service"
        } else {
            info.title.as_str()
        };

        let mut context = tera::Context::new();
        context.insert("title", &info.title);
        context.insert("version", &info.version);
        context.insert("description", &info.description);
        context.insert("header", &self.delegate.file_header());
        context.insert("crate_name", &crate_name(service_name));
        context.insert(
            "client_name",
            &format!("{}Client", self.delegate.type_name(service_name)),
        );

        let (aliases, enumerations) = self.field_views()?;
        context.insert("aliases", &aliases);
        context.insert("enumerations", &enumerations);
        context.insert("structures", &self.structure_views()?);
        context.insert("defaults", &self.default_views());
        context.insert("errors", &self.error_views());
        context.insert("operations", &self.operation_views()?);

        Ok(context)
    }

    /// Type aliases for plain fields and enums for enumerations
    fn field_views(&self) -> Result<(Vec<AliasView>, Vec<EnumerationView>)> {
        let mut aliases = Vec::new();
        let mut enumerations = Vec::new();

        for (name, field) in &self.model.field_descriptions {
            let type_name = self.delegate.type_name(name);
            let raw_type = self.delegate.raw_type_override(name, field);

            if let (Field::String(constraints), None) = (field, &raw_type) {
                if constraints.is_enumeration() {
                    enumerations.push(EnumerationView {
                        name: type_name,
                        cases: constraints
                            .value_constraints
                            .iter()
                            .map(|(case, value)| CaseView {
                                name: case.clone(),
                                value: value.clone(),
                            })
                            .collect(),
                    });
                    continue;
                }
            }

            let rust_type = match raw_type {
                Some(rust_type) => rust_type,
                None => self.field_type(name, field)?,
            };
            aliases.push(AliasView {
                name: type_name,
                rust_type,
                constraints: describe_constraints(field),
            });
        }

        Ok((aliases, enumerations))
    }

    fn field_type(&self, name: &str, field: &Field) -> Result<String> {
        Ok(match field {
            Field::Boolean => "bool".to_string(),
            Field::Integer { .. } => "i32".to_string(),
            Field::Long { .. } => "i64".to_string(),
            Field::Double { .. } => "f64".to_string(),
            // RFC 3339 text
            Field::String(_) | Field::Timestamp => "String".to_string(),
            Field::Binary => "Vec<u8>".to_string(),
            Field::List {
                element_type_name, ..
            } => format!("Vec<{}>", self.type_reference(element_type_name, name)?),
            Field::Map {
                key_type_name,
                value_type_name,
                ..
            } => format!(
                "BTreeMap<{}, {}>",
                self.type_reference(key_type_name, name)?,
                self.type_reference(value_type_name, name)?
            ),
        })
    }

    /// Target name of a referenced type, failing when it is not in the model
    fn type_reference(&self, type_name: &str, referrer: &str) -> Result<String> {
        self.model.resolve(type_name, referrer)?;
        Ok(self.delegate.type_name(type_name))
    }

    fn structure_views(&self) -> Result<Vec<StructureView>> {
        let mut views = Vec::with_capacity(self.model.structure_descriptions.len());

        for (name, structure) in &self.model.structure_descriptions {
            let mut members = Vec::with_capacity(structure.members.len());
            for (member_name, member) in structure.ordered_members() {
                let referrer = format!("{}.{}", name, member_name);
                let lookup = self.model.resolve(&member.value_type_name, &referrer)?;

                let mut rust_type = self.delegate.type_name(&member.value_type_name);
                if matches!(lookup, TypeLookup::Structure(_))
                    && self.reaches(&member.value_type_name, name)
                {
                    rust_type = format!("Box<{}>", rust_type);
                }
                if !member.required {
                    rust_type = format!("Option<{}>", rust_type);
                }

                let rust_name = self.delegate.member_name(member_name);
                let wire_name = member
                    .location_name
                    .clone()
                    .unwrap_or_else(|| member_name.clone());
                members.push(MemberView {
                    rename: rust_name != wire_name,
                    name: rust_name,
                    wire_name,
                    rust_type,
                    required: member.required,
                    documentation: member.documentation.clone(),
                });
            }

            views.push(StructureView {
                name: self.delegate.type_name(name),
                documentation: structure.documentation.clone(),
                members,
            });
        }

        Ok(views)
    }

    /// Whether structure `from` contains `target` without indirection
    fn reaches(&self, from: &str, target: &str) -> bool {
        let mut visited = BTreeSet::new();
        let mut pending = vec![from];

        while let Some(current) = pending.pop() {
            if current == target {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(structure) = self.model.structure(current) {
                pending.extend(
                    structure
                        .members
                        .values()
                        .map(|member| member.value_type_name.as_str())
                        .filter(|type_name| self.model.structure(type_name).is_some()),
                );
            }
        }

        false
    }

    fn default_views(&self) -> Vec<DefaultView> {
        let mut views = Vec::new();
        for (name, structure) in &self.model.structure_descriptions {
            for member_name in structure.members.keys() {
                if let Some(value) = self.delegate.named_field_value(name, member_name) {
                    views.push(DefaultView {
                        const_name: format!(
                            "{}_{}_DEFAULT",
                            to_snake_case(name).to_uppercase(),
                            to_snake_case(member_name).to_uppercase()
                        ),
                        type_name: self.delegate.type_name(name),
                        member: self.delegate.member_name(member_name),
                        value,
                    });
                }
            }
        }
        views
    }

    /// One variant per error type
    ///
    /// Error names with no registered type (added through `additionalErrors`)
    /// become variants without a payload.
    fn error_views(&self) -> Vec<ErrorView> {
        self.model
            .error_types
            .iter()
            .map(|type_name| {
                let rust_name = self.delegate.type_name(type_name);
                let payload = match self.model.lookup(type_name) {
                    TypeLookup::NotFound => None,
                    _ => Some(rust_name.clone()),
                };
                ErrorView {
                    variant: rust_name,
                    type_name: payload,
                }
            })
            .collect()
    }

    fn operation_views(&self) -> Result<Vec<OperationView>> {
        let mut views = Vec::with_capacity(self.model.operation_descriptions.len());

        for (name, operation) in &self.model.operation_descriptions {
            let input = operation
                .input
                .as_deref()
                .map(|type_name| self.type_reference(type_name, name))
                .transpose()?;
            let output = match operation.output.as_deref() {
                Some(type_name) => format!("model::{}", self.type_reference(type_name, name)?),
                None => "()".to_string(),
            };
            let errors = operation
                .errors
                .iter()
                .map(|error| {
                    Ok(format!(
                        "{}: {}",
                        error.code,
                        self.type_reference(&error.type_name, name)?
                    ))
                })
                .collect::<Result<Vec<_>>>()?;

            views.push(OperationView {
                operation_name: name.clone(),
                method_name: self.delegate.member_name(name),
                http_verb: operation.http_verb.clone(),
                url: operation.http_url_template.clone(),
                documentation: operation.documentation.clone(),
                input,
                output,
                errors,
            });
        }

        Ok(views)
    }
}

/// Cargo package name for a service title
fn crate_name(title: &str) -> String {
    let name = to_snake_case(title).replace('_', "-");
    if name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        name
    } else {
        format!("service-{}", name)
    }
}

/// Generate a client crate for a model (convenience function)
pub fn generate_crate(
    model: &ServiceModel,
    overrides: ModelOverride,
    output_path: &Path,
) -> Result<Vec<PathBuf>> {
    let generator = ModelGenerator::with_overrides(model, overrides)?;
    generator.generate_to_directory(output_path)
}
