//! Schema lowering
//!
//! Walks a schema node and writes the fields and structures it describes
//! into the service model's flat registries. Nested schemas get synthetic
//! names derived from their parent (`Widget` + `id` → `WidgetId`);
//! references are never followed into new types, the referring member just
//! uses the referenced name.

use super::types::{OpenApiSpec, Schema, SchemaKind};
use crate::type_mapper::FieldMapper;
use service_model_generator_common::naming::{pluralize_container, synthesize};
use service_model_generator_common::{
    Field, GeneratorError, LengthRangeConstraint, Member, ModelOverride, Result, ServiceModel,
    StringConstraints, Structure, UnsupportedConstruct,
};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Lowers schemas of one document into a service model
pub struct SchemaLowering<'a> {
    spec: &'a OpenApiSpec,
    overrides: &'a ModelOverride,
    type_mappings: &'a BTreeMap<String, String>,
}

impl<'a> SchemaLowering<'a> {
    pub fn new(
        spec: &'a OpenApiSpec,
        overrides: &'a ModelOverride,
        type_mappings: &'a BTreeMap<String, String>,
    ) -> Self {
        Self {
            spec,
            overrides,
            type_mappings,
        }
    }

    pub fn spec(&self) -> &'a OpenApiSpec {
        self.spec
    }

    pub fn overrides(&self) -> &'a ModelOverride {
        self.overrides
    }

    /// Top-level schemas that are registered under a different name
    ///
    /// Arrays are renamed by the plural heuristic; aliases (a schema that is
    /// only a `$ref`) map to the name of the type at the end of their chain.
    /// References resolve through this table. An alias whose chain ends at a
    /// missing schema is left unmapped and surfaces when resolved.
    pub fn top_level_type_mappings(spec: &OpenApiSpec) -> Result<BTreeMap<String, String>> {
        let mut mappings = BTreeMap::new();

        for (name, schema) in spec.schemas() {
            let (target_name, target) = match &schema.ref_path {
                Some(ref_path) => match spec.resolve_schema_alias(ref_path) {
                    Ok(resolved) => resolved,
                    Err(GeneratorError::UnresolvedType { .. }) => continue,
                    Err(err) => return Err(err),
                },
                None => (name.as_str(), schema),
            };

            let mut renamed = target_name.to_string();
            if target.kind() == SchemaKind::Array {
                pluralize_container(&mut renamed);
            }
            if renamed != *name {
                mappings.insert(name.clone(), renamed);
            }
        }

        Ok(mappings)
    }

    /// Registered type name for a `$ref`
    pub fn reference_type_name(&self, ref_path: &str) -> Result<String> {
        let name = OpenApiSpec::schema_name_from_ref(ref_path)?;
        Ok(self
            .type_mappings
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string()))
    }

    /// Lower `schema` under `name`
    ///
    /// `name` may be rewritten (arrays are pluralized); callers refer to the
    /// lowered type by its value afterwards. References are a no-op.
    pub fn lower(&self, model: &mut ServiceModel, name: &mut String, schema: &Schema) -> Result<()> {
        match schema.kind() {
            SchemaKind::Reference => Ok(()),
            SchemaKind::Boolean | SchemaKind::Integer | SchemaKind::Number | SchemaKind::String => {
                let field = self.primitive_field(schema, name)?;
                debug!(name = %name, "lowered field");
                model.insert_field(name.clone(), field);
                Ok(())
            }
            SchemaKind::Object if schema.is_map() => self.lower_map(model, name, schema),
            SchemaKind::Object => {
                let members = self.object_members(model, name, schema)?;
                debug!(name = %name, members = members.len(), "lowered structure");
                model.insert_structure(
                    name.clone(),
                    Structure::from_members(members, schema.description.clone()),
                );
                Ok(())
            }
            SchemaKind::Array => self.lower_array(model, name, schema),
            SchemaKind::Union => self.lower_union(model, name, schema),
            SchemaKind::Unsupported(construct) => {
                Err(GeneratorError::unsupported(construct, name.as_str()))
            }
        }
    }

    /// Type name a schema is known by: the referenced name for a reference,
    /// otherwise `proposed_name` (possibly rewritten) after lowering
    pub fn type_name_for(
        &self,
        model: &mut ServiceModel,
        proposed_name: String,
        schema: &Schema,
    ) -> Result<String> {
        if let Some(ref_path) = &schema.ref_path {
            return self.reference_type_name(ref_path);
        }

        let mut name = proposed_name;
        self.lower(model, &mut name, schema)?;
        Ok(name)
    }

    /// Members for the properties of an object, in sorted key order
    pub fn object_members(
        &self,
        model: &mut ServiceModel,
        enclosing_name: &str,
        schema: &Schema,
    ) -> Result<Vec<(String, Member)>> {
        if schema.map_value_schema().is_some() {
            warn!(
                name = enclosing_name,
                "additionalProperties ignored on an object with declared properties"
            );
        }

        let mut members = Vec::with_capacity(schema.properties.len());
        for (key, property) in &schema.properties {
            let type_name =
                self.type_name_for(model, synthesize(enclosing_name, key), property)?;
            let member = Member::new(type_name, schema.is_required(key))
                .with_documentation(property.description.clone());
            members.push((key.clone(), member));
        }

        Ok(members)
    }

    fn primitive_field(&self, schema: &Schema, name: &str) -> Result<Field> {
        FieldMapper::map_primitive(schema, self.overrides)
            .ok_or_else(|| GeneratorError::unsupported(UnsupportedConstruct::UntypedSchema, name))
    }

    fn lower_map(&self, model: &mut ServiceModel, name: &str, schema: &Schema) -> Result<()> {
        let Some(value_schema) = schema.map_value_schema() else {
            return Err(GeneratorError::unsupported(
                UnsupportedConstruct::MapValueType,
                name,
            ));
        };

        let value_type_name = match (&value_schema.ref_path, value_schema.kind()) {
            (Some(ref_path), _) => self.reference_type_name(ref_path)?,
            (None, SchemaKind::String) => {
                let value_name = format!("{}Value", name);
                let field = self.primitive_field(value_schema, &value_name)?;
                model.insert_field(value_name.clone(), field);
                value_name
            }
            _ => {
                return Err(GeneratorError::unsupported(
                    UnsupportedConstruct::MapValueType,
                    name,
                ))
            }
        };

        let key_type_name = format!("{}Key", name);
        model.insert_field(
            key_type_name.clone(),
            Field::String(StringConstraints::default()),
        );

        debug!(name = %name, value = %value_type_name, "lowered map");
        model.insert_field(
            name,
            Field::Map {
                key_type_name,
                value_type_name,
                length_constraint: LengthRangeConstraint::new(
                    schema.min_properties,
                    schema.max_properties,
                ),
            },
        );
        Ok(())
    }

    fn lower_array(&self, model: &mut ServiceModel, name: &mut String, schema: &Schema) -> Result<()> {
        let element_name = pluralize_container(name);
        let Some(items) = schema.items.as_deref() else {
            return Err(GeneratorError::unsupported(
                UnsupportedConstruct::UntypedSchema,
                format!("{}[]", name),
            ));
        };

        let element_type_name = self.type_name_for(model, element_name, items)?;
        if element_type_name == *name {
            return Err(GeneratorError::Ambiguous {
                name: name.clone(),
                reason: "a nested array and its container lower to the same name".to_string(),
            });
        }

        debug!(name = %name, element = %element_type_name, "lowered list");
        model.insert_field(
            name.clone(),
            Field::List {
                element_type_name,
                length_constraint: LengthRangeConstraint::new(schema.min_items, schema.max_items),
            },
        );
        Ok(())
    }

    fn lower_union(&self, model: &mut ServiceModel, name: &str, schema: &Schema) -> Result<()> {
        let mut visited = vec![name.to_string()];
        let members = self.union_members(model, name, schema, &mut visited)?;

        debug!(name = %name, members = members.len(), "lowered union");
        model.insert_structure(
            name,
            Structure::from_members(members, schema.description.clone()),
        );
        Ok(())
    }

    /// Members contributed by every branch of a union
    ///
    /// Inline properties of branch `i` (1-based) are named after
    /// `<enclosing><i>`.
    fn union_members(
        &self,
        model: &mut ServiceModel,
        enclosing_name: &str,
        schema: &Schema,
        visited: &mut Vec<String>,
    ) -> Result<BTreeMap<String, Member>> {
        let mut members = BTreeMap::new();

        for (index, branch) in schema.union_branches().enumerate() {
            let branch_name = format!("{}{}", enclosing_name, index + 1);
            let branch_members = self.branch_members(model, &branch_name, branch, visited)?;
            merge_members(&mut members, branch_members);
        }

        // Properties declared next to the composition keywords
        let own_members = self.object_members(model, enclosing_name, schema)?;
        merge_members(&mut members, own_members);

        for key in &schema.required {
            if let Some(member) = members.get_mut(key) {
                member.required = true;
            }
        }

        Ok(members)
    }

    fn branch_members(
        &self,
        model: &mut ServiceModel,
        branch_name: &str,
        branch: &Schema,
        visited: &mut Vec<String>,
    ) -> Result<BTreeMap<String, Member>> {
        match (&branch.ref_path, branch.kind()) {
            (Some(ref_path), _) => {
                let target_name = self.reference_type_name(ref_path)?;
                if visited.contains(&target_name) {
                    return Err(GeneratorError::unsupported(
                        UnsupportedConstruct::CircularComposition(target_name),
                        branch_name,
                    ));
                }

                let (_, target) = self.spec.resolve_schema_alias(ref_path)?;
                visited.push(target_name.clone());
                let members = self.branch_members(model, &target_name, target, visited);
                visited.pop();
                members
            }
            (None, SchemaKind::Object) if !branch.is_map() => Ok(self
                .object_members(model, branch_name, branch)?
                .into_iter()
                .collect()),
            (None, SchemaKind::Union) => self.union_members(model, branch_name, branch, visited),
            _ => Err(GeneratorError::unsupported(
                UnsupportedConstruct::NonObjectUnionBranch,
                branch_name,
            )),
        }
    }
}

/// Merge members, keeping a member required once any source requires it
pub(crate) fn merge_members(
    into: &mut BTreeMap<String, Member>,
    from: impl IntoIterator<Item = (String, Member)>,
) {
    for (name, mut member) in from {
        if into.get(&name).is_some_and(|existing| existing.required) {
            member.required = true;
        }
        into.insert(name, member);
    }
}
