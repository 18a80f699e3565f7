//! Service model intermediate representation
//!
//! The model is a set of flat registries keyed by synthetic type name. Types
//! refer to each other by name only, which lets recursive and
//! mutually-referential schemas terminate: a reference is a lookup, never an
//! owned edge.

use crate::constraints::{LengthRangeConstraint, NumericRangeConstraint, StringConstraints};
use crate::{GeneratorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A primitive field description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Field {
    Boolean,
    Integer {
        #[serde(default)]
        range_constraint: NumericRangeConstraint<i64>,
    },
    Long {
        #[serde(default)]
        range_constraint: NumericRangeConstraint<i64>,
    },
    Double {
        #[serde(default)]
        range_constraint: NumericRangeConstraint<f64>,
    },
    String(StringConstraints),
    Timestamp,
    Binary,
    List {
        element_type_name: String,
        #[serde(default)]
        length_constraint: LengthRangeConstraint,
    },
    Map {
        key_type_name: String,
        value_type_name: String,
        #[serde(default)]
        length_constraint: LengthRangeConstraint,
    },
}

impl Field {
    /// Type names this field refers to (list elements, map keys and values)
    pub fn referenced_type_names(&self) -> Vec<&str> {
        match self {
            Field::List {
                element_type_name, ..
            } => vec![element_type_name.as_str()],
            Field::Map {
                key_type_name,
                value_type_name,
                ..
            } => vec![key_type_name.as_str(), value_type_name.as_str()],
            _ => Vec::new(),
        }
    }
}

/// A member of a structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Name of the member's type in one of the registries
    pub value_type_name: String,

    /// Declaration and serialization order within the structure
    pub position: usize,

    pub required: bool,

    /// Name on the wire when it differs from the member name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl Member {
    pub fn new(value_type_name: impl Into<String>, required: bool) -> Self {
        Self {
            value_type_name: value_type_name.into(),
            position: 0,
            required,
            location_name: None,
            documentation: None,
        }
    }

    pub fn with_documentation(mut self, documentation: Option<String>) -> Self {
        self.documentation = documentation;
        self
    }

    pub fn with_location_name(mut self, location_name: Option<String>) -> Self {
        self.location_name = location_name;
        self
    }
}

/// A structure description: named members plus documentation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Structure {
    pub members: BTreeMap<String, Member>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl Structure {
    /// Build a structure whose positions follow sorted member-name order
    pub fn from_members(
        members: impl IntoIterator<Item = (String, Member)>,
        documentation: Option<String>,
    ) -> Self {
        let mut structure = Self {
            members: members.into_iter().collect(),
            documentation,
        };
        structure.renumber_positions();
        structure
    }

    /// Reassign positions `0..N` in sorted member-name order
    pub fn renumber_positions(&mut self) {
        for (position, member) in self.members.values_mut().enumerate() {
            member.position = position;
        }
    }

    /// Members in position order
    pub fn ordered_members(&self) -> Vec<(&String, &Member)> {
        let mut members: Vec<_> = self.members.iter().collect();
        members.sort_by_key(|(_, member)| member.position);
        members
    }

    /// Whether positions are exactly `0..N` with no gaps or repeats
    pub fn has_contiguous_positions(&self) -> bool {
        let positions: BTreeSet<usize> = self.members.values().map(|m| m.position).collect();
        positions.len() == self.members.len() && positions.iter().copied().eq(0..positions.len())
    }

    pub fn member_names(&self) -> BTreeSet<String> {
        self.members.keys().cloned().collect()
    }
}

/// Where otherwise-unassigned input fields are carried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputLocation {
    #[default]
    Body,
    Query,
}

/// How an operation's input structure maps onto the HTTP request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperationInputDescription {
    pub path_fields: BTreeSet<String>,
    pub query_fields: BTreeSet<String>,
    pub body_fields: BTreeSet<String>,
    pub additional_header_fields: BTreeSet<String>,
    pub default_input_location: InputLocation,
    pub body_structure_type_name: Option<String>,
    pub path_template_field: Option<String>,
}

impl OperationInputDescription {
    /// Every member name assigned to a location
    pub fn all_fields(&self) -> BTreeSet<String> {
        self.path_fields
            .iter()
            .chain(&self.query_fields)
            .chain(&self.body_fields)
            .chain(&self.additional_header_fields)
            .cloned()
            .collect()
    }
}

/// How an operation's output structure maps onto the HTTP response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperationOutputDescription {
    pub body_fields: BTreeSet<String>,
    pub header_fields: BTreeSet<String>,
    pub body_structure_type_name: Option<String>,
    /// Member that receives the raw response body
    pub payload_as_member: Option<String>,
}

/// An error an operation can return
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDescription {
    pub type_name: String,
    pub code: u16,
}

/// A single HTTP operation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OperationDescription {
    pub input: Option<String>,
    pub output: Option<String>,
    pub errors: Vec<ErrorDescription>,
    pub input_description: OperationInputDescription,
    pub output_description: OperationOutputDescription,
    pub http_verb: String,
    pub http_url_template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

/// Title and version of the described service
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceInformation {
    pub title: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Result of looking up a type name
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypeLookup<'a> {
    Field(&'a Field),
    Structure(&'a Structure),
    NotFound,
}

/// The complete model of one service document
///
/// Built once by the parser and read by the generators. Registries are
/// ordered maps so every traversal is deterministic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceModel {
    pub service_information: ServiceInformation,

    /// Synthetic type name -> primitive field
    pub field_descriptions: BTreeMap<String, Field>,

    /// Synthetic type name -> structure
    pub structure_descriptions: BTreeMap<String, Structure>,

    /// Operation name -> operation
    pub operation_descriptions: BTreeMap<String, OperationDescription>,

    /// Every type name used as an error
    pub error_types: BTreeSet<String>,

    /// Document schema name -> name it was registered under
    pub type_mappings: BTreeMap<String, String>,
}

impl ServiceModel {
    pub fn new(service_information: ServiceInformation) -> Self {
        Self {
            service_information,
            ..Self::default()
        }
    }

    /// Insert a field, replacing any previous entry with the same name
    pub fn insert_field(&mut self, name: impl Into<String>, field: Field) {
        self.field_descriptions.insert(name.into(), field);
    }

    /// Insert a structure, replacing any previous entry with the same name
    pub fn insert_structure(&mut self, name: impl Into<String>, structure: Structure) {
        self.structure_descriptions.insert(name.into(), structure);
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.field_descriptions.get(name)
    }

    pub fn structure(&self, name: &str) -> Option<&Structure> {
        self.structure_descriptions.get(name)
    }

    pub fn operation(&self, name: &str) -> Option<&OperationDescription> {
        self.operation_descriptions.get(name)
    }

    /// Look a type name up in both registries
    pub fn lookup(&self, type_name: &str) -> TypeLookup<'_> {
        if let Some(field) = self.field_descriptions.get(type_name) {
            TypeLookup::Field(field)
        } else if let Some(structure) = self.structure_descriptions.get(type_name) {
            TypeLookup::Structure(structure)
        } else {
            TypeLookup::NotFound
        }
    }

    /// Look a type name up, failing when it is in neither registry
    ///
    /// `referrer` names the member or field holding the reference and is
    /// carried into the error.
    pub fn resolve(&self, type_name: &str, referrer: &str) -> Result<TypeLookup<'_>> {
        match self.lookup(type_name) {
            TypeLookup::NotFound => Err(GeneratorError::UnresolvedType {
                type_name: type_name.to_string(),
                referrer: referrer.to_string(),
            }),
            found => Ok(found),
        }
    }

    /// Check that every reference in the model resolves
    ///
    /// Building never calls this; consumers that want eager validation do.
    pub fn validate_references(&self) -> Result<()> {
        for (structure_name, structure) in &self.structure_descriptions {
            for (member_name, member) in &structure.members {
                self.resolve(
                    &member.value_type_name,
                    &format!("{}.{}", structure_name, member_name),
                )?;
            }
        }

        for (field_name, field) in &self.field_descriptions {
            for type_name in field.referenced_type_names() {
                self.resolve(type_name, field_name)?;
            }
        }

        for (operation_name, operation) in &self.operation_descriptions {
            let types = operation
                .input
                .iter()
                .chain(&operation.output)
                .chain(operation.errors.iter().map(|e| &e.type_name));
            for type_name in types {
                self.resolve(type_name, operation_name)?;
            }
        }

        Ok(())
    }
}
