//! Operation decomposition
//!
//! Splits an HTTP operation into path, query, header and body members,
//! assembles the input and output structures under names prefixed by the
//! operation name, and maps status codes to output and error types.

use super::lowering::{merge_members, SchemaLowering};
use super::types::{Operation, Response, Schema, SchemaKind};
use crate::operation_mapper::{ResponseClassifier, ResponseKind};
use service_model_generator_common::naming::{to_lower_camel_case, to_upper_camel_case};
use service_model_generator_common::{
    ErrorDescription, GeneratorError, InputLocation, Member, OperationDescription,
    OperationInputDescription, OperationOutputDescription, Result, ServiceModel, Structure,
    UnsupportedConstruct,
};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Decomposes operations into model types
pub struct OperationDecomposer<'a> {
    lowering: &'a SchemaLowering<'a>,
}

impl<'a> OperationDecomposer<'a> {
    pub fn new(lowering: &'a SchemaLowering<'a>) -> Self {
        Self { lowering }
    }

    /// Decompose one operation
    ///
    /// `operation` must already carry its path-level parameters (see
    /// [`PathItem::merged_operation`](super::types::PathItem::merged_operation)).
    pub fn decompose(
        &self,
        model: &mut ServiceModel,
        operation_name: &str,
        http_verb: &str,
        url_template: &str,
        operation: &Operation,
    ) -> Result<OperationDescription> {
        let prefix = to_upper_camel_case(operation_name);

        let (input, input_description) =
            self.decompose_input(model, operation_name, &prefix, url_template, operation)?;
        let (output, output_description, errors) =
            self.decompose_responses(model, operation_name, &prefix, operation)?;

        debug!(
            operation = operation_name,
            verb = http_verb,
            url = url_template,
            input = ?input,
            output = ?output,
            errors = errors.len(),
            "decomposed operation"
        );

        Ok(OperationDescription {
            input,
            output,
            errors,
            input_description,
            output_description,
            http_verb: http_verb.to_string(),
            http_url_template: url_template.to_string(),
            documentation: operation.documentation(),
        })
    }

    fn decompose_input(
        &self,
        model: &mut ServiceModel,
        operation_name: &str,
        prefix: &str,
        url_template: &str,
        operation: &Operation,
    ) -> Result<(Option<String>, OperationInputDescription)> {
        let mut description = OperationInputDescription {
            path_template_field: greedy_placeholder(url_template).map(to_lower_camel_case),
            ..OperationInputDescription::default()
        };

        let request_prefix = format!("{}Request", prefix);
        let body = self.request_body(model, operation_name, &request_prefix, operation)?;

        let mut members = BTreeMap::new();
        let spec = self.lowering.spec();
        for parameter in &operation.parameters {
            let parameter = spec.resolve_parameter(parameter)?;
            let location = format!("{}.{}", operation_name, parameter.name);

            let fields = match parameter.location.as_str() {
                "path" => &mut description.path_fields,
                "query" => &mut description.query_fields,
                "header" => {
                    if self
                        .lowering
                        .overrides()
                        .ignores_request_header(operation_name, &parameter.name)
                    {
                        debug!(operation = operation_name, header = %parameter.name, "request header ignored");
                        continue;
                    }
                    &mut description.additional_header_fields
                }
                // Swagger 2.0 body parameters are the request body
                "body" => continue,
                "cookie" => {
                    return Err(GeneratorError::unsupported(
                        UnsupportedConstruct::CookieParameter,
                        location,
                    ))
                }
                other => {
                    return Err(GeneratorError::unsupported(
                        UnsupportedConstruct::ParameterLocation(other.to_string()),
                        location,
                    ))
                }
            };

            let type_name = self.scalar_type_name(
                model,
                format!("{}{}", request_prefix, to_upper_camel_case(&parameter.name)),
                parameter.value_schema(),
                &location,
            )?;

            let member_name = to_lower_camel_case(&parameter.name);
            if members.contains_key(&member_name) {
                return Err(claimed_twice(operation_name, &member_name));
            }
            let location_name = (member_name != parameter.name).then(|| parameter.name.clone());

            fields.insert(member_name.clone());
            members.insert(
                member_name,
                Member::new(type_name, parameter.required || parameter.location == "path")
                    .with_location_name(location_name)
                    .with_documentation(parameter.description.clone()),
            );
        }

        description.default_input_location = if description.query_fields.is_empty() {
            InputLocation::Body
        } else {
            InputLocation::Query
        };

        if let Some(body) = &body {
            let body_members = structure_members(model, body, operation_name)?;
            for (name, member) in body_members {
                if members.contains_key(&name) {
                    return Err(claimed_twice(operation_name, &name));
                }
                description.body_fields.insert(name.clone());
                members.insert(name, member);
            }
            description.body_structure_type_name = Some(body.clone());
        }

        let input = match body {
            None if members.is_empty() => None,
            Some(body) if description.body_fields.len() == members.len() => Some(body),
            _ => {
                let name = request_prefix;
                insert_synthetic_structure(model, &name, Structure::from_members(members, None))?;
                Some(name)
            }
        };

        Ok((input, description))
    }

    /// Type name of the request body, lowering it when inline
    fn request_body(
        &self,
        model: &mut ServiceModel,
        operation_name: &str,
        request_prefix: &str,
        operation: &Operation,
    ) -> Result<Option<String>> {
        let spec = self.lowering.spec();

        let schema = match &operation.request_body {
            Some(body) => spec.resolve_request_body(body)?.schema(),
            None => {
                let mut body_parameter = None;
                for parameter in &operation.parameters {
                    let parameter = spec.resolve_parameter(parameter)?;
                    if parameter.location == "body" {
                        body_parameter = Some(parameter);
                        break;
                    }
                }
                body_parameter.map(|parameter| parameter.value_schema())
            }
        };

        schema
            .map(|schema| self.body_type_name(model, request_prefix, schema, operation_name))
            .transpose()
    }

    fn decompose_responses(
        &self,
        model: &mut ServiceModel,
        operation_name: &str,
        prefix: &str,
        operation: &Operation,
    ) -> Result<(Option<String>, OperationOutputDescription, Vec<ErrorDescription>)> {
        let spec = self.lowering.spec();

        let mut responses = Vec::with_capacity(operation.responses.len());
        for (key, response) in &operation.responses {
            match ResponseClassifier::parse_status(key, operation_name)? {
                Some(code) => responses.push((code, spec.resolve_response(response)?)),
                None => debug!(operation = operation_name, "default response skipped"),
            }
        }
        responses.sort_by_key(|(code, _)| *code);

        let mut success_seen = false;
        let mut output = None;
        let mut output_description = OperationOutputDescription::default();
        let mut errors = Vec::new();

        for (code, response) in responses {
            let kind = ResponseClassifier::classify(code);
            if kind == ResponseKind::Success && success_seen {
                warn!(operation = operation_name, code, "additional success response ignored");
                continue;
            }

            let shape = self.response_shape(model, operation_name, prefix, code, response)?;
            match kind {
                ResponseKind::Success => {
                    success_seen = true;
                    if let Some((type_name, description)) = shape {
                        output = Some(type_name);
                        output_description = description;
                    }
                }
                ResponseKind::Error => match shape {
                    Some((type_name, _)) => {
                        model.error_types.insert(type_name.clone());
                        errors.push(ErrorDescription { type_name, code });
                    }
                    None => {
                        debug!(operation = operation_name, code, "error response without a body or headers")
                    }
                },
            }
        }

        Ok((output, output_description, errors))
    }

    /// Output type of one response and how it maps onto the HTTP response
    fn response_shape(
        &self,
        model: &mut ServiceModel,
        operation_name: &str,
        prefix: &str,
        code: u16,
        response: &Response,
    ) -> Result<Option<(String, OperationOutputDescription)>> {
        let code_prefix = format!("{}{}", prefix, code);
        let response_prefix = format!("{}Response", code_prefix);
        let location = format!("{}.{}", operation_name, code);

        let body = response
            .body_schema()
            .map(|schema| self.body_type_name(model, &response_prefix, schema, &location))
            .transpose()?;

        let mut header_members = BTreeMap::new();
        for (header_name, header) in &response.headers {
            if self.lowering.overrides().ignores_response_header(
                operation_name,
                &code.to_string(),
                header_name,
            ) {
                debug!(operation = operation_name, code, header = %header_name, "response header ignored");
                continue;
            }

            let type_name = self.scalar_type_name(
                model,
                format!("{}{}", code_prefix, to_upper_camel_case(header_name)),
                header.value_schema(),
                &format!("{}.{}", location, header_name),
            )?;
            let member_name = to_lower_camel_case(header_name);
            if header_members.contains_key(&member_name) {
                return Err(claimed_twice(operation_name, &member_name));
            }
            let location_name = (member_name != *header_name).then(|| header_name.clone());
            header_members.insert(
                member_name,
                Member::new(type_name, false)
                    .with_location_name(location_name)
                    .with_documentation(header.description.clone()),
            );
        }

        let mut description = OperationOutputDescription::default();
        let mut members = BTreeMap::new();
        if let Some(body) = &body {
            let body_members = structure_members(model, body, operation_name)?;
            description.body_fields = body_members.keys().cloned().collect();
            description.body_structure_type_name = Some(body.clone());
            members = body_members;
        }

        if header_members.is_empty() {
            return Ok(body.map(|body| (body, description)));
        }

        for (name, member) in header_members {
            if members.contains_key(&name) {
                return Err(claimed_twice(operation_name, &name));
            }
            description.header_fields.insert(name.clone());
            members.insert(name, member);
        }

        insert_synthetic_structure(
            model,
            &response_prefix,
            Structure::from_members(members, response.description.clone()),
        )?;
        Ok(Some((response_prefix, description)))
    }

    /// Type name of a request or response body
    ///
    /// Inline bodies are registered as `<prefix>Body`; branch `i` of a union
    /// body is registered as `<prefix><i>Body`.
    fn body_type_name(
        &self,
        model: &mut ServiceModel,
        prefix: &str,
        schema: &Schema,
        location: &str,
    ) -> Result<String> {
        let non_object_body =
            || GeneratorError::unsupported(UnsupportedConstruct::NonObjectBody, location);

        if let Some(ref_path) = &schema.ref_path {
            let (_, target) = self.lowering.spec().resolve_schema_alias(ref_path)?;
            return match target.kind() {
                SchemaKind::Union => self.lowering.reference_type_name(ref_path),
                SchemaKind::Object if !target.is_map() => {
                    self.lowering.reference_type_name(ref_path)
                }
                _ => Err(non_object_body()),
            };
        }

        let name = format!("{}Body", prefix);
        match schema.kind() {
            SchemaKind::Object if !schema.is_map() => {
                let previous = model.structure(&name).cloned();
                let mut lowered_name = name.clone();
                self.lowering.lower(model, &mut lowered_name, schema)?;
                if let Some(previous) = previous {
                    if model.structure(&name) != Some(&previous) {
                        return Err(conflicting_structure(&name));
                    }
                }
                Ok(name)
            }
            SchemaKind::Union => {
                let mut members = BTreeMap::new();
                for (index, branch) in schema.union_branches().enumerate() {
                    let branch_prefix = format!("{}{}", prefix, index + 1);
                    let branch_type = self.body_type_name(model, &branch_prefix, branch, location)?;
                    merge_members(&mut members, structure_members(model, &branch_type, location)?);
                }
                merge_members(
                    &mut members,
                    self.lowering.object_members(model, &name, schema)?,
                );
                for key in &schema.required {
                    if let Some(member) = members.get_mut(key) {
                        member.required = true;
                    }
                }

                insert_synthetic_structure(
                    model,
                    &name,
                    Structure::from_members(members, schema.description.clone()),
                )?;
                Ok(name)
            }
            _ => Err(non_object_body()),
        }
    }

    /// Type name of a parameter or header: a primitive or list
    fn scalar_type_name(
        &self,
        model: &mut ServiceModel,
        proposed_name: String,
        schema: &Schema,
        location: &str,
    ) -> Result<String> {
        let structure_parameter =
            || GeneratorError::unsupported(UnsupportedConstruct::StructureParameter, location);

        if let Some(ref_path) = &schema.ref_path {
            let (_, target) = self.lowering.spec().resolve_schema_alias(ref_path)?;
            return match target.kind() {
                SchemaKind::Object | SchemaKind::Union => Err(structure_parameter()),
                _ => self.lowering.reference_type_name(ref_path),
            };
        }

        match schema.kind() {
            SchemaKind::Object | SchemaKind::Union => Err(structure_parameter()),
            _ => self.lowering.type_name_for(model, proposed_name, schema),
        }
    }
}

/// Member name of a greedy `{name+}` placeholder in a URL template
fn greedy_placeholder(url_template: &str) -> Option<&str> {
    url_template
        .split('/')
        .filter_map(|segment| segment.strip_prefix('{')?.strip_suffix("+}"))
        .next()
}

fn structure_members(
    model: &ServiceModel,
    type_name: &str,
    referrer: &str,
) -> Result<BTreeMap<String, Member>> {
    model
        .structure(type_name)
        .map(|structure| structure.members.clone())
        .ok_or_else(|| GeneratorError::UnresolvedType {
            type_name: type_name.to_string(),
            referrer: referrer.to_string(),
        })
}

/// Register a structure assembled during decomposition
///
/// Re-registering an identical structure is allowed; a different shape under
/// the same name is not.
fn insert_synthetic_structure(
    model: &mut ServiceModel,
    name: &str,
    structure: Structure,
) -> Result<()> {
    if let Some(existing) = model.structure(name) {
        if *existing != structure {
            return Err(conflicting_structure(name));
        }
    }
    model.insert_structure(name, structure);
    Ok(())
}

fn conflicting_structure(name: &str) -> GeneratorError {
    GeneratorError::Ambiguous {
        name: name.to_string(),
        reason: "a structure with this name already exists with a different shape".to_string(),
    }
}

fn claimed_twice(operation_name: &str, member_name: &str) -> GeneratorError {
    GeneratorError::Ambiguous {
        name: format!("{}.{}", operation_name, member_name),
        reason: "the member name is claimed by more than one location".to_string(),
    }
}
