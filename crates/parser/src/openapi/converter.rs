//! Converts an OpenAPI document into a ServiceModel

use super::decomposer::OperationDecomposer;
use super::lowering::SchemaLowering;
use super::types::OpenApiSpec;
use service_model_generator_common::{
    GeneratorError, ModelOverride, Result, ServiceInformation, ServiceModel,
};
use tracing::{debug, info};

/// Build the service model for a document
///
/// Top-level schemas are lowered first, in name order, then every operation
/// in path order. Any unsupported construct aborts the build.
pub fn build_service_model(spec: &OpenApiSpec, overrides: &ModelOverride) -> Result<ServiceModel> {
    let mut model = ServiceModel::new(ServiceInformation {
        title: spec.info.title.clone(),
        version: spec.info.version.clone(),
        description: spec.info.description.clone(),
    });

    let type_mappings = SchemaLowering::top_level_type_mappings(spec)?;
    let lowering = SchemaLowering::new(spec, overrides, &type_mappings);

    for (name, schema) in spec.schemas() {
        let mut type_name = name.clone();
        lowering.lower(&mut model, &mut type_name, schema)?;
    }

    let decomposer = OperationDecomposer::new(&lowering);
    for (path, path_item) in &spec.paths {
        for (http_verb, operation) in path_item.operations() {
            let operation_name = operation
                .operation_id
                .clone()
                .unwrap_or_else(|| OpenApiSpec::operation_name_from_path(http_verb, path));

            if overrides.ignores_operation(&operation_name) {
                debug!(operation = %operation_name, "operation ignored");
                continue;
            }
            if model.operation_descriptions.contains_key(&operation_name) {
                return Err(GeneratorError::Ambiguous {
                    name: operation_name,
                    reason: "the operation is declared more than once".to_string(),
                });
            }

            let merged = path_item.merged_operation(operation);
            let mut description =
                decomposer.decompose(&mut model, &operation_name, http_verb, path, &merged)?;

            if let Some(input) = overrides.operation_input_overrides.get(&operation_name) {
                description.input_description = input.clone();
            }
            if let Some(output) = overrides.operation_output_overrides.get(&operation_name) {
                description.output_description = output.clone();
            }

            model.operation_descriptions.insert(operation_name, description);
        }
    }

    model
        .error_types
        .extend(overrides.additional_errors.iter().cloned());
    model.type_mappings = type_mappings;

    info!(
        title = %model.service_information.title,
        fields = model.field_descriptions.len(),
        structures = model.structure_descriptions.len(),
        operations = model.operation_descriptions.len(),
        errors = model.error_types.len(),
        "built service model"
    );

    Ok(model)
}
