//! Integration test for client crate generation

use service_model_generator_common::{
    ErrorDescription, Field, GeneratorError, LengthRangeConstraint, Member, ModelOverride,
    NumericRangeConstraint, OperationDescription, ServiceInformation, ServiceModel,
    StringConstraints, Structure,
};
use service_model_generator_generator::{generate_crate, ModelGenerator};
use std::collections::BTreeMap;
use tempfile::TempDir;

fn widget_service() -> ServiceModel {
    let mut model = ServiceModel::new(ServiceInformation {
        title: "Widget Store".to_string(),
        version: "1.2.0".to_string(),
        description: Some("Stores widgets".to_string()),
    });

    model.insert_field("WidgetId", Field::String(StringConstraints::default()));
    model.insert_field(
        "WidgetCount",
        Field::Integer {
            range_constraint: NumericRangeConstraint {
                minimum: Some(0),
                ..NumericRangeConstraint::default()
            },
        },
    );
    model.insert_field(
        "WidgetColor",
        Field::String(StringConstraints {
            value_constraints: vec![
                ("Red".to_string(), "red".to_string()),
                ("DarkBlue".to_string(), "dark-blue".to_string()),
            ],
            ..StringConstraints::default()
        }),
    );
    model.insert_field("WidgetTag", Field::String(StringConstraints::default()));
    model.insert_field(
        "WidgetTags",
        Field::List {
            element_type_name: "WidgetTag".to_string(),
            length_constraint: LengthRangeConstraint::new(None, Some(10)),
        },
    );
    model.insert_field("GetWidgetRequestId", Field::String(StringConstraints::default()));
    model.insert_field("ProblemMessage", Field::String(StringConstraints::default()));

    model.insert_structure(
        "Widget",
        Structure::from_members(
            vec![
                (
                    "id".to_string(),
                    Member::new("WidgetId", true).with_documentation(Some("Identifier".to_string())),
                ),
                ("count".to_string(), Member::new("WidgetCount", false)),
                ("color".to_string(), Member::new("WidgetColor", false)),
                ("tags".to_string(), Member::new("WidgetTags", false)),
                ("apiVersion".to_string(), Member::new("WidgetId", false)),
            ],
            Some("A widget".to_string()),
        ),
    );
    model.insert_structure(
        "GetWidgetRequest",
        Structure::from_members(
            vec![(
                "id".to_string(),
                Member::new("GetWidgetRequestId", true)
                    .with_location_name(Some("widget-id".to_string())),
            )],
            None,
        ),
    );
    model.insert_structure(
        "Problem",
        Structure::from_members(
            vec![("message".to_string(), Member::new("ProblemMessage", false))],
            None,
        ),
    );

    model.operation_descriptions.insert(
        "getWidget".to_string(),
        OperationDescription {
            input: Some("GetWidgetRequest".to_string()),
            output: Some("Widget".to_string()),
            errors: vec![ErrorDescription {
                type_name: "Problem".to_string(),
                code: 404,
            }],
            http_verb: "GET".to_string(),
            http_url_template: "/widgets/{widget-id}".to_string(),
            documentation: Some("Fetch one widget".to_string()),
            ..OperationDescription::default()
        },
    );
    model.operation_descriptions.insert(
        "deleteAll".to_string(),
        OperationDescription {
            http_verb: "DELETE".to_string(),
            http_url_template: "/widgets".to_string(),
            ..OperationDescription::default()
        },
    );
    model.error_types.insert("Problem".to_string());

    model
}

#[test]
fn test_generate_widget_client_crate() {
    let model = widget_service();
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path();

    let result = generate_crate(&model, ModelOverride::default(), output_path);
    assert!(result.is_ok(), "Generation failed: {:?}", result);
    assert_eq!(result.unwrap().len(), 5);

    for file in ["Cargo.toml", "src/lib.rs", "src/model.rs", "src/errors.rs", "src/client.rs"] {
        assert!(output_path.join(file).exists(), "{file} should exist");
    }

    let cargo_toml = std::fs::read_to_string(output_path.join("Cargo.toml")).unwrap();
    assert!(
        cargo_toml.contains("name = \"widget-store\""),
        "Should have correct package name"
    );
    assert!(cargo_toml.contains("thiserror"));

    let model_rs = std::fs::read_to_string(output_path.join("src/model.rs")).unwrap();
    assert!(model_rs.starts_with("// Generated by service-model-generator"));
    assert!(model_rs.contains("pub type WidgetId = String;"));
    assert!(model_rs.contains("pub type WidgetTags = Vec<WidgetTag>;"));
    assert!(model_rs.contains("/// Range >= 0"));
    assert!(model_rs.contains("pub enum WidgetColor {"));
    assert!(model_rs.contains("#[serde(rename = \"dark-blue\")]\n    DarkBlue,"));
    assert!(model_rs.contains("/// A widget\n#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\npub struct Widget {"));
    assert!(model_rs.contains("    /// Identifier\n    pub id: WidgetId,"));
    assert!(model_rs.contains("    #[serde(rename = \"apiVersion\")]"));
    assert!(model_rs.contains("    pub api_version: Option<WidgetId>,"));
    assert!(model_rs.contains("    pub tags: Option<WidgetTags>,"));

    let request_rename = "    #[serde(rename = \"widget-id\")]\n    pub id: GetWidgetRequestId,";
    assert!(model_rs.contains(request_rename));

    let errors_rs = std::fs::read_to_string(output_path.join("src/errors.rs")).unwrap();
    assert!(errors_rs.contains("    Problem(model::Problem),"));

    let client_rs = std::fs::read_to_string(output_path.join("src/client.rs")).unwrap();
    assert!(client_rs.contains("pub trait WidgetStoreClient {"));
    assert!(client_rs.contains(
        "fn get_widget(&self, input: model::GetWidgetRequest) -> Result<model::Widget, ServiceError>;"
    ));
    assert!(client_rs.contains("fn delete_all(&self) -> Result<(), ServiceError>;"));
    assert!(client_rs.contains("    /// `GET /widgets/{widget-id}`"));
    assert!(client_rs.contains("    /// - 404: Problem"));
    assert!(client_rs.contains("pub struct MockWidgetStoreClient {"));
    assert!(client_rs.contains("operation: \"getWidget\","));

    let lib_rs = std::fs::read_to_string(output_path.join("src/lib.rs")).unwrap();
    assert!(lib_rs.contains("//! Widget Store 1.2.0\n//!\n//! Stores widgets"));
    assert!(lib_rs.contains("pub use client::{ WidgetStoreClient, MockWidgetStoreClient };"));
}

#[test]
fn test_named_field_values_become_constants() {
    let model = widget_service();
    let overrides = ModelOverride {
        named_field_values_override: BTreeMap::from([(
            "Widget".to_string(),
            BTreeMap::from([("apiVersion".to_string(), "v2".to_string())]),
        )]),
        ..ModelOverride::default()
    };

    let generator = ModelGenerator::with_overrides(&model, overrides).unwrap();
    let files = generator.render().unwrap();
    let (_, model_rs) = files
        .iter()
        .find(|(path, _)| path.ends_with("model.rs"))
        .unwrap();

    assert!(model_rs.contains("pub const WIDGET_API_VERSION_DEFAULT: &str = \"v2\";"));
}

#[test]
fn test_additional_errors_become_variants_without_payload() {
    let mut model = widget_service();
    let overrides = ModelOverride::from_yaml("additionalErrors: [ThrottlingError]").unwrap();
    model
        .error_types
        .extend(overrides.additional_errors.iter().cloned());

    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path();
    generate_crate(&model, overrides, output_path).unwrap();

    let errors_rs = std::fs::read_to_string(output_path.join("src/errors.rs")).unwrap();
    assert!(errors_rs.contains("    #[error(\"ThrottlingError\")]\n    ThrottlingError,"));
    assert!(errors_rs.contains("    Problem(model::Problem),"));
}

#[test]
fn test_dangling_member_reference_writes_nothing() {
    let mut model = widget_service();
    model.insert_structure(
        "Gadget",
        Structure::from_members(vec![("part".to_string(), Member::new("Part", true))], None),
    );

    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out");

    let result = generate_crate(&model, ModelOverride::default(), &output_path);
    match result {
        Err(GeneratorError::UnresolvedType {
            type_name,
            referrer,
        }) => {
            assert_eq!(type_name, "Part");
            assert_eq!(referrer, "Gadget.part");
        }
        other => panic!("expected unresolved type, got {other:?}"),
    }
    assert!(!output_path.exists(), "no output should be written on failure");
}
