//! OpenAPI 3.x and Swagger 2.0 model builder
//!
//! Lowers a document into a `ServiceModel`: every named schema is lowered
//! into the field and structure registries, then every operation is
//! decomposed into its input, output and error types.
//!
//! ## Usage
//! ```rust,ignore
//! use service_model_generator_parser::openapi::OpenApiParser;
//!
//! let parser = OpenApiParser::from_file("widgets.json")?;
//! let model = parser.parse()?;
//! ```

mod converter;
mod decomposer;
mod lowering;
mod parser;
mod types;

pub use converter::build_service_model;
pub use decomposer::OperationDecomposer;
pub use lowering::SchemaLowering;
pub use parser::OpenApiParser;
pub use types::*;
