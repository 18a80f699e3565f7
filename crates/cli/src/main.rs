//! Service Model Generator CLI
//!
//! Command-line interface for compiling OpenAPI and Swagger documents into a
//! service model and generating client crates from it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use service_model_generator_common::{ModelOverride, ServiceModel};
use service_model_generator_generator::generate_crate;
use service_model_generator_parser::parse_document;
use std::path::{Path, PathBuf};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Parser)]
#[command(name = "service-model-generator")]
#[command(version, about = "Compile OpenAPI and Swagger documents into service models", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Model override file (JSON or YAML)
    #[arg(long, global = true)]
    overrides: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and display the resulting service model
    #[command(after_help = "EXAMPLES:\n  \
        # Summarize a Swagger document\n  \
        service-model-generator parse petstore.json\n\n  \
        # Dump the full model as JSON after checking every reference\n  \
        service-model-generator parse kubernetes.yaml --check --json")]
    Parse {
        /// Path to the OpenAPI 3 or Swagger 2 document
        document: PathBuf,

        /// Print the model as JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Verify that every referenced type is defined
        #[arg(long)]
        check: bool,
    },

    /// Generate a client crate from a document
    #[command(after_help = "EXAMPLES:\n  \
        service-model-generator generate petstore.yaml \\\n    \
        --overrides petstore-overrides.yaml \\\n    \
        --output ./clients/petstore")]
    Generate {
        /// Path to the OpenAPI 3 or Swagger 2 document
        document: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let overrides = load_overrides(cli.overrides.as_deref())?;

    match cli.command {
        Commands::Parse {
            document,
            json,
            check,
        } => parse_command(&document, overrides, json, check, cli.verbose),
        Commands::Generate { document, output } => {
            generate_command(&document, overrides, &output, cli.verbose)
        }
    }
}

/// Install the fmt subscriber on stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: bool) {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if verbose {
            "info,service_model_generator_parser=debug,service_model_generator_generator=debug"
                .to_string()
        } else {
            "warn".to_string()
        }
    });
    let filter = EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn load_overrides(path: Option<&Path>) -> Result<ModelOverride> {
    match path {
        Some(path) => {
            println!("{} Loading overrides: {}", "→".cyan(), path.display());
            ModelOverride::load(path)
                .with_context(|| format!("Failed to load overrides from {}", path.display()))
        }
        None => Ok(ModelOverride::default()),
    }
}

fn build_model(document: &Path, overrides: ModelOverride) -> Result<ServiceModel> {
    parse_document(document, overrides)
        .with_context(|| format!("Failed to build service model from {}", document.display()))
}

fn parse_command(
    document: &Path,
    overrides: ModelOverride,
    json: bool,
    check: bool,
    verbose: bool,
) -> Result<()> {
    if !json {
        println!("{} Parsing document: {}", "→".cyan(), document.display());
    }

    let model = build_model(document, overrides)?;

    if check {
        model
            .validate_references()
            .context("Service model has unresolved references")?;
        if !json {
            println!("{} All type references resolve", "✓".green());
        }
    }

    if json {
        let dump = serde_json::to_string_pretty(&model).context("Failed to serialize model")?;
        println!("{}", dump);
        return Ok(());
    }

    let info = &model.service_information;
    println!("\n{}", "✓ Parse successful!".green().bold());
    println!("\n{}", "Service Model:".bold());
    println!("  Title: {}", info.title.yellow());
    println!("  Version: {}", info.version.yellow());
    println!("  Fields: {}", model.field_descriptions.len());
    println!("  Structures: {}", model.structure_descriptions.len());
    println!("  Operations: {}", model.operation_descriptions.len());
    println!("  Error types: {}", model.error_types.len());

    if verbose {
        println!("\n{}", "Operations:".bold());
        for (name, operation) in &model.operation_descriptions {
            println!(
                "  • {} {} {}",
                name.cyan(),
                operation.http_verb,
                operation.http_url_template
            );
            if let Some(input) = &operation.input {
                println!("    Input: {}", input);
            }
            if let Some(output) = &operation.output {
                println!("    Output: {}", output);
            }
            for error in &operation.errors {
                println!("    Error {}: {}", error.code, error.type_name);
            }
        }

        if !model.type_mappings.is_empty() {
            println!("\n{}", "Type mappings:".bold());
            for (from, to) in &model.type_mappings {
                println!("  {} → {}", from, to);
            }
        }
    }

    Ok(())
}

fn generate_command(
    document: &Path,
    overrides: ModelOverride,
    output: &Path,
    verbose: bool,
) -> Result<()> {
    println!(
        "{} Generating client from: {}",
        "→".cyan(),
        document.display()
    );
    if verbose {
        println!("  Output: {}", output.display());
    }

    println!("{} Parsing document...", "→".cyan());
    let model = build_model(document, overrides.clone())?;
    println!(
        "{} Built model with {} structures and {} operations",
        "✓".green(),
        model.structure_descriptions.len(),
        model.operation_descriptions.len()
    );

    println!("{} Generating client files...", "→".cyan());
    let written =
        generate_crate(&model, overrides, output).context("Failed to generate client crate")?;

    println!("\n{}", "✓ Generation complete!".green().bold());
    println!("\n{}", "Generated files:".bold());
    for path in &written {
        println!("  📄 {}", path.display());
    }
    println!("\n{}", "Next steps:".bold());
    println!("  1. Review generated files in {}", output.display());
    println!("  2. Build the client: cd {} && cargo build", output.display());

    Ok(())
}
