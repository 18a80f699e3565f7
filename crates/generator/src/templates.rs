//! Template loading and management

use service_model_generator_common::{GeneratorError, Result};
use std::collections::HashMap;
use tera::{Tera, Value};

/// Load all templates
pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();

    // Register custom filters
    tera.register_filter("doc_comment", doc_comment_filter);
    tera.register_filter("rust_string", rust_string_filter);

    let templates = [
        ("Cargo.toml", include_str!("../templates/Cargo.toml.tera")),
        ("lib.rs", include_str!("../templates/lib.rs.tera")),
        ("model.rs", include_str!("../templates/model.rs.tera")),
        ("errors.rs", include_str!("../templates/errors.rs.tera")),
        ("client.rs", include_str!("../templates/client.rs.tera")),
    ];

    for (name, source) in templates {
        tera.add_raw_template(name, source).map_err(|e| {
            GeneratorError::Generation(format!("Failed to load {} template: {}", name, e))
        })?;
    }

    Ok(tera)
}

/// Filter to turn free text into doc comment lines
///
/// Arguments: `indent` (spaces, default 0) and `prefix` (default `///`).
fn doc_comment_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("doc_comment filter expects a string"))?;

    let indent = args.get("indent").and_then(Value::as_u64).unwrap_or(0) as usize;
    let prefix = args.get("prefix").and_then(Value::as_str).unwrap_or("///");
    let padding = " ".repeat(indent);

    let lines: Vec<String> = text
        .trim()
        .lines()
        .map(|line| {
            let line = line.trim_end();
            if line.is_empty() {
                format!("{}{}", padding, prefix)
            } else {
                format!("{}{} {}", padding, prefix, line)
            }
        })
        .collect();

    Ok(Value::String(lines.join("\n")))
}

/// Filter to quote a string as a Rust string literal
fn rust_string_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("rust_string filter expects a string"))?;

    Ok(Value::String(format!("{:?}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_load() {
        assert!(load_templates().is_ok());
    }

    #[test]
    fn test_doc_comment_filter() {
        let mut args = HashMap::new();
        args.insert("indent".to_string(), Value::from(4));

        let rendered =
            doc_comment_filter(&Value::String("First line\n\nSecond line\n".into()), &args)
                .unwrap();
        assert_eq!(
            rendered,
            Value::String("    /// First line\n    ///\n    /// Second line".into())
        );
    }

    #[test]
    fn test_rust_string_filter() {
        let rendered =
            rust_string_filter(&Value::String("say \"hi\"".into()), &HashMap::new()).unwrap();
        assert_eq!(rendered, Value::String(r#""say \"hi\"""#.into()));
    }
}
