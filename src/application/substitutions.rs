//! Building a substitution mapping from CLI input
//!
//! Values come from an optional YAML/JSON variables file and from repeated
//! `KEY=VALUE` arguments. Arguments are applied after the file, and a key
//! given more than once keeps its last value.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::templates::Substitutions;
use serde_yaml::Value;
use thiserror::Error;
use tracing::debug;

/// Errors raised while assembling substitutions
#[derive(Error, Debug)]
pub enum SubstitutionError {
    #[error("Invalid variable '{0}': expected KEY=VALUE")]
    InvalidAssignment(String),

    #[error("Variable name must not be empty in '{0}'")]
    EmptyKey(String),

    #[error("Variables file must contain a mapping of names to scalar values")]
    NotAMapping,

    #[error("Variable '{0}' must be a string, number or boolean")]
    NonScalarValue(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Split a `KEY=VALUE` argument at the first `=`
pub fn parse_assignment(raw: &str) -> Result<(String, String), SubstitutionError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| SubstitutionError::InvalidAssignment(raw.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(SubstitutionError::EmptyKey(raw.to_string()));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Parse variables file content; JSON is accepted as a subset of YAML.
///
/// Scalars keep the text the user wrote, so `1.10` stays `1.10` rather than
/// being reformatted as a number. A null value maps to an empty string.
pub fn parse_vars_document(content: &str) -> Result<Substitutions, SubstitutionError> {
    let document: Value = serde_yaml::from_str(content)?;
    let mapping = match document {
        Value::Mapping(mapping) => mapping,
        Value::Null => return Ok(Substitutions::new()),
        _ => return Err(SubstitutionError::NotAMapping),
    };

    for (key, value) in &mapping {
        if !is_scalar(key) {
            return Err(SubstitutionError::NotAMapping);
        }
        if !(is_scalar(value) || value.is_null()) {
            return Err(SubstitutionError::NonScalarValue(key_name(key)));
        }
    }

    let raw: HashMap<String, Option<String>> = serde_yaml::from_str(content)?;
    Ok(raw
        .into_iter()
        .map(|(key, value)| (key, value.unwrap_or_default()))
        .collect())
}

fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
}

fn key_name(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Merge a variables file (if any) with `KEY=VALUE` assignments
pub fn collect_substitutions(
    vars_file: Option<&Path>,
    assignments: &[String],
) -> Result<Substitutions, SubstitutionError> {
    let mut substitutions = match vars_file {
        Some(path) => parse_vars_document(&fs::read_to_string(path)?)?,
        None => Substitutions::new(),
    };

    for raw in assignments {
        let (key, value) = parse_assignment(raw)?;
        if substitutions.insert(key.clone(), value).is_some() {
            debug!(variable = %key, "Variable overridden by a later value");
        }
    }

    Ok(substitutions)
}
