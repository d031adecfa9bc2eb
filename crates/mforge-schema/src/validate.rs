//! # Metadata Validation
//!
//! Rule-based validation of untrusted metadata records. The input is a
//! `serde_json::Value` because records arrive from files authored by hand:
//! fields may be missing, have the wrong type, or be extra.
//!
//! ## Rules
//!
//! Each rule runs independently and appends messages under a field key:
//!
//! 1. Required top-level fields (`entity`, `identifier`, `version`,
//!    `purpose`, `context`, `returns`) must be present and truthy.
//! 2. A truthy `entity` must name one of the [`EntityKind`] values.
//! 3. A truthy `returns` must be an object with truthy `type` and
//!    `description`.
//! 4. For `Function` and `Script` entities, `parameters` must be a list of
//!    objects, each with truthy `name`, `type`, `description`, and a
//!    boolean `optional` if one is given.
//!
//! ## Truthiness
//!
//! "Required" means present and truthy, not merely present: `null`,
//! `false`, `0`, `""`, `[]` and `{}` all count as missing. A required field
//! holding a legitimate `0` or `false` is therefore reported as missing.
//!
//! Validation findings are data, not errors. [`validate_metadata`] never
//! fails and never panics, whatever it is given.

use std::fmt;

use indexmap::IndexMap;
use mforge_core::{EntityKind, EntityMetadata, MforgeError};
use serde::Serialize;
use serde_json::{Map, Value};

/// Top-level fields that must be present and truthy, in check order.
pub const REQUIRED_FIELDS: &[&str] = &[
    "entity",
    "identifier",
    "version",
    "purpose",
    "context",
    "returns",
];

const RETURNS_REQUIRED: &[&str] = &["type", "description"];
const PARAMETER_REQUIRED: &[&str] = &["name", "type", "description"];

/// Validation findings, grouped by top-level field name.
///
/// Fields iterate in the order they were first reported: required-field
/// findings in [`REQUIRED_FIELDS`] order, then the entity, returns and
/// parameters rules. Messages within a field keep the order in which the
/// rules produced them. A field key is only present when it
/// has at least one message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: IndexMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Returns true if the record passed every rule.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with at least one error.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the total number of messages across all fields.
    pub fn total_messages(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Messages recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Field names with errors, in first-reported order.
    pub fn fields(&self) -> Vec<&str> {
        self.errors.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Consumes self and returns the inner map.
    pub fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.errors
    }

    fn push(&mut self, field: &str, message: String) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, messages)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  Field '{field}':")?;
            for message in messages {
                write!(f, "\n    - {message}")?;
            }
        }
        Ok(())
    }
}

/// Whether a JSON value counts as present for required-field purposes.
///
/// `null`, `false`, numeric zero, the empty string, the empty list and the
/// empty object are falsy; everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Look up `key` in `record` and return it only when truthy.
fn truthy_field<'a>(record: Option<&'a Map<String, Value>>, key: &str) -> Option<&'a Value> {
    record?.get(key).filter(|v| is_truthy(v))
}

/// Validate a metadata record.
///
/// Returns an empty [`ValidationErrors`] when the record is valid. A
/// top-level value that is not an object is treated as a record with no
/// fields, so every required field is reported.
pub fn validate_metadata(metadata: &Value) -> ValidationErrors {
    let record = metadata.as_object();
    let mut errors = ValidationErrors::default();

    check_required(record, &mut errors);
    check_entity(record, &mut errors);
    check_returns(record, &mut errors);
    check_parameters(record, &mut errors);

    tracing::debug!(
        fields = errors.len(),
        messages = errors.total_messages(),
        "validated metadata record"
    );

    errors
}

/// Validate a typed record by way of its JSON form.
///
/// # Errors
///
/// Returns `MforgeError::Serialization` if the record cannot be converted
/// to JSON.
pub fn validate_entity(metadata: &EntityMetadata) -> Result<ValidationErrors, MforgeError> {
    Ok(validate_metadata(&metadata.to_value()?))
}

fn check_required(record: Option<&Map<String, Value>>, errors: &mut ValidationErrors) {
    for field in REQUIRED_FIELDS {
        if truthy_field(record, field).is_none() {
            errors.push(field, format!("{field} is required"));
        }
    }
}

fn check_entity(record: Option<&Map<String, Value>>, errors: &mut ValidationErrors) {
    let Some(entity) = truthy_field(record, "entity") else {
        return;
    };
    let known = entity
        .as_str()
        .is_some_and(|name| name.parse::<EntityKind>().is_ok());
    if !known {
        errors.push(
            "entity",
            format!("Entity must be one of: {}", EntityKind::names().join(", ")),
        );
    }
}

fn check_returns(record: Option<&Map<String, Value>>, errors: &mut ValidationErrors) {
    let Some(returns) = truthy_field(record, "returns") else {
        return;
    };
    let Some(returns) = returns.as_object() else {
        errors.push("returns", "Returns must be a dictionary".to_string());
        return;
    };
    for field in RETURNS_REQUIRED {
        if truthy_field(Some(returns), field).is_none() {
            errors.push("returns", format!("Returns.{field} is required"));
        }
    }
}

fn check_parameters(record: Option<&Map<String, Value>>, errors: &mut ValidationErrors) {
    let requires_parameters = record
        .and_then(|r| r.get("entity"))
        .and_then(Value::as_str)
        .and_then(|name| name.parse::<EntityKind>().ok())
        .is_some_and(|kind| kind.requires_parameters());
    if !requires_parameters {
        return;
    }

    let Some(parameters) = record.and_then(|r| r.get("parameters")).and_then(Value::as_array)
    else {
        errors.push(
            "parameters",
            "Parameters must be a list for functions and scripts".to_string(),
        );
        return;
    };

    for (i, param) in parameters.iter().enumerate() {
        let Some(param) = param.as_object() else {
            errors.push("parameters", format!("Parameter {i} must be a dictionary"));
            continue;
        };
        for field in PARAMETER_REQUIRED {
            if truthy_field(Some(param), field).is_none() {
                errors.push("parameters", format!("Parameter {i}.{field} is required"));
            }
        }
        if param.get("optional").is_some_and(|v| !v.is_boolean()) {
            errors.push(
                "parameters",
                format!("Parameter {i}.optional must be a boolean"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_record() -> Value {
        json!({
            "entity": "Function",
            "identifier": "test_function",
            "version": "1.0.0",
            "purpose": "Test function for validation",
            "context": "Used in unit tests",
            "parameters": [
                {
                    "name": "param1",
                    "type": "str",
                    "optional": false,
                    "default": null,
                    "description": "First parameter"
                }
            ],
            "returns": {
                "type": "bool",
                "description": "Success status"
            }
        })
    }

    fn with(mut record: Value, key: &str, value: Value) -> Value {
        record[key] = value;
        record
    }

    fn without(mut record: Value, key: &str) -> Value {
        if let Some(map) = record.as_object_mut() {
            map.remove(key);
        }
        record
    }

    #[test]
    fn test_valid_record_has_no_errors() {
        let errors = validate_metadata(&valid_record());
        assert!(errors.is_empty(), "unexpected errors:\n{errors}");
    }

    #[test]
    fn test_missing_required_fields() {
        let record = without(without(valid_record(), "version"), "context");
        let errors = validate_metadata(&record);
        assert_eq!(errors.fields(), vec!["version", "context"]);
        assert_eq!(errors.get("version").unwrap(), ["version is required"]);
        assert_eq!(errors.get("context").unwrap(), ["context is required"]);
    }

    #[test]
    fn test_falsy_required_values_count_as_missing() {
        for falsy in [json!(""), json!(null), json!(0), json!(false), json!([]), json!({})] {
            let errors = validate_metadata(&with(valid_record(), "purpose", falsy.clone()));
            assert_eq!(
                errors.get("purpose").unwrap(),
                ["purpose is required"],
                "value {falsy} should be treated as missing"
            );
        }
    }

    #[test]
    fn test_truthy_non_string_required_value_passes_required_check() {
        let errors = validate_metadata(&with(valid_record(), "version", json!(2)));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_invalid_entity_lists_allowed_values() {
        let record = with(valid_record(), "entity", json!("NotARealType"));
        let errors = validate_metadata(&record);
        assert_eq!(errors.fields(), vec!["entity"]);
        assert_eq!(
            errors.get("entity").unwrap(),
            ["Entity must be one of: Function, Class, Module, Script, Configuration, \
              Test, API Endpoint, Constant, Documentation, Example Code"]
        );
    }

    #[test]
    fn test_non_string_entity_is_rejected_by_allow_list() {
        let errors = validate_metadata(&with(valid_record(), "entity", json!(7)));
        assert_eq!(errors.fields(), vec!["entity"]);
        assert!(errors.get("entity").unwrap()[0].starts_with("Entity must be one of: "));
    }

    #[test]
    fn test_empty_entity_skips_allow_list() {
        let errors = validate_metadata(&with(valid_record(), "entity", json!("")));
        assert_eq!(errors.get("entity").unwrap(), ["entity is required"]);
        assert!(!errors.contains("parameters"));
    }

    #[test]
    fn test_returns_must_be_object() {
        let errors = validate_metadata(&with(valid_record(), "returns", json!("bool")));
        assert_eq!(errors.get("returns").unwrap(), ["Returns must be a dictionary"]);

        let errors = validate_metadata(&with(valid_record(), "returns", json!(["bool"])));
        assert_eq!(errors.get("returns").unwrap(), ["Returns must be a dictionary"]);
    }

    #[test]
    fn test_returns_subfields_required_in_order() {
        let record = with(valid_record(), "returns", json!({"type": "", "extra": 1}));
        let errors = validate_metadata(&record);
        assert_eq!(
            errors.get("returns").unwrap(),
            ["Returns.type is required", "Returns.description is required"]
        );
    }

    #[test]
    fn test_empty_returns_object_is_missing_not_malformed() {
        let errors = validate_metadata(&with(valid_record(), "returns", json!({})));
        assert_eq!(errors.get("returns").unwrap(), ["returns is required"]);
    }

    #[test]
    fn test_empty_parameter_list_is_valid_for_function() {
        let errors = validate_metadata(&with(valid_record(), "parameters", json!([])));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_parameters_must_be_list_for_functions_and_scripts() {
        for entity in ["Function", "Script"] {
            let record = without(with(valid_record(), "entity", json!(entity)), "parameters");
            let errors = validate_metadata(&record);
            assert_eq!(
                errors.get("parameters").unwrap(),
                ["Parameters must be a list for functions and scripts"]
            );

            let record = with(
                with(valid_record(), "entity", json!(entity)),
                "parameters",
                json!({"name": "x"}),
            );
            let errors = validate_metadata(&record);
            assert_eq!(
                errors.get("parameters").unwrap(),
                ["Parameters must be a list for functions and scripts"]
            );
        }
    }

    #[test]
    fn test_parameters_ignored_for_other_entities() {
        let record = with(
            with(valid_record(), "entity", json!("Class")),
            "parameters",
            json!("not a list"),
        );
        assert!(validate_metadata(&record).is_empty());
    }

    #[test]
    fn test_parameter_missing_type_and_description() {
        let record = with(valid_record(), "parameters", json!([{"name": "x"}]));
        let errors = validate_metadata(&record);
        assert_eq!(
            errors.get("parameters").unwrap(),
            [
                "Parameter 0.type is required",
                "Parameter 0.description is required"
            ]
        );
    }

    #[test]
    fn test_parameter_not_object_skips_subchecks() {
        let record = with(
            valid_record(),
            "parameters",
            json!(["x", {"name": "y", "type": "int", "description": "d", "optional": "no"}]),
        );
        let errors = validate_metadata(&record);
        assert_eq!(
            errors.get("parameters").unwrap(),
            [
                "Parameter 0 must be a dictionary",
                "Parameter 1.optional must be a boolean"
            ]
        );
    }

    #[test]
    fn test_parameter_optional_null_is_not_boolean() {
        let record = with(
            valid_record(),
            "parameters",
            json!([{"name": "y", "type": "int", "description": "d", "optional": null}]),
        );
        let errors = validate_metadata(&record);
        assert_eq!(
            errors.get("parameters").unwrap(),
            ["Parameter 0.optional must be a boolean"]
        );
    }

    #[test]
    fn test_non_object_top_level_reports_every_required_field() {
        for input in [json!(null), json!("metadata"), json!([1, 2, 3])] {
            let errors = validate_metadata(&input);
            assert_eq!(errors.len(), REQUIRED_FIELDS.len());
            for field in REQUIRED_FIELDS {
                assert!(errors.contains(field));
            }
        }
    }

    #[test]
    fn test_errors_accumulate_across_fields() {
        let record = json!({
            "entity": "Script",
            "identifier": "run.sh",
            "returns": {"type": "int"},
            "parameters": [{"optional": 1}]
        });
        let errors = validate_metadata(&record);
        assert_eq!(errors.fields(), vec!["version", "purpose", "context", "returns", "parameters"]);
        assert_eq!(
            errors.get("parameters").unwrap(),
            [
                "Parameter 0.name is required",
                "Parameter 0.type is required",
                "Parameter 0.description is required",
                "Parameter 0.optional must be a boolean"
            ]
        );
        assert_eq!(errors.total_messages(), 8);
    }

    #[test]
    fn test_fields_follow_rule_order_not_name_order() {
        let record = json!({
            "entity": "Function",
            "identifier": "f",
            "purpose": "p",
            "parameters": []
        });
        let errors = validate_metadata(&record);
        assert_eq!(errors.fields(), vec!["version", "context", "returns"]);
        assert_eq!(
            errors.to_string(),
            "  Field 'version':\n    - version is required\n  Field 'context':\n    - context is required\n  Field 'returns':\n    - returns is required"
        );
    }

    #[test]
    fn test_rule_findings_follow_required_findings() {
        let record = json!({
            "entity": "Widget",
            "identifier": "f",
            "version": "1",
            "returns": "int"
        });
        let errors = validate_metadata(&record);
        assert_eq!(errors.fields(), vec!["purpose", "context", "entity", "returns"]);
    }

    #[test]
    fn test_validation_does_not_mutate_input() {
        let record = with(valid_record(), "parameters", json!([{"name": "x"}]));
        let before = record.clone();
        let first = validate_metadata(&record);
        let second = validate_metadata(&record);
        assert_eq!(record, before);
        assert_eq!(first, second);
    }

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(&json!(0.0)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!(0.5)));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(" ")));
        assert!(is_truthy(&json!([null])));
        assert!(is_truthy(&json!({"k": null})));
    }

    #[test]
    fn test_display_groups_by_field() {
        let errors = validate_metadata(&without(without(valid_record(), "version"), "context"));
        assert_eq!(
            errors.to_string(),
            "  Field 'version':\n    - version is required\n  Field 'context':\n    - context is required"
        );
    }

    #[test]
    fn test_serializes_as_object_of_lists() {
        let errors = validate_metadata(&without(valid_record(), "version"));
        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(value, json!({"version": ["version is required"]}));
    }

    #[test]
    fn test_validate_entity_typed_record() {
        let record = EntityMetadata::from_value(valid_record()).unwrap();
        assert!(validate_entity(&record).unwrap().is_empty());
    }
}
