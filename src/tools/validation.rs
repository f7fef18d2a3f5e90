//! Validate tool call arguments against the declared JSON Schema before
//! execution.

/// Validate tool arguments against a JSON Schema.
///
/// Performs top-level validation: schema type check, required field
/// presence, and property type verification. Returns `Ok(())` when valid,
/// `Err(message)` describing the first violation found.
pub fn validate_arguments(
    args: &serde_json::Value,
    schema: &serde_json::Value,
) -> Result<(), String> {
    if let Some(schema_type) = schema.get("type").and_then(|v| v.as_str()) {
        if schema_type == "object" && !args.is_object() {
            return Err(format!(
                "expected object arguments, got {}",
                json_type_name(args)
            ));
        }
    }

    let obj = match args.as_object() {
        Some(obj) => obj,
        None => return Ok(()),
    };

    if let Some(required) = schema.get("required").and_then(|v| v.as_array()) {
        for field in required.iter().filter_map(|f| f.as_str()) {
            if !obj.contains_key(field) {
                return Err(format!("missing required field '{field}'"));
            }
        }
    }

    if let Some(properties) = schema.get("properties").and_then(|v| v.as_object()) {
        for (key, value) in obj {
            let expected = properties
                .get(key)
                .and_then(|p| p.get("type"))
                .and_then(|t| t.as_str());
            if let Some(expected) = expected {
                if !value_matches_type(value, expected) {
                    return Err(format!(
                        "field '{key}' expected type '{expected}', got {}",
                        json_type_name(value)
                    ));
                }
            }
        }
    }

    Ok(())
}

fn value_matches_type(value: &serde_json::Value, expected: &str) -> bool {
    match expected {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        "null" => value.is_null(),
        _ => true,
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn multiply_schema() -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "a": { "type": "number" },
                "b": { "type": "number" },
            },
            "required": ["a", "b"],
        })
    }

    #[test]
    fn accepts_valid_numeric_args() {
        let result = validate_arguments(&json!({ "a": 2, "b": 2 }), &multiply_schema());

        assert!(result.is_ok());
    }

    #[test]
    fn rejects_missing_required_field() {
        let result = validate_arguments(&json!({ "a": 2 }), &multiply_schema());

        assert!(result.unwrap_err().contains("missing required field 'b'"));
    }

    #[test]
    fn rejects_non_object_args_when_schema_expects_object() {
        let result = validate_arguments(&json!("not an object"), &multiply_schema());

        assert!(result.unwrap_err().contains("expected object"));
    }

    #[test]
    fn rejects_field_with_wrong_type() {
        let result = validate_arguments(&json!({ "a": "two", "b": 2 }), &multiply_schema());

        let err = result.unwrap_err();
        assert!(err.contains("field 'a'"));
        assert!(err.contains("expected type 'number'"));
    }

    #[test]
    fn accepts_extra_fields_not_in_schema() {
        let result = validate_arguments(&json!({ "a": 2, "b": 2, "c": 9 }), &multiply_schema());

        assert!(result.is_ok());
    }

    #[test]
    fn accepts_anything_when_schema_is_empty() {
        let result = validate_arguments(&json!({ "whatever": true }), &json!({}));

        assert!(result.is_ok());
    }
}
