use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::collections::BTreeMap;
use thiserror::Error;

pub const FORMATTED_MESSAGE: &str = "Valid JSON formatted successfully!";
pub const MINIFIED_MESSAGE: &str = "JSON minified successfully!";
pub const VALID_MESSAGE: &str = "✓ Valid JSON";

#[derive(Error, Debug)]
pub enum JsonError {
    #[error("Error: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Error: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Error: output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl JsonError {
    /// Status line for the validate action.
    pub fn invalid_message(&self) -> String {
        match self {
            JsonError::Parse(e) => format!("✗ Invalid JSON: {}", e),
            other => format!("✗ {}", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub indent: usize,
    pub sort_keys: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            sort_keys: false,
        }
    }
}

fn parse(input: &str) -> Result<Value, JsonError> {
    serde_json::from_str(input).map_err(JsonError::Parse)
}

/// Pretty-print with the given indent. Key order is kept unless sorting is asked for.
pub fn format_json(input: &str, options: FormatOptions) -> Result<String, JsonError> {
    let mut value = parse(input)?;
    if options.sort_keys {
        sort_keys(&mut value);
    }

    let indent = " ".repeat(options.indent);
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut serializer)
        .map_err(JsonError::Serialize)?;

    Ok(String::from_utf8(out)?)
}

pub fn minify_json(input: &str) -> Result<String, JsonError> {
    let value = parse(input)?;
    serde_json::to_string(&value).map_err(JsonError::Serialize)
}

pub fn validate_json(input: &str) -> Result<(), JsonError> {
    parse(input).map(|_| ())
}

fn sort_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> = std::mem::take(map)
                .into_iter()
                .map(|(key, mut child)| {
                    sort_keys(&mut child);
                    (key, child)
                })
                .collect();
            map.extend(sorted);
        }
        Value::Array(items) => {
            for child in items.iter_mut() {
                sort_keys(child);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_with_two_space_indent_keeps_key_order() {
        let formatted = format_json(r#"{"b":1,"a":[true,null]}"#, FormatOptions::default()).unwrap();
        assert_eq!(
            formatted,
            "{\n  \"b\": 1,\n  \"a\": [\n    true,\n    null\n  ]\n}"
        );
    }

    #[test]
    fn format_with_custom_indent_and_sorting() {
        let options = FormatOptions {
            indent: 4,
            sort_keys: true,
        };
        let formatted = format_json(r#"{"z":{"y":1,"x":2},"a":0}"#, options).unwrap();
        assert_eq!(
            formatted,
            "{\n    \"a\": 0,\n    \"z\": {\n        \"x\": 2,\n        \"y\": 1\n    }\n}"
        );
    }

    #[test]
    fn minify_strips_whitespace() {
        let minified = minify_json("{\n  \"name\" : \"devkit\",\n  \"tags\": [ 1, 2 ]\n}").unwrap();
        assert_eq!(minified, r#"{"name":"devkit","tags":[1,2]}"#);
    }

    #[test]
    fn scalars_are_valid_documents() {
        assert!(validate_json("42").is_ok());
        assert!(validate_json("\"text\"").is_ok());
        assert_eq!(format_json("null", FormatOptions::default()).unwrap(), "null");
    }

    #[test]
    fn invalid_input_reports_parser_message() {
        let err = validate_json("{\"a\": }").unwrap_err();
        assert!(matches!(err, JsonError::Parse(_)));
        assert!(err.to_string().starts_with("Error: "));
        assert!(err.invalid_message().starts_with("✗ Invalid JSON: "));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn empty_input_is_invalid() {
        assert!(format_json("", FormatOptions::default()).is_err());
        assert!(minify_json("   ").is_err());
    }
}
