//! Batch input: a JSON array of compound records.
//!
//! ```json
//! [{ "Weight": 1000, "Cu": 20, "Fe": 25, "S": 30 }, { "weight": 250, "SiO2": 60 }]
//! ```

use serde_json::{Map, Value};
use smelt_core::{Compound, SmeltError};

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn is_weight_key(key: &str) -> bool {
    key == "weight" || key == "Weight"
}

/// Parses a whole batch. Any bad record rejects the batch.
pub fn parse_batch(json: &str) -> smelt_core::Result<Vec<Compound>> {
    let value: Value = serde_json::from_str(json)
        .map_err(|err| SmeltError::MalformedBatch(format!("invalid JSON: {err}")))?;
    compounds_from_value(&value)
}

/// Converts an already-parsed JSON value into compounds.
fn compounds_from_value(value: &Value) -> smelt_core::Result<Vec<Compound>> {
    let Value::Array(records) = value else {
        return Err(SmeltError::MalformedBatch(format!(
            "expected an array of compound records, found {}",
            kind(value)
        )));
    };
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let Value::Object(fields) = record else {
                return Err(SmeltError::MalformedBatch(format!(
                    "record {index} must be an object, found {}",
                    kind(record)
                )));
            };
            compound_from_record(fields).inspect_err(|err| {
                tracing::warn!(record = index, "rejected compound record: {err}");
            })
        })
        .collect()
}

/// Builds one compound from a record's fields.
///
/// `weight` may also be spelled `Weight`. A `null` weight counts as missing.
fn compound_from_record(fields: &Map<String, Value>) -> smelt_core::Result<Compound> {
    let mut weight = None;
    let mut pairs = Vec::with_capacity(fields.len());
    for (key, value) in fields {
        if is_weight_key(key) {
            if weight.is_some() {
                return Err(SmeltError::MalformedBatch(
                    "record gives the weight more than once".to_string(),
                ));
            }
            weight = match value {
                Value::Null => None,
                other => Some(number(key, other)?),
            };
        } else {
            pairs.push((key.as_str(), number(key, value)?));
        }
    }
    Compound::from_symbols(weight, pairs)
}

fn number(key: &str, value: &Value) -> smelt_core::Result<f64> {
    value.as_f64().ok_or_else(|| {
        SmeltError::MalformedBatch(format!(
            "field '{key}' must be a number, found {}",
            kind(value)
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use smelt_core::Element;

    #[test]
    fn parses_records_with_either_weight_spelling() {
        let compounds =
            parse_batch(r#"[{"Weight": 100, "Cu": 10}, {"weight": 50.5, "SiO2": 40}]"#).unwrap();

        assert_eq!(compounds.len(), 2);
        assert!((compounds[0].weight() - 100.0).abs() < f64::EPSILON);
        assert_eq!(compounds[0].percentage(Element::Cu), Some(10.0));
        assert!((compounds[1].weight() - 50.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_array_is_an_empty_batch() {
        assert!(parse_batch("[]").unwrap().is_empty());
    }

    #[test]
    fn object_instead_of_array_is_malformed() {
        let err = parse_batch(r#"{"Weight": 100, "Cu": 10}"#).unwrap_err();
        match err {
            SmeltError::MalformedBatch(msg) => assert!(msg.contains("found an object")),
            other => panic!("expected MalformedBatch, got {other:?}"),
        }
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(matches!(
            parse_batch("[{\"Weight\": 1"),
            Err(SmeltError::MalformedBatch(_))
        ));
    }

    #[test]
    fn non_object_record_is_malformed() {
        let err = parse_batch(r#"[{"Weight": 1}, 42]"#).unwrap_err();
        match err {
            SmeltError::MalformedBatch(msg) => assert!(msg.contains("record 1")),
            other => panic!("expected MalformedBatch, got {other:?}"),
        }
    }

    #[test]
    fn string_percentage_is_malformed() {
        assert!(matches!(
            parse_batch(r#"[{"Weight": 10, "Cu": "twenty"}]"#),
            Err(SmeltError::MalformedBatch(_))
        ));
    }

    #[test]
    fn duplicate_weight_is_malformed() {
        assert!(matches!(
            parse_batch(r#"[{"Weight": 10, "weight": 20}]"#),
            Err(SmeltError::MalformedBatch(_))
        ));
    }

    #[test]
    fn missing_or_null_weight_is_invalid_weight() {
        assert_eq!(
            parse_batch(r#"[{"Cu": 10}]"#).unwrap_err(),
            SmeltError::InvalidWeight { found: None }
        );
        assert_eq!(
            parse_batch(r#"[{"Weight": null, "Cu": 10}]"#).unwrap_err(),
            SmeltError::InvalidWeight { found: None }
        );
    }

    #[test]
    fn zero_weight_is_invalid_weight() {
        assert_eq!(
            parse_batch(r#"[{"Weight": 0, "Cu": 10}]"#).unwrap_err(),
            SmeltError::InvalidWeight { found: Some(0.0) }
        );
    }

    #[test]
    fn unknown_symbol_is_reported() {
        assert_eq!(
            parse_batch(r#"[{"Weight": 10, "Pb": 3}]"#).unwrap_err(),
            SmeltError::UnknownElement("Pb".to_string())
        );
    }
}
