//! Schema validation of sanitized completion text.
//!
//! Validation is all-or-nothing and exhaustive: the field walk collects
//! EVERY missing field, type mismatch, and numeric-bound violation before
//! reporting, so a caller sees the complete damage in one failure rather
//! than one problem per attempt. Unknown extra fields are ignored.

use serde_json::Value;
use wayfinder_core::outcome::{ParseOutcome, Record, ValidationFailure};
use wayfinder_core::schema::{FieldSpec, FieldType, SchemaKind};

/// Parse sanitized text against a schema, producing a typed record or a
/// failure describing every field violation. Never panics.
pub fn parse(sanitized: &str, kind: SchemaKind) -> ParseOutcome {
    let value: Value = match serde_json::from_str(sanitized) {
        Ok(v) => v,
        Err(e) => {
            return Err(ValidationFailure::new(
                kind,
                sanitized,
                vec![format!("invalid JSON: {e}")],
            ));
        }
    };

    let Some(object) = value.as_object() else {
        return Err(ValidationFailure::new(
            kind,
            sanitized,
            vec![format!("expected a JSON object, got {}", json_type(&value))],
        ));
    };

    let mut problems = Vec::new();
    for field in kind.fields() {
        match object.get(field.name) {
            None | Some(Value::Null) => {
                if field.required {
                    problems.push(format!("missing required field `{}`", field.name));
                }
            }
            Some(v) => check_field(field, v, &mut problems),
        }
    }

    if !problems.is_empty() {
        return Err(ValidationFailure::new(kind, sanitized, problems));
    }

    // The field walk guarantees the typed deserialization succeeds; a
    // mismatch here still surfaces as a failure rather than a panic.
    let record = match kind {
        SchemaKind::Flight => Record::Flight(finish(value, kind, sanitized)?),
        SchemaKind::Hotel => Record::Hotel(finish(value, kind, sanitized)?),
        SchemaKind::Plan => Record::Plan(finish(value, kind, sanitized)?),
        SchemaKind::Budget => Record::Budget(finish(value, kind, sanitized)?),
    };
    Ok(record)
}

/// Check one present, non-null field against its spec.
fn check_field(field: &FieldSpec, value: &Value, problems: &mut Vec<String>) {
    match field.ty {
        FieldType::Text => {
            if !value.is_string() {
                problems.push(type_mismatch(field, "a string", value));
            }
        }
        FieldType::Flag => {
            if !value.is_boolean() {
                problems.push(type_mismatch(field, "a boolean", value));
            }
        }
        FieldType::Number { min } => match value.as_f64() {
            None => problems.push(type_mismatch(field, "a number", value)),
            Some(n) => {
                if let Some(min) = min {
                    if n < min {
                        problems.push(format!(
                            "field `{}` must be at least {min}, got {n}",
                            field.name
                        ));
                    }
                }
            }
        },
        FieldType::Integer { min } => match value.as_i64() {
            None => problems.push(type_mismatch(field, "an integer", value)),
            Some(n) => {
                if let Some(min) = min {
                    if n < min {
                        problems.push(format!(
                            "field `{}` must be at least {min}, got {n}",
                            field.name
                        ));
                    }
                }
            }
        },
        FieldType::TextList => match value.as_array() {
            None => problems.push(type_mismatch(field, "an array of strings", value)),
            Some(items) => {
                if items.iter().any(|item| !item.is_string()) {
                    problems.push(format!(
                        "field `{}` must contain only strings",
                        field.name
                    ));
                }
            }
        },
    }
}

fn type_mismatch(field: &FieldSpec, expected: &str, value: &Value) -> String {
    format!(
        "field `{}` must be {expected}, got {}",
        field.name,
        json_type(value)
    )
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn finish<T: serde::de::DeserializeOwned>(
    value: Value,
    kind: SchemaKind,
    sanitized: &str,
) -> Result<T, ValidationFailure> {
    serde_json::from_value(value)
        .map_err(|e| ValidationFailure::new(kind, sanitized, vec![e.to_string()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::sanitize;

    const FLIGHT_JSON: &str = r#"{
        "airline": "Delta",
        "departure_time": "09:00",
        "arrival_time": "12:30",
        "price": 240.0,
        "direct_flight": true,
        "recommendation_reason": "cheapest direct option"
    }"#;

    #[test]
    fn parses_complete_flight() {
        let record = parse(FLIGHT_JSON, SchemaKind::Flight).unwrap();
        let Record::Flight(flight) = record else {
            panic!("expected flight record");
        };
        assert_eq!(flight.airline, "Delta");
        assert!(flight.direct_flight);
    }

    #[test]
    fn fenced_json_parses_same_as_bare() {
        let fenced = format!("```json\n{FLIGHT_JSON}\n```");
        let direct = parse(FLIGHT_JSON, SchemaKind::Flight).unwrap();
        let via_sanitizer = parse(sanitize(&fenced), SchemaKind::Flight).unwrap();
        assert_eq!(direct, via_sanitizer);
    }

    #[test]
    fn missing_fields_all_reported() {
        let failure = parse(r#"{"airline": "Delta"}"#, SchemaKind::Flight).unwrap_err();
        assert_eq!(failure.problems.len(), 5);
        for name in [
            "departure_time",
            "arrival_time",
            "price",
            "direct_flight",
            "recommendation_reason",
        ] {
            assert!(
                failure.problems.iter().any(|p| p.contains(name)),
                "missing problem for {name}"
            );
        }
    }

    #[test]
    fn type_mismatches_reported_alongside_missing() {
        let failure = parse(
            r#"{"airline": 7, "price": "cheap"}"#,
            SchemaKind::Flight,
        )
        .unwrap_err();
        assert!(failure.problems.iter().any(|p| p.contains("`airline`")));
        assert!(failure.problems.iter().any(|p| p.contains("`price`")));
        // plus the four genuinely absent fields
        assert_eq!(failure.problems.len(), 6);
    }

    #[test]
    fn negative_price_rejected() {
        let json = FLIGHT_JSON.replace("240.0", "-5.0");
        let failure = parse(&json, SchemaKind::Flight).unwrap_err();
        assert!(failure.problems[0].contains("at least 0"));
    }

    #[test]
    fn zero_duration_rejected() {
        let json = r#"{
            "destination": "Miami", "duration_days": 0, "budget": 2000,
            "activities": ["beach"], "notes": "n/a"
        }"#;
        let failure = parse(json, SchemaKind::Plan).unwrap_err();
        assert!(failure.problems[0].contains("duration_days"));
    }

    #[test]
    fn fractional_duration_rejected() {
        let json = r#"{
            "destination": "Miami", "duration_days": 2.5, "budget": 2000,
            "activities": ["beach"], "notes": "n/a"
        }"#;
        let failure = parse(json, SchemaKind::Plan).unwrap_err();
        assert!(failure.problems[0].contains("an integer"));
    }

    #[test]
    fn integer_price_accepted_for_number_field() {
        let json = FLIGHT_JSON.replace("240.0", "240");
        let record = parse(&json, SchemaKind::Flight).unwrap();
        assert!(matches!(record, Record::Flight(f) if f.price == 240.0));
    }

    #[test]
    fn unknown_extra_fields_ignored() {
        let json = FLIGHT_JSON.replacen('{', r#"{"cabin_class": "economy","#, 1);
        assert!(parse(&json, SchemaKind::Flight).is_ok());
    }

    #[test]
    fn non_string_activity_rejected() {
        let json = r#"{
            "destination": "Miami", "duration_days": 5, "budget": 2000,
            "activities": ["beach", 42], "notes": "n/a"
        }"#;
        let failure = parse(json, SchemaKind::Plan).unwrap_err();
        assert!(failure.problems[0].contains("only strings"));
    }

    #[test]
    fn budget_analysis_with_suggestion() {
        let json = r#"{"is_realistic": false, "reasoning": "too low", "suggested_budget": 1500}"#;
        let record = parse(json, SchemaKind::Budget).unwrap();
        let Record::Budget(analysis) = record else {
            panic!("expected budget record");
        };
        assert!(!analysis.is_realistic);
        assert_eq!(analysis.suggested_budget, Some(1500.0));
    }

    #[test]
    fn budget_analysis_without_suggestion() {
        let json = r#"{"is_realistic": true, "reasoning": "plenty"}"#;
        let record = parse(json, SchemaKind::Budget).unwrap();
        assert!(matches!(
            record,
            Record::Budget(a) if a.is_realistic && a.suggested_budget.is_none()
        ));
    }

    #[test]
    fn null_optional_field_treated_as_absent() {
        let json = r#"{"is_realistic": true, "reasoning": "ok", "suggested_budget": null}"#;
        assert!(parse(json, SchemaKind::Budget).is_ok());
    }

    #[test]
    fn negative_suggested_budget_rejected() {
        let json = r#"{"is_realistic": false, "reasoning": "too low", "suggested_budget": -100}"#;
        assert!(parse(json, SchemaKind::Budget).is_err());
    }

    #[test]
    fn syntax_error_is_single_problem() {
        let failure = parse("not json at all", SchemaKind::Plan).unwrap_err();
        assert_eq!(failure.problems.len(), 1);
        assert!(failure.problems[0].contains("invalid JSON"));
    }

    #[test]
    fn non_object_json_rejected() {
        let failure = parse(r#"["a", "b"]"#, SchemaKind::Plan).unwrap_err();
        assert!(failure.problems[0].contains("expected a JSON object"));
    }

    #[test]
    fn failure_carries_attempted_kind_and_text() {
        let failure = parse("{}", SchemaKind::Hotel).unwrap_err();
        assert_eq!(failure.kind, SchemaKind::Hotel);
        assert_eq!(failure.raw, "{}");
    }
}
