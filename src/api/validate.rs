//! Shape validation for create/update request bodies

use serde_json::Value;

use crate::error::ApiError;

/// A create/update payload that passed validation.
#[derive(Debug, Clone)]
pub struct TimerPayload {
    pub name: String,
    pub duration: f64,
}

/// Check a candidate body against the payload constraints.
///
/// Pure: inspects the body and either hands back the extracted fields or an
/// `InvalidInput` naming the violated constraint. Trimming of the name is
/// left to the store; only emptiness-after-trim is judged here.
pub fn validate_timer_payload(body: &Value) -> Result<TimerPayload, ApiError> {
    let name = match body.get("name").and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => name,
        _ => {
            return Err(ApiError::InvalidInput(
                "Timer name is required and must be a non-empty string".to_string(),
            ))
        }
    };

    let duration = match body.get("duration").and_then(Value::as_f64) {
        Some(duration) if duration > 0.0 => duration,
        _ => {
            return Err(ApiError::InvalidInput(
                "Duration is required and must be a positive number".to_string(),
            ))
        }
    };

    Ok(TimerPayload {
        name: name.to_string(),
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn error_message(body: Value) -> String {
        match validate_timer_payload(&body) {
            Err(ApiError::InvalidInput(message)) => message,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn accepts_a_well_formed_payload() {
        let payload = validate_timer_payload(&json!({"name": "Tea", "duration": 180})).unwrap();
        assert_eq!(payload.name, "Tea");
        assert_eq!(payload.duration, 180.0);
    }

    #[test]
    fn accepts_fractional_durations() {
        let payload = validate_timer_payload(&json!({"name": "Egg", "duration": 0.5})).unwrap();
        assert_eq!(payload.duration, 0.5);
    }

    #[test]
    fn name_passes_through_untrimmed() {
        let payload = validate_timer_payload(&json!({"name": "  Tea ", "duration": 1})).unwrap();
        assert_eq!(payload.name, "  Tea ");
    }

    #[test]
    fn rejects_missing_or_malformed_names() {
        for body in [
            json!({"duration": 10}),
            json!({"name": "", "duration": 10}),
            json!({"name": "   ", "duration": 10}),
            json!({"name": 42, "duration": 10}),
            json!({"name": null, "duration": 10}),
            json!({"name": ["Tea"], "duration": 10}),
        ] {
            assert_eq!(
                error_message(body),
                "Timer name is required and must be a non-empty string"
            );
        }
    }

    #[test]
    fn rejects_missing_or_malformed_durations() {
        for body in [
            json!({"name": "Tea"}),
            json!({"name": "Tea", "duration": 0}),
            json!({"name": "Tea", "duration": -5}),
            json!({"name": "Tea", "duration": "180"}),
            json!({"name": "Tea", "duration": null}),
            json!({"name": "Tea", "duration": true}),
        ] {
            assert_eq!(
                error_message(body),
                "Duration is required and must be a positive number"
            );
        }
    }
}
