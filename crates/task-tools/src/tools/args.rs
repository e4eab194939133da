//! Argument extraction shared by the task tools

use task_core::ToolError;

pub fn required_str<'a>(args: &'a serde_json::Value, key: &str) -> Result<&'a str, ToolError> {
    args[key]
        .as_str()
        .ok_or_else(|| ToolError::InvalidArguments(format!("Missing '{}' parameter", key)))
}

pub fn optional_str<'a>(args: &'a serde_json::Value, key: &str) -> Option<&'a str> {
    args[key].as_str()
}

/// Accepts a JSON integer or a string of digits
pub fn task_id(args: &serde_json::Value) -> Result<u32, ToolError> {
    let value = &args["task_id"];

    let id = match value {
        serde_json::Value::Null => {
            return Err(ToolError::InvalidArguments(
                "Missing 'task_id' parameter".to_string(),
            ))
        }
        serde_json::Value::Number(number) => number.as_u64(),
        serde_json::Value::String(text) => text.trim().trim_start_matches('#').parse::<u64>().ok(),
        _ => None,
    };

    id.and_then(|id| u32::try_from(id).ok()).ok_or_else(|| {
        ToolError::InvalidArguments(format!(
            "'task_id' must be a non-negative integer, got {}",
            value
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn task_id_accepts_numbers_and_digit_strings() {
        assert_eq!(task_id(&json!({"task_id": 3})), Ok(3));
        assert_eq!(task_id(&json!({"task_id": "7"})), Ok(7));
        assert_eq!(task_id(&json!({"task_id": "#2"})), Ok(2));
    }

    #[test]
    fn task_id_rejects_missing_and_malformed_values() {
        assert!(matches!(
            task_id(&json!({})),
            Err(ToolError::InvalidArguments(msg)) if msg == "Missing 'task_id' parameter"
        ));
        assert!(task_id(&json!({"task_id": -1})).is_err());
        assert!(task_id(&json!({"task_id": 1.5})).is_err());
        assert!(task_id(&json!({"task_id": "one"})).is_err());
        assert!(task_id(&json!({"task_id": 5_000_000_000u64})).is_err());
    }

    #[test]
    fn required_str_reports_key() {
        let err = required_str(&json!({"other": "x"}), "description").unwrap_err();
        assert_eq!(
            err,
            ToolError::InvalidArguments("Missing 'description' parameter".to_string())
        );
        assert_eq!(optional_str(&json!({"result": "ok"}), "result"), Some("ok"));
        assert_eq!(optional_str(&json!({}), "result"), None);
    }
}
