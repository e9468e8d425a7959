//! Shared argument types and response helpers for the tool definitions.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::domains::tools::ToolError;

/// Appended to service env results when the build-time flag is set.
pub const SERVICE_BUILD_TIME_WARNING: &str = "\n\nWarning: is_build_time has no effect on services. Services run pre-built images and are never built from source, so build-time variables are ignored.";

/// Arguments for tools that take none.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Arguments for tools addressing a single resource by uuid.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UuidParams {
    #[schemars(description = "UUID of the resource. Obtain it from the matching list_* tool.")]
    pub uuid: String,
}

/// Render an API response the way every tool returns it: pretty-printed JSON.
pub fn json_text(value: &Value) -> Result<String, ToolError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Append the service build-time advisory when it applies.
pub fn with_build_time_warning(text: String, build_time: bool) -> String {
    if build_time {
        text + SERVICE_BUILD_TIME_WARNING
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_text_is_pretty_printed() {
        let text = json_text(&json!({"uuid": "a"})).unwrap();
        assert_eq!(text, "{\n  \"uuid\": \"a\"\n}");
    }

    #[test]
    fn test_warning_only_when_flag_set() {
        assert_eq!(with_build_time_warning("ok".to_string(), false), "ok");
        assert_eq!(
            with_build_time_warning("ok".to_string(), true),
            format!("ok{}", SERVICE_BUILD_TIME_WARNING)
        );
    }

    #[test]
    fn test_uuid_params_require_string() {
        assert!(serde_json::from_value::<UuidParams>(json!({})).is_err());
        assert!(serde_json::from_value::<UuidParams>(json!({"uuid": 7})).is_err());
        assert!(serde_json::from_value::<UuidParams>(json!({"uuid": "x"})).is_ok());
    }
}
