//! Building a [`ToolCall`] from command-line arguments

use serde_json::{Map, Value};
use thiserror::Error;
use toolkits_domain::ToolCall;

/// Command-line arguments that do not form a valid argument object
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvocationError {
    #[error("--args is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("--args must be a JSON object")]
    NotAnObject,
    #[error("--arg expects KEY=VALUE, got `{0}`")]
    MalformedPair(String),
}

/// Merge `--args` JSON with `--arg KEY=VALUE` pairs; pairs win on conflicts.
///
/// Pair values are always strings. Numeric parameters accept numeric text,
/// and typed values can still be passed through `--args`.
pub fn build_call(tool: &str, json: Option<&str>, pairs: &[String]) -> Result<ToolCall, InvocationError> {
    let mut arguments = match json {
        Some(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => map,
            Ok(_) => return Err(InvocationError::NotAnObject),
            Err(e) => return Err(InvocationError::InvalidJson(e.to_string())),
        },
        None => Map::new(),
    };

    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .filter(|(key, _)| !key.trim().is_empty())
            .ok_or_else(|| InvocationError::MalformedPair(pair.clone()))?;
        arguments.insert(key.trim().to_string(), Value::String(value.to_string()));
    }

    Ok(ToolCall::new(tool).with_arguments(arguments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use toolkits_domain::github::params::CreateFileParams;

    #[test]
    fn test_pairs_override_json() {
        let call = build_call(
            "get_all_files_in_folder",
            Some(r#"{"folder_name": "Reports", "limit_files": 10}"#),
            &["limit_files=3".to_string()],
        )
        .unwrap();
        assert_eq!(call.tool_name, "get_all_files_in_folder");
        assert_eq!(call.get_string("folder_name"), Some("Reports"));
        assert_eq!(call.arguments.get("limit_files"), Some(&json!("3")));
    }

    #[test]
    fn test_numeric_looking_pairs_stay_strings() {
        let call = build_call(
            "create_file",
            None,
            &["file_path=a.txt".to_string(), "file_contents=42".to_string()],
        )
        .unwrap();
        let params: CreateFileParams = call.parse_args().unwrap();
        assert_eq!(params.file_contents, "42");

        let call = build_call("set_active_branch", None, &["branch_name=2024".to_string()]).unwrap();
        assert_eq!(call.get_string("branch_name"), Some("2024"));

        let call = build_call("get_all_files_in_folder", None, &["folder_name=true".to_string()]).unwrap();
        assert_eq!(call.get_string("folder_name"), Some("true"));
    }

    #[test]
    fn test_typed_values_through_json() {
        let call = build_call("get_issue", Some(r#"{"issue_number": 7}"#), &[]).unwrap();
        assert_eq!(call.arguments.get("issue_number"), Some(&json!(7)));
    }

    #[test]
    fn test_values_with_equals_and_text() {
        let call = build_call(
            "create_file",
            None,
            &["file_path=a.env".to_string(), "file_contents=KEY=value".to_string()],
        )
        .unwrap();
        assert_eq!(call.get_string("file_contents"), Some("KEY=value"));
        assert_eq!(call.get_string("file_path"), Some("a.env"));
    }

    #[test]
    fn test_quoted_json_strings_stay_verbatim() {
        let call = build_call("read_file", None, &[r#"file_path="x.md""#.to_string()]).unwrap();
        assert_eq!(call.get_string("file_path"), Some(r#""x.md""#));
    }

    #[test]
    fn test_rejections() {
        assert_eq!(
            build_call("x", Some("[1, 2]"), &[]).unwrap_err(),
            InvocationError::NotAnObject
        );
        assert!(matches!(
            build_call("x", Some("{oops"), &[]).unwrap_err(),
            InvocationError::InvalidJson(_)
        ));
        assert_eq!(
            build_call("x", None, &["novalue".to_string()]).unwrap_err(),
            InvocationError::MalformedPair("novalue".into())
        );
    }
}
