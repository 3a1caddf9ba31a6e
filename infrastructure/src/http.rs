//! Shared HTTP plumbing for the REST clients

use reqwest::header::HeaderMap;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use toolkits_domain::RemoteError;

use crate::config::HttpSettings;
use crate::error::ConnectError;

pub(crate) fn build_client(settings: &HttpSettings, headers: HeaderMap) -> Result<Client, ConnectError> {
    Client::builder()
        .timeout(settings.timeout)
        .user_agent(settings.user_agent.as_str())
        .default_headers(headers)
        .build()
        .map_err(ConnectError::Client)
}

pub(crate) fn transport(err: reqwest::Error) -> RemoteError {
    RemoteError::Transport(err.to_string())
}

/// Pass successful responses through; turn everything else into a status error
/// carrying the service's own message when it sent one.
pub(crate) async fn expect_success(response: Response) -> Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body)
        .or_else(|| status.canonical_reason().map(String::from))
        .unwrap_or_else(|| "Unknown".to_string());
    Err(RemoteError::status(status.as_u16(), message))
}

pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RemoteError> {
    let response = expect_success(response).await?;
    let bytes = response.bytes().await.map_err(transport)?;
    serde_json::from_slice(&bytes).map_err(|e| RemoteError::Decode(e.to_string()))
}

pub(crate) async fn read_bytes(response: Response) -> Result<Vec<u8>, RemoteError> {
    let response = expect_success(response).await?;
    Ok(response.bytes().await.map_err(transport)?.to_vec())
}

/// GitHub sends `{"message": ..}`, SharePoint `{"odata.error": {"message": {"value": ..}}}`,
/// token endpoints `{"error_description": ..}`.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let text = value
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| {
            ["odata.error", "error"]
                .iter()
                .find_map(|key| value.get(key)?.get("message")?.get("value")?.as_str())
        })
        .or_else(|| value.get("error_description").and_then(Value::as_str))?;
    Some(text.trim().to_string()).filter(|t| !t.is_empty())
}

/// Percent-encode each segment of a slash-separated path.
pub(crate) fn encode_path(path: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_shapes() {
        assert_eq!(error_message(r#"{"message":"Not Found"}"#).as_deref(), Some("Not Found"));
        assert_eq!(
            error_message(r#"{"odata.error":{"code":"-2147024894","message":{"lang":"en-US","value":"File Not Found."}}}"#)
                .as_deref(),
            Some("File Not Found.")
        );
        assert_eq!(
            error_message(r#"{"error":"invalid_client","error_description":"AADSTS7000215: Invalid client secret"}"#)
                .as_deref(),
            Some("AADSTS7000215: Invalid client secret")
        );
        assert_eq!(error_message("<html>oops</html>"), None);
    }

    #[test]
    fn test_encode_path() {
        assert_eq!(encode_path("docs/My File.md"), "docs/My%20File.md");
        assert_eq!(encode_path("/a//b/"), "a/b");
        assert_eq!(encode_path(""), "");
    }
}
