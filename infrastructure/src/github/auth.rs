//! GitHub App authentication
//!
//! An app authenticates as itself with a short-lived RS256 JWT, then trades
//! it for an installation access token that the client uses from then on.

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

use super::models::{Installation, InstallationToken};
use crate::error::{ConnectError, Result};
use crate::http::{read_json, transport};

/// Issued-at is backdated to tolerate clock drift
const CLOCK_DRIFT_SECS: i64 = 60;
/// GitHub rejects app JWTs that expire more than ten minutes out
const JWT_LIFETIME_SECS: i64 = 540;

#[derive(Debug, Serialize)]
struct AppClaims<'a> {
    iat: i64,
    exp: i64,
    iss: &'a str,
}

pub(crate) fn app_jwt(app_id: &str, private_key: &str) -> Result<String> {
    let now = Utc::now().timestamp();
    let claims = AppClaims {
        iat: now - CLOCK_DRIFT_SECS,
        exp: now + JWT_LIFETIME_SECS,
        iss: app_id,
    };
    let key = EncodingKey::from_rsa_pem(private_key.as_bytes())?;
    Ok(encode(&Header::new(Algorithm::RS256), &claims, &key)?)
}

/// Exchange the app identity for an access token of its first installation.
pub(crate) async fn installation_token(
    client: &Client,
    base_url: &str,
    app_id: &str,
    private_key: &str,
) -> Result<String> {
    let jwt = app_jwt(app_id, private_key)?;

    debug!("Listing installations of GitHub App {}", app_id);
    let response = client
        .get(format!("{}/app/installations", base_url))
        .bearer_auth(&jwt)
        .send()
        .await
        .map_err(|e| ConnectError::remote("list app installations")(transport(e)))?;
    let installations: Vec<Installation> = read_json(response)
        .await
        .map_err(ConnectError::remote("list app installations"))?;

    let installation = installations
        .first()
        .ok_or_else(|| ConnectError::NoInstallation {
            app_id: app_id.to_string(),
        })?;

    let response = client
        .post(format!("{}/app/installations/{}/access_tokens", base_url, installation.id))
        .bearer_auth(&jwt)
        .send()
        .await
        .map_err(|e| ConnectError::remote("create installation token")(transport(e)))?;
    let token: InstallationToken = read_json(response)
        .await
        .map_err(ConnectError::remote("create installation token"))?;

    info!("Authenticated as installation {} of GitHub App {}", installation.id, app_id);
    Ok(token.token)
}
