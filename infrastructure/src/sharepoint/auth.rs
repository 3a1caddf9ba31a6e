//! App-only authentication against SharePoint Online
//!
//! The site advertises its tenant realm and resource principal in the
//! `WWW-Authenticate` challenge of an unauthenticated request. The access
//! control service then issues a bearer token for
//! `{client_id}@{realm}` on resource `{principal}/{host}@{realm}`.

use reqwest::header::{AUTHORIZATION, WWW_AUTHENTICATE};
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

use crate::config::SharePointSettings;
use crate::error::{ConnectError, Result};
use crate::http::{read_json, transport};

/// SharePoint's well-known resource principal, used when the challenge omits it
const SHAREPOINT_PRINCIPAL: &str = "00000003-0000-0ff1-ce00-000000000000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Realm {
    pub realm: String,
    pub principal: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

pub(crate) async fn discover_realm(client: &Client, site_url: &str) -> Result<Realm> {
    let url = format!("{}/_vti_bin/client.svc", site_url);
    debug!("Discovering SharePoint realm via {}", url);
    let response = client
        .get(&url)
        .header(AUTHORIZATION, "Bearer")
        .send()
        .await
        .map_err(|e| ConnectError::remote("discover realm")(transport(e)))?;

    let challenge = response
        .headers()
        .get(WWW_AUTHENTICATE)
        .and_then(|value| value.to_str().ok())
        .ok_or(ConnectError::MissingRealm)?;
    parse_challenge(challenge).ok_or(ConnectError::MissingRealm)
}

fn parse_challenge(challenge: &str) -> Option<Realm> {
    let params = challenge.trim().strip_prefix("Bearer").unwrap_or(challenge);
    let value = |key: &str| {
        params.split(',').find_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            name.trim()
                .eq_ignore_ascii_case(key)
                .then(|| value.trim().trim_matches('"').to_string())
        })
    };

    let realm = value("realm").filter(|r| !r.is_empty())?;
    let principal = value("client_id")
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| SHAREPOINT_PRINCIPAL.to_string());
    Some(Realm { realm, principal })
}

/// Acquire an app-only access token for the configured site.
pub(crate) async fn app_only_token(client: &Client, settings: &SharePointSettings) -> Result<String> {
    let site = Url::parse(&settings.site_url).map_err(|e| {
        ConnectError::Config(crate::config::ConfigError::Invalid {
            field: "sharepoint.site_url",
            reason: e.to_string(),
        })
    })?;
    let host = site.host_str().unwrap_or_default();

    let Realm { realm, principal } = discover_realm(client, &settings.site_url).await?;
    let form = [
        ("grant_type", "client_credentials".to_string()),
        ("client_id", format!("{}@{}", settings.client_id, realm)),
        ("client_secret", settings.client_secret.clone()),
        ("resource", format!("{}/{}@{}", principal, host, realm)),
    ];

    let url = format!("{}/{}/tokens/OAuth/2", settings.acs_url, realm);
    debug!("Requesting app-only token from {}", url);
    let response = client
        .post(&url)
        .form(&form)
        .send()
        .await
        .map_err(|e| ConnectError::remote("acquire SharePoint token")(transport(e)))?;
    let token: TokenResponse = read_json(response)
        .await
        .map_err(ConnectError::remote("acquire SharePoint token"))?;
    Ok(token.access_token)
}
