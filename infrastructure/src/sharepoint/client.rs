//! SharePoint REST client
//!
//! Talks to the site's `_api` endpoints with `odata=nometadata` JSON, which
//! keeps payloads to plain property maps.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use toolkits_application::SharePointPort;
use toolkits_domain::RemoteError;
use toolkits_domain::sharepoint::{FolderContents, LibraryItem, SharePointFile};
use tracing::{debug, info};

use super::auth;
use crate::config::{HttpSettings, SharePointSettings};
use crate::error::{ConnectError, Result};
use crate::http::{build_client, read_bytes, read_json, transport};

const ODATA_JSON: &str = "application/json;odata=nometadata";
/// `FileSystemObjectType` of a plain file
const FILE_OBJECT_TYPE: i64 = 0;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Web {
    title: String,
    server_relative_url: String,
}

#[derive(Debug, Deserialize)]
struct Collection<T> {
    value: Vec<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FileProperties {
    name: String,
    server_relative_url: String,
    #[serde(default)]
    time_created: String,
    #[serde(default)]
    time_last_modified: String,
    #[serde(default)]
    linking_url: Option<String>,
}

impl From<FileProperties> for SharePointFile {
    fn from(file: FileProperties) -> Self {
        SharePointFile {
            name: file.name,
            path: file.server_relative_url,
            created: file.time_created,
            modified: file.time_last_modified,
            link: file.linking_url.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct LibraryEntry {
    file_system_object_type: i64,
    #[serde(default)]
    file: Option<FileProperties>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FolderProperties {
    server_relative_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FolderResponse {
    #[serde(default)]
    files: Vec<FileProperties>,
    #[serde(default)]
    folders: Vec<FolderProperties>,
}

/// Authenticated client bound to one site
pub struct SharePointRestClient {
    client: Client,
    site_url: String,
    /// Server-relative URL of the site, e.g. `/sites/team`
    site_path: String,
    token: String,
}

impl SharePointRestClient {
    /// Acquire an app-only token and load the site's web metadata.
    pub async fn connect(settings: &SharePointSettings, http: &HttpSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ODATA_JSON));
        let client = build_client(http, headers)?;

        let token = auth::app_only_token(&client, settings).await?;
        let mut this = Self {
            client,
            site_url: settings.site_url.clone(),
            site_path: String::new(),
            token,
        };

        let web: Web = this
            .get_json(&this.api_url("/web"))
            .await
            .map_err(ConnectError::remote("load SharePoint site"))?;
        info!("Connected to SharePoint site {} ({})", web.title, web.server_relative_url);
        this.site_path = web.server_relative_url.trim_end_matches('/').to_string();
        Ok(this)
    }

    fn api_url(&self, suffix: &str) -> String {
        format!("{}/_api{}", self.site_url, suffix)
    }

    /// Paths without a leading slash are taken relative to the site.
    fn server_relative(&self, path: &str) -> String {
        if path.starts_with('/') {
            path.to_string()
        } else {
            format!("{}/{}", self.site_path, path)
        }
    }

    async fn get(&self, url: &str) -> std::result::Result<reqwest::Response, RemoteError> {
        debug!("GET {}", url);
        self.client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(transport)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> std::result::Result<T, RemoteError> {
        read_json(self.get(url).await?).await
    }
}

/// Quote a value as an OData string literal inside a URL path.
fn odata_literal(value: &str) -> String {
    let escaped = value.replace('\'', "''");
    format!("'{}'", urlencoding::encode(&escaped).replace("%2F", "/"))
}

#[async_trait]
impl SharePointPort for SharePointRestClient {
    fn site_url(&self) -> &str {
        &self.site_url
    }

    async fn list_items(&self, list_title: &str, top: usize) -> std::result::Result<Vec<Map<String, Value>>, RemoteError> {
        let url = self.api_url(&format!(
            "/web/lists/GetByTitle({})/items?$top={}",
            odata_literal(list_title),
            top
        ));
        let items: Collection<Map<String, Value>> = self.get_json(&url).await?;
        Ok(items.value)
    }

    async fn library_items(&self, library_title: &str, top: usize) -> std::result::Result<Vec<LibraryItem>, RemoteError> {
        let url = self.api_url(&format!(
            "/web/lists/GetByTitle({})/items?$top={}&$select=FileSystemObjectType,File&$expand=File",
            odata_literal(library_title),
            top
        ));
        let items: Collection<LibraryEntry> = self.get_json(&url).await?;
        Ok(items
            .value
            .into_iter()
            .map(|entry| match entry.file {
                Some(file) if entry.file_system_object_type == FILE_OBJECT_TYPE => {
                    LibraryItem::File(file.into())
                }
                _ => LibraryItem::Folder,
            })
            .collect())
    }

    async fn folder(&self, path: &str) -> std::result::Result<FolderContents, RemoteError> {
        let url = self.api_url(&format!(
            "/web/GetFolderByServerRelativeUrl({})?$expand=Files,Folders",
            odata_literal(&self.server_relative(path))
        ));
        let folder: FolderResponse = self.get_json(&url).await?;
        Ok(FolderContents {
            files: folder.files.into_iter().map(SharePointFile::from).collect(),
            folders: folder
                .folders
                .into_iter()
                .map(|f| f.server_relative_url)
                .collect(),
        })
    }

    async fn download(&self, path: &str) -> std::result::Result<Vec<u8>, RemoteError> {
        let url = self.api_url(&format!(
            "/web/GetFileByServerRelativeUrl({})/$value",
            odata_literal(&self.server_relative(path))
        ));
        read_bytes(self.get(&url).await?).await
    }
}
