//! SharePoint site port

use async_trait::async_trait;
use serde_json::{Map, Value};
use toolkits_domain::RemoteError;
use toolkits_domain::sharepoint::{FolderContents, LibraryItem};

/// Access to one SharePoint site.
#[async_trait]
pub trait SharePointPort: Send + Sync {
    /// Absolute URL of the bound site
    fn site_url(&self) -> &str;

    /// Property maps of the first `top` items of a list
    async fn list_items(&self, list_title: &str, top: usize) -> Result<Vec<Map<String, Value>>, RemoteError>;

    /// First `top` items of a document library, files and folders alike
    async fn library_items(&self, library_title: &str, top: usize) -> Result<Vec<LibraryItem>, RemoteError>;

    /// Immediate files and subfolders of a folder. `path` may be
    /// server-relative or relative to the site.
    async fn folder(&self, path: &str) -> Result<FolderContents, RemoteError>;

    /// Raw bytes of the file at a server-relative path
    async fn download(&self, path: &str) -> Result<Vec<u8>, RemoteError>;
}
