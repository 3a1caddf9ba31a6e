//! SharePoint toolkit
//!
//! Lists, document libraries and document text for one site.

use std::collections::VecDeque;
use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use toolkits_domain::sharepoint::params::{
    FolderFilesParams, GetAllFilesParams, ReadDocumentParams, ReadListParams,
};
use toolkits_domain::sharepoint::{
    DocumentKind, LibraryItem, SharePointFailure, SharePointFile, SharePointOperation,
    sharepoint_tool_spec,
};
use toolkits_domain::{RemoteError, ToolAdapter, ToolCall, ToolResult, ToolSpec};

use super::{elapsed_ms, resolve};
use crate::ports::document::DocumentTextPort;
use crate::ports::sharepoint::SharePointPort;

/// Items fetched by `read_list`
pub const LIST_ITEM_LIMIT: usize = 1000;
/// Library used by `get_all_files` when no root folder is configured
pub const DEFAULT_LIBRARY: &str = "Documents";
/// Folder that `get_all_files_in_folder` resolves names against
pub const SHARED_DOCUMENTS: &str = "Shared Documents";

pub struct SharePointToolkit<P, D> {
    port: P,
    documents: D,
    root_folder: Option<String>,
    operations: ToolSpec,
}

impl<P: SharePointPort, D: DocumentTextPort> SharePointToolkit<P, D> {
    pub fn new(port: P, documents: D) -> Self {
        info!(site = port.site_url(), "SharePoint toolkit ready");
        Self {
            port,
            documents,
            root_folder: None,
            operations: sharepoint_tool_spec(),
        }
    }

    /// Document library listed by `get_all_files`. Empty names are ignored.
    pub fn with_root_folder(mut self, root_folder: Option<String>) -> Self {
        self.root_folder = root_folder.filter(|name| !name.trim().is_empty());
        self
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    async fn run(&self, operation: SharePointOperation, call: &ToolCall) -> Result<String, SharePointFailure> {
        match operation {
            SharePointOperation::ReadList => {
                let params: ReadListParams = call.parse_args()?;
                self.read_list(&params.list_title).await
            }
            SharePointOperation::GetAllFiles => {
                let params: GetAllFilesParams = call.parse_args()?;
                self.get_all_files(params.limit_files).await
            }
            SharePointOperation::GetAllFilesInFolder => {
                let params: FolderFilesParams = call.parse_args()?;
                self.get_all_files_in_folder(&params.folder_name, params.limit_files)
                    .await
            }
            SharePointOperation::ReadDocument => {
                let params: ReadDocumentParams = call.parse_args()?;
                self.read_document(&params.path).await
            }
        }
    }

    async fn read_list(&self, list_title: &str) -> Result<String, SharePointFailure> {
        let items = self
            .port
            .list_items(list_title, LIST_ITEM_LIMIT)
            .await
            .map_err(SharePointFailure::ListLoad)?;
        info!(list = list_title, count = items.len(), "Loaded list items");
        to_json(&items)
    }

    /// Fetches `limit` library items and keeps the files among them, so the
    /// result can be shorter than `limit` when folders are present.
    async fn get_all_files(&self, limit: usize) -> Result<String, SharePointFailure> {
        if limit == 0 {
            return Ok("[]".to_string());
        }
        let library = self.root_folder.as_deref().unwrap_or(DEFAULT_LIBRARY);
        let files: Vec<SharePointFile> = self
            .port
            .library_items(library, limit)
            .await
            .map_err(SharePointFailure::FileListing)?
            .into_iter()
            .filter_map(LibraryItem::into_file)
            .collect();
        to_json(&files)
    }

    async fn get_all_files_in_folder(&self, folder: &str, limit: usize) -> Result<String, SharePointFailure> {
        let mut files: Vec<SharePointFile> = Vec::new();
        let mut queue = VecDeque::from([format!("{}/{}", SHARED_DOCUMENTS, folder.trim_matches('/'))]);

        while let Some(path) = queue.pop_front() {
            if files.len() >= limit {
                break;
            }
            debug!(folder = %path, "Listing SharePoint folder");
            let contents = self
                .port
                .folder(&path)
                .await
                .map_err(SharePointFailure::FileListing)?;
            let room = limit - files.len();
            files.extend(contents.files.into_iter().take(room));
            queue.extend(contents.folders);
        }
        to_json(&files)
    }

    async fn read_document(&self, path: &str) -> Result<String, SharePointFailure> {
        let kind = DocumentKind::from_path(path);
        if !kind.is_supported() {
            return Err(SharePointFailure::UnsupportedFileType);
        }

        let bytes = self
            .port
            .download(path)
            .await
            .map_err(|cause| SharePointFailure::Download {
                path: path.to_string(),
                cause,
            })?;

        match kind {
            DocumentKind::PlainText => String::from_utf8(bytes).map_err(|_| SharePointFailure::Decode {
                path: path.to_string(),
            }),
            DocumentKind::WordDocument => {
                self.documents
                    .extract_text(&bytes)
                    .map_err(|reason| SharePointFailure::Extraction {
                        path: path.to_string(),
                        reason,
                    })
            }
            DocumentKind::Unsupported => Err(SharePointFailure::UnsupportedFileType),
        }
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, SharePointFailure> {
    serde_json::to_string(value)
        .map_err(|e| SharePointFailure::FileListing(RemoteError::Decode(e.to_string())))
}

#[async_trait]
impl<P: SharePointPort, D: DocumentTextPort> ToolAdapter for SharePointToolkit<P, D> {
    fn id(&self) -> &str {
        "sharepoint"
    }

    fn operations(&self) -> &ToolSpec {
        &self.operations
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let started = Instant::now();
        let operation: SharePointOperation = match resolve(&self.operations, call) {
            Ok(operation) => operation,
            Err(e) => {
                warn!(tool = %call.tool_name, "Rejected SharePoint call: {}", e);
                return ToolResult::failure(&call.tool_name, e).with_adapter(self.id());
            }
        };

        debug!(operation = %operation, site = self.port.site_url(), "Executing SharePoint operation");
        let outcome = self.run(operation, call).await;
        if let Err(failure) = &outcome {
            warn!(operation = %operation, code = failure.code(), "SharePoint operation failed: {}", failure);
        }

        ToolResult::from_outcome(operation.name(), outcome)
            .with_duration(elapsed_ms(started))
            .with_adapter(self.id())
    }
}
