use thiserror::Error;

use super::document::UNSUPPORTED_FILE_TYPE;
use crate::remote::RemoteError;
use crate::tool::{ArgumentError, ToolError};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SharePointFailure {
    #[error(transparent)]
    Arguments(#[from] ArgumentError),

    #[error("Failed to load items from SharePoint: {0}")]
    ListLoad(RemoteError),

    #[error("Failed to load files from SharePoint: {0}")]
    FileListing(RemoteError),

    #[error("Failed to download `{path}` from SharePoint: {cause}")]
    Download { path: String, cause: RemoteError },

    #[error("File `{path}` is not valid UTF-8 text.")]
    Decode { path: String },

    #[error("Failed to read text from `{path}`: {reason}")]
    Extraction { path: String, reason: String },

    #[error("{}", UNSUPPORTED_FILE_TYPE)]
    UnsupportedFileType,
}

impl SharePointFailure {
    pub fn code(&self) -> &'static str {
        match self {
            SharePointFailure::Arguments(_) => ToolError::INVALID_ARGUMENT,
            SharePointFailure::UnsupportedFileType => ToolError::UNSUPPORTED,
            SharePointFailure::Download { cause, .. } if cause.is_not_found() => {
                ToolError::NOT_FOUND
            }
            _ => ToolError::EXECUTION_FAILED,
        }
    }
}

impl From<SharePointFailure> for ToolError {
    fn from(failure: SharePointFailure) -> Self {
        ToolError::new(failure.code(), failure.to_string())
    }
}
