use serde::Deserialize;

use crate::tool::args::deserialize_count;

pub const DEFAULT_FILE_LIMIT: usize = 10;

fn default_limit() -> usize {
    DEFAULT_FILE_LIMIT
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReadListParams {
    pub list_title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetAllFilesParams {
    #[serde(default = "default_limit", deserialize_with = "deserialize_count")]
    pub limit_files: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FolderFilesParams {
    pub folder_name: String,
    #[serde(default = "default_limit", deserialize_with = "deserialize_count")]
    pub limit_files: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReadDocumentParams {
    pub path: String,
}
