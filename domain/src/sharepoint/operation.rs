//! The SharePoint operation table.

use std::str::FromStr;

use crate::tool::{ParamSpec, RiskLevel, ToolDefinition, ToolSpec, UnknownOperation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SharePointOperation {
    ReadList,
    GetAllFiles,
    GetAllFilesInFolder,
    ReadDocument,
}

const READ_LIST: &[ParamSpec] = &[ParamSpec::required(
    "list_title",
    "string",
    "Name of a SharePoint list to be read.",
)];

const LIMIT_FILES: ParamSpec = ParamSpec::optional(
    "limit_files",
    "integer",
    "Limit (maximum number) of files to be returned. Defaults to 10.",
);

const GET_ALL_FILES: &[ParamSpec] = &[LIMIT_FILES];

const GET_ALL_FILES_IN_FOLDER: &[ParamSpec] = &[
    ParamSpec::required(
        "folder_name",
        "string",
        "Folder name to get the list of files from, relative to `Shared Documents`.",
    ),
    LIMIT_FILES,
];

const READ_DOCUMENT: &[ParamSpec] = &[ParamSpec::required(
    "path",
    "string",
    "Server-relative path of the document to read, as returned in the `Path` field of a file listing.",
)];

impl SharePointOperation {
    pub const ALL: [SharePointOperation; 4] = [
        SharePointOperation::ReadList,
        SharePointOperation::GetAllFiles,
        SharePointOperation::GetAllFilesInFolder,
        SharePointOperation::ReadDocument,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SharePointOperation::ReadList => "read_list",
            SharePointOperation::GetAllFiles => "get_all_files",
            SharePointOperation::GetAllFilesInFolder => "get_all_files_in_folder",
            SharePointOperation::ReadDocument => "read_document",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SharePointOperation::ReadList => {
                "Reads a SharePoint list and returns up to 1000 items with their properties as JSON."
            }
            SharePointOperation::GetAllFiles => {
                "Lists files of the configured document library with name, path, creation and modification time and link."
            }
            SharePointOperation::GetAllFilesInFolder => {
                "Recursively lists files below a folder of `Shared Documents`, stopping once the limit is reached."
            }
            SharePointOperation::ReadDocument => {
                "Reads the text content of a document. Supported types are TXT and DOCX."
            }
        }
    }

    pub fn parameters(self) -> &'static [ParamSpec] {
        match self {
            SharePointOperation::ReadList => READ_LIST,
            SharePointOperation::GetAllFiles => GET_ALL_FILES,
            SharePointOperation::GetAllFilesInFolder => GET_ALL_FILES_IN_FOLDER,
            SharePointOperation::ReadDocument => READ_DOCUMENT,
        }
    }

    pub fn definition(self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description(), RiskLevel::Low)
            .with_parameters(self.parameters())
    }
}

impl std::fmt::Display for SharePointOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SharePointOperation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SharePointOperation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

pub fn sharepoint_tool_spec() -> ToolSpec {
    SharePointOperation::ALL
        .into_iter()
        .map(SharePointOperation::definition)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_order() {
        let spec = sharepoint_tool_spec();
        assert_eq!(
            spec.names().collect::<Vec<_>>(),
            vec!["read_list", "get_all_files", "get_all_files_in_folder", "read_document"]
        );
        assert!(spec.all().all(|definition| !definition.is_mutating()));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "read_document".parse::<SharePointOperation>().unwrap(),
            SharePointOperation::ReadDocument
        );
        assert!("delete_document".parse::<SharePointOperation>().is_err());
    }

    #[test]
    fn test_folder_listing_parameters() {
        let def = SharePointOperation::GetAllFilesInFolder.definition();
        let folder = def.parameter("folder_name").unwrap();
        assert!(folder.required);
        let limit = def.parameter("limit_files").unwrap();
        assert!(!limit.required);
        assert_eq!(limit.param_type, "integer");
    }
}
