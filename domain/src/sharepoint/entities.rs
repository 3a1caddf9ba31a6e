use serde::{Deserialize, Serialize};

/// One file of a document library, serialized with the field names agents
/// see in listing output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePointFile {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Path")]
    pub path: String,
    #[serde(rename = "Created")]
    pub created: String,
    #[serde(rename = "Modified")]
    pub modified: String,
    #[serde(rename = "Link")]
    pub link: String,
}

/// An item of a document library, which may be a file or a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryItem {
    File(SharePointFile),
    Folder,
}

impl LibraryItem {
    pub fn into_file(self) -> Option<SharePointFile> {
        match self {
            LibraryItem::File(file) => Some(file),
            LibraryItem::Folder => None,
        }
    }
}

/// Immediate children of a folder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderContents {
    pub files: Vec<SharePointFile>,
    /// Server-relative paths of subfolders
    pub folders: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_serializes_with_listing_names() {
        let file = SharePointFile {
            name: "a.txt".into(),
            path: "/sites/s/Shared Documents/a.txt".into(),
            created: "2024-01-01T00:00:00Z".into(),
            modified: "2024-01-02T00:00:00Z".into(),
            link: "https://contoso.sharepoint.com/sites/s/Shared%20Documents/a.txt".into(),
        };
        let value = serde_json::to_value(&file).unwrap();
        assert_eq!(value["Name"], "a.txt");
        assert_eq!(value["Path"], "/sites/s/Shared Documents/a.txt");
        assert!(value.get("name").is_none());
    }

    #[test]
    fn test_folder_item_has_no_file() {
        assert_eq!(LibraryItem::Folder.into_file(), None);
    }
}
