//! SharePoint domain: operation table, parameters, document kinds and
//! failures.

pub mod document;
pub mod entities;
pub mod failure;
pub mod operation;
pub mod params;

pub use document::{DocumentKind, UNSUPPORTED_FILE_TYPE};
pub use entities::{FolderContents, LibraryItem, SharePointFile};
pub use failure::SharePointFailure;
pub use operation::{SharePointOperation, sharepoint_tool_spec};
pub use params::DEFAULT_FILE_LIMIT;
