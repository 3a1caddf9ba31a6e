//! SharePoint Online adapter
//!
//! - `client`: [`SharePointRestClient`], the REST implementation of the site port
//! - `auth`: realm discovery and app-only token exchange
//! - `docx`: [`DocxTextExtractor`] for `.docx` documents

mod auth;
mod client;
mod docx;

pub use client::SharePointRestClient;
pub use docx::DocxTextExtractor;
