//! GitHub REST adapter
//!
//! - `client`: [`GitHubRestClient`], the [`GitHubPort`](toolkits_application::GitHubPort) implementation
//! - `auth`: GitHub App JWT and installation token exchange
//! - `models`: wire payloads

mod auth;
mod client;
mod models;

pub use client::GitHubRestClient;
