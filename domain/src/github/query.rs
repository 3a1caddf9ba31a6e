//! Free-text query formats used by the write operations.
//!
//! Agents pass a single string for comments, pull requests and file updates;
//! these types split that string into its parts.

use thiserror::Error;

const OLD_OPEN: &str = "OLD <<<<";
const OLD_CLOSE: &str = ">>>> OLD";
const NEW_OPEN: &str = "NEW <<<<";
const NEW_CLOSE: &str = ">>>> NEW";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("The comment query must start with the issue number, followed by a blank line and the comment. Got `{0}` as issue number.")]
    IssueNumber(String),

    #[error("The comment query has no comment text after the issue number.")]
    EmptyComment,

    #[error("The pull request query must start with a title on its first line.")]
    EmptyTitle,

    #[error("The update query must start with the file path on its first line.")]
    MissingPath,

    #[error("The update query is missing the `{open}` ... `{close}` block.")]
    MissingBlock {
        open: &'static str,
        close: &'static str,
    },
}

/// `<issue number>\n\n<comment>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentQuery {
    pub issue_number: u64,
    pub body: String,
}

impl CommentQuery {
    pub fn parse(query: &str) -> Result<Self, QueryError> {
        let (head, body) = query.split_once("\n\n").unwrap_or((query, ""));
        let head = head.trim();
        let issue_number = head
            .trim_start_matches('#')
            .parse()
            .map_err(|_| QueryError::IssueNumber(head.to_string()))?;

        let body = body.trim();
        if body.is_empty() {
            return Err(QueryError::EmptyComment);
        }

        Ok(Self {
            issue_number,
            body: body.to_string(),
        })
    }
}

/// `<title>\n<body...>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestQuery {
    pub title: String,
    pub body: String,
}

impl PullRequestQuery {
    pub fn parse(query: &str) -> Result<Self, QueryError> {
        let query = query.trim_start();
        let (title, body) = query.split_once('\n').unwrap_or((query, ""));
        let title = title.trim();
        if title.is_empty() {
            return Err(QueryError::EmptyTitle);
        }

        Ok(Self {
            title: title.to_string(),
            body: body.trim().to_string(),
        })
    }
}

/// A search-and-replace edit of one file:
///
/// ```text
/// path/to/file.py
/// OLD <<<<
/// old text
/// >>>> OLD
/// NEW <<<<
/// new text
/// >>>> NEW
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpdate {
    pub path: String,
    pub old: String,
    pub new: String,
}

impl FileUpdate {
    pub fn parse(query: &str) -> Result<Self, QueryError> {
        let query = query.trim_start();
        let path = query.lines().next().map(str::trim).unwrap_or_default();
        if path.is_empty() || path.starts_with(OLD_OPEN) {
            return Err(QueryError::MissingPath);
        }

        Ok(Self {
            path: path.to_string(),
            old: between(query, OLD_OPEN, OLD_CLOSE)?.to_string(),
            new: between(query, NEW_OPEN, NEW_CLOSE)?.to_string(),
        })
    }

    /// Replace every occurrence of the old text.
    ///
    /// Returns `None` when nothing would change, either because the old text
    /// is absent or because the replacement is identical.
    pub fn apply(&self, current: &str) -> Option<String> {
        if self.old.is_empty() || !current.contains(&self.old) {
            return None;
        }
        let updated = current.replace(&self.old, &self.new);
        (updated != current).then_some(updated)
    }
}

fn between<'a>(text: &'a str, open: &'static str, close: &'static str) -> Result<&'a str, QueryError> {
    let missing = || QueryError::MissingBlock { open, close };
    let (_, rest) = text.split_once(open).ok_or_else(missing)?;
    let (inner, _) = rest.split_once(close).ok_or_else(missing)?;
    Ok(inner.trim())
}
