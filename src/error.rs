//! Domain error types for the publish pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a publish run.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Unknown section kinds are a hard stop; rendering unrecognized
    /// content risks emitting broken markup.
    #[error("unknown section kind `{kind}` in section `{id}`")]
    UnknownSection { id: String, kind: String },

    #[error("project `{0}` not found")]
    ProjectNotFound(String),

    #[error("theme `{0}` not found")]
    ThemeNotFound(String),

    #[error("user `{user}` does not own project `{slug}`")]
    Forbidden { user: String, slug: String },

    #[error("project `{0}` has password visibility but no password is set")]
    MissingPassword(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors from the project and edge stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error at `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("malformed record at `{0}`")]
    Malformed(PathBuf, #[source] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
