//! Error types for the layout host

use doclayout_common::CommonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Document error: {0}")]
    Document(#[from] CommonError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Edit path does not address the bound document: {0}")]
    InvalidPath(String),
}
