use thiserror::Error;

/// Common error type shared by the doclayout crates
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Path does not address the document: {0}")]
    InvalidPath(String),
}
