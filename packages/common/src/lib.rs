//! Data shared between the document layout and its collaborators:
//! documents, validation reports, and the common error type.

pub mod document;
pub mod error;
pub mod report;
pub mod result;

pub use document::*;
pub use error::*;
pub use report::*;
pub use result::*;
