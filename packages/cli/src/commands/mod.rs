pub mod focus;
pub mod init;
pub mod report;
pub mod resolve;

pub use focus::{focus, FocusArgs};
pub use init::{init, InitArgs};
pub use report::{report, ReportArgs};
pub use resolve::{resolve, ResolveArgs};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read and deserialize a JSON input file
pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use doclayout::Document;

    #[test]
    fn test_load_json_document() {
        let path = std::env::temp_dir().join("doclayout-cli-load-json.json");
        std::fs::write(&path, r#"{ "uid": "1", "type": "File" }"#).unwrap();

        let document: Document = load_json(&path).unwrap();
        assert_eq!(document.doc_type, "File");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_json_reports_path() {
        let path = std::env::temp_dir().join("doclayout-cli-missing-input.json");
        let err = load_json::<Document>(&path).unwrap_err();
        assert!(err.to_string().contains("doclayout-cli-missing-input.json"));
    }
}
