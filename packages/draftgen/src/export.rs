//! File export for generated documents.
//!
//! Each workflow offers the full response as a single downloadable file;
//! the payload/name/type triple is fixed per workflow.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;

/// Suggested file name and MIME type for a workflow's export.
#[derive(Debug, Clone, Copy)]
pub struct FileExport {
    /// Suggested file name
    pub file_name: &'static str,

    /// MIME type of the payload
    pub mime_type: &'static str,
}

/// Write the payload to `dir/file_name`, creating `dir` if needed.
///
/// Returns the path written.
pub fn write_export(dir: &Path, export: &FileExport, payload: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export.file_name);
    std::fs::write(&path, payload)?;

    info!(
        path = %path.display(),
        mime_type = export.mime_type,
        bytes = payload.len(),
        "Export written"
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_export_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let export = FileExport {
            file_name: "project_details.txt",
            mime_type: "text/plain",
        };

        let path = write_export(dir.path(), &export, "full response").unwrap();

        assert_eq!(path, dir.path().join("project_details.txt"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "full response");
    }

    #[test]
    fn test_write_export_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out/docs");
        let export = FileExport {
            file_name: "product_requirements_document.md",
            mime_type: "text/markdown",
        };

        let path = write_export(&nested, &export, "# PRD").unwrap();

        assert!(path.exists());
    }
}
