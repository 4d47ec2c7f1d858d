//! File helpers for scanning reStructuredText documents.

use std::{fs, path::Path};

use crate::{
    document::{ScanConfig, scan_text},
    element::ElementList,
    error::ScanError,
};

/// Read `path` and collect its explicit markup constructs.
///
/// # Errors
/// Returns [`ScanError::Read`] if the file cannot be read as UTF-8 text.
pub fn scan_file(path: &Path, config: &ScanConfig) -> Result<ElementList, ScanError> {
    let text = fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(scan_text(&text, config))
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::element::LineRange;

    #[test]
    fn scans_file_contents() {
        let dir = tempdir().expect("failed to create temporary directory");
        let file = dir.path().join("sample.rst");
        fs::write(&file, "Text.\n\n.. [CITE] A citation.\n").expect("failed to write file");
        let elements = scan_file(&file, &ScanConfig::default()).expect("scan should succeed");
        assert_eq!(elements.len(), 1);
        assert_eq!(elements.as_slice()[0].kind_name(), "citation");
        assert_eq!(elements.as_slice()[0].range(), LineRange::single(3));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempdir().expect("failed to create temporary directory");
        let file = dir.path().join("missing.rst");
        let err = scan_file(&file, &ScanConfig::default()).expect_err("scan should fail");
        assert!(matches!(err, ScanError::Read { .. }));
        assert!(err.to_string().contains("missing.rst"));
    }
}
