//! File adapters behind the Load Dataset and Save Results actions.
//!
//! Nothing here parses data: a dataset is only a path, and results are
//! written as the raw text that is on screen.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PlatformError, Result};

/// A dataset chosen by the user. The file is never opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetReference {
    pub path: PathBuf,
}

impl DatasetReference {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The final path component, or the whole path if there is none.
    pub fn base_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Text for the Data tab preview area.
    pub fn preview_text(&self) -> String {
        format!(
            "Dataset loaded from:\n{}\n\nDataset preview will appear here...",
            self.path.display()
        )
    }
}

/// Appends `.{extension}` when `path` has no extension of its own.
pub fn with_default_extension(path: &Path, extension: Option<&str>) -> PathBuf {
    match extension {
        Some(ext) if path.extension().is_none() => path.with_extension(ext),
        _ => path.to_path_buf(),
    }
}

/// Writes `text` verbatim to `path`, replacing any existing file.
pub fn write_results(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| PlatformError::Save {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name_of_missing_file() {
        let dataset = DatasetReference::new("/no/such/dir/iris.csv");
        assert_eq!(dataset.base_name(), "iris.csv");
        assert!(dataset.preview_text().contains("/no/such/dir/iris.csv"));
    }

    #[test]
    fn test_base_name_without_file_component() {
        let dataset = DatasetReference::new("/");
        assert_eq!(dataset.base_name(), "/");
    }

    #[test]
    fn test_default_extension() {
        assert_eq!(
            with_default_extension(Path::new("out/results"), Some("txt")),
            PathBuf::from("out/results.txt")
        );
        assert_eq!(
            with_default_extension(Path::new("out/results.json"), Some("txt")),
            PathBuf::from("out/results.json")
        );
        assert_eq!(
            with_default_extension(Path::new("out/results"), None),
            PathBuf::from("out/results")
        );
    }

    #[test]
    fn test_write_results_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");
        write_results(&path, "line one\nline two").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "line one\nline two");
    }

    #[test]
    fn test_write_results_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("results.txt");
        let err = write_results(&path, "text").unwrap_err();
        assert!(matches!(err, PlatformError::Save { path: ref p, .. } if *p == path));
    }
}
