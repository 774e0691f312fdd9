//! Directory traversal error types

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Traversal error with the path that could not be read
#[derive(Error, Debug)]
#[error("{}", format_scan_error(self))]
pub struct ScanError {
    /// The kind of traversal error
    pub kind: ScanErrorKind,
    /// Path associated with the error (if any)
    pub path: Option<PathBuf>,
    /// Underlying I/O error (if any)
    #[source]
    pub source: Option<std::io::Error>,
}

/// Kind of traversal error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// Root or a directory vanished
    NotFound,
    /// Directory cannot be listed
    PermissionDenied,
    /// Symbolic link loop while following links
    Loop,
    /// Generic I/O error
    Other,
}

impl ScanError {
    /// Create a not found error
    pub fn not_found(path: &Path) -> Self {
        Self {
            kind: ScanErrorKind::NotFound,
            path: Some(path.to_path_buf()),
            source: None,
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: &Path, source: std::io::Error) -> Self {
        Self {
            kind: ScanErrorKind::PermissionDenied,
            path: Some(path.to_path_buf()),
            source: Some(source),
        }
    }

    /// Create a traversal error from a standard I/O error
    pub fn from_std(source: std::io::Error) -> Self {
        let kind = match source.kind() {
            std::io::ErrorKind::NotFound => ScanErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => ScanErrorKind::PermissionDenied,
            _ => ScanErrorKind::Other,
        };

        Self {
            kind,
            path: None,
            source: Some(source),
        }
    }

    /// Attach a path to the error
    pub fn with_path(mut self, path: &Path) -> Self {
        self.path = Some(path.to_path_buf());
        self
    }
}

impl From<walkdir::Error> for ScanError {
    fn from(error: walkdir::Error) -> Self {
        let path = error.path().map(Path::to_path_buf);

        if let Some(ancestor) = error.loop_ancestor() {
            return Self {
                kind: ScanErrorKind::Loop,
                path: path.or_else(|| Some(ancestor.to_path_buf())),
                source: None,
            };
        }

        match error.into_io_error() {
            Some(io_error) => {
                let mut scan_error = Self::from_std(io_error);
                scan_error.path = path;
                scan_error
            }
            None => Self {
                kind: ScanErrorKind::Other,
                path,
                source: None,
            },
        }
    }
}

fn format_scan_error(error: &ScanError) -> String {
    match (&error.kind, &error.path) {
        (ScanErrorKind::NotFound, Some(path)) => {
            format!("Directory not found: {}", path.display())
        }
        (ScanErrorKind::NotFound, None) => "Directory not found".to_string(),
        (ScanErrorKind::PermissionDenied, Some(path)) => {
            format!("Permission denied for directory: {}", path.display())
        }
        (ScanErrorKind::PermissionDenied, None) => "Permission denied".to_string(),
        (ScanErrorKind::Loop, Some(path)) => {
            format!("Filesystem loop detected at: {}", path.display())
        }
        (ScanErrorKind::Loop, None) => "Filesystem loop detected".to_string(),
        (ScanErrorKind::Other, path) => {
            let location = path
                .as_ref()
                .map(|p| format!(" at {}", p.display()))
                .unwrap_or_default();
            if let Some(source) = &error.source {
                format!("I/O error{location}: {source}")
            } else {
                format!("I/O error{location}")
            }
        }
    }
}
