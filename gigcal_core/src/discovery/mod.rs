//! Candidate directory discovery
//!
//! Locates the directories of a photo tree whose relative path is exactly
//! as deep as a location pattern, so each can be matched against it.

mod filter;
mod walker;

pub use filter::IgnoreFilter;
pub use walker::{ScanOptions, TreeScanner};

use crate::error::ScanError;
use std::path::{Component, Path, PathBuf};

/// Result of a depth scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Candidate paths relative to the root (prefixed with the root's name
    /// when the parent is included), in traversal order
    pub candidates: Vec<PathBuf>,
    /// Number of directories pruned by the ignore list
    pub ignored: usize,
    /// Depth the candidates were collected at
    pub depth: usize,
}

/// Collect the directories exactly `depth` levels below `root`.
///
/// Convenience wrapper around [`TreeScanner`].
pub fn scan_at_depth(
    root: &Path,
    depth: usize,
    ignore: &[String],
    include_parent: bool,
) -> Result<Vec<PathBuf>, ScanError> {
    let options = ScanOptions::new()
        .with_depth(depth)
        .with_ignore(IgnoreFilter::new(ignore.iter().cloned()))
        .with_include_parent(include_parent);

    Ok(TreeScanner::new(root, options)?.scan()?.candidates)
}

/// Render a candidate path as a location string with `/` separators,
/// whatever the platform separator is.
pub fn candidate_location(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
