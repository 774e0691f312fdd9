//! Depth-limited directory walker
//!
//! Walks a tree with walkdir in file-name order and collects the
//! directories sitting exactly `depth` levels below the root, pruning
//! ignored subtrees on the way.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{ScanReport, filter::IgnoreFilter};
use crate::error::ScanError;

/// Options for a depth scan
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Number of path components below the root a candidate must have
    pub depth: usize,
    /// Directories whose full path contains one of these are pruned
    pub ignore: IgnoreFilter,
    /// Prefix every candidate with the root directory's own name
    pub include_parent: bool,
    /// Follow symbolic links to directories
    pub follow_links: bool,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_ignore(mut self, ignore: IgnoreFilter) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn with_include_parent(mut self, include_parent: bool) -> Self {
        self.include_parent = include_parent;
        self
    }

    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }
}

/// Scanner for candidate directories below one root
#[derive(Debug, Clone)]
pub struct TreeScanner {
    root: PathBuf,
    options: ScanOptions,
}

impl TreeScanner {
    /// Create a scanner; the root must exist.
    pub fn new(root: &Path, options: ScanOptions) -> Result<Self, ScanError> {
        if !root.exists() {
            return Err(ScanError::not_found(root));
        }

        Ok(Self {
            root: root.to_path_buf(),
            options,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Walk the tree and collect the candidates.
    ///
    /// A qualifying directory is not descended into, so each branch yields
    /// at most one candidate. Files are never candidates. Any traversal
    /// error aborts the scan.
    pub fn scan(&self) -> Result<ScanReport, ScanError> {
        let parent = if self.options.include_parent {
            Some(root_name(&self.root)?)
        } else {
            None
        };

        let mut report = ScanReport {
            depth: self.options.depth,
            ..ScanReport::default()
        };

        let mut walker = WalkDir::new(&self.root)
            .follow_links(self.options.follow_links)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = walker.next() {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                continue;
            }

            if let Some(needle) = self.options.ignore.matching_entry(entry.path()) {
                log::debug!(
                    "Ignoring {} (matches '{needle}')",
                    entry.path().display()
                );
                report.ignored += 1;
                walker.skip_current_dir();
                continue;
            }

            if entry.depth() == 0 || entry.depth() != self.options.depth {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or_else(|_| entry.path());
            let candidate = match &parent {
                Some(parent) => parent.join(relative),
                None => relative.to_path_buf(),
            };
            log::trace!("Candidate: {}", candidate.display());

            report.candidates.push(candidate);
            walker.skip_current_dir();
        }

        log::debug!(
            "Found {} directories at depth {} below {} ({} ignored)",
            report.candidates.len(),
            report.depth,
            self.root.display(),
            report.ignored
        );

        Ok(report)
    }
}

/// The root's own directory name, resolving `.` and similar through the
/// filesystem.
fn root_name(root: &Path) -> Result<PathBuf, ScanError> {
    if let Some(name) = root.file_name() {
        return Ok(PathBuf::from(name));
    }

    let canonical = root
        .canonicalize()
        .map_err(|e| ScanError::from_std(e).with_path(root))?;
    Ok(canonical.file_name().map(PathBuf::from).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanErrorKind;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        let base = dir.path();

        for path in [
            "2023/12 - December 2023/31 - Band (Club)",
            "2024/01 - January 2024/24 - Performer1 (Venue)/raw",
            "2024/02 - February 2024/02 - Solo (Hall)",
            "2024/@eaDir/deep/deeper",
        ] {
            fs::create_dir_all(base.join(path)).unwrap();
        }
        fs::write(base.join("2024/notes.txt"), b"not a directory").unwrap();
        fs::write(base.join("2024/02 - February 2024/cover.jpg"), b"jpg").unwrap();

        dir
    }

    fn scan(root: &Path, options: ScanOptions) -> ScanReport {
        TreeScanner::new(root, options).unwrap().scan().unwrap()
    }

    #[test]
    fn test_scan_at_depth_one() {
        let dir = create_test_tree();
        let report = scan(dir.path(), ScanOptions::new().with_depth(1));

        assert_eq!(
            report.candidates,
            vec![PathBuf::from("2023"), PathBuf::from("2024")]
        );
        assert_eq!(report.ignored, 0);
    }

    #[test]
    fn test_scan_at_depth_three() {
        let dir = create_test_tree();
        let report = scan(dir.path(), ScanOptions::new().with_depth(3));

        let mut candidates = report.candidates.clone();
        candidates.sort();
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("2023/12 - December 2023/31 - Band (Club)"),
                PathBuf::from("2024/01 - January 2024/24 - Performer1 (Venue)"),
                PathBuf::from("2024/02 - February 2024/02 - Solo (Hall)"),
                PathBuf::from("2024/@eaDir/deep"),
            ]
        );
    }

    #[test]
    fn test_ignored_subtree_is_pruned() {
        let dir = create_test_tree();
        let options = ScanOptions::new()
            .with_depth(3)
            .with_ignore(IgnoreFilter::new(["@eaDir"]));
        let report = scan(dir.path(), options);

        assert_eq!(report.candidates.len(), 3);
        assert!(
            report
                .candidates
                .iter()
                .all(|c| !c.to_string_lossy().contains("@eaDir"))
        );
        // Only the top of the pruned branch is visited.
        assert_eq!(report.ignored, 1);
    }

    #[test]
    fn test_include_parent_prefixes_root_name() {
        let dir = create_test_tree();
        let root = dir.path().join("2024");
        let options = ScanOptions::new().with_depth(2).with_include_parent(true);
        let report = scan(&root, options);

        assert!(report.candidates.contains(&PathBuf::from(
            "2024/01 - January 2024/24 - Performer1 (Venue)"
        )));
        assert!(
            report
                .candidates
                .iter()
                .all(|c| c.starts_with("2024"))
        );
    }

    #[test]
    fn test_depth_zero_finds_nothing() {
        let dir = create_test_tree();
        let report = scan(dir.path(), ScanOptions::new());
        assert!(report.candidates.is_empty());
    }

    #[test]
    fn test_missing_root() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let error = TreeScanner::new(&missing, ScanOptions::new()).unwrap_err();
        assert_eq!(error.kind, ScanErrorKind::NotFound);
        assert_eq!(error.path, Some(missing));
    }

    #[test]
    fn test_root_name_for_dot() {
        let name = root_name(Path::new(".")).unwrap();
        let expected = std::env::current_dir().unwrap();
        assert_eq!(Some(name.as_os_str()), expected.file_name());
    }
}
