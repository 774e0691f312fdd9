//! Ignore list matching for directory paths

use std::path::Path;

/// Substring-based ignore list.
///
/// A directory is ignored when its full path contains any of the entries.
/// Empty entries are dropped, since they would match every path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreFilter {
    needles: Vec<String>,
}

impl IgnoreFilter {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            needles: entries
                .into_iter()
                .map(Into::into)
                .filter(|entry| !entry.is_empty())
                .collect(),
        }
    }

    /// Parse a comma separated ignore list, as given on the command line.
    pub fn from_comma_separated(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// The entry that matches `path`, if any
    pub fn matching_entry(&self, path: &Path) -> Option<&str> {
        let text = path.to_string_lossy();
        self.needles
            .iter()
            .find(|needle| text.contains(needle.as_str()))
            .map(String::as_str)
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        self.matching_entry(path).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.needles.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.needles
    }
}
