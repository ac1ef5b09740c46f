//! Inclusion filters applied while packing.
//!
//! A filter decides, per child name, whether a directory is descended into
//! and whether a file is stored. The same filter is consulted for both; the
//! packer combines it with the item's kind, so a filter never turns a file
//! into a directory or the other way round.

/// Decides whether a directory child goes into the archive.
///
/// `name` is the child's file name only, never its path relative to the
/// packing root: `sub/b.txt` and `other/b.txt` are both seen as `b.txt` and
/// get the same answer. To keep one subtree out, reject its directory name;
/// the packer then does not descend into it. Any closure
/// `Fn(&str) -> bool` is a filter.
///
/// # Examples
///
/// ```
/// use treezip_core::pack::EntryFilter;
///
/// let only_text = |name: &str| name.ends_with(".txt") || !name.contains('.');
/// assert!(only_text.matches("notes.txt"));
/// assert!(!only_text.matches("image.png"));
/// ```
pub trait EntryFilter {
    /// Returns `true` if the named item should be packed.
    fn matches(&self, name: &str) -> bool;
}

impl<F> EntryFilter for F
where
    F: Fn(&str) -> bool,
{
    fn matches(&self, name: &str) -> bool {
        self(name)
    }
}

/// Filter built from exclude patterns and a hidden-file rule.
///
/// Patterns use the simple glob forms supported by [`matches_pattern`].
///
/// # Examples
///
/// ```
/// use treezip_core::pack::EntryFilter;
/// use treezip_core::pack::PatternFilter;
///
/// let filter = PatternFilter::new()
///     .with_exclude_patterns(vec!["*.tmp".to_string(), "target".to_string()]);
///
/// assert!(filter.matches("main.rs"));
/// assert!(!filter.matches("scratch.tmp"));
/// assert!(!filter.matches("target"));
/// assert!(!filter.matches(".git"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatternFilter {
    exclude_patterns: Vec<String>,
    include_hidden: bool,
}

impl PatternFilter {
    /// Creates a filter that only rejects hidden names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the exclude patterns.
    #[must_use]
    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    /// Sets whether hidden names (leading `.`) pass.
    #[must_use]
    pub fn with_include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Returns the configured exclude patterns.
    #[must_use]
    pub fn exclude_patterns(&self) -> &[String] {
        &self.exclude_patterns
    }
}

impl EntryFilter for PatternFilter {
    fn matches(&self, name: &str) -> bool {
        if !self.include_hidden && is_hidden(name) {
            return false;
        }

        !self
            .exclude_patterns
            .iter()
            .any(|pattern| matches_pattern(name, pattern))
    }
}

/// Checks if a name is hidden (starts with '.').
///
/// # Examples
///
/// ```
/// use treezip_core::pack::filters;
///
/// assert!(filters::is_hidden(".gitignore"));
/// assert!(!filters::is_hidden("visible.txt"));
/// ```
#[must_use]
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Matches a name against a simple glob pattern.
///
/// Supports:
/// - Exact match: `".git"` matches only `.git`
/// - Suffix wildcard: `"*.txt"` matches names ending with `.txt`
/// - Prefix wildcard: `"temp*"` matches names starting with `temp`
///
/// # Examples
///
/// ```
/// use treezip_core::pack::filters;
///
/// assert!(filters::matches_pattern(".git", ".git"));
/// assert!(filters::matches_pattern("file.tmp", "*.tmp"));
/// assert!(filters::matches_pattern("temp_file", "temp*"));
/// assert!(!filters::matches_pattern("file_temp", "temp*"));
/// ```
#[must_use]
pub fn matches_pattern(name: &str, pattern: &str) -> bool {
    if pattern == name {
        return true;
    }

    if let Some(prefix) = pattern.strip_suffix('*') {
        return name.starts_with(prefix);
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        return name.ends_with(suffix);
    }

    false
}
