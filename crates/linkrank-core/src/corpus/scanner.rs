//! File scanning for corpus construction

use crate::error::Result;
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A page file found during a scan
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub path: PathBuf,
    pub relative_path: String,
}

/// Scan options
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub pattern: String,
    pub follow_symlinks: bool,
    pub exclude_hidden: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            pattern: "**/*.html".to_string(),
            follow_symlinks: true,
            exclude_hidden: true,
        }
    }
}

/// Scan a corpus directory for page files matching the pattern.
///
/// The relative path of each file doubles as its page identifier.
pub fn scan_pages(root: &Path, options: &ScanOptions) -> Result<Vec<ScanResult>> {
    let pattern = Pattern::new(&options.pattern)?;
    let mut results = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(options.follow_symlinks)
        .into_iter()
        .filter_entry(|e| !should_skip(e, options));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path
            .strip_prefix(root)
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|_| path.to_string_lossy().to_string());

        if pattern.matches(&relative) {
            results.push(ScanResult {
                path: path.to_path_buf(),
                relative_path: relative,
            });
        }
    }

    Ok(results)
}

fn should_skip(entry: &DirEntry, options: &ScanOptions) -> bool {
    if !options.exclude_hidden {
        return false;
    }

    // Never skip the scan root itself, whatever it is named
    if entry.depth() == 0 {
        return false;
    }

    entry.file_name().to_string_lossy().starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_options() {
        let opts = ScanOptions::default();
        assert_eq!(opts.pattern, "**/*.html");
        assert!(opts.exclude_hidden);
    }

    #[test]
    fn test_scan_filters_by_extension() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a page").unwrap();

        let results = scan_pages(dir.path(), &ScanOptions::default()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].relative_path, "a.html");
    }

    #[test]
    fn test_scan_recurses_into_subdirectories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("a.html"), "").unwrap();
        fs::write(dir.path().join("sub/b.html"), "").unwrap();

        let mut results: Vec<String> = scan_pages(dir.path(), &ScanOptions::default())
            .unwrap()
            .into_iter()
            .map(|r| r.relative_path)
            .collect();
        results.sort();

        assert_eq!(results, vec!["a.html".to_string(), "sub/b.html".to_string()]);
    }

    #[test]
    fn test_scan_skips_hidden_entries() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.html"), "").unwrap();
        fs::write(dir.path().join(".hidden.html"), "").unwrap();

        let results = scan_pages(dir.path(), &ScanOptions::default()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].relative_path, "a.html");
    }
}
