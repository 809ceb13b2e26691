use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{AnalyzeError, Result};

/// Directory names that are never descended into, wherever they appear in
/// the tree. Matching is on the bare name, not the full path.
const EXCLUDED_DIRS: [&str; 3] = ["node_modules", ".git", "output"];

pub struct FileScanner;

impl FileScanner {
    pub fn new() -> Self {
        Self
    }

    /// Recursively lists files under `root` whose file name ends with
    /// `extension` (case-sensitive suffix match).
    ///
    /// Entries come back in directory-listing order, which is
    /// filesystem-dependent; callers must not assume it is stable. A missing
    /// root yields an empty list, but an unreadable directory mid-walk fails
    /// the whole scan. Symlinks are not followed.
    pub fn discover(&self, root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !is_excluded(entry));

        for entry in walker {
            let entry = entry.map_err(|err| {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                AnalyzeError::Discovery { path, source: err }
            })?;

            if entry.file_type().is_file() && name_matches(entry.file_name(), extension) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new()
    }
}

// Exclusion applies to subdirectories only; a root that happens to be named
// like an excluded directory is still scanned, and files sharing the name
// are kept.
fn is_excluded(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| EXCLUDED_DIRS.contains(&name))
            .unwrap_or(false)
}

fn name_matches(name: &OsStr, extension: &str) -> bool {
    name.to_str()
        .map(|name| name.ends_with(extension))
        .unwrap_or(false)
}
