use std::fs;
use std::path::Path;

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::TodoTableError;
use crate::matcher;
use crate::record::TodoRecord;

/// Maximum file size to scan (1 MB). Files larger than this are skipped.
const MAX_FILE_SIZE: u64 = 1_048_576;

/// Directories skipped unless the caller asks for everything.
const SKIP_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "target",
    "vendor",
    "__pycache__",
    ".venv",
    "venv",
    "dist",
    "build",
];

/// What to collect while walking the tree.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Extensions without the leading dot, compared case-insensitively.
    pub extensions: Vec<String>,
    /// Descend into the directories in `SKIP_DIRS` as well.
    pub include_ignored: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            extensions: vec!["js".to_string()],
            include_ignored: false,
        }
    }
}

impl ScanOptions {
    fn wants(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
    }

    fn descends_into(&self, entry: &DirEntry) -> bool {
        // The root itself is always walked, whatever its name.
        if self.include_ignored || entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        entry
            .file_name()
            .to_str()
            .map_or(true, |name| !SKIP_DIRS.contains(&name))
    }
}

/// Result of scanning a directory tree.
#[derive(Debug)]
pub struct ScanResult {
    pub records: Vec<TodoRecord>,
    pub files_scanned: usize,
    pub files_skipped: usize,
}

/// Scan a directory tree for TODO annotations.
///
/// Files are visited in file-name order so the resulting records keep a
/// stable order between runs. Unreadable, oversized and non-UTF-8 files are
/// counted as skipped and the walk carries on.
pub fn scan_directory(root: &Path, options: &ScanOptions) -> Result<ScanResult, TodoTableError> {
    if !root.is_dir() {
        return Err(TodoTableError::InvalidPath(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    let mut records = Vec::new();
    let mut files_scanned: usize = 0;
    let mut files_skipped: usize = 0;

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    for entry in walker.filter_entry(|e| options.descends_into(e)) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                files_skipped += 1;
                continue;
            }
        };

        if !entry.file_type().is_file() || !options.wants(entry.path()) {
            continue;
        }

        let path = entry.path();
        let content = match read_source(path) {
            Ok(c) => c,
            Err(reason) => {
                debug!(path = %path.display(), %reason, "skipping file");
                files_skipped += 1;
                continue;
            }
        };

        files_scanned += 1;

        let filename = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let before = records.len();
        records.extend(
            matcher::find_annotations(&content)
                .map(|annotation| TodoRecord::from_annotation(annotation, &filename)),
        );
        debug!(path = %path.display(), found = records.len() - before, "scanned file");
    }

    Ok(ScanResult {
        records,
        files_scanned,
        files_skipped,
    })
}

fn read_source(path: &Path) -> Result<String, String> {
    let metadata = fs::metadata(path).map_err(|e| e.to_string())?;
    if metadata.len() > MAX_FILE_SIZE {
        return Err(format!("larger than {MAX_FILE_SIZE} bytes"));
    }
    fs::read_to_string(path).map_err(|e| e.to_string())
}
