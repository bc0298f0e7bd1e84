//! Markdown discovery by filesystem walking.
//!
//! Discovery is separated from catalog building: the scanner only returns
//! relative paths of markdown files, and [`crate::catalog`] turns them into
//! page entries.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

/// Collect every markdown file under `dir`, as paths relative to `dir`.
///
/// Hidden files and directories (names starting with `.`) are skipped.
/// Returns an empty Vec if the directory does not exist; an unreadable
/// subdirectory is logged and skipped so the rest of the walk survives.
pub(crate) fn scan_markdown(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if dir.exists() {
        scan_directory(dir, Path::new(""), &mut files);
    }
    files
}

fn scan_directory(dir_path: &Path, rel_prefix: &Path, files: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir_path) {
        Ok(entries) => entries,
        Err(error) => {
            warn!(path = %dir_path.display(), error = %error, "skipping unreadable directory");
            return;
        }
    };

    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }

        let rel_path = rel_prefix.join(&name);
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            scan_directory(&entry.path(), &rel_path, files);
        } else if is_markdown(&rel_path) {
            files.push(rel_path);
        }
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}
