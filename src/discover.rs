//! Directory scanning: list, filter, sort.

use std::fs;
use std::path::Path;
use tracing::{debug, error};

use crate::error::{OnboardError, Result};

/// Returns the names of regular files directly inside `dir` for which
/// `matches` is true, sorted by name.
///
/// Non-UTF-8 names are skipped since they cannot become job names or XML text.
pub fn matching_files<F>(dir: &Path, matches: F) -> Result<Vec<String>>
where
    F: Fn(&str) -> bool,
{
    if !dir.is_dir() {
        error!(dir = %dir.display(), "Input directory does not exist");
        return Err(OnboardError::DirectoryNotFound(dir.to_path_buf()));
    }

    let not_readable = |e: std::io::Error| {
        error!(error = ?e, dir = %dir.display(), "Failed to list input directory");
        OnboardError::NotReadable {
            path: dir.to_path_buf(),
            source: e,
        }
    };

    let mut names = Vec::new();
    for entry_res in fs::read_dir(dir).map_err(not_readable)? {
        let entry = entry_res.map_err(not_readable)?;
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            debug!(path = %entry.path().display(), "Skipping non UTF-8 filename");
            continue;
        };
        if !matches(&name) {
            continue;
        }
        if !entry.path().is_file() {
            debug!(path = %entry.path().display(), "Skipping matching entry that is not a file");
            continue;
        }
        names.push(name);
    }
    names.sort();
    debug!(dir = %dir.display(), count = names.len(), "Scanned directory");
    Ok(names)
}
