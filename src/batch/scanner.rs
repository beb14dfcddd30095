//! Input discovery
//!
//! Lists the `*.ndjson` files sitting directly inside the input directory.

use crate::error::{Result, ResultExt};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Extension of accepted input files (case-sensitive)
pub const NDJSON_EXTENSION: &str = "ndjson";

/// Find NDJSON files in `dir`, sorted by file name
///
/// Only regular files (or symlinks to them) directly inside `dir` are
/// returned; subdirectories are not descended into and dot-files are
/// skipped, as a shell `*.ndjson` glob would. A missing directory yields an
/// empty list.
pub fn scan_ndjson_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(dir = %dir.display(), "input directory does not exist");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Failed to read input directory {}", dir.display())
            })
        }
    };

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read input directory {}", dir.display()))?
            .path();

        if is_ndjson_file(&path) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn is_ndjson_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .is_some_and(|name| name.as_encoded_bytes().starts_with(b"."));

    !hidden
        && path.extension().is_some_and(|ext| ext == NDJSON_EXTENSION)
        && path.is_file()
}
