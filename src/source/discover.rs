use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// True for names the monitor gives its logs: both "log" and ".txt" somewhere
/// in the file name.
pub fn is_log_file_name(name: &str) -> bool {
    name.contains("log") && name.contains(".txt")
}

/// Scan `dir` (non-recursive) for monitor log files, sorted by path.
pub fn discover_log_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("scan log directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("scan log directory {}", dir.display()))?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !is_log_file_name(&name) {
            continue;
        }
        if !entry.path().is_file() {
            tracing::debug!(path = %entry.path().display(), "skipping non-file entry");
            continue;
        }
        files.push(entry.path());
    }
    files.sort();
    Ok(files)
}

/// Explicit paths win when any are given (kept in order, not checked here);
/// otherwise fall back to scanning `dir`.
pub fn resolve_inputs(explicit: &[PathBuf], dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if !explicit.is_empty() {
        return Ok(explicit.to_vec());
    }
    tracing::debug!(dir = %dir.display(), "no --ifile given, scanning directory");
    discover_log_files(dir)
}
