//! Input file discovery.
//!
//! Resolves the path given on the command line into the ordered list of files
//! to scan. Discovery never opens a file.

use std::{
    ffi::OsStr,
    path::{Component, Path, PathBuf},
};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::config::DiscoveryConfig;

/// Resolve `path` into the files to scan.
///
/// - A file is returned alone if its extension is one of
///   [`DiscoveryConfig::file_extensions`].
/// - A directory is walked recursively once per entry of
///   [`DiscoveryConfig::directory_extensions`]; each group is sorted by path
///   and the groups are concatenated in configuration order.
/// - Anything else yields an empty list.
///
/// Returned paths are normalized with [`normalize_path`]. Unreadable
/// directory entries are skipped.
pub fn discover_files(path: &Path, config: &DiscoveryConfig) -> Vec<PathBuf> {
    if path.is_file() {
        return if has_extension(path, config.file_extensions()) {
            vec![normalize_path(path)]
        } else {
            debug!(path = path.display().to_string(); "Input file has an unsupported extension");
            Vec::new()
        };
    }

    if !path.is_dir() {
        debug!(path = path.display().to_string(); "Input path does not exist");
        return Vec::new();
    }

    let candidates = walk_files(path);

    let mut files = Vec::new();
    for ext in config.directory_extensions() {
        let mut group: Vec<PathBuf> = candidates
            .iter()
            .filter(|candidate| has_extension(candidate, std::slice::from_ref(ext)))
            .cloned()
            .collect();
        group.sort();

        debug!(extension = ext.as_str(), count = group.len(); "Collected files");
        files.extend(group);
    }

    files
}

/// Recursively collect every regular file under `root`.
fn walk_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(error = err.to_string(); "Skipping unreadable directory entry");
                None
            }
        })
        .map(walkdir::DirEntry::into_path)
        .filter(|path| path.is_file())
        .map(|path| normalize_path(&path))
        .collect()
}

/// Drop `.` components, so `./d/a.puml` becomes `d/a.puml`.
///
/// A path made only of `.` is returned unchanged.
pub fn normalize_path(path: &Path) -> PathBuf {
    let normalized: PathBuf = path
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();

    if normalized.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        normalized
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension().and_then(OsStr::to_str).is_some_and(|actual| {
        extensions
            .iter()
            .any(|ext| ext.trim_start_matches('.') == actual)
    })
}
