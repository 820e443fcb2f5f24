use std::fs;
use std::path::Path;
use std::time::Instant;

use tracing::debug;

use super::types::{DirectoryEntry, FileEntry, FileSystemEntry};
use crate::config::RouterOptions;
use crate::error::RouteError;
use crate::tree::{is_reserved_stem, RouteMethod};

/// Names starting with this prefix are internal and never route material.
const INTERNAL_PREFIX: char = '.';

/// Scan the routes directory into an ordered entry tree
///
/// # Errors
///
/// Returns [`RouteError::Scan`] when `root` or any directory below it cannot
/// be read. The scan is all-or-nothing; no partial tree is returned.
pub fn scan_dir(
    root: &Path,
    options: &RouterOptions,
) -> Result<Vec<FileSystemEntry>, RouteError> {
    let started = Instant::now();
    let entries = scan_children(root, options)?;
    debug!(
        root = %root.display(),
        entry_count = entries.len(),
        duration_ms = started.elapsed().as_millis() as u64,
        "scanned routes directory"
    );
    Ok(entries)
}

fn scan_children(
    dir: &Path,
    options: &RouterOptions,
) -> Result<Vec<FileSystemEntry>, RouteError> {
    let read = fs::read_dir(dir).map_err(|source| RouteError::Scan {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut out = Vec::new();
    for entry in read {
        let entry = entry.map_err(|source| RouteError::Scan {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let raw_name = entry.file_name().to_string_lossy().into_owned();
        let file_type = entry.file_type().map_err(|source| RouteError::Scan {
            path: path.clone(),
            source,
        })?;

        if file_type.is_dir() {
            let children = scan_children(&path, options)?;
            out.push(FileSystemEntry::Directory(DirectoryEntry {
                name: raw_name,
                path,
                children,
            }));
            continue;
        }

        if raw_name.starts_with(INTERNAL_PREFIX) {
            continue;
        }
        let Some((stem, extension)) = split_extension(&raw_name) else {
            debug!(file = %path.display(), "skipping file without an extension");
            continue;
        };
        if !options.allows_extension(extension) {
            debug!(file = %path.display(), extension, "skipping file with disallowed extension");
            continue;
        }
        if !routable_stem(stem) {
            debug!(file = %path.display(), "skipping file outside the naming convention");
            continue;
        }

        out.push(FileSystemEntry::File(FileEntry {
            name: stem.to_string(),
            path,
            extension: extension.to_string(),
        }));
    }
    Ok(out)
}

fn split_extension(name: &str) -> Option<(&str, &str)> {
    let dot = name.rfind('.')?;
    if dot == 0 || dot + 1 == name.len() {
        return None;
    }
    Some((&name[..dot], &name[dot + 1..]))
}

/// Whether a file stem is route material: a reserved scope name, or a
/// `<segment>.<method>` name whose second dot-segment is a known method or
/// role.
fn routable_stem(stem: &str) -> bool {
    if is_reserved_stem(stem) {
        return true;
    }
    stem.split('.')
        .nth(1)
        .is_some_and(|role| RouteMethod::from_segment(role).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("users.get.rs"), Some(("users.get", "rs")));
        assert_eq!(split_extension("_middleware.rs"), Some(("_middleware", "rs")));
        assert_eq!(split_extension("no-extension"), None);
        assert_eq!(split_extension(".hidden"), None);
    }

    #[test]
    fn test_routable_stem() {
        assert!(routable_stem("users.get"));
        assert!(routable_stem("auth.middleware"));
        assert!(routable_stem("_middleware"));
        assert!(routable_stem("_error"));
        assert!(!routable_stem("users"));
        assert!(!routable_stem("users.fetch"));
        assert!(!routable_stem("index"));
    }
}
