use serde::Serialize;
use std::path::{Path, PathBuf};

/// One node of the scanned directory tree
///
/// Built once per compilation pass and immutable afterwards.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FileSystemEntry {
    File(FileEntry),
    Directory(DirectoryEntry),
}

impl FileSystemEntry {
    /// Name of the entry: the stem for files, the directory name otherwise
    pub fn name(&self) -> &str {
        match self {
            FileSystemEntry::File(file) => &file.name,
            FileSystemEntry::Directory(dir) => &dir.name,
        }
    }

    /// Absolute path of the entry
    pub fn path(&self) -> &Path {
        match self {
            FileSystemEntry::File(file) => &file.path,
            FileSystemEntry::Directory(dir) => &dir.path,
        }
    }
}

/// A route-handler file
#[derive(Debug, Clone, Serialize)]
pub struct FileEntry {
    /// File stem with the extension removed, e.g. `users.get`
    pub name: String,
    /// Absolute path to the file
    pub path: PathBuf,
    /// Extension without the dot, e.g. `rs`
    pub extension: String,
}

/// A directory and its children, in enumeration order
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub children: Vec<FileSystemEntry>,
}
