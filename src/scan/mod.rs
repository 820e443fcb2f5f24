//! # Filesystem scanner
//!
//! Walks a routes directory into an ordered tree of [`FileSystemEntry`]
//! values. The scanner is the only component that touches the disk during
//! compilation; everything downstream works off the immutable entry tree it
//! returns.
//!
//! A file is admitted when all of the following hold:
//!
//! - its extension is in the allowed set (default: `rs`)
//! - its name does not start with the reserved internal prefix (`.`)
//! - its stem either is one of the reserved scope names (`_middleware`,
//!   `_error`) or follows the `<segment>.<method>` convention with a known
//!   method or role in the second dot-segment
//!
//! Directories are always included, even when empty, and are recursed into
//! depth-first in filesystem enumeration order. An unreadable directory
//! aborts the whole scan; a partial tree is never returned.

mod types;
mod walk;

pub use types::{DirectoryEntry, FileEntry, FileSystemEntry};
pub use walk::scan_dir;
