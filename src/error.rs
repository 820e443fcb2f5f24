use std::fmt;
use std::path::PathBuf;

use crate::tree::RouteMethod;

/// Fatal error kinds of a compilation pass
///
/// Every variant aborts the whole pass; nothing is retried and no partial
/// route tree or router is ever handed to a materializer. Malformed filenames
/// are deliberately not represented here: they are recoverable, reported on
/// the warning channel, and only shrink the emitted route set.
#[derive(Debug)]
pub enum RouteError {
    /// A directory could not be read during the scan
    Scan {
        /// Path that failed to enumerate
        path: PathBuf,
        source: std::io::Error,
    },
    /// A `middleware`/`error` classified file has no enclosing scope
    OrphanStructural {
        /// The offending file
        file: PathBuf,
        /// Its structural role
        role: RouteMethod,
    },
    /// Two sibling entries resolve to the same verb and pattern
    DuplicateBinding {
        method: RouteMethod,
        pattern: String,
        first: PathBuf,
        second: PathBuf,
    },
    /// The generated artifact could not be written
    Materialize {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::Scan { path, source } => {
                write!(f, "failed to scan '{}': {}", path.display(), source)
            }
            RouteError::OrphanStructural { file, role } => {
                write!(
                    f,
                    "cannot use a {} handler without a parent directory: '{}'",
                    role,
                    file.display()
                )
            }
            RouteError::DuplicateBinding {
                method,
                pattern,
                first,
                second,
            } => {
                write!(
                    f,
                    "duplicate {} binding for pattern '{}': '{}' and '{}'",
                    method,
                    pattern,
                    first.display(),
                    second.display()
                )
            }
            RouteError::Materialize { path, source } => {
                write!(
                    f,
                    "failed to write generated router '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouteError::Scan { source, .. } | RouteError::Materialize { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}
