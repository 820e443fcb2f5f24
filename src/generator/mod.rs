//! # Code generator
//!
//! The materializer that emits importable Rust source reconstructing the
//! router. The emitted file lands at `<routes>/index.rs`, is stamped with a
//! generation timestamp and a do-not-edit notice, and is fully overwritten on
//! every pass - atomically, so a concurrent reader never observes a partial
//! file.
//!
//! Emission order per scope is the ordering contract shared with the direct
//! attacher: create the sub-router, attach pre-middlewares in list order,
//! emit the children in their original order, attach post-middlewares, mount
//! the sub-router onto its parent at the scope's pattern.
//!
//! The generated file imports every handler module under a generated symbol
//! (`#[path]` attribute or `include!`, per [`ModuleStyle`]) and exports one
//! `router` constructor generic over the [`Host`](crate::host::Host)
//! capability.
//!
//! [`ModuleStyle`]: crate::config::ModuleStyle

mod emit;

pub use emit::CodeGenerator;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use tracing::info;

use crate::config::RouterOptions;
use crate::error::RouteError;
use crate::scan::{scan_dir, FileSystemEntry};

/// Render the generated-file content for an already-scanned entry tree
pub fn generate_router_source(
    entries: &[FileSystemEntry],
    options: &RouterOptions,
) -> anyhow::Result<String> {
    let mut generator = CodeGenerator::new(options);
    generator.generate_source(entries)
}

/// Full code-generation pass: scan, compile, emit, write `<dir>/index.rs`
///
/// Returns the path of the written artifact.
///
/// # Errors
///
/// Scan failures, route-tree errors, and write failures all abort the pass,
/// wrapped in a router-generation context. A partially written artifact is
/// never left behind.
pub fn generate(options: &RouterOptions) -> anyhow::Result<PathBuf> {
    let started = Instant::now();
    let entries = scan_dir(&options.dir, options)?;
    let source =
        generate_router_source(&entries, options).context("router generation failed")?;
    let artifact = options.dir.join("index.rs");
    write_artifact(&artifact, &source).context("router generation failed")?;
    info!(
        artifact = %artifact.display(),
        bytes = source.len(),
        duration_ms = started.elapsed().as_millis() as u64,
        "generated router source"
    );
    Ok(artifact)
}

/// Write the artifact through a temporary path and rename over the
/// destination, so concurrent readers see either the old file or the new one
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), RouteError> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    fs::write(&tmp, contents).map_err(|source| RouteError::Materialize {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| RouteError::Materialize {
        path: path.to_path_buf(),
        source,
    })
}
