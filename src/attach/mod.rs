//! # Direct attacher
//!
//! The second materializer: instead of emitting source, walk the entry tree
//! and perform the construction against a live router obtained from the
//! [`Host`] capability, loading each route file's exports through a
//! [`ModuleLoader`].
//!
//! Per scope the sequence is the same ordering contract the code generator
//! emits: pre-middlewares, children in directory order, post-middlewares. A
//! reserved `_middleware` file is the implicit first pre-middleware of its
//! scope and a reserved `_error` file the implicit last post-middleware, on
//! top of any `.middleware.` / `.error.` suffixed entries. Reserved files
//! never verb-bind.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use tracing::{debug, warn};

use crate::config::RouterOptions;
use crate::host::{Host, ModuleLoader};
use crate::scan::{scan_dir, DirectoryEntry, FileEntry, FileSystemEntry};
use crate::tree::{
    path_pattern, reject_conflicting_bindings, RouteMethod, RESERVED_ERROR, RESERVED_MIDDLEWARE,
};

/// Compile the routes directory and mount the result onto `parent` at the
/// configured base pattern
pub fn mount_routes<H, L>(
    host: &mut H,
    loader: &L,
    parent: &mut H::Router,
    options: &RouterOptions,
) -> anyhow::Result<()>
where
    H: Host,
    L: ModuleLoader<Handler = H::Handler, ErrorHandler = H::ErrorHandler>,
{
    let router = build_router(host, loader, options)?;
    host.mount(parent, &options.base, router);
    Ok(())
}

/// Scan the routes directory and attach everything to a fresh router
pub fn build_router<H, L>(
    host: &mut H,
    loader: &L,
    options: &RouterOptions,
) -> anyhow::Result<H::Router>
where
    H: Host,
    L: ModuleLoader<Handler = H::Handler, ErrorHandler = H::ErrorHandler>,
{
    let entries = scan_dir(&options.dir, options)?;
    attach_routes(host, loader, &entries, options)
}

/// Attach an already-scanned entry tree to a fresh router
///
/// # Errors
///
/// Module-load failures and duplicate sibling bindings abort the pass,
/// wrapped in a route-generation context; no partially attached router is
/// returned.
pub fn attach_routes<H, L>(
    host: &mut H,
    loader: &L,
    entries: &[FileSystemEntry],
    options: &RouterOptions,
) -> anyhow::Result<H::Router>
where
    H: Host,
    L: ModuleLoader<Handler = H::Handler, ErrorHandler = H::ErrorHandler>,
{
    let started = Instant::now();
    let mut root = host.create_router();
    if options.log_requests {
        if let Some(observer) = host.request_observer() {
            host.attach(&mut root, observer);
        }
    }
    attach_scope(host, loader, &mut root, entries).context("route generation failed")?;
    debug!(
        duration_ms = started.elapsed().as_millis() as u64,
        "attached route tree"
    );
    Ok(root)
}

/// A scope child in directory order: a verb binding or a nested scope.
enum Child<'a> {
    Verb(&'a FileEntry, RouteMethod, String),
    Scope(&'a DirectoryEntry, String),
}

fn attach_scope<H, L>(
    host: &mut H,
    loader: &L,
    router: &mut H::Router,
    entries: &[FileSystemEntry],
) -> anyhow::Result<()>
where
    H: Host,
    L: ModuleLoader<Handler = H::Handler, ErrorHandler = H::ErrorHandler>,
{
    let mut reserved_middleware: Option<&FileEntry> = None;
    let mut reserved_error: Option<&FileEntry> = None;
    let mut pre_files: Vec<&FileEntry> = Vec::new();
    let mut post_files: Vec<&FileEntry> = Vec::new();
    let mut children: Vec<Child<'_>> = Vec::new();
    let mut bindings: Vec<(RouteMethod, String, PathBuf)> = Vec::new();

    for entry in entries {
        match entry {
            FileSystemEntry::File(file) => {
                if file.name == RESERVED_MIDDLEWARE {
                    if reserved_middleware.is_none() {
                        reserved_middleware = Some(file);
                    }
                    continue;
                }
                if file.name == RESERVED_ERROR {
                    if reserved_error.is_none() {
                        reserved_error = Some(file);
                    }
                    continue;
                }
                let Some(role) = file.name.split('.').nth(1) else {
                    warn!(file = %file.name, "skipping file with invalid name format");
                    continue;
                };
                let Some(method) = RouteMethod::from_segment(role) else {
                    warn!(file = %file.name, role, "skipping file with unknown method segment");
                    continue;
                };
                match method {
                    RouteMethod::Middleware => pre_files.push(file),
                    RouteMethod::Error => post_files.push(file),
                    verb => {
                        let pattern = path_pattern(&format!("/{}", file.name));
                        bindings.push((verb, pattern.clone(), file.path.clone()));
                        children.push(Child::Verb(file, verb, pattern));
                    }
                }
            }
            FileSystemEntry::Directory(dir) => {
                let pattern = path_pattern(&format!("/{}", dir.name));
                children.push(Child::Scope(dir, pattern));
            }
        }
    }

    // Fail before any side effect on the router.
    reject_conflicting_bindings(&bindings)?;

    if let Some(file) = reserved_middleware {
        let exports = loader.load(&file.path)?;
        match exports.middleware {
            Some(middleware) => host.attach(router, middleware),
            None => {
                warn!(file = %file.path.display(), "reserved middleware file exports no middleware")
            }
        }
    }
    for file in pre_files {
        let exports = loader.load(&file.path)?;
        match exports.middleware {
            Some(middleware) => host.attach(router, middleware),
            None => warn!(file = %file.path.display(), "middleware file exports no middleware"),
        }
    }

    for child in children {
        match child {
            Child::Verb(file, method, pattern) => {
                let exports = loader.load(&file.path)?;
                let mut bound = false;
                for (exported, handler) in exports.handlers {
                    if exported == method {
                        host.bind(router, method, &pattern, handler);
                        bound = true;
                    }
                }
                if !bound {
                    warn!(
                        file = %file.path.display(),
                        method = %method,
                        "module does not export a handler for its method suffix"
                    );
                }
            }
            Child::Scope(dir, pattern) => {
                let mut sub = host.create_router();
                attach_scope(host, loader, &mut sub, &dir.children)?;
                host.mount(router, &pattern, sub);
            }
        }
    }

    for file in post_files {
        let exports = loader.load(&file.path)?;
        match exports.error {
            Some(error) => host.attach_error(router, error),
            None => warn!(file = %file.path.display(), "error file exports no error middleware"),
        }
    }
    if let Some(file) = reserved_error {
        let exports = loader.load(&file.path)?;
        match exports.error {
            Some(error) => host.attach_error(router, error),
            None => {
                warn!(file = %file.path.display(), "reserved error file exports no error middleware")
            }
        }
    }

    Ok(())
}
