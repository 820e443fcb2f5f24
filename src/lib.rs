//! # ferroute
//!
//! **ferroute** compiles a directory tree of convention-named route-handler
//! files into a runnable HTTP router. Routes mirror the file layout instead of
//! being registered by hand: `routes/users/index.get.rs` becomes `GET /users`,
//! `routes/users/[id].get.rs` becomes `GET /users/:id`, and middleware scopes
//! follow directories.
//!
//! ## Overview
//!
//! The compiler is a sequential pipeline:
//!
//! - **[`scan`]** - walk the routes directory into an ordered tree of
//!   file/directory entries, filtered by extension and naming rules
//! - **[`tree`]** - interpret the naming convention into a route tree with
//!   correctly scoped and ordered middleware lists
//! - **[`generator`]** - materialize the route tree as importable Rust source
//!   that reconstructs the router (`<routes>/index.rs`)
//! - **[`attach`]** - materialize the same construction directly against a
//!   live router object, loading handler modules through a capability
//! - **[`symbols`]** - deterministic base-52 identifier sequence for
//!   generated code
//! - **[`host`]** - the capability seams: the opaque routing primitive and
//!   the module loader, both injectable for testing
//!
//! Both materializers honor the same ordering contract per scope: attach
//! pre-middlewares, emit children in directory order, attach post-middlewares,
//! mount the scope onto its parent.
//!
//! ## Filename convention
//!
//! `<segment>.<method>.<ext>` where `method` is one of `get`, `post`, `put`,
//! `patch`, `delete`, `head`, `options`, `middleware`, `error`. The reserved
//! whole names `_middleware` and `_error` denote directory-scoped structural
//! handlers. A path component `[name]` is the path parameter `:name`; a
//! component named `index` collapses to its scope root.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use ferroute::{generate, RouterOptions};
//!
//! // Write routes/index.rs, ready to declare with `#[path = "routes/index.rs"] mod routes;`
//! let options = RouterOptions::new("routes");
//! let artifact = generate(&options)?;
//! ```
//!
//! Or attach at runtime, without an intermediate source file:
//!
//! ```rust,ignore
//! use ferroute::{mount_routes, RouterOptions};
//!
//! let options = RouterOptions::new("routes");
//! mount_routes(&mut host, &loader, &mut app, &options)?;
//! ```
//!
//! The entry tree and route tree are rebuilt from scratch on every pass; the
//! generated source file is the only persisted artifact and is overwritten
//! atomically each run.

pub mod attach;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod host;
pub mod scan;
pub mod symbols;
pub mod tree;

pub use attach::{attach_routes, build_router, mount_routes};
pub use config::{ModuleStyle, RouterOptions};
pub use error::RouteError;
pub use generator::{generate, generate_router_source};
pub use host::{Host, ModuleExports, ModuleLoader};
pub use scan::{scan_dir, DirectoryEntry, FileEntry, FileSystemEntry};
pub use symbols::SymbolGenerator;
pub use tree::{
    build_route_tree, build_routes, path_pattern, EndRoute, MiddlewareRoute, Route, RouteMethod,
};
