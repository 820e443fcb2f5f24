//! # Route tree
//!
//! The compiler core: turns the scanned entry tree into a tree of
//! [`Route`] nodes with correctly scoped and ordered middleware lists.
//!
//! Every directory (plus one synthetic root) becomes a [`MiddlewareRoute`]
//! scope owning pre/post middleware lists and child routes; every admitted
//! file becomes an [`EndRoute`] classified by the method suffix of its name.
//! The [`pattern`] module holds the pure path normalizer shared by both
//! materializers - routing correctness depends on it being bit-identical
//! across the code-generation and direct-attachment paths.

mod build;
pub mod pattern;
mod types;

pub use build::{build_route_tree, build_routes};
pub(crate) use build::reject_conflicting_bindings;
pub use pattern::path_pattern;
pub use types::{
    is_reserved_stem, EndRoute, MiddlewareRoute, Route, RouteMethod, RESERVED_ERROR,
    RESERVED_MIDDLEWARE,
};
