use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use tracing::{debug, warn};

use super::pattern::{compare_patterns, path_pattern, PatternOverlap};
use super::types::{is_reserved_stem, EndRoute, MiddlewareRoute, Route, RouteMethod};
use crate::config::RouterOptions;
use crate::error::RouteError;
use crate::scan::FileSystemEntry;
use crate::symbols::SymbolGenerator;

/// Compile an entry tree into the route tree, rooted at a synthetic scope
///
/// Any error raised during traversal aborts the whole build; a partial tree
/// is never returned.
///
/// # Errors
///
/// Propagates [`RouteError::OrphanStructural`] and
/// [`RouteError::DuplicateBinding`], wrapped with a route-generation context.
pub fn build_route_tree(
    entries: &[FileSystemEntry],
    options: &RouterOptions,
    symbols: &mut SymbolGenerator,
) -> anyhow::Result<MiddlewareRoute> {
    let started = Instant::now();
    let mut root = MiddlewareRoute::root(options.dir.clone());
    let children =
        build_routes(entries, Some(&mut root), symbols).context("route generation failed")?;
    root.children = children;
    debug!(
        child_count = root.children.len(),
        duration_ms = started.elapsed().as_millis() as u64,
        "built route tree"
    );
    Ok(root)
}

/// Build the routes for one level of the entry tree
///
/// Per entry, in enumeration order:
///
/// - a `middleware` file registers its symbol in the parent scope's
///   pre-middleware list, an `error` file in the post-middleware list; both
///   fail without a parent scope
/// - every classified file emits an [`EndRoute`], structural roles included
///   (those are bookkeeping nodes and never verb-bind downstream)
/// - a file whose name does not follow the convention is skipped with a
///   warning
/// - a directory becomes a fresh [`MiddlewareRoute`] scope built from its
///   children
pub fn build_routes(
    entries: &[FileSystemEntry],
    mut parent: Option<&mut MiddlewareRoute>,
    symbols: &mut SymbolGenerator,
) -> anyhow::Result<Vec<Route>> {
    let mut routes = Vec::new();

    for entry in entries {
        match entry {
            FileSystemEntry::File(file) => {
                if is_reserved_stem(&file.name) {
                    // Scope files belong to the direct attacher, not the tree.
                    debug!(file = %file.path.display(), "reserved scope file has no route of its own");
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

                let handler_symbol = symbols.next_symbol();
                if method.is_structural() {
                    let Some(scope) = parent.as_deref_mut() else {
                        return Err(RouteError::OrphanStructural {
                            file: file.path.clone(),
                            role: method,
                        }
                        .into());
                    };
                    match method {
                        RouteMethod::Middleware => {
                            scope.pre_middlewares.push(handler_symbol.clone())
                        }
                        _ => scope.post_middlewares.push(handler_symbol.clone()),
                    }
                }

                routes.push(Route::End(EndRoute {
                    source_file: file.path.clone(),
                    route_pattern: path_pattern(&format!("/{}", file.name)),
                    handler_symbol,
                    method,
                }));
            }
            FileSystemEntry::Directory(dir) => {
                let mut scope = MiddlewareRoute {
                    source_dir: dir.path.clone(),
                    route_pattern: path_pattern(&format!("/{}", dir.name)),
                    pre_middlewares: Vec::new(),
                    post_middlewares: Vec::new(),
                    children: Vec::new(),
                };
                let children = build_routes(&dir.children, Some(&mut scope), symbols)?;
                scope.children = children;
                routes.push(Route::Middleware(scope));
            }
        }
    }

    let bindings: Vec<(RouteMethod, String, PathBuf)> = routes
        .iter()
        .filter_map(|route| match route {
            Route::End(end) if end.method.is_verb() => Some((
                end.method,
                end.route_pattern.clone(),
                end.source_file.clone(),
            )),
            _ => None,
        })
        .collect();
    reject_conflicting_bindings(&bindings)?;

    Ok(routes)
}

/// Reject sibling verb bindings whose patterns are fully ambiguous
///
/// Two sibling bindings of the same verb conflict when their patterns are
/// identical after treating every parameter segment as a wildcard. A
/// parameter overlapping a sibling literal is only reported: static routes
/// next to dynamic ones are a routine layout, and which of the two wins is
/// the host router's business.
pub(crate) fn reject_conflicting_bindings(
    bindings: &[(RouteMethod, String, PathBuf)],
) -> Result<(), RouteError> {
    for (i, (method_a, pattern_a, file_a)) in bindings.iter().enumerate() {
        for (method_b, pattern_b, file_b) in &bindings[i + 1..] {
            if method_a != method_b {
                continue;
            }
            match compare_patterns(pattern_a, pattern_b) {
                PatternOverlap::Identical => {
                    return Err(RouteError::DuplicateBinding {
                        method: *method_a,
                        pattern: pattern_a.clone(),
                        first: file_a.clone(),
                        second: file_b.clone(),
                    });
                }
                PatternOverlap::Shadowing => {
                    warn!(
                        method = %method_a,
                        first = %file_a.display(),
                        second = %file_b.display(),
                        "parameter route overlaps a sibling literal; match precedence is host-defined"
                    );
                }
                PatternOverlap::Distinct => {}
            }
        }
    }
    Ok(())
}
