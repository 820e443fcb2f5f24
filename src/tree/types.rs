use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Reserved whole-name for a directory-scoped pre-middleware file.
pub const RESERVED_MIDDLEWARE: &str = "_middleware";
/// Reserved whole-name for a directory-scoped error-middleware file.
pub const RESERVED_ERROR: &str = "_error";

/// Whether a file stem is one of the reserved scope names
pub fn is_reserved_stem(stem: &str) -> bool {
    stem == RESERVED_MIDDLEWARE || stem == RESERVED_ERROR
}

/// Classification of a route file, taken from the second dot-segment of its
/// name
///
/// Seven HTTP verbs plus the two structural roles. Structural roles
/// contribute to a scope's middleware lists and never produce a verb binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    Middleware,
    Error,
}

impl RouteMethod {
    /// Parse a filename dot-segment into a method, `None` for anything
    /// outside the fixed set
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "get" => Some(Self::Get),
            "post" => Some(Self::Post),
            "put" => Some(Self::Put),
            "patch" => Some(Self::Patch),
            "delete" => Some(Self::Delete),
            "head" => Some(Self::Head),
            "options" => Some(Self::Options),
            "middleware" => Some(Self::Middleware),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
            Self::Head => "head",
            Self::Options => "options",
            Self::Middleware => "middleware",
            Self::Error => "error",
        }
    }

    /// Variant path used when the method is spelled out in generated source
    pub(crate) fn variant_name(&self) -> &'static str {
        match self {
            Self::Get => "Get",
            Self::Post => "Post",
            Self::Put => "Put",
            Self::Patch => "Patch",
            Self::Delete => "Delete",
            Self::Head => "Head",
            Self::Options => "Options",
            Self::Middleware => "Middleware",
            Self::Error => "Error",
        }
    }

    /// Whether this method maps to an HTTP verb binding
    pub fn is_verb(&self) -> bool {
        !self.is_structural()
    }

    /// Whether this is one of the structural roles
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Middleware | Self::Error)
    }
}

impl fmt::Display for RouteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of the compiled route tree
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Route {
    /// Terminal node, one per concrete handler file
    End(EndRoute),
    /// Scope node, one per directory (or the synthetic root)
    Middleware(MiddlewareRoute),
}

/// Terminal route bound to a single handler file
#[derive(Debug, Clone, Serialize)]
pub struct EndRoute {
    /// Handler file this route was compiled from
    pub source_file: PathBuf,
    /// Normalized pattern, local to the enclosing scope
    pub route_pattern: String,
    /// Generated identifier the materializers refer to the handler by
    pub handler_symbol: String,
    pub method: RouteMethod,
}

/// Scope owning pre/post middleware lists and child routes
///
/// Middleware symbols appear in their directory-enumeration order; that order
/// is the execution order.
#[derive(Debug, Clone, Serialize)]
pub struct MiddlewareRoute {
    pub source_dir: PathBuf,
    pub route_pattern: String,
    pub pre_middlewares: Vec<String>,
    pub post_middlewares: Vec<String>,
    pub children: Vec<Route>,
}

impl MiddlewareRoute {
    /// Synthetic root scope for a compilation pass
    pub fn root(dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: dir.into(),
            route_pattern: "/".to_string(),
            pre_middlewares: Vec::new(),
            post_middlewares: Vec::new(),
            children: Vec::new(),
        }
    }
}
