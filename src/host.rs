//! # Host capabilities
//!
//! ferroute never talks to an HTTP framework directly. The two seams it
//! needs are expressed as traits and injected by the embedding application:
//!
//! - [`Host`] is the opaque routing primitive: create a sub-router with
//!   parameter-inheriting semantics, bind a handler to a verb and pattern,
//!   attach middleware, and mount a sub-router onto a parent.
//! - [`ModuleLoader`] answers "given a resolved path, what does this route
//!   file export?" - the runtime equivalent of the static imports the code
//!   generator emits.
//!
//! Both traits are deliberately small so a test double fits in a few lines;
//! the integration suite drives the whole direct-attachment path through a
//! recording host and a static loader.

use std::path::Path;

use crate::tree::RouteMethod;

/// The opaque routing primitive the materializers target
///
/// Error middleware is a distinct associated type with its own attach
/// operation: an error interceptor takes the failure as an extra leading
/// argument and must never be confused with ordinary middleware by the type
/// system.
pub trait Host {
    /// Router object built and returned by a compilation pass
    type Router;
    /// Ordinary handler/middleware value
    type Handler;
    /// Error-intercepting middleware value
    type ErrorHandler;

    /// Create a fresh router; nested routers must inherit path parameters
    /// from the patterns they are mounted under
    fn create_router(&mut self) -> Self::Router;

    /// Bind a handler to a verb and pattern on `router`
    fn bind(
        &mut self,
        router: &mut Self::Router,
        method: RouteMethod,
        pattern: &str,
        handler: Self::Handler,
    );

    /// Attach a middleware to run before the router's own routes
    fn attach(&mut self, router: &mut Self::Router, middleware: Self::Handler);

    /// Attach an error interceptor to run after the router's own routes
    fn attach_error(&mut self, router: &mut Self::Router, middleware: Self::ErrorHandler);

    /// Mount `child` onto `parent` at `pattern`
    fn mount(&mut self, parent: &mut Self::Router, pattern: &str, child: Self::Router);

    /// Side-effect-only request observer, attached once at the outermost
    /// scope when request logging is enabled
    fn request_observer(&mut self) -> Option<Self::Handler> {
        None
    }
}

/// Everything a route file exports
#[derive(Debug, Clone)]
pub struct ModuleExports<H, E> {
    /// Verb handlers exported by the module, e.g. `(Get, handler)`
    pub handlers: Vec<(RouteMethod, H)>,
    /// Ordinary middleware export, used by `.middleware.` files and the
    /// reserved `_middleware` scope file
    pub middleware: Option<H>,
    /// Error-middleware export, used by `.error.` files and the reserved
    /// `_error` scope file
    pub error: Option<E>,
}

impl<H, E> ModuleExports<H, E> {
    /// Exports of a module providing a single verb handler
    pub fn verb(method: RouteMethod, handler: H) -> Self {
        Self {
            handlers: vec![(method, handler)],
            ..Self::default()
        }
    }

    /// Exports of a plain middleware module
    pub fn middleware(middleware: H) -> Self {
        Self {
            middleware: Some(middleware),
            ..Self::default()
        }
    }

    /// Exports of an error-middleware module
    pub fn error(error: E) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }
}

impl<H, E> Default for ModuleExports<H, E> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
            middleware: None,
            error: None,
        }
    }
}

/// Capability for loading a route file's exports at attachment time
///
/// Implementations decide what "loading" means for their target: a compiled
/// registration table, a plugin loader, or a fixture map in tests.
pub trait ModuleLoader {
    type Handler;
    type ErrorHandler;

    /// Resolve `path` to its exported handler/middleware set
    ///
    /// # Errors
    ///
    /// A failed load is a materialization failure and aborts the pass.
    fn load(
        &self,
        path: &Path,
    ) -> anyhow::Result<ModuleExports<Self::Handler, Self::ErrorHandler>>;
}
