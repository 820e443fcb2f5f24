#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use ferroute::host::{Host, ModuleExports, ModuleLoader};
use ferroute::scan::{DirectoryEntry, FileEntry, FileSystemEntry};
use ferroute::tree::RouteMethod;

/// One recorded router operation, in the order the host received it.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Attach(String),
    AttachError(String),
    Bind(RouteMethod, String, String),
    Mount(String, Vec<Op>),
}

/// Router double that records every operation performed on it.
#[derive(Debug, Default)]
pub struct TestRouter {
    pub ops: Vec<Op>,
}

/// Recording host: handlers are plain labels, mounting folds the child's
/// recording into the parent.
#[derive(Debug, Default)]
pub struct TestHost {
    pub routers_created: usize,
}

impl Host for TestHost {
    type Router = TestRouter;
    type Handler = String;
    type ErrorHandler = String;

    fn create_router(&mut self) -> TestRouter {
        self.routers_created += 1;
        TestRouter::default()
    }

    fn bind(
        &mut self,
        router: &mut TestRouter,
        method: RouteMethod,
        pattern: &str,
        handler: String,
    ) {
        router.ops.push(Op::Bind(method, pattern.to_string(), handler));
    }

    fn attach(&mut self, router: &mut TestRouter, middleware: String) {
        router.ops.push(Op::Attach(middleware));
    }

    fn attach_error(&mut self, router: &mut TestRouter, middleware: String) {
        router.ops.push(Op::AttachError(middleware));
    }

    fn mount(&mut self, parent: &mut TestRouter, pattern: &str, child: TestRouter) {
        parent.ops.push(Op::Mount(pattern.to_string(), child.ops));
    }

    fn request_observer(&mut self) -> Option<String> {
        Some("request_observer".to_string())
    }
}

/// Loader double backed by a fixture map from path to exports.
#[derive(Debug, Default)]
pub struct StaticModules {
    pub modules: HashMap<PathBuf, ModuleExports<String, String>>,
}

impl StaticModules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verb(mut self, path: &str, method: RouteMethod, handler: &str) -> Self {
        self.modules.insert(
            PathBuf::from(path),
            ModuleExports::verb(method, handler.to_string()),
        );
        self
    }

    pub fn with_middleware(mut self, path: &str, name: &str) -> Self {
        self.modules
            .insert(PathBuf::from(path), ModuleExports::middleware(name.to_string()));
        self
    }

    pub fn with_error(mut self, path: &str, name: &str) -> Self {
        self.modules
            .insert(PathBuf::from(path), ModuleExports::error(name.to_string()));
        self
    }

    pub fn with_exports(mut self, path: &str, exports: ModuleExports<String, String>) -> Self {
        self.modules.insert(PathBuf::from(path), exports);
        self
    }
}

impl ModuleLoader for StaticModules {
    type Handler = String;
    type ErrorHandler = String;

    fn load(&self, path: &Path) -> anyhow::Result<ModuleExports<String, String>> {
        self.modules
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no module registered for '{}'", path.display()))
    }
}

/// Entry-tree fixture helpers, mirroring what the scanner would produce.
pub fn file(name: &str, path: &str) -> FileSystemEntry {
    FileSystemEntry::File(FileEntry {
        name: name.to_string(),
        path: PathBuf::from(path),
        extension: "rs".to_string(),
    })
}

pub fn dir(name: &str, path: &str, children: Vec<FileSystemEntry>) -> FileSystemEntry {
    FileSystemEntry::Directory(DirectoryEntry {
        name: name.to_string(),
        path: PathBuf::from(path),
        children,
    })
}
