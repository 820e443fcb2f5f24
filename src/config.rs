use std::path::PathBuf;

/// Module syntax used for handler imports in the generated source
///
/// Both styles produce byte-identical router construction bodies; only the
/// import statements differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModuleStyle {
    /// `#[path = "users/list.get.rs"] mod a;`
    #[default]
    PathAttribute,
    /// `mod a { include!("users/list.get.rs"); }`
    IncludeMacro,
}

/// Compiler configuration, passed explicitly through every component call
///
/// There is no ambient global: whoever drives a pass owns one of these and
/// hands it down.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Root of the routes directory tree
    pub dir: PathBuf,
    /// Pattern the compiled router is mounted at on its parent
    pub base: String,
    /// Allowed handler file extensions (without the dot)
    pub extensions: Vec<String>,
    /// Import syntax of the generated source
    pub module_style: ModuleStyle,
    /// Concrete handler type the generated source names in its bounds
    pub handler_type: String,
    /// Concrete error-middleware type the generated source names in its bounds
    pub error_handler_type: String,
    /// Attach the host's request observer once at the outermost scope
    pub log_requests: bool,
}

impl RouterOptions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    /// Whether `ext` is one of the allowed handler file extensions
    pub fn allows_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e == ext)
    }
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("routes"),
            base: "/".to_string(),
            extensions: vec!["rs".to_string()],
            module_style: ModuleStyle::default(),
            handler_type: "crate::Handler".to_string(),
            error_handler_type: "crate::ErrorHandler".to_string(),
            log_requests: false,
        }
    }
}
