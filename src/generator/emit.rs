use askama::Template;
use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use anyhow::Context;

use crate::config::{ModuleStyle, RouterOptions};
use crate::scan::FileSystemEntry;
use crate::symbols::SymbolGenerator;
use crate::tree::{build_routes, MiddlewareRoute, Route};

/// The original emission joins sections with blank separators; collapse any
/// run of them back to a single blank line.
static BLANK_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("blank-run regex is valid"));

#[derive(Template)]
#[template(path = "router.rs.txt", escape = "none")]
struct RouterSourceTemplate<'a> {
    generated_at: String,
    imports: &'a str,
    handler_type: &'a str,
    error_handler_type: &'a str,
    body: &'a str,
}

/// Emits the router-construction source for one compilation pass
///
/// Owns the symbol generator for the pass: handler symbols are assigned
/// during tree building, sub-router symbols during emission, all drawn from
/// the same collision-free sequence.
pub struct CodeGenerator<'a> {
    options: &'a RouterOptions,
    symbols: SymbolGenerator,
}

impl<'a> CodeGenerator<'a> {
    pub fn new(options: &'a RouterOptions) -> Self {
        Self {
            options,
            symbols: SymbolGenerator::new(),
        }
    }

    /// Compile `entries` and render the full generated-file content
    pub fn generate_source(&mut self, entries: &[FileSystemEntry]) -> anyhow::Result<String> {
        let mut base = MiddlewareRoute::root(self.options.dir.clone());
        let children = build_routes(entries, Some(&mut base), &mut self.symbols)
            .context("route generation failed")?;
        base.children = children;

        let imports = self.render_imports(&base.children);

        let root_symbol = self.symbols.next_symbol();
        let mut body = String::new();
        body.push_str(&format!("let mut {root_symbol} = host.create_router();\n"));
        body.push_str(&self.render_route(&root_symbol, &Route::Middleware(base)));
        body.push('\n');
        body.push_str(&root_symbol);
        let body = indent(&body, 4);

        let rendered = RouterSourceTemplate {
            generated_at: Local::now().to_rfc2822(),
            imports: &imports,
            handler_type: &self.options.handler_type,
            error_handler_type: &self.options.error_handler_type,
            body: body.trim_end(),
        }
        .render()?;

        Ok(BLANK_RUNS.replace_all(&rendered, "\n\n").into_owned())
    }

    /// One import statement per end route, depth-first
    fn render_imports(&self, routes: &[Route]) -> String {
        let mut lines = Vec::new();
        self.collect_imports(routes, &mut lines);
        lines.join("\n")
    }

    fn collect_imports(&self, routes: &[Route], out: &mut Vec<String>) {
        for route in routes {
            match route {
                Route::End(end) => {
                    out.push(self.import_line(&end.handler_symbol, &end.source_file))
                }
                Route::Middleware(scope) => self.collect_imports(&scope.children, out),
            }
        }
    }

    fn import_line(&self, symbol: &str, file: &Path) -> String {
        let relative = file.strip_prefix(&self.options.dir).unwrap_or(file);
        let relative = relative.to_string_lossy().replace('\\', "/");
        match self.options.module_style {
            ModuleStyle::PathAttribute => format!("#[path = {relative:?}]\nmod {symbol};"),
            ModuleStyle::IncludeMacro => {
                format!("mod {symbol} {{ include!({relative:?}); }}")
            }
        }
    }

    /// Emit the construction statements for one route
    ///
    /// An end route is a single bind statement, suppressed entirely for
    /// structural roles. A scope emits its five-step block: creation,
    /// pre-middleware attaches, children, post-middleware attaches, mount.
    fn render_route(&mut self, router_symbol: &str, route: &Route) -> String {
        match route {
            Route::End(end) => {
                if end.method.is_structural() {
                    return String::new();
                }
                format!(
                    "host.bind(&mut {router_symbol}, RouteMethod::{}, {:?}, {}::handler);",
                    end.method.variant_name(),
                    end.route_pattern,
                    end.handler_symbol
                )
            }
            Route::Middleware(scope) => {
                let info = format!("// {}", self.relative_display(&scope.source_dir));
                let sub_symbol = self.symbols.next_symbol();
                let creation = format!("let mut {sub_symbol} = host.create_router();");

                let pre: Vec<String> = scope
                    .pre_middlewares
                    .iter()
                    .map(|symbol| format!("host.attach(&mut {sub_symbol}, {symbol}::handler);"))
                    .collect();

                let mut children = Vec::new();
                for child in &scope.children {
                    let code = self.render_route(&sub_symbol, child);
                    if !code.is_empty() {
                        children.push(code);
                    }
                }

                let post: Vec<String> = scope
                    .post_middlewares
                    .iter()
                    .map(|symbol| {
                        format!("host.attach_error(&mut {sub_symbol}, {symbol}::handler);")
                    })
                    .collect();

                let mount = format!(
                    "host.mount(&mut {router_symbol}, {:?}, {sub_symbol});",
                    scope.route_pattern
                );

                [
                    String::new(),
                    info,
                    creation,
                    pre.join("\n"),
                    children.join("\n"),
                    post.join("\n"),
                    mount,
                    String::new(),
                ]
                .join("\n")
            }
        }
    }

    fn relative_display(&self, dir: &Path) -> String {
        let relative = dir.strip_prefix(&self.options.dir).unwrap_or(dir);
        if relative.as_os_str().is_empty() || dir == self.options.dir {
            "(root)".to_string()
        } else {
            relative.to_string_lossy().replace('\\', "/")
        }
    }
}

fn indent(source: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    source
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
