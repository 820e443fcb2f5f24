use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ModuleStyle, RouterOptions};
use crate::generator;
use crate::scan::scan_dir;
use crate::symbols::SymbolGenerator;
use crate::tree::{build_route_tree, path_pattern, MiddlewareRoute, Route};

#[derive(Parser)]
#[command(name = "ferroute")]
#[command(about = "Filesystem route compiler", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate router-construction source for a routes directory
    Generate {
        /// Routes directory to compile
        #[arg(short, long)]
        dir: PathBuf,

        /// Emit include!-style imports instead of #[path] attributes
        #[arg(long, default_value_t = false)]
        include_modules: bool,

        /// Allowed handler file extensions
        #[arg(long = "ext", value_delimiter = ',', default_value = "rs")]
        extensions: Vec<String>,

        /// Handler type named in the generated bounds
        #[arg(long, default_value = "crate::Handler")]
        handler_type: String,

        /// Error-middleware type named in the generated bounds
        #[arg(long, default_value = "crate::ErrorHandler")]
        error_handler_type: String,
    },
    /// Print the compiled route table
    Routes {
        /// Routes directory to compile
        #[arg(short, long)]
        dir: PathBuf,

        /// Allowed handler file extensions
        #[arg(long = "ext", value_delimiter = ',', default_value = "rs")]
        extensions: Vec<String>,

        /// Emit the route tree as JSON instead of a listing
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            dir,
            include_modules,
            extensions,
            handler_type,
            error_handler_type,
        } => {
            let mut options = RouterOptions::new(dir);
            options.extensions = extensions;
            options.handler_type = handler_type;
            options.error_handler_type = error_handler_type;
            options.module_style = if include_modules {
                ModuleStyle::IncludeMacro
            } else {
                ModuleStyle::PathAttribute
            };

            let artifact = generator::generate(&options)?;
            println!("generated {}", artifact.display());
            Ok(())
        }
        Commands::Routes {
            dir,
            extensions,
            json,
        } => {
            let mut options = RouterOptions::new(dir);
            options.extensions = extensions;

            let entries = scan_dir(&options.dir, &options)?;
            let mut symbols = SymbolGenerator::new();
            let tree = build_route_tree(&entries, &options, &mut symbols)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&tree)?);
            } else {
                dump_routes(&tree, "");
            }
            Ok(())
        }
    }
}

/// Print one line per verb binding, with patterns joined down the scopes
fn dump_routes(scope: &MiddlewareRoute, prefix: &str) {
    let joined = join_patterns(prefix, &scope.route_pattern);
    for route in &scope.children {
        match route {
            Route::End(end) if end.method.is_verb() => {
                println!(
                    "{:7} {} -> {}",
                    end.method.as_str().to_uppercase(),
                    join_patterns(&joined, &end.route_pattern),
                    end.source_file.display()
                );
            }
            Route::End(_) => {}
            Route::Middleware(child) => dump_routes(child, &joined),
        }
    }
}

fn join_patterns(left: &str, right: &str) -> String {
    path_pattern(&format!("{left}/{right}"))
}
