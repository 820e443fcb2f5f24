//! # CLI
//!
//! The `ferroute-gen` binary drives the compiler from the command line:
//!
//! - `generate` - scan a routes directory, compile it, and write the
//!   `index.rs` router-construction source
//! - `routes` - print the compiled route table, either as a readable
//!   listing or as JSON
//!
//! ```bash
//! ferroute-gen generate --dir routes
//! ferroute-gen routes --dir routes --json
//! ```

mod commands;

pub use commands::{run_cli, Cli, Commands};
