//! GoDoc MCP Server
//!
//! Serves structured documentation about a Go codebase to AI agents via
//! the MCP protocol.
//!
//! ## Tools
//!
//! - `golang_list_packages` - loaded packages with their package comments
//! - `golang_inspect_package` - exported structs, functions, and methods
//! - `golang_get_struct_doc` - struct fields, methods, and comments
//! - `golang_get_func_doc` - function signature, comment, usage examples
//! - `golang_get_method_doc` - method signature, comment, usage examples
//! - `golang_get_const_and_var_doc` - package constants and variables
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "godoc": {
//!       "command": "godoc-mcp",
//!       "args": ["--root", "/path/to/go/project"]
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use clap::Parser;
use godoc_engine::DocEngine;
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use std::sync::Arc;

mod runtime_env;
mod tools;

use tools::GodocService;

#[derive(Parser)]
#[command(name = "godoc-mcp", about = "MCP server for Go package documentation")]
struct Args {
    /// Root directory path
    #[arg(long)]
    root: Option<String>,

    /// Specific package directory (optional)
    #[arg(long)]
    pkg: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();
    let root = runtime_env::resolve_root_dir(args.root.as_deref());
    let pattern = runtime_env::resolve_pkg_pattern(args.pkg.as_deref());

    log::info!("Loading Go packages from {}", root.display());
    let packages = godoc_loader::load(&root, &pattern)?;
    let engine = Arc::new(DocEngine::new(packages));
    log::info!("Starting GoDoc MCP server with {} package(s)", engine.len());

    let service = GodocService::new(engine);
    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("GoDoc MCP server stopped");
    Ok(())
}
