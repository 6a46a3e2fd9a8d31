//! MCP tools for Go documentation queries.
//!
//! Each tool wraps one engine query and returns its markdown rendering.
//! Query failures (unknown package, wrong symbol kind) become error tool
//! results carrying the engine's message; they never tear down the server.

use godoc_engine::{render, DocEngine};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use std::sync::Arc;

/// GoDoc MCP Service
#[derive(Clone)]
pub struct GodocService {
    /// Immutable engine shared across connections
    engine: Arc<DocEngine>,
    /// Tool router
    tool_router: ToolRouter<Self>,
}

impl GodocService {
    pub fn new(engine: Arc<DocEngine>) -> Self {
        Self {
            engine,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_handler]
impl ServerHandler for GodocService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("GoDoc provides structured documentation for the loaded Go packages. Use 'golang_list_packages' to see what is loaded, 'golang_inspect_package' to enumerate a package's exported symbols, and the get_*_doc tools for detailed documentation with usage examples.".into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

// ============================================================================
// Tool Input Schemas
// ============================================================================

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct InspectPackageRequest {
    /// Package import path
    #[schemars(description = "Package name")]
    pub package_name: String,

    /// Whether comments accompany each listed symbol (default: true)
    #[schemars(description = "Whether to include comments")]
    #[serde(default = "default_true")]
    pub include_comments: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetStructDocRequest {
    #[schemars(description = "Package name where the struct is defined")]
    pub package_name: String,

    #[schemars(description = "Name of the struct")]
    pub struct_name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetFuncDocRequest {
    #[schemars(description = "Package name where the function is defined")]
    pub package_name: String,

    #[schemars(description = "Name of the function")]
    pub func_name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetMethodDocRequest {
    #[schemars(description = "Package name where the method is defined")]
    pub package_name: String,

    #[schemars(description = "Name of the struct that owns the method")]
    pub struct_name: String,

    #[schemars(description = "Name of the method")]
    pub method_name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetConstAndVarDocRequest {
    #[schemars(description = "Package name")]
    pub package_name: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl GodocService {
    /// List loaded packages
    #[tool(description = "Display a list of Go packages and their package comments. You can check the description and purpose of each package.")]
    pub async fn golang_list_packages(&self) -> Result<CallToolResult, McpError> {
        let packages = self.engine.list_packages();
        if packages.is_empty() {
            return Ok(CallToolResult::success(vec![Content::text(
                "No packages loaded.",
            )]));
        }
        Ok(CallToolResult::success(vec![Content::text(
            render::format_package_list(&packages),
        )]))
    }

    /// Enumerate a package's exported symbols
    #[tool(description = "List publicly available structs, methods, and functions in the specified Go package. You can check comments for each element.")]
    pub async fn golang_inspect_package(
        &self,
        Parameters(request): Parameters<InspectPackageRequest>,
    ) -> Result<CallToolResult, McpError> {
        match self.engine.inspect_package(&request.package_name) {
            Ok(inspection) => Ok(CallToolResult::success(vec![Content::text(
                render::format_package_inspection(&inspection, request.include_comments),
            )])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error: {e}"
            ))])),
        }
    }

    /// Struct documentation
    #[tool(description = "Display detailed information about the specified Go struct. You can check the struct's comments, fields, methods, and their comments.")]
    pub async fn golang_get_struct_doc(
        &self,
        Parameters(request): Parameters<GetStructDocRequest>,
    ) -> Result<CallToolResult, McpError> {
        match self
            .engine
            .struct_doc(&request.package_name, &request.struct_name)
        {
            Ok(doc) => Ok(CallToolResult::success(vec![Content::text(
                render::format_struct_doc(&doc),
            )])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error: {e}"
            ))])),
        }
    }

    /// Function documentation with examples
    #[tool(description = "Display detailed information about the specified Go function. You can check the function's signature, comments, and usage examples.")]
    pub async fn golang_get_func_doc(
        &self,
        Parameters(request): Parameters<GetFuncDocRequest>,
    ) -> Result<CallToolResult, McpError> {
        match self
            .engine
            .func_doc(&request.package_name, &request.func_name)
        {
            Ok(doc) => Ok(CallToolResult::success(vec![Content::text(
                render::format_func_doc(&doc),
            )])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error: {e}"
            ))])),
        }
    }

    /// Method documentation with examples
    #[tool(description = "Display detailed information about the specified Go struct method. You can check the method's signature, comments, and usage examples.")]
    pub async fn golang_get_method_doc(
        &self,
        Parameters(request): Parameters<GetMethodDocRequest>,
    ) -> Result<CallToolResult, McpError> {
        match self.engine.method_doc(
            &request.package_name,
            &request.struct_name,
            &request.method_name,
        ) {
            Ok(doc) => Ok(CallToolResult::success(vec![Content::text(
                render::format_method_doc(&doc),
            )])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error: {e}"
            ))])),
        }
    }

    /// Constant and variable documentation
    #[tool(description = "Display detailed information about constants and variables in the specified Go package. You can check the type, value, and comments for each constant and variable.")]
    pub async fn golang_get_const_and_var_doc(
        &self,
        Parameters(request): Parameters<GetConstAndVarDocRequest>,
    ) -> Result<CallToolResult, McpError> {
        match self.engine.const_and_var_doc(&request.package_name) {
            Ok((constants, variables)) => Ok(CallToolResult::success(vec![Content::text(
                render::format_const_and_var_doc(&constants, &variables),
            )])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error: {e}"
            ))])),
        }
    }
}
