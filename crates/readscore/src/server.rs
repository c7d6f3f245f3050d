//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes readability scoring to MCP clients over stdio. The server is a
//! presentation layer: each `#[tool]` method delegates to `readscore_core`
//! and converts errors to `McpError`.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use readscore_core::{AnalysisError, ReadabilityReport, SelectedScores, Selection, readability};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `score_readability` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ScoreReadabilityParams {
    /// The text to analyze.
    pub text: String,
    /// Comma-separated scores to report: ARI, FK, SMOG, CL, or all.
    /// Omit to use the server default.
    pub scores: Option<String>,
}

/// JSON payload returned by `score_readability`.
#[derive(Serialize)]
struct ScoreResponse {
    #[serde(flatten)]
    report: ReadabilityReport,
    selected: SelectedScores,
}

/// MCP server exposing readability scoring to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input_bytes: Option<usize>,
    default_selection: Selection,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

fn analysis_error(err: AnalysisError) -> McpError {
    McpError::invalid_params(err.to_string(), None)
}

#[tool_router]
impl ProjectServer {
    /// Create a new MCP server instance with no input limit and `all` selected.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes: None,
            default_selection: Selection::all(),
        }
    }

    /// Reject texts larger than `max` bytes.
    #[must_use]
    pub fn with_max_input_bytes(mut self, max: Option<usize>) -> Self {
        self.max_input_bytes = max;
        self
    }

    /// Scores reported when a call omits `scores`.
    #[must_use]
    pub fn with_default_selection(mut self, selection: Selection) -> Self {
        self.default_selection = selection;
        self
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score text with ARI, Flesch-Kincaid, SMOG, and Coleman-Liau.
    #[tool(
        description = "Score readability of text. Returns word, sentence, character, and syllable counts plus ARI, Flesch-Kincaid, SMOG, and Coleman-Liau scores with estimated reader ages."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn score_readability(
        &self,
        Parameters(params): Parameters<ScoreReadabilityParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "score_readability", scores = ?params.scores, "executing MCP tool");

        if let Some(max) = self.max_input_bytes
            && params.text.len() > max
        {
            return Err(McpError::invalid_params(
                format!(
                    "input too large: {} bytes (limit: {max} bytes)",
                    params.text.len()
                ),
                None,
            ));
        }

        let selection = match params.scores.as_deref() {
            Some(scores) => Selection::parse(scores).map_err(analysis_error)?,
            None => self.default_selection.clone(),
        };
        let report = readability::analyze(&params.text).map_err(analysis_error)?;
        let selected = report.select(&selection);

        let json = serde_json::to_string_pretty(&ScoreResponse { report, selected })
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "score_readability", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use score_readability to compute ARI, FK, SMOG, and CL scores with reader ages.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
