//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the humanizer over stdio so assistants can rewrite text in place.
//! Every tool delegates to `humanizer-core`; this module only maps parameters
//! and errors.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use humanizer_core::config::DEFAULT_MAX_INPUT_BYTES;
use humanizer_core::humanizer::expand_contractions;
use humanizer_core::stats::text_stats;
use humanizer_core::{HumanizeOptions, HumanizeReport, HumanizerConfig, TextHumanizer};

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

/// Parameters for the `humanize_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct HumanizeTextParams {
    /// The text to rewrite.
    pub text: String,
    /// Convert some clauses to the passive voice. Defaults to the server setting.
    pub use_passive: Option<bool>,
    /// Replace some content words with synonyms. Defaults to the server setting.
    pub use_synonyms: Option<bool>,
    /// Seed for reproducible output. Defaults to the server's configured seed.
    pub seed: Option<u64>,
}

/// Parameters for tools that take only text.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextParams {
    /// The text to process.
    pub text: String,
}

/// MCP server exposing the humanizer.
#[derive(Clone)]
pub struct HumanizerServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    humanizer: TextHumanizer,
    options: HumanizeOptions,
    max_input_bytes: Option<usize>,
    default_seed: Option<u64>,
}

impl Default for HumanizerServer {
    fn default() -> Self {
        Self::new(
            HumanizerConfig::recommended(),
            HumanizeOptions::default(),
            Some(DEFAULT_MAX_INPUT_BYTES),
        )
    }
}

fn internal(e: impl std::fmt::Display) -> McpError {
    McpError::internal_error(e.to_string(), None)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl HumanizerServer {
    /// Create a server with the given probabilities, default stages and input limit.
    pub fn new(
        config: HumanizerConfig,
        options: HumanizeOptions,
        max_input_bytes: Option<usize>,
    ) -> Self {
        Self {
            tool_router: Self::tool_router(),
            humanizer: TextHumanizer::new(config),
            options,
            max_input_bytes,
            default_seed: None,
        }
    }

    /// Seed used by `humanize_text` calls that do not pass one.
    #[must_use]
    pub fn with_default_seed(mut self, seed: Option<u64>) -> Self {
        self.default_seed = seed;
        self
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let config = self.humanizer.config();
        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "config": config,
            "options": self.options,
        });

        let text = if params.format == "json" {
            to_json(&info)?
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

    /// Rewrite text into a more formal, academic register.
    #[tool(
        description = "Rewrite informal text into a formal academic register: expands contractions, adds transitions, and optionally uses passive voice and synonyms. Returns the text with word and sentence counts."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn humanize_text(
        &self,
        Parameters(params): Parameters<HumanizeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let options = HumanizeOptions::new(
            params.use_passive.unwrap_or(self.options.use_passive),
            params.use_synonyms.unwrap_or(self.options.use_synonyms),
        );
        let seed = params.seed.or(self.default_seed);
        tracing::debug!(tool = "humanize_text", ?options, ?seed, "executing MCP tool");

        let output = match seed {
            Some(seed) => self.humanizer.humanize_seeded(&params.text, options, seed),
            None => self.humanizer.humanize(&params.text, options),
        };
        let report = HumanizeReport::new(
            self.humanizer.tagger(),
            &params.text,
            output,
            options,
            seed,
        )
        .map_err(internal)?;

        tracing::info!(
            tool = "humanize_text",
            words = report.output.words,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(
            &report,
        )?)]))
    }

    /// Expand contractions only.
    #[tool(description = "Expand contractions (don't -> do not, gonna -> going to) without other changes.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn expand_contractions(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        tracing::debug!(tool = "expand_contractions", "executing MCP tool");
        let text = expand_contractions(&params.text);
        tracing::info!(tool = "expand_contractions", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Count words and sentences.
    #[tool(description = "Count words and sentences in text.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn text_stats(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        tracing::debug!(tool = "text_stats", "executing MCP tool");
        let stats = text_stats(self.humanizer.tagger(), &params.text).map_err(internal)?;
        tracing::info!(
            tool = "text_stats",
            words = stats.words,
            sentences = stats.sentences,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(
            &stats,
        )?)]))
    }
}

#[tool_handler]
impl ServerHandler for HumanizerServer {
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
                "{} MCP server. Use humanize_text to rewrite informal text into an academic register.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
