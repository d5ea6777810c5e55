//! MCP Server
//!
//! 通过 stdio 暴露 list_voices 与 text_to_speech 两个工具

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
    transport::stdio,
    ServerHandler, ServiceExt,
};
use tracing::info;

use super::params::{ListVoicesParams, TextToSpeechParams};
use crate::application::ToolService;

const INSTRUCTIONS: &str = "Tools for Resemble AI: list the available voice models and \
synthesize speech from text. Every tool returns plain text; failures start with 'Error occurred'.";

/// MCP 工具服务器
#[derive(Clone)]
pub struct SpeechToolServer {
    tools: Arc<ToolService>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SpeechToolServer {
    pub fn new(tools: Arc<ToolService>) -> Self {
        Self {
            tools,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Get a page of the voice models available in Resemble AI. \
        Arguments: page (starts from 1), page_size (10 to 1000). \
        Returns the name, id and type of every voice on the page as text."
    )]
    async fn list_voices(&self, Parameters(params): Parameters<ListVoicesParams>) -> String {
        self.tools.list_voices(params.into()).await
    }

    #[tool(
        description = "Synthesize speech from text with a Resemble AI voice. \
        Arguments: voice_id (id of the voice), text (at most 3000 characters), \
        sample_rate (8000, 16000, 22050, 32000, 44100 or 48000), \
        encoding (gzip, deflate or br). Returns the title and duration of the recording; \
        the audio itself is stored in the Resemble project."
    )]
    async fn text_to_speech(&self, Parameters(params): Parameters<TextToSpeechParams>) -> String {
        self.tools.text_to_speech(params.into()).await
    }
}

impl SpeechToolServer {
    /// 工具目录（名称、描述、参数 Schema）
    pub fn tool_catalog() -> Vec<Tool> {
        Self::tool_router().list_all()
    }

    /// 在 stdio 上运行，直到对端关闭
    pub async fn serve_stdio(self) -> anyhow::Result<()> {
        info!("Starting MCP server on stdio");

        let service = self
            .serve(stdio())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to start MCP server: {}", e))?;
        let reason = service.waiting().await?;

        info!(reason = ?reason, "MCP server stopped");
        Ok(())
    }
}

#[tool_handler]
impl ServerHandler for SpeechToolServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}
